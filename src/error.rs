//! Evaluation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogicError {
    /// No registry entry for the operator, or a dotted name that stops
    /// resolving partway. `failed_at` is the prefix up to and including the
    /// segment that could not be resolved.
    #[error("Unrecognized operation {operator}{}", failed_at_suffix(.failed_at))]
    UnrecognizedOperation {
        operator: String,
        failed_at: Option<String>,
    },

    /// A failure raised by an operator implementation, passed through as-is.
    #[error(transparent)]
    Operator(Box<dyn std::error::Error + Send + Sync>),
}

fn failed_at_suffix(failed_at: &Option<String>) -> String {
    match failed_at {
        Some(prefix) => format!(" (failed at {})", prefix),
        None => String::new(),
    }
}

impl LogicError {
    pub fn unrecognized(operator: &str) -> Self {
        LogicError::UnrecognizedOperation {
            operator: operator.to_string(),
            failed_at: None,
        }
    }

    /// Wraps any error (or message) raised inside a custom operator.
    pub fn operator<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        LogicError::Operator(err.into())
    }
}

pub type Result<T> = std::result::Result<T, LogicError>;
