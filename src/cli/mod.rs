//! CLI support for jsonlogic
//!
//! The `jsonlogic` binary is a thin clap wrapper over these functions, so
//! other tools can run the same commands in-process.

mod apply;
mod docs;
mod inspect;

pub use apply::{ApplyOptions, execute_apply};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use inspect::{execute_rule_like, execute_uses_data};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Evaluation error: {0}")]
    Logic(#[from] crate::LogicError),

    #[error("Invalid JSON in {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown category: '{0}'\nRun 'jsonlogic docs' to see available categories.")]
    UnknownCategory(String),
}

/// Parses one JSON argument into a [`crate::Value`].
pub(crate) fn parse_json(what: &'static str, text: &str) -> Result<crate::Value, CliError> {
    serde_json::from_str::<serde_json::Value>(text)
        .map(crate::Value::from)
        .map_err(|source| CliError::Json { what, source })
}
