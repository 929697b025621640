//! Evaluate a rule against JSON input

use super::{CliError, parse_json};
use crate::{JsonLogic, Value};

/// Options for the apply command
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// The rule, as JSON text
    pub rule: String,
    /// Data context as JSON text; `null` when absent
    pub data: Option<String>,
}

/// Evaluate `options.rule` against `options.data` with the builtin operators.
pub fn execute_apply(options: &ApplyOptions) -> Result<serde_json::Value, CliError> {
    let rule = parse_json("rule", &options.rule)?;
    let data = match options.data.as_deref() {
        Some(text) if !text.trim().is_empty() => parse_json("data", text)?,
        _ => Value::Null,
    };

    let logic = JsonLogic::new();
    let result = logic.apply(&rule, &data)?;
    Ok(serde_json::Value::from(result))
}
