//! Static inspection commands

use super::{CliError, parse_json};

/// Data paths referenced by `rule`, as a JSON array of strings.
pub fn execute_uses_data(rule: &str) -> Result<serde_json::Value, CliError> {
    let rule = parse_json("rule", rule)?;
    let paths = crate::uses_data(&rule)
        .into_iter()
        .map(serde_json::Value::String)
        .collect();
    Ok(serde_json::Value::Array(paths))
}

/// Whether `rule` matches `pattern`.
pub fn execute_rule_like(rule: &str, pattern: &str) -> Result<bool, CliError> {
    let rule = parse_json("rule", rule)?;
    let pattern = parse_json("pattern", pattern)?;
    Ok(crate::rule_like(&rule, &pattern))
}
