//! Structural rule matching.
//!
//! Patterns are rules with placeholders:
//!
//! - `"@"` matches anything,
//! - `"number"`, `"string"` and `"array"` match by type,
//! - `{"@": ...}` matches an operation with any operator.
//!
//! Lists match position by position, because argument order matters for
//! operators such as `-`, `if` and `var`.

use crate::{
    coerce::strict_equals,
    rule::{is_logic, operation_parts},
    value::Value,
};

/// Whether `rule` has the shape described by `pattern`.
///
/// ```
/// use jsonlogic::{Value, rule_like};
/// use serde_json::json;
///
/// let tax = Value::from(json!({"*": [0.01, {"var": "goods"}]}));
/// assert!(rule_like(&tax, &Value::from(json!({"*": ["number", "@"]}))));
/// assert!(!rule_like(&tax, &Value::from(json!({"+": ["number", "@"]}))));
/// ```
pub fn rule_like(rule: &Value, pattern: &Value) -> bool {
    if strict_equals(pattern, rule) {
        return true;
    }

    match pattern.as_str() {
        Some("@") => return true,
        Some("number") => return rule.is_number(),
        Some("string") => return matches!(rule, Value::String(_)),
        Some("array") => return matches!(rule, Value::Array(_)) && !is_logic(rule),
        _ => {}
    }

    if let Some((pattern_op, pattern_operand)) = operation_parts(pattern) {
        return match operation_parts(rule) {
            // operands are compared raw so that `{"+": "@"}` covers every
            // argument list of `+`, not just a single argument
            Some((rule_op, rule_operand)) if pattern_op == "@" || pattern_op == rule_op => {
                rule_like(rule_operand, pattern_operand)
            }
            _ => false,
        };
    }

    match (pattern, rule) {
        (Value::Array(patterns), Value::Array(rules)) => {
            patterns.len() == rules.len()
                && rules.iter().zip(patterns).all(|(r, p)| rule_like(r, p))
        }
        _ => false,
    }
}
