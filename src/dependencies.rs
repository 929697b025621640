//! Static data-dependency extraction.

use crate::{rule::Rule, value::Value};

/// Lists the data paths a rule reads through `var`, without evaluating it.
///
/// Paths come out deduplicated in first-seen order. Only the first argument of
/// each `var` is collected, and only when it is a literal string or number: a
/// computed path (`{"var": {"cat": [...]}}`) is skipped and not searched.
/// Lists are opaque unless they are the arguments of an operation.
///
/// ```
/// use jsonlogic::{Value, uses_data};
/// use serde_json::json;
///
/// let rule = Value::from(json!({"a": [1, {"var": "b"}, {"var": "b"}]}));
/// assert_eq!(uses_data(&rule), vec!["b".to_string()]);
/// ```
pub fn uses_data(rule: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    collect(rule, &mut paths);
    paths
}

fn collect(rule: &Value, paths: &mut Vec<String>) {
    let Rule::Operation { operator, args } = Rule::classify(rule) else {
        return;
    };

    if operator == "var" {
        let path = match args.first() {
            Some(Value::String(s)) => s.clone(),
            Some(n @ (Value::Integer(_) | Value::Float(_))) => n.to_js_string(),
            _ => return,
        };
        if !paths.contains(&path) {
            paths.push(path);
        }
        return;
    }

    for arg in args {
        collect(arg, paths);
    }
}
