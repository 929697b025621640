//! Rule shapes.
//!
//! Every value is a rule. A mapping with exactly one key is an *operation*
//! (`{"operator": args}`); a list is a list of rules; anything else,
//! including mappings with zero or several keys, is a literal.

use crate::value::Value;

/// Classification of a value as a rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule<'a> {
    Literal(&'a Value),
    List(&'a [Value]),
    Operation { operator: &'a str, args: &'a [Value] },
}

impl<'a> Rule<'a> {
    pub fn classify(value: &'a Value) -> Rule<'a> {
        if let Value::Array(items) = value {
            return Rule::List(items);
        }
        match operation_parts(value) {
            Some((operator, operand)) => Rule::Operation {
                operator,
                args: normalize_args(operand),
            },
            None => Rule::Literal(value),
        }
    }
}

/// True when `value` is a single-key mapping, i.e. an operation.
pub fn is_logic(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.len() == 1)
}

/// The operator of an operation, `None` for anything else.
pub fn get_operator(value: &Value) -> Option<&str> {
    operation_parts(value).map(|(operator, _)| operator)
}

/// The normalized arguments of an operation, `None` for anything else.
///
/// A list operand is used as-is; any other operand is a single argument, so
/// `{"var": "a"}` and `{"var": ["a"]}` have the same arguments.
pub fn get_values(value: &Value) -> Option<&[Value]> {
    operation_parts(value).map(|(_, operand)| normalize_args(operand))
}

/// Operator and raw (un-normalized) operand of an operation.
pub(crate) fn operation_parts(value: &Value) -> Option<(&str, &Value)> {
    match value {
        Value::Object(map) if map.len() == 1 => {
            map.iter().next().map(|(k, v)| (k.as_str(), v))
        }
        _ => None,
    }
}

fn normalize_args(operand: &Value) -> &[Value] {
    match operand {
        Value::Array(items) => items,
        other => std::slice::from_ref(other),
    }
}
