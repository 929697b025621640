//! Coercion rules shared by the builtin operators.
//!
//! The language coerces loosely: `"1" + 1` is `2` and `1 == "1"` holds. The
//! table below is the complete set of conversions; nothing else is implied.
//!
//! | input            | `to_number`                                        |
//! |------------------|----------------------------------------------------|
//! | integer / float  | itself                                             |
//! | boolean          | `1` / `0`                                          |
//! | null             | `0`                                                |
//! | string           | trimmed; empty is `0`; else leading numeric prefix, or `NaN` |
//! | array            | `[]` is `0`, `[x]` is `to_number(x)`, else `NaN`   |
//! | object           | `NaN`                                              |

use std::cmp::Ordering;

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::value::Value;

pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Integer(n) => *n as f64,
        Value::Float(n) => *n,
        Value::Boolean(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null => 0.0,
        Value::String(s) => parse_number_prefix(s),
        Value::Array(arr) => match arr.as_slice() {
            [] => 0.0,
            [only] => to_number(only),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// Parses the longest leading decimal number of `s`, e.g. `"12px"` is `12`.
fn parse_number_prefix(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// `===`: no coercion, but integers and floats are one number type.
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => x == y,
        (x, y) if x.is_number() && y.is_number() => x.as_float() == y.as_float(),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| strict_equals(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter().all(|(k, v)| y.get(k).is_some_and(|other| strict_equals(v, other)))
        }
        (x, y) => x == y,
    }
}

/// `==`: booleans become numbers, numbers and strings meet as numbers, and
/// containers compared with a scalar are compared through their string form.
pub fn loose_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Boolean(_), _) => loose_equals(&Value::number(to_number(a)), b),
        (_, Value::Boolean(_)) => loose_equals(a, &Value::number(to_number(b))),
        (x, y) if x.is_number() && y.is_number() => strict_equals(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (x, Value::String(_)) if x.is_number() => to_number(x) == to_number(b),
        (Value::String(_), y) if y.is_number() => to_number(a) == to_number(y),
        (Value::Array(_) | Value::Object(_), Value::Array(_) | Value::Object(_)) => {
            strict_equals(a, b)
        }
        (Value::Array(_) | Value::Object(_), _) => {
            loose_equals(&Value::String(a.to_js_string()), b)
        }
        (_, Value::Array(_) | Value::Object(_)) => {
            loose_equals(a, &Value::String(b.to_js_string()))
        }
        _ => false,
    }
}

/// Ordering for `<`, `<=`, `>` and `>=`. `None` means incomparable (a `NaN`
/// got involved) and every relational operator then answers `false`.
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    let a = to_primitive(a);
    let b = to_primitive(b);
    match (&a, &b) {
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => to_number(&a).partial_cmp(&to_number(&b)),
    }
}

fn to_primitive(value: &Value) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) => Value::String(value.to_js_string()),
        other => other.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

/// Largest mantissa (15 significant digits) whose decimal form an `f64`
/// holds exactly.
const MAX_SHORT_MANTISSA: u128 = 1_000_000_000_000_000;

/// Applies `op` to two coerced numbers.
///
/// `+`, `-` and `*` on short decimals (at most 15 significant digits, such as
/// `0.1` or `1.1`) are computed exactly, so `0.1 + 0.2` is `0.3`. Everything
/// else, including every `/` and `%`, is plain `f64` arithmetic and may yield
/// `Infinity` or `NaN`.
pub fn arithmetic(op: ArithOp, left: f64, right: f64) -> Value {
    if matches!(op, ArithOp::Add | ArithOp::Subtract | ArithOp::Multiply)
        && let Some(ld) = short_decimal(left)
        && let Some(rd) = short_decimal(right)
    {
        let exact = match op {
            ArithOp::Add => ld.checked_add(rd),
            ArithOp::Subtract => ld.checked_sub(rd),
            _ => ld.checked_mul(rd),
        };
        if let Some(rd) = exact {
            if rd.is_integer()
                && let Some(r) = rd.to_i64()
            {
                return Value::Integer(r);
            } else if let Some(r) = rd.to_f64() {
                return Value::number(r);
            }
        }
    }

    let res = match op {
        ArithOp::Add => left + right,
        ArithOp::Subtract => left - right,
        ArithOp::Multiply => left * right,
        ArithOp::Divide => left / right,
        ArithOp::Remainder => left % right,
    };
    Value::number(res)
}

/// The decimal an `f64` prints as, when that decimal is short and converts
/// back to the same `f64`. Results of inexact operations such as `1 / 3`
/// carry 16 or more digits and stay in `f64`.
fn short_decimal(n: f64) -> Option<Decimal> {
    if !n.is_finite() {
        return None;
    }
    let d: Decimal = n.to_string().parse().ok()?;
    (d.mantissa().unsigned_abs() < MAX_SHORT_MANTISSA && d.to_f64() == Some(n)).then_some(d)
}
