//! Builtin operators.
//!
//! Each builtin is a plain function over already-evaluated arguments. Missing
//! arguments read as `null`. None of them fail: bad input coerces to `NaN`,
//! `false` or an empty result instead.

use std::cmp::Ordering;

use tracing::info;

use crate::{
    coerce::{ArithOp, arithmetic, compare, loose_equals, strict_equals, to_number},
    registry::{Operation, Registry},
    value::{NULL, Value},
};

type Builtin = fn(&[Value]) -> Value;

const BUILTINS: &[(&str, Builtin)] = &[
    ("==", |args| Value::Boolean(loose_equals(arg(args, 0), arg(args, 1)))),
    ("!=", |args| Value::Boolean(!loose_equals(arg(args, 0), arg(args, 1)))),
    ("===", |args| Value::Boolean(strict_equals(arg(args, 0), arg(args, 1)))),
    ("!==", |args| Value::Boolean(!strict_equals(arg(args, 0), arg(args, 1)))),
    (">", |args| relation(args, |o| o == Ordering::Greater)),
    (">=", |args| relation(args, |o| o != Ordering::Less)),
    ("<", |args| relation(args, |o| o == Ordering::Less)),
    ("<=", |args| relation(args, |o| o != Ordering::Greater)),
    ("!!", |args| Value::Boolean(arg(args, 0).is_truthy())),
    ("!", |args| Value::Boolean(!arg(args, 0).is_truthy())),
    ("%", |args| binary(ArithOp::Remainder, args)),
    ("/", |args| binary(ArithOp::Divide, args)),
    ("+", |args| fold(ArithOp::Add, 0, args)),
    ("*", |args| fold(ArithOp::Multiply, 1, args)),
    ("-", subtract),
    ("min", |args| extremum(args, f64::INFINITY, f64::min)),
    ("max", |args| extremum(args, f64::NEG_INFINITY, f64::max)),
    ("cat", cat),
    ("in", contains),
    ("substr", substr),
    ("merge", merge),
    ("log", log),
];

pub(crate) fn register_builtins(registry: &mut Registry) {
    for (name, builtin) in BUILTINS {
        let builtin = *builtin;
        registry.add_operation(*name, Operation::function(move |args| Ok(builtin(args))));
    }
}

/// Names of every builtin operator, in catalog order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|(name, _)| *name)
}

fn arg(args: &[Value], index: usize) -> &Value {
    args.get(index).unwrap_or(&NULL)
}

/// Pairwise comparison; a third argument makes it a range check `a ? b ? c`.
fn relation(args: &[Value], holds: fn(Ordering) -> bool) -> Value {
    let pair = |a: &Value, b: &Value| compare(a, b).is_some_and(holds);
    let result = match args {
        [a, b, c, ..] => pair(a, b) && pair(b, c),
        _ => pair(arg(args, 0), arg(args, 1)),
    };
    Value::Boolean(result)
}

fn binary(op: ArithOp, args: &[Value]) -> Value {
    arithmetic(op, to_number(arg(args, 0)), to_number(arg(args, 1)))
}

fn fold(op: ArithOp, identity: i64, args: &[Value]) -> Value {
    args.iter().fold(Value::Integer(identity), |acc, next| {
        arithmetic(op, to_number(&acc), to_number(next))
    })
}

fn subtract(args: &[Value]) -> Value {
    match args {
        [] => Value::Float(f64::NAN),
        [only] => Value::number(-to_number(only)),
        [a, b, ..] => arithmetic(ArithOp::Subtract, to_number(a), to_number(b)),
    }
}

fn extremum(args: &[Value], empty: f64, pick: fn(f64, f64) -> f64) -> Value {
    let mut best = empty;
    for n in args.iter().map(to_number) {
        // f64::min/max drop NaN; the language propagates it instead
        if n.is_nan() {
            return Value::Float(f64::NAN);
        }
        best = pick(best, n);
    }
    Value::number(best)
}

fn cat(args: &[Value]) -> Value {
    let joined: String = args
        .iter()
        .map(|v| match v {
            Value::Null => String::new(),
            other => other.to_js_string(),
        })
        .collect();
    Value::String(joined)
}

/// `in`: substring test against a string, element test against a list.
fn contains(args: &[Value]) -> Value {
    let needle = arg(args, 0);
    let found = match arg(args, 1) {
        Value::String(haystack) => haystack.contains(&needle.to_js_string()),
        Value::Array(items) => items.iter().any(|item| strict_equals(item, needle)),
        _ => false,
    };
    Value::Boolean(found)
}

/// `substr(source, start, length?)`.
///
/// A negative start counts back from the end. A negative length drops that
/// many characters from the end of the remainder.
fn substr(args: &[Value]) -> Value {
    let chars: Vec<char> = arg(args, 0).to_js_string().chars().collect();
    let start = to_integer(to_number(arg(args, 1)));
    let length = args.get(2).map(|v| to_integer(to_number(v)));

    let result = match length {
        Some(len) if len < 0.0 => {
            let rest = slice_chars(&chars, start, None);
            let keep = (rest.len() as f64 + len).max(0.0) as usize;
            rest[..keep].iter().collect()
        }
        _ => slice_chars(&chars, start, length).iter().collect(),
    };
    Value::String(result)
}

fn slice_chars(chars: &[char], start: f64, length: Option<f64>) -> &[char] {
    let size = chars.len() as f64;
    let from = if start < 0.0 {
        (size + start).max(0.0)
    } else {
        start.min(size)
    };
    let len = length.unwrap_or(size).clamp(0.0, size);
    let to = (from + len).min(size);
    if to <= from {
        return &[];
    }
    &chars[from as usize..to as usize]
}

fn to_integer(n: f64) -> f64 {
    if n.is_nan() { 0.0 } else { n.trunc() }
}

fn merge(args: &[Value]) -> Value {
    let mut merged = Vec::new();
    for item in args {
        match item {
            Value::Array(inner) => merged.extend(inner.iter().cloned()),
            other => merged.push(other.clone()),
        }
    }
    Value::Array(merged)
}

fn log(args: &[Value]) -> Value {
    let value = arg(args, 0).clone();
    let rendered = serde_json::Value::from(value.clone());
    info!(target: "jsonlogic::log", value = %rendered);
    value
}
