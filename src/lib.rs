//! # jsonlogic
//!
//! Rules as data: a rule is a JSON-shaped value, evaluated against a JSON-shaped
//! data context.
//!
//! ```text
//! {"if": [{"missing": "vin"}, "incomplete", {"cat": ["VIN ", {"var": "vin"}]}]}
//! ```
//!
//! A mapping with exactly one key is an operation, a list is a list of rules,
//! and everything else is a literal. See [`JsonLogic`] for evaluation,
//! [`uses_data`] and [`rule_like`] for static inspection.
//!
//! ```
//! use jsonlogic::Value;
//! use serde_json::json;
//!
//! let rule = Value::from(json!({"filter": [{"var": "integers"}, {">=": [{"var": ""}, 2]}]}));
//! let data = Value::from(json!({"integers": [1, 2, 3]}));
//!
//! let result = jsonlogic::apply(&rule, &data).unwrap();
//! assert_eq!(serde_json::Value::from(result), json!([2, 3]));
//! ```

pub mod coerce;
mod convert;
pub mod dependencies;
pub mod error;
pub mod evaluator;
pub mod operators;
pub mod pattern;
pub mod registry;
pub mod rule;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

use std::sync::LazyLock;

pub use dependencies::uses_data;
pub use error::{LogicError, Result};
pub use evaluator::JsonLogic;
pub use pattern::rule_like;
pub use registry::{Operation, Registry};
pub use rule::{Rule, get_operator, get_values, is_logic};
pub use value::{Value, truthy};

static BUILTIN_ENGINE: LazyLock<JsonLogic> = LazyLock::new(JsonLogic::new);

/// Evaluates `rule` against `data` with the builtin operators only.
///
/// Use a [`JsonLogic`] value to register custom operators.
pub fn apply(rule: &Value, data: &Value) -> Result<Value> {
    BUILTIN_ENGINE.apply(rule, data)
}
