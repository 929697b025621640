//! The recursive rule evaluator.

use std::collections::HashMap;

use crate::{
    error::Result,
    registry::{Operation, Registry},
    rule::Rule,
    value::{NULL, Value},
};

/// The rule evaluator.
///
/// Owns the operator [`Registry`]; registering or removing an operator
/// affects every later [`apply`](JsonLogic::apply) on this engine.
#[derive(Clone, Debug, Default)]
pub struct JsonLogic {
    registry: Registry,
}

impl JsonLogic {
    /// Creates an evaluator with the builtin operators.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: Registry) -> Self {
        JsonLogic { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Registers (or replaces) an operator.
    ///
    /// ```
    /// use jsonlogic::{JsonLogic, Operation, Value};
    ///
    /// let mut logic = JsonLogic::new();
    /// logic.add_operation("len", Operation::function(|args| {
    ///     let n = args.first().map(|v| v.to_js_string().chars().count()).unwrap_or(0);
    ///     Ok(Value::Integer(n as i64))
    /// }));
    ///
    /// let rule = Value::from(serde_json::json!({"len": "four"}));
    /// assert_eq!(logic.apply(&rule, &Value::Null).unwrap(), Value::Integer(4));
    /// ```
    pub fn add_operation(&mut self, name: impl Into<String>, operation: Operation) {
        self.registry.add_operation(name, operation);
    }

    /// Removes a top-level operator; no-op when it is not registered.
    pub fn rm_operation(&mut self, name: &str) {
        self.registry.rm_operation(name);
    }

    /// Evaluates `rule` against `data`.
    ///
    /// Lists evaluate element-wise, operations dispatch on their operator and
    /// everything else is returned unchanged.
    ///
    /// ```
    /// use jsonlogic::{JsonLogic, Value};
    /// use serde_json::json;
    ///
    /// let logic = JsonLogic::new();
    /// let rule = Value::from(json!({"if": [{"<": [{"var": "temp"}, 110]}, "ok", "hot"]}));
    /// let data = Value::from(json!({"temp": 100}));
    ///
    /// assert_eq!(logic.apply(&rule, &data).unwrap(), Value::from("ok"));
    /// ```
    pub fn apply(&self, rule: &Value, data: &Value) -> Result<Value> {
        match Rule::classify(rule) {
            Rule::List(items) => {
                let mut arr = Vec::with_capacity(items.len());
                for item in items {
                    arr.push(self.apply(item, data)?);
                }
                Ok(Value::Array(arr))
            }
            Rule::Literal(value) => Ok(value.clone()),
            Rule::Operation { operator, args } => self.eval_operation(operator, args, data),
        }
    }

    fn eval_operation(&self, operator: &str, args: &[Value], data: &Value) -> Result<Value> {
        // control flow and iteration evaluate their own arguments lazily
        match operator {
            "if" | "?:" => return self.eval_if(args, data),
            "and" => return self.eval_and(args, data),
            "or" => return self.eval_or(args, data),
            "filter" | "map" | "reduce" | "all" | "none" | "some" => {
                return self.eval_iteration(operator, args, data);
            }
            _ => {}
        }

        let values = self.apply_all(args, data)?;
        match operator {
            "var" => Ok(var(data, &values)),
            "missing" => Ok(missing(data, &values)),
            "missing_some" => Ok(missing_some(data, &values)),
            _ => self.registry.invoke(operator, data, &values),
        }
    }

    fn apply_all(&self, args: &[Value], data: &Value) -> Result<Vec<Value>> {
        args.iter().map(|arg| self.apply(arg, data)).collect()
    }

    /// `if`: (condition, consequent) pairs, then an optional trailing else.
    fn eval_if(&self, args: &[Value], data: &Value) -> Result<Value> {
        let mut pairs = args.chunks_exact(2);
        for pair in pairs.by_ref() {
            if self.apply(&pair[0], data)?.is_truthy() {
                return self.apply(&pair[1], data);
            }
        }
        match pairs.remainder() {
            [otherwise] => self.apply(otherwise, data),
            _ => Ok(Value::Null),
        }
    }

    /// `and`: first falsy value, or the last value.
    fn eval_and(&self, args: &[Value], data: &Value) -> Result<Value> {
        let mut current = Value::Null;
        for arg in args {
            current = self.apply(arg, data)?;
            if !current.is_truthy() {
                return Ok(current);
            }
        }
        Ok(current)
    }

    /// `or`: first truthy value, or the last value.
    fn eval_or(&self, args: &[Value], data: &Value) -> Result<Value> {
        let mut current = Value::Null;
        for arg in args {
            current = self.apply(arg, data)?;
            if current.is_truthy() {
                return Ok(current);
            }
        }
        Ok(current)
    }

    /// Operators whose second argument is re-evaluated once per element of
    /// the first, with the element (or, for `reduce`, `{current,
    /// accumulator}`) as its data.
    fn eval_iteration(&self, operator: &str, args: &[Value], data: &Value) -> Result<Value> {
        let source = match args.first() {
            Some(arg) => self.apply(arg, data)?,
            None => Value::Null,
        };
        let sub_rule = args.get(1).unwrap_or(&NULL);

        if operator == "reduce" {
            let initial = match args.get(2) {
                Some(arg) => self.apply(arg, data)?,
                None => Value::Null,
            };
            return self.reduce(&source, sub_rule, initial);
        }

        let items = match source {
            Value::Array(items) => items,
            _ => {
                return Ok(match operator {
                    "filter" | "map" => Value::Array(Vec::new()),
                    "none" => Value::Boolean(true),
                    _ => Value::Boolean(false),
                });
            }
        };

        match operator {
            "filter" => {
                let mut kept = Vec::new();
                for item in items {
                    if self.apply(sub_rule, &item)?.is_truthy() {
                        kept.push(item);
                    }
                }
                Ok(Value::Array(kept))
            }
            "map" => {
                let mut mapped = Vec::with_capacity(items.len());
                for item in &items {
                    mapped.push(self.apply(sub_rule, item)?);
                }
                Ok(Value::Array(mapped))
            }
            // an empty source is false for `all`: no vacuous truth
            "all" => {
                if items.is_empty() {
                    return Ok(Value::Boolean(false));
                }
                for item in &items {
                    if !self.apply(sub_rule, item)?.is_truthy() {
                        return Ok(Value::Boolean(false));
                    }
                }
                Ok(Value::Boolean(true))
            }
            "none" => {
                for item in &items {
                    if self.apply(sub_rule, item)?.is_truthy() {
                        return Ok(Value::Boolean(false));
                    }
                }
                Ok(Value::Boolean(true))
            }
            _ => {
                for item in &items {
                    if self.apply(sub_rule, item)?.is_truthy() {
                        return Ok(Value::Boolean(true));
                    }
                }
                Ok(Value::Boolean(false))
            }
        }
    }

    fn reduce(&self, source: &Value, sub_rule: &Value, initial: Value) -> Result<Value> {
        let Value::Array(items) = source else {
            return Ok(initial);
        };
        let mut accumulator = initial;
        for item in items {
            let mut scope = HashMap::with_capacity(2);
            scope.insert("current".to_string(), item.clone());
            scope.insert("accumulator".to_string(), accumulator);
            accumulator = self.apply(sub_rule, &Value::Object(scope))?;
        }
        Ok(accumulator)
    }
}

/// `var(path, default?)`: walks a dotted path into `data`.
///
/// The default replaces only a path that does not resolve; a resolved `0`,
/// `""`, `false` or `null` is returned as it is.
fn var(data: &Value, args: &[Value]) -> Value {
    let path = args.first().unwrap_or(&NULL);
    let fallback = || args.get(1).cloned().unwrap_or(Value::Null);

    let path = match path {
        Value::Null => return data.clone(),
        other => other.to_js_string(),
    };
    if path.is_empty() {
        return data.clone();
    }

    match lookup(data, &path) {
        Some(found) => found.clone(),
        None => fallback(),
    }
}

fn lookup<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = data;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(parse_index(segment)?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Canonical decimal indices only: `"1"` but not `"01"` or `"+1"`.
fn parse_index(segment: &str) -> Option<usize> {
    let index: usize = segment.parse().ok()?;
    (index.to_string() == segment).then_some(index)
}

/// `missing(keys...)` or `missing([keys])`: the keys that resolve to `null`,
/// nothing, or `""`.
fn missing(data: &Value, args: &[Value]) -> Value {
    let keys = match args.first() {
        Some(Value::Array(keys)) => keys.as_slice(),
        _ => args,
    };
    Value::Array(missing_keys(data, keys))
}

fn missing_keys(data: &Value, keys: &[Value]) -> Vec<Value> {
    keys.iter()
        .filter(|key| {
            let found = var(data, std::slice::from_ref(*key));
            match found {
                Value::Null => true,
                Value::String(s) => s.is_empty(),
                _ => false,
            }
        })
        .cloned()
        .collect()
}

/// `missing_some(need, [keys])`: `[]` once at least `need` keys are present,
/// otherwise every missing key.
fn missing_some(data: &Value, args: &[Value]) -> Value {
    let need = crate::coerce::to_number(args.first().unwrap_or(&NULL));
    let keys = match args.get(1) {
        Some(Value::Array(keys)) => keys.as_slice(),
        Some(key) => std::slice::from_ref(key),
        None => &[],
    };

    let absent = missing_keys(data, keys);
    let present = (keys.len() - absent.len()) as f64;
    if present >= need {
        Value::Array(Vec::new())
    } else {
        Value::Array(absent)
    }
}
