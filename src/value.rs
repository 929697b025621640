use std::collections::HashMap;

/// A JSON-shaped value: the currency of rules, data contexts and results.
///
/// Integers and floats are kept apart so that whole-number results print as
/// integers, but every numeric comparison in the language treats them as one
/// number type.
///
/// # Examples
///
/// ```
/// use jsonlogic::Value;
/// use std::collections::HashMap;
///
/// let null = Value::Null;
/// let integer = Value::Integer(42);
/// let string = Value::String("hello".to_string());
/// let array = Value::Array(vec![Value::Integer(1), Value::Float(2.5)]);
///
/// let mut obj = HashMap::new();
/// obj.insert("var".to_string(), Value::from("a.b"));
/// let operation = Value::Object(obj);
/// assert!(jsonlogic::is_logic(&operation));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON null
    #[default]
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Ordered list of values
    Array(Vec<Value>),

    /// Object with string keys
    Object(HashMap<String, Value>),
}

impl Value {
    /// Builds a number, collapsing whole floats that fit in `i64` to `Integer`.
    pub fn number(n: f64) -> Value {
        if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            Value::Integer(n as i64)
        } else {
            Value::Float(n)
        }
    }

    /// The language's boolean coercion.
    ///
    /// `false`, `0`, `NaN`, `""` and `null` are falsy, and so is the empty
    /// list. Every other value, including `"0"`, `[0]` and `{}`, is truthy.
    pub fn is_truthy(&self) -> bool {
        use Value::*;
        match self {
            Null => false,
            Boolean(b) => *b,
            Float(n) => *n != 0.0 && !n.is_nan(),
            Integer(n) => *n != 0,
            String(s) => !s.is_empty(),
            Array(arr) => !arr.is_empty(),
            Object(_) => true,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Stringification used by `cat`, `substr`, `in` and `var` paths.
    ///
    /// Lists join their elements with `,` and render `null` elements as the
    /// empty string; objects collapse to `[object Object]`.
    pub fn to_js_string(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => format_float(*n),
            Value::String(s) => s.clone(),
            Value::Array(arr) => arr
                .iter()
                .map(|v| match v {
                    Value::Null => String::new(),
                    other => other.to_js_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
        }
    }
}

fn format_float(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        exponent_form(n)
    } else {
        n.to_string()
    }
}

/// `1e+21`, `1.5e-7`: shortest digits with an explicitly signed exponent.
fn exponent_form(n: f64) -> String {
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((digits, exp)) if !exp.starts_with('-') => format!("{}e+{}", digits, exp),
        _ => formatted,
    }
}

/// Shared `null` for lookups that fall back to it by reference.
pub(crate) static NULL: Value = Value::Null;

/// Free-function form of [`Value::is_truthy`].
pub fn truthy(value: &Value) -> bool {
    value.is_truthy()
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
