//! The operator table.
//!
//! Entries are looked up by name. A [`Operation::Group`] registered under one
//! name makes its members reachable as `"name.member"`, nesting as deep as the
//! groups do.

use std::{collections::HashMap, fmt, sync::Arc};

use tracing::debug;

use crate::{
    error::{LogicError, Result},
    value::Value,
};

/// Operator called with its evaluated arguments.
pub type OperatorFn = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// Operator called with the data context as receiver, then its arguments.
pub type MethodFn = Arc<dyn Fn(&Value, &[Value]) -> Result<Value> + Send + Sync>;

/// A registry entry.
#[derive(Clone)]
pub enum Operation {
    Function(OperatorFn),
    Method(MethodFn),
    Group(HashMap<String, Operation>),
}

impl Operation {
    /// Wraps a closure taking the evaluated arguments.
    ///
    /// ```
    /// use jsonlogic::{Operation, Value};
    ///
    /// let double = Operation::function(|args| {
    ///     let n = args.first().and_then(Value::as_float).unwrap_or(0.0);
    ///     Ok(Value::number(n * 2.0))
    /// });
    /// # let _ = double;
    /// ```
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Operation::Function(Arc::new(f))
    }

    /// Wraps a closure that also receives the data context.
    pub fn method<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Operation::Method(Arc::new(f))
    }

    /// Builds a namespace group from `(member, operation)` pairs.
    pub fn group<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = (S, Operation)>,
        S: Into<String>,
    {
        Operation::Group(members.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Invokes a callable entry. Groups are not callable and yield `None`.
    pub fn call(&self, data: &Value, args: &[Value]) -> Option<Result<Value>> {
        match self {
            Operation::Function(f) => Some(f(args)),
            Operation::Method(f) => Some(f(data, args)),
            Operation::Group(_) => None,
        }
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Function(_) => write!(f, "Function"),
            Operation::Method(_) => write!(f, "Method"),
            Operation::Group(members) => {
                let mut names: Vec<_> = members.keys().collect();
                names.sort();
                f.debug_tuple("Group").field(&names).finish()
            }
        }
    }
}

/// Mapping from operator name to implementation.
#[derive(Clone, Debug)]
pub struct Registry {
    operations: HashMap<String, Operation>,
}

impl Default for Registry {
    /// A registry seeded with the builtin operators.
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl Registry {
    /// An empty registry: only the evaluator's own control and data-access
    /// operators are available with it.
    pub fn new() -> Self {
        Registry {
            operations: HashMap::new(),
        }
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::operators::register_builtins(&mut registry);
        registry
    }

    /// Inserts `operation` under `name`, replacing any previous entry.
    pub fn add_operation(&mut self, name: impl Into<String>, operation: Operation) {
        let name = name.into();
        debug!(operator = %name, kind = ?operation, "registering operation");
        self.operations.insert(name, operation);
    }

    /// Removes the top-level entry `name`. A dotted name does not reach into
    /// groups: `rm_operation("group.member")` only removes an entry literally
    /// registered as `"group.member"`.
    pub fn rm_operation(&mut self, name: &str) -> Option<Operation> {
        let removed = self.operations.remove(name);
        if removed.is_some() {
            debug!(operator = %name, "removed operation");
        }
        removed
    }

    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Top-level names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolves and invokes `operator` with already-evaluated arguments.
    ///
    /// A callable entry registered under the full name wins. Otherwise a name
    /// with a `.` past its first character is walked through groups; the
    /// error names the prefix at which the walk stopped.
    pub fn invoke(&self, operator: &str, data: &Value, args: &[Value]) -> Result<Value> {
        if let Some(result) = self.get(operator).and_then(|op| op.call(data, args)) {
            return result;
        }

        if operator.find('.').is_some_and(|pos| pos > 0) {
            let segments: Vec<&str> = operator.split('.').collect();
            let mut current: Option<&Operation> = None;

            for (i, segment) in segments.iter().enumerate() {
                let members = match current {
                    None => Some(&self.operations),
                    Some(Operation::Group(members)) => Some(members),
                    Some(_) => None,
                };
                match members.and_then(|m| m.get(*segment)) {
                    Some(op) => current = Some(op),
                    None => {
                        let failed_at = segments[..=i].join(".");
                        debug!(%operator, %failed_at, "unresolvable dotted operation");
                        return Err(LogicError::UnrecognizedOperation {
                            operator: operator.to_string(),
                            failed_at: Some(failed_at),
                        });
                    }
                }
            }

            if let Some(result) = current.and_then(|op| op.call(data, args)) {
                return result;
            }
            // the full path named a group, which cannot be called
            return Err(LogicError::UnrecognizedOperation {
                operator: operator.to_string(),
                failed_at: Some(operator.to_string()),
            });
        }

        debug!(%operator, "unrecognized operation");
        Err(LogicError::unrecognized(operator))
    }
}
