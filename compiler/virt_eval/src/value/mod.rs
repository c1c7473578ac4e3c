//! Runtime values.
//!
//! Objects and functions are reference types: cloning a [`Value`] aliases
//! the same map or closure. Everything else is a plain copy.


use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use virt_ir::FnDeclaration;

use crate::{Environment, RuntimeError};

/// Property map of an object. Insertion order is source order.
pub type ObjectMap = IndexMap<String, Value>;

/// Host callback behind a [`NativeFunction`]. Receives the evaluated
/// arguments and the caller's environment.
pub type NativeFn = dyn Fn(&[Value], &Environment) -> Result<Value, RuntimeError>;

/// Nested objects deeper than this print as `{ ... }`, which also stops
/// self-referencing objects from recursing forever.
const MAX_DISPLAY_DEPTH: usize = 8;

#[derive(Clone)]
pub enum Value {
    Nil,
    Boolean(bool),
    Number(f64),
    String(Rc<str>),
    Object(Rc<RefCell<ObjectMap>>),
    Function(Rc<FunctionValue>),
    NativeFunction(NativeFunction),
}

/// A user function: its declaration plus the environment it was declared in.
pub struct FunctionValue {
    pub decl: Rc<FnDeclaration>,
    pub closure: Environment,
}

impl FunctionValue {
    /// Declared name, empty for anonymous functions.
    pub fn name(&self) -> &str {
        &self.decl.name
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.decl.name)
            .field("params", &self.decl.params)
            .finish_non_exhaustive()
    }
}

/// A host function exposed to scripts.
#[derive(Clone)]
pub struct NativeFunction {
    name: Rc<str>,
    func: Rc<NativeFn>,
}

impl NativeFunction {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value], env: &Environment) -> Result<Value, RuntimeError> {
        (self.func)(args, env)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeFunction").field(&self.name).finish()
    }
}

impl Value {
    #[inline]
    pub fn nil() -> Self {
        Value::Nil
    }

    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    pub fn string(s: impl AsRef<str>) -> Self {
        Value::String(Rc::from(s.as_ref()))
    }

    /// Build an object from `(key, value)` pairs, keeping their order.
    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::from_map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn from_map(map: ObjectMap) -> Self {
        Value::Object(Rc::new(RefCell::new(map)))
    }

    /// Array-shaped object: elements keyed `"0"`, `"1"`, ...
    pub fn array(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::object(
            elements
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v)),
        )
    }

    pub fn native<F>(name: &str, func: F) -> Self
    where
        F: Fn(&[Value], &Environment) -> Result<Value, RuntimeError> + 'static,
    {
        Value::NativeFunction(NativeFunction {
            name: Rc::from(name),
            func: Rc::new(func),
        })
    }

    pub fn function(decl: Rc<FnDeclaration>, closure: Environment) -> Self {
        Value::Function(Rc::new(FunctionValue { decl, closure }))
    }

    /// The kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::NativeFunction(_) => "native-fn",
        }
    }

    /// Conditions run only on `Boolean(true)`. There is no truthiness.
    #[inline]
    pub fn is_true(&self) -> bool {
        matches!(self, Value::Boolean(true))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Rc<RefCell<ObjectMap>>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// The key this value names when used inside `obj[...]`.
    ///
    /// Numbers, strings and booleans name keys by their text. Nil, objects
    /// and functions cannot be keys.
    pub fn property_key(&self) -> Option<String> {
        match self {
            Value::Number(n) => Some(format_number(*n)),
            Value::String(s) => Some(s.to_string()),
            Value::Boolean(b) => Some(b.to_string()),
            Value::Nil | Value::Object(_) | Value::Function(_) | Value::NativeFunction(_) => None,
        }
    }
}

/// Render a number the way scripts see it: integral values without a
/// fractional part, and no negative zero.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::NativeFunction(a), Value::NativeFunction(b)) => Rc::ptr_eq(&a.func, &b.func),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Object(_) => write!(f, "Object({self})"),
            Value::Function(func) => write!(f, "Function({:?})", func.name()),
            Value::NativeFunction(native) => write!(f, "NativeFunction({:?})", native.name()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f, 0)
    }
}

fn write_value(value: &Value, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    match value {
        Value::Nil => f.write_str("nil"),
        Value::Boolean(b) => write!(f, "{b}"),
        Value::Number(n) => f.write_str(&format_number(*n)),
        // Strings are quoted only inside objects.
        Value::String(s) if depth > 0 => write!(f, "'{s}'"),
        Value::String(s) => f.write_str(s),
        Value::Object(map) => {
            let map = map.borrow();
            if map.is_empty() {
                return f.write_str("{}");
            }
            if depth >= MAX_DISPLAY_DEPTH {
                return f.write_str("{ ... }");
            }
            f.write_str("{ ")?;
            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}: ")?;
                write_value(value, f, depth + 1)?;
            }
            f.write_str(" }")
        }
        Value::Function(func) => {
            let params = func.decl.params.join(", ");
            if func.decl.anonymous {
                write!(f, "fn ({params})")
            } else {
                write!(f, "fn {}({params})", func.name())
            }
        }
        Value::NativeFunction(native) => write!(f, "native fn {}", native.name()),
    }
}
