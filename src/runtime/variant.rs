use core::fmt;
use std::rc::Rc;
use static_assertions::{const_assert, assert_not_impl_any};

use crate::language::{IntType, FloatType};
use crate::runtime::function::{Function, Builtin};
use crate::runtime::errors::RuntimeError;
use crate::utils::fmt_join;


// the largest payloads are the fat pointers for strings and arrays
#[cfg(target_pointer_width = "64")]
const_assert!(core::mem::size_of::<Value>() <= 24);

// values share environments through Rc, so they must never cross threads
assert_not_impl_any!(Value: Send, Sync);

// Fundamental data value type
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Boolean(bool),

    Integer(IntType),
    Float(FloatType),

    String(Rc<str>),
    Array(Rc<[Value]>),

    Function(Rc<Function>),
    Builtin(&'static Builtin),

    // control flow sentinels, never seen by code outside the interpreter
    Return(Box<Value>),
    Error(Rc<RuntimeError>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Boolean(..) => "BOOLEAN",
            Self::Integer(..) => "INTEGER",
            Self::Float(..) => "FLOAT",
            Self::String(..) => "STRING",
            Self::Array(..) => "ARRAY",
            Self::Function(..) => "FUNCTION",
            Self::Builtin(..) => "BUILTIN",
            Self::Return(..) => "RETURN_VALUE",
            Self::Error(..) => "ERROR",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }

    // everything except false and null
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    pub fn as_error(&self) -> Option<&RuntimeError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Identity comparison, used for equality when no type-specific comparison applies.
    /// Null and the two booleans are unique values, reference types compare by pointer.
    pub fn is_identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => Rc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => core::ptr::eq(*a, *b),
            (Self::Error(a), Self::Error(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The human readable rendering shown to users
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => fmt.write_str("null"),
            Self::Boolean(value) => write!(fmt, "{}", value),
            Self::Integer(value) => write!(fmt, "{}", value),
            Self::Float(value) => write!(fmt, "{:.6}", value),
            Self::String(value) => fmt.write_str(value),
            Self::Array(items) => write!(fmt, "[{}]", fmt_join(", ", items.iter())),
            Self::Function(func) => fmt::Display::fmt(func, fmt),
            Self::Builtin(..) => fmt.write_str("builtin function"),
            Self::Return(value) => fmt::Display::fmt(value, fmt),
            Self::Error(error) => write!(fmt, "ERROR {}", error),
        }
    }
}


impl From<bool> for Value {
    fn from(value: bool) -> Self { Self::Boolean(value) }
}

impl From<IntType> for Value {
    fn from(value: IntType) -> Self { Self::Integer(value) }
}

impl From<FloatType> for Value {
    fn from(value: FloatType) -> Self { Self::Float(value) }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self { Self::String(Rc::from(value)) }
}

impl From<String> for Value {
    fn from(value: String) -> Self { Self::String(Rc::from(value)) }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self { Self::Array(Rc::from(items)) }
}

impl From<&[Value]> for Value {
    fn from(items: &[Value]) -> Self { Self::Array(Rc::from(items)) }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self { Self::Function(Rc::new(func)) }
}

impl From<&'static Builtin> for Value {
    fn from(builtin: &'static Builtin) -> Self { Self::Builtin(builtin) }
}

impl From<RuntimeError> for Value {
    fn from(error: RuntimeError) -> Self { Self::Error(Rc::new(error)) }
}
