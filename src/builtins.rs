use std::collections::HashMap;
use once_cell::sync::Lazy;

use crate::language::IntType;
use crate::runtime::{Value, Builtin, RuntimeError, DefaultBuildHasher};



type BuiltinTable = HashMap<&'static str, Builtin, DefaultBuildHasher>;

// initialized on first use and never modified afterwards
static BUILTINS: Lazy<BuiltinTable> = Lazy::new(create_builtins);

/// Find a builtin function by name
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.get(name)
}

pub fn names() -> impl Iterator<Item=&'static str> {
    BUILTINS.keys().copied()
}

fn create_builtins() -> BuiltinTable {
    let len = native_function!(len(value) => {
        match value {
            Value::String(string) => Value::Integer(string.chars().count() as IntType),
            Value::Array(items) => Value::Integer(items.len() as IntType),
            _ => Value::from(RuntimeError::unsupported_argument("len", value)),
        }
    });

    let first = native_function!(first(array) => {
        match array {
            Value::Array(items) => items.first().cloned().unwrap_or(Value::Null),
            _ => Value::from(RuntimeError::expected_array("first", array)),
        }
    });

    let last = native_function!(last(array) => {
        match array {
            Value::Array(items) => items.last().cloned().unwrap_or(Value::Null),
            _ => Value::from(RuntimeError::expected_array("last", array)),
        }
    });

    // a new array without the first element
    let rest = native_function!(rest(array) => {
        match array {
            Value::Array(items) => match items.split_first() {
                Some((_, rest)) => Value::from(rest),
                None => Value::Null,
            },
            _ => Value::from(RuntimeError::expected_array("rest", array)),
        }
    });

    // a new array with the value appended
    let push = native_function!(push(array, value) => {
        match array {
            Value::Array(items) => {
                let mut items = items.to_vec();
                items.push(value.clone());
                Value::from(items)
            },
            _ => Value::from(RuntimeError::expected_array("push", array)),
        }
    });

    // a new array without the last element
    let pop = native_function!(pop(array) => {
        match array {
            Value::Array(items) => match items.split_last() {
                Some((_, rest)) => Value::from(rest),
                None => Value::Null,
            },
            _ => Value::from(RuntimeError::expected_array("pop", array)),
        }
    });

    let mut builtins = BuiltinTable::with_hasher(DefaultBuildHasher::default());
    for builtin in [len, first, last, rest, push, pop] {
        builtins.insert(builtin.name(), builtin);
    }

    log::trace!("registered {} builtins", builtins.len());
    builtins
}
