#![cfg(test)]

use std::rc::Rc;

use crate::parser::operator::{PrefixOp, BinaryOp};
use crate::builtins;
use crate::runtime::{Value, Environment, RuntimeError, ErrorKind};
use crate::runtime::environment::new_namespace;
use crate::runtime::ops::*;


fn int(value: i64) -> Value { Value::Integer(value) }
fn float(value: f64) -> Value { Value::Float(value) }
fn string(value: &str) -> Value { Value::from(value) }
fn boolean(value: bool) -> Value { Value::Boolean(value) }


#[test]
fn namespace_finds_names_by_str() {
    let mut namespace = new_namespace();

    let names = ["x", "y", "newAdder", "_tmp", "héllo"];
    for (idx, name) in names.iter().enumerate() {
        namespace.insert(Rc::from(*name), int(idx as i64));
    }

    assert_eq!(namespace.len(), names.len());
    assert!(matches!(namespace.get("newAdder"), Some(Value::Integer(2))));
    assert!(matches!(namespace.get("héllo"), Some(Value::Integer(4))));
    assert!(namespace.get("newadder").is_none());
}

#[test]
fn builtin_lookup_returns_static_entries() {
    let len = builtins::lookup("len").expect("len is a builtin");
    assert_eq!(len.name(), "len");

    // resolving twice yields the same static entry
    let again = builtins::lookup("len").expect("len is a builtin");
    assert!(Value::Builtin(len).is_identical(&Value::Builtin(again)));

    assert!(builtins::lookup("LEN").is_none());
}


// Environment

#[test]
fn environment_finds_values_in_parents() {
    let root = Environment::new_root();
    root.insert_value(Rc::from("x"), int(1));

    let local = root.new_local();
    let inner = local.new_local();

    assert!(matches!(inner.find_value("x"), Some(Value::Integer(1))));
    assert!(inner.lookup_value("x").is_none());
    assert!(!inner.has_name("x"));
    assert!(inner.find_value("y").is_none());
}

#[test]
fn environment_local_shadows_parent() {
    let root = Environment::new_root();
    root.insert_value(Rc::from("x"), int(1));

    let local = root.new_local();
    local.insert_value(Rc::from("x"), int(2));

    assert!(matches!(local.find_value("x"), Some(Value::Integer(2))));
    assert!(matches!(root.find_value("x"), Some(Value::Integer(1))));
}

#[test]
fn environment_insert_replaces_binding() {
    let root = Environment::new_root();

    assert!(root.insert_value(Rc::from("a"), boolean(true)).is_none());
    let old = root.insert_value(Rc::from("a"), boolean(false));

    assert!(matches!(old, Some(Value::Boolean(true))));
    assert!(matches!(root.find_value("a"), Some(Value::Boolean(false))));
    assert_eq!(root.names().len(), 1);
}


// Values

#[test]
fn value_inspect() {
    assert_eq!(int(42).inspect(), "42");
    assert_eq!(int(-7).inspect(), "-7");
    assert_eq!(float(3.0).inspect(), "3.000000");
    assert_eq!(boolean(true).inspect(), "true");
    assert_eq!(Value::Null.inspect(), "null");
    assert_eq!(string("hello").inspect(), "hello");

    let array = Value::from(vec![ int(1), string("two"), Value::Null ]);
    assert_eq!(array.inspect(), "[1, two, null]");

    let error = Value::from(RuntimeError::name_not_defined("foo"));
    assert_eq!(error.inspect(), "ERROR identifier not found: foo");

    let wrapped = Value::Return(Box::new(int(5)));
    assert_eq!(wrapped.inspect(), "5");
}

#[test]
fn value_truthiness() {
    assert!(!Value::Null.is_truthy());
    assert!(!boolean(false).is_truthy());

    assert!(boolean(true).is_truthy());
    assert!(int(0).is_truthy());
    assert!(string("").is_truthy());
    assert!(Value::from(Vec::<Value>::new()).is_truthy());
}

#[test]
fn value_type_names() {
    assert_eq!(int(1).type_name(), "INTEGER");
    assert_eq!(float(1.5).type_name(), "FLOAT");
    assert_eq!(boolean(false).type_name(), "BOOLEAN");
    assert_eq!(string("s").type_name(), "STRING");
    assert_eq!(Value::from(Vec::<Value>::new()).type_name(), "ARRAY");
    assert_eq!(Value::Null.type_name(), "NULL");
    assert_eq!(Value::Return(Box::new(Value::Null)).type_name(), "RETURN_VALUE");
    assert_eq!(Value::from(RuntimeError::divide_by_zero()).type_name(), "ERROR");
}

#[test]
fn value_identity() {
    assert!(Value::Null.is_identical(&Value::Null));
    assert!(boolean(true).is_identical(&boolean(true)));
    assert!(!boolean(true).is_identical(&boolean(false)));
    assert!(!int(1).is_identical(&boolean(true)));

    let array = Value::from(vec![ int(1) ]);
    let same = array.clone();
    let other = Value::from(vec![ int(1) ]);
    assert!(array.is_identical(&same));
    assert!(!array.is_identical(&other));
}


// Operators

fn infix(lhs: Value, op: BinaryOp, rhs: Value) -> Value {
    match eval_infix(op, &lhs, &rhs) {
        Ok(value) => value,
        Err(error) => Value::from(error),
    }
}

#[test]
fn integer_arithmetic() {
    assert!(matches!(infix(int(7), BinaryOp::Add, int(3)), Value::Integer(10)));
    assert!(matches!(infix(int(7), BinaryOp::Sub, int(10)), Value::Integer(-3)));
    assert!(matches!(infix(int(7), BinaryOp::Mul, int(3)), Value::Integer(21)));
    assert!(matches!(infix(int(7), BinaryOp::Div, int(2)), Value::Integer(3)));
    assert!(matches!(infix(int(-7), BinaryOp::Div, int(2)), Value::Integer(-3)));
    assert!(matches!(infix(int(7), BinaryOp::Mod, int(3)), Value::Integer(1)));
    assert!(matches!(infix(int(1), BinaryOp::LT, int(2)), Value::Boolean(true)));
    assert!(matches!(infix(int(1), BinaryOp::GT, int(2)), Value::Boolean(false)));
    assert!(matches!(infix(int(1), BinaryOp::EQ, int(1)), Value::Boolean(true)));
    assert!(matches!(infix(int(1), BinaryOp::NE, int(1)), Value::Boolean(false)));
}

#[test]
fn integer_overflow_wraps() {
    assert!(matches!(infix(int(i64::MAX), BinaryOp::Add, int(1)), Value::Integer(i64::MIN)));
    assert!(matches!(infix(int(i64::MIN), BinaryOp::Div, int(-1)), Value::Integer(i64::MIN)));
    assert!(matches!(eval_neg(&int(i64::MIN)), Ok(Value::Integer(i64::MIN))));
}

#[test]
fn integer_division_by_zero() {
    for op in [BinaryOp::Div, BinaryOp::Mod] {
        let error = eval_infix(op, &int(1), &int(0)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DivideByZero);
        assert_eq!(error.message(), "division by zero");
    }
}

#[test]
fn float_and_mixed_arithmetic() {
    assert!(matches!(infix(float(1.5), BinaryOp::Add, float(1.5)), Value::Float(f) if f == 3.0));
    assert!(matches!(infix(int(4), BinaryOp::Mul, float(1.5)), Value::Float(f) if f == 6.0));
    assert!(matches!(infix(int(1), BinaryOp::Sub, float(0.5)), Value::Float(f) if f == 0.5));
    assert!(matches!(infix(float(0.5), BinaryOp::Sub, int(1)), Value::Float(f) if f == -0.5));
    assert!(matches!(infix(float(5.5), BinaryOp::Mod, int(2)), Value::Float(f) if f == 1.5));
    assert!(matches!(infix(int(2), BinaryOp::LT, float(2.5)), Value::Boolean(true)));
}

#[test]
fn string_operators() {
    assert_eq!(infix(string("foo"), BinaryOp::Add, string("bar")).inspect(), "foobar");
    assert!(matches!(infix(string("a"), BinaryOp::EQ, string("a")), Value::Boolean(true)));
    assert!(matches!(infix(string("a"), BinaryOp::NE, string("a")), Value::Boolean(false)));
    assert_eq!(infix(string("a"), BinaryOp::Sub, string("b")).inspect(), "ERROR unknown operator: STRING - STRING");
}

#[test]
fn identity_equality_fallback() {
    assert!(matches!(infix(boolean(true), BinaryOp::EQ, boolean(true)), Value::Boolean(true)));
    assert!(matches!(infix(boolean(true), BinaryOp::NE, boolean(false)), Value::Boolean(true)));
    assert!(matches!(infix(int(1), BinaryOp::EQ, boolean(true)), Value::Boolean(false)));
    assert!(matches!(infix(Value::Null, BinaryOp::EQ, Value::Null), Value::Boolean(true)));
}

#[test]
fn operand_type_errors() {
    assert_eq!(infix(int(5), BinaryOp::Add, boolean(true)).inspect(), "ERROR type mismatch: INTEGER + BOOLEAN");
    assert_eq!(infix(boolean(true), BinaryOp::Add, boolean(false)).inspect(), "ERROR unknown operator: BOOLEAN + BOOLEAN");
    assert_eq!(infix(string("a"), BinaryOp::LT, int(1)).inspect(), "ERROR type mismatch: STRING < INTEGER");
}

#[test]
fn prefix_operators() {
    assert!(matches!(eval_prefix(PrefixOp::Neg, &int(5)), Ok(Value::Integer(-5))));
    assert!(matches!(eval_prefix(PrefixOp::Neg, &float(2.5)), Ok(Value::Float(f)) if f == -2.5));

    assert!(matches!(eval_not(&boolean(true)), Value::Boolean(false)));
    assert!(matches!(eval_not(&boolean(false)), Value::Boolean(true)));
    assert!(matches!(eval_not(&Value::Null), Value::Boolean(true)));
    assert!(matches!(eval_not(&int(0)), Value::Boolean(false)));

    let error = eval_prefix(PrefixOp::Neg, &boolean(true)).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnknownOperator);
    assert_eq!(error.to_string(), "unknown operator: -BOOLEAN");
}
