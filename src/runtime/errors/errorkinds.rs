//! Error constructor functions

use crate::parser::operator::{PrefixOp, BinaryOp};
use crate::runtime::Value;
use crate::runtime::errors::{RuntimeError, ErrorKind};


impl RuntimeError {
    pub fn type_mismatch(lhs: &Value, op: BinaryOp, rhs: &Value) -> RuntimeError {
        RuntimeError::new(
            ErrorKind::TypeMismatch,
            format!("type mismatch: {} {} {}", lhs.type_name(), op, rhs.type_name()),
        )
    }

    pub fn invalid_prefix_operand(op: PrefixOp, operand: &Value) -> RuntimeError {
        RuntimeError::new(
            ErrorKind::UnknownOperator,
            format!("unknown operator: {}{}", op, operand.type_name()),
        )
    }

    pub fn invalid_binary_operands(lhs: &Value, op: BinaryOp, rhs: &Value) -> RuntimeError {
        RuntimeError::new(
            ErrorKind::UnknownOperator,
            format!("unknown operator: {} {} {}", lhs.type_name(), op, rhs.type_name()),
        )
    }

    pub fn divide_by_zero() -> RuntimeError {
        RuntimeError::new(ErrorKind::DivideByZero, "division by zero")
    }

    pub fn name_not_defined(name: &str) -> RuntimeError {
        RuntimeError::new(
            ErrorKind::NameNotDefined,
            format!("identifier not found: {}", name),
        )
    }

    pub fn not_callable(value: &Value) -> RuntimeError {
        RuntimeError::new(
            ErrorKind::NotCallable,
            format!("not a function: {}", value.type_name()),
        )
    }

    pub fn wrong_argument_count(nargs: usize, arity: usize) -> RuntimeError {
        RuntimeError::new(
            ErrorKind::WrongArgumentCount,
            format!("wrong number of arguments. got={}, want={}", nargs, arity),
        )
    }

    pub fn unsupported_argument(func_name: &str, value: &Value) -> RuntimeError {
        RuntimeError::new(
            ErrorKind::InvalidArgument,
            format!("argument to '{}' not supported, got {}", func_name, value.type_name()),
        )
    }

    pub fn expected_array(func_name: &str, value: &Value) -> RuntimeError {
        RuntimeError::new(
            ErrorKind::InvalidArgument,
            format!("argument to '{}' must be ARRAY, got {}", func_name, value.type_name()),
        )
    }

    pub fn index_not_supported(collection: &Value, index: &Value) -> RuntimeError {
        RuntimeError::new(
            ErrorKind::IndexNotSupported,
            format!("index operator not supported: {}[{}]", collection.type_name(), index.type_name()),
        )
    }
}
