//! Operator semantics for the primitive types.
//!
//! Operand pairs are dispatched in a fixed order: integers, floats, mixed numbers, strings,
//! then identity equality, and finally an error naming the operand types.

use core::mem;

use crate::language::{IntType, FloatType};
use crate::parser::operator::{PrefixOp, BinaryOp};
use crate::runtime::Value;
use crate::runtime::errors::{RuntimeResult, RuntimeError};


// Prefix Operators

pub fn eval_prefix(op: PrefixOp, operand: &Value) -> RuntimeResult<Value> {
    match op {
        PrefixOp::Neg => eval_neg(operand),
        PrefixOp::Not => Ok(eval_not(operand)),
    }
}

#[inline]
pub fn eval_neg(operand: &Value) -> RuntimeResult<Value> {
    let value = match operand {
        Value::Integer(value) => Value::Integer(value.wrapping_neg()),
        Value::Float(value) => Value::Float(-value),
        _ => return Err(RuntimeError::invalid_prefix_operand(PrefixOp::Neg, operand)),
    };
    Ok(value)
}

#[inline]
pub fn eval_not(operand: &Value) -> Value {
    let value = match operand {
        Value::Boolean(value) => !value,
        Value::Null => true,
        _ => false,
    };
    Value::from(value)
}


// Binary Operators

pub fn eval_infix(op: BinaryOp, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => eval_integer_op(op, *a, *b),

        (Value::Float(a), Value::Float(b)) => Ok(eval_float_op(op, *a, *b)),

        // promote the integer operand, keeping operand order
        (Value::Integer(a), Value::Float(b)) => Ok(eval_float_op(op, *a as FloatType, *b)),
        (Value::Float(a), Value::Integer(b)) => Ok(eval_float_op(op, *a, *b as FloatType)),

        (Value::String(a), Value::String(b)) => eval_string_op(op, a, b)
            .ok_or_else(|| RuntimeError::invalid_binary_operands(lhs, op, rhs)),

        _ => match op {
            BinaryOp::EQ => Ok(Value::from(lhs.is_identical(rhs))),
            BinaryOp::NE => Ok(Value::from(!lhs.is_identical(rhs))),

            _ if mem::discriminant(lhs) != mem::discriminant(rhs) =>
                Err(RuntimeError::type_mismatch(lhs, op, rhs)),

            _ => Err(RuntimeError::invalid_binary_operands(lhs, op, rhs)),
        },
    }
}

// integer arithmetic wraps on overflow
fn eval_integer_op(op: BinaryOp, lhs: IntType, rhs: IntType) -> RuntimeResult<Value> {
    let value = match op {
        BinaryOp::Add => Value::from(lhs.wrapping_add(rhs)),
        BinaryOp::Sub => Value::from(lhs.wrapping_sub(rhs)),
        BinaryOp::Mul => Value::from(lhs.wrapping_mul(rhs)),

        BinaryOp::Div => {
            if rhs == 0 {
                return Err(RuntimeError::divide_by_zero());
            }
            Value::from(lhs.wrapping_div(rhs))
        },

        BinaryOp::Mod => {
            if rhs == 0 {
                return Err(RuntimeError::divide_by_zero());
            }
            Value::from(lhs.wrapping_rem(rhs))
        },

        BinaryOp::LT => Value::from(lhs < rhs),
        BinaryOp::GT => Value::from(lhs > rhs),
        BinaryOp::EQ => Value::from(lhs == rhs),
        BinaryOp::NE => Value::from(lhs != rhs),
    };
    Ok(value)
}

fn eval_float_op(op: BinaryOp, lhs: FloatType, rhs: FloatType) -> Value {
    match op {
        BinaryOp::Add => Value::from(lhs + rhs),
        BinaryOp::Sub => Value::from(lhs - rhs),
        BinaryOp::Mul => Value::from(lhs * rhs),
        BinaryOp::Div => Value::from(lhs / rhs),
        BinaryOp::Mod => Value::from(lhs % rhs),  // same as C fmod()

        BinaryOp::LT => Value::from(lhs < rhs),
        BinaryOp::GT => Value::from(lhs > rhs),
        BinaryOp::EQ => Value::from(lhs == rhs),
        BinaryOp::NE => Value::from(lhs != rhs),
    }
}

// None if the operator is not defined for strings
fn eval_string_op(op: BinaryOp, lhs: &str, rhs: &str) -> Option<Value> {
    let value = match op {
        BinaryOp::Add => {
            let mut buf = String::with_capacity(lhs.len() + rhs.len());
            buf.push_str(lhs);
            buf.push_str(rhs);
            Value::from(buf)
        },

        BinaryOp::EQ => Value::from(lhs == rhs),
        BinaryOp::NE => Value::from(lhs != rhs),

        _ => return None,
    };
    Some(value)
}
