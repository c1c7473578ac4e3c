//! Arithmetic and comparison. Both sides must be numbers.

use virt_ir::{BinaryOp, CompareOp};

use crate::errors::{invalid_binary_operands, invalid_compare_operands};
use crate::{RuntimeError, Value};

pub(super) fn eval_binary(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value, RuntimeError> {
    let (Value::Number(a), Value::Number(b)) = (lhs, rhs) else {
        return Err(invalid_binary_operands(op, lhs, rhs));
    };
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Mod => a % b,
    };
    Ok(Value::Number(result))
}

pub(super) fn eval_compare(op: CompareOp, lhs: &Value, rhs: &Value) -> Result<Value, RuntimeError> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Boolean(op.apply(*a, *b))),
        _ => Err(invalid_compare_operands(op, lhs, rhs)),
    }
}
