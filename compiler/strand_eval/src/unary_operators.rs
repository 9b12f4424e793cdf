//! Unary operator implementations for the evaluator.

use strand_ir::UnaryOp;

use crate::Value;

/// Evaluate a unary operation.
///
/// `not` yields `1` for zero and `0` otherwise. `-` returns its operand
/// unchanged; it does not flip the sign.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> Value {
    match op {
        UnaryOp::Not => Value::from_bool(value.is_zero()),
        UnaryOp::Negate => value,
    }
}
