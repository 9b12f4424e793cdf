//! Binary operator implementations for the evaluator.
//!
//! `evaluate_binary` applies an operator to two already-evaluated operands.
//! The short-circuit operators (`or`, `and`) are handled by the interpreter
//! because they decide whether the right operand is evaluated at all; given
//! both operands, they are still defined here so the operator table is
//! total.

use strand_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, EvalError};
use crate::Value;

/// Checked arithmetic operation with overflow handling.
#[inline]
fn checked_arith(result: Option<Value>, op_name: &'static str) -> Result<Value, EvalError> {
    result.ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate a binary operation on two values.
///
/// Division truncates toward zero. Division by zero and overflow are
/// errors; every other operator is total.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Mul => checked_arith(left.checked_mul(right), "multiplication"),
        BinaryOp::Div => {
            if right.is_zero() {
                Err(division_by_zero())
            } else {
                checked_arith(left.checked_div(right), "division")
            }
        }
        BinaryOp::Add => checked_arith(left.checked_add(right), "addition"),
        BinaryOp::Sub => checked_arith(left.checked_sub(right), "subtraction"),

        BinaryOp::Eq => Ok(Value::from_bool(left == right)),
        BinaryOp::NotEq => Ok(Value::from_bool(left != right)),
        BinaryOp::Lt => Ok(Value::from_bool(left < right)),
        BinaryOp::LtEq => Ok(Value::from_bool(left <= right)),
        BinaryOp::Gt => Ok(Value::from_bool(left > right)),
        BinaryOp::GtEq => Ok(Value::from_bool(left >= right)),

        // `or` yields the left operand itself when truthy, not 1.
        BinaryOp::Or => Ok(if left.is_truthy() { left } else { right }),
        BinaryOp::And => Ok(if left.is_truthy() { right } else { Value::ZERO }),
    }
}
