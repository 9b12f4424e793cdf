//! Expression evaluation.

use strand_ir::{BinaryOp, Expr};

use super::Interpreter;
use crate::environment::LocalFrame;
use crate::errors::{ControlAction, EvalResult};
use crate::operators::evaluate_binary;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_unary;
use crate::Value;

impl<'a> Interpreter<'a> {
    /// Evaluate an expression to a value.
    pub(super) fn eval_expr(&mut self, expr: &'a Expr, frame: &LocalFrame) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, frame))
    }

    fn eval_expr_inner(&mut self, expr: &'a Expr, frame: &LocalFrame) -> EvalResult {
        match expr {
            Expr::Literal { value } => Ok(Value::new(*value)),
            Expr::Unary { op, operand } => {
                let value = self.eval_expr(operand, frame)?;
                Ok(evaluate_unary(value, *op))
            }
            Expr::Binary { op, left, right } => self.eval_binary(*op, left, right, frame),
            Expr::Call(call) => self.eval_call(call, frame),
        }
    }

    /// Evaluate a binary expression.
    ///
    /// `or` and `and` evaluate the right operand only when the left one does
    /// not decide the result, so a skipped operand raises nothing. All other
    /// operators evaluate left then right.
    fn eval_binary(
        &mut self,
        op: BinaryOp,
        left: &'a Expr,
        right: &'a Expr,
        frame: &LocalFrame,
    ) -> EvalResult {
        match op {
            BinaryOp::Or => {
                let left = self.eval_expr(left, frame)?;
                if left.is_truthy() {
                    Ok(left)
                } else {
                    self.eval_expr(right, frame)
                }
            }
            BinaryOp::And => {
                let left = self.eval_expr(left, frame)?;
                if left.is_truthy() {
                    self.eval_expr(right, frame)
                } else {
                    Ok(Value::ZERO)
                }
            }
            _ => {
                let left = self.eval_expr(left, frame)?;
                let right = self.eval_expr(right, frame)?;
                evaluate_binary(left, right, op).map_err(ControlAction::from)
            }
        }
    }
}
