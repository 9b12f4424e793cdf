//! Statement execution.

use strand_ir::{Block, CondBranch, Expr, Stmt};

use super::Interpreter;
use crate::environment::{LocalFrame, Procedure};
use crate::errors::integer_overflow;
use crate::exec::control::{to_loop_action, ExecResult, LoopAction};
use crate::stack::ensure_sufficient_stack;
use crate::Value;

impl<'a> Interpreter<'a> {
    /// Execute a block's statements in order, stopping at the first signal
    /// or error.
    pub(super) fn exec_block(&mut self, block: &'a Block, frame: &LocalFrame) -> ExecResult {
        for stmt in block.iter() {
            self.exec_stmt(stmt, frame)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, stmt: &'a Stmt, frame: &LocalFrame) -> ExecResult {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt, frame))
    }

    fn exec_stmt_inner(&mut self, stmt: &'a Stmt, frame: &LocalFrame) -> ExecResult {
        match stmt {
            Stmt::Call { expr } => {
                self.eval_call(expr, frame)?;
                Ok(())
            }
            Stmt::Procedure { name, params, body } => {
                self.env.define_procedure(Procedure {
                    name: name.as_str(),
                    params: params.as_slice(),
                    body,
                });
                Ok(())
            }
            Stmt::InfiniteLoop { body } => self.exec_infinite_loop(body, frame),
            Stmt::WhileLoop { test, body } => self.exec_while_loop(test, body, frame),
            Stmt::CountLoop { count, body } => self.exec_count_loop(count, body, frame),
            Stmt::Conditional { tests, otherwise } => {
                self.exec_conditional(tests, otherwise, frame)
            }
        }
    }

    fn exec_infinite_loop(&mut self, body: &'a Block, frame: &LocalFrame) -> ExecResult {
        loop {
            match to_loop_action(self.exec_block(body, frame)) {
                LoopAction::Continue => {}
                LoopAction::Break => return Ok(()),
                LoopAction::Propagate(action) => return Err(action),
            }
        }
    }

    fn exec_while_loop(
        &mut self,
        test: &'a Expr,
        body: &'a Block,
        frame: &LocalFrame,
    ) -> ExecResult {
        while self.eval_expr(test, frame)?.is_truthy() {
            match to_loop_action(self.exec_block(body, frame)) {
                LoopAction::Continue => {}
                LoopAction::Break => break,
                LoopAction::Propagate(action) => return Err(action),
            }
        }
        Ok(())
    }

    /// The count expression is re-evaluated before every iteration, so a
    /// count that shrinks as the loop runs ends the loop early.
    fn exec_count_loop(
        &mut self,
        count: &'a Expr,
        body: &'a Block,
        frame: &LocalFrame,
    ) -> ExecResult {
        let mut iterations = Value::ZERO;
        loop {
            let limit = self.eval_expr(count, frame)?;
            if iterations >= limit {
                return Ok(());
            }
            iterations = iterations
                .checked_add(Value::ONE)
                .ok_or_else(|| integer_overflow("loop counter"))?;

            match to_loop_action(self.exec_block(body, frame)) {
                LoopAction::Continue => {}
                LoopAction::Break => return Ok(()),
                LoopAction::Propagate(action) => return Err(action),
            }
        }
    }

    /// Run the first branch whose test is truthy, else `otherwise`.
    ///
    /// Tests after the selected branch are not evaluated.
    fn exec_conditional(
        &mut self,
        tests: &'a [CondBranch],
        otherwise: &'a Block,
        frame: &LocalFrame,
    ) -> ExecResult {
        for branch in tests {
            if self.eval_expr(&branch.test, frame)?.is_truthy() {
                return self.exec_block(&branch.then, frame);
            }
        }
        self.exec_block(otherwise, frame)
    }
}
