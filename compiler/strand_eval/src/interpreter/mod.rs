//! Tree-walking interpreter for Strand programs.
//!
//! # Module Structure
//!
//! - `builder` - `InterpreterBuilder` for configuration
//! - `exec` - statement execution (blocks, loops, conditionals)
//! - `eval` - expression evaluation
//! - `function_call` - call resolution and procedure invocation
//!
//! Execution is synchronous: every native call returns before the next step
//! begins, so a block's statements run as a strictly ordered chain.

mod builder;
mod eval;
mod exec;
mod function_call;

pub use builder::InterpreterBuilder;
pub use crate::exec::control::RunOutcome;

use strand_ir::{Position, Program};

use crate::diagnostics::CallStack;
use crate::environment::{Environment, LocalFrame};
use crate::errors::EvalError;
use crate::exec::control::finish_run;
use crate::natives::NativeRegistry;
use crate::position::{PositionEvent, SharedPositionHandler};

/// Tree-walking interpreter.
///
/// The global procedure table borrows definitions from the program being
/// run, so an interpreter is tied to the lifetime `'a` of the programs it
/// runs. Each `run` starts from an empty table.
pub struct Interpreter<'a> {
    /// Global procedure table for the current run.
    pub(crate) env: Environment<'a>,
    /// Host natives plus the control primitives.
    pub(crate) natives: NativeRegistry,
    /// Receives a position event before every call invocation.
    pub(crate) position_handler: SharedPositionHandler,
    /// Active user-procedure calls.
    pub(crate) call_stack: CallStack,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with only the control primitives and a silent
    /// position handler.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Create a builder for a configured interpreter.
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Run a program to completion.
    ///
    /// Returns `Completed` when the top-level block finishes and `Ended` when
    /// the program calls `end()`. Any error, and any `return`/`break` that no
    /// procedure or loop intercepted, aborts the run.
    #[tracing::instrument(level = "info", skip_all, fields(statements = program.body.len()))]
    pub fn run(&mut self, program: &'a Program) -> Result<RunOutcome, EvalError> {
        self.env.reset();
        self.call_stack.clear();

        let top_level = LocalFrame::new();
        let outcome = finish_run(self.exec_block(&program.body, &top_level));

        match &outcome {
            Ok(outcome) => tracing::debug!(?outcome, "run finished"),
            Err(err) => tracing::debug!(error = %err, "run failed"),
        }
        outcome
    }

    /// Procedures defined by the most recent run.
    pub fn environment(&self) -> &Environment<'a> {
        &self.env
    }

    pub fn natives(&self) -> &NativeRegistry {
        &self.natives
    }

    pub fn position_handler(&self) -> &SharedPositionHandler {
        &self.position_handler
    }

    /// Events captured by a buffering handler; empty otherwise.
    pub fn position_events(&self) -> Vec<PositionEvent> {
        self.position_handler.events()
    }

    pub fn max_call_depth(&self) -> Option<usize> {
        self.call_stack.max_depth()
    }

    #[inline]
    fn notify_position(&self, position: Position) {
        tracing::trace!(line = position.line, column = position.column, "call");
        self.position_handler.notify(position.into());
    }
}

impl Default for Interpreter<'_> {
    fn default() -> Self {
        Self::new()
    }
}
