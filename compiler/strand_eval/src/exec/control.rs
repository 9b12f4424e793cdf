//! Control-signal interception.
//!
//! Each boundary intercepts exactly one signal kind and forwards everything
//! else unchanged:
//!
//! | boundary             | intercepts | helper             |
//! |----------------------|------------|--------------------|
//! | loop body            | `Break`    | `to_loop_action`   |
//! | procedure invocation | `Return`   | `intercept_return` |
//! | `Interpreter::run`   | `End`      | `finish_run`       |

use crate::errors::{ControlAction, EvalError, EvalResult};
use crate::Value;

/// Result of executing a statement or block.
///
/// Statements produce no value; the `Err` side carries signals and errors
/// exactly like `EvalResult`.
pub type ExecResult = Result<(), ControlAction>;

/// What a loop should do after one iteration of its body.
#[derive(Debug)]
pub enum LoopAction {
    /// Body completed normally; run the next iteration check.
    Continue,
    /// Body raised `Break`; leave the loop normally.
    Break,
    /// Body raised something the loop does not handle.
    Propagate(ControlAction),
}

/// Classify the outcome of one loop-body execution.
pub fn to_loop_action(result: ExecResult) -> LoopAction {
    match result {
        Ok(()) => LoopAction::Continue,
        Err(ControlAction::Break) => LoopAction::Break,
        Err(other) => LoopAction::Propagate(other),
    }
}

/// Map a procedure body's outcome to the call's value.
///
/// Normal completion yields `0` and `Return(v)` yields `v`. `Break` and
/// `End` are not scoped to the procedure and keep propagating into the
/// caller's context.
pub fn intercept_return(result: ExecResult) -> EvalResult {
    match result {
        Ok(()) => Ok(Value::ZERO),
        Err(ControlAction::Return(value)) => Ok(value),
        Err(other) => Err(other),
    }
}

/// How a program run finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The top-level block ran to completion.
    Completed,
    /// The program called `end()`.
    Ended,
}

/// Map the top-level block's outcome to the result of `run`.
///
/// `End` is successful termination. `Return` and `Break` that reach the top
/// level had no handler and are reported as `UnmatchedSignal`.
pub fn finish_run(result: ExecResult) -> Result<RunOutcome, EvalError> {
    match result {
        Ok(()) => Ok(RunOutcome::Completed),
        Err(ControlAction::End) => Ok(RunOutcome::Ended),
        Err(other) => Err(other.into_eval_error()),
    }
}
