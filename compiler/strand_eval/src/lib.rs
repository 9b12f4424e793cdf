#![deny(clippy::arithmetic_side_effects)]
//! Strand Eval - tree-walking evaluator for Strand programs.
//!
//! A Strand program is a tree of statements and expressions over a single
//! integer type. Hosts run it with an [`Interpreter`], supplying natives
//! (drawing, printing, ...) through a [`NativeRegistry`] and observing
//! call-site positions through a position handler.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: global procedure table plus per-call parameter frames
//! - `ControlAction`: `return`/`break`/`end` signals and errors on the `Err`
//!   side of `EvalResult`
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `PositionHandlerImpl`: enum-dispatched position notification
//! - `CallStack`: call-depth limit and backtraces
//!
//! # Example
//!
//! ```
//! use strand_eval::{Interpreter, NativeRegistry, RunOutcome, Value};
//! use strand_ir::{CallExpr, Expr, Program, Stmt};
//!
//! let program = Program::new(vec![Stmt::call(CallExpr::native(
//!     "print",
//!     vec![Expr::literal(42)],
//! ))]);
//! let natives = NativeRegistry::new().with("print", |args: &[Value]| {
//!     assert_eq!(args, &[Value::new(42)]);
//!     Ok(Value::ZERO)
//! });
//! let mut interpreter = Interpreter::builder().natives(natives).build();
//! assert!(matches!(interpreter.run(&program), Ok(RunOutcome::Completed)));
//! ```

mod diagnostics;
mod environment;
pub mod errors;
pub mod exec;
pub mod interpreter;
mod natives;
mod operators;
mod position;
mod stack;
mod unary_operators;
mod value;

pub use diagnostics::{CallFrame, CallStack};
pub use environment::{Environment, GlobalTable, LocalFrame, Procedure, Resolved, Slot};
pub use errors::{
    BacktraceFrame, ControlAction, EvalBacktrace, EvalError, EvalErrorKind, EvalResult,
    SignalKind,
};
pub use interpreter::{Interpreter, InterpreterBuilder, RunOutcome};
pub use natives::{NativeFunction, NativeRegistry, SharedNative, CONTROL_PRIMITIVES};
pub use operators::evaluate_binary;
pub use position::{
    buffer_handler, listener_handler, silent_handler, BufferPositionHandler,
    ListenerPositionHandler, PositionEvent, PositionHandlerImpl, PositionListener,
    SharedPositionHandler,
};
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;
pub use value::Value;

#[cfg(test)]
mod tests;
