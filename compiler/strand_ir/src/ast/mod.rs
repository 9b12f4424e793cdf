//! Syntax tree node types.
//!
//! Nodes are immutable once built and owned by a `Program`. Expressions
//! box their children; there is no arena because trees arrive already
//! built from the parser and are walked once.

mod expr;
mod operators;
mod stmt;

pub use expr::{CallExpr, CallTarget, Expr};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Block, CondBranch, Program, Stmt};
