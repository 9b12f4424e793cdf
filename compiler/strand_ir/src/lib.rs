//! Strand IR - syntax tree types for the Strand language.
//!
//! This crate contains the node types the evaluator consumes:
//! - `Program` and `Block` containers
//! - `Stmt` variants (calls, procedures, loops, conditionals)
//! - `Expr` variants (literals, unary/binary operators, calls)
//! - `Position` for call-site line/column
//!
//! Trees are produced by an external parser. They can be built directly in
//! Rust through the constructor helpers, or loaded from the parser's JSON
//! output with [`load_program`].

pub mod ast;
mod load;
mod position;

pub use ast::{BinaryOp, Block, CallExpr, CallTarget, CondBranch, Expr, Program, Stmt, UnaryOp};
pub use load::{load_program, load_program_value, LoadError, NODE_KINDS};
pub use position::Position;
