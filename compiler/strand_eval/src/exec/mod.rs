//! Shared helpers for the interpreter.
//!
//! - `call` - argument binding for procedure invocation
//! - `control` - interception of control signals at loop, procedure and
//!   program boundaries

pub mod call;
pub mod control;
