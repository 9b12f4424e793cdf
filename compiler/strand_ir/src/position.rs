//! Source positions for call expressions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Line and column of a call expression in the program source.
///
/// Only call expressions carry positions; they are what the evaluator
/// reports before every invocation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Deserialize, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position used by trees built without source information.
    pub const UNKNOWN: Position = Position { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
