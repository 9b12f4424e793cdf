//! Operator enums.
//!
//! Serde tags match the operator tokens emitted by the parser
//! (`{"type": "+"}`, `{"type": "not"}`, ...).

use serde::{Deserialize, Serialize};

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum BinaryOp {
    // Logical (short-circuit)
    #[serde(rename = "or")]
    Or,
    #[serde(rename = "and")]
    And,

    // Arithmetic
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,

    // Comparison
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "~=")]
    NotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    GtEq,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Or => "or",
            Self::And => "and",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Eq => "==",
            Self::NotEq => "~=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }

    /// Whether the right operand is only evaluated on demand.
    pub const fn is_short_circuit(self) -> bool {
        matches!(self, Self::Or | Self::And)
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum UnaryOp {
    #[serde(rename = "not")]
    Not,
    #[serde(rename = "-")]
    Negate,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::Negate => "-",
        }
    }
}
