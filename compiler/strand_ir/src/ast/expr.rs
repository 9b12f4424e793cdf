//! Expression nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{BinaryOp, UnaryOp};
use crate::Position;

/// Expression node.
///
/// There is no separate variable-read node: a bare name is a call
/// expression with no arguments, and the evaluator decides whether it
/// invokes a procedure or reads a parameter.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    #[serde(rename = "Literal")]
    Literal { value: i64 },

    #[serde(rename = "UnaryExpression")]
    Unary {
        #[serde(rename = "operator")]
        op: UnaryOp,
        #[serde(rename = "value")]
        operand: Box<Expr>,
    },

    #[serde(rename = "BinaryExpression")]
    Binary {
        #[serde(rename = "operator")]
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    #[serde(rename = "CallExpression")]
    Call(CallExpr),
}

impl Expr {
    pub fn literal(value: i64) -> Self {
        Expr::Literal { value }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Call to a host-supplied native.
    pub fn native(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr::native(name, args))
    }

    /// Call (or read) of a user-defined procedure or parameter.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr::named(name, args))
    }

    /// Zero-argument reference to a name.
    pub fn name(name: impl Into<String>) -> Self {
        Expr::call(name, Vec::new())
    }
}

impl From<CallExpr> for Expr {
    fn from(call: CallExpr) -> Self {
        Expr::Call(call)
    }
}

/// What a call expression refers to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CallTarget {
    /// Explicitly native call, resolved against the native registry only.
    Native(String),
    /// User procedure or local parameter, resolved through the environment.
    Name(String),
}

impl CallTarget {
    pub fn name(&self) -> &str {
        match self {
            CallTarget::Native(name) | CallTarget::Name(name) => name,
        }
    }
}

impl fmt::Display for CallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallTarget::Native(name) => write!(f, "native `{name}`"),
            CallTarget::Name(name) => write!(f, "`{name}`"),
        }
    }
}

/// A call expression with its positional arguments and call-site position.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawCallExpr", into = "RawCallExpr")]
pub struct CallExpr {
    pub target: CallTarget,
    pub args: Vec<Expr>,
    pub position: Position,
}

impl CallExpr {
    pub fn native(name: impl Into<String>, args: Vec<Expr>) -> Self {
        CallExpr {
            target: CallTarget::Native(name.into()),
            args,
            position: Position::UNKNOWN,
        }
    }

    pub fn named(name: impl Into<String>, args: Vec<Expr>) -> Self {
        CallExpr {
            target: CallTarget::Name(name.into()),
            args,
            position: Position::UNKNOWN,
        }
    }

    /// Set the call-site position.
    #[must_use]
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.position = Position::new(line, column);
        self
    }
}

/// Wire shape of a call expression.
///
/// The parser emits `nativeName` for native calls and `name` otherwise;
/// `nativeName` wins when both are present.
#[derive(Clone, Deserialize, Serialize)]
struct RawCallExpr {
    #[serde(rename = "nativeName", default, skip_serializing_if = "Option::is_none")]
    native_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    arguments: Vec<Expr>,
    #[serde(default)]
    line: u32,
    #[serde(default)]
    column: u32,
}

impl TryFrom<RawCallExpr> for CallExpr {
    type Error = String;

    fn try_from(raw: RawCallExpr) -> Result<Self, Self::Error> {
        let target = match (raw.native_name, raw.name) {
            (Some(native), _) if !native.is_empty() => CallTarget::Native(native),
            (_, Some(name)) if !name.is_empty() => CallTarget::Name(name),
            _ => return Err("call expression has neither `nativeName` nor `name`".to_string()),
        };
        Ok(CallExpr {
            target,
            args: raw.arguments,
            position: Position::new(raw.line, raw.column),
        })
    }
}

impl From<CallExpr> for RawCallExpr {
    fn from(call: CallExpr) -> Self {
        let (native_name, name) = match call.target {
            CallTarget::Native(native) => (Some(native), None),
            CallTarget::Name(name) => (None, Some(name)),
        };
        RawCallExpr {
            native_name,
            name,
            arguments: call.args,
            line: call.position.line,
            column: call.position.column,
        }
    }
}
