//! Statement nodes and blocks.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::{CallExpr, Expr};

/// Ordered sequence of statements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Block { stmts }
    }
}

impl Deref for Block {
    type Target = [Stmt];

    fn deref(&self) -> &Self::Target {
        &self.stmts
    }
}

impl From<Vec<Stmt>> for Block {
    fn from(stmts: Vec<Stmt>) -> Self {
        Block { stmts }
    }
}

/// One `(test, then)` arm of a conditional chain.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CondBranch {
    pub test: Expr,
    pub then: Block,
}

/// Statement node.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum Stmt {
    /// Call evaluated for its effects; the value is discarded.
    #[serde(rename = "CallStatement")]
    Call { expr: CallExpr },

    /// Procedure definition. Takes effect when executed, not before.
    #[serde(rename = "ProcedureStatement")]
    Procedure {
        name: String,
        #[serde(rename = "arguments")]
        params: Vec<String>,
        body: Block,
    },

    #[serde(rename = "InfiniteLoopStatement")]
    InfiniteLoop { body: Block },

    #[serde(rename = "WhileLoopStatement")]
    WhileLoop { test: Expr, body: Block },

    /// Loop whose bound is re-evaluated before every iteration.
    #[serde(rename = "CountLoopStatement")]
    CountLoop { count: Expr, body: Block },

    /// `if` / `else if` chain with a mandatory `else` block.
    #[serde(rename = "ConditionalStatement")]
    Conditional {
        tests: Vec<CondBranch>,
        otherwise: Block,
    },
}

impl Stmt {
    pub fn call(expr: CallExpr) -> Self {
        Stmt::Call { expr }
    }

    pub fn procedure(name: impl Into<String>, params: &[&str], body: Vec<Stmt>) -> Self {
        Stmt::Procedure {
            name: name.into(),
            params: params.iter().map(|p| (*p).to_string()).collect(),
            body: Block::new(body),
        }
    }

    pub fn infinite_loop(body: Vec<Stmt>) -> Self {
        Stmt::InfiniteLoop {
            body: Block::new(body),
        }
    }

    pub fn while_loop(test: Expr, body: Vec<Stmt>) -> Self {
        Stmt::WhileLoop {
            test,
            body: Block::new(body),
        }
    }

    pub fn count_loop(count: Expr, body: Vec<Stmt>) -> Self {
        Stmt::CountLoop {
            count,
            body: Block::new(body),
        }
    }

    pub fn conditional(tests: Vec<(Expr, Vec<Stmt>)>, otherwise: Vec<Stmt>) -> Self {
        Stmt::Conditional {
            tests: tests
                .into_iter()
                .map(|(test, then)| CondBranch {
                    test,
                    then: Block::new(then),
                })
                .collect(),
            otherwise: Block::new(otherwise),
        }
    }

    /// Statement kind as the parser names it.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Call { .. } => "CallStatement",
            Stmt::Procedure { .. } => "ProcedureStatement",
            Stmt::InfiniteLoop { .. } => "InfiniteLoopStatement",
            Stmt::WhileLoop { .. } => "WhileLoopStatement",
            Stmt::CountLoop { .. } => "CountLoopStatement",
            Stmt::Conditional { .. } => "ConditionalStatement",
        }
    }
}

/// Root of a parsed program.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Program {
    pub body: Block,
}

impl Program {
    pub fn new(body: Vec<Stmt>) -> Self {
        Program {
            body: Block::new(body),
        }
    }
}
