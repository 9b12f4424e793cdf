//! Loading syntax trees from the parser's JSON output.
//!
//! Node kinds are checked against the known set before deserialization so
//! an unrecognized kind is reported as such instead of as a generic serde
//! mismatch. An unknown kind means the producing parser is out of sync
//! with this crate; it is never skipped.

use serde_json::Value as Json;

use crate::Program;

/// Node kinds the evaluator understands, as tagged by the parser.
pub const NODE_KINDS: &[&str] = &[
    "CallStatement",
    "ProcedureStatement",
    "InfiniteLoopStatement",
    "WhileLoopStatement",
    "CountLoopStatement",
    "ConditionalStatement",
    "CallExpression",
    "Literal",
    "UnaryExpression",
    "BinaryExpression",
];

const OPERATOR_SYMBOLS: &[&str] = &[
    "not", "-", "or", "and", "*", "/", "+", "==", "~=", "<", "<=", ">", ">=",
];

/// Error loading a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed syntax tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown syntax tree node kind `{kind}`")]
    UnknownNodeKind { kind: String },

    #[error("unknown operator `{symbol}`")]
    UnknownOperator { symbol: String },
}

/// Parse a program from the parser's JSON text.
pub fn load_program(json: &str) -> Result<Program, LoadError> {
    let raw: Json = serde_json::from_str(json)?;
    load_program_value(raw)
}

/// Build a program from an already-parsed JSON document.
pub fn load_program_value(raw: Json) -> Result<Program, LoadError> {
    // The root object's own tag (if any) is not a node kind.
    if let Json::Object(fields) = &raw {
        for (key, child) in fields {
            if key != "type" {
                check_kinds(key, child)?;
            }
        }
    }
    Ok(serde_json::from_value(raw)?)
}

fn check_kinds(key: &str, value: &Json) -> Result<(), LoadError> {
    match value {
        Json::Array(items) => items.iter().try_for_each(|item| check_kinds(key, item)),
        Json::Object(fields) => {
            if let Some(Json::String(tag)) = fields.get("type") {
                if key == "operator" {
                    if !OPERATOR_SYMBOLS.contains(&tag.as_str()) {
                        return Err(LoadError::UnknownOperator {
                            symbol: tag.clone(),
                        });
                    }
                } else if !NODE_KINDS.contains(&tag.as_str()) {
                    return Err(LoadError::UnknownNodeKind { kind: tag.clone() });
                }
            }
            fields
                .iter()
                .filter(|(field, _)| field.as_str() != "type")
                .try_for_each(|(field, child)| check_kinds(field, child))
        }
        _ => Ok(()),
    }
}
