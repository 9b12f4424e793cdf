//! Error and control-flow types for the evaluator.
//!
//! Evaluation returns `EvalResult = Result<Value, ControlAction>`. The `Err`
//! side carries either a real error or one of the three control signals
//! (`return`, `break`, `end`). Signals are not errors; they unwind until a
//! matching handler intercepts them:
//! - loops intercept `Break`
//! - procedure invocation intercepts `Return`
//! - `Interpreter::run` intercepts `End`
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` provides typed error categories. Factory functions (e.g.
//! `division_by_zero()`) are the public API; they populate both `kind` and
//! `message`.

use std::fmt;

use strand_ir::Position;

use crate::Value;

/// Result of evaluating an expression or executing a statement.
pub type EvalResult = Result<Value, ControlAction>;

/// The three control signals a program can raise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Return,
    Break,
    End,
}

impl SignalKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Return => "return",
            Self::Break => "break",
            Self::End => "end",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Resolution
    UnresolvedReference {
        name: String,
    },
    NotCallable {
        name: String,
    },
    UnboundParameter {
        name: String,
    },

    // Structure
    UnmatchedSignal {
        signal: SignalKind,
    },

    // Arithmetic
    DivisionByZero,
    IntegerOverflow {
        operation: String,
    },

    // Resources
    StackOverflow {
        depth: usize,
    },

    /// Errors raised by host natives.
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedReference { name } => write!(f, "unknown variable '{name}'"),
            Self::NotCallable { name } => {
                write!(f, "'{name}' is a parameter and cannot be called with arguments")
            }
            Self::UnboundParameter { name } => {
                write!(f, "parameter '{name}' was not given an argument")
            }
            Self::UnmatchedSignal { signal } => {
                let context = match signal {
                    SignalKind::Break => "outside of a loop",
                    SignalKind::Return => "outside of a procedure",
                    SignalKind::End => "outside of a program",
                };
                write!(f, "`{signal}` used {context}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::StackOverflow { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Procedure name.
    pub name: String,
    /// Call site.
    pub position: Position,
}

/// Snapshot of the procedure call stack at an error site, most recent first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {} at {}", frame.name, frame.position)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory errors.
    pub message: String,
    /// Position of the innermost call expression that was being evaluated.
    pub position: Option<Position>,
    /// Procedure call chain at the error site.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    /// Create an error with just a message (`Custom` kind).
    ///
    /// Intended for host natives. Prefer the factory functions for errors
    /// raised by the evaluator itself.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            position: None,
            backtrace: None,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            position: None,
            backtrace: None,
        }
    }

    /// Attach a position, replacing any existing one.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Attach a backtrace.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(position) = self.position {
            write!(f, " at {position}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

/// Non-value outcome of evaluation.
#[derive(Clone, Debug)]
pub enum ControlAction {
    /// `return(value)`; intercepted at the procedure boundary.
    Return(Value),
    /// `break()`; intercepted by the nearest enclosing loop.
    Break,
    /// `end()`; intercepted by `Interpreter::run` as successful termination.
    End,
    /// A terminal error; never intercepted in-language.
    Error(EvalError),
}

impl ControlAction {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The signal this action carries, if it is not an error.
    pub fn signal(&self) -> Option<SignalKind> {
        match self {
            Self::Return(_) => Some(SignalKind::Return),
            Self::Break => Some(SignalKind::Break),
            Self::End => Some(SignalKind::End),
            Self::Error(_) => None,
        }
    }

    /// Convert to an `EvalError`.
    ///
    /// Signals become `UnmatchedSignal` errors: this is how a signal that
    /// escaped every handler is reported.
    pub fn into_eval_error(self) -> EvalError {
        match self {
            Self::Error(e) => e,
            Self::Return(_) => unmatched_signal(SignalKind::Return),
            Self::Break => unmatched_signal(SignalKind::Break),
            Self::End => unmatched_signal(SignalKind::End),
        }
    }

    /// Record `position` on an error that does not have one yet.
    ///
    /// Signals pass through unchanged.
    #[must_use]
    pub fn with_position_if_error(self, position: Position) -> Self {
        match self {
            Self::Error(e) if e.position.is_none() => Self::Error(e.with_position(position)),
            other => other,
        }
    }
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        Self::Error(err)
    }
}

// Resolution Errors

#[cold]
pub fn unresolved_reference(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnresolvedReference {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_callable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        name: name.to_string(),
    })
}

#[cold]
pub fn unbound_parameter(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundParameter {
        name: name.to_string(),
    })
}

// Structural Errors

#[cold]
pub fn unmatched_signal(signal: SignalKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnmatchedSignal { signal })
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// Resource Errors

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}
