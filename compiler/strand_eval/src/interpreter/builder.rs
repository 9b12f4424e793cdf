//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::environment::Environment;
use crate::natives::NativeRegistry;
use crate::position::{silent_handler, SharedPositionHandler};

/// Builder for creating Interpreter instances.
///
/// Defaults: no host natives, a silent position handler and unlimited call
/// depth. The control primitives are always installed by `build`.
#[derive(Default)]
pub struct InterpreterBuilder {
    natives: Option<NativeRegistry>,
    position_handler: Option<SharedPositionHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host natives.
    #[must_use]
    pub fn natives(mut self, natives: NativeRegistry) -> Self {
        self.natives = Some(natives);
        self
    }

    /// Set the handler that receives position events.
    #[must_use]
    pub fn position_handler(mut self, handler: SharedPositionHandler) -> Self {
        self.position_handler = Some(handler);
        self
    }

    /// Limit nested procedure calls. Exceeding it fails the run with
    /// `StackOverflow`.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    /// Build the interpreter.
    pub fn build<'a>(self) -> Interpreter<'a> {
        let mut natives = self.natives.unwrap_or_default();
        natives.install_control_primitives();

        Interpreter {
            env: Environment::new(),
            natives,
            position_handler: self.position_handler.unwrap_or_else(silent_handler),
            call_stack: CallStack::new(self.max_call_depth),
        }
    }
}
