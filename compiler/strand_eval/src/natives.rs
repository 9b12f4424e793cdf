//! Native function bridge.
//!
//! Hosts supply natives (drawing, printing, I/O, ...) through a
//! [`NativeRegistry`]. Every native receives its already-evaluated
//! positional arguments and returns a value, an error, or raises one of the
//! control signals.
//!
//! The evaluator installs five control primitives itself. They take
//! precedence over host natives of the same name:
//!
//! | name       | behavior                         |
//! |------------|----------------------------------|
//! | `true()`   | `1`                              |
//! | `false()`  | `0`                              |
//! | `return(v)`| raises `Return(v)`, `v` defaults to `0` |
//! | `break()`  | raises `Break`                   |
//! | `end()`    | raises `End`                     |

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{ControlAction, EvalResult, Value};

/// Names of the primitives the evaluator always provides.
pub const CONTROL_PRIMITIVES: [&str; 5] = ["true", "false", "return", "break", "end"];

/// A host-callable native.
///
/// Implemented for every `Fn(&[Value]) -> EvalResult + Send + Sync`, so plain
/// functions and closures can be registered directly.
pub trait NativeFunction: Send + Sync {
    fn call(&self, args: &[Value]) -> EvalResult;
}

impl<F> NativeFunction for F
where
    F: Fn(&[Value]) -> EvalResult + Send + Sync,
{
    #[inline]
    fn call(&self, args: &[Value]) -> EvalResult {
        self(args)
    }
}

/// Shared handle to a native.
pub type SharedNative = Arc<dyn NativeFunction>;

/// Name → native mapping.
#[derive(Clone, Default)]
pub struct NativeRegistry {
    natives: FxHashMap<String, SharedNative>,
}

impl NativeRegistry {
    /// Create an empty registry (no control primitives).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function or closure, replacing any native of that name.
    pub fn register<F>(&mut self, name: impl Into<String>, native: F) -> &mut Self
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        self.natives.insert(name.into(), Arc::new(native));
        self
    }

    /// Register an already-shared native (e.g. a custom `NativeFunction` impl).
    pub fn register_shared(&mut self, name: impl Into<String>, native: SharedNative) -> &mut Self {
        self.natives.insert(name.into(), native);
        self
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with<F>(mut self, name: impl Into<String>, native: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        self.register(name, native);
        self
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<SharedNative> {
        self.natives.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.natives.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.natives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.natives.is_empty()
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.natives.keys().map(String::as_str)
    }

    /// Install `true`, `false`, `return`, `break` and `end`, overriding any
    /// host natives with those names.
    pub fn install_control_primitives(&mut self) {
        for name in CONTROL_PRIMITIVES {
            if self.natives.contains_key(name) {
                tracing::warn!(name, "host native shadowed by control primitive");
            }
        }
        self.register("true", native_true);
        self.register("false", native_false);
        self.register("return", native_return);
        self.register("break", native_break);
        self.register("end", native_end);
    }
}

impl fmt::Debug for NativeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("NativeRegistry")
            .field("natives", &names)
            .finish()
    }
}

// Control Primitives

fn native_true(_args: &[Value]) -> EvalResult {
    Ok(Value::ONE)
}

fn native_false(_args: &[Value]) -> EvalResult {
    Ok(Value::ZERO)
}

fn native_return(args: &[Value]) -> EvalResult {
    Err(ControlAction::Return(
        args.first().copied().unwrap_or(Value::ZERO),
    ))
}

fn native_break(_args: &[Value]) -> EvalResult {
    Err(ControlAction::Break)
}

fn native_end(_args: &[Value]) -> EvalResult {
    Err(ControlAction::End)
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    clippy::arithmetic_side_effects,
    reason = "Tests use unwrap for brevity"
)]
mod tests {
    use super::*;
    use crate::errors::EvalError;
    use pretty_assertions::assert_eq;

    fn primitives() -> NativeRegistry {
        let mut registry = NativeRegistry::new();
        registry.install_control_primitives();
        registry
    }

    #[test]
    fn true_and_false_are_one_and_zero() {
        let registry = primitives();
        assert_eq!(registry.get("true").unwrap().call(&[]).unwrap(), Value::ONE);
        assert_eq!(registry.get("false").unwrap().call(&[]).unwrap(), Value::ZERO);
    }

    #[test]
    fn return_defaults_to_zero() {
        let registry = primitives();
        let native = registry.get("return").unwrap();
        assert!(matches!(
            native.call(&[]),
            Err(ControlAction::Return(v)) if v == Value::ZERO
        ));
        assert!(matches!(
            native.call(&[Value::new(8), Value::new(9)]),
            Err(ControlAction::Return(v)) if v == Value::new(8)
        ));
    }

    #[test]
    fn break_and_end_raise_signals() {
        let registry = primitives();
        assert!(matches!(
            registry.get("break").unwrap().call(&[]),
            Err(ControlAction::Break)
        ));
        assert!(matches!(
            registry.get("end").unwrap().call(&[]),
            Err(ControlAction::End)
        ));
    }

    #[test]
    fn primitives_override_host_natives() {
        let mut registry = NativeRegistry::new()
            .with("true", |_: &[Value]| Ok(Value::new(42)))
            .with("print", |_: &[Value]| Ok(Value::ZERO));
        registry.install_control_primitives();
        assert_eq!(registry.get("true").unwrap().call(&[]).unwrap(), Value::ONE);
        assert!(registry.contains("print"));
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn closures_capture_host_state() {
        let sum = Arc::new(parking_lot::Mutex::new(0_i64));
        let captured = Arc::clone(&sum);
        let registry = NativeRegistry::new().with("add", move |args: &[Value]| {
            let mut total = captured.lock();
            for arg in args {
                *total += arg.raw();
            }
            Ok(Value::new(*total))
        });
        let add = registry.get("add").unwrap();
        add.call(&[Value::new(2), Value::new(3)]).unwrap();
        assert_eq!(add.call(&[Value::new(1)]).unwrap(), Value::new(6));
        assert_eq!(*sum.lock(), 6);
    }

    #[test]
    fn natives_can_fail() {
        let registry =
            NativeRegistry::new().with("fail", |_: &[Value]| Err(EvalError::new("nope").into()));
        let result = registry.get("fail").unwrap().call(&[]);
        assert!(matches!(result, Err(ControlAction::Error(e)) if e.message == "nope"));
    }

    #[test]
    fn debug_lists_sorted_names() {
        let registry = primitives();
        assert_eq!(
            format!("{registry:?}"),
            r#"NativeRegistry { natives: ["break", "end", "false", "return", "true"] }"#
        );
    }
}
