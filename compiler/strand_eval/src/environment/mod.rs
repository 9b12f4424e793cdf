//! Environment for name resolution in the interpreter.
//!
//! Strand has exactly two namespaces:
//! - the **global table**: every procedure defined so far, visible everywhere;
//! - the **local frame**: the parameters of the current procedure call.
//!
//! Frames do not nest. A procedure body never sees its caller's frame, and
//! every block, loop and conditional inside one call shares the same frame.
//! Since parameters cannot be reassigned, a frame is immutable once bound
//! and is passed around by reference.

use rustc_hash::FxHashMap;

use strand_ir::Block;

use crate::Value;

/// A user-defined procedure.
///
/// Borrows its definition from the program tree, so the table stays valid
/// for as long as the program being run.
#[derive(Copy, Clone, Debug)]
pub struct Procedure<'a> {
    pub name: &'a str,
    pub params: &'a [String],
    pub body: &'a Block,
}

/// A parameter slot in a local frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Parameter received an argument.
    Bound(Value),
    /// Parameter was declared but the caller passed too few arguments.
    Unbound,
}

/// Parameter bindings of one procedure invocation.
#[derive(Clone, Debug, Default)]
pub struct LocalFrame {
    bindings: FxHashMap<String, Slot>,
}

impl LocalFrame {
    /// Create an empty frame (used for the top level of a program).
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `args` to `params` positionally.
    ///
    /// Extra arguments are ignored. Parameters without an argument are
    /// bound to [`Slot::Unbound`]. If a parameter name repeats, the last
    /// position wins.
    pub fn bind_parameters(params: &[String], args: &[Value]) -> Self {
        let mut bindings = FxHashMap::default();
        bindings.reserve(params.len());
        for (i, param) in params.iter().enumerate() {
            let slot = args.get(i).copied().map_or(Slot::Unbound, Slot::Bound);
            bindings.insert(param.clone(), slot);
        }
        LocalFrame { bindings }
    }

    /// Look up a parameter slot.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Slot> {
        self.bindings.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Process-wide table of defined procedures for one run.
#[derive(Debug, Default)]
pub struct GlobalTable<'a> {
    procedures: FxHashMap<&'a str, Procedure<'a>>,
}

impl<'a> GlobalTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a procedure, returning the one it replaced.
    pub fn define_procedure(&mut self, procedure: Procedure<'a>) -> Option<Procedure<'a>> {
        self.procedures.insert(procedure.name, procedure)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Procedure<'a>> {
        self.procedures.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.procedures.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.procedures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }

    pub fn clear(&mut self) {
        self.procedures.clear();
    }
}

/// What a bare name in a call expression refers to.
#[derive(Copy, Clone, Debug)]
pub enum Resolved<'a> {
    /// A procedure from the global table.
    Procedure(Procedure<'a>),
    /// A parameter of the current frame.
    Local(Slot),
}

/// Environment for the interpreter.
///
/// Owns the global table; local frames are owned by the executing call and
/// passed in where a lookup needs them.
#[derive(Debug, Default)]
pub struct Environment<'a> {
    globals: GlobalTable<'a>,
}

impl<'a> Environment<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) a procedure in the global table.
    pub fn define_procedure(&mut self, procedure: Procedure<'a>) {
        if self.globals.define_procedure(procedure).is_some() {
            tracing::debug!(name = procedure.name, "procedure redefined");
        } else {
            tracing::debug!(name = procedure.name, "procedure defined");
        }
    }

    /// Resolve a bare name: globals first, then the current frame.
    ///
    /// A procedure shadows a parameter of the same name.
    #[inline]
    pub fn resolve_call_target(&self, name: &str, frame: &LocalFrame) -> Option<Resolved<'a>> {
        if let Some(procedure) = self.globals.get(name) {
            return Some(Resolved::Procedure(procedure));
        }
        frame.lookup(name).map(Resolved::Local)
    }

    /// Drop every definition. Called at the start of each run.
    pub fn reset(&mut self) {
        self.globals.clear();
    }

    pub fn globals(&self) -> &GlobalTable<'a> {
        &self.globals
    }
}
