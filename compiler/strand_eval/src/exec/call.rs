//! Argument binding for procedure calls.

use crate::environment::{LocalFrame, Procedure};
use crate::Value;

/// Build the frame for one invocation of `procedure`.
///
/// Binding is positional. Surplus arguments are evaluated by the caller but
/// dropped here; missing ones leave their parameter unbound.
pub fn bind_arguments(procedure: &Procedure<'_>, args: &[Value]) -> LocalFrame {
    let params = procedure.params;
    if args.len() > params.len() {
        tracing::trace!(
            procedure = procedure.name,
            expected = params.len(),
            given = args.len(),
            "surplus arguments ignored"
        );
    }
    LocalFrame::bind_parameters(params, args)
}
