//! Call resolution and procedure invocation.

use strand_ir::{CallExpr, CallTarget, Expr, Position};

use super::Interpreter;
use crate::diagnostics::CallFrame;
use crate::environment::{LocalFrame, Procedure, Resolved, Slot};
use crate::errors::{
    not_callable, unbound_parameter, unresolved_reference, ControlAction, EvalResult,
};
use crate::exec::call::bind_arguments;
use crate::exec::control::intercept_return;
use crate::Value;

impl<'a> Interpreter<'a> {
    /// Evaluate a call expression.
    ///
    /// The target is resolved before any argument is evaluated. Arguments
    /// are evaluated left to right, then the position event fires, then the
    /// target is invoked. Errors that do not yet carry a position get this
    /// call's position.
    pub(super) fn eval_call(&mut self, call: &'a CallExpr, frame: &LocalFrame) -> EvalResult {
        self.eval_call_inner(call, frame)
            .map_err(|action| action.with_position_if_error(call.position))
    }

    fn eval_call_inner(&mut self, call: &'a CallExpr, frame: &LocalFrame) -> EvalResult {
        match &call.target {
            CallTarget::Native(name) => {
                let native = self
                    .natives
                    .get(name)
                    .ok_or_else(|| unresolved_reference(name))?;
                let args = self.eval_args(&call.args, frame)?;
                self.notify_position(call.position);
                native.call(&args)
            }
            CallTarget::Name(name) => match self.env.resolve_call_target(name, frame) {
                None => Err(unresolved_reference(name).into()),
                Some(Resolved::Procedure(procedure)) => {
                    let args = self.eval_args(&call.args, frame)?;
                    self.notify_position(call.position);
                    self.invoke_procedure(procedure, &args, call.position)
                }
                // A parameter is read, not called.
                Some(Resolved::Local(slot)) => {
                    if !call.args.is_empty() {
                        return Err(not_callable(name).into());
                    }
                    self.notify_position(call.position);
                    match slot {
                        Slot::Bound(value) => Ok(value),
                        Slot::Unbound => Err(unbound_parameter(name).into()),
                    }
                }
            },
        }
    }

    fn eval_args(
        &mut self,
        args: &'a [Expr],
        frame: &LocalFrame,
    ) -> Result<Vec<Value>, ControlAction> {
        args.iter().map(|arg| self.eval_expr(arg, frame)).collect()
    }

    /// Invoke a user procedure with already-evaluated arguments.
    ///
    /// The body runs in a fresh frame holding only the procedure's
    /// parameters. `Return` ends the call with its value; `Break` and `End`
    /// keep propagating into the caller.
    #[tracing::instrument(level = "debug", skip_all, fields(procedure = procedure.name))]
    fn invoke_procedure(
        &mut self,
        procedure: Procedure<'a>,
        args: &[Value],
        call_position: Position,
    ) -> EvalResult {
        self.call_stack.push(CallFrame {
            name: procedure.name.to_string(),
            call_position,
        })?;

        let frame = bind_arguments(&procedure, args);
        let result = match self.exec_block(procedure.body, &frame) {
            Err(ControlAction::Error(err)) => {
                Err(ControlAction::Error(self.call_stack.attach_backtrace(err)))
            }
            other => other,
        };

        self.call_stack.pop();
        intercept_return(result)
    }
}
