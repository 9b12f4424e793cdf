//! Host harness shared by the program tests.

use std::sync::Arc;

use parking_lot::Mutex;
use strand_eval::{
    buffer_handler, EvalError, EvalErrorKind, Interpreter, NativeRegistry, RunOutcome,
    SharedPositionHandler, Value,
};
use strand_ir::{BinaryOp, CallExpr, Expr, Program, Stmt};

/// A host with a recording `print` native and a buffering position handler.
///
/// Every `run` builds a fresh interpreter over the same natives, so host
/// state (printed values, counters) accumulates across runs.
pub struct Host {
    printed: Arc<Mutex<Vec<i64>>>,
    natives: NativeRegistry,
    handler: SharedPositionHandler,
    max_call_depth: Option<usize>,
}

impl Host {
    pub fn new() -> Self {
        let printed = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&printed);
        let natives = NativeRegistry::new().with("print", move |args: &[Value]| {
            sink.lock().extend(args.iter().map(|v| v.raw()));
            Ok(Value::ZERO)
        });
        Host {
            printed,
            natives,
            handler: buffer_handler(),
            max_call_depth: None,
        }
    }

    /// Register an extra native.
    pub fn native<F>(mut self, name: &str, native: F) -> Self
    where
        F: Fn(&[Value]) -> strand_eval::EvalResult + Send + Sync + 'static,
    {
        self.natives.register(name, native);
        self
    }

    /// Register a native returning `start`, `start - 1`, ... on successive
    /// calls.
    pub fn countdown(self, name: &str, start: i64) -> Self {
        let state = Arc::new(Mutex::new(start));
        self.native(name, move |_: &[Value]| {
            let mut current = state.lock();
            let value = *current;
            *current -= 1;
            Ok(Value::new(value))
        })
    }

    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    pub fn run(&self, program: &Program) -> Result<RunOutcome, EvalError> {
        let mut builder = Interpreter::builder()
            .natives(self.natives.clone())
            .position_handler(Arc::clone(&self.handler));
        if let Some(depth) = self.max_call_depth {
            builder = builder.max_call_depth(depth);
        }
        let mut interpreter = builder.build();
        interpreter.run(program)
    }

    /// Run and return the error kind, panicking if the run succeeds.
    pub fn run_err(&self, program: &Program) -> EvalErrorKind {
        match self.run(program) {
            Ok(outcome) => panic!("expected failure, run finished with {outcome:?}"),
            Err(err) => err.kind,
        }
    }

    pub fn printed(&self) -> Vec<i64> {
        self.printed.lock().clone()
    }

    pub fn events(&self) -> Vec<(u32, u32)> {
        self.handler
            .events()
            .into_iter()
            .map(|e| (e.line, e.column))
            .collect()
    }
}

pub fn lit(value: i64) -> Expr {
    Expr::literal(value)
}

pub fn bin(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::binary(op, left, right)
}

/// Native call expression.
pub fn native(name: &str, args: Vec<Expr>) -> Expr {
    Expr::native(name, args)
}

/// Procedure call or parameter read.
pub fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::call(name, args)
}

pub fn var(name: &str) -> Expr {
    Expr::name(name)
}

/// `print(expr)` statement.
pub fn print(expr: Expr) -> Stmt {
    Stmt::call(CallExpr::native("print", vec![expr]))
}

/// `print(expr)` statement at a source position.
pub fn print_at(expr: Expr, line: u32, column: u32) -> Stmt {
    Stmt::call(CallExpr::native("print", vec![expr]).at(line, column))
}

/// Native call statement.
pub fn native_stmt(name: &str, args: Vec<Expr>) -> Stmt {
    Stmt::call(CallExpr::native(name, args))
}

/// Procedure call statement.
pub fn call_stmt(name: &str, args: Vec<Expr>) -> Stmt {
    Stmt::call(CallExpr::named(name, args))
}

pub fn brk() -> Stmt {
    native_stmt("break", vec![])
}

pub fn ret(value: Expr) -> Stmt {
    native_stmt("return", vec![value])
}

pub fn program(body: Vec<Stmt>) -> Program {
    Program::new(body)
}
