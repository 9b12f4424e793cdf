use pretty_assertions::assert_eq;
use strand_eval::EvalErrorKind;
use strand_ir::{BinaryOp, Stmt};

use super::common::*;

fn add_procedure() -> Stmt {
    Stmt::procedure(
        "add",
        &["a", "b"],
        vec![ret(bin(BinaryOp::Add, var("a"), var("b")))],
    )
}

#[test]
fn add_two_arguments() {
    let program = program(vec![
        add_procedure(),
        print(call("add", vec![lit(2), lit(3)])),
    ]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![5]);
}

#[test]
fn missing_argument_fails_when_read() {
    let program = program(vec![add_procedure(), print(call("add", vec![lit(2)]))]);
    let host = Host::new();
    assert_eq!(
        host.run_err(&program),
        EvalErrorKind::UnboundParameter {
            name: "b".to_string()
        }
    );
    assert!(host.printed().is_empty());
}

#[test]
fn missing_argument_is_fine_when_not_read() {
    let program = program(vec![
        Stmt::procedure("first", &["a", "b"], vec![ret(var("a"))]),
        print(call("first", vec![lit(6)])),
    ]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![6]);
}

#[test]
fn extra_arguments_are_evaluated_and_ignored() {
    let program = program(vec![
        add_procedure(),
        print(call("add", vec![lit(2), lit(3), native("print", vec![lit(4)])])),
    ]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![4, 5]);
}

#[test]
fn procedure_without_return_yields_zero() {
    let program = program(vec![
        Stmt::procedure("noop", &[], vec![print(lit(1))]),
        print(call("noop", vec![])),
    ]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![1, 0]);
}

#[test]
fn return_without_value_yields_zero() {
    let program = program(vec![
        Stmt::procedure(
            "early",
            &[],
            vec![native_stmt("return", vec![]), print(lit(1))],
        ),
        print(call("early", vec![])),
    ]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![0]);
}

#[test]
fn return_leaves_loops_inside_the_procedure() {
    let program = program(vec![
        Stmt::procedure(
            "find",
            &[],
            vec![Stmt::infinite_loop(vec![Stmt::count_loop(
                lit(3),
                vec![ret(lit(4))],
            )])],
        ),
        print(call("find", vec![])),
    ]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![4]);
}

#[test]
fn recursion() {
    // fact(n) = n <= 1 ? 1 : n * fact(n - 1)
    let program = program(vec![
        Stmt::procedure(
            "fact",
            &["n"],
            vec![Stmt::conditional(
                vec![(bin(BinaryOp::LtEq, var("n"), lit(1)), vec![ret(lit(1))])],
                vec![ret(bin(
                    BinaryOp::Mul,
                    var("n"),
                    call("fact", vec![bin(BinaryOp::Sub, var("n"), lit(1))]),
                ))],
            )],
        ),
        print(call("fact", vec![lit(10)])),
    ]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![3_628_800]);
}

#[test]
fn procedures_are_not_hoisted() {
    let program = program(vec![
        call_stmt("later", vec![]),
        Stmt::procedure("later", &[], vec![]),
    ]);
    let host = Host::new();
    assert_eq!(
        host.run_err(&program),
        EvalErrorKind::UnresolvedReference {
            name: "later".to_string()
        }
    );
}

#[test]
fn redefinition_replaces_the_procedure() {
    let program = program(vec![
        Stmt::procedure("v", &[], vec![ret(lit(1))]),
        print(call("v", vec![])),
        Stmt::procedure("v", &[], vec![ret(lit(2))]),
        print(call("v", vec![])),
    ]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![1, 2]);
}

#[test]
fn procedures_defined_inside_procedures_are_global() {
    let program = program(vec![
        Stmt::procedure(
            "outer",
            &[],
            vec![Stmt::procedure("inner", &[], vec![ret(lit(8))])],
        ),
        call_stmt("outer", vec![]),
        print(call("inner", vec![])),
    ]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![8]);
}

#[test]
fn global_procedure_shadows_parameter() {
    let program = program(vec![
        Stmt::procedure("x", &[], vec![ret(lit(9))]),
        Stmt::procedure("f", &["x"], vec![print(var("x"))]),
        call_stmt("f", vec![lit(1)]),
    ]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![9]);
}

#[test]
fn callee_does_not_see_callers_parameters() {
    let program = program(vec![
        Stmt::procedure("inner", &[], vec![print(var("a"))]),
        Stmt::procedure("outer", &["a"], vec![call_stmt("inner", vec![])]),
        call_stmt("outer", vec![lit(1)]),
    ]);
    let host = Host::new();
    assert_eq!(
        host.run_err(&program),
        EvalErrorKind::UnresolvedReference {
            name: "a".to_string()
        }
    );
}

#[test]
fn parameters_cannot_be_called_with_arguments() {
    let program = program(vec![
        Stmt::procedure("f", &["x"], vec![print(call("x", vec![lit(1)]))]),
        call_stmt("f", vec![lit(2)]),
    ]);
    let host = Host::new();
    assert_eq!(
        host.run_err(&program),
        EvalErrorKind::NotCallable {
            name: "x".to_string()
        }
    );
}

#[test]
fn host_natives_are_not_reachable_by_bare_name() {
    let program = program(vec![call_stmt("print", vec![lit(1)])]);
    let host = Host::new();
    assert_eq!(
        host.run_err(&program),
        EvalErrorKind::UnresolvedReference {
            name: "print".to_string()
        }
    );
}
