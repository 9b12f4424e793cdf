use pretty_assertions::assert_eq;
use strand_eval::RunOutcome;
use strand_ir::{CallExpr, Stmt};

use super::common::*;

#[test]
fn statements_run_in_order() {
    let program = program(vec![
        print_at(lit(1), 1, 1),
        print_at(lit(2), 2, 1),
        print_at(lit(3), 3, 1),
    ]);
    let host = Host::new();
    assert_eq!(host.run(&program).unwrap(), RunOutcome::Completed);
    assert_eq!(host.printed(), vec![1, 2, 3]);
    assert_eq!(host.events(), vec![(1, 1), (2, 1), (3, 1)]);
}

#[test]
fn arguments_are_announced_before_their_call() {
    let program = program(vec![Stmt::call(
        CallExpr::native(
            "print",
            vec![
                CallExpr::native("true", vec![]).at(1, 7).into(),
                CallExpr::native("false", vec![]).at(1, 15).into(),
            ],
        )
        .at(1, 1),
    )]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![1, 0]);
    assert_eq!(host.events(), vec![(1, 7), (1, 15), (1, 1)]);
}

#[test]
fn parameter_reads_are_announced() {
    let program = program(vec![
        Stmt::procedure(
            "show",
            &["x"],
            vec![print_at(
                CallExpr::named("x", vec![]).at(2, 9).into(),
                2,
                3,
            )],
        ),
        Stmt::call(CallExpr::named("show", vec![lit(4)]).at(4, 1)),
    ]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![4]);
    assert_eq!(host.events(), vec![(4, 1), (2, 9), (2, 3)]);
}

#[test]
fn definitions_are_not_announced() {
    let program = program(vec![Stmt::procedure("f", &[], vec![print(lit(1))])]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert!(host.events().is_empty());
    assert!(host.printed().is_empty());
}

#[test]
fn end_stops_the_whole_program() {
    let program = program(vec![
        Stmt::procedure(
            "deep",
            &[],
            vec![Stmt::infinite_loop(vec![
                Stmt::call(CallExpr::native("end", vec![]).at(3, 5)),
                print_at(lit(99), 4, 5),
            ])],
        ),
        print_at(lit(1), 7, 1),
        Stmt::call(CallExpr::named("deep", vec![]).at(8, 1)),
        print_at(lit(2), 9, 1),
    ]);
    let host = Host::new();
    assert_eq!(host.run(&program).unwrap(), RunOutcome::Ended);
    assert_eq!(host.printed(), vec![1]);
    assert_eq!(host.events(), vec![(7, 1), (8, 1), (3, 5)]);
}

#[test]
fn end_at_top_level() {
    let program = program(vec![print(lit(1)), native_stmt("end", vec![]), print(lit(2))]);
    let host = Host::new();
    assert_eq!(host.run(&program).unwrap(), RunOutcome::Ended);
    assert_eq!(host.printed(), vec![1]);
}

#[test]
fn each_run_starts_with_an_empty_procedure_table() {
    let define = program(vec![Stmt::procedure("f", &[], vec![print(lit(1))])]);
    let use_it = program(vec![call_stmt("f", vec![])]);
    let host = Host::new();

    host.run(&define).unwrap();
    assert!(matches!(
        host.run_err(&use_it),
        strand_eval::EvalErrorKind::UnresolvedReference { ref name } if name == "f"
    ));

    let mut interpreter = strand_eval::Interpreter::new();
    interpreter.run(&define).unwrap();
    assert!(interpreter.run(&use_it).is_err());
}
