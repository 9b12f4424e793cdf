use pretty_assertions::assert_eq;
use strand_eval::Value;
use strand_ir::Stmt;

use super::common::*;

#[test]
fn first_truthy_branch_wins() {
    let program = program(vec![Stmt::conditional(
        vec![
            (lit(0), vec![print(lit(1))]),
            (lit(1), vec![print(lit(2))]),
            (lit(1), vec![print(lit(3))]),
        ],
        vec![print(lit(4))],
    )]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![2]);
}

#[test]
fn otherwise_runs_when_no_test_is_truthy() {
    let program = program(vec![Stmt::conditional(
        vec![(lit(0), vec![print(lit(1))]), (lit(0), vec![print(lit(2))])],
        vec![print(lit(4))],
    )]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![4]);
}

#[test]
fn empty_test_list_runs_otherwise() {
    let program = program(vec![Stmt::conditional(vec![], vec![print(lit(9))])]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![9]);
}

#[test]
fn any_non_zero_value_is_truthy() {
    let program = program(vec![Stmt::conditional(
        vec![(lit(-2), vec![print(lit(1))])],
        vec![print(lit(0))],
    )]);
    let host = Host::new();
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![1]);
}

#[test]
fn later_tests_are_not_evaluated() {
    let program = program(vec![Stmt::conditional(
        vec![
            (native("probe", vec![lit(0)]), vec![]),
            (native("probe", vec![lit(1)]), vec![print(lit(1))]),
            (native("probe", vec![lit(2)]), vec![print(lit(2))]),
        ],
        vec![],
    )]);
    let host = Host::new().native("probe", |args: &[Value]| Ok(args[0]));
    host.run(&program).unwrap();
    assert_eq!(host.printed(), vec![1]);
    // probe(0), probe(1), print(1)
    assert_eq!(host.events().len(), 3);
}
