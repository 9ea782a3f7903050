mod common;
use common::*;

#[test]
fn test_for_inclusive() {
    assert_eq!(exec("for (i in 1..3) { print(i); }"), "1\n2\n3\n");
}

#[test]
fn test_for_single_pass() {
    assert_eq!(exec("for (i in 4..4) { print(i) }"), "4\n");
}

#[test]
fn test_for_variable_survives() {
    let o = outcome("int total = 0; for (k in 1..10) { total = total + k }", "");
    assert_eq!(o.variable("total").map(|v| v.to_string()), Some("55".to_string()));
    assert_eq!(o.variable("k").map(|v| v.to_string()), Some("11".to_string()));
}

#[test]
fn test_for_nested() {
    let source = "for (i in 1..2) { for (j in 1..3) { print(i, j) } }";
    assert_eq!(exec(source), "1 1\n1 2\n1 3\n2 1\n2 2\n2 3\n");
}

#[test]
fn test_for_float_bounds() {
    assert_eq!(exec("for (x in 0.5 .. 2.5) { print(x) }"), "0.5\n1.5\n2.5\n");
}

#[test]
fn test_for_unspaced_float_end() {
    assert_eq!(exec("for (x in 0.5..2.5) { print(x) }"), "0.5\n1.5\n2.5\n");
    assert_eq!(exec("for (x in 1..3.5) { print(x) }"), "1\n2\n3\n");
}

#[test]
fn test_for_return_leaves_stack_clean() {
    assert_eq!(exec("for (i in 1..70000) { return 1 } print(7)"), "7\n");
}

#[test]
fn test_for_spaced_dots() {
    assert_eq!(exec("for (i in 1 . . 2) { print(i) }"), "1\n2\n");
}

#[test]
fn test_for_descending_rejected() {
    assert_eq!(exec("for (i in 3..1) { print(i) }"), "?INVALID RANGE IN LINE 1; 3..1\n");
}

#[test]
fn test_for_body_changes_counter() {
    assert_eq!(exec("for (i in 1..10) { print(i); i = i * 3 }"), "1\n4\n");
}

#[test]
fn test_for_many() {
    let o = outcome("int n = 0; for (i in 1..2000) { n = n + 1 }", "");
    assert_eq!(o.variable("n").map(|v| v.to_string()), Some("2000".to_string()));
}
