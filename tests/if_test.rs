mod common;
use common::*;

#[test]
fn test_if_then_else() {
    let source = "int x = 5; if (x > 3) { print(1); } else { print(0); }";
    assert_eq!(exec(source), "1\n");
    let source = "int x = 1; if (x > 3) { print(1); } else { print(0); }";
    assert_eq!(exec(source), "0\n");
}

#[test]
fn test_if_without_else() {
    assert_eq!(exec("if (1 == 1) { print(\"yes\") } print(\"after\")"), "yes\nafter\n");
    assert_eq!(exec("if (1 == 2) { print(\"yes\") } print(\"after\")"), "after\n");
}

#[test]
fn test_truthiness() {
    assert_eq!(exec("if (0.0) { print(1) } else { print(2) }"), "2\n");
    assert_eq!(exec("if (\"\") { print(1) } else { print(2) }"), "2\n");
    assert_eq!(exec("if (-3) { print(1) } else { print(2) }"), "1\n");
    assert_eq!(exec("if (false) { print(1) } else { print(2) }"), "2\n");
}

#[test]
fn test_nested() {
    let source = "
        int a = 2
        int b = 7
        if (a < b) {
            if (b > 5) {
                print(\"big\")
            } else {
                print(\"small\")
            }
            print(\"less\")
        } else {
            print(\"more\")
        }
    ";
    assert_eq!(exec(source), "big\nless\n");
}

#[test]
fn test_else_if_needs_block() {
    assert_eq!(
        exec("if (true) { } else if (false) { }"),
        "?TOKEN MISMATCH IN LINE 1; FOUND (if, KEYWORD) EXPECTED ({, PAR_OP)\n"
    );
}

#[test]
fn test_condition_errors() {
    assert_eq!(
        exec("if x > 1 { }"),
        "?TOKEN MISMATCH IN LINE 1; FOUND (x, IDENTIFIER) EXPECTED ((, PAR_OP)\n"
    );
    assert_eq!(exec("if (nope) { }"), "?UNDEFINED VARIABLE AT 0; nope\n");
}
