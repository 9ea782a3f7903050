use super::*;
use crate::lang::{lex, ErrorCode};
use crate::mach::translate;

fn error(source: &str) -> crate::lang::Error {
    match compile(source) {
        Ok(program) => panic!("{:?}", program),
        Err(mut errors) => errors.remove(0),
    }
}

#[test]
fn test_assignment_order() {
    assert_eq!(
        code("int x = 2; int y = 3; print(x + y * 2);"),
        vec![
            "2 INT",
            "x IDENTIFIER_LVALUE",
            ":= ASSIGN_OP",
            "3 INT",
            "y IDENTIFIER_LVALUE",
            ":= ASSIGN_OP",
            "x IDENTIFIER",
            "y IDENTIFIER",
            "2 INT",
            "* MULT_OP",
            "+ ADD_OP",
            "1 INT",
            "PRINT PRINT_OP",
        ]
    );
}

#[test]
fn test_precedence() {
    assert_eq!(
        code("z = -a ^ 2 < (b - c) / 4"),
        vec![
            "a IDENTIFIER",
            "NEG UNARY_OP",
            "2 INT",
            "^ POWER_OP",
            "b IDENTIFIER",
            "c IDENTIFIER",
            "- ADD_OP",
            "4 INT",
            "/ MULT_OP",
            "< COMPARE_OP",
            "z IDENTIFIER_LVALUE",
            ":= ASSIGN_OP",
        ]
    );
    assert_eq!(code("z = +1"), vec!["1 INT", "z IDENTIFIER_LVALUE", ":= ASSIGN_OP"]);
}

#[test]
fn test_if_else() {
    let p = program("if (x > 3) { print(1); } else { print(0); }");
    let listing: Vec<String> = p
        .instructions()
        .iter()
        .map(|ins| format!("{} {}", ins.lexeme(), ins.opcode()))
        .collect();
    assert_eq!(
        listing,
        vec![
            "x IDENTIFIER",
            "3 INT",
            "> COMPARE_OP",
            "m1 LABEL",
            "JF JUMP_IF_FALSE",
            "1 INT",
            "1 INT",
            "PRINT PRINT_OP",
            "m2 LABEL",
            "JMP JUMP",
            "m1 COLON",
            "0 INT",
            "1 INT",
            "PRINT PRINT_OP",
            "m2 COLON",
        ]
    );
    assert_eq!(p.label("m1"), Some(11));
    assert_eq!(p.label("m2"), Some(15));
}

#[test]
fn test_if_without_else() {
    let p = program("if (true) { x = 1 }");
    assert_eq!(p.label("m1"), Some(p.len()));
    assert_eq!(p.label("m2"), None);
}

#[test]
fn test_for() {
    let p = program("for (i in 1..3) { print(i); }");
    let listing: Vec<String> = p
        .instructions()
        .iter()
        .map(|ins| format!("{} {}", ins.lexeme(), ins.opcode()))
        .collect();
    assert_eq!(
        listing,
        vec![
            "1 INT",
            "i IDENTIFIER_LVALUE",
            ":= ASSIGN_OP",
            "m1 COLON",
            "i IDENTIFIER",
            "3 INT",
            "<= COMPARE_OP",
            "m2 LABEL",
            "JF JUMP_IF_FALSE",
            "i IDENTIFIER",
            "1 INT",
            "PRINT PRINT_OP",
            "i IDENTIFIER",
            "1 INT",
            "+ ADD_OP",
            "i IDENTIFIER_LVALUE",
            ":= ASSIGN_OP",
            "m1 LABEL",
            "JMP JUMP",
            "m2 COLON",
        ]
    );
    assert_eq!(p.label("m1"), Some(4));
    assert_eq!(p.label("m2"), Some(20));
}

#[test]
fn test_range_spellings() {
    for source in &[
        "for (i in 1..3) {}",
        "for (i in 1 .. 3) {}",
        "for (i in 1. .3) {}",
        "for (i in 1 . . 3) {}",
    ] {
        let c = code(source);
        assert_eq!(c[0], "1 INT", "{}", source);
        assert_eq!(c[5], "3 INT", "{}", source);
    }
    for source in &["for (i in 0.5 .. 2.5) {}", "for (i in 0.5..2.5) {}"] {
        let c = code(source);
        assert_eq!(c[0], "0.5 FLOAT", "{}", source);
        assert_eq!(c[5], "2.5 FLOAT", "{}", source);
    }
    let c = code("for (i in 1..3.5) {}");
    assert_eq!(c[0], "1 INT");
    assert_eq!(c[5], "3.5 FLOAT");
}

#[test]
fn test_bad_ranges() {
    assert_eq!(error("for (i in 3..1) {}").code(), ErrorCode::InvalidRange);
    assert_eq!(error("for (i in 1...3) {}").code(), ErrorCode::InvalidRange);
    assert_eq!(error("for (i in 1 3) {}").code(), ErrorCode::InvalidRange);
    assert_eq!(error("for (i in x..3) {}").code(), ErrorCode::UnexpectedToken);
}

#[test]
fn test_labels_unique() {
    let p = program("if (a) { for (i in 1..2) { if (b) {} } } else {}");
    let names: Vec<String> = p.labels().iter().map(|(n, _)| n.to_string()).collect();
    assert_eq!(names.len(), 5);
    assert!(names.contains(&"m5".to_string()));
    assert!(!names.contains(&"m6".to_string()));
}

#[test]
fn test_print_input() {
    assert_eq!(code("print()"), vec!["0 INT", "PRINT PRINT_OP"]);
    assert_eq!(
        code("input(n)"),
        vec!["n IDENTIFIER_LVALUE", "INPUT INPUT_OP"]
    );
}

#[test]
fn test_declarations() {
    assert_eq!(
        code("float a, b = 1.5; const int k = -2, m = 3"),
        vec![
            "1.5 FLOAT",
            "b IDENTIFIER_LVALUE",
            ":= ASSIGN_OP",
            "2 INT",
            "NEG UNARY_OP",
            "k IDENTIFIER_LVALUE",
            ":= ASSIGN_OP",
            "3 INT",
            "m IDENTIFIER_LVALUE",
            ":= ASSIGN_OP",
        ]
    );
    assert_eq!(
        error("const int k = x").code(),
        ErrorCode::UnexpectedToken
    );
}

#[test]
fn test_functions_skipped() {
    assert_eq!(
        code("def add(a, b) { return a + b; } f(1, (2)); x = 1"),
        vec!["1 INT", "x IDENTIFIER_LVALUE", ":= ASSIGN_OP"]
    );
    assert_eq!(code("def nop() { if (x) { } }"), Vec::<String>::new());
    assert_eq!(error("def (a) {}").code(), ErrorCode::UnexpectedToken);
}

#[test]
fn test_return() {
    assert!(code("return").is_empty());
    assert!(code("{ return; }").is_empty());
    assert!(code("return 1").is_empty());
    assert_eq!(
        code("x = 1; return x * 2; print(x)"),
        vec!["1 INT", "x IDENTIFIER_LVALUE", ":= ASSIGN_OP", "x IDENTIFIER", "1 INT", "PRINT PRINT_OP"]
    );
    assert_eq!(error("return 1 +").code(), ErrorCode::UnexpectedEnd);
}

#[test]
fn test_errors() {
    let e = error("int x = 2\nx 5");
    assert_eq!(e.code(), ErrorCode::TokenMismatch);
    assert_eq!(e.line(), Some(2));
    assert_eq!(
        e.to_string(),
        "TOKEN MISMATCH IN LINE 2; FOUND (5, INT) EXPECTED (=, ASSIGN_OP)"
    );
    assert_eq!(error("print(1").code(), ErrorCode::UnexpectedEnd);
    assert_eq!(error("if (x) { print(1)").code(), ErrorCode::UnexpectedEnd);
    assert_eq!(error("x = 1 )").code(), ErrorCode::InvalidStatement);
    assert_eq!(error("in").code(), ErrorCode::InvalidStatement);
    assert_eq!(error("x = )").code(), ErrorCode::UnexpectedToken);
}

#[test]
fn test_lexical_errors_block_translation() {
    match compile("x = 1 @ 2 # 3") {
        Ok(_) => panic!(),
        Err(errors) => {
            assert_eq!(errors.len(), 2);
            assert!(errors.iter().all(|e| e.is_lexical()));
        }
    }
}

#[test]
fn test_idempotent() {
    let source = "int n = 3; for (i in 1..3) { if (i == n) { print(i) } }";
    let scan = lex(source);
    let one = translate(&scan.tokens).ok();
    let two = translate(&scan.tokens).ok();
    assert!(one.is_some());
    assert_eq!(one, two);
    assert_eq!(program(source), program(source));
}
