/*!
## Lexer state machine

States are small integers. State 0 is idle. A transition into a
final state completes a token; look-back final states mean the
character just read starts the next token and must be rescanned.

*/

use std::collections::HashMap;

pub type State = u8;

pub const INITIAL: State = 0;
pub const IDENTIFIER: State = 2;
pub const FLOAT_DOT: State = 9;
pub const INTEGER: State = 13;
pub const FLOAT: State = 14;
pub const COMMENT: State = 33;
pub const DOT: State = 36;
pub const STRING_OPEN: State = 40;
pub const STRING: State = 41;
pub const NEWLINE: State = 50;
pub const UNEXPECTED: State = 101;
pub const UNSUPPORTED_BANG: State = 102;

const FINAL: &[State] = &[
    2, 9, 13, 14, 21, 22, 24, 26, 27, 29, 30, 33, 34, 36, 41, 50, 51, 52, 53, 101, 102,
];
const LOOKBACK: &[State] = &[2, 9, 13, 14, 22, 27, 30, 34, 36, 102];
const ERROR: &[State] = &[UNEXPECTED, UNSUPPORTED_BANG];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Letter,
    Digit,
    Space,
    Newline,
    Quote,
    Dot,
    Exponent,
    Punct(char),
    Other,
}

use Class::*;

const TRANSITIONS: &[((State, Class), State)] = &[
    // identifiers and reserved words
    ((0, Letter), 1),
    ((0, Exponent), 1),
    ((1, Letter), 1),
    ((1, Exponent), 1),
    ((1, Digit), 1),
    ((1, Other), 2),
    // 12
    ((0, Digit), 4),
    ((4, Digit), 4),
    // .5 or a lone dot
    ((0, Dot), 5),
    ((5, Digit), 6),
    ((6, Digit), 6),
    ((5, Other), 36),
    // 2.5 or 2.
    ((4, Dot), 7),
    ((7, Digit), 8),
    ((8, Digit), 8),
    ((7, Other), 9),
    // 2.5e2, 1.2E-3, 2e3, 2.e3
    ((4, Exponent), 10),
    ((6, Exponent), 10),
    ((7, Exponent), 10),
    ((8, Exponent), 10),
    ((10, Punct('+')), 11),
    ((10, Punct('-')), 11),
    ((10, Digit), 12),
    ((11, Digit), 12),
    ((12, Digit), 12),
    // number complete
    ((4, Other), 13),
    ((6, Other), 14),
    ((8, Other), 14),
    ((12, Other), 14),
    // == = != <= < >= >
    ((0, Punct('=')), 20),
    ((20, Punct('=')), 21),
    ((20, Other), 22),
    ((0, Punct('!')), 23),
    ((23, Punct('=')), 24),
    ((23, Other), 102),
    ((0, Punct('<')), 25),
    ((25, Punct('=')), 26),
    ((25, Other), 27),
    ((0, Punct('>')), 28),
    ((28, Punct('=')), 29),
    ((28, Other), 30),
    // comments or /
    ((0, Punct('/')), 31),
    ((31, Punct('/')), 32),
    ((32, Newline), 33),
    ((32, Other), 32),
    ((31, Other), 34),
    // strings
    ((0, Quote), 40),
    ((40, Quote), 41),
    ((40, Other), 40),
    // whitespace
    ((0, Space), 0),
    ((0, Newline), 50),
    // single character operators
    ((0, Punct('+')), 51),
    ((0, Punct('-')), 51),
    ((0, Punct('*')), 51),
    ((0, Punct('^')), 51),
    ((0, Punct('(')), 52),
    ((0, Punct(')')), 52),
    ((0, Punct('{')), 52),
    ((0, Punct('}')), 52),
    ((0, Punct('[')), 52),
    ((0, Punct(']')), 52),
    ((0, Punct(',')), 53),
    ((0, Punct(';')), 53),
    ((0, Other), 101),
];

thread_local!(
    static TABLE: HashMap<(State, Class), State> = TRANSITIONS.iter().copied().collect();
);

/// Total classification of input characters.
pub fn classify(ch: char) -> Class {
    match ch {
        '.' => Dot,
        'e' | 'E' => Exponent,
        'a'..='z' | 'A'..='Z' | '_' => Letter,
        '0'..='9' => Digit,
        ' ' | '\t' | '\r' => Space,
        '\n' => Newline,
        '"' => Quote,
        '+' | '-' | '*' | '/' | '^' | '(' | ')' | '{' | '}' | '[' | ']' | ',' | ';' | '='
        | '<' | '>' | '!' => Punct(ch),
        _ => Other,
    }
}

/// Missing `(state, class)` entries fall back to `(state, Other)`,
/// then to the unexpected symbol error.
pub fn transition(state: State, class: Class) -> State {
    TABLE.with(|t| match t.get(&(state, class)) {
        Some(next) => *next,
        None => t.get(&(state, Other)).copied().unwrap_or(UNEXPECTED),
    })
}

pub fn is_final(state: State) -> bool {
    FINAL.contains(&state)
}

pub fn is_lookback(state: State) -> bool {
    LOOKBACK.contains(&state)
}

pub fn is_error(state: State) -> bool {
    ERROR.contains(&state)
}
