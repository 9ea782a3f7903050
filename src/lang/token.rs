use std::collections::HashMap;

thread_local!(
    static RESERVED: HashMap<&'static str, Kind> = RESERVED_LEXEMES.iter().copied().collect();
);

const RESERVED_LEXEMES: &[(&str, Kind)] = &[
    ("for", Kind::Keyword),
    ("in", Kind::Keyword),
    ("if", Kind::Keyword),
    ("else", Kind::Keyword),
    ("print", Kind::Keyword),
    ("input", Kind::Keyword),
    ("const", Kind::Keyword),
    ("def", Kind::Keyword),
    ("return", Kind::Keyword),
    ("int", Kind::Type),
    ("float", Kind::Type),
    ("bool", Kind::Type),
    ("string", Kind::Type),
    ("true", Kind::Bool),
    ("false", Kind::Bool),
    ("=", Kind::AssignOp),
    ("+", Kind::AddOp),
    ("-", Kind::AddOp),
    ("*", Kind::MultOp),
    ("/", Kind::MultOp),
    ("^", Kind::PowerOp),
    ("==", Kind::CompareOp),
    ("!=", Kind::CompareOp),
    ("<", Kind::CompareOp),
    ("<=", Kind::CompareOp),
    (">", Kind::CompareOp),
    (">=", Kind::CompareOp),
    ("(", Kind::ParOp),
    (")", Kind::ParOp),
    ("{", Kind::ParOp),
    ("}", Kind::ParOp),
    ("[", Kind::ParOp),
    ("]", Kind::ParOp),
    (",", Kind::Comma),
    (";", Kind::Semicolon),
    (".", Kind::Dot),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Keyword,
    Type,
    Bool,
    Identifier,
    Int,
    Float,
    String,
    AssignOp,
    AddOp,
    MultOp,
    PowerOp,
    CompareOp,
    ParOp,
    Comma,
    Semicolon,
    Dot,
    Unknown,
}

impl Kind {
    /// Kind of a keyword, type name, boolean or operator lexeme.
    pub fn reserved(lexeme: &str) -> Option<Kind> {
        RESERVED.with(|r| r.get(lexeme).copied())
    }

    pub fn is_literal(&self) -> bool {
        use Kind::*;
        matches!(self, Int | Float | String | Bool)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Kind::Int | Kind::Float)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            Keyword => write!(f, "KEYWORD"),
            Type => write!(f, "TYPE"),
            Bool => write!(f, "BOOL"),
            Identifier => write!(f, "IDENTIFIER"),
            Int => write!(f, "INT"),
            Float => write!(f, "FLOAT"),
            String => write!(f, "STRING"),
            AssignOp => write!(f, "ASSIGN_OP"),
            AddOp => write!(f, "ADD_OP"),
            MultOp => write!(f, "MULT_OP"),
            PowerOp => write!(f, "POWER_OP"),
            CompareOp => write!(f, "COMPARE_OP"),
            ParOp => write!(f, "PAR_OP"),
            Comma => write!(f, "COMMA"),
            Semicolon => write!(f, "SEMICOLON"),
            Dot => write!(f, "DOT"),
            Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// ## Classified lexeme
///
/// Tokens are immutable once the lexer produces them.
/// Identifiers and literals carry their intern table index.

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    line: usize,
    lexeme: String,
    kind: Kind,
    index: Option<usize>,
}

impl Token {
    pub fn new(line: usize, lexeme: &str, kind: Kind, index: Option<usize>) -> Token {
        Token {
            line,
            lexeme: lexeme.to_string(),
            kind,
            index,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is(&self, lexeme: &str, kind: Kind) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.lexeme, self.kind)
    }
}
