use super::dfa::{self, State};
use super::token::{Kind, Token};
use super::{Error, Intern, TokenStream};

/// Everything the scanner learned about one source text.
#[derive(Debug, Default, Clone)]
pub struct Scan {
    pub tokens: TokenStream,
    pub identifiers: Intern,
    pub constants: Intern,
    pub errors: Vec<Error>,
}

impl Scan {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn lex(s: &str) -> Scan {
    Lexer::default().lex(s)
}

#[derive(Default)]
struct Lexer {
    state: State,
    pending: String,
    line: usize,
    start_line: usize,
    tokens: Vec<Token>,
    identifiers: Intern,
    constants: Intern,
    errors: Vec<Error>,
}

impl Lexer {
    fn lex(mut self, s: &str) -> Scan {
        self.line = 1;
        let mut chars = s.chars().peekable();
        let mut flushed = false;
        loop {
            let (ch, synthetic) = match chars.peek() {
                Some(ch) => (*ch, false),
                None if self.state != dfa::INITIAL && !flushed => ('\n', true),
                None => break,
            };
            if self.step(ch, synthetic) {
                if synthetic {
                    flushed = true;
                } else {
                    chars.next();
                }
            }
            if flushed && chars.peek().is_none() && self.state != dfa::INITIAL {
                break;
            }
        }
        if self.state == dfa::STRING_OPEN {
            let preview: String = match self.pending.lines().next() {
                Some(first) => first.chars().take(16).collect(),
                None => String::new(),
            };
            self.errors
                .push(error!(UnterminatedString, self.start_line; preview));
        }
        Scan {
            tokens: TokenStream::new(self.tokens),
            identifiers: self.identifiers,
            constants: self.constants,
            errors: self.errors,
        }
    }

    /// Returns false when `ch` must be read again.
    fn step(&mut self, ch: char, synthetic: bool) -> bool {
        let next = dfa::transition(self.state, dfa::classify(ch));
        if next == dfa::INITIAL {
            self.pending.clear();
            self.state = dfa::INITIAL;
            return true;
        }
        if !dfa::is_final(next) {
            if self.pending.is_empty() {
                self.start_line = self.line;
            }
            self.pending.push(ch);
            if ch == '\n' && !synthetic {
                self.line += 1;
            }
            self.state = next;
            return true;
        }
        let lookback = dfa::is_lookback(next);
        if !lookback {
            if self.pending.is_empty() {
                self.start_line = self.line;
            }
            self.pending.push(ch);
        }
        self.accept(next, ch, synthetic);
        self.pending.clear();
        self.state = dfa::INITIAL;
        if !lookback && ch == '\n' && !synthetic {
            self.line += 1;
        }
        !lookback
    }

    fn accept(&mut self, state: State, ch: char, synthetic: bool) {
        match state {
            dfa::UNEXPECTED => {
                let msg = if synthetic {
                    "END OF INPUT".to_string()
                } else {
                    format!("{:?}", ch)
                };
                self.errors.push(error!(UnexpectedSymbol, self.line; msg));
                return;
            }
            dfa::UNSUPPORTED_BANG => {
                self.errors
                    .push(error!(UnsupportedOperator, self.line; "'!'; USE '!='"));
                return;
            }
            dfa::NEWLINE | dfa::COMMENT => return,
            _ => {}
        }
        let lexeme = self.pending.as_str();
        let kind = match Kind::reserved(lexeme) {
            Some(kind) => kind,
            None => match state {
                dfa::IDENTIFIER => Kind::Identifier,
                dfa::INTEGER => Kind::Int,
                dfa::FLOAT | dfa::FLOAT_DOT => Kind::Float,
                dfa::STRING => Kind::String,
                dfa::DOT => Kind::Dot,
                _ => Kind::Unknown,
            },
        };
        let index = match kind {
            Kind::Identifier => Some(self.identifiers.intern(lexeme)),
            Kind::Int | Kind::Float | Kind::String | Kind::Bool => {
                Some(self.constants.intern(lexeme))
            }
            _ => None,
        };
        self.tokens
            .push(Token::new(self.start_line, lexeme, kind, index));
    }
}
