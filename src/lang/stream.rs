use super::Token;

/// ## Lexer output
///
/// Positions are 1-based.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> TokenStream {
        TokenStream { tokens }
    }

    pub fn get(&self, position: usize) -> Option<&Token> {
        match position {
            0 => None,
            _ => self.tokens.get(position - 1),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            tokens: &self.tokens,
            pos: 0,
        }
    }
}

impl std::fmt::Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, t) in self.tokens.iter().enumerate() {
            let index = match t.index() {
                Some(idx) => idx.to_string(),
                None => String::new(),
            };
            writeln!(
                f,
                "{:>4} {:>4}  {:<16} {:<12} {}",
                i + 1,
                t.line(),
                t.lexeme(),
                t.kind().to_string(),
                index
            )?;
        }
        Ok(())
    }
}

/// Forward-only reader over a [`TokenStream`].
/// `save` and `restore` give the translator its lookahead.

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub fn save(&self) -> usize {
        self.pos
    }

    pub fn restore(&mut self, pos: usize) {
        debug_assert!(pos <= self.tokens.len());
        self.pos = pos;
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Line of the current token, or of the last one at end of input.
    pub fn line(&self) -> usize {
        match self.tokens.get(self.pos).or_else(|| self.tokens.last()) {
            Some(t) => t.line(),
            None => 1,
        }
    }
}
