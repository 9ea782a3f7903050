use super::{Link, Opcode, Program};
use crate::error;
use crate::lang::token::{Kind, Token};
use crate::lang::{Cursor, Error, TokenStream};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Single pass from tokens to linked postfix code.
/// The first structural error aborts translation.
pub fn translate(tokens: &TokenStream) -> Result<Program> {
    let mut translator = Translator {
        cursor: tokens.cursor(),
        link: Link::new(),
    };
    translator.program()?;
    translator.link.link()
}

struct Translator<'a> {
    cursor: Cursor<'a>,
    link: Link,
}

fn describe(token: &Token) -> String {
    format!("({}, {})", token.lexeme(), token.kind())
}

impl<'a> Translator<'a> {
    fn program(&mut self) -> Result<()> {
        while let Some(token) = self.cursor.peek() {
            if token.kind() == Kind::Semicolon {
                self.cursor.advance();
            } else if token.is("def", Kind::Keyword) {
                self.function()?;
            } else if Translator::is_statement(token) {
                self.statement()?;
            } else {
                return Err(error!(InvalidStatement, token.line(); describe(token)));
            }
        }
        Ok(())
    }

    fn is_statement(token: &Token) -> bool {
        match token.kind() {
            Kind::Type | Kind::Identifier => true,
            Kind::Keyword => matches!(
                token.lexeme(),
                "const" | "if" | "for" | "print" | "input" | "return"
            ),
            Kind::ParOp => token.lexeme() == "{",
            _ => false,
        }
    }

    fn statement(&mut self) -> Result<()> {
        let token = self.peek()?;
        match token.kind() {
            Kind::Type => self.var_decl(),
            Kind::Identifier => self.identifier_statement(),
            Kind::Keyword => match token.lexeme() {
                "const" => self.const_decl(),
                "if" => self.if_statement(),
                "for" => self.for_statement(),
                "print" => self.print(),
                "input" => self.input(),
                "return" => self.return_statement(),
                _ => Err(error!(InvalidStatement, token.line(); describe(token))),
            },
            Kind::ParOp if token.lexeme() == "{" => self.block(),
            _ => Err(error!(InvalidStatement, token.line(); describe(token))),
        }
    }

    // *** Token access

    fn peek(&self) -> Result<&'a Token> {
        match self.cursor.peek() {
            Some(token) => Ok(token),
            None => Err(error!(UnexpectedEnd, self.cursor.line())),
        }
    }

    fn next(&mut self) -> Result<&'a Token> {
        match self.cursor.advance() {
            Some(token) => Ok(token),
            None => Err(error!(UnexpectedEnd, self.cursor.line())),
        }
    }

    fn peek_is(&self, lexeme: &str, kind: Kind) -> bool {
        match self.cursor.peek() {
            Some(token) => token.is(lexeme, kind),
            None => false,
        }
    }

    fn peek_kind(&self, kind: Kind) -> bool {
        match self.cursor.peek() {
            Some(token) => token.kind() == kind,
            None => false,
        }
    }

    fn expect(&mut self, lexeme: &str, kind: Kind) -> Result<&'a Token> {
        let token = self.next()?;
        if token.is(lexeme, kind) {
            Ok(token)
        } else {
            Err(error!(TokenMismatch, token.line();
                format!("FOUND {} EXPECTED ({}, {})", describe(token), lexeme, kind)))
        }
    }

    fn expect_kind(&mut self, kind: Kind) -> Result<&'a Token> {
        let token = self.next()?;
        if token.kind() == kind {
            Ok(token)
        } else {
            Err(error!(UnexpectedToken, token.line();
                format!("FOUND {} EXPECTED {}", describe(token), kind)))
        }
    }

    fn literal(&mut self, token: &Token) -> Result<()> {
        match Opcode::literal(token.kind()) {
            Some(opcode) => {
                self.link.push(token.lexeme(), opcode);
                Ok(())
            }
            None => Err(error!(UnexpectedToken, token.line();
                format!("FOUND {} EXPECTED LITERAL", describe(token)))),
        }
    }

    fn assign_to(&mut self, name: &str) {
        self.link.push(name, Opcode::IdentifierLvalue);
        self.link.push(":=", Opcode::AssignOp);
    }

    // *** Declarations

    /// `int x = 1, y, z = x * 2`
    fn var_decl(&mut self) -> Result<()> {
        self.expect_kind(Kind::Type)?;
        loop {
            let ident = self.expect_kind(Kind::Identifier)?;
            if self.peek_is("=", Kind::AssignOp) {
                self.cursor.advance();
                self.expression()?;
                self.assign_to(ident.lexeme());
            }
            if !self.peek_is(",", Kind::Comma) {
                return Ok(());
            }
            self.cursor.advance();
        }
    }

    /// `const float pi = 3.14, e = 2.71`
    fn const_decl(&mut self) -> Result<()> {
        self.expect("const", Kind::Keyword)?;
        self.expect_kind(Kind::Type)?;
        loop {
            let ident = self.expect_kind(Kind::Identifier)?;
            self.expect("=", Kind::AssignOp)?;
            let mut token = self.next()?;
            let negative = token.is("-", Kind::AddOp);
            if negative || token.is("+", Kind::AddOp) {
                token = self.next()?;
                if !token.kind().is_number() {
                    return Err(error!(UnexpectedToken, token.line();
                        format!("FOUND {} EXPECTED NUMBER", describe(token))));
                }
            }
            self.literal(token)?;
            if negative {
                self.link.push("NEG", Opcode::UnaryOp);
            }
            self.assign_to(ident.lexeme());
            if !self.peek_is(",", Kind::Comma) {
                return Ok(());
            }
            self.cursor.advance();
        }
    }

    /// Header is checked, body is skipped. No code is emitted.
    fn function(&mut self) -> Result<()> {
        self.expect("def", Kind::Keyword)?;
        self.expect_kind(Kind::Identifier)?;
        self.expect("(", Kind::ParOp)?;
        if self.peek_kind(Kind::Identifier) {
            loop {
                self.expect_kind(Kind::Identifier)?;
                if !self.peek_is(",", Kind::Comma) {
                    break;
                }
                self.cursor.advance();
            }
        }
        self.expect(")", Kind::ParOp)?;
        self.expect("{", Kind::ParOp)?;
        self.skip_balanced("{", "}")
    }

    /// Consumes through the closer matching an already consumed opener.
    fn skip_balanced(&mut self, open: &str, close: &str) -> Result<()> {
        let mut depth = 1;
        while depth > 0 {
            let token = self.next()?;
            if token.is(open, Kind::ParOp) {
                depth += 1;
            } else if token.is(close, Kind::ParOp) {
                depth -= 1;
            }
        }
        Ok(())
    }

    // *** Statements

    fn identifier_statement(&mut self) -> Result<()> {
        let mark = self.cursor.save();
        self.expect_kind(Kind::Identifier)?;
        let is_call = self.peek_is("(", Kind::ParOp);
        self.cursor.restore(mark);
        if is_call {
            self.call()
        } else {
            self.assignment()
        }
    }

    fn assignment(&mut self) -> Result<()> {
        let ident = self.expect_kind(Kind::Identifier)?;
        self.expect("=", Kind::AssignOp)?;
        self.expression()?;
        self.assign_to(ident.lexeme());
        Ok(())
    }

    /// Calls are recognized and skipped. No code is emitted.
    fn call(&mut self) -> Result<()> {
        self.expect_kind(Kind::Identifier)?;
        self.expect("(", Kind::ParOp)?;
        self.skip_balanced("(", ")")
    }

    fn block(&mut self) -> Result<()> {
        self.expect("{", Kind::ParOp)?;
        loop {
            let token = self.peek()?;
            if token.is("}", Kind::ParOp) {
                self.cursor.advance();
                return Ok(());
            }
            if token.kind() == Kind::Semicolon {
                self.cursor.advance();
                continue;
            }
            self.statement()?;
        }
    }

    fn if_statement(&mut self) -> Result<()> {
        self.expect("if", Kind::Keyword)?;
        let else_label = self.link.next_label();
        let end_label = self.link.next_label();
        self.expect("(", Kind::ParOp)?;
        self.expression()?;
        self.expect(")", Kind::ParOp)?;
        self.link.push_jump_if_false(&else_label);
        self.block()?;
        if self.peek_is("else", Kind::Keyword) {
            self.cursor.advance();
            self.link.push_jump(&end_label);
            self.link.push_label(&else_label)?;
            self.block()?;
            self.link.push_label(&end_label)
        } else {
            self.link.push_label(&else_label)
        }
    }

    /// `for (i in 1..10) { ... }` counts up by one, both bounds inclusive.
    fn for_statement(&mut self) -> Result<()> {
        self.expect("for", Kind::Keyword)?;
        let loop_label = self.link.next_label();
        let end_label = self.link.next_label();
        self.expect("(", Kind::ParOp)?;
        let ident = self.expect_kind(Kind::Identifier)?;
        let var = ident.lexeme();
        self.expect("in", Kind::Keyword)?;
        let (start, end) = self.range()?;
        self.expect(")", Kind::ParOp)?;

        self.link.push(&start.0, start.1);
        self.assign_to(var);
        self.link.push_label(&loop_label)?;
        self.link.push(var, Opcode::Identifier);
        self.link.push(&end.0, end.1);
        self.link.push("<=", Opcode::CompareOp);
        self.link.push_jump_if_false(&end_label);
        self.block()?;
        self.link.push(var, Opcode::Identifier);
        self.link.push("1", Opcode::Int);
        self.link.push("+", Opcode::AddOp);
        self.assign_to(var);
        self.link.push_jump(&loop_label);
        self.link.push_label(&end_label)
    }

    /// The lexer may fold either dot of `..` into the neighbouring
    /// number: `1..3` arrives as `1.` and `.3`, and `1..3.5` as
    /// `1.`, `.3` and `.5`.
    fn range(&mut self) -> Result<((Rc<str>, Opcode), (Rc<str>, Opcode))> {
        let first = self.range_bound()?;
        let mut start = first.lexeme();
        let mut dots = 0;
        if let Some(s) = start.strip_suffix('.') {
            start = s;
            dots += 1;
        }
        while self.peek_kind(Kind::Dot) {
            self.cursor.advance();
            dots += 1;
        }
        let last = self.range_bound()?;
        let mut end = last.lexeme().to_string();
        if let Some(s) = last.lexeme().strip_prefix('.') {
            end = s.to_string();
            dots += 1;
            if let Some(fraction) = self.cursor.peek() {
                if fraction.kind() == Kind::Float
                    && fraction.lexeme().starts_with('.')
                    && !Translator::has_fraction(&end)
                {
                    end.push_str(fraction.lexeme());
                    self.cursor.advance();
                }
            }
        }
        let end = end.as_str();
        if dots != 2 || start.is_empty() || end.is_empty() {
            return Err(error!(InvalidRange, first.line();
                format!("{}..{}", first.lexeme(), last.lexeme())));
        }
        match (start.parse::<f64>(), end.parse::<f64>()) {
            (Ok(s), Ok(e)) if s <= e => {}
            _ => {
                return Err(error!(InvalidRange, first.line();
                    format!("{}..{}", start, end)))
            }
        }
        Ok((Translator::number(start), Translator::number(end)))
    }

    fn range_bound(&mut self) -> Result<&'a Token> {
        let token = self.next()?;
        if token.kind().is_number() {
            Ok(token)
        } else {
            Err(error!(UnexpectedToken, token.line();
                format!("FOUND {} EXPECTED NUMBER", describe(token))))
        }
    }

    fn has_fraction(text: &str) -> bool {
        text.contains(|c: char| c == '.' || c == 'e' || c == 'E')
    }

    fn number(text: &str) -> (Rc<str>, Opcode) {
        if Translator::has_fraction(text) {
            (text.into(), Opcode::Float)
        } else {
            (text.into(), Opcode::Int)
        }
    }

    fn print(&mut self) -> Result<()> {
        self.expect("print", Kind::Keyword)?;
        self.expect("(", Kind::ParOp)?;
        let mut count = 0;
        if !self.peek_is(")", Kind::ParOp) {
            loop {
                self.expression()?;
                count += 1;
                if !self.peek_is(",", Kind::Comma) {
                    break;
                }
                self.cursor.advance();
            }
        }
        self.expect(")", Kind::ParOp)?;
        self.link.push(&count.to_string(), Opcode::Int);
        self.link.push("PRINT", Opcode::PrintOp);
        Ok(())
    }

    fn input(&mut self) -> Result<()> {
        self.expect("input", Kind::Keyword)?;
        self.expect("(", Kind::ParOp)?;
        let ident = self.expect_kind(Kind::Identifier)?;
        self.expect(")", Kind::ParOp)?;
        self.link.push(ident.lexeme(), Opcode::IdentifierLvalue);
        self.link.push("INPUT", Opcode::InputOp);
        Ok(())
    }

    /// The value is checked but dropped; nothing could consume it.
    fn return_statement(&mut self) -> Result<()> {
        self.expect("return", Kind::Keyword)?;
        match self.cursor.peek() {
            None => Ok(()),
            Some(token) if token.is("}", Kind::ParOp) || token.kind() == Kind::Semicolon => Ok(()),
            Some(_) => {
                let mark = self.link.len();
                self.expression()?;
                self.link.truncate(mark);
                Ok(())
            }
        }
    }

    // *** Expressions

    fn expression(&mut self) -> Result<()> {
        self.arith_expression()?;
        if self.peek_kind(Kind::CompareOp) {
            let op = self.next()?;
            self.arith_expression()?;
            self.link.push(op.lexeme(), Opcode::CompareOp);
        }
        Ok(())
    }

    fn arith_expression(&mut self) -> Result<()> {
        self.term()?;
        while self.peek_kind(Kind::AddOp) {
            let op = self.next()?;
            self.term()?;
            self.link.push(op.lexeme(), Opcode::AddOp);
        }
        Ok(())
    }

    fn term(&mut self) -> Result<()> {
        self.power()?;
        while self.peek_kind(Kind::MultOp) {
            let op = self.next()?;
            self.power()?;
            self.link.push(op.lexeme(), Opcode::MultOp);
        }
        Ok(())
    }

    fn power(&mut self) -> Result<()> {
        self.factor()?;
        while self.peek_kind(Kind::PowerOp) {
            let op = self.next()?;
            self.factor()?;
            self.link.push(op.lexeme(), Opcode::PowerOp);
        }
        Ok(())
    }

    fn factor(&mut self) -> Result<()> {
        if self.peek_kind(Kind::AddOp) {
            let sign = self.next()?;
            self.primary()?;
            if sign.lexeme() == "-" {
                self.link.push("NEG", Opcode::UnaryOp);
            }
            return Ok(());
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<()> {
        let token = self.next()?;
        match token.kind() {
            kind if kind.is_literal() => self.literal(token),
            Kind::Identifier => {
                if self.peek_is("(", Kind::ParOp) {
                    self.cursor.advance();
                    self.skip_balanced("(", ")")
                } else {
                    self.link.push(token.lexeme(), Opcode::Identifier);
                    Ok(())
                }
            }
            Kind::ParOp if token.lexeme() == "(" => {
                self.expression()?;
                self.expect(")", Kind::ParOp)?;
                Ok(())
            }
            _ => Err(error!(UnexpectedToken, token.line();
                format!("FOUND {} EXPECTED EXPRESSION", describe(token)))),
        }
    }
}
