use super::LineNumber;
use crate::mach::Address;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line: LineNumber,
    address: Option<Address>,
    message: String,
    context: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, @$addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, @$addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: None,
            address: None,
            message: String::new(),
            context: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line(&self) -> LineNumber {
        self.line
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn is_lexical(&self) -> bool {
        (self.code as u16) < 10
    }

    pub fn is_translation(&self) -> bool {
        (10..20).contains(&(self.code as u16))
    }

    pub fn is_runtime(&self) -> bool {
        (20..50).contains(&(self.code as u16))
    }

    pub fn in_line(self, line: usize) -> Error {
        debug_assert!(self.line.is_none());
        Error {
            line: Some(line),
            ..self
        }
    }

    pub fn at_address(self, address: Address) -> Error {
        Error {
            address: Some(address),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }

    /// Extra lines shown below the error, such as the failing
    /// instruction and a stack snapshot.
    pub fn context<S: Into<String>>(self, context: S) -> Error {
        Error {
            context: context.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnexpectedSymbol = 1,
    UnsupportedOperator = 2,
    UnterminatedString = 3,

    UnexpectedEnd = 10,
    TokenMismatch = 11,
    UnexpectedToken = 12,
    InvalidStatement = 13,
    InvalidRange = 14,
    TranslationError = 15,
    UnresolvedLabel = 16,

    UndefinedVariable = 20,
    UndefinedLabel = 21,
    StackUnderflow = 22,
    StackOverflow = 23,
    DivisionByZero = 24,
    TypeMismatch = 25,
    Overflow = 26,

    InternalError = 51,
}

impl ErrorCode {
    fn title(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            UnexpectedSymbol => "UNEXPECTED SYMBOL",
            UnsupportedOperator => "UNSUPPORTED OPERATOR",
            UnterminatedString => "UNTERMINATED STRING",
            UnexpectedEnd => "UNEXPECTED END OF PROGRAM",
            TokenMismatch => "TOKEN MISMATCH",
            UnexpectedToken => "UNEXPECTED TOKEN",
            InvalidStatement => "INVALID STATEMENT",
            InvalidRange => "INVALID RANGE",
            TranslationError => "TRANSLATION ERROR",
            UnresolvedLabel => "UNRESOLVED LABEL",
            UndefinedVariable => "UNDEFINED VARIABLE",
            UndefinedLabel => "UNDEFINED LABEL",
            StackUnderflow => "STACK UNDERFLOW",
            StackOverflow => "STACK OVERFLOW",
            DivisionByZero => "DIVISION BY ZERO",
            TypeMismatch => "TYPE MISMATCH",
            Overflow => "OVERFLOW",
            InternalError => "INTERNAL ERROR",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code.title())?;
        if let Some(line) = self.line {
            write!(f, " IN LINE {}", line)?;
        }
        if let Some(address) = self.address {
            write!(f, " AT {}", address)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        if !self.context.is_empty() {
            write!(f, "\n{}", self.context)?;
        }
        Ok(())
    }
}
