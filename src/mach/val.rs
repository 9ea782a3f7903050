use super::Opcode;
use crate::error;
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Run time values

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(Rc<str>),
}

impl Val {
    /// Value pushed by a literal instruction.
    pub fn from_literal(opcode: Opcode, lexeme: &str) -> Result<Val> {
        match opcode {
            Opcode::Int => match lexeme.parse::<i64>() {
                Ok(n) => Ok(Val::Integer(n)),
                Err(_) => Err(error!(Overflow; lexeme)),
            },
            Opcode::Float => match lexeme.parse::<f64>() {
                Ok(n) => Ok(Val::Float(n)),
                Err(_) => Err(error!(InternalError; format!("BAD FLOAT {}", lexeme))),
            },
            Opcode::Bool => match lexeme {
                "true" => Ok(Val::Boolean(true)),
                "false" => Ok(Val::Boolean(false)),
                _ => Err(error!(InternalError; format!("BAD BOOL {}", lexeme))),
            },
            Opcode::String => {
                let text = lexeme
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(lexeme);
                Ok(Val::Text(text.into()))
            }
            _ => Err(error!(InternalError; format!("NOT A LITERAL {}", opcode))),
        }
    }

    /// Value bound by `input`: integer, else float, else text.
    pub fn from_input(line: &str) -> Val {
        let line = line.trim();
        if let Ok(n) = line.parse::<i64>() {
            return Val::Integer(n);
        }
        if let Ok(n) = line.parse::<f64>() {
            return Val::Float(n);
        }
        Val::Text(line.into())
    }

    pub fn is_false(&self) -> bool {
        match self {
            Val::Integer(n) => *n == 0,
            Val::Float(n) => *n == 0.0,
            Val::Boolean(b) => !*b,
            Val::Text(s) => s.is_empty(),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            Float(n) => {
                if n.fract() == 0.0 && n.abs() < 1e16 {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Boolean(b) => write!(f, "{}", b),
            Text(s) => write!(f, "{}", s),
        }
    }
}

/// ## Operand stack cell
///
/// Lvalue instructions push a variable name and label instructions
/// push a jump target. Neither is a value, and neither stands in for
/// the other.

#[derive(Clone, PartialEq)]
pub enum Cell {
    Val(Val),
    Name(Rc<str>),
    Label(Rc<str>),
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Val(val) => write!(f, "{:?}", val),
            Cell::Name(name) => write!(f, "Name({})", name),
            Cell::Label(label) => write!(f, "Label({})", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(
            Val::from_literal(Opcode::Int, "42").ok(),
            Some(Val::Integer(42))
        );
        assert_eq!(
            Val::from_literal(Opcode::Float, "2.").ok(),
            Some(Val::Float(2.0))
        );
        assert_eq!(
            Val::from_literal(Opcode::Float, ".5").ok(),
            Some(Val::Float(0.5))
        );
        assert_eq!(
            Val::from_literal(Opcode::Bool, "false").ok(),
            Some(Val::Boolean(false))
        );
        assert_eq!(
            Val::from_literal(Opcode::String, "\"hi there\"").ok(),
            Some(Val::Text("hi there".into()))
        );
        assert!(Val::from_literal(Opcode::Int, "99999999999999999999").is_err());
    }

    #[test]
    fn test_input() {
        assert_eq!(Val::from_input(" 12\n"), Val::Integer(12));
        assert_eq!(Val::from_input("1.5\r\n"), Val::Float(1.5));
        assert_eq!(Val::from_input("abc\n"), Val::Text("abc".into()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Val::Float(4.0).to_string(), "4.0");
        assert_eq!(Val::Float(0.25).to_string(), "0.25");
        assert_eq!(Val::Float(-3.0).to_string(), "-3.0");
        assert_eq!(Val::Boolean(true).to_string(), "true");
        assert_eq!(Val::Text("a b".into()).to_string(), "a b");
    }

    #[test]
    fn test_false() {
        assert!(Val::Integer(0).is_false());
        assert!(Val::Float(0.0).is_false());
        assert!(Val::Boolean(false).is_false());
        assert!(Val::Text("".into()).is_false());
        assert!(!Val::Integer(-1).is_false());
        assert!(!Val::Text("0".into()).is_false());
    }
}
