use crate::lang::token::Kind;
use std::rc::Rc;

/// ## Postfix instruction kinds
///
/// The Joovy virtual machine has no registers.
/// Every operation is performed on the stack.
///
/// For example: `x = 3 * y` compiles to
/// `[3 INT, y IDENTIFIER, * MULT_OP, x IDENTIFIER_LVALUE, := ASSIGN_OP]`
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // *** Literals
    Int,
    Float,
    Bool,
    String,

    // *** Variables
    /// Push the value bound to the name.
    Identifier,
    /// Push the name itself for `AssignOp` or `InputOp`.
    IdentifierLvalue,
    /// Pop a name then a value and bind them.
    AssignOp,

    // *** Expression operations
    AddOp,
    MultOp,
    PowerOp,
    CompareOp,
    UnaryOp,

    // *** Branch control
    /// Push a label name for the jump that follows.
    Label,
    /// Label definition marker. Does nothing at run time.
    Colon,
    Jump,
    JumpIfFalse,

    // *** Statements
    PrintOp,
    InputOp,
}

impl Opcode {
    /// Literal token kinds push a typed value.
    pub fn literal(kind: Kind) -> Option<Opcode> {
        match kind {
            Kind::Int => Some(Opcode::Int),
            Kind::Float => Some(Opcode::Float),
            Kind::Bool => Some(Opcode::Bool),
            Kind::String => Some(Opcode::String),
            _ => None,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Int => write!(f, "INT"),
            Float => write!(f, "FLOAT"),
            Bool => write!(f, "BOOL"),
            String => write!(f, "STRING"),
            Identifier => write!(f, "IDENTIFIER"),
            IdentifierLvalue => write!(f, "IDENTIFIER_LVALUE"),
            AssignOp => write!(f, "ASSIGN_OP"),
            AddOp => write!(f, "ADD_OP"),
            MultOp => write!(f, "MULT_OP"),
            PowerOp => write!(f, "POWER_OP"),
            CompareOp => write!(f, "COMPARE_OP"),
            UnaryOp => write!(f, "UNARY_OP"),
            Label => write!(f, "LABEL"),
            Colon => write!(f, "COLON"),
            Jump => write!(f, "JUMP"),
            JumpIfFalse => write!(f, "JUMP_IF_FALSE"),
            PrintOp => write!(f, "PRINT_OP"),
            InputOp => write!(f, "INPUT_OP"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    lexeme: Rc<str>,
    opcode: Opcode,
}

impl Instruction {
    pub fn new(lexeme: &str, opcode: Opcode) -> Instruction {
        Instruction {
            lexeme: lexeme.into(),
            opcode,
        }
    }

    pub fn lexeme(&self) -> &Rc<str> {
        &self.lexeme
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.lexeme, self.opcode)
    }
}
