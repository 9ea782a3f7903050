use super::{Address, Cell, Instruction, Opcode, Operation, Program, Stack, Val, Var};
use crate::error;
use crate::lang::Error;
use std::io::BufRead;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Cycles per `execute` call used by `run`.
const RUN_CYCLES: usize = 5000;

/// ## Events for the user interface

#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    /// Waiting for `enter` to bind the named variable.
    Input(Rc<str>),
    Trace(String),
    Error(Error),
}

/// Final state of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub variables: Vec<(Rc<str>, Val)>,
    pub output: Vec<String>,
}

impl Outcome {
    pub fn variable(&self, name: &str) -> Option<&Val> {
        self.variables
            .iter()
            .find(|(n, _)| &**n == name)
            .map(|(_, v)| v)
    }
}

/// ## Stack machine
///
/// Owns its stack, variables and output. The instruction pointer
/// starts at zero and the run ends when it reaches the end of code.

#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    ip: Address,
    stack: Stack<Cell>,
    vars: Var,
    output: Vec<String>,
    pending_input: Option<Rc<str>>,
    trace: bool,
    traced: bool,
    stopped: bool,
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program,
            ..Runtime::default()
        }
    }

    /// Emit an `Event::Trace` before every instruction.
    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn variables(&self) -> Vec<(Rc<str>, Val)> {
        self.vars.snapshot()
    }

    /// Answer a pending `Event::Input`. `None` is end of input and binds 0.
    pub fn enter(&mut self, input: Option<&str>) {
        if let Some(name) = self.pending_input.take() {
            let val = match input {
                Some(line) => Val::from_input(line),
                None => Val::Integer(0),
            };
            self.vars.store(&name, val);
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if self.stopped {
            return Event::Stopped;
        }
        if let Some(name) = &self.pending_input {
            return Event::Input(name.clone());
        }
        for _ in 0..cycles {
            if self.ip >= self.program.len() {
                self.stopped = true;
                return Event::Stopped;
            }
            if self.trace && !self.traced {
                self.traced = true;
                return Event::Trace(self.trace_line());
            }
            self.traced = false;
            let ip = self.ip;
            match self.step() {
                Ok(Some(event)) => return event,
                Ok(None) => {}
                Err(error) => {
                    self.stopped = true;
                    let context = match self.program.get(ip) {
                        Some(ins) => format!("  {}\n  STACK {:?}", ins, self.stack),
                        None => format!("  STACK {:?}", self.stack),
                    };
                    return Event::Error(error.at_address(ip).context(context));
                }
            }
        }
        Event::Running
    }

    /// Drive `execute` to completion, reading input lines from `input`.
    pub fn run(&mut self, input: &mut dyn BufRead) -> Result<Outcome> {
        loop {
            match self.execute(RUN_CYCLES) {
                Event::Stopped => {
                    return Ok(Outcome {
                        variables: self.vars.snapshot(),
                        output: self.output.clone(),
                    })
                }
                Event::Running | Event::Print(_) | Event::Trace(_) => {}
                Event::Input(_) => {
                    let mut line = String::new();
                    match input.read_line(&mut line) {
                        Ok(0) => self.enter(None),
                        Ok(_) => self.enter(Some(&line)),
                        Err(e) => return Err(error!(InternalError; e.to_string())),
                    }
                }
                Event::Error(error) => return Err(error),
            }
        }
    }

    fn trace_line(&self) -> String {
        match self.program.get(self.ip) {
            Some(ins) => format!("{:>5}  {:<28} {:?}", self.ip, ins.to_string(), self.stack),
            None => format!("{:>5}", self.ip),
        }
    }

    fn step(&mut self) -> Result<Option<Event>> {
        let ins: Instruction = match self.program.get(self.ip) {
            Some(ins) => ins.clone(),
            None => return Err(error!(InternalError; "INSTRUCTION POINTER OUT OF RANGE")),
        };
        self.ip += 1;
        let lexeme = ins.lexeme();
        match ins.opcode() {
            Opcode::Int | Opcode::Float | Opcode::Bool | Opcode::String => {
                let val = Val::from_literal(ins.opcode(), lexeme)?;
                self.stack.push(Cell::Val(val))?;
            }
            Opcode::Identifier => {
                let val = self.vars.fetch(lexeme)?;
                self.stack.push(Cell::Val(val))?;
            }
            Opcode::IdentifierLvalue => {
                self.stack.push(Cell::Name(lexeme.clone()))?;
            }
            Opcode::Label => {
                self.stack.push(Cell::Label(lexeme.clone()))?;
            }
            Opcode::AssignOp => {
                let name = self.pop_name()?;
                let val = self.pop_val()?;
                self.vars.store(&name, val);
            }
            Opcode::AddOp | Opcode::MultOp | Opcode::PowerOp | Opcode::CompareOp => {
                let rhs = self.pop_val()?;
                let lhs = self.pop_val()?;
                let val = Operation::binary(lexeme, lhs, rhs)?;
                self.stack.push(Cell::Val(val))?;
            }
            Opcode::UnaryOp => {
                if &**lexeme != "NEG" {
                    return Err(error!(InternalError; format!("UNKNOWN UNARY {}", lexeme)));
                }
                let val = Operation::negate(self.pop_val()?)?;
                self.stack.push(Cell::Val(val))?;
            }
            Opcode::Colon => {}
            Opcode::Jump => {
                let label = self.pop_label()?;
                self.ip = self.resolve(&label)?;
            }
            Opcode::JumpIfFalse => {
                let label = self.pop_label()?;
                let cond = self.pop_val()?;
                let addr = self.resolve(&label)?;
                if cond.is_false() {
                    self.ip = addr;
                }
            }
            Opcode::PrintOp => {
                let len = match self.pop_val()? {
                    Val::Integer(n) => match usize::try_from(n) {
                        Ok(len) => len,
                        Err(_) => return Err(error!(TypeMismatch; "PRINT COUNT")),
                    },
                    _ => return Err(error!(TypeMismatch; "PRINT COUNT")),
                };
                let mut parts: Vec<String> = vec![];
                for cell in self.stack.pop_n(len)? {
                    match cell {
                        Cell::Val(val) => parts.push(val.to_string()),
                        Cell::Name(name) | Cell::Label(name) => {
                            return Err(error!(TypeMismatch; format!("NAME {} IN PRINT", name)))
                        }
                    }
                }
                let line = parts.join(" ");
                self.output.push(line.clone());
                return Ok(Some(Event::Print(line)));
            }
            Opcode::InputOp => {
                let name = self.pop_name()?;
                self.pending_input = Some(name.clone());
                return Ok(Some(Event::Input(name)));
            }
        }
        Ok(None)
    }

    fn resolve(&self, label: &str) -> Result<Address> {
        match self.program.label(label) {
            Some(addr) => Ok(addr),
            None => Err(error!(UndefinedLabel; label)),
        }
    }

    fn pop_val(&mut self) -> Result<Val> {
        match self.stack.pop()? {
            Cell::Val(val) => Ok(val),
            Cell::Name(name) => Err(error!(TypeMismatch; format!("NAME {} WHERE VALUE EXPECTED", name))),
            Cell::Label(label) => Err(error!(TypeMismatch; format!("LABEL {} WHERE VALUE EXPECTED", label))),
        }
    }

    fn pop_name(&mut self) -> Result<Rc<str>> {
        match self.stack.pop()? {
            Cell::Name(name) => Ok(name),
            Cell::Val(val) => Err(error!(TypeMismatch; format!("VALUE {} WHERE NAME EXPECTED", val))),
            Cell::Label(label) => Err(error!(TypeMismatch; format!("LABEL {} WHERE NAME EXPECTED", label))),
        }
    }

    fn pop_label(&mut self) -> Result<Rc<str>> {
        match self.stack.pop()? {
            Cell::Label(label) => Ok(label),
            Cell::Val(val) => Err(error!(TypeMismatch; format!("VALUE {} WHERE LABEL EXPECTED", val))),
            Cell::Name(name) => Err(error!(TypeMismatch; format!("NAME {} WHERE LABEL EXPECTED", name))),
        }
    }
}
