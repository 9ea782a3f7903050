use super::{Address, Instruction};
use std::collections::HashMap;
use std::fmt::Write;
use std::rc::Rc;

/// ## Linked postfix code
///
/// Immutable once built. An instruction's position is its address.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    code: Vec<Instruction>,
    labels: HashMap<Rc<str>, Address>,
}

impl Program {
    pub fn new(code: Vec<Instruction>, labels: HashMap<Rc<str>, Address>) -> Program {
        Program { code, labels }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.code
    }

    pub fn get(&self, addr: Address) -> Option<&Instruction> {
        self.code.get(addr)
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn label(&self, name: &str) -> Option<Address> {
        self.labels.get(name).copied()
    }

    /// Label table ordered by address, then name.
    pub fn labels(&self) -> Vec<(Rc<str>, Address)> {
        let mut labels: Vec<(Rc<str>, Address)> = self
            .labels
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        labels.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        labels
    }

    /// The exported postfix file.
    pub fn save_text(&self, source_name: &str) -> String {
        let mut s = String::new();
        s.push_str("# Postfix code generated from Joovy\n");
        let _ = writeln!(s, "# Source: {}", source_name);
        s.push('\n');
        for (addr, ins) in self.code.iter().enumerate() {
            let _ = writeln!(s, "{:03}: {} {}", addr, ins.lexeme(), ins.opcode());
        }
        s
    }
}
