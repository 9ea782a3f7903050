use super::{Address, Instruction, Opcode, Program};
use crate::error;
use crate::lang::Error;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Code buffer with label backpatching
///
/// Jumps name their target label before its address is known.
/// The label table is filled in as definitions are reached and
/// checked once more by `link`.

#[derive(Debug, Default)]
pub struct Link {
    current_label: usize,
    code: Vec<Instruction>,
    labels: HashMap<Rc<str>, Address>,
    references: BTreeMap<Address, Rc<str>>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Drops code emitted past `len`. Only valid when that code
    /// defined no labels and referenced none.
    pub fn truncate(&mut self, len: usize) {
        debug_assert!(self.references.range(len..).next().is_none());
        self.code.truncate(len);
    }

    /// Labels are `m1`, `m2`, ... in allocation order.
    pub fn next_label(&mut self) -> Rc<str> {
        self.current_label += 1;
        format!("m{}", self.current_label).into()
    }

    pub fn push(&mut self, lexeme: &str, opcode: Opcode) {
        self.code.push(Instruction::new(lexeme, opcode));
    }

    /// Defines `label` as the address following its marker.
    pub fn push_label(&mut self, label: &Rc<str>) -> Result<()> {
        self.code.push(Instruction::new(label, Opcode::Colon));
        if self.labels.contains_key(label) {
            return Err(error!(TranslationError; format!("LABEL {} REDEFINED", label)));
        }
        self.labels.insert(label.clone(), self.code.len());
        Ok(())
    }

    pub fn push_jump(&mut self, label: &Rc<str>) {
        self.push_reference(label);
        self.push("JMP", Opcode::Jump);
    }

    pub fn push_jump_if_false(&mut self, label: &Rc<str>) {
        self.push_reference(label);
        self.push("JF", Opcode::JumpIfFalse);
    }

    fn push_reference(&mut self, label: &Rc<str>) {
        self.references.insert(self.code.len(), label.clone());
        self.code.push(Instruction::new(label, Opcode::Label));
    }

    pub fn link(self) -> Result<Program> {
        for (addr, label) in &self.references {
            if !self.labels.contains_key(label) {
                return Err(error!(UnresolvedLabel, @*addr; label.to_string()));
            }
        }
        Ok(Program::new(self.code, self.labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_backpatch() {
        let mut link = Link::new();
        let top = link.next_label();
        let end = link.next_label();
        assert_eq!(&*top, "m1");
        assert_eq!(&*end, "m2");
        assert!(link.push_label(&top).is_ok());
        link.push("true", Opcode::Bool);
        link.push_jump_if_false(&end);
        link.push_jump(&top);
        assert!(link.push_label(&end).is_ok());
        let program = link.link().ok();
        assert_eq!(program.as_ref().and_then(|p| p.label("m1")), Some(1));
        assert_eq!(program.as_ref().and_then(|p| p.label("m2")), Some(7));
        assert_eq!(program.map(|p| p.len()), Some(7));
    }

    #[test]
    fn test_unresolved() {
        let mut link = Link::new();
        let label = link.next_label();
        link.push_jump(&label);
        let e = link.link().err();
        assert_eq!(e.as_ref().map(|e| e.code()), Some(ErrorCode::UnresolvedLabel));
        assert_eq!(e.and_then(|e| e.address()), Some(0));
    }

    #[test]
    fn test_redefined() {
        let mut link = Link::new();
        let label = link.next_label();
        assert!(link.push_label(&label).is_ok());
        assert!(link.push_label(&label).is_err());
    }
}
