use super::Program;

/// ## Human readable view of a [`Program`]
///
/// Numbered instructions followed by the label table.

#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    program: &'a Program,
}

impl<'a> Listing<'a> {
    pub fn new(program: &'a Program) -> Listing<'a> {
        Listing { program }
    }

    pub fn code(&self) -> String {
        let mut s = String::new();
        for (addr, ins) in self.program.instructions().iter().enumerate() {
            s.push_str(&format!(
                "{:>5}  {:<16} {}\n",
                addr,
                ins.lexeme().to_string(),
                ins.opcode()
            ));
        }
        s
    }

    pub fn labels(&self) -> String {
        let mut s = String::new();
        for (name, addr) in self.program.labels() {
            s.push_str(&format!("{:>5}  {}\n", name, addr));
        }
        s
    }
}

impl std::fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code())?;
        if !self.program.labels().is_empty() {
            write!(f, "\nLABELS\n{}", self.labels())?;
        }
        Ok(())
    }
}
