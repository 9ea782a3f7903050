/*!
## Rust Machine Module

This Rust module translates Joovy tokens into postfix code
and runs that code on a stack machine.

*/

pub type Address = usize;

mod compile;
mod link;
mod listing;
mod opcode;
mod operation;
mod program;
mod runtime;
mod stack;
mod translate;
mod val;
mod var;

#[cfg(test)]
mod tests;

pub use compile::compile;
pub use link::Link;
pub use listing::Listing;
pub use opcode::Instruction;
pub use opcode::Opcode;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Outcome;
pub use runtime::Runtime;
pub use stack::Stack;
pub use translate::translate;
pub use val::Cell;
pub use val::Val;
pub use var::Var;
