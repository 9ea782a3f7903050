//! # Joovy
//!
//! A small teaching language compiled to postfix code and run
//! on a stack machine.
//!
//! Source text is scanned by a table driven automaton in [`lang`],
//! then translated in a single pass and executed by [`mach`].
//! ```
//! use joovy::mach::{compile, Runtime};
//!
//! let program = compile("int x = 2; print(x * 21)").unwrap();
//! let mut input = std::io::empty();
//! let outcome = Runtime::new(program).run(&mut input).unwrap();
//! assert_eq!(outcome.output, vec!["42"]);
//! ```
//!
//! The command line tool is `joovy <file>`; see `joovy --help`.

#[path = "doc/language.rs"]
#[allow(non_snake_case)]
pub mod _Language;

pub mod lang;
pub mod mach;
