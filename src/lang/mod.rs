/*!
# Rust Language Module

This Rust module provides lexical analysis of the Joovy language.
Scanning is driven by a table of DFA transitions and produces a
[`TokenStream`] plus the identifier and constant intern tables.

*/

pub type LineNumber = Option<usize>;

#[macro_use]
mod error;
mod intern;
mod lex;
mod stream;

pub mod dfa;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use intern::Intern;
pub use lex::lex;
pub use lex::Scan;
pub use stream::Cursor;
pub use stream::TokenStream;
pub use token::Token;
