use super::{translate, Program};
use crate::lang::{lex, Error};

/// Lex and translate a whole source text.
///
/// Translation does not start when the scanner reported errors;
/// every lexical error is returned. Translation stops at its
/// first error.
pub fn compile(source: &str) -> Result<Program, Vec<Error>> {
    let scan = lex(source);
    if !scan.is_ok() {
        return Err(scan.errors);
    }
    translate(&scan.tokens).map_err(|e| vec![e])
}
