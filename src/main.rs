//! # Joovy
//!
//! Compile a Joovy source file to postfix code and run it.
//!

mod term;

fn main() {
    std::process::exit(term::main());
}
