#![allow(dead_code)]
use joovy::mach::{compile, Event, Outcome, Runtime};
use std::io::Cursor;

pub fn exec(source: &str) -> String {
    exec_input(source, "")
}

/// Output lines, then the first line of any error.
/// Each line of `input` answers one `input(...)` statement.
pub fn exec_input(source: &str, input: &str) -> String {
    let program = match compile(source) {
        Ok(program) => program,
        Err(errors) => {
            return errors.iter().map(|e| format!("?{}\n", headline(e))).collect();
        }
    };
    let mut runtime = Runtime::new(program);
    let mut lines = input.lines();
    let mut s = String::new();
    loop {
        match runtime.execute(5000) {
            Event::Stopped => break,
            Event::Running | Event::Trace(_) => {}
            Event::Print(ps) => {
                s.push_str(&ps);
                s.push('\n');
            }
            Event::Input(_) => runtime.enter(lines.next()),
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", headline(&error)));
            }
        }
    }
    s
}

fn headline(error: &joovy::lang::Error) -> String {
    error.to_string().lines().next().unwrap_or_default().to_string()
}

pub fn outcome(source: &str, input: &str) -> Outcome {
    let program = match compile(source) {
        Ok(program) => program,
        Err(errors) => panic!("{:?}", errors),
    };
    let mut input = Cursor::new(input.as_bytes().to_vec());
    match Runtime::new(program).run(&mut input) {
        Ok(outcome) => outcome,
        Err(error) => panic!("{}", error),
    }
}
