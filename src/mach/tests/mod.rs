use crate::mach::{compile, Event, Program, Runtime};

mod translate_test;

fn program(source: &str) -> Program {
    match compile(source) {
        Ok(program) => program,
        Err(errors) => panic!("{:?}", errors),
    }
}

fn code(source: &str) -> Vec<String> {
    program(source)
        .instructions()
        .iter()
        .map(|ins| format!("{} {}", ins.lexeme(), ins.opcode()))
        .collect()
}

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
                s.push('\n');
            }
            Event::Input(name) => {
                s.push_str(&format!("INPUT {}: ", name));
                break;
            }
            Event::Trace(_) => {}
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}
