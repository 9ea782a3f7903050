use ansi_term::Style;
use joovy::error;
use joovy::lang::{lex, Error, Scan};
use joovy::mach::{translate, Event, Listing, Program, Runtime};
use linefeed::{DefaultTerminal, Interface, ReadResult};
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[clap(version, about)]
struct Args {
    /// Joovy source file
    file: PathBuf,

    /// Stop after translation
    #[clap(long)]
    no_execute: bool,

    /// Trace every instruction with the operand stack
    #[clap(long)]
    debug: bool,

    /// Write the postfix code next to the source file
    #[clap(long)]
    save_postfix: bool,

    /// Print the numbered postfix code and label table
    #[clap(long)]
    listing: bool,

    /// Print the token, identifier and constant tables
    #[clap(long)]
    tables: bool,
}

/// Returns the process exit code.
pub fn main() -> i32 {
    use clap::Parser;
    let args: Args = Args::parse();
    match main_loop(&args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    }
}

fn report(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
}

fn main_loop(args: &Args) -> std::io::Result<i32> {
    let source_name = args.file.display().to_string();
    let source = match std::fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(e) => {
            report(&error!(InternalError; format!("{}: {}", source_name, e)));
            return Ok(1);
        }
    };

    let scan = lex(&source);
    if args.tables {
        print_tables(&scan);
    }
    if !scan.is_ok() {
        for error in &scan.errors {
            report(error);
        }
        eprintln!("{} LEXICAL ERROR(S)", scan.error_count());
        return Ok(1);
    }

    let program = match translate(&scan.tokens) {
        Ok(program) => program,
        Err(error) => {
            report(&error);
            return Ok(1);
        }
    };
    if args.listing {
        print!("{}", Listing::new(&program));
    }
    if args.save_postfix {
        let path = args.file.with_extension("postfix");
        if let Err(e) = std::fs::write(&path, program.save_text(&source_name)) {
            report(&error!(InternalError; format!("{}: {}", path.display(), e)));
            return Ok(1);
        }
    }
    if args.no_execute {
        return Ok(0);
    }
    execute(program, args.debug)
}

fn print_tables(scan: &Scan) {
    println!("TOKENS\n{}", scan.tokens);
    println!("IDENTIFIERS\n{}", scan.identifiers);
    println!("CONSTANTS\n{}", scan.constants);
}

fn execute(program: Program, debug: bool) -> std::io::Result<i32> {
    let mut runtime = Runtime::new(program);
    runtime.set_trace(debug);
    let interface: Option<Interface<DefaultTerminal>> = if std::io::stdin().is_terminal() {
        Some(Interface::new("joovy")?)
    } else {
        None
    };
    let mut stdin = std::io::stdin().lock();
    let dim = Style::new().dimmed();

    loop {
        match runtime.execute(5000) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => println!("{}", s),
            Event::Trace(s) => eprintln!("{}", dim.paint(s)),
            Event::Input(name) => {
                let prompt = format!("INPUT {}: ", name);
                match &interface {
                    Some(interface) => {
                        interface.set_prompt(&prompt)?;
                        match interface.read_line()? {
                            ReadResult::Input(line) => runtime.enter(Some(&line)),
                            ReadResult::Signal(_) | ReadResult::Eof => runtime.enter(None),
                        }
                    }
                    None => {
                        print!("{}", prompt);
                        std::io::stdout().flush()?;
                        let mut line = String::new();
                        if stdin.read_line(&mut line)? == 0 {
                            runtime.enter(None);
                        } else {
                            runtime.enter(Some(&line));
                        }
                    }
                }
            }
            Event::Error(error) => {
                report(&error);
                return Ok(1);
            }
        }
    }

    if debug {
        for (name, val) in runtime.variables() {
            eprintln!("{}", dim.paint(format!("{} = {}", name, val)));
        }
    }
    Ok(0)
}
