use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::rc::Rc;
use clap::{Command, Arg};

use monkey;
use monkey::frontend;
use monkey::lexer::{Lexer, TokenKind};
use monkey::source::{ModuleSource, SourceType};
use monkey::parser::stmt::{Stmt, Program};
use monkey::runtime::Environment;
use monkey::interpreter;

fn main() {
    env_logger::init();

    let app = Command::new("monkey")
        .version(clap::crate_version!())
        .about("An interpreter for the Monkey programming language")
        .arg(
            Arg::new("file")
            .index(1)
            .help("Path to input script file")
            .value_name("FILE")
        )
        .arg(
            Arg::new("cmd")
            .short('c')
            .help("Execute a snippet then exit")
            .value_name("CMD")
            .takes_value(true)
        )
        .arg(
            Arg::new("interactive")
            .short('i')
            .help("Drop into an interactive REPL after executing")
        )
        .arg(
            Arg::new("parse_only")
            .short('P')
            .help("Parse and print the program instead of executing")
        )
        .arg(
            Arg::new("tokens_only")
            .short('T')
            .help("Print the token stream instead of executing")
        );

    let version = app.get_version().unwrap_or("").to_string();
    let args = app.get_matches();

    let module =
        if let Some(s) = args.value_of("cmd") {
            let source = SourceType::String(s.to_string());
            Some(ModuleSource::new("cmd", source))
        } else if let Some(s) = args.value_of("file") {
            let source = SourceType::File(PathBuf::from(s));
            Some(ModuleSource::new(s, source))
        } else {
            None
        };

    let module = match module {
        Some(module) => module,
        None => {
            start_repl(&version, Environment::new_root());
            return;
        },
    };

    if args.is_present("tokens_only") {
        print_tokens(&module);
    }
    else if args.is_present("parse_only") {
        parse_and_print_program(&module);
    }
    else {
        let env = Environment::new_root();
        let success = build_and_execute(&module, &env);

        if !success {
            process::exit(1);
        }
        if args.is_present("interactive") {
            start_repl(&version, env);
        }
    }
}

fn start_repl(version: &str, env: Rc<Environment>) {
    println!("\nMonkey Version {}\n", version);

    let mut repl = Repl::new(env);
    repl.run();
}

// returns false if the module could not be built or stopped with a runtime error
fn build_and_execute(module: &ModuleSource, env: &Rc<Environment>) -> bool {
    let program = match monkey::build_module(module) {
        Ok(program) => program,
        Err(errors) => {
            monkey::print_build_errors(&errors, module);
            return false;
        },
    };

    let result = interpreter::eval(&program, env);
    if !result.is_null() {
        println!("{}", result.inspect());
    }
    !result.is_error()
}

fn print_tokens(module: &ModuleSource) {
    let source_text = match module.read_text() {
        Ok(source_text) => source_text,
        Err(error) => {
            println!("Error reading source: {}.", error);
            return;
        },
    };

    for meta in Lexer::new(&source_text) {
        println!("{:>4}:{:<3} {:<8} {:?}", meta.span.index, meta.span.length, meta.kind().to_string(), meta.literal());
        if meta.kind() == TokenKind::EOF {
            break;
        }
    }
}

fn parse_and_print_program(module: &ModuleSource) {
    match monkey::build_module(module) {
        Ok(program) => for stmt in program.iter() {
            println!("{}", stmt);
        },
        Err(errors) => monkey::print_build_errors(&errors, module),
    }
}


//////// REPL ////////


const PROMPT: &str = ">> ";

struct Repl {
    env: Rc<Environment>,
}

enum ReadLine {
    Ok(String),
    Empty,
    Restart,
    Quit,
}

impl Repl {
    pub fn new(env: Rc<Environment>) -> Self {
        Self { env }
    }

    fn read_line(&self, prompt: &'static str) -> ReadLine {
        let mut stdout = io::stdout();
        if let Err(error) = stdout.write_all(prompt.as_bytes()).and_then(|_| stdout.flush()) {
            log::debug!("could not write prompt: {}", error);
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            // EOF
            Ok(0) => return ReadLine::Quit,
            Ok(..) => { },
            Err(error) => {
                println!("Could not read input: {}", error);
                return ReadLine::Restart;
            },
        }

        let input = input.trim_end();

        if input == "quit" || input.contains('\x04') {
            return ReadLine::Quit;
        }

        if input.is_empty() {
            return ReadLine::Empty;
        }

        ReadLine::Ok(input.to_string())
    }

    pub fn run(&mut self) {
        loop {
            let input = match self.read_line(PROMPT) {
                ReadLine::Quit => return,
                ReadLine::Restart | ReadLine::Empty => continue,
                ReadLine::Ok(input) => input,
            };

            let program = match monkey::parse_source(&input) {
                Ok(program) => program,
                Err(errors) => {
                    frontend::print_source_errors(&input, &errors);
                    continue;
                },
            };

            let result = interpreter::eval(&program, &self.env);
            if result.is_error() || Self::should_echo(&program) {
                println!("{}", result.inspect());
            }
        }
    }

    // only show the result if the last statement produces a value
    fn should_echo(program: &Program) -> bool {
        matches!(program.last(), Some(Stmt::Expression(..) | Stmt::Return(..)))
    }
}
