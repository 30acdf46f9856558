use std::fmt;
use std::io;
use std::error::Error;

#[macro_use]
mod macros;

pub mod utils;

pub mod source;
pub mod lexer;
pub mod parser;

pub mod language;
pub mod runtime;
pub mod builtins;
pub mod interpreter;

pub mod frontend;


use source::ModuleSource;
use lexer::Lexer;
use parser::{Parser, ParserError};
use parser::stmt::Program;

#[derive(Debug)]
pub enum BuildErrors {
    // depending on which stage the build failed
    Source(io::Error),
    Syntax(Box<[ParserError]>),
}

impl Error for BuildErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(error) => Some(error),
            Self::Syntax(..) => None,
        }
    }
}

impl fmt::Display for BuildErrors {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(error) => utils::format_error(fmt, "error reading source", None, Some(error)),
            Self::Syntax(errors) => {
                let message = format!("{} syntax error(s)", errors.len());
                utils::format_error(fmt, "parsing failed", Some(&message), None)
            },
        }
    }
}

pub fn build_module(source: &ModuleSource) -> Result<Program, BuildErrors> {
    let source_text = source.read_text()
        .map_err(BuildErrors::Source)?;

    parse_source(&source_text)
        .map_err(|errors| BuildErrors::Syntax(errors.into_boxed_slice()))
}

/// Produce AST from source text
pub fn parse_source(source_text: &str) -> Result<Program, Vec<ParserError>> {
    let mut parser = Parser::new(Lexer::new(source_text));
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(parser.into_errors())
    }
}


pub fn print_build_errors(errors: &BuildErrors, source: &ModuleSource) {
    match errors {
        BuildErrors::Source(error) => {
            println!("Error reading source: {}.", error);
        }

        BuildErrors::Syntax(errors) => {
            println!("Errors in {}:\n", source);
            match source.read_text() {
                Ok(source_text) => frontend::print_source_errors(&source_text, errors),
                Err(..) => for error in errors.iter() {
                    println!("{}", error);
                },
            }
        }
    }
}
