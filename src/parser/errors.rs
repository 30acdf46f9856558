use std::fmt;
use std::error::Error;
use crate::lexer::{Span, TokenKind, TokenMeta};


pub type ErrorKind = ParserErrorKind;

// Specifies the actual error that occurred
#[derive(Debug, Clone, PartialEq)]
pub enum ParserErrorKind {
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    NoPrefixParseFn(TokenKind),
    InvalidInteger(String),
    InvalidFloat(String),
}

#[derive(Debug, Clone)]
pub struct ParserError {
    kind: ErrorKind,
    span: Span,
}

impl ParserError {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        ParserError { kind, span }
    }

    pub fn unexpected_token(expected: TokenKind, found: &TokenMeta) -> Self {
        Self::new(ErrorKind::UnexpectedToken { expected, found: found.kind() }, found.span)
    }

    pub fn no_prefix_parse_fn(found: &TokenMeta) -> Self {
        Self::new(ErrorKind::NoPrefixParseFn(found.kind()), found.span)
    }

    pub fn kind(&self) -> &ErrorKind { &self.kind }

    /// The location of the offending token
    pub fn span(&self) -> &Span { &self.span }
}


impl Error for ParserError { }

impl fmt::Display for ParserError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.kind() {
            ParserErrorKind::UnexpectedToken { expected, found } =>
                write!(fmt, "expected next token to be {}, got {} instead", expected, found),

            ParserErrorKind::NoPrefixParseFn(kind) =>
                write!(fmt, "no prefix parse function for {} found", kind),

            ParserErrorKind::InvalidInteger(literal) =>
                write!(fmt, "could not parse {:?} as integer", literal),

            ParserErrorKind::InvalidFloat(literal) =>
                write!(fmt, "could not parse {:?} as float", literal),
        }
    }
}
