use std::fmt;
use std::error::Error;

mod errorkinds;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TypeMismatch,       // "type mismatch: INTEGER + BOOLEAN"
    UnknownOperator,    // "unknown operator: -BOOLEAN"
    NameNotDefined,
    NotCallable,
    WrongArgumentCount,
    InvalidArgument,
    IndexNotSupported,
    DivideByZero,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    kind: ErrorKind,
    message: String,
}

impl RuntimeError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        log::debug!("runtime error ({:?}): {}", kind, message);

        RuntimeError {
            kind,
            message,
        }
    }

    pub fn kind(&self) -> ErrorKind { self.kind }
    pub fn message(&self) -> &str { self.message.as_str() }
}

impl Error for RuntimeError { }

impl fmt::Display for RuntimeError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.message)
    }
}
