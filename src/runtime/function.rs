use core::fmt;
use std::rc::Rc;

use crate::parser::expr::{FunctionLiteral, Identifier};
use crate::parser::stmt::BlockStmt;
use crate::runtime::{Value, Environment};
use crate::utils::fmt_join;


/// A closure: the parameter list and body of a function literal, plus the environment it was defined in.
/// The AST is shared with the function literal, not copied.
pub struct Function {
    params: Rc<[Identifier]>,
    body: Rc<BlockStmt>,
    env: Rc<Environment>,
}

impl Function {
    pub fn new(literal: &FunctionLiteral, env: Rc<Environment>) -> Self {
        Function {
            params: Rc::clone(&literal.params),
            body: Rc::clone(&literal.body),
            env,
        }
    }

    pub fn params(&self) -> &[Identifier] { &self.params }
    pub fn body(&self) -> &BlockStmt { &self.body }
    pub fn env(&self) -> &Rc<Environment> { &self.env }

    pub fn arity(&self) -> usize { self.params.len() }
}

// the captured environment can refer back to this function, so it is left out
impl fmt::Debug for Function {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Function")
            .field("params", &self.params.iter().map(Identifier::name).collect::<Vec<&str>>())
            .field("body", &self.body.to_string())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "fn({}) {{\n{}\n}}", fmt_join(", ", self.params.iter()), self.body)
    }
}


// Native Functions

pub type NativeFn = fn(args: &[Value]) -> Value;

/// A function implemented in Rust. Each one validates its own arguments
pub struct Builtin {
    name: &'static str,
    func: NativeFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Builtin")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Builtin {
    pub const fn new(name: &'static str, func: NativeFn) -> Self {
        Builtin { name, func }
    }

    pub fn name(&self) -> &'static str { self.name }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}
