use core::fmt;
use crate::lexer::Token;
use crate::parser::Node;
use crate::parser::expr::{Expr, Identifier};


#[derive(Debug, Clone)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExprStmt),
}

impl Node for Stmt {
    fn token_literal(&self) -> String {
        match self {
            Self::Let(stmt) => stmt.token_literal(),
            Self::Return(stmt) => stmt.token_literal(),
            Self::Expression(stmt) => stmt.token_literal(),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let(stmt) => fmt::Display::fmt(stmt, fmt),
            Self::Return(stmt) => fmt::Display::fmt(stmt, fmt),
            Self::Expression(stmt) => fmt::Display::fmt(stmt, fmt),
        }
    }
}


// let <name> = <value>;

#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Expr,
}

impl Node for LetStmt {
    fn token_literal(&self) -> String { self.token.literal.clone() }
}

impl fmt::Display for LetStmt {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} {} = {};", self.token_literal(), self.name, self.value)
    }
}


// return <value>;

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Expr,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> String { self.token.literal.clone() }
}

impl fmt::Display for ReturnStmt {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} {};", self.token_literal(), self.value)
    }
}


// an expression on its own, the token is the first token of the expression

#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub token: Token,
    pub expr: Expr,
}

impl Node for ExprStmt {
    fn token_literal(&self) -> String { self.token.literal.clone() }
}

impl fmt::Display for ExprStmt {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.expr, fmt)
    }
}


// Statement blocks, the bodies of if-expressions and function literals

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub token: Token,  // the '{' token
    pub stmts: Box<[Stmt]>,
}

impl BlockStmt {
    pub fn iter(&self) -> impl Iterator<Item=&Stmt> { self.stmts.iter() }
}

impl Node for BlockStmt {
    fn token_literal(&self) -> String { self.token.literal.clone() }
}

impl fmt::Display for BlockStmt {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in self.stmts.iter() {
            fmt::Display::fmt(stmt, fmt)?;
        }
        Ok(())
    }
}


// The root of every parse

#[derive(Debug, Clone, Default)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> impl Iterator<Item=&Stmt> { self.stmts.iter() }
    pub fn is_empty(&self) -> bool { self.stmts.is_empty() }
    pub fn last(&self) -> Option<&Stmt> { self.stmts.last() }
}

impl Node for Program {
    fn token_literal(&self) -> String {
        self.stmts.first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or_default()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in self.stmts.iter() {
            fmt::Display::fmt(stmt, fmt)?;
        }
        Ok(())
    }
}
