use core::fmt;
use std::rc::Rc;

use crate::language::{IntType, FloatType};
use crate::lexer::Token;
use crate::parser::Node;
use crate::parser::stmt::BlockStmt;
use crate::parser::operator::{PrefixOp, BinaryOp};
use crate::utils::fmt_join;


#[derive(Debug, Clone)]
pub enum Expr {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    FloatLiteral(FloatLiteral),
    StringLiteral(StringLiteral),
    Boolean(BooleanLiteral),
    Array(ArrayLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionLiteral),
    Call(CallExpr),
    Index(IndexExpr),
}

impl Expr {
    fn as_node(&self) -> &dyn Node {
        match self {
            Self::Identifier(expr) => expr,
            Self::IntegerLiteral(expr) => expr,
            Self::FloatLiteral(expr) => expr,
            Self::StringLiteral(expr) => expr,
            Self::Boolean(expr) => expr,
            Self::Array(expr) => expr,
            Self::Prefix(expr) => expr,
            Self::Infix(expr) => expr,
            Self::If(expr) => expr,
            Self::Function(expr) => expr,
            Self::Call(expr) => expr,
            Self::Index(expr) => expr,
        }
    }
}

impl Node for Expr {
    fn token_literal(&self) -> String { self.as_node().token_literal() }
}

impl fmt::Display for Expr {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_node(), fmt)
    }
}

// most nodes report the literal of the token that began them
macro_rules! impl_token_literal {
    ( $( $node:ty ),* $(,)? ) => {
        $(
            impl Node for $node {
                fn token_literal(&self) -> String { self.token.literal.clone() }
            }
        )*
    };
}

impl_token_literal!(
    Identifier, IntegerLiteral, FloatLiteral, StringLiteral, BooleanLiteral,
    ArrayLiteral, PrefixExpr, InfixExpr, IfExpr, FunctionLiteral, CallExpr, IndexExpr,
);


// Identifiers and Literals

#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: Rc<str>,
}

impl Identifier {
    pub fn name(&self) -> &str { &self.value }
}

impl fmt::Display for Identifier {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.value)
    }
}

#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: IntType,
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.token.literal)
    }
}

#[derive(Debug, Clone)]
pub struct FloatLiteral {
    pub token: Token,
    pub value: FloatType,
}

impl fmt::Display for FloatLiteral {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.token.literal)
    }
}

#[derive(Debug, Clone)]
pub struct StringLiteral {
    pub token: Token,
    pub value: Rc<str>,
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{:?}", self.value)
    }
}

#[derive(Debug, Clone)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.token.literal)
    }
}

#[derive(Debug, Clone)]
pub struct ArrayLiteral {
    pub token: Token,  // the '[' token
    pub elements: Vec<Expr>,
}

impl fmt::Display for ArrayLiteral {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "[{}]", fmt_join(", ", &self.elements))
    }
}


// Operator Expressions

#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub token: Token,
    pub op: PrefixOp,
    pub right: Box<Expr>,
}

impl fmt::Display for PrefixExpr {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "({}{})", self.op, self.right)
    }
}

#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub token: Token,
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl fmt::Display for InfixExpr {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "({} {} {})", self.left, self.op, self.right)
    }
}


// Conditionals

#[derive(Debug, Clone)]
pub struct ConditionalBranch {
    pub condition: Expr,
    pub consequence: BlockStmt,
}

#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub else_ifs: Vec<ConditionalBranch>,
    pub alternative: Option<BlockStmt>,
}

impl IfExpr {
    /// All condition/consequence pairs in source order, the leading `if` first
    pub fn branches(&self) -> impl Iterator<Item=(&Expr, &BlockStmt)> {
        let first = std::iter::once((&*self.condition, &self.consequence));
        let rest = self.else_ifs.iter()
            .map(|branch| (&branch.condition, &branch.consequence));

        first.chain(rest)
    }
}

impl fmt::Display for IfExpr {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "if {} {}", self.condition, self.consequence)?;

        for branch in self.else_ifs.iter() {
            write!(fmt, " else if {} {}", branch.condition, branch.consequence)?;
        }

        if let Some(alternative) = self.alternative.as_ref() {
            write!(fmt, " else {}", alternative)?;
        }
        Ok(())
    }
}


// Functions

#[derive(Debug, Clone)]
pub struct FunctionLiteral {
    pub token: Token,
    pub params: Rc<[Identifier]>,
    pub body: Rc<BlockStmt>,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}({}) {}", self.token_literal(), fmt_join(", ", self.params.iter()), self.body)
    }
}

#[derive(Debug, Clone)]
pub struct CallExpr {
    pub token: Token,  // the '(' token
    pub function: Box<Expr>,
    pub args: Vec<Expr>,
}

impl fmt::Display for CallExpr {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}({})", self.function, fmt_join(", ", &self.args))
    }
}

#[derive(Debug, Clone)]
pub struct IndexExpr {
    pub token: Token,  // the '[' token
    pub left: Box<Expr>,
    pub index: Box<Expr>,
}

impl fmt::Display for IndexExpr {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "({}[{}])", self.left, self.index)
    }
}
