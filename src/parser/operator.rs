use core::fmt;
use crate::lexer::TokenKind;

// Prefix Operators

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    Neg, Not,
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            PrefixOp::Neg => "-",
            PrefixOp::Not => "!",
        };
        fmt.write_str(symbol)
    }
}

// Binary Operators

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // product
    Mul, Div, Mod,

    // sum
    Add, Sub,

    // comparison
    LT, GT,

    // equality
    EQ, NE,
}

// Binding power of infix-capable tokens, ordered from weakest to tightest

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * / %
    Prefix,      // -x !x
    Call,        // f(x) a[i]
}

impl Precedence {
    /// Unrecognized tokens bind at the lowest level
    pub fn of_token(kind: TokenKind) -> Self {
        match kind {
            TokenKind::EQ | TokenKind::NotEq => Precedence::Equals,
            TokenKind::LT | TokenKind::GT => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => Precedence::Product,
            TokenKind::OpenParen | TokenKind::OpenSquare => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

impl BinaryOp {

    pub const fn precedence_level(&self) -> Precedence {
        match self {
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => Precedence::Product,

            BinaryOp::Add | BinaryOp::Sub => Precedence::Sum,

            BinaryOp::LT | BinaryOp::GT => Precedence::LessGreater,

            BinaryOp::EQ | BinaryOp::NE => Precedence::Equals,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::LT  => "<",
            BinaryOp::GT  => ">",
            BinaryOp::EQ  => "==",
            BinaryOp::NE  => "!=",
        };
        fmt.write_str(symbol)
    }
}
