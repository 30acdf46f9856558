use core::fmt;

// Token Types

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,

    // Identifiers and literals
    Ident,
    Int,
    Float,
    String,

    // Operator Symbols
    Assign,
    Plus, Minus, Bang, Asterisk, Slash, Percent,
    LT, GT, EQ, NotEq,

    // Delimiters, Separators, punctuation
    Comma,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenSquare,
    CloseSquare,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    ElseIf,
    Return,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Illegal     => "ILLEGAL",
            Self::EOF         => "EOF",
            Self::Ident       => "IDENT",
            Self::Int         => "INT",
            Self::Float       => "FLOAT",
            Self::String      => "STRING",
            Self::Assign      => "=",
            Self::Plus        => "+",
            Self::Minus       => "-",
            Self::Bang        => "!",
            Self::Asterisk    => "*",
            Self::Slash       => "/",
            Self::Percent     => "%",
            Self::LT          => "<",
            Self::GT          => ">",
            Self::EQ          => "==",
            Self::NotEq       => "!=",
            Self::Comma       => ",",
            Self::Semicolon   => ";",
            Self::OpenParen   => "(",
            Self::CloseParen  => ")",
            Self::OpenBrace   => "{",
            Self::CloseBrace  => "}",
            Self::OpenSquare  => "[",
            Self::CloseSquare => "]",
            Self::Function    => "FUNCTION",
            Self::Let         => "LET",
            Self::True        => "TRUE",
            Self::False       => "FALSE",
            Self::If          => "IF",
            Self::Else        => "ELSE",
            Self::ElseIf      => "ELSE_IF",
            Self::Return      => "RETURN",
        };
        fmt.write_str(name)
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token { kind, literal: literal.into() }
    }
}


// include only mere character indexes in the output
// if a lexeme needs to be rendered, the relevant string can be extracted then
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub index: usize,
    pub length: usize,
}

impl Span {
    pub fn end(&self) -> usize { self.index + self.length }

    // smallest span covering both
    pub fn join(&self, other: &Span) -> Span {
        let index = self.index.min(other.index);
        let end = self.end().max(other.end());
        Span { index, length: end - index }
    }
}


/// Token Output
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMeta {
    pub token: Token,
    pub span: Span,
}

impl TokenMeta {
    pub fn kind(&self) -> TokenKind { self.token.kind }
    pub fn literal(&self) -> &str { self.token.literal.as_str() }
}
