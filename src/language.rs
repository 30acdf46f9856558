use std::collections::HashMap;
use once_cell::sync::Lazy;

use crate::lexer::{LexerBuilder, TokenKind};
use crate::lexer::rules::SymbolRule;
use crate::lexer::rules::literals::{IdentifierRule, NumberLiteralRule};
use crate::lexer::rules::literals::string::StringLiteralRule;


pub type IntType = i64;    // internal representation for integers
pub type FloatType = f64;  // internal representation for floats


static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut keywords = HashMap::new();

    keywords.insert("fn",     TokenKind::Function);
    keywords.insert("let",    TokenKind::Let);
    keywords.insert("true",   TokenKind::True);
    keywords.insert("false",  TokenKind::False);
    keywords.insert("if",     TokenKind::If);
    keywords.insert("else",   TokenKind::Else);
    keywords.insert("return", TokenKind::Return);

    keywords
});

/// Check if an identifier is a reserved word
pub fn lookup_keyword(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

/// The fused `else if` keyword sequence
pub static ELSE_IF: &str = "else if";

// string literal escape sequences
pub static ESCAPE_SEQUENCES: &[(char, &str)] = &[
    ('0',  "\x00"),
    ('\\', "\\"),
    ('"',  "\""),
    ('t',  "\t"),
    ('n',  "\n"),
    ('r',  "\r"),
];

pub fn create_default_lexer_rules() -> LexerBuilder {
    LexerBuilder::new()

    // Punctuation
    .add_rule(SymbolRule::new(TokenKind::OpenParen,   "("))
    .add_rule(SymbolRule::new(TokenKind::CloseParen,  ")"))
    .add_rule(SymbolRule::new(TokenKind::OpenBrace,   "{"))
    .add_rule(SymbolRule::new(TokenKind::CloseBrace,  "}"))
    .add_rule(SymbolRule::new(TokenKind::OpenSquare,  "["))
    .add_rule(SymbolRule::new(TokenKind::CloseSquare, "]"))
    .add_rule(SymbolRule::new(TokenKind::Comma,       ","))
    .add_rule(SymbolRule::new(TokenKind::Semicolon,   ";"))

    // Assignment
    .add_rule(SymbolRule::new(TokenKind::Assign,      "="))

    // Arithmetic and comparison operators
    .add_rule(SymbolRule::new(TokenKind::Plus,        "+"))
    .add_rule(SymbolRule::new(TokenKind::Minus,       "-"))
    .add_rule(SymbolRule::new(TokenKind::Asterisk,    "*"))
    .add_rule(SymbolRule::new(TokenKind::Slash,       "/"))
    .add_rule(SymbolRule::new(TokenKind::Percent,     "%"))
    .add_rule(SymbolRule::new(TokenKind::Bang,        "!"))
    .add_rule(SymbolRule::new(TokenKind::LT,          "<"))
    .add_rule(SymbolRule::new(TokenKind::GT,          ">"))

    .add_rule(SymbolRule::new(TokenKind::EQ,          "=="))
    .add_rule(SymbolRule::new(TokenKind::NotEq,       "!="))

    // Identifiers, keywords and literals
    .add_rule(IdentifierRule::new())
    .add_rule(NumberLiteralRule::new())
    .add_rule(StringLiteralRule::new(ESCAPE_SEQUENCES))
}
