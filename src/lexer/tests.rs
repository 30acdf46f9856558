#![cfg(test)]

use crate::lexer::{Lexer, LexerBuilder, Token, TokenKind, TokenMeta, Span};
use crate::lexer::rules::*;


fn scan_all(source: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(source)
        .map(|meta| (meta.kind(), meta.token.literal))
        .collect()
}

fn tok(kind: TokenKind, literal: &str) -> (TokenKind, String) {
    (kind, literal.to_string())
}


#[test]
fn lexer_matches_tokens_1() {
    let source = "==!=";

    let mut lexer = LexerBuilder::new()
        .add_rule(SymbolRule::new(TokenKind::EQ, "=="))
        .add_rule(SymbolRule::new(TokenKind::NotEq, "!="))
        .build(source);

    let out = lexer.next_token();
    assert!(matches!(out, TokenMeta {
        token: Token { kind: TokenKind::EQ, .. },
        span: Span { index: 0, length: 2 },
    }), "unexpected output: {:?}", out);

    let out = lexer.next_token();
    assert!(matches!(out, TokenMeta {
        token: Token { kind: TokenKind::NotEq, .. },
        span: Span { index: 2, length: 2 },
    }), "unexpected output: {:?}", out);

    let out = lexer.next_token();
    assert!(matches!(out, TokenMeta {
        token: Token { kind: TokenKind::EOF, .. },
        span: Span { index: 4, length: 0 },
    }), "unexpected output: {:?}", out);
}

#[test]
fn lexer_skips_whitespace() {
    let source = "  ==  \n\t!=";

    let mut lexer = LexerBuilder::new()
        .add_rule(SymbolRule::new(TokenKind::EQ, "=="))
        .add_rule(SymbolRule::new(TokenKind::NotEq, "!="))
        .build(source);

    let out = lexer.next_token();
    assert!(matches!(out, TokenMeta {
        token: Token { kind: TokenKind::EQ, .. },
        span: Span { index: 2, length: 2 },
    }), "unexpected output: {:?}", out);

    let out = lexer.next_token();
    assert!(matches!(out, TokenMeta {
        token: Token { kind: TokenKind::NotEq, .. },
        span: Span { index: 8, length: 2 },
    }), "unexpected output: {:?}", out);
}

#[test]
fn lexer_prefers_longest_match() {
    let source = "= ==";

    let mut lexer = LexerBuilder::new()
        .add_rule(SymbolRule::new(TokenKind::Assign, "="))
        .add_rule(SymbolRule::new(TokenKind::EQ, "=="))
        .build(source);

    assert_eq!(lexer.next_token().kind(), TokenKind::Assign);
    assert_eq!(lexer.next_token().kind(), TokenKind::EQ);
    assert_eq!(lexer.next_token().kind(), TokenKind::EOF);
}

#[test]
fn lexer_ties_go_to_first_rule() {
    let source = "let";

    let mut lexer = LexerBuilder::new()
        .add_rule(SymbolRule::new(TokenKind::Return, "let"))
        .add_rule(literals::IdentifierRule::new())
        .build(source);

    assert_eq!(lexer.next_token().kind(), TokenKind::Return);
}

#[test]
fn lexer_emits_illegal_for_unknown_char() {
    let tokens = scan_all("5 @ 5");

    assert_eq!(tokens, vec![
        tok(TokenKind::Int, "5"),
        tok(TokenKind::Illegal, "@"),
        tok(TokenKind::Int, "5"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lexer_repeats_eof() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind(), TokenKind::Ident);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind(), TokenKind::EOF);
    }
}

#[test]
fn lexer_iterator_stops_after_eof() {
    let lexer = Lexer::new("1 2");
    assert_eq!(lexer.count(), 3);
}

#[test]
fn lex_operators_and_delimiters() {
    let tokens = scan_all("=+(){},;-!*/%<>[]");
    let kinds: Vec<TokenKind> = tokens.iter().map(|(kind, _)| *kind).collect();

    assert_eq!(kinds, vec![
        TokenKind::Assign, TokenKind::Plus,
        TokenKind::OpenParen, TokenKind::CloseParen,
        TokenKind::OpenBrace, TokenKind::CloseBrace,
        TokenKind::Comma, TokenKind::Semicolon,
        TokenKind::Minus, TokenKind::Bang,
        TokenKind::Asterisk, TokenKind::Slash, TokenKind::Percent,
        TokenKind::LT, TokenKind::GT,
        TokenKind::OpenSquare, TokenKind::CloseSquare,
        TokenKind::EOF,
    ]);
}

#[test]
fn lex_let_statement() {
    let tokens = scan_all("let five = 5;");

    assert_eq!(tokens, vec![
        tok(TokenKind::Let, "let"),
        tok(TokenKind::Ident, "five"),
        tok(TokenKind::Assign, "="),
        tok(TokenKind::Int, "5"),
        tok(TokenKind::Semicolon, ";"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_function_literal() {
    let tokens = scan_all("let add = fn(x, y) {\n  x + y;\n};");

    assert_eq!(tokens, vec![
        tok(TokenKind::Let, "let"),
        tok(TokenKind::Ident, "add"),
        tok(TokenKind::Assign, "="),
        tok(TokenKind::Function, "fn"),
        tok(TokenKind::OpenParen, "("),
        tok(TokenKind::Ident, "x"),
        tok(TokenKind::Comma, ","),
        tok(TokenKind::Ident, "y"),
        tok(TokenKind::CloseParen, ")"),
        tok(TokenKind::OpenBrace, "{"),
        tok(TokenKind::Ident, "x"),
        tok(TokenKind::Plus, "+"),
        tok(TokenKind::Ident, "y"),
        tok(TokenKind::Semicolon, ";"),
        tok(TokenKind::CloseBrace, "}"),
        tok(TokenKind::Semicolon, ";"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_comparison_operators() {
    let tokens = scan_all("10 == 10; 10 != 9;");

    assert_eq!(tokens, vec![
        tok(TokenKind::Int, "10"),
        tok(TokenKind::EQ, "=="),
        tok(TokenKind::Int, "10"),
        tok(TokenKind::Semicolon, ";"),
        tok(TokenKind::Int, "10"),
        tok(TokenKind::NotEq, "!="),
        tok(TokenKind::Int, "9"),
        tok(TokenKind::Semicolon, ";"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_keywords() {
    let tokens = scan_all("fn let true false if else return");
    let kinds: Vec<TokenKind> = tokens.iter().map(|(kind, _)| *kind).collect();

    assert_eq!(kinds, vec![
        TokenKind::Function, TokenKind::Let,
        TokenKind::True, TokenKind::False,
        TokenKind::If, TokenKind::Else,
        TokenKind::Return, TokenKind::EOF,
    ]);
}

#[test]
fn lex_identifiers_with_underscores() {
    let tokens = scan_all("foo_bar _x letter iffy");

    assert_eq!(tokens, vec![
        tok(TokenKind::Ident, "foo_bar"),
        tok(TokenKind::Ident, "_x"),
        tok(TokenKind::Ident, "letter"),
        tok(TokenKind::Ident, "iffy"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_else_if_is_fused() {
    let tokens = scan_all("} else if (x) {");

    assert_eq!(tokens, vec![
        tok(TokenKind::CloseBrace, "}"),
        tok(TokenKind::ElseIf, "else if"),
        tok(TokenKind::OpenParen, "("),
        tok(TokenKind::Ident, "x"),
        tok(TokenKind::CloseParen, ")"),
        tok(TokenKind::OpenBrace, "{"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_else_if_span_covers_both_words() {
    let mut lexer = Lexer::new("else\n  if");

    let out = lexer.next_token();
    assert_eq!(out.kind(), TokenKind::ElseIf);
    assert_eq!(out.span, Span { index: 0, length: 9 });
}

#[test]
fn lex_else_not_followed_by_if() {
    let tokens = scan_all("else iffy { }");

    assert_eq!(tokens, vec![
        tok(TokenKind::Else, "else"),
        tok(TokenKind::Ident, "iffy"),
        tok(TokenKind::OpenBrace, "{"),
        tok(TokenKind::CloseBrace, "}"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_else_at_end_of_input() {
    let tokens = scan_all("else");

    assert_eq!(tokens, vec![
        tok(TokenKind::Else, "else"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_number_literals() {
    let tokens = scan_all("5 10.25 0.5 007");

    assert_eq!(tokens, vec![
        tok(TokenKind::Int, "5"),
        tok(TokenKind::Float, "10.25"),
        tok(TokenKind::Float, "0.5"),
        tok(TokenKind::Int, "007"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_number_does_not_consume_trailing_point() {
    let tokens = scan_all("1.x");

    assert_eq!(tokens, vec![
        tok(TokenKind::Int, "1"),
        tok(TokenKind::Illegal, "."),
        tok(TokenKind::Ident, "x"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_number_with_two_points() {
    let tokens = scan_all("1.2.3");

    assert_eq!(tokens, vec![
        tok(TokenKind::Float, "1.2"),
        tok(TokenKind::Illegal, "."),
        tok(TokenKind::Int, "3"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_number_followed_by_identifier() {
    let tokens = scan_all("12abc");

    assert_eq!(tokens, vec![
        tok(TokenKind::Int, "12"),
        tok(TokenKind::Ident, "abc"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_string_literals() {
    let tokens = scan_all(r#""foobar" "foo bar" """#);

    assert_eq!(tokens, vec![
        tok(TokenKind::String, "foobar"),
        tok(TokenKind::String, "foo bar"),
        tok(TokenKind::String, ""),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_string_escapes() {
    let tokens = scan_all(r#""a\nb\t\"c\"\\""#);

    assert_eq!(tokens, vec![
        tok(TokenKind::String, "a\nb\t\"c\"\\"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_string_unknown_escape_kept() {
    let tokens = scan_all(r#""\q""#);

    assert_eq!(tokens, vec![
        tok(TokenKind::String, "\\q"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_unterminated_string() {
    let tokens = scan_all(r#""abc"#);

    assert_eq!(tokens, vec![
        tok(TokenKind::Illegal, "\""),
        tok(TokenKind::Ident, "abc"),
        tok(TokenKind::EOF, ""),
    ]);
}

#[test]
fn lex_array_and_index() {
    let tokens = scan_all("[1, 2][0]");
    let kinds: Vec<TokenKind> = tokens.iter().map(|(kind, _)| *kind).collect();

    assert_eq!(kinds, vec![
        TokenKind::OpenSquare, TokenKind::Int, TokenKind::Comma, TokenKind::Int, TokenKind::CloseSquare,
        TokenKind::OpenSquare, TokenKind::Int, TokenKind::CloseSquare,
        TokenKind::EOF,
    ]);
}


// Rule tests

#[test]
fn symbol_rule_tracks_progress() {
    let mut rule = SymbolRule::new(TokenKind::EQ, "==");
    assert_eq!(rule.current_state(), MatchResult::IncompleteMatch);

    assert_eq!(rule.try_match(None, '='), MatchResult::IncompleteMatch);
    assert_eq!(rule.try_match(Some('='), '='), MatchResult::CompleteMatch);
    assert_eq!(rule.try_match(Some('='), '='), MatchResult::NoMatch);
    assert_eq!(rule.current_state(), MatchResult::CompleteMatch);

    rule.reset();
    assert_eq!(rule.try_match(None, '!'), MatchResult::NoMatch);
    assert_eq!(rule.current_state(), MatchResult::IncompleteMatch);
}

#[test]
fn number_rule_states() {
    let mut rule = literals::NumberLiteralRule::new();

    assert_eq!(rule.try_match(None, '1'), MatchResult::CompleteMatch);
    assert_eq!(rule.try_match(Some('1'), '.'), MatchResult::IncompleteMatch);
    assert_eq!(rule.try_match(Some('.'), '5'), MatchResult::CompleteMatch);
    assert_eq!(rule.try_match(Some('5'), '.'), MatchResult::NoMatch);
}

#[test]
fn string_rule_states() {
    let mut rule = literals::string::StringLiteralRule::default();

    assert_eq!(rule.try_match(None, '"'), MatchResult::IncompleteMatch);
    assert_eq!(rule.try_match(Some('"'), '\\'), MatchResult::IncompleteMatch);
    assert_eq!(rule.try_match(Some('\\'), '"'), MatchResult::IncompleteMatch);
    assert_eq!(rule.try_match(Some('"'), '"'), MatchResult::CompleteMatch);
    assert_eq!(rule.try_match(Some('"'), 'x'), MatchResult::NoMatch);
}
