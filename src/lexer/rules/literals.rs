pub mod string;

use crate::language;
use crate::lexer::{Token, TokenKind};
use crate::lexer::rules::{MatchResult, LexerRule, CharClass};

// Identifiers

#[derive(Debug, Default)]
pub struct IdentifierRule {
    len: usize,
}

impl IdentifierRule {
    pub fn new() -> Self {
        IdentifierRule { len: 0 }
    }
}

// Identifiers are a run of ASCII letters and '_', keywords are identifiers found in the keyword table
impl LexerRule for IdentifierRule {
    fn reset(&mut self) {
        self.len = 0;
    }

    fn current_state(&self) -> MatchResult {
        if self.len == 0 {
            MatchResult::IncompleteMatch
        } else {
            MatchResult::CompleteMatch
        }
    }

    fn try_match(&mut self, _prev: Option<char>, next: char) -> MatchResult {
        if next.is_word_letter() {
            self.len += 1;
            self.current_state()
        } else {
            MatchResult::NoMatch
        }
    }

    fn get_token(&self, lexeme: &str) -> Token {
        let kind = language::lookup_keyword(lexeme).unwrap_or(TokenKind::Ident);
        Token::new(kind, lexeme)
    }
}


// Integer and Float Literals

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Start,
    Integer,   // one or more digits
    Point,     // digits followed by '.', needs at least one more digit
    Fraction,  // digits '.' digits
}

/// A run of digits, optionally followed by a '.' and another run of digits.
/// The scan never backtracks past the last complete match, so "1.2.3" is a FLOAT followed by whatever '.' lexes as.
#[derive(Debug)]
pub struct NumberLiteralRule {
    state: NumberState,
}

impl NumberLiteralRule {
    pub fn new() -> Self {
        NumberLiteralRule { state: NumberState::Start }
    }

    fn next_state(&self, next: char) -> Option<NumberState> {
        match (self.state, next) {
            (NumberState::Start, ch) if ch.is_ascii_digit() => Some(NumberState::Integer),
            (NumberState::Integer, ch) if ch.is_ascii_digit() => Some(NumberState::Integer),
            (NumberState::Integer, '.') => Some(NumberState::Point),
            (NumberState::Point, ch) | (NumberState::Fraction, ch) if ch.is_ascii_digit() => Some(NumberState::Fraction),
            _ => None,
        }
    }
}

impl Default for NumberLiteralRule {
    fn default() -> Self { Self::new() }
}

impl LexerRule for NumberLiteralRule {
    fn reset(&mut self) {
        self.state = NumberState::Start;
    }

    fn current_state(&self) -> MatchResult {
        match self.state {
            NumberState::Start | NumberState::Point => MatchResult::IncompleteMatch,
            NumberState::Integer | NumberState::Fraction => MatchResult::CompleteMatch,
        }
    }

    fn try_match(&mut self, _prev: Option<char>, next: char) -> MatchResult {
        match self.next_state(next) {
            Some(state) => {
                self.state = state;
                self.current_state()
            },
            None => MatchResult::NoMatch,
        }
    }

    fn get_token(&self, lexeme: &str) -> Token {
        if lexeme.contains('.') {
            Token::new(TokenKind::Float, lexeme)
        } else {
            Token::new(TokenKind::Int, lexeme)
        }
    }
}
