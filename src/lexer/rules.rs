pub mod general;
pub mod literals;

pub use general::SymbolRule;

use crate::lexer::Token;


// Match Result

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    // has not consumed enough characters to produce a valid token, but could if given further correct input
    IncompleteMatch,

    // has consumed enough characters to produce a valid token, may still yet accept further correct input
    // should either remain in this state, or drop to the NoMatch state if incorrect input given
    CompleteMatch,

    // not a match for the characters that have been given, should remain in this state until reset
    NoMatch,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        match self {
            MatchResult::IncompleteMatch | MatchResult::CompleteMatch => true,
            MatchResult::NoMatch => false,
        }
    }

    pub fn is_complete_match(&self) -> bool {
        matches!(self, MatchResult::CompleteMatch)
    }
}


// Lexer Rules

pub trait LexerRule {
    fn reset(&mut self);

    fn current_state(&self) -> MatchResult;

    // like feed, but only modifies the LexerRule state if would match
    // return the match state if ch was passed to feed()
    fn try_match(&mut self, prev: Option<char>, next: char) -> MatchResult;

    // produce the token for a lexeme this rule completely matched
    // the lexer may have fed the rule more characters after that, so the rule must not rely on its own buffer
    fn get_token(&self, lexeme: &str) -> Token;
}


// Character classes used by the default rules (ASCII oriented)

pub trait CharClass {
    fn is_word_letter(&self) -> bool;
    fn is_skipped_whitespace(&self) -> bool;
}

impl CharClass for char {
    #[inline]
    fn is_word_letter(&self) -> bool {
        self.is_ascii_alphabetic() || *self == '_'
    }

    #[inline]
    fn is_skipped_whitespace(&self) -> bool {
        matches!(self, ' ' | '\t' | '\n' | '\r')
    }
}
