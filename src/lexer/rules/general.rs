use crate::lexer::{Token, TokenKind};
use super::{MatchResult, LexerRule};


/// Matches one fixed symbol, e.g. `(` or `!=`
#[derive(Debug)]
pub struct SymbolRule {
    kind: TokenKind,
    symbol: &'static str,
    offset: usize,  // bytes of the symbol consumed so far
}

impl SymbolRule {
    pub fn new(kind: TokenKind, symbol: &'static str) -> Self {
        debug_assert!(!symbol.is_empty());

        SymbolRule { kind, symbol, offset: 0 }
    }

    fn remaining(&self) -> &'static str { &self.symbol[self.offset..] }
}

impl LexerRule for SymbolRule {
    fn reset(&mut self) {
        self.offset = 0;
    }

    fn current_state(&self) -> MatchResult {
        if self.remaining().is_empty() {
            MatchResult::CompleteMatch
        } else {
            MatchResult::IncompleteMatch
        }
    }

    // the state never drops to NoMatch, a rejected char just leaves the offset where it was
    fn try_match(&mut self, _prev: Option<char>, next: char) -> MatchResult {
        match self.remaining().chars().next() {
            Some(expected) if expected == next => {
                self.offset += next.len_utf8();
                self.current_state()
            },
            _ => MatchResult::NoMatch,
        }
    }

    fn get_token(&self, lexeme: &str) -> Token {
        Token::new(self.kind, lexeme)
    }
}
