use crate::language;
use crate::lexer::{Token, TokenKind};
use crate::lexer::rules::{MatchResult, LexerRule};


const ESCAPE_CHAR: char = '\\';
const DOUBLE_QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringState {
    Start,
    Open,
    Escape,  // just saw a backslash, the next char is taken literally by the scan
    Closed,
}

#[derive(Debug)]
pub struct StringLiteralRule {
    state: StringState,
    escapes: &'static [(char, &'static str)],
}

impl StringLiteralRule {
    pub fn new(escapes: &'static [(char, &'static str)]) -> Self {
        StringLiteralRule {
            state: StringState::Start,
            escapes,
        }
    }

    fn lookup_escape_for_tag(&self, tag: char) -> Option<&'static str> {
        self.escapes.iter()
            .find(|(escape_tag, _)| *escape_tag == tag)
            .map(|(_, output)| *output)
    }

    // translate escape sequences in the body of a literal
    // unknown sequences are kept as written
    fn unescape(&self, body: &str) -> String {
        let mut output = String::with_capacity(body.len());
        let mut chars = body.chars();

        while let Some(ch) = chars.next() {
            if ch != ESCAPE_CHAR {
                output.push(ch);
                continue;
            }

            match chars.next() {
                Some(tag) => match self.lookup_escape_for_tag(tag) {
                    Some(escaped) => output.push_str(escaped),
                    None => {
                        output.push(ESCAPE_CHAR);
                        output.push(tag);
                    },
                },
                None => output.push(ESCAPE_CHAR),
            }
        }

        output
    }
}

impl Default for StringLiteralRule {
    fn default() -> Self { Self::new(language::ESCAPE_SEQUENCES) }
}

impl LexerRule for StringLiteralRule {
    fn reset(&mut self) {
        self.state = StringState::Start;
    }

    fn current_state(&self) -> MatchResult {
        match self.state {
            StringState::Closed => MatchResult::CompleteMatch,
            _ => MatchResult::IncompleteMatch,
        }
    }

    fn try_match(&mut self, _prev: Option<char>, next: char) -> MatchResult {
        let state = match (self.state, next) {
            (StringState::Start, DOUBLE_QUOTE) => StringState::Open,
            (StringState::Start, _) => return MatchResult::NoMatch,

            (StringState::Open, ESCAPE_CHAR) => StringState::Escape,
            (StringState::Open, DOUBLE_QUOTE) => StringState::Closed,
            (StringState::Open, _) => StringState::Open,

            (StringState::Escape, _) => StringState::Open,

            (StringState::Closed, _) => return MatchResult::NoMatch,
        };

        self.state = state;
        self.current_state()
    }

    fn get_token(&self, lexeme: &str) -> Token {
        debug_assert!(lexeme.len() >= 2);

        // strip the enclosing quotes
        let body = &lexeme[1..lexeme.len() - 1];
        Token::new(TokenKind::String, self.unescape(body))
    }
}
