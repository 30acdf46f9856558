mod token;
mod tests;

pub mod rules;
pub use rules::MatchResult;

pub use token::*;

use std::iter::Iterator;
use crate::language;

use rules::{LexerRule, CharClass};


// Lexer Builder

pub struct LexerBuilder {
    rules: Vec<Box<dyn LexerRule>>,
}

impl Default for LexerBuilder {
    fn default() -> Self { Self::new() }
}

impl LexerBuilder {
    pub fn new() -> Self {
        LexerBuilder {
            rules: Vec::new(),
        }
    }

    // Note, the order that rules are added determines priority

    pub fn add_rule<R>(mut self, rule: R) -> Self
    where R: LexerRule + 'static {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn build(self, source: &str) -> Lexer {
        Lexer::with_rules(source, self.rules)
    }
}

// Lexer

fn split_array_pair_mut<T>(pair: &mut [T; 2]) -> (&mut T, &mut T) {
    let (first, rest) = pair.split_at_mut(1);
    (&mut first[0], &mut rest[0])
}

// to avoid interior self-referentiality inside Lexer (not permitted in safe Rust),
// instead of passing around references, we pass indices into the rules Vec instead
type RuleID = usize;

pub struct Lexer {
    source: Vec<char>,
    rules: Vec<Box<dyn LexerRule>>,

    current: usize, // index of the next unconsumed char
    done: bool,

    // token scanned ahead while checking for "else if"
    pending: Option<TokenMeta>,

    // internal state used by scan_token().
    // putting these here instead to avoid unnecessary allocations
    active: [Vec<RuleID>; 2],
}

// indices for the active array
const THIS_CYCLE: usize = 0;
const NEXT_CYCLE: usize = 1;


impl Iterator for Lexer {
    type Item = TokenMeta;

    // yields every token up to and including EOF
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let token = self.next_token();
        if token.kind() == TokenKind::EOF {
            self.done = true;
        }
        Some(token)
    }
}

impl Lexer {

    /// Create a lexer using the default language rules
    pub fn new(source: &str) -> Self {
        language::create_default_lexer_rules().build(source)
    }

    fn with_rules(source: &str, rules: Vec<Box<dyn LexerRule>>) -> Self {
        Lexer {
            source: source.chars().collect(),
            rules,
            current: 0,
            done: false,
            pending: None,
            active: [Vec::new(), Vec::new()],
        }
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_skipped_whitespace() {
                break;
            }
            self.current += 1;
        }
    }

    fn reset_rules(&mut self) {
        for rule in self.rules.iter_mut() {
            rule.reset();
        }

        for active in self.active.iter_mut() {
            active.clear();
        }
    }

    pub fn next_token(&mut self) -> TokenMeta {
        let token = match self.pending.take() {
            Some(token) => token,
            None => self.scan_token(),
        };

        // "else" followed by "if" is read as a single keyword
        if token.kind() == TokenKind::Else {
            let next = self.scan_token();
            if next.kind() == TokenKind::If {
                let span = token.span.join(&next.span);
                let token = Token::new(TokenKind::ElseIf, language::ELSE_IF);
                log::trace!("token {:?} at {:?}", token, span);
                return TokenMeta { token, span };
            }
            self.pending = Some(next);
        }

        log::trace!("token {:?} at {:?}", token.token, token.span);
        token
    }

    fn scan_token(&mut self) -> TokenMeta {
        self.skip_whitespace();

        //starting a new token
        let token_start = self.current;
        if self.at_eof() {
            return self.token_data(Token::new(TokenKind::EOF, ""), token_start);
        }

        self.reset_rules();

        // feed chars to all the rules, any rules that no longer match are discarded.
        // whenever some rule matches completely we remember the lowest rule id and where the match ended.
        // once nothing is active, we rewind to the end of the longest complete match ("rule of maximal munch")

        self.active[THIS_CYCLE].extend(0..self.rules.len());

        let mut longest: Option<(RuleID, usize)> = None;
        let mut index = token_start;

        while let Some(&next) = self.source.get(index) {
            let prev = index.checked_sub(1).map(|idx| self.source[idx]);

            let (active, next_active) = split_array_pair_mut(&mut self.active);
            next_active.clear();

            // active is always sorted by rule id, so the first complete rule has priority
            let mut complete = None;
            for &rule_id in active.iter() {
                let rule = &mut self.rules[rule_id];
                let match_result = rule.try_match(prev, next);

                if match_result.is_match() {
                    next_active.push(rule_id);

                    if match_result.is_complete_match() && complete.is_none() {
                        complete = Some(rule_id);
                    }
                }
            }

            index += 1;
            if let Some(rule_id) = complete {
                longest = Some((rule_id, index));
            }

            if next_active.is_empty() {
                break;
            }

            // swap cycles
            self.active.swap(THIS_CYCLE, NEXT_CYCLE);
        }

        match longest {
            Some((rule_id, end)) => {
                self.current = end;

                let lexeme = self.source[token_start..end].iter().collect::<String>();
                let token = self.rules[rule_id].get_token(&lexeme);
                self.token_data(token, token_start)
            },

            // nothing matched, emit the offending char by itself
            None => {
                let illegal = self.source[token_start];
                self.current = token_start + 1;
                self.token_data(Token::new(TokenKind::Illegal, illegal.to_string()), token_start)
            },
        }
    }

    fn token_data(&self, token: Token, token_start: usize) -> TokenMeta {
        let length =
            if self.current > token_start { self.current - token_start }
            else { 0 };

        TokenMeta {
            token,
            span: Span { index: token_start, length },
        }
    }
}
