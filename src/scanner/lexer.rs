//! Scanner (lexical DFA)
//!
//! Converts the character stream of a [`SourceCursor`] into [`Token`]s, one per
//! call to [`Scanner::get_token`]. Lexical errors never stop the scan: they come
//! back in-band as [`TokenKind::Error`] tokens and the caller decides whether to
//! carry on.

use super::cursor::SourceCursor;
use super::reserved;
use super::token::{Token, TokenKind, MAX_TOKEN_LEN};
use crate::listing::Listing;
use std::io::BufRead;

/// States of the scanning automaton. Every call to [`Scanner::get_token`]
/// starts in `Start` and returns once it reaches `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    InNum,
    InId,
    InAssign,
    InComment,
    InCompute,
    InCompare,
    Done,
}

/// Scanner for one source unit.
pub struct Scanner<R> {
    cursor: SourceCursor<R>,
    token_string: String,
}

impl<'a> Scanner<&'a [u8]> {
    /// Scanner over an in-memory source.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self::with_listing(reader, Listing::disabled())
    }

    /// Scanner that echoes source lines and traces tokens to `listing`,
    /// according to the listing's flags.
    pub fn with_listing(reader: R, listing: Listing) -> Self {
        Self {
            cursor: SourceCursor::with_listing(reader, listing),
            token_string: String::new(),
        }
    }

    /// Begin scanning a new, independent source. Line numbers restart at 1 and
    /// nothing buffered from the previous source survives.
    pub fn reset(&mut self, reader: R) {
        log::debug!("scanner reset after {} line(s)", self.cursor.line());
        self.cursor.reset(reader);
        self.token_string.clear();
    }

    /// Lexeme of the most recent token; valid until the next `get_token`.
    pub fn token_string(&self) -> &str {
        &self.token_string
    }

    /// Line the scanner is currently on. Tree nodes record this when created.
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    pub fn listing_mut(&mut self) -> &mut Listing {
        self.cursor.listing_mut()
    }

    pub fn into_listing(self) -> Listing {
        self.cursor.into_listing()
    }

    /// Scan the whole remaining input. The last token is always
    /// [`TokenKind::EndOfFile`].
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.get_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Return the next token.
    pub fn get_token(&mut self) -> Token {
        self.token_string.clear();
        let mut state = State::Start;
        let mut kind = TokenKind::Error;
        let mut line = self.cursor.line();

        while state != State::Done {
            match state {
                State::Start => {
                    let Some(c) = self.cursor.next_char() else {
                        line = self.end_line();
                        kind = TokenKind::EndOfFile;
                        state = State::Done;
                        continue;
                    };
                    match c {
                        b' ' | b'\t' | b'\n' | b'\r' => continue,
                        b'{' => {
                            state = State::InComment;
                            continue;
                        }
                        b'0'..=b'9' => state = State::InNum,
                        c if c.is_ascii_alphabetic() => state = State::InId,
                        b':' => state = State::InAssign,
                        b'+' => state = State::InCompute,
                        b'<' | b'>' => state = State::InCompare,
                        c => {
                            kind = single_char_kind(c);
                            state = State::Done;
                        }
                    }
                    line = self.cursor.line();
                    self.save(c);
                }
                State::InComment => match self.cursor.next_char() {
                    None => {
                        line = self.end_line();
                        kind = TokenKind::EndOfFile;
                        state = State::Done;
                    }
                    Some(b'}') => state = State::Start,
                    Some(_) => {}
                },
                State::InNum => match self.cursor.next_char() {
                    Some(c) if c.is_ascii_digit() => self.save(c),
                    other => {
                        self.unget(other);
                        kind = TokenKind::Number;
                        state = State::Done;
                    }
                },
                State::InId => match self.cursor.next_char() {
                    Some(c) if c.is_ascii_alphabetic() => self.save(c),
                    other => {
                        self.unget(other);
                        kind = reserved::lookup(&self.token_string);
                        state = State::Done;
                    }
                },
                State::InAssign => {
                    match self.cursor.next_char() {
                        Some(b'=') => {
                            self.save(b'=');
                            kind = TokenKind::Assign;
                        }
                        other => {
                            self.unget(other);
                            kind = TokenKind::Error;
                        }
                    }
                    state = State::Done;
                }
                State::InCompute => {
                    match self.cursor.next_char() {
                        Some(b'=') => {
                            self.save(b'=');
                            kind = TokenKind::PlusAssign;
                        }
                        other => {
                            self.unget(other);
                            kind = TokenKind::Plus;
                        }
                    }
                    state = State::Done;
                }
                State::InCompare => {
                    kind = self.resolve_compare();
                    state = State::Done;
                }
                State::Done => unreachable!("scanner loop exits on Done"),
            }
            log::trace!("scanner state {:?} at line {}", state, self.cursor.line());
        }

        let token = Token::new(kind, self.token_string.as_str(), line);
        self.cursor.listing_mut().trace_token(&token);
        token
    }

    /// Decide between the one- and two-character comparison operators. The
    /// first character is already saved; the second is only consumed when it
    /// belongs to the operator.
    fn resolve_compare(&mut self) -> TokenKind {
        let less = self.token_string.starts_with('<');
        let next = self.cursor.peek_char();
        let kind = match (less, next) {
            (true, Some(b'=')) => TokenKind::LessOrEqual,
            (true, Some(b'>')) => TokenKind::NotEqual,
            (true, _) => TokenKind::LessThan,
            (false, Some(b'=')) => TokenKind::GreaterOrEqual,
            (false, _) => TokenKind::GreaterThan,
        };
        if let (TokenKind::LessOrEqual | TokenKind::NotEqual | TokenKind::GreaterOrEqual, Some(c)) =
            (kind, next)
        {
            self.cursor.next_char();
            self.save(c);
        }
        kind
    }

    /// Line reported on the end-of-file token; an empty source still ends on
    /// line 1.
    fn end_line(&self) -> usize {
        self.cursor.line().max(1)
    }

    fn save(&mut self, c: u8) {
        if self.token_string.len() < MAX_TOKEN_LEN {
            self.token_string.push(char::from(c));
        }
    }

    fn unget(&mut self, c: Option<u8>) {
        if c.is_some() {
            self.cursor.push_back();
        }
    }
}

fn single_char_kind(c: u8) -> TokenKind {
    match c {
        b'=' => TokenKind::Equal,
        b'-' => TokenKind::Minus,
        b'*' => TokenKind::Times,
        b'/' => TokenKind::Over,
        b'%' => TokenKind::Remain,
        b'^' => TokenKind::Power,
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        b';' => TokenKind::Semicolon,
        b'|' => TokenKind::Union,
        b'&' => TokenKind::Concat,
        b'#' => TokenKind::Closure,
        b'?' => TokenKind::Optional,
        _ => TokenKind::Error,
    }
}
