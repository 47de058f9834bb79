//! Token kinds and the [`Token`] triple produced by the scanner.

use std::fmt;

/// Maximum number of lexeme characters retained in a [`Token`].
///
/// Longer lexemes are still consumed from the input in full; only the stored
/// text is cut.
pub const MAX_TOKEN_LEN: usize = 40;

/// Every kind of token the scanner can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Book-keeping
    EndOfFile,
    Error,

    // Reserved words
    If,
    Else,
    Repeat,
    Until,
    Read,
    Write,
    For,
    To,
    Downto,
    Do,
    EndDo,
    Reg,
    And,
    Or,
    Not,

    // Multi-character
    Id,
    Number,

    // Assignment and comparison
    Assign,         // :=
    Equal,          // =
    LessThan,       // <
    LessOrEqual,    // <=
    NotEqual,       // <>
    GreaterThan,    // >
    GreaterOrEqual, // >=

    // Arithmetic
    Plus,       // +
    PlusAssign, // +=
    Minus,      // -
    Times,      // *
    Over,       // /
    Remain,     // %
    Power,      // ^

    // Regular-expression operators
    Union,    // |
    Concat,   // &
    Closure,  // #
    Optional, // ?

    // Punctuation
    LParen,    // (
    RParen,    // )
    Semicolon, // ;
}

impl TokenKind {
    /// Canonical source text of the kind.
    ///
    /// Kinds without a fixed spelling (identifiers, numbers, errors and end of
    /// file) return a short tag instead.
    pub fn symbol(self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "EOF",
            TokenKind::Error => "ERROR",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Repeat => "repeat",
            TokenKind::Until => "until",
            TokenKind::Read => "read",
            TokenKind::Write => "write",
            TokenKind::For => "for",
            TokenKind::To => "to",
            TokenKind::Downto => "downto",
            TokenKind::Do => "do",
            TokenKind::EndDo => "enddo",
            TokenKind::Reg => "reg",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Id => "ID",
            TokenKind::Number => "NUM",
            TokenKind::Assign => ":=",
            TokenKind::Equal => "=",
            TokenKind::LessThan => "<",
            TokenKind::LessOrEqual => "<=",
            TokenKind::NotEqual => "<>",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterOrEqual => ">=",
            TokenKind::Plus => "+",
            TokenKind::PlusAssign => "+=",
            TokenKind::Minus => "-",
            TokenKind::Times => "*",
            TokenKind::Over => "/",
            TokenKind::Remain => "%",
            TokenKind::Power => "^",
            TokenKind::Union => "|",
            TokenKind::Concat => "&",
            TokenKind::Closure => "#",
            TokenKind::Optional => "?",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Semicolon => ";",
        }
    }

    /// Keywords that the listing reports as `reserved word: ...`.
    ///
    /// The logical keywords are reported by their own spelling instead, like
    /// operators.
    pub fn is_statement_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::Repeat
                | TokenKind::Until
                | TokenKind::Read
                | TokenKind::Write
                | TokenKind::For
                | TokenKind::To
                | TokenKind::Downto
                | TokenKind::Do
                | TokenKind::EndDo
                | TokenKind::Reg
        )
    }
}

/// A `(kind, lexeme, line)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Matched source text, at most [`MAX_TOKEN_LEN`] characters.
    pub lexeme: String,
    /// 1-based line on which the token started.
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

/// Listing description of a token, e.g. `ID, name= x` or `reserved word: if`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            kind if kind.is_statement_keyword() => {
                write!(f, "reserved word: {}", self.lexeme)
            }
            TokenKind::Number => write!(f, "NUM, val= {}", self.lexeme),
            TokenKind::Id => write!(f, "ID, name= {}", self.lexeme),
            TokenKind::Error => write!(f, "ERROR: {}", self.lexeme),
            kind => f.write_str(kind.symbol()),
        }
    }
}
