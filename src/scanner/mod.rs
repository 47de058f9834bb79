//! Lexical front end
//!
//! This module turns TINY source text into a stream of tokens:
//! - [`cursor`]: line-buffered character supply with pushback and peek
//! - [`lexer`]: the scanning automaton ([`Scanner`])
//! - [`reserved`]: keyword table
//! - [`token`]: token kinds and the `(kind, lexeme, line)` triple
//!
//! # Lexical rules
//!
//! - Numbers are runs of decimal digits; identifiers are runs of letters.
//! - Comments are `{ ... }`, do not nest, and may run to the end of input.
//! - `:=`, `+=`, `<=`, `<>` and `>=` are the only two-character tokens.
//! - Lexemes longer than [`token::MAX_TOKEN_LEN`] are cut in storage only.
//!
//! Only single-byte characters are supported.

pub mod cursor;
pub mod lexer;
pub mod reserved;
pub mod token;

pub use cursor::SourceCursor;
pub use lexer::Scanner;
pub use token::{Token, TokenKind, MAX_TOKEN_LEN};
