//! # Introduction
//!
//! tiny-front is the lexical front end of a TINY compiler: it scans source
//! text into typed tokens and defines the syntax tree a parser builds from
//! them. The grammar itself is supplied by the caller through
//! [`analyze::Parse`].
//!
//! ## Pipeline
//!
//! ```text
//! Source → SourceCursor → Scanner → Tokens → (Parse) → SyntaxTree → Listing / TUI
//! ```
//!
//! 1. [`scanner`]: the line-buffered [`scanner::SourceCursor`], the scanning
//!    automaton [`scanner::Scanner`] and the reserved-word table.
//! 2. [`tree`]: the [`tree::SyntaxTree`] arena, node kinds, traversal
//!    primitives and the label/dump renderer.
//! 3. [`listing`]: the diagnostic sink for source echo, token traces and tree
//!    dumps, controlled by [`listing::TraceFlags`].
//! 4. [`analyze`]: entry points that run one source unit end to end.
//! 5. [`ui`]: ratatui-based viewer for source, tokens and tree; not part of the
//!    stable library API.
//!
//! ## Example
//!
//! ```
//! use tiny_front::scanner::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::from_source("x := 3 + 4;");
//! assert_eq!(scanner.get_token().kind, TokenKind::Id);
//! assert_eq!(scanner.get_token().kind, TokenKind::Assign);
//! ```

pub mod analyze;
pub mod errors;
pub mod listing;
pub mod scanner;
pub mod tree;
pub mod ui;
