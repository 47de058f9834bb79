//! Analysis entry points
//!
//! An analysis run scans (and, given a grammar, parses) one source unit and
//! writes its diagnostics to a listing. The grammar itself is supplied by the
//! caller through [`Parse`]; [`TokenCollector`] is the scan-only stand-in.

use crate::errors::FrontendError;
use crate::listing::{Listing, TraceFlags};
use crate::scanner::{Scanner, Token};
use crate::tree::{render_tree, SyntaxTree};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

/// A grammar that pulls tokens from the scanner and builds the tree.
///
/// Node factories take the line to record and the listing that receives
/// allocation failures; pass [`Scanner::line`] and [`Scanner::listing_mut`].
pub trait Parse {
    fn parse<R: BufRead>(&mut self, scanner: &mut Scanner<R>, tree: &mut SyntaxTree);
}

/// Scan-only front end: drains the scanner and keeps every token, leaving the
/// tree empty.
#[derive(Debug, Clone, Default)]
pub struct TokenCollector {
    tokens: Vec<Token>,
}

impl TokenCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens of the last run, ending with the end-of-file token.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl Parse for TokenCollector {
    fn parse<R: BufRead>(&mut self, scanner: &mut Scanner<R>, _tree: &mut SyntaxTree) {
        self.tokens = scanner.tokenize();
    }
}

/// Analyze an already opened source, writing diagnostics to `listing`.
///
/// When the listing asks for it and the parser produced any statements, the
/// tree dump follows a `Syntax tree:` header.
pub fn analyze<R, P>(reader: R, listing: Listing, parser: &mut P) -> Result<SyntaxTree, FrontendError>
where
    R: BufRead,
    P: Parse,
{
    let mut scanner = Scanner::with_listing(reader, listing);
    let mut tree = SyntaxTree::new();
    parser.parse(&mut scanner, &mut tree);
    log::debug!("parsed {} node(s) over {} line(s)", tree.len(), scanner.line());

    let mut listing = scanner.into_listing();
    if listing.flags().trace_parse && !tree.roots().is_empty() {
        write!(listing, "\nSyntax tree:\n{}", render_tree(&tree));
    }
    listing.finish()?;
    Ok(tree)
}

/// Open a source file for scanning.
pub fn open_source(path: &Path) -> Result<BufReader<File>, FrontendError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| FrontendError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })
}

/// Analyze the file at `source_path`, writing the listing to `listing_path`.
///
/// A missing source is reported as [`FrontendError::SourceNotFound`] before
/// the listing is created.
pub fn analyze_code<P: Parse>(
    source_path: &Path,
    listing_path: &Path,
    flags: TraceFlags,
    parser: &mut P,
) -> Result<SyntaxTree, FrontendError> {
    let source = open_source(source_path)?;
    let listing = File::create(listing_path).map_err(|source| FrontendError::Listing {
        path: listing_path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "analyzing {} into {}",
        source_path.display(),
        listing_path.display()
    );

    analyze(
        source,
        Listing::new(BufWriter::new(listing), flags),
        parser,
    )
}
