//! Line-buffered character supply for the scanner.

use crate::listing::Listing;
use std::io::BufRead;

/// One-character-at-a-time view of a source stream.
///
/// Input is pulled a line at a time. Characters are single bytes; the end of
/// input is reported as `None`, and keeps being reported on every later call.
pub struct SourceCursor<R> {
    reader: R,
    line_buf: Vec<u8>,
    position: usize,
    line: usize,
    at_eof: bool,
    listing: Listing,
}

impl<R: BufRead> SourceCursor<R> {
    pub fn new(reader: R) -> Self {
        Self::with_listing(reader, Listing::disabled())
    }

    /// Cursor that echoes every line it reads to `listing` (when the listing's
    /// flags ask for it).
    pub fn with_listing(reader: R, listing: Listing) -> Self {
        Self {
            reader,
            line_buf: Vec::new(),
            position: 0,
            line: 0,
            at_eof: false,
            listing,
        }
    }

    /// Next character, reading a new line once the current one is used up.
    pub fn next_char(&mut self) -> Option<u8> {
        if self.at_eof {
            return None;
        }
        if self.position >= self.line_buf.len() && !self.fill_line() {
            return None;
        }
        let c = self.line_buf[self.position];
        self.position += 1;
        Some(c)
    }

    /// Step back one character within the current line.
    ///
    /// Does nothing once the end of input has been reported, or at the start of
    /// the line buffer.
    pub fn push_back(&mut self) {
        if !self.at_eof && self.position > 0 {
            self.position -= 1;
        }
    }

    /// Look at the next character without consuming it.
    pub fn peek_char(&mut self) -> Option<u8> {
        let c = self.next_char();
        if c.is_some() {
            self.push_back();
        }
        c
    }

    /// Start over on a new, independent source.
    pub fn reset(&mut self, reader: R) {
        self.reader = reader;
        self.line_buf.clear();
        self.position = 0;
        self.line = 0;
        self.at_eof = false;
    }

    /// Number of lines read so far; the line the last character came from.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_at_eof(&self) -> bool {
        self.at_eof
    }

    pub fn listing_mut(&mut self) -> &mut Listing {
        &mut self.listing
    }

    pub fn into_listing(self) -> Listing {
        self.listing
    }

    fn fill_line(&mut self) -> bool {
        self.line_buf.clear();
        self.position = 0;
        match self.reader.read_until(b'\n', &mut self.line_buf) {
            Ok(0) => {
                self.at_eof = true;
                false
            }
            Ok(_) => {
                self.line += 1;
                self.listing.echo_line(self.line, &self.line_buf);
                true
            }
            Err(err) => {
                log::error!("source read failed after line {}: {}", self.line, err);
                self.at_eof = true;
                false
            }
        }
    }
}
