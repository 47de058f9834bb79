//! Diagnostic listing sink
//!
//! The listing is where source echo, token traces, syntax-tree dumps and
//! allocation diagnostics end up. It is a plain [`Write`] destination (a file,
//! stdout, or an in-memory [`Capture`]) paired with the [`TraceFlags`] that
//! decide which of those are produced.
//!
//! Writing to the listing never interrupts scanning. The first I/O failure is
//! kept and handed back by [`Listing::finish`].

use crate::scanner::token::Token;
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

/// Which diagnostics are written to the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceFlags {
    /// Echo every source line, numbered, as it is read.
    pub echo_source: bool,
    /// Report every token as the scanner recognizes it.
    pub trace_scan: bool,
    /// Dump the syntax tree after parsing.
    pub trace_parse: bool,
}

impl TraceFlags {
    /// Everything off.
    pub const NONE: TraceFlags = TraceFlags {
        echo_source: false,
        trace_scan: false,
        trace_parse: false,
    };
}

impl Default for TraceFlags {
    fn default() -> Self {
        TraceFlags {
            echo_source: false,
            trace_scan: false,
            trace_parse: true,
        }
    }
}

/// Destination for diagnostics produced while analyzing one source unit.
pub struct Listing {
    out: Box<dyn Write>,
    flags: TraceFlags,
    error: Option<io::Error>,
}

impl Listing {
    pub fn new(out: impl Write + 'static, flags: TraceFlags) -> Self {
        Self {
            out: Box::new(out),
            flags,
            error: None,
        }
    }

    /// A listing that discards everything.
    pub fn disabled() -> Self {
        Self::new(io::sink(), TraceFlags::NONE)
    }

    pub fn flags(&self) -> TraceFlags {
        self.flags
    }

    /// Echo a freshly read source line. `text` is written verbatim, including
    /// its line terminator if it has one.
    pub fn echo_line(&mut self, line: usize, text: &[u8]) {
        if !self.flags.echo_source {
            return;
        }
        let result = write!(self.out, "{:4}: ", line).and_then(|()| self.out.write_all(text));
        self.record(result);
    }

    /// Report a token recognized by the scanner.
    pub fn trace_token(&mut self, token: &Token) {
        if self.flags.trace_scan {
            let result = writeln!(self.out, "\t{}: {}", token.line, token);
            self.record(result);
        }
    }

    /// Report that a tree node could not be allocated. Written regardless of
    /// the trace flags.
    pub fn out_of_memory(&mut self, line: usize) {
        let result = writeln!(self.out, "Out of memory error at line {}", line);
        self.record(result);
    }

    /// Unconditionally write formatted text.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        let result = self.out.write_fmt(args);
        self.record(result);
    }

    /// Flush the destination and return the first write failure, if any.
    pub fn finish(mut self) -> io::Result<()> {
        let flushed = self.out.flush();
        match self.error.take() {
            Some(err) => Err(err),
            None => flushed,
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            if self.error.is_none() {
                log::warn!("listing write failed: {}", err);
                self.error = Some(err);
            }
        }
    }
}

impl fmt::Debug for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listing")
            .field("flags", &self.flags)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// In-memory listing destination whose contents stay readable after the
/// listing that writes to it has been moved away.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
