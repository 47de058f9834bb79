//! Error types for the front end
//!
//! Lexical problems are not errors at this level: the scanner reports them as
//! [`TokenKind::Error`](crate::scanner::TokenKind::Error) tokens. What remains are
//! failures of the surrounding run ([`FrontendError`]) and misuse of the tree
//! construction API ([`TreeError`]).

use crate::tree::NodeId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that end an analysis run.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// The source file could not be opened.
    #[error("File {} not found", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The listing destination could not be created.
    #[error("cannot create listing {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the listing failed part way through.
    #[error("listing write failed: {0}")]
    Io(#[from] io::Error),
}

/// Rejected tree construction requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node {0} does not exist in this tree")]
    UnknownNode(NodeId),

    #[error("child slot {0} is out of range")]
    SlotOutOfRange(usize),

    #[error("node {parent} does not use child slot {slot}")]
    SlotNotUsed { parent: NodeId, slot: usize },

    #[error("node {0} is already attached")]
    AlreadyAttached(NodeId),

    #[error("attaching node {child} under node {parent} would create a cycle")]
    WouldCycle { parent: NodeId, child: NodeId },
}
