//! Syntax tree model
//!
//! The parser builds the tree; this module only defines it:
//! - [`node`]: node kinds, the [`SyntaxTree`] arena and its traversal primitives
//! - [`render`]: node labels and the indented text dump
//!
//! Nodes live in one arena per compilation unit and are addressed by
//! [`NodeId`]. Dropping the tree releases every node at once.

pub mod node;
pub mod render;

pub use node::{ExpKind, ExpType, Node, NodeId, NodeKind, StmtKind, SyntaxTree, MAX_CHILDREN};
pub use render::{label, render_tree};
