//! TUI pane rendering modules
//!
//! - [`source`]: source code with keyword highlighting and the selected token's line
//! - [`tokens`]: the scanned token stream
//! - [`tree`]: the syntax tree, walked node by node
//! - [`status`]: status bar with keybindings and error count
//!
//! Each pane module exports a `render_*` function that draws from borrowed
//! state; scroll positions are owned by [`App`](crate::ui::App).

pub mod source;
pub mod status;
pub mod tokens;
pub mod tree;

pub use source::{render_source_pane, SourceScrollState};
pub use status::render_status_bar;
pub use tokens::render_token_pane;
pub use tree::{render_tree_pane, tree_rows, TreeRow};
