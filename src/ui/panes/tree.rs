//! Syntax tree pane rendering
//!
//! The pane builds its own row list by walking the tree with the child and
//! sibling primitives and asking for one label at a time.

use crate::tree::{label, NodeId, SyntaxTree, MAX_CHILDREN};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Shown when the front end built no tree, as in a scan-only run.
pub const EMPTY_TREE_MESSAGE: &str = "(no syntax tree: scan-only run)";

/// One visible row of the tree pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub depth: usize,
    pub label: String,
    pub line: usize,
    pub is_statement: bool,
}

/// Flatten the forest into display rows, children before siblings.
pub fn tree_rows(tree: &SyntaxTree) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    walk(tree, tree.roots().first().copied(), 0, &mut rows);
    rows
}

fn walk(tree: &SyntaxTree, first: Option<NodeId>, depth: usize, rows: &mut Vec<TreeRow>) {
    let mut current = first;
    while let Some(id) = current {
        if let (Some(node), Some(text)) = (tree.get(id), label(tree, id)) {
            rows.push(TreeRow {
                depth,
                label: text,
                line: node.line(),
                is_statement: node.is_statement(),
            });
        }
        for slot in 0..MAX_CHILDREN {
            walk(tree, tree.child(id, slot), depth + 1, rows);
        }
        current = tree.sibling(id);
    }
}

/// Render the tree pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    rows: &[TreeRow],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Syntax Tree ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if rows.is_empty() {
        let paragraph = Paragraph::new(EMPTY_TREE_MESSAGE)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if rows.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(rows.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| {
            let label_style = if row.is_statement {
                Style::default()
                    .fg(DEFAULT_THEME.keyword)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(Line::from(vec![
                Span::raw("  ".repeat(row.depth)),
                Span::styled(row.label.clone(), label_style),
                Span::styled(format!("  ({})", row.line), Style::default().fg(DEFAULT_THEME.comment)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
