//! Source code pane rendering with keyword highlighting
//!
//! Displays the TINY program with line numbers and highlights the line of the
//! token currently selected in the token pane. Keywords are recognized with
//! the scanner's own reserved-word table.

use crate::scanner::reserved;
use crate::scanner::TokenKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Per-line highlighting. Comments are only recognized when they open and
/// close on the same line.
fn highlight_source_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        let start = i;

        if c == b'{' {
            let end = line[i..].find('}').map_or(bytes.len(), |off| i + off + 1);
            spans.push(Span::styled(&line[start..end], Style::default().fg(DEFAULT_THEME.comment)));
            i = end;
            continue;
        }

        if c.is_ascii_alphabetic() {
            while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word = &line[start..i];
            let style = if reserved::lookup(word) == TokenKind::Id {
                Style::default().fg(DEFAULT_THEME.fg)
            } else {
                Style::default()
                    .fg(DEFAULT_THEME.keyword)
                    .add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(word, style));
            continue;
        }

        if c.is_ascii_digit() {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            spans.push(Span::styled(&line[start..i], Style::default().fg(DEFAULT_THEME.number)));
            continue;
        }

        // Advance by a whole character so slicing stays on char boundaries.
        let width = line[i..].chars().next().map_or(1, char::len_utf8);
        i += width;
        let style = match c {
            b':' | b'=' | b'<' | b'>' | b'+' | b'-' | b'*' | b'/' | b'%' | b'^' => {
                Style::default().fg(DEFAULT_THEME.operator)
            }
            b'|' | b'&' | b'#' | b'?' => Style::default().fg(DEFAULT_THEME.secondary),
            b'(' | b')' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(&line[start..i], style));
    }

    Line::from(spans)
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    current_line: usize,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Source Code ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Keep the current line at a fixed visual row, centered at first
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    if current_line > 0 && current_line <= total_lines {
        scroll_state.offset = (current_line - 1).saturating_sub(target_row);
    }
    if total_lines > visible_height {
        scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
    } else {
        scroll_state.offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;

            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content = highlight_source_line(line);
            if is_current {
                for span in &mut content.spans {
                    span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
