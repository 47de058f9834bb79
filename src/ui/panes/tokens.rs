//! Token pane rendering

use crate::scanner::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Error => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
        TokenKind::EndOfFile => Style::default().fg(DEFAULT_THEME.success),
        TokenKind::Id => Style::default().fg(DEFAULT_THEME.identifier),
        TokenKind::Number => Style::default().fg(DEFAULT_THEME.number),
        kind if kind.is_statement_keyword() => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenKind::And | TokenKind::Or | TokenKind::Not => Style::default().fg(DEFAULT_THEME.keyword),
        _ => Style::default().fg(DEFAULT_THEME.operator),
    }
}

/// First visible row so that `selected` stays inside a window of `height`.
pub fn scroll_to_show(offset: usize, selected: usize, height: usize) -> usize {
    if selected < offset {
        selected
    } else if selected >= offset + height {
        selected + 1 - height
    } else {
        offset
    }
}

/// Render the token list with the selected token highlighted
pub fn render_token_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    selected: usize,
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
        .title(format!(" Tokens ({}) ", tokens.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = scroll_to_show(*scroll_offset, selected, visible_height);

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, token)| {
            let mut line = Line::from(vec![
                Span::styled(format!("{:4} ", token.line), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(format!("{:<16}", format!("{:?}", token.kind)), kind_style(token.kind)),
                Span::styled(token.lexeme.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]);
            if idx == selected {
                for span in &mut line.spans {
                    span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
                }
            }
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
