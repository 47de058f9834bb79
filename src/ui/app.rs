//! Main TUI application state and logic

use super::panes::{self, SourceScrollState, TreeRow};
use crate::scanner::{Token, TokenKind};
use crate::tree::SyntaxTree;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tokens,
    Tree,
    Source,
}

impl FocusedPane {
    /// Move focus to the next pane (tokens -> tree -> source)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Source,
            FocusedPane::Source => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    /// The source code that was scanned
    pub source_code: String,

    /// Scanned tokens, ending with end of file
    pub tokens: Vec<Token>,

    /// Flattened syntax tree
    pub tree_rows: Vec<TreeRow>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index into `tokens` of the selected token
    pub selected_token: usize,

    /// Per-pane scroll offsets
    pub source_scroll: SourceScrollState,
    pub token_scroll: usize,
    pub tree_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(source_code: String, tokens: Vec<Token>, tree: &SyntaxTree) -> Self {
        let errors = tokens.iter().filter(|t| t.kind == TokenKind::Error).count();
        let status_message = if errors == 0 {
            String::from("Scanned successfully")
        } else {
            format!("Scanned with {} lexical error(s)", errors)
        };
        App {
            source_code,
            tokens,
            tree_rows: panes::tree_rows(tree),
            focused_pane: FocusedPane::Tokens,
            selected_token: 0,
            source_scroll: SourceScrollState::default(),
            token_scroll: 0,
            tree_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }
        Ok(())
    }

    /// Line of the selected token, 0 when there is none
    pub fn current_line(&self) -> usize {
        self.tokens
            .get(self.selected_token)
            .map_or(0, |t| t.line)
    }

    pub fn error_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Error)
            .count()
    }

    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        // Source on the left, tokens over tree on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let current_line = self.current_line();
        panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            current_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_token_pane(
            frame,
            right_rows[0],
            &self.tokens,
            self.selected_token,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.token_scroll,
        );

        panes::render_tree_pane(
            frame,
            right_rows[1],
            &self.tree_rows,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.selected_token,
            self.tokens.len(),
            self.error_count(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Tokens => self.select_token(self.selected_token.saturating_sub(1)),
                FocusedPane::Tree => self.tree_scroll = self.tree_scroll.saturating_sub(1),
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Tokens => self.select_token(self.selected_token.saturating_add(1)),
                FocusedPane::Tree => self.tree_scroll = self.tree_scroll.saturating_add(1),
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
            },
            KeyCode::Home => self.select_token(0),
            KeyCode::End => self.select_token(usize::MAX),
            KeyCode::Char('e') => self.select_next_error(),
            _ => {}
        }
    }

    fn select_token(&mut self, index: usize) {
        let last = self.tokens.len().saturating_sub(1);
        self.selected_token = index.min(last);
        if let Some(token) = self.tokens.get(self.selected_token) {
            self.status_message = format!("line {}: {}", token.line, token);
        }
    }

    /// Jump to the next error token after the selection, wrapping around
    fn select_next_error(&mut self) {
        let len = self.tokens.len();
        let next = (1..=len)
            .map(|step| (self.selected_token + step) % len.max(1))
            .find(|&i| self.tokens[i].kind == TokenKind::Error);
        match next {
            Some(i) => self.select_token(i),
            None => self.status_message = String::from("No lexical errors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::Scanner;
    use crossterm::event::KeyModifiers;

    fn app(source: &str) -> App {
        let tokens = Scanner::from_source(source).tokenize();
        App::new(source.to_string(), tokens, &SyntaxTree::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = app("read x");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_token, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.selected_token, 2);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_token, 2);
    }

    #[test]
    fn test_current_line_follows_selection() {
        let mut app = app("read x;\nwrite x");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.current_line(), 2);
        assert_eq!(app.status_message, "line 2: reserved word: write");
    }

    #[test]
    fn test_next_error_wraps() {
        let mut app = app("a $ b : c");
        assert_eq!(app.error_count(), 2);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.selected_token, 1);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.selected_token, 3);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.selected_token, 1);
    }

    #[test]
    fn test_focus_cycles_and_quit() {
        let mut app = app("x");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tree);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tokens);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
