use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Pure UI rendering logic - no side effects
pub struct UI;

impl UI {
    pub const fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, app: &App) {
        let layout = Self::create_layout(frame.area());

        self.render_document(frame, app, layout.document);
        self.render_history(frame, app, layout.history);
        self.render_messages(frame, app, layout.messages);
        self.render_status_bar(frame, app, layout.status);
        self.render_input_line(frame, app, layout.input);
    }

    // ═══════════════════════════════════════════════════════════════
    // Layout composition
    // ═══════════════════════════════════════════════════════════════

    fn create_layout(area: Rect) -> LayoutAreas {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Document + history
                Constraint::Length(8), // Messages
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Input line
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[0]);

        LayoutAreas {
            document: top[0],
            history: top[1],
            messages: rows[1],
            status: rows[2],
            input: rows[3],
        }
    }

    fn titled_block(title: &str) -> Block<'_> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
    }

    // ═══════════════════════════════════════════════════════════════
    // Document pane
    // ═══════════════════════════════════════════════════════════════

    fn render_document(&self, frame: &mut Frame, app: &App, area: Rect) {
        let session = app.session();
        let title = format!(
            " Document ({} chars, {}) ",
            session.buffer().len(),
            session.strategy().name()
        );

        let paragraph = Paragraph::new(session.content())
            .block(Self::titled_block(&title))
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }

    // ═══════════════════════════════════════════════════════════════
    // History pane: redo entries above the undo stack, newest first
    // ═══════════════════════════════════════════════════════════════

    fn render_history(&self, frame: &mut Frame, app: &App, area: Rect) {
        let history = app.session().history();

        let redo = history.redo_stack().map(|op| {
            ListItem::new(format!("  {}", op.label())).style(Style::default().fg(Color::DarkGray))
        });
        let undo = history.undo_stack().rev().enumerate().map(|(i, op)| {
            let marker = if i == 0 { "▶ " } else { "  " };
            ListItem::new(format!("{}{}", marker, op.label()))
        });
        let items: Vec<ListItem> = redo.chain(undo).collect();

        let title = match history.max_depth() {
            Some(max) => format!(" History {}/{} ", history.undo_len(), max),
            None => format!(" History {} ", history.undo_len()),
        };

        frame.render_widget(List::new(items).block(Self::titled_block(&title)), area);
    }

    // ═══════════════════════════════════════════════════════════════
    // Message log, pinned to the newest lines
    // ═══════════════════════════════════════════════════════════════

    fn render_messages(&self, frame: &mut Frame, app: &App, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let messages = app.messages();
        let lines: Vec<Line> = messages[messages.len().saturating_sub(visible)..]
            .iter()
            .map(|s| Line::from(s.as_str()))
            .collect();

        let paragraph = Paragraph::new(lines).block(Self::titled_block(" Messages "));

        frame.render_widget(paragraph, area);
    }

    // ═══════════════════════════════════════════════════════════════
    // Status bar rendering - shows mode and status message
    // ═══════════════════════════════════════════════════════════════

    fn render_status_bar(&self, frame: &mut Frame, app: &App, area: Rect) {
        let mode = app.mode();

        let mode_indicator = Span::styled(
            format!(" {} ", mode.name()),
            Style::default()
                .fg(Color::Black)
                .bg(mode.color())
                .add_modifier(Modifier::BOLD),
        );

        let status_text = Span::styled(
            format!(" {} ", app.status()),
            Style::default().fg(Color::White),
        );

        let help_text = Span::styled(
            format!(" {} ", mode.help_text()),
            Style::default().fg(Color::DarkGray),
        );

        let line = Line::from(vec![mode_indicator, status_text, help_text]);

        let paragraph = Paragraph::new(line).style(Style::default().bg(Color::Black));

        frame.render_widget(paragraph, area);
    }

    // ═══════════════════════════════════════════════════════════════
    // Input line rendering
    // ═══════════════════════════════════════════════════════════════

    fn render_input_line(&self, frame: &mut Frame, app: &App, area: Rect) {
        let mode = app.mode();
        let prefix = mode.prompt();
        let content = if mode.shows_cursor() {
            app.prompt().content()
        } else {
            ""
        };

        let line = Line::from(vec![
            Span::styled(
                prefix,
                Style::default()
                    .fg(mode.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(content),
        ]);

        let paragraph =
            Paragraph::new(line).style(Style::default().bg(Color::Black).fg(Color::White));

        frame.render_widget(paragraph, area);

        if mode.shows_cursor() {
            let offset = prefix.len() + app.prompt().cursor_column();
            let cursor_x = area.x.saturating_add(offset as u16);

            if cursor_x < area.x + area.width {
                frame.set_cursor_position((cursor_x, area.y));
            }
        }
    }
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}

struct LayoutAreas {
    document: Rect,
    history: Rect,
    messages: Rect,
    status: Rect,
    input: Rect,
}
