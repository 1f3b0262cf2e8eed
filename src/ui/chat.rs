//! Chat panel: conversation title bar, message history, typing indicator,
//! and the input area.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::models::MessageRole;

use super::input;
use super::{truncate_to_width, wrap_text, COLOR_ACCENT, COLOR_ASSISTANT, COLOR_BORDER, COLOR_DIM, COLOR_USER};

/// Render the chat panel (title bar, messages, input, hint line).
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_messages(frame, app, chunks[0]);
    input::render(frame, app, chunks[1]);
    render_hints(frame, app, chunks[2]);
}

fn render_messages(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = truncate_to_width(
        &app.controller.current_conversation().title,
        area.width.saturating_sub(4) as usize,
    );
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height == 0 {
        return;
    }

    let wrap_width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    for message in &app.controller.current_conversation().messages {
        let (label, color) = match message.role {
            MessageRole::User => ("You", COLOR_USER),
            MessageRole::Assistant => ("Assistant", COLOR_ASSISTANT),
            MessageRole::System => ("System", COLOR_DIM),
        };
        lines.push(Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for wrapped in wrap_text(&message.content, wrap_width) {
            lines.push(Line::from(wrapped));
        }
        lines.push(Line::default());
    }

    // Typing indicator is view-only state: no message exists for it.
    if app.controller.is_pending() {
        let dots = ".".repeat(((app.tick_count / 4) % 4) as usize);
        lines.push(Line::from(vec![
            Span::styled(
                "Assistant".to_string(),
                Style::default()
                    .fg(COLOR_ASSISTANT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" is typing{dots}"),
                Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    // Scroll: offset counts lines up from the bottom; 0 sticks to bottom.
    let total = lines.len();
    let height = inner.height as usize;
    app.max_scroll = total.saturating_sub(height);
    if app.scroll_offset > app.max_scroll {
        app.scroll_offset = app.max_scroll;
    }
    let top = app.max_scroll - app.scroll_offset;

    let paragraph = Paragraph::new(lines).scroll((top as u16, 0));
    frame.render_widget(paragraph, inner);
}

fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.controller.is_pending() {
        "waiting for reply · Ctrl+N new · Ctrl+B sidebar · Ctrl+C quit"
    } else {
        "↵ send · Ctrl+N new · Ctrl+B sidebar · Tab focus · Ctrl+C quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(COLOR_DIM),
        ))),
        area,
    );
}
