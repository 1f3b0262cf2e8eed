//! Sidebar: the conversation list.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus};

use super::{truncate_to_width, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Render the sidebar as a fixed panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    render_inner(frame, app, area);
}

/// Render the sidebar as an overlay drawer (narrow layout).
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(Clear, area);
    render_inner(frame, app, area);
}

fn render_inner(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Sidebar;
    let border_style = if focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_BORDER)
    };

    let block = Block::default()
        .title(" Conversations ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height < 2 {
        return;
    }

    let title_width = inner.width.saturating_sub(2) as usize;
    let active_id = app.controller.active_conversation_id().to_string();

    let mut lines: Vec<Line> = Vec::new();
    for (idx, conversation) in app.controller.conversations().iter().enumerate() {
        let is_active = conversation.id == active_id;
        let is_selected = focused && idx == app.sidebar_index;

        let marker = if is_active { "▸ " } else { "  " };
        let title = truncate_to_width(&conversation.title, title_width);

        let mut style = Style::default();
        if is_active {
            style = style.fg(COLOR_ACCENT).add_modifier(Modifier::BOLD);
        } else {
            style = style.fg(COLOR_DIM);
        }
        if is_selected {
            style = style.add_modifier(Modifier::REVERSED);
        }

        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), style),
            Span::styled(title, style),
        ]));
    }

    // Keep the selection visible when the list outgrows the panel.
    let list_height = inner.height.saturating_sub(1) as usize;
    let skip = if focused && app.sidebar_index >= list_height {
        app.sidebar_index + 1 - list_height
    } else {
        0
    };
    let visible: Vec<Line> = lines.into_iter().skip(skip).take(list_height).collect();
    let list_area = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    frame.render_widget(Paragraph::new(visible), list_area);

    let hint_area = Rect {
        y: inner.y + inner.height - 1,
        height: 1,
        ..inner
    };
    let hints = Line::from(Span::styled(
        "n new · d delete · ↵ open",
        Style::default().fg(COLOR_DIM),
    ));
    frame.render_widget(Paragraph::new(hints), hint_area);
}
