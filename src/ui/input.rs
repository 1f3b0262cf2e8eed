//! Input area rendering.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::app::{App, Focus};

use super::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Render the message input box.
///
/// While a reply is pending the box renders dimmed with a waiting title;
/// submission is blocked by the controller's pending gate either way.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let pending = app.controller.is_pending();
    let focused = app.focus == Focus::Input;

    let border_style = if pending {
        Style::default().fg(COLOR_DIM)
    } else if focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_BORDER)
    };
    let title = if pending { " Message (waiting) " } else { " Message " };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Reserve one column so the cursor block is visible at the end of text.
    let visible_width = inner.width.saturating_sub(1) as usize;
    let scroll = app.input_box.update_scroll(visible_width);

    let show_cursor = focused && !pending;
    let line = visible_line(
        app.input_box.content(),
        app.input_box.cursor(),
        scroll,
        visible_width,
        show_cursor,
        pending,
    );
    frame.render_widget(Paragraph::new(line), inner);
}

/// Build the visible slice of the input with the cursor drawn as a reversed
/// cell. Columns before `scroll` are skipped.
fn visible_line(
    content: &str,
    cursor: usize,
    scroll: usize,
    visible_width: usize,
    show_cursor: bool,
    pending: bool,
) -> Line<'static> {
    let text_style = if pending {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default()
    };
    let cursor_style = text_style.add_modifier(Modifier::REVERSED);

    let mut spans: Vec<Span> = Vec::new();
    let mut column = 0;
    let mut cursor_drawn = false;

    for (idx, c) in content.chars().enumerate() {
        let width = c.width().unwrap_or(0);
        if column < scroll {
            column += width;
            continue;
        }
        if column - scroll + width > visible_width + 1 {
            break;
        }
        let style = if show_cursor && idx == cursor {
            cursor_drawn = true;
            cursor_style
        } else {
            text_style
        };
        spans.push(Span::styled(c.to_string(), style));
        column += width;
    }

    if show_cursor && !cursor_drawn {
        spans.push(Span::styled(" ".to_string(), cursor_style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_line_draws_cursor_at_end() {
        let line = visible_line("ab", 2, 0, 10, true, false);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[2].content, " ");
    }

    #[test]
    fn test_visible_line_skips_scrolled_columns() {
        let line = visible_line("abcdef", 6, 2, 3, false, false);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with('c'));
    }

    #[test]
    fn test_no_cursor_while_pending() {
        let line = visible_line("ab", 2, 0, 10, false, true);
        assert_eq!(line.spans.len(), 2);
    }
}
