//! UI rendering for the parley chat interface.
//!
//! - Sidebar: conversation list with active highlight and keybind hints
//! - Chat panel: role-prefixed wrapped messages and the typing indicator
//! - Input area: message box, disabled styling while a reply is pending
//!
//! Below [`NARROW_WIDTH_THRESHOLD`](crate::app::NARROW_WIDTH_THRESHOLD)
//! columns the sidebar renders as an overlay instead of a fixed panel,
//! mirroring a mobile drawer.

mod chat;
mod input;
mod sidebar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::app::App;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the active conversation
pub const COLOR_ACCENT: Color = Color::White;

/// User message prefix color
pub const COLOR_USER: Color = Color::LightCyan;

/// Assistant message prefix color
pub const COLOR_ASSISTANT: Color = Color::LightGreen;

/// Dim text for hints and secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Fixed sidebar width in wide layout
const SIDEBAR_WIDTH: u16 = 28;

/// Render the full interface.
pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();
    app.terminal_width = size.width;
    app.terminal_height = size.height;

    if app.is_narrow() {
        chat::render(frame, app, size);
        if app.sidebar_visible {
            let overlay = overlay_area(size);
            sidebar::render_overlay(frame, app, overlay);
        }
    } else if app.sidebar_visible {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(size);
        sidebar::render(frame, app, chunks[0]);
        chat::render(frame, app, chunks[1]);
    } else {
        chat::render(frame, app, size);
    }
}

/// Left-anchored drawer area for the narrow-layout sidebar overlay.
fn overlay_area(size: Rect) -> Rect {
    let width = (size.width * 3 / 4).max(20).min(size.width);
    Rect {
        x: size.x,
        y: size.y,
        width,
        height: size.height,
    }
}

/// Truncate a string to a display width, appending an ellipsis when
/// anything was cut. Wide characters are accounted for.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        truncated.push(c);
        used += w;
    }
    truncated.push('…');
    truncated
}

/// Greedy word wrap to a display width. Existing newlines are preserved;
/// words wider than the line are hard-split on character boundaries. Every
/// input produces at least one output line.
pub(crate) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![String::new()];
    }
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;
        for word in raw_line.split(' ') {
            let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();
            let space = usize::from(!current.is_empty());
            if current_width + space + word_width <= max_width {
                if space == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += space + word_width;
            } else if word_width <= max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                // Hard-split an overlong word
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if current_width + w > max_width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += w;
                }
            }
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps");
    }

    #[test]
    fn test_wrap_preserves_newlines() {
        let lines = wrap_text("a\nb", 10);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_empty_text_yields_one_line() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }
}
