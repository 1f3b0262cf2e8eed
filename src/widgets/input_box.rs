//! Single-line text input state with cursor handling and horizontal
//! scrolling. Rendering lives in `ui::input`; this type only owns editing
//! state so it stays trivially unit-testable.

use unicode_width::UnicodeWidthChar;

/// A text input with cursor movement and horizontal scroll support.
///
/// The cursor is a `char` index, never a byte index, so multibyte input is
/// safe to edit at any position.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    /// The text content of the input box
    content: String,
    /// Current cursor position (character index, 0..=char_count)
    cursor: usize,
    /// Scroll offset in display columns
    scroll_offset: usize,
}

impl InputBox {
    /// Create a new empty input box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.content.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position (paste).
    pub fn insert_str(&mut self, s: &str) {
        let byte_idx = self.byte_index(self.cursor);
        self.content.insert_str(byte_idx, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor (Backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_idx = self.byte_index(self.cursor);
        self.content.remove(byte_idx);
    }

    /// Delete the character at the cursor (Delete key).
    pub fn delete_char(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let byte_idx = self.byte_index(self.cursor);
        self.content.remove(byte_idx);
    }

    /// Move the cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the beginning of the text.
    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the text.
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// The current text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the input holds no text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Clear all content and reset the cursor.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Ensure the cursor is inside the visible window and return the scroll
    /// offset in display columns. Called during render with the widget's
    /// inner width.
    pub fn update_scroll(&mut self, visible_width: usize) -> usize {
        if visible_width == 0 {
            return self.scroll_offset;
        }
        let cursor_col = self.cursor_column();
        if cursor_col < self.scroll_offset {
            self.scroll_offset = cursor_col;
        } else if cursor_col >= self.scroll_offset + visible_width {
            self.scroll_offset = cursor_col + 1 - visible_width;
        }
        self.scroll_offset
    }

    /// Display column of the cursor, accounting for wide characters.
    pub fn cursor_column(&self) -> usize {
        self.content
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}
