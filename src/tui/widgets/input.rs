//! Text input widget
//!
//! A single-line text field. The cursor counts characters, not bytes, so
//! notes typed in Chinese edit correctly.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content and move the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Spans for the value, with a block cursor when focused
    pub fn spans(&self) -> Vec<Span<'static>> {
        let value_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        if !self.focused {
            let shown = if self.content.is_empty() {
                self.placeholder.clone()
            } else {
                self.content.clone()
            };
            return vec![Span::styled(shown, value_style)];
        }

        let before: String = self.content.chars().take(self.cursor).collect();
        let mut rest = self.content.chars().skip(self.cursor);
        let cursor_char = rest.next().unwrap_or(' ');
        let after: String = rest.collect();

        vec![
            Span::styled(before, value_style),
            Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::styled(after, value_style),
        ]
    }

    /// A labelled line for form layouts
    pub fn line(&self, label: &str) -> Line<'static> {
        let label_style = Style::default().fg(Color::Cyan);
        let mut spans = vec![Span::styled(format!("{}: ", label), label_style)];
        spans.extend(self.spans());
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace_multibyte() {
        let mut input = TextInput::new().content("午饭");
        input.insert('和');
        assert_eq!(input.value(), "午饭和");
        assert_eq!(input.cursor, 3);

        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "午和");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::new().content("地铁卡");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "铁卡");
        input.move_end();
        input.delete();
        assert_eq!(input.value(), "铁卡");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new();
        input.move_left();
        input.backspace();
        assert_eq!(input.cursor, 0);
        input.insert('5');
        input.move_right();
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_spans_show_placeholder_when_unfocused() {
        let input = TextInput::new().placeholder("可选");
        let spans = input.spans();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "可选");
    }
}
