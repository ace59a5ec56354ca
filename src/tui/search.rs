use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const PLACEHOLDER: &str = "Search employees by name or department...";

/// Search field for the TUI.
///
/// The text lives with the owner; this only tracks focus and the cursor.
/// Every edit is reported straight back as the new raw value.
pub struct SearchInput {
    /// Byte offset into the owner's value, always on a char boundary
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            cursor_pos: 0,
            focused: true,
        }
    }
}

impl SearchInput {
    /// Apply `key` to `value`. Returns the new text when the key edited it.
    pub fn handle_key(&mut self, value: &str, key: KeyEvent) -> Option<String> {
        self.clamp_cursor(value);
        let cursor = self.cursor_pos;

        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor_pos = 0;
                (!value.is_empty()).then(String::new)
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Char(c) => {
                let mut next = value.to_string();
                next.insert(cursor, c);
                self.cursor_pos = cursor + c.len_utf8();
                Some(next)
            }
            KeyCode::Backspace => {
                let prev = prev_boundary(value, cursor)?;
                let mut next = value.to_string();
                next.remove(prev);
                self.cursor_pos = prev;
                Some(next)
            }
            KeyCode::Delete => {
                if cursor >= value.len() {
                    return None;
                }
                let mut next = value.to_string();
                next.remove(cursor);
                Some(next)
            }
            KeyCode::Left => {
                if let Some(prev) = prev_boundary(value, cursor) {
                    self.cursor_pos = prev;
                }
                None
            }
            KeyCode::Right => {
                self.cursor_pos = next_boundary(value, cursor);
                None
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                None
            }
            KeyCode::End => {
                self.cursor_pos = value.len();
                None
            }
            _ => None,
        }
    }

    /// Keep the cursor valid when the owner replaced the value
    pub fn clamp_cursor(&mut self, value: &str) {
        let mut pos = self.cursor_pos.min(value.len());
        while !value.is_char_boundary(pos) {
            pos -= 1;
        }
        self.cursor_pos = pos;
    }
}

fn prev_boundary(value: &str, cursor: usize) -> Option<usize> {
    value[..cursor].char_indices().last().map(|(i, _)| i)
}

fn next_boundary(value: &str, cursor: usize) -> usize {
    value[cursor..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| cursor + i)
        .unwrap_or(value.len())
}
