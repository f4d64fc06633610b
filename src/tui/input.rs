use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Single-line search input with a byte-offset cursor
pub struct SearchInput {
    pub query: String,
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focused: true,
        }
    }
}

impl SearchInput {
    /// Apply an editing key; returns true when the text changed
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                false
            }
            KeyCode::End => {
                self.cursor_pos = self.query.len();
                false
            }
            _ => false,
        }
    }

    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.query.remove(prev);
        self.cursor_pos = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor_pos >= self.query.len() {
            return false;
        }
        self.query.remove(self.cursor_pos);
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.query.clear();
        self.cursor_pos = 0;
        true
    }

    fn move_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos = self.prev_boundary();
        }
    }

    fn move_right(&mut self) {
        if self.cursor_pos < self.query.len() {
            self.cursor_pos = self.next_boundary();
        }
    }

    // Byte offset of the char before the cursor
    fn prev_boundary(&self) -> usize {
        self.query[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    // Byte offset of the char after the one under the cursor
    fn next_boundary(&self) -> usize {
        self.query[self.cursor_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor_pos + i)
            .unwrap_or(self.query.len())
    }

    /// Display column of the cursor inside the input text
    pub fn cursor_column(&self) -> u16 {
        self.query[..self.cursor_pos].width() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_insert_and_backspace_multibyte() {
        let mut input = SearchInput::default();
        for c in "cólera".chars() {
            input.insert(c);
        }
        assert_eq!(input.query, "cólera");
        assert_eq!(input.cursor_pos, "cólera".len());

        assert!(input.backspace());
        assert_eq!(input.query, "cóler");

        for _ in 0..5 {
            input.backspace();
        }
        assert_eq!(input.query, "");
        assert_eq!(input.cursor_pos, 0);
        assert!(!input.backspace());
    }

    #[test]
    fn test_cursor_moves_over_char_boundaries() {
        let mut input = SearchInput::default();
        for c in "có".chars() {
            input.insert(c);
        }
        assert_eq!(input.cursor_pos, 3);

        input.handle_key(&key(KeyCode::Left));
        assert_eq!(input.cursor_pos, 1);
        input.handle_key(&key(KeyCode::Left));
        assert_eq!(input.cursor_pos, 0);
        input.handle_key(&key(KeyCode::Right));
        assert_eq!(input.cursor_pos, 1);
        input.handle_key(&key(KeyCode::Right));
        assert_eq!(input.cursor_pos, 3);
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut input = SearchInput::default();
        for c in "a0".chars() {
            input.insert(c);
        }
        input.handle_key(&key(KeyCode::Left));
        input.insert('x');
        assert_eq!(input.query, "ax0");
        assert_eq!(input.cursor_pos, 2);
    }

    #[test]
    fn test_cursor_column_uses_display_width() {
        let mut input = SearchInput::default();
        for c in "có".chars() {
            input.insert(c);
        }
        // Two display columns even though the text is three bytes
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut input = SearchInput::default();
        let changed = input.handle_key(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert!(!changed);
        assert_eq!(input.query, "");
    }

    #[test]
    fn test_clear_resets_text_and_cursor() {
        let mut input = SearchInput::default();
        for c in "gripe".chars() {
            input.insert(c);
        }
        assert!(input.clear());
        assert_eq!(input.query, "");
        assert_eq!(input.cursor_pos, 0);
        assert!(!input.clear());
    }
}
