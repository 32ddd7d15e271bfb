//! Single-line query editor backing the search box.

use unicode_width::UnicodeWidthStr;

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    /// Byte offset of the cursor within `text`.
    pub cursor: usize,
    history: Vec<String>,
    history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
        }
    }

    /// Display column of the cursor, for terminal cursor positioning.
    pub fn cursor_col(&self) -> u16 {
        self.text[..self.cursor].width() as u16
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    /// Record a submit. The query stays in the box so it can be edited and
    /// re-run; consecutive duplicates collapse to one history entry.
    pub fn submit(&mut self) -> String {
        let text = self.text.clone();
        self.history_index = None;
        if !text.trim().is_empty() && self.history.last() != Some(&text) {
            self.history.push(text.clone());
        }
        text
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_delete_around_cursor() {
        let mut input = InputState::new();
        for c in "0801".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "081");
        input.delete_forward();
        assert_eq!(input.text, "08");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn delete_word_back_stops_at_space() {
        let mut input = InputState::new();
        for c in "0801 2345".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "0801 ");
        input.delete_word_back();
        assert_eq!(input.text, "");
    }

    #[test]
    fn submit_keeps_text_and_dedups_history() {
        let mut input = InputState::new();
        for c in "08012345678".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.submit(), "08012345678");
        assert_eq!(input.text, "08012345678");
        input.submit();
        input.clear();
        input.history_up();
        assert_eq!(input.text, "08012345678");
        input.history_up();
        assert_eq!(input.text, "08012345678");
    }

    #[test]
    fn blank_submits_are_not_recorded() {
        let mut input = InputState::new();
        input.insert_char(' ');
        assert_eq!(input.submit(), " ");
        input.history_up();
        assert_eq!(input.text, " ");
    }

    #[test]
    fn history_walks_both_directions() {
        let mut input = InputState::new();
        for query in ["1111", "2222"] {
            input.clear();
            for c in query.chars() {
                input.insert_char(c);
            }
            input.submit();
        }
        input.clear();
        input.history_up();
        assert_eq!(input.text, "2222");
        input.history_up();
        assert_eq!(input.text, "1111");
        input.history_down();
        assert_eq!(input.text, "2222");
        input.history_down();
        assert_eq!(input.text, "");
    }

    #[test]
    fn cursor_col_uses_display_width() {
        let mut input = InputState::new();
        input.insert_char('金');
        input.insert_char('1');
        assert_eq!(input.cursor_col(), 3);
        input.move_left();
        assert_eq!(input.cursor_col(), 2);
    }
}
