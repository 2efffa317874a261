use super::{ErrorSlot, clear_error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Untouched,
    TouchedValid,
    TouchedInvalid,
}

/// Single editable input with a char-indexed cursor and its error slot.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    cursor: usize,
    touched: bool,
    pub masked: bool,
    pub multiline: bool,
    pub error: ErrorSlot,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn touch(&mut self) {
        self.touched = true;
    }

    pub fn state(&self) -> FieldState {
        match (self.touched, self.error.is_shown()) {
            (false, _) => FieldState::Untouched,
            (true, false) => FieldState::TouchedValid,
            (true, true) => FieldState::TouchedInvalid,
        }
    }

    /// Text as it should be displayed; masked fields show bullets.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    pub fn insert(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Inserts pasted text; single-line fields fold newlines into spaces.
    pub fn insert_str(&mut self, text: &str) {
        let text: String = if self.multiline {
            text.replace("\r\n", "\n")
        } else {
            text.lines().collect::<Vec<_>>().join(" ")
        };
        let at = self.byte_offset(self.cursor);
        self.value.insert_str(at, &text);
        self.cursor += text.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Clears the value, the cursor, the touched flag and the error.
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.touched = false;
        clear_error(&mut self.error);
    }
}
