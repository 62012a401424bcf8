// File: ./src/tui/state.rs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Tally,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogEntry {
    pub speaker: Speaker,
    pub text: String,
}

pub struct ChatState {
    pub dialog: Vec<DialogEntry>,
    pub input_buffer: String,
    /// Cursor position in characters, not bytes.
    pub cursor_position: usize,
    /// Lines scrolled back from the bottom of the dialog.
    pub scroll_back: u16,
    pub finished: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            dialog: vec![],
            input_buffer: String::new(),
            cursor_position: 0,
            scroll_back: 0,
            finished: false,
        }
    }

    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.dialog.push(DialogEntry { speaker, text });
        // New messages snap the view back to the bottom.
        self.scroll_back = 0;
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }
    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input_buffer.chars().count();
    }

    fn byte_index(&self) -> usize {
        self.input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len())
    }

    pub fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        self.input_buffer.insert(index, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let from_left_to_current_index = current_index - 1;
            let before_char_to_delete = self.input_buffer.chars().take(from_left_to_current_index);
            let after_char_to_delete = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before_char_to_delete.chain(after_char_to_delete).collect();
            self.move_cursor_left();
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }

    pub fn scroll_up(&mut self, step: u16) {
        self.scroll_back = self.scroll_back.saturating_add(step);
    }
    pub fn scroll_down(&mut self, step: u16) {
        self.scroll_back = self.scroll_back.saturating_sub(step);
    }
}
