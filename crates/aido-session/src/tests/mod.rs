mod clipboard;
mod session;
mod undo;

use std::cell::RefCell;

use crate::{SystemClipboard, TextField};

/// Text field double. Cursor and counts are in chars.
#[derive(Debug, Clone, Default)]
pub(super) struct MemoryField {
    pub text: String,
    pub cursor: usize,
    /// When false every read fails, like a field that went away.
    pub readable: bool,
}

impl MemoryField {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
            readable: true,
        }
    }

    pub fn with_cursor(text: &str, cursor: usize) -> Self {
        Self {
            cursor,
            ..Self::new(text)
        }
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_at(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

impl TextField for MemoryField {
    fn text_before_cursor(&self, n: usize) -> Option<String> {
        if !self.readable {
            return None;
        }
        let start = self.cursor.saturating_sub(n);
        Some(self.text.chars().skip(start).take(self.cursor - start).collect())
    }

    fn text_after_cursor(&self, n: usize) -> Option<String> {
        if !self.readable {
            return None;
        }
        Some(self.text.chars().skip(self.cursor).take(n).collect())
    }

    fn replace_all(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.len();
    }

    fn set_selection(&mut self, pos: usize) {
        self.cursor = pos.min(self.len());
    }

    fn delete_surrounding(&mut self, before: usize, after: usize) {
        let start = self.cursor.saturating_sub(before);
        let end = (self.cursor + after).min(self.len());
        let (a, b) = (self.byte_at(start), self.byte_at(end));
        self.text.replace_range(a..b, "");
        self.cursor = start;
    }
}

#[derive(Debug, Default)]
pub(super) struct MemoryClipboard {
    pub content: RefCell<Option<String>>,
}

impl MemoryClipboard {
    pub fn holding(text: &str) -> Self {
        Self {
            content: RefCell::new(Some(text.to_string())),
        }
    }

    pub fn set(&self, text: &str) {
        *self.content.borrow_mut() = Some(text.to_string());
    }
}

impl SystemClipboard for MemoryClipboard {
    fn read(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    fn write(&self, text: &str) {
        self.set(text);
    }
}
