use std::collections::VecDeque;

use aido_core::settings::settings;
use tracing::debug;

use crate::text_field::{live_state, TextField};

/// One snapshot of the field: full text plus cursor (in chars).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextState {
    pub text: String,
    pub cursor: usize,
}

impl TextState {
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        Self {
            text: text.into(),
            cursor,
        }
    }
}

/// Bounded undo and redo stacks. The back of each deque is the top.
#[derive(Debug, Clone)]
pub struct UndoRedoManager {
    undo: VecDeque<TextState>,
    redo: VecDeque<TextState>,
    limit: usize,
    live_window: usize,
    lookbehind: usize,
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new()
    }
}

fn push_bounded(stack: &mut VecDeque<TextState>, state: TextState, limit: usize) {
    stack.push_back(state);
    while stack.len() > limit {
        stack.pop_front();
    }
}

impl UndoRedoManager {
    pub fn new() -> Self {
        let h = &settings().history;
        Self {
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            limit: h.max_undo_states,
            live_window: h.live_text_window,
            lookbehind: h.delete_word_lookbehind,
        }
    }

    /// Same as `new` with a different stack cap.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            ..Self::new()
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Undo stack, oldest first.
    pub fn undo_states(&self) -> impl Iterator<Item = &TextState> {
        self.undo.iter()
    }

    /// Redo stack, oldest first.
    pub fn redo_states(&self) -> impl Iterator<Item = &TextState> {
        self.redo.iter()
    }

    /// Record an edit boundary. A state equal to the current top is ignored.
    pub fn save_state(&mut self, text: &str, cursor: usize) {
        let state = TextState::new(text, cursor);
        if self.undo.back() == Some(&state) {
            return;
        }
        push_bounded(&mut self.undo, state, self.limit);
        self.redo.clear();
    }

    /// Restore the previous state into `field`. False if there is nothing to undo.
    pub fn undo(&mut self, field: &mut dyn TextField) -> bool {
        let Some(target) = self.undo.pop_back() else {
            return false;
        };
        if let Some((text, cursor)) = live_state(&*field, self.live_window) {
            push_bounded(&mut self.redo, TextState { text, cursor }, self.limit);
        }
        debug!(cursor = target.cursor, "undo");
        apply(field, &target);
        true
    }

    /// Re-apply the most recently undone state. False if there is nothing to redo.
    pub fn redo(&mut self, field: &mut dyn TextField) -> bool {
        let Some(target) = self.redo.pop_back() else {
            return false;
        };
        if let Some((text, cursor)) = live_state(&*field, self.live_window) {
            push_bounded(&mut self.undo, TextState { text, cursor }, self.limit);
        }
        debug!(cursor = target.cursor, "redo");
        apply(field, &target);
        true
    }

    /// Delete the word before the cursor, plus one trailing space if present.
    ///
    /// False when no text before the cursor is available.
    pub fn delete_last_word(&self, field: &mut dyn TextField) -> bool {
        let Some(before) = field.text_before_cursor(self.lookbehind) else {
            return false;
        };
        if before.is_empty() {
            return false;
        }
        let word_len = before
            .split_whitespace()
            .next_back()
            .map_or(0, |w| w.chars().count());
        let count = word_len + usize::from(before.ends_with(' '));
        field.delete_surrounding(count, 0);
        true
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

fn apply(field: &mut dyn TextField, state: &TextState) {
    field.replace_all(&state.text);
    field.set_selection(state.cursor);
}
