//! Host collaborators: the focused text field and the system clipboard.
//!
//! Positions and counts are in characters. A `None` read means the field is
//! gone or refused the request.

pub trait TextField {
    fn text_before_cursor(&self, n: usize) -> Option<String>;
    fn text_after_cursor(&self, n: usize) -> Option<String>;
    /// Replace the whole field contents.
    fn replace_all(&mut self, text: &str);
    /// Collapse the selection to `pos`.
    fn set_selection(&mut self, pos: usize);
    fn delete_surrounding(&mut self, before: usize, after: usize);
}

pub trait SystemClipboard {
    fn read(&self) -> Option<String>;
    fn write(&self, text: &str);
}

/// Full field text and cursor, reading at most `window` chars each side.
///
/// Missing halves read as empty; `None` only when both reads fail.
pub(crate) fn live_state(field: &dyn TextField, window: usize) -> Option<(String, usize)> {
    let before = field.text_before_cursor(window);
    let after = field.text_after_cursor(window);
    if before.is_none() && after.is_none() {
        return None;
    }
    let before = before.unwrap_or_default();
    let cursor = before.chars().count();
    Some((before + &after.unwrap_or_default(), cursor))
}
