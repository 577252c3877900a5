//! Text shortcuts: a typed suffix expands into a longer replacement.

use serde::{Deserialize, Serialize};

use crate::preprompt::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShortcut {
    pub id: u64,
    pub trigger: String,
    pub replacement: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutSet {
    items: Vec<TextShortcut>,
}

impl ShortcutSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted items. Entries with a blank trigger are dropped.
    pub fn from_items(items: Vec<TextShortcut>) -> Self {
        Self {
            items: items
                .into_iter()
                .filter(|s| !s.trigger.is_empty())
                .collect(),
        }
    }

    pub fn items(&self) -> &[TextShortcut] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn next_id(&self) -> u64 {
        self.items.iter().map(|s| s.id).max().map_or(1, |m| m + 1)
    }

    /// Append a shortcut and return its id.
    pub fn add(&mut self, trigger: &str, replacement: &str) -> Result<u64, ValidationError> {
        let trigger = trigger.trim();
        if trigger.is_empty() {
            return Err(ValidationError::EmptyTrigger);
        }
        let id = self.next_id();
        self.items.push(TextShortcut {
            id,
            trigger: trigger.to_string(),
            replacement: replacement.to_string(),
        });
        Ok(id)
    }

    /// Replace the shortcut with the same id. Returns false if none exists.
    pub fn update(&mut self, shortcut: TextShortcut) -> Result<bool, ValidationError> {
        if shortcut.trigger.trim().is_empty() {
            return Err(ValidationError::EmptyTrigger);
        }
        match self.items.iter_mut().find(|s| s.id == shortcut.id) {
            Some(slot) => {
                *slot = shortcut;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|s| s.id != id);
        self.items.len() != before
    }

    /// Expand the first shortcut whose trigger ends `text`.
    pub fn expand(&self, text: &str) -> Option<String> {
        let s = self.items.iter().find(|s| text.ends_with(s.trigger.as_str()))?;
        let head = &text[..text.len() - s.trigger.len()];
        Some(format!("{head}{}", s.replacement))
    }
}
