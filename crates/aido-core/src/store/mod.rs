//! Persistence collaborators for preprompts, clipboard history and shortcuts.
//!
//! Loading never fails from the caller's point of view: the `load_*`
//! helpers log the error and fall back to built-in defaults or empty state.

mod clipboard;
mod json;
mod memory;

use std::io;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::preprompt::{PrepromptRegistry, RegistrySnapshot};
use crate::shortcuts::{ShortcutSet, TextShortcut};

pub use clipboard::ClipboardFile;
pub use json::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid data: {0}")]
    Format(String),
}

/// One copied text. `timestamp` is milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardItem {
    pub text: String,
    pub timestamp: u64,
}

pub trait PrepromptStore: Send {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<RegistrySnapshot>, StoreError>;
    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), StoreError>;
}

pub trait ClipboardStore: Send {
    fn load(&self) -> Result<Vec<ClipboardItem>, StoreError>;
    fn save(&self, items: &[ClipboardItem]) -> Result<(), StoreError>;
}

pub trait ShortcutStore: Send {
    fn load(&self) -> Result<Vec<TextShortcut>, StoreError>;
    fn save(&self, items: &[TextShortcut]) -> Result<(), StoreError>;
}

/// Registry from the store, or the built-in defaults.
pub fn load_registry(store: &dyn PrepromptStore) -> PrepromptRegistry {
    match store.load() {
        Ok(Some(snapshot)) => PrepromptRegistry::from_snapshot(snapshot),
        Ok(None) => PrepromptRegistry::new(),
        Err(e) => {
            warn!(error = %e, "failed to load preprompts, using defaults");
            PrepromptRegistry::new()
        }
    }
}

pub fn load_clipboard(store: &dyn ClipboardStore) -> Vec<ClipboardItem> {
    store.load().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load clipboard history, starting empty");
        Vec::new()
    })
}

pub fn load_shortcuts(store: &dyn ShortcutStore) -> ShortcutSet {
    match store.load() {
        Ok(items) => ShortcutSet::from_items(items),
        Err(e) => {
            warn!(error = %e, "failed to load text shortcuts, starting empty");
            ShortcutSet::new()
        }
    }
}
