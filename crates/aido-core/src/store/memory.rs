use std::sync::{Arc, Mutex, MutexGuard};

use super::{ClipboardItem, ClipboardStore, PrepromptStore, ShortcutStore, StoreError};
use crate::preprompt::RegistrySnapshot;
use crate::shortcuts::TextShortcut;

#[derive(Debug, Default)]
struct Inner {
    preprompts: Option<RegistrySnapshot>,
    clipboard: Vec<ClipboardItem>,
    shortcuts: Vec<TextShortcut>,
    saves: usize,
}

/// In-process store. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Total number of `save` calls across all three kinds.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    pub fn clipboard_items(&self) -> Vec<ClipboardItem> {
        self.lock().clipboard.clone()
    }

    pub fn preprompt_snapshot(&self) -> Option<RegistrySnapshot> {
        self.lock().preprompts.clone()
    }
}

impl PrepromptStore for MemoryStore {
    fn load(&self) -> Result<Option<RegistrySnapshot>, StoreError> {
        Ok(self.lock().preprompts.clone())
    }

    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.preprompts = Some(snapshot.clone());
        inner.saves += 1;
        Ok(())
    }
}

impl ClipboardStore for MemoryStore {
    fn load(&self) -> Result<Vec<ClipboardItem>, StoreError> {
        Ok(self.lock().clipboard.clone())
    }

    fn save(&self, items: &[ClipboardItem]) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.clipboard = items.to_vec();
        inner.saves += 1;
        Ok(())
    }
}

impl ShortcutStore for MemoryStore {
    fn load(&self) -> Result<Vec<TextShortcut>, StoreError> {
        Ok(self.lock().shortcuts.clone())
    }

    fn save(&self, items: &[TextShortcut]) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.shortcuts = items.to_vec();
        inner.saves += 1;
        Ok(())
    }
}
