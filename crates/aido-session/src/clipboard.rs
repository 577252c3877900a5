use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use aido_core::settings::settings;
use aido_core::store::{load_clipboard, ClipboardItem, ClipboardStore};
use tracing::{debug, warn};

use crate::text_field::SystemClipboard;

pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Most-recent-first clipboard ring with no duplicate texts.
///
/// Every mutation is written through to the store.
pub struct ClipboardHistory {
    items: VecDeque<ClipboardItem>,
    store: Box<dyn ClipboardStore>,
    capacity: usize,
    debounce_ms: u64,
    max_clip_len: usize,
    last_text: Option<String>,
    last_time: u64,
}

impl ClipboardHistory {
    /// Load persisted history. Unreadable data starts an empty history.
    pub fn new(store: Box<dyn ClipboardStore>) -> Self {
        let h = &settings().history;
        Self::with_limits(store, h.max_clipboard_items, h.clipboard_debounce_ms, h.max_clip_length)
    }

    pub fn with_limits(
        store: Box<dyn ClipboardStore>,
        capacity: usize,
        debounce_ms: u64,
        max_clip_len: usize,
    ) -> Self {
        let capacity = capacity.max(1);
        let mut items: VecDeque<ClipboardItem> = VecDeque::with_capacity(capacity);
        // Persisted data may predate the current cap or carry duplicates.
        for item in load_clipboard(store.as_ref()) {
            if items.len() == capacity {
                break;
            }
            if !item.text.trim().is_empty() && !items.iter().any(|i| i.text == item.text) {
                items.push_back(item);
            }
        }
        debug!(count = items.len(), "clipboard history loaded");
        Self {
            items,
            store,
            capacity,
            debounce_ms,
            max_clip_len,
            last_text: None,
            last_time: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ClipboardItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> impl Iterator<Item = &ClipboardItem> {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<ClipboardItem> {
        self.items.iter().cloned().collect()
    }

    fn persist(&self) {
        let snapshot: Vec<ClipboardItem> = self.items.iter().cloned().collect();
        if let Err(e) = self.store.save(&snapshot) {
            warn!(error = %e, "failed to save clipboard history");
        }
    }

    /// Put `text` at the front. Returns true if the history changed.
    pub fn add(&mut self, text: &str) -> bool {
        self.add_at(text, now_ms())
    }

    pub fn add_at(&mut self, text: &str, now: u64) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        if self.items.front().is_some_and(|i| i.text == text) {
            return false;
        }
        self.items.retain(|i| i.text != text);
        self.items.push_front(ClipboardItem {
            text: text.to_string(),
            timestamp: now,
        });
        self.last_text = Some(text.to_string());
        while self.items.len() > self.capacity {
            self.items.pop_back();
        }
        debug!(count = self.items.len(), "clipboard item added");
        self.persist();
        true
    }

    /// Handle a platform change notification by re-reading the clipboard.
    pub fn on_system_clipboard_changed(&mut self, clipboard: &dyn SystemClipboard) -> bool {
        self.on_system_clipboard_changed_at(clipboard, now_ms())
    }

    pub fn on_system_clipboard_changed_at(
        &mut self,
        clipboard: &dyn SystemClipboard,
        now: u64,
    ) -> bool {
        let Some(text) = clipboard.read() else {
            return false;
        };
        if text.trim().is_empty() || text.chars().count() > self.max_clip_len {
            return false;
        }
        if self.last_text.as_deref() == Some(text.as_str())
            && now.saturating_sub(self.last_time) < self.debounce_ms
        {
            debug!(elapsed = now.saturating_sub(self.last_time), "clipboard change debounced");
            return false;
        }
        self.last_text = Some(text.clone());
        self.last_time = now;
        self.add_at(&text, now)
    }

    /// Read the clipboard and add it, ignoring the debounce window.
    pub fn refresh_from_system(&mut self, clipboard: &dyn SystemClipboard) -> bool {
        self.refresh_from_system_at(clipboard, now_ms())
    }

    pub fn refresh_from_system_at(&mut self, clipboard: &dyn SystemClipboard, now: u64) -> bool {
        match clipboard.read() {
            Some(text) => self.add_at(&text, now),
            None => false,
        }
    }

    pub fn delete(&mut self, index: usize) -> bool {
        if self.items.remove(index).is_none() {
            return false;
        }
        self.persist();
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.last_text = None;
        self.last_time = 0;
        self.persist();
    }
}
