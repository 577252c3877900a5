use aido_core::store::{ClipboardItem, ClipboardStore, MemoryStore, StoreError};

use super::MemoryClipboard;
use crate::ClipboardHistory;

fn history() -> (ClipboardHistory, MemoryStore) {
    let store = MemoryStore::new();
    (ClipboardHistory::new(Box::new(store.clone())), store)
}

fn texts(h: &ClipboardHistory) -> Vec<&str> {
    h.items().map(|i| i.text.as_str()).collect()
}

#[test]
fn re_adding_moves_to_front() {
    let (mut h, _) = history();
    h.add_at("hello", 1);
    h.add_at("world", 2);
    h.add_at("hello", 3);
    assert_eq!(texts(&h), vec!["hello", "world"]);
    assert_eq!(h.get(0).unwrap().timestamp, 3);
}

#[test]
fn blank_and_top_duplicates_are_ignored() {
    let (mut h, store) = history();
    assert!(!h.add_at("   ", 1));
    assert!(h.add_at("x", 1));
    assert!(!h.add_at("x", 2));
    assert_eq!(h.get(0).unwrap().timestamp, 1);
    assert_eq!(store.save_count(), 1);
}

#[test]
fn capacity_evicts_oldest() {
    let (mut h, _) = history();
    for i in 0..101 {
        h.add_at(&format!("clip {i}"), i);
    }
    assert_eq!(h.len(), 100);
    assert_eq!(h.get(0).unwrap().text, "clip 100");
    assert_eq!(h.get(99).unwrap().text, "clip 1");
}

#[test]
fn every_mutation_is_persisted() {
    let (mut h, store) = history();
    h.add_at("a", 1);
    h.add_at("b", 2);
    assert_eq!(store.clipboard_items().len(), 2);
    assert!(h.delete(0));
    assert_eq!(store.clipboard_items()[0].text, "a");
    assert!(!h.delete(5));
    h.clear();
    assert!(store.clipboard_items().is_empty());
    assert_eq!(store.save_count(), 4);
}

#[test]
fn system_change_debounces_identical_text() {
    let (mut h, _) = history();
    let clip = MemoryClipboard::holding("copied");
    assert!(h.on_system_clipboard_changed_at(&clip, 1_000));
    assert!(!h.on_system_clipboard_changed_at(&clip, 1_200));
    assert_eq!(h.len(), 1);
    assert_eq!(h.get(0).unwrap().timestamp, 1_000);
}

#[test]
fn system_change_accepts_different_text_immediately() {
    let (mut h, _) = history();
    let clip = MemoryClipboard::holding("one");
    h.on_system_clipboard_changed_at(&clip, 1_000);
    clip.set("two");
    assert!(h.on_system_clipboard_changed_at(&clip, 1_010));
    assert_eq!(texts(&h), vec!["two", "one"]);
}

#[test]
fn same_text_after_window_moves_back_to_front() {
    let (mut h, _) = history();
    let clip = MemoryClipboard::holding("one");
    h.on_system_clipboard_changed_at(&clip, 1_000);
    h.add_at("two", 1_100);
    clip.set("one");
    // Last seen text is now "two", so "one" is not debounced.
    assert!(h.on_system_clipboard_changed_at(&clip, 1_200));
    assert_eq!(texts(&h), vec!["one", "two"]);
}

#[test]
fn long_clips_from_system_are_skipped() {
    let (mut h, _) = history();
    let clip = MemoryClipboard::holding(&"x".repeat(501));
    assert!(!h.on_system_clipboard_changed_at(&clip, 1));
    // Explicit refresh has no length limit.
    assert!(h.refresh_from_system_at(&clip, 2));
    assert_eq!(h.len(), 1);
}

#[test]
fn refresh_ignores_debounce() {
    let (mut h, _) = history();
    let clip = MemoryClipboard::holding("a");
    h.on_system_clipboard_changed_at(&clip, 1_000);
    assert!(h.delete(0));
    assert!(!h.on_system_clipboard_changed_at(&clip, 1_100));
    assert!(h.refresh_from_system_at(&clip, 1_101));
    assert_eq!(texts(&h), vec!["a"]);
}

#[test]
fn clear_resets_debounce() {
    let (mut h, _) = history();
    let clip = MemoryClipboard::holding("same");
    h.on_system_clipboard_changed_at(&clip, 1_000);
    h.clear();
    assert!(h.on_system_clipboard_changed_at(&clip, 1_100));
    assert_eq!(h.len(), 1);
}

#[test]
fn empty_system_clipboard() {
    let (mut h, _) = history();
    let clip = MemoryClipboard::default();
    assert!(!h.on_system_clipboard_changed_at(&clip, 1));
    assert!(!h.refresh_from_system_at(&clip, 1));
}

#[test]
fn load_normalises_persisted_items() {
    let store = MemoryStore::new();
    let item = |t: &str, ts| ClipboardItem {
        text: t.to_string(),
        timestamp: ts,
    };
    ClipboardStore::save(&store, &[item("a", 3), item("b", 2), item("a", 1), item(" ", 0)]).unwrap();
    let h = ClipboardHistory::with_limits(Box::new(store), 10, 500, 500);
    assert_eq!(texts(&h), vec!["a", "b"]);
}

struct FailingStore;

impl ClipboardStore for FailingStore {
    fn load(&self) -> Result<Vec<ClipboardItem>, StoreError> {
        Err(StoreError::Format("corrupt".to_string()))
    }

    fn save(&self, _items: &[ClipboardItem]) -> Result<(), StoreError> {
        Err(StoreError::Format("read-only".to_string()))
    }
}

#[test]
fn store_failures_degrade_gracefully() {
    let mut h = ClipboardHistory::new(Box::new(FailingStore));
    assert!(h.is_empty());
    assert!(h.add_at("still works", 1));
    assert_eq!(h.len(), 1);
}
