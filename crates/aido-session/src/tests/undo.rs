use super::MemoryField;
use crate::{TextState, UndoRedoManager};

fn undo_texts(m: &UndoRedoManager) -> Vec<&str> {
    m.undo_states().map(|s| s.text.as_str()).collect()
}

#[test]
fn empty_stacks_fail_without_touching_field() {
    let mut m = UndoRedoManager::new();
    let mut field = MemoryField::new("keep");
    assert!(!m.undo(&mut field));
    assert!(!m.redo(&mut field));
    assert_eq!(field.text, "keep");
}

#[test]
fn consecutive_duplicates_are_dropped() {
    let mut m = UndoRedoManager::new();
    m.save_state("a", 1);
    m.save_state("a", 1);
    assert_eq!(undo_texts(&m), vec!["a"]);
    // Same text, different cursor is a different state.
    m.save_state("a", 0);
    assert_eq!(m.undo_states().count(), 2);
}

#[test]
fn dedup_only_checks_the_top() {
    let mut m = UndoRedoManager::new();
    m.save_state("t1", 2);
    m.save_state("t2", 2);
    m.save_state("t1", 2);
    assert_eq!(undo_texts(&m), vec!["t1", "t2", "t1"]);
}

#[test]
fn cap_evicts_oldest() {
    let mut m = UndoRedoManager::new();
    assert_eq!(m.limit(), 50);
    for i in 0..51 {
        m.save_state(&format!("s{i}"), i);
    }
    let texts = undo_texts(&m);
    assert_eq!(texts.len(), 50);
    assert_eq!(texts[0], "s1");
    assert_eq!(texts[49], "s50");
}

#[test]
fn undo_restores_and_redo_returns() {
    let mut m = UndoRedoManager::new();
    let mut field = MemoryField::with_cursor("hello world", 5);
    m.save_state("hello", 3);

    assert!(m.undo(&mut field));
    assert_eq!((field.text.as_str(), field.cursor), ("hello", 3));
    assert!(m.can_redo());

    assert!(m.redo(&mut field));
    assert_eq!((field.text.as_str(), field.cursor), ("hello world", 5));
    assert_eq!(
        m.undo_states().last(),
        Some(&TextState::new("hello", 3))
    );
}

#[test]
fn new_state_clears_redo() {
    let mut m = UndoRedoManager::new();
    let mut field = MemoryField::new("b");
    m.save_state("a", 1);
    m.undo(&mut field);
    assert!(m.can_redo());
    m.save_state("c", 1);
    assert!(!m.can_redo());
}

#[test]
fn unreadable_field_still_undoes() {
    let mut m = UndoRedoManager::new();
    m.save_state("old", 3);
    let mut field = MemoryField {
        readable: false,
        ..MemoryField::new("new")
    };
    assert!(m.undo(&mut field));
    assert_eq!(field.text, "old");
    assert!(!m.can_redo());
}

#[test]
fn clear_empties_both() {
    let mut m = UndoRedoManager::new();
    let mut field = MemoryField::new("x");
    m.save_state("a", 0);
    m.save_state("b", 0);
    m.undo(&mut field);
    m.clear();
    assert!(!m.can_undo());
    assert!(!m.can_redo());
}

#[test]
fn delete_last_word() {
    let m = UndoRedoManager::new();
    let mut field = MemoryField::new("hello big world");
    assert!(m.delete_last_word(&mut field));
    assert_eq!(field.text, "hello big ");
}

#[test]
fn delete_last_word_with_trailing_space() {
    let m = UndoRedoManager::new();
    let mut field = MemoryField::new("hello world ");
    assert!(m.delete_last_word(&mut field));
    // Word plus one space; the space before the word stays.
    assert_eq!(field.text, "hello ");
}

#[test]
fn delete_last_word_respects_cursor() {
    let m = UndoRedoManager::new();
    let mut field = MemoryField::with_cursor("one two three", 7);
    assert!(m.delete_last_word(&mut field));
    assert_eq!(field.text, "one  three");
    assert_eq!(field.cursor, 4);
}

#[test]
fn delete_last_word_counts_chars() {
    let m = UndoRedoManager::new();
    let mut field = MemoryField::new("dis café");
    assert!(m.delete_last_word(&mut field));
    assert_eq!(field.text, "dis ");
}

#[test]
fn delete_last_word_without_text() {
    let m = UndoRedoManager::new();
    assert!(!m.delete_last_word(&mut MemoryField::new("")));
    let mut gone = MemoryField {
        readable: false,
        ..MemoryField::new("abc")
    };
    assert!(!m.delete_last_word(&mut gone));
    assert_eq!(gone.text, "abc");
}
