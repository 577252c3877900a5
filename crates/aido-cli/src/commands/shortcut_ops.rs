use std::path::Path;

use aido_core::shortcuts::ShortcutSet;
use aido_core::store::{load_shortcuts, JsonFileStore, ShortcutStore};

use super::SHORTCUTS_FILE;
use crate::table::{column_width, pad};

fn store(dir: &Path) -> JsonFileStore {
    JsonFileStore::new(dir.join(SHORTCUTS_FILE))
}

fn save(dir: &Path, set: &ShortcutSet) {
    let store = store(dir);
    die!(
        ShortcutStore::save(&store, set.items()),
        "Error saving {}: {}",
        store.path().display()
    );
}

pub fn list(dir: &Path) {
    let set = load_shortcuts(&store(dir));
    if set.is_empty() {
        println!("(empty)");
        return;
    }
    let width = column_width(set.items().iter().map(|s| s.trigger.as_str()));
    for s in set.items() {
        println!("{:>3}  {}  {}", s.id, pad(&s.trigger, width), s.replacement);
    }
}

pub fn add(dir: &Path, trigger: &str, replacement: &str) {
    let mut set = load_shortcuts(&store(dir));
    let id = die!(set.add(trigger, replacement), "Error: {}");
    save(dir, &set);
    println!("Added #{id}: {trigger} → {replacement}");
}

pub fn remove(dir: &Path, id: u64) {
    let mut set = load_shortcuts(&store(dir));
    if set.remove(id) {
        save(dir, &set);
        println!("Removed #{id}");
    } else {
        println!("Not found: #{id}");
    }
}

/// Print what `text` becomes after shortcut expansion.
pub fn expand(dir: &Path, text: &str) {
    let set = load_shortcuts(&store(dir));
    match set.expand(text) {
        Some(expanded) => println!("{expanded}"),
        None => println!("(no shortcut matches)"),
    }
}
