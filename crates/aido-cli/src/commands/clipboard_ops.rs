use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use aido_core::store::{load_clipboard, ClipboardFile, ClipboardItem, ClipboardStore};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::CLIPBOARD_FILE;
use crate::table::preview;

fn file(dir: &Path) -> ClipboardFile {
    ClipboardFile::new(dir.join(CLIPBOARD_FILE))
}

fn save(dir: &Path, items: &[ClipboardItem]) {
    let f = file(dir);
    die!(
        ClipboardStore::save(&f, items),
        "Error saving {}: {}",
        f.path().display()
    );
}

/// RFC 3339 UTC time for a millisecond timestamp.
pub fn format_timestamp(ms: u64) -> String {
    let nanos = i128::from(ms) * 1_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_else(|| format!("@{ms}"))
}

pub fn list(dir: &Path) {
    let f = file(dir);
    // Load through the store directly so corruption is reported, not hidden.
    let items = die!(f.load(), "Error reading {}: {}", f.path().display());
    if items.is_empty() {
        println!("(empty)");
        return;
    }
    for (i, item) in items.iter().enumerate() {
        println!(
            "{i:>3}  {}  {}",
            format_timestamp(item.timestamp),
            preview(&item.text, 60)
        );
    }
    println!("---");
    println!("{} items", items.len());
}

pub fn add(dir: &Path, text: &str) {
    if text.trim().is_empty() {
        eprintln!("Error: clip is blank");
        std::process::exit(1);
    }
    let mut items = load_clipboard(&file(dir));
    items.retain(|i| i.text != text);
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    items.insert(
        0,
        ClipboardItem {
            text: text.to_string(),
            timestamp,
        },
    );
    items.truncate(aido_core::settings::settings().history.max_clipboard_items);
    save(dir, &items);
    println!("Added ({} items)", items.len());
}

pub fn delete(dir: &Path, index: usize) {
    let mut items = load_clipboard(&file(dir));
    if index >= items.len() {
        eprintln!("Error: index {index} out of range for {} items", items.len());
        std::process::exit(1);
    }
    let removed = items.remove(index);
    save(dir, &items);
    println!("Deleted: {}", preview(&removed.text, 60));
}

pub fn clear(dir: &Path) {
    save(dir, &[]);
    println!("Cleared");
}
