use std::fs;

pub fn settings_export() {
    print!("{}", aido_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        aido_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: history.max_undo_states={}, history.max_clipboard_items={}, suggestions.max_results={}",
        s.history.max_undo_states, s.history.max_clipboard_items, s.suggestions.max_results
    );
}
