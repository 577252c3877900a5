macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod ask_ops;
pub mod clipboard_ops;
pub mod config_ops;
pub mod preprompt_ops;
pub mod prompt_ops;
pub mod shortcut_ops;

pub const PREPROMPTS_FILE: &str = "preprompts.json";
pub const CLIPBOARD_FILE: &str = "clipboard.bin";
pub const SHORTCUTS_FILE: &str = "shortcuts.json";

/// Same layout the keyboard uses under its files directory.
pub fn default_data_dir() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    format!("{home}/.local/share/aido")
}
