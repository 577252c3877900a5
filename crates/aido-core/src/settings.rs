//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub history: HistorySettings,
    pub suggestions: SuggestionSettings,
    pub commands: CommandSettings,
    pub import: ImportSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistorySettings {
    pub max_undo_states: usize,
    pub max_clipboard_items: usize,
    pub clipboard_debounce_ms: u64,
    pub max_clip_length: usize,
    pub delete_word_lookbehind: usize,
    pub live_text_window: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    pub max_results: usize,
    /// Number of consecutive word-list entries sharing one frequency tier.
    pub tier_size: usize,
}

/// Default triggers for the built-in special commands.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandSettings {
    pub smart_reply_trigger: String,
    pub tone_rewrite_trigger: String,
    pub search_trigger: String,
    pub all_trigger: String,
    pub toggle_on: String,
    pub toggle_off: String,
    pub max_suggestions: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportSettings {
    /// Every trigger in an imported preprompt file must start with this.
    pub required_prefix: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_positive!(history.max_undo_states);
    check_positive!(history.max_clipboard_items);
    check_positive!(history.max_clip_length);
    check_positive!(history.delete_word_lookbehind);
    check_positive!(history.live_text_window);

    check_positive!(suggestions.max_results);
    check_positive!(suggestions.tier_size);

    check_non_empty!(commands.smart_reply_trigger);
    check_non_empty!(commands.tone_rewrite_trigger);
    check_non_empty!(commands.search_trigger);
    check_non_empty!(commands.all_trigger);
    check_non_empty!(commands.toggle_on);
    check_non_empty!(commands.toggle_off);
    check_positive!(commands.max_suggestions);

    check_non_empty!(import.required_prefix);

    Ok(())
}
