//! UniFFI export layer: Kotlin bindings for the Android keyboard service.
//!
//! Each public type here maps to a generated Kotlin class, data class, enum
//! or callback interface.

mod callbacks;
mod session;
mod types;


pub use callbacks::{AidoAiClient, AidoClipboard, AidoTextField};
pub use session::AidoSession;
pub use types::{
    AidoAction, AidoAiOutcome, AidoClipboardItem, AidoCommandConfig, AidoError, AidoPreprompt,
    AidoShortcut,
};

use std::path::Path;

use aido_core::command::CommandConfig;
use aido_core::preprompt::{default_preprompts, import_json, validate_trigger};
use aido_core::prompt::parse_input;
use aido_core::settings::settings;
use aido_core::words::WordIndex;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), AidoError> {
    let content = std::fs::read_to_string(&path).map_err(|e| AidoError::Io {
        msg: format!("{path}: {e}"),
    })?;
    aido_core::settings::init_custom(content)?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    aido_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

/// Command toggles with every feature off and the default triggers.
#[uniffi::export]
fn default_command_config() -> AidoCommandConfig {
    (&CommandConfig::default()).into()
}

#[uniffi::export]
fn default_preprompt_list() -> Vec<AidoPreprompt> {
    default_preprompts()
        .iter()
        .cloned()
        .map(AidoPreprompt::from)
        .collect()
}

/// Check a trigger as the edit dialog does. Returns the message on failure.
#[uniffi::export]
fn trigger_error(trigger: String) -> Option<String> {
    validate_trigger(trigger.trim()).err().map(|e| e.to_string())
}

/// Final prompt for `input` against `preprompts`, or `None` without a match.
#[uniffi::export]
fn build_prompt(input: String, preprompts: Vec<AidoPreprompt>) -> Option<String> {
    let list: Vec<_> = preprompts.into_iter().map(AidoPreprompt::into_core).collect();
    let parsed = parse_input(&input, &list);
    parsed.is_matched().then_some(parsed.final_prompt)
}

/// Validate an exported preprompt file without applying it.
#[uniffi::export]
fn preprompts_parse_file(json: String) -> Result<Vec<AidoPreprompt>, AidoError> {
    let parsed = import_json(&json, &settings().import.required_prefix)?;
    Ok(parsed.into_iter().map(AidoPreprompt::from).collect())
}

#[uniffi::export]
fn word_complete(prefix: String) -> Vec<String> {
    WordIndex::builtin()
        .smart_suggestions(&prefix, settings().suggestions.max_results)
        .into_iter()
        .map(str::to_string)
        .collect()
}
