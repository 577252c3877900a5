//! Preprompts: trigger → instruction templates sent ahead of the user's text.
//!
//! The registry keeps them in display order together with the `@all` menu
//! order, and every mutation validates before touching state.

mod import;
mod registry;
mod validate;


use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub use import::{export_json, import_json, ImportError};
pub use registry::{PrepromptRegistry, RegistryError, RegistrySnapshot};
pub use validate::{validate_preprompt, validate_trigger, ValidationError};

const DEFAULT_PREPROMPTS_TOML: &str = include_str!("default_preprompts.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preprompt {
    pub trigger: String,
    pub instruction: String,
    #[serde(default)]
    pub example: String,
    /// Shipped with the app; restored by reset-to-defaults.
    #[serde(default)]
    pub is_default: bool,
}

impl Preprompt {
    /// User-authored preprompt. Fields are trimmed the way the edit dialog does.
    pub fn new(trigger: &str, instruction: &str, example: &str) -> Self {
        Self {
            trigger: trigger.trim().to_string(),
            instruction: instruction.trim().to_string(),
            example: example.trim().to_string(),
            is_default: false,
        }
    }
}

#[derive(Deserialize)]
struct DefaultsFile {
    preprompt: Vec<DefaultEntry>,
}

#[derive(Deserialize)]
struct DefaultEntry {
    trigger: String,
    instruction: String,
    #[serde(default)]
    example: String,
}

/// The built-in preprompt set.
pub fn default_preprompts() -> &'static [Preprompt] {
    static DEFAULTS: OnceLock<Vec<Preprompt>> = OnceLock::new();
    DEFAULTS.get_or_init(|| {
        let file: DefaultsFile =
            toml::from_str(DEFAULT_PREPROMPTS_TOML).expect("default preprompts TOML must be valid");
        file.preprompt
            .into_iter()
            .map(|e| Preprompt {
                trigger: e.trigger,
                instruction: e.instruction,
                example: e.example,
                is_default: true,
            })
            .collect()
    })
}
