use aido_core::command::CommandConfig;
use aido_core::preprompt::{ImportError, Preprompt, RegistryError, ValidationError};
use aido_core::settings::SettingsError;
use aido_core::shortcuts::TextShortcut;
use aido_core::store::{ClipboardItem, StoreError};
use aido_session::{AiOutcome, SessionAction};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum AidoError {
    #[error("{msg}")]
    Validation { msg: String },
    #[error("{msg}")]
    DuplicateTrigger { msg: String },
    #[error("{msg}")]
    IndexOutOfRange { msg: String },
    #[error("{msg}")]
    NotFound { msg: String },
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    /// The AI provider failed or refused the request.
    #[error("provider error: {msg}")]
    Provider { msg: String },
    #[error("internal error: {msg}")]
    Internal { msg: String },
}

impl From<uniffi::UnexpectedUniFFICallbackError> for AidoError {
    fn from(e: uniffi::UnexpectedUniFFICallbackError) -> Self {
        AidoError::Internal { msg: e.reason }
    }
}

impl From<ValidationError> for AidoError {
    fn from(e: ValidationError) -> Self {
        AidoError::Validation { msg: e.to_string() }
    }
}

impl From<RegistryError> for AidoError {
    fn from(e: RegistryError) -> Self {
        let msg = e.to_string();
        match e {
            RegistryError::Validation(_) => AidoError::Validation { msg },
            RegistryError::DuplicateTrigger(_) => AidoError::DuplicateTrigger { msg },
            RegistryError::IndexOutOfRange { .. } => AidoError::IndexOutOfRange { msg },
            RegistryError::NotFound(_) => AidoError::NotFound { msg },
        }
    }
}

impl From<ImportError> for AidoError {
    fn from(e: ImportError) -> Self {
        let msg = e.to_string();
        match e {
            ImportError::Duplicates(_) => AidoError::DuplicateTrigger { msg },
            ImportError::Parse(_) | ImportError::Empty | ImportError::Invalid { .. } => {
                AidoError::InvalidData { msg }
            }
        }
    }
}

impl From<StoreError> for AidoError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Io(e) => AidoError::Io { msg: e.to_string() },
            StoreError::Format(msg) => AidoError::InvalidData { msg },
        }
    }
}

impl From<SettingsError> for AidoError {
    fn from(e: SettingsError) -> Self {
        AidoError::InvalidData { msg: e.to_string() }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct AidoPreprompt {
    pub trigger: String,
    pub instruction: String,
    pub example: String,
    pub is_default: bool,
}

impl From<Preprompt> for AidoPreprompt {
    fn from(p: Preprompt) -> Self {
        Self {
            trigger: p.trigger,
            instruction: p.instruction,
            example: p.example,
            is_default: p.is_default,
        }
    }
}

impl AidoPreprompt {
    /// User edits never carry the default flag; the registry keeps it on update.
    pub(super) fn into_core(self) -> Preprompt {
        Preprompt::new(&self.trigger, &self.instruction, &self.example)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct AidoClipboardItem {
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl From<&ClipboardItem> for AidoClipboardItem {
    fn from(item: &ClipboardItem) -> Self {
        Self {
            text: item.text.clone(),
            timestamp: item.timestamp,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct AidoShortcut {
    pub id: u64,
    pub trigger: String,
    pub replacement: String,
}

impl From<&TextShortcut> for AidoShortcut {
    fn from(s: &TextShortcut) -> Self {
        Self {
            id: s.id,
            trigger: s.trigger.clone(),
            replacement: s.replacement.clone(),
        }
    }
}

impl From<AidoShortcut> for TextShortcut {
    fn from(s: AidoShortcut) -> Self {
        TextShortcut {
            id: s.id,
            trigger: s.trigger,
            replacement: s.replacement,
        }
    }
}

/// Per-user command toggles, mirrored from the app's preferences screen.
#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct AidoCommandConfig {
    pub smart_reply_enabled: bool,
    pub tone_rewrite_enabled: bool,
    pub all_menu_enabled: bool,
    pub search_enabled: bool,
    pub toggle_enabled: bool,
    pub app_on: bool,
    pub smart_reply_trigger: String,
    pub tone_rewrite_trigger: String,
    pub search_trigger: String,
    pub smart_reply_prompt: String,
    pub tone_rewrite_prompt: String,
}

impl From<AidoCommandConfig> for CommandConfig {
    fn from(c: AidoCommandConfig) -> Self {
        CommandConfig {
            smart_reply_enabled: c.smart_reply_enabled,
            tone_rewrite_enabled: c.tone_rewrite_enabled,
            all_menu_enabled: c.all_menu_enabled,
            search_enabled: c.search_enabled,
            toggle_enabled: c.toggle_enabled,
            app_on: c.app_on,
            smart_reply_trigger: c.smart_reply_trigger,
            tone_rewrite_trigger: c.tone_rewrite_trigger,
            search_trigger: c.search_trigger,
            smart_reply_prompt: c.smart_reply_prompt,
            tone_rewrite_prompt: c.tone_rewrite_prompt,
        }
    }
}

impl From<&CommandConfig> for AidoCommandConfig {
    fn from(c: &CommandConfig) -> Self {
        Self {
            smart_reply_enabled: c.smart_reply_enabled,
            tone_rewrite_enabled: c.tone_rewrite_enabled,
            all_menu_enabled: c.all_menu_enabled,
            search_enabled: c.search_enabled,
            toggle_enabled: c.toggle_enabled,
            app_on: c.app_on,
            smart_reply_trigger: c.smart_reply_trigger.clone(),
            tone_rewrite_trigger: c.tone_rewrite_trigger.clone(),
            search_trigger: c.search_trigger.clone(),
            smart_reply_prompt: c.smart_reply_prompt.clone(),
            tone_rewrite_prompt: c.tone_rewrite_prompt.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Response to a text change.
#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum AidoAction {
    None,
    Paused,
    Toggled { on: bool },
    /// An AI request was submitted; call `poll` until it yields an outcome.
    SchedulePoll { generation: u64 },
    /// Read the screen and call `request_smart_reply`.
    NeedsScreenContext,
    ShowMenu { triggers: Vec<String> },
    Search { query: String },
    Notice { message: String },
    ShortcutExpanded,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum AidoAiOutcome {
    Applied,
    CopiedToClipboard,
    Suggestions { items: Vec<String> },
    Failed { message: String },
}

impl AidoAiOutcome {
    /// `None` for results the session dropped as superseded.
    pub(super) fn from_outcome(outcome: AiOutcome) -> Option<Self> {
        match outcome {
            AiOutcome::Discarded => None,
            AiOutcome::Applied => Some(Self::Applied),
            AiOutcome::CopiedToClipboard => Some(Self::CopiedToClipboard),
            AiOutcome::Suggestions(items) => Some(Self::Suggestions { items }),
            AiOutcome::Failed(message) => Some(Self::Failed { message }),
        }
    }
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Map a session action; `Request` is handed to the worker by the caller.
pub(super) fn convert_action(action: SessionAction) -> AidoAction {
    match action {
        SessionAction::None => AidoAction::None,
        SessionAction::Paused => AidoAction::Paused,
        SessionAction::Toggled { on } => AidoAction::Toggled { on },
        SessionAction::Request(req) => AidoAction::SchedulePoll {
            generation: req.generation,
        },
        SessionAction::NeedsScreenContext => AidoAction::NeedsScreenContext,
        SessionAction::ShowMenu(triggers) => AidoAction::ShowMenu { triggers },
        SessionAction::Search(query) => AidoAction::Search { query },
        SessionAction::Notice(message) => AidoAction::Notice { message },
        SessionAction::ShortcutExpanded => AidoAction::ShortcutExpanded,
    }
}
