use crate::pipeline::AiRequest;

/// What the host should do after a text change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    None,
    /// App is toggled off; nothing was processed.
    Paused,
    /// `@on` / `@off` handled and removed from the field. The host persists `on`.
    Toggled { on: bool },
    /// Send this to the AI client and report back with `on_ai_result`.
    Request(AiRequest),
    /// Smart reply needs the visible conversation; answer with `request_smart_reply`.
    NeedsScreenContext,
    ShowMenu(Vec<String>),
    /// Open the search overlay for this query.
    Search(String),
    /// A user-facing message (toast).
    Notice(String),
    /// A text shortcut was expanded in the field.
    ShortcutExpanded,
}

/// Result of handing an AI response to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiOutcome {
    /// Superseded or arrived after the input session ended.
    Discarded,
    /// Field contents replaced.
    Applied,
    /// Field unreadable; response placed on the system clipboard.
    CopiedToClipboard,
    /// Choices for the host to display; apply one with `apply_suggestion`.
    Suggestions(Vec<String>),
    Failed(String),
}
