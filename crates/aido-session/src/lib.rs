//! Keyboard session: trigger pipeline, edit history and clipboard ring.
//!
//! `KeyboardSession` owns the per-app state and reacts to text-field events,
//! returning actions that the Kotlin frontend turns into UI or AI calls.
//! It never holds on to a text field beyond one call.

mod clipboard;
mod pipeline;
mod response;
mod text_field;
mod undo;

#[cfg(test)]
mod tests;

use aido_core::command::{classify, Command, CommandConfig};
use aido_core::preprompt::{
    import_json, ImportError, Preprompt, PrepromptRegistry, RegistryError, ValidationError,
};
use aido_core::prompt::{parse_suggestions, smart_reply_prompt, tone_rewrite_prompt};
use aido_core::settings::settings;
use aido_core::shortcuts::{ShortcutSet, TextShortcut};
use aido_core::store::{
    load_registry, load_shortcuts, ClipboardStore, PrepromptStore, ShortcutStore,
};
use aido_core::words::WordIndex;
use tracing::{debug, debug_span, warn};

pub use clipboard::ClipboardHistory;
pub use pipeline::{AiRequest, Pipeline, RequestKind};
pub use response::{AiOutcome, SessionAction};
pub use text_field::{SystemClipboard, TextField};
pub use undo::{TextState, UndoRedoManager};

use text_field::live_state;

/// Persistence collaborators handed to a session.
pub struct SessionStores {
    pub preprompts: Box<dyn PrepromptStore>,
    pub clipboard: Box<dyn ClipboardStore>,
    pub shortcuts: Box<dyn ShortcutStore>,
}

pub struct KeyboardSession {
    registry: PrepromptRegistry,
    preprompt_store: Box<dyn PrepromptStore>,
    shortcuts: ShortcutSet,
    shortcut_store: Box<dyn ShortcutStore>,
    config: CommandConfig,
    history: UndoRedoManager,
    clipboard: ClipboardHistory,
    pipeline: Pipeline,
    words: WordIndex<'static>,
    /// Text a chosen suggestion replaces.
    suggestion_target: Option<String>,
    live_window: usize,
}

impl KeyboardSession {
    pub fn new(stores: SessionStores, config: CommandConfig) -> Self {
        let registry = load_registry(stores.preprompts.as_ref());
        let shortcuts = load_shortcuts(stores.shortcuts.as_ref());
        debug!(
            preprompts = registry.len(),
            shortcuts = shortcuts.items().len(),
            "session created"
        );
        Self {
            registry,
            preprompt_store: stores.preprompts,
            shortcuts,
            shortcut_store: stores.shortcuts,
            config,
            history: UndoRedoManager::new(),
            clipboard: ClipboardHistory::new(stores.clipboard),
            pipeline: Pipeline::new(),
            words: WordIndex::builtin(),
            suggestion_target: None,
            live_window: settings().history.live_text_window,
        }
    }

    // -- Configuration -------------------------------------------------------

    pub fn config(&self) -> &CommandConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CommandConfig) {
        self.config = config;
    }

    // -- Input lifecycle -----------------------------------------------------

    /// A new field gained focus. Edit history belongs to the previous field.
    pub fn start_input(&mut self) {
        self.history.clear();
        self.suggestion_target = None;
    }

    /// The field lost focus or the keyboard was hidden.
    pub fn end_input(&mut self) {
        self.pipeline.end_session();
        self.suggestion_target = None;
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    // -- Trigger pipeline ----------------------------------------------------

    /// React to a change in the focused field.
    pub fn on_text_changed(&mut self, field: &mut dyn TextField) -> SessionAction {
        let _span = debug_span!("on_text_changed").entered();
        let Some((text, cursor)) = live_state(&*field, self.live_window) else {
            return SessionAction::None;
        };
        if text.is_empty() {
            return SessionAction::None;
        }

        match classify(&text, &self.config, &self.registry) {
            Command::Toggle { on, cleaned } => {
                self.config.app_on = on;
                self.replace_with_undo(field, &text, cursor, &cleaned);
                SessionAction::Toggled { on }
            }
            Command::Paused => self
                .expand_shortcut(field, &text, cursor)
                .unwrap_or(SessionAction::Paused),
            Command::None => self
                .expand_shortcut(field, &text, cursor)
                .unwrap_or(SessionAction::None),
            _ if !self.pipeline.is_new_text(&text) => SessionAction::None,
            Command::SmartReply => {
                self.pipeline.mark_processed(&text);
                SessionAction::NeedsScreenContext
            }
            Command::ToneRewrite { text: original } => {
                self.pipeline.mark_processed(&text);
                let prompt = tone_rewrite_prompt(&original, &self.config.tone_rewrite_prompt);
                SessionAction::Request(self.pipeline.begin(RequestKind::ToneRewrite, prompt, &text))
            }
            Command::AllMenu { triggers } => {
                self.pipeline.mark_processed(&text);
                if triggers.is_empty() {
                    SessionAction::Notice("No commands available".to_string())
                } else {
                    SessionAction::ShowMenu(triggers)
                }
            }
            Command::Search { query } => {
                self.pipeline.mark_processed(&text);
                SessionAction::Search(query)
            }
            Command::MissingText { trigger } => {
                self.pipeline.mark_processed(&text);
                SessionAction::Notice(format!("Type something before {trigger}"))
            }
            Command::Prompt(parsed) => {
                self.pipeline.mark_processed(&text);
                SessionAction::Request(self.pipeline.begin(
                    RequestKind::Replace,
                    parsed.final_prompt,
                    &text,
                ))
            }
        }
    }

    /// Build the smart-reply request once the host has read the screen.
    pub fn request_smart_reply(&mut self, screen_context: &str) -> AiRequest {
        let prompt = smart_reply_prompt(screen_context, &self.config.smart_reply_prompt);
        let target = self.config.smart_reply_trigger.clone();
        self.pipeline.begin(RequestKind::SmartReply, prompt, &target)
    }

    /// Hand back the AI client's answer for `generation`.
    ///
    /// `field` is `None` when the host has no focused field any more.
    pub fn on_ai_result(
        &mut self,
        generation: u64,
        result: Result<String, String>,
        field: Option<&mut dyn TextField>,
        clipboard: &dyn SystemClipboard,
    ) -> AiOutcome {
        let Some((kind, target)) = self.pipeline.complete(generation) else {
            return AiOutcome::Discarded;
        };
        let response = match result {
            Ok(r) => r,
            Err(msg) => {
                warn!(generation, error = %msg, "AI request failed");
                return AiOutcome::Failed(msg);
            }
        };

        if kind.yields_suggestions() {
            let suggestions =
                parse_suggestions(&response, settings().commands.max_suggestions);
            self.suggestion_target = Some(target);
            return AiOutcome::Suggestions(suggestions);
        }

        if let Some(field) = field {
            if let Some((text, cursor)) = live_state(&*field, self.live_window) {
                self.replace_with_undo(field, &text, cursor, &response);
                return AiOutcome::Applied;
            }
        }
        debug!(generation, "field unavailable, copying response");
        clipboard.write(&response);
        AiOutcome::CopiedToClipboard
    }

    /// Insert a chosen suggestion in place of the text it was generated for.
    pub fn apply_suggestion(&mut self, suggestion: &str, field: &mut dyn TextField) -> bool {
        let Some((text, cursor)) = live_state(&*field, self.live_window) else {
            return false;
        };
        let target = self.suggestion_target.take().unwrap_or_default();
        let new_text = if !target.is_empty() && text.contains(target.as_str()) {
            text.replace(target.as_str(), suggestion)
        } else {
            suggestion.to_string()
        };
        self.replace_with_undo(field, &text, cursor, &new_text);
        true
    }

    /// Replace the last `@all` in the field with the trigger picked from the menu.
    pub fn apply_menu_choice(&mut self, trigger: &str, field: &mut dyn TextField) -> bool {
        let Some((text, cursor)) = live_state(&*field, self.live_window) else {
            return false;
        };
        let all = settings().commands.all_trigger.as_str();
        let Some(i) = text.rfind(all) else {
            return false;
        };
        let new_text = format!("{}{}{}", &text[..i], trigger, &text[i + all.len()..]);
        self.replace_with_undo(field, &text, cursor, &new_text);
        true
    }

    fn expand_shortcut(
        &mut self,
        field: &mut dyn TextField,
        text: &str,
        cursor: usize,
    ) -> Option<SessionAction> {
        let expanded = self.shortcuts.expand(text)?;
        self.replace_with_undo(field, text, cursor, &expanded);
        Some(SessionAction::ShortcutExpanded)
    }

    fn replace_with_undo(
        &mut self,
        field: &mut dyn TextField,
        text: &str,
        cursor: usize,
        new_text: &str,
    ) {
        self.history.save_state(text, cursor);
        field.replace_all(new_text);
        field.set_selection(new_text.chars().count());
    }

    // -- Edit history --------------------------------------------------------

    pub fn history(&self) -> &UndoRedoManager {
        &self.history
    }

    pub fn save_state(&mut self, text: &str, cursor: usize) {
        self.history.save_state(text, cursor);
    }

    pub fn undo(&mut self, field: &mut dyn TextField) -> bool {
        self.history.undo(field)
    }

    pub fn redo(&mut self, field: &mut dyn TextField) -> bool {
        self.history.redo(field)
    }

    pub fn delete_last_word(&mut self, field: &mut dyn TextField) -> bool {
        self.history.delete_last_word(field)
    }

    // -- Clipboard -----------------------------------------------------------

    pub fn clipboard(&self) -> &ClipboardHistory {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut ClipboardHistory {
        &mut self.clipboard
    }

    // -- Word completion -----------------------------------------------------

    /// Completions for the word ending at the cursor.
    pub fn word_suggestions(&self, field: &dyn TextField) -> Vec<String> {
        let before = field.text_before_cursor(settings().history.delete_word_lookbehind);
        let Some(before) = before else {
            return Vec::new();
        };
        if before.ends_with(char::is_whitespace) {
            return Vec::new();
        }
        let word = before.split_whitespace().next_back().unwrap_or("");
        self.suggest(word)
    }

    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.words
            .smart_suggestions(prefix, settings().suggestions.max_results)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    // -- Preprompts ----------------------------------------------------------

    pub fn registry(&self) -> &PrepromptRegistry {
        &self.registry
    }

    fn persist_registry(&self) {
        if let Err(e) = self.preprompt_store.save(&self.registry.snapshot()) {
            warn!(error = %e, "failed to save preprompts");
        }
    }

    pub fn add_preprompt(&mut self, preprompt: Preprompt) -> Result<(), RegistryError> {
        self.registry.add(preprompt)?;
        self.persist_registry();
        Ok(())
    }

    pub fn update_preprompt(
        &mut self,
        old_trigger: &str,
        preprompt: Preprompt,
    ) -> Result<(), RegistryError> {
        self.registry.update(old_trigger, preprompt)?;
        self.persist_registry();
        Ok(())
    }

    pub fn delete_preprompt(&mut self, trigger: &str) -> Result<Preprompt, RegistryError> {
        let removed = self.registry.delete(trigger)?;
        self.persist_registry();
        Ok(removed)
    }

    pub fn reorder_preprompts(&mut self, from: usize, to: usize) -> Result<(), RegistryError> {
        self.registry.reorder(from, to)?;
        self.persist_registry();
        Ok(())
    }

    pub fn reset_preprompts(&mut self) {
        self.registry.reset_to_defaults();
        self.persist_registry();
    }

    pub fn set_menu_order(&mut self, order: Vec<String>) {
        self.registry.set_menu_order(order);
        self.persist_registry();
    }

    /// Replace the whole library with an exported file. Returns the entry count.
    pub fn import_preprompts(&mut self, json: &str) -> Result<usize, ImportError> {
        let imported = import_json(json, &settings().import.required_prefix)?;
        let count = imported.len();
        self.registry.replace_all(imported);
        self.persist_registry();
        Ok(count)
    }

    // -- Text shortcuts ------------------------------------------------------

    pub fn shortcuts(&self) -> &[TextShortcut] {
        self.shortcuts.items()
    }

    fn persist_shortcuts(&self) {
        if let Err(e) = self.shortcut_store.save(self.shortcuts.items()) {
            warn!(error = %e, "failed to save text shortcuts");
        }
    }

    pub fn add_shortcut(&mut self, trigger: &str, replacement: &str) -> Result<u64, ValidationError> {
        let id = self.shortcuts.add(trigger, replacement)?;
        self.persist_shortcuts();
        Ok(id)
    }

    pub fn update_shortcut(&mut self, shortcut: TextShortcut) -> Result<bool, ValidationError> {
        let changed = self.shortcuts.update(shortcut)?;
        if changed {
            self.persist_shortcuts();
        }
        Ok(changed)
    }

    pub fn remove_shortcut(&mut self, id: u64) -> bool {
        let removed = self.shortcuts.remove(id);
        if removed {
            self.persist_shortcuts();
        }
        removed
    }
}
