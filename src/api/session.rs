use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use aido_core::preprompt::export_json;
use aido_core::store::{ClipboardFile, JsonFileStore, MemoryStore};
use aido_session::{KeyboardSession, SessionAction, SessionStores, TextField};
use tracing::debug;

use crate::async_worker::AiWorker;
use crate::persist_worker::{clipboard_writer, preprompt_writer, shortcut_writer};

use super::callbacks::{ClipboardAdapter, FieldAdapter};
use super::types::convert_action;
use super::{
    AidoAction, AidoAiClient, AidoAiOutcome, AidoClipboard, AidoClipboardItem, AidoCommandConfig,
    AidoError, AidoPreprompt, AidoShortcut, AidoTextField,
};

const PREPROMPTS_FILE: &str = "preprompts.json";
const CLIPBOARD_FILE: &str = "clipboard.bin";
const SHORTCUTS_FILE: &str = "shortcuts.json";

/// One keyboard service instance.
///
/// Text-field callbacks are passed per call and never retained.
#[derive(uniffi::Object)]
pub struct AidoSession {
    session: Mutex<KeyboardSession>,
    worker: AiWorker,
    clipboard: Arc<dyn AidoClipboard>,
}

fn io_err(e: std::io::Error) -> AidoError {
    AidoError::Io { msg: e.to_string() }
}

fn index(i: u32) -> usize {
    i as usize
}

#[uniffi::export]
impl AidoSession {
    /// Open with state persisted under `data_dir`.
    #[uniffi::constructor]
    pub fn open(
        data_dir: String,
        config: AidoCommandConfig,
        ai: Arc<dyn AidoAiClient>,
        clipboard: Arc<dyn AidoClipboard>,
    ) -> Result<Arc<Self>, AidoError> {
        let dir = Path::new(&data_dir);
        fs::create_dir_all(dir).map_err(|e| AidoError::Io {
            msg: format!("{data_dir}: {e}"),
        })?;
        let stores = SessionStores {
            preprompts: Box::new(
                preprompt_writer(JsonFileStore::new(dir.join(PREPROMPTS_FILE))).map_err(io_err)?,
            ),
            clipboard: Box::new(
                clipboard_writer(ClipboardFile::new(dir.join(CLIPBOARD_FILE))).map_err(io_err)?,
            ),
            shortcuts: Box::new(
                shortcut_writer(JsonFileStore::new(dir.join(SHORTCUTS_FILE))).map_err(io_err)?,
            ),
        };
        debug!(data_dir = %data_dir, "opening session");
        Self::with_stores(stores, config, ai, clipboard)
    }

    /// Session whose state lives only as long as the object.
    #[uniffi::constructor]
    pub fn in_memory(
        config: AidoCommandConfig,
        ai: Arc<dyn AidoAiClient>,
        clipboard: Arc<dyn AidoClipboard>,
    ) -> Result<Arc<Self>, AidoError> {
        let store = MemoryStore::new();
        let stores = SessionStores {
            preprompts: Box::new(store.clone()),
            clipboard: Box::new(store.clone()),
            shortcuts: Box::new(store),
        };
        Self::with_stores(stores, config, ai, clipboard)
    }

    // -- Configuration -------------------------------------------------------

    pub fn config(&self) -> AidoCommandConfig {
        self.lock().config().into()
    }

    pub fn set_config(&self, config: AidoCommandConfig) {
        self.lock().set_config(config.into());
    }

    // -- Input lifecycle -----------------------------------------------------

    pub fn start_input(&self) {
        self.lock().start_input();
    }

    pub fn end_input(&self) {
        self.worker.invalidate();
        self.lock().end_input();
    }

    // -- Trigger pipeline ----------------------------------------------------

    pub fn on_text_changed(&self, field: Arc<dyn AidoTextField>) -> AidoAction {
        let mut adapter = FieldAdapter(field.as_ref());
        let action = self.lock().on_text_changed(&mut adapter);
        self.dispatch(action)
    }

    pub fn request_smart_reply(&self, screen_context: String) -> AidoAction {
        let req = self.lock().request_smart_reply(&screen_context);
        self.dispatch(SessionAction::Request(req))
    }

    /// Deliver the next finished AI response, if any.
    ///
    /// `field` is the currently focused field, or `None` if there is none;
    /// replace-kind responses then go to the clipboard.
    pub fn poll(&self, field: Option<Arc<dyn AidoTextField>>) -> Option<AidoAiOutcome> {
        while let Some(result) = self.worker.try_recv() {
            let mut adapter = field.as_deref().map(FieldAdapter);
            let target = adapter.as_mut().map(|a| a as &mut dyn TextField);
            let outcome = self.lock().on_ai_result(
                result.generation,
                result.result,
                target,
                &ClipboardAdapter(self.clipboard.as_ref()),
            );
            if let Some(outcome) = AidoAiOutcome::from_outcome(outcome) {
                return Some(outcome);
            }
        }
        None
    }

    pub fn is_busy(&self) -> bool {
        self.lock().pipeline().is_busy()
    }

    pub fn apply_suggestion(&self, suggestion: String, field: Arc<dyn AidoTextField>) -> bool {
        self.lock()
            .apply_suggestion(&suggestion, &mut FieldAdapter(field.as_ref()))
    }

    pub fn apply_menu_choice(&self, trigger: String, field: Arc<dyn AidoTextField>) -> bool {
        self.lock()
            .apply_menu_choice(&trigger, &mut FieldAdapter(field.as_ref()))
    }

    // -- Edit history --------------------------------------------------------

    pub fn save_state(&self, text: String, cursor: u32) {
        self.lock().save_state(&text, index(cursor));
    }

    pub fn can_undo(&self) -> bool {
        self.lock().history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.lock().history().can_redo()
    }

    pub fn undo(&self, field: Arc<dyn AidoTextField>) -> bool {
        self.lock().undo(&mut FieldAdapter(field.as_ref()))
    }

    pub fn redo(&self, field: Arc<dyn AidoTextField>) -> bool {
        self.lock().redo(&mut FieldAdapter(field.as_ref()))
    }

    pub fn delete_last_word(&self, field: Arc<dyn AidoTextField>) -> bool {
        self.lock().delete_last_word(&mut FieldAdapter(field.as_ref()))
    }

    // -- Word completion -----------------------------------------------------

    pub fn word_suggestions(&self, field: Arc<dyn AidoTextField>) -> Vec<String> {
        self.lock().word_suggestions(&FieldAdapter(field.as_ref()))
    }

    pub fn suggest(&self, prefix: String) -> Vec<String> {
        self.lock().suggest(&prefix)
    }

    // -- Clipboard history ---------------------------------------------------

    pub fn clipboard_items(&self) -> Vec<AidoClipboardItem> {
        self.lock()
            .clipboard()
            .items()
            .map(AidoClipboardItem::from)
            .collect()
    }

    pub fn clipboard_add(&self, text: String) -> bool {
        self.lock().clipboard_mut().add(&text)
    }

    /// Primary-clip listener hook.
    pub fn clipboard_changed(&self) -> bool {
        let clip = ClipboardAdapter(self.clipboard.as_ref());
        self.lock().clipboard_mut().on_system_clipboard_changed(&clip)
    }

    /// Pull the current system clip when the panel opens.
    pub fn clipboard_refresh(&self) -> bool {
        let clip = ClipboardAdapter(self.clipboard.as_ref());
        self.lock().clipboard_mut().refresh_from_system(&clip)
    }

    pub fn clipboard_delete(&self, index: u32) -> bool {
        self.lock().clipboard_mut().delete(index as usize)
    }

    pub fn clipboard_clear(&self) {
        self.lock().clipboard_mut().clear();
    }

    // -- Preprompts ----------------------------------------------------------

    pub fn preprompts(&self) -> Vec<AidoPreprompt> {
        self.lock()
            .registry()
            .entries()
            .iter()
            .cloned()
            .map(AidoPreprompt::from)
            .collect()
    }

    pub fn add_preprompt(&self, preprompt: AidoPreprompt) -> Result<(), AidoError> {
        Ok(self.lock().add_preprompt(preprompt.into_core())?)
    }

    pub fn update_preprompt(
        &self,
        old_trigger: String,
        preprompt: AidoPreprompt,
    ) -> Result<(), AidoError> {
        Ok(self
            .lock()
            .update_preprompt(&old_trigger, preprompt.into_core())?)
    }

    pub fn delete_preprompt(&self, trigger: String) -> Result<AidoPreprompt, AidoError> {
        Ok(self.lock().delete_preprompt(&trigger)?.into())
    }

    pub fn reorder_preprompts(&self, from: u32, to: u32) -> Result<(), AidoError> {
        Ok(self.lock().reorder_preprompts(index(from), index(to))?)
    }

    pub fn reset_preprompts(&self) {
        self.lock().reset_preprompts();
    }

    /// Triggers shown by the `@all` menu, in display order.
    pub fn menu_items(&self) -> Vec<String> {
        let s = self.lock();
        let special = s.config().special_triggers();
        s.registry().menu(&special)
    }

    pub fn set_menu_order(&self, order: Vec<String>) {
        self.lock().set_menu_order(order);
    }

    /// Replace the library with an exported file. Returns the number imported.
    pub fn import_preprompts(&self, json: String) -> Result<u32, AidoError> {
        let n = self.lock().import_preprompts(&json)?;
        Ok(u32::try_from(n).unwrap_or(u32::MAX))
    }

    pub fn export_preprompts(&self) -> String {
        export_json(self.lock().registry().entries())
    }

    // -- Text shortcuts ------------------------------------------------------

    pub fn shortcuts(&self) -> Vec<AidoShortcut> {
        self.lock().shortcuts().iter().map(AidoShortcut::from).collect()
    }

    pub fn add_shortcut(&self, trigger: String, replacement: String) -> Result<u64, AidoError> {
        Ok(self.lock().add_shortcut(&trigger, &replacement)?)
    }

    pub fn update_shortcut(&self, shortcut: AidoShortcut) -> Result<bool, AidoError> {
        Ok(self.lock().update_shortcut(shortcut.into())?)
    }

    pub fn remove_shortcut(&self, id: u64) -> bool {
        self.lock().remove_shortcut(id)
    }
}

impl AidoSession {
    fn with_stores(
        stores: SessionStores,
        config: AidoCommandConfig,
        ai: Arc<dyn AidoAiClient>,
        clipboard: Arc<dyn AidoClipboard>,
    ) -> Result<Arc<Self>, AidoError> {
        let worker = AiWorker::new(ai).map_err(|e| AidoError::Internal {
            msg: format!("failed to spawn AI worker: {e}"),
        })?;
        Ok(Arc::new(Self {
            session: Mutex::new(KeyboardSession::new(stores, config.into())),
            worker,
            clipboard,
        }))
    }

    fn lock(&self) -> MutexGuard<'_, KeyboardSession> {
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Hand requests to the worker and translate the action for the host.
    fn dispatch(&self, action: SessionAction) -> AidoAction {
        if let SessionAction::Request(ref req) = action {
            self.worker.submit(req.prompt.clone(), req.generation);
        }
        convert_action(action)
    }
}
