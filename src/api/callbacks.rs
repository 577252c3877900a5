//! Foreign-implemented collaborators and their adapters to the session traits.
//!
//! Kotlin implements these on top of `InputConnection`, `ClipboardManager`
//! and the user's AI provider client.

use aido_session::{SystemClipboard, TextField};

use super::AidoError;

#[uniffi::export(with_foreign)]
pub trait AidoTextField: Send + Sync {
    fn text_before_cursor(&self, n: u32) -> Option<String>;
    fn text_after_cursor(&self, n: u32) -> Option<String>;
    fn replace_all(&self, text: String);
    fn set_selection(&self, pos: u32);
    fn delete_surrounding(&self, before: u32, after: u32);
}

#[uniffi::export(with_foreign)]
pub trait AidoClipboard: Send + Sync {
    fn read(&self) -> Option<String>;
    fn write(&self, text: String);
}

/// Sends one prompt and returns the completion text. Called on the worker thread.
#[uniffi::export(with_foreign)]
pub trait AidoAiClient: Send + Sync {
    fn send(&self, prompt: String) -> Result<String, AidoError>;
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

pub(crate) struct FieldAdapter<'a>(pub &'a dyn AidoTextField);

impl TextField for FieldAdapter<'_> {
    fn text_before_cursor(&self, n: usize) -> Option<String> {
        self.0.text_before_cursor(to_u32(n))
    }

    fn text_after_cursor(&self, n: usize) -> Option<String> {
        self.0.text_after_cursor(to_u32(n))
    }

    fn replace_all(&mut self, text: &str) {
        self.0.replace_all(text.to_string());
    }

    fn set_selection(&mut self, pos: usize) {
        self.0.set_selection(to_u32(pos));
    }

    fn delete_surrounding(&mut self, before: usize, after: usize) {
        self.0.delete_surrounding(to_u32(before), to_u32(after));
    }
}

pub(crate) struct ClipboardAdapter<'a>(pub &'a dyn AidoClipboard);

impl SystemClipboard for ClipboardAdapter<'_> {
    fn read(&self) -> Option<String> {
        self.0.read()
    }

    fn write(&self, text: &str) {
        self.0.write(text.to_string());
    }
}
