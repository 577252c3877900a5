use crate::trigger::{is_trigger_symbol, is_word_char};

use super::Preprompt;

/// Why a preprompt was rejected. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Trigger cannot be empty")]
    EmptyTrigger,
    #[error("Trigger must start with a symbol (e.g., @, ~, !, /, #)")]
    MissingSymbol,
    #[error("After symbol, only letters/numbers allowed")]
    InvalidTail,
    #[error("Instruction cannot be empty")]
    EmptyInstruction,
}

pub fn validate_trigger(trigger: &str) -> Result<(), ValidationError> {
    let mut chars = trigger.chars();
    let Some(first) = chars.next() else {
        return Err(ValidationError::EmptyTrigger);
    };
    let tail = chars.as_str();
    if tail.is_empty() || !is_trigger_symbol(first) {
        return Err(ValidationError::MissingSymbol);
    }
    if !tail.chars().all(is_word_char) {
        return Err(ValidationError::InvalidTail);
    }
    Ok(())
}

pub fn validate_preprompt(p: &Preprompt) -> Result<(), ValidationError> {
    validate_trigger(&p.trigger)?;
    if p.instruction.trim().is_empty() {
        return Err(ValidationError::EmptyInstruction);
    }
    Ok(())
}
