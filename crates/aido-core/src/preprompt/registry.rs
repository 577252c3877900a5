use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::validate::{validate_preprompt, ValidationError};
use super::{default_preprompts, Preprompt};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Trigger {0} already exists")]
    DuplicateTrigger(String),
    #[error("index {index} out of range for {len} preprompts")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no preprompt with trigger {0}")]
    NotFound(String),
}

/// Persisted form of the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot {
    pub preprompts: Vec<Preprompt>,
    /// User-arranged `@all` menu. Empty means "no custom order".
    #[serde(default)]
    pub menu_order: Vec<String>,
}

/// Ordered, trigger-unique collection of preprompts.
///
/// Every mutating method validates first and leaves the registry untouched
/// when it returns an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepromptRegistry {
    entries: Vec<Preprompt>,
    menu_order: Vec<String>,
}

impl Default for PrepromptRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PrepromptRegistry {
    /// Registry holding the built-in defaults.
    pub fn new() -> Self {
        Self {
            entries: default_preprompts().to_vec(),
            menu_order: Vec::new(),
        }
    }

    /// Rebuild from persisted state.
    ///
    /// Entries that fail validation are dropped and only the first entry for
    /// each trigger is kept.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Self {
        let mut entries: Vec<Preprompt> = Vec::with_capacity(snapshot.preprompts.len());
        for p in snapshot.preprompts {
            if let Err(e) = validate_preprompt(&p) {
                warn!(trigger = %p.trigger, error = %e, "dropping invalid stored preprompt");
            } else if entries.iter().any(|q| q.trigger == p.trigger) {
                warn!(trigger = %p.trigger, "dropping duplicate stored preprompt");
            } else {
                entries.push(p);
            }
        }
        Self {
            entries,
            menu_order: snapshot.menu_order,
        }
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            preprompts: self.entries.clone(),
            menu_order: self.menu_order.clone(),
        }
    }

    pub fn entries(&self) -> &[Preprompt] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, trigger: &str) -> Option<&Preprompt> {
        self.entries.iter().find(|p| p.trigger == trigger)
    }

    pub fn contains(&self, trigger: &str) -> bool {
        self.get(trigger).is_some()
    }

    fn position(&self, trigger: &str) -> Option<usize> {
        self.entries.iter().position(|p| p.trigger == trigger)
    }

    pub fn menu_order(&self) -> &[String] {
        &self.menu_order
    }

    /// Append a new preprompt.
    ///
    /// When a custom menu order is in place the trigger is appended to it too.
    pub fn add(&mut self, preprompt: Preprompt) -> Result<(), RegistryError> {
        validate_preprompt(&preprompt)?;
        if self.contains(&preprompt.trigger) {
            return Err(RegistryError::DuplicateTrigger(preprompt.trigger));
        }

        if !self.menu_order.is_empty() && !self.menu_order.contains(&preprompt.trigger) {
            self.menu_order.push(preprompt.trigger.clone());
        }
        debug!(trigger = %preprompt.trigger, "preprompt added");
        self.entries.push(preprompt);
        Ok(())
    }

    /// Replace the entry for `old_trigger` in place.
    ///
    /// The replaced entry's `is_default` flag carries over. A rename is
    /// propagated to the same slot of the menu order.
    pub fn update(&mut self, old_trigger: &str, preprompt: Preprompt) -> Result<(), RegistryError> {
        validate_preprompt(&preprompt)?;
        let index = self
            .position(old_trigger)
            .ok_or_else(|| RegistryError::NotFound(old_trigger.to_string()))?;
        let renamed = preprompt.trigger != old_trigger;
        if renamed && self.contains(&preprompt.trigger) {
            return Err(RegistryError::DuplicateTrigger(preprompt.trigger));
        }

        if renamed {
            for slot in self.menu_order.iter_mut().filter(|t| *t == old_trigger) {
                *slot = preprompt.trigger.clone();
            }
        }
        let is_default = self.entries[index].is_default;
        self.entries[index] = Preprompt {
            is_default,
            ..preprompt
        };
        Ok(())
    }

    pub fn delete(&mut self, trigger: &str) -> Result<Preprompt, RegistryError> {
        let index = self
            .position(trigger)
            .ok_or_else(|| RegistryError::NotFound(trigger.to_string()))?;
        self.menu_order.retain(|t| t != trigger);
        debug!(trigger, "preprompt deleted");
        Ok(self.entries.remove(index))
    }

    /// Move one entry: remove at `from`, insert at `to`.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), RegistryError> {
        let len = self.entries.len();
        for index in [from, to] {
            if index >= len {
                return Err(RegistryError::IndexOutOfRange { index, len });
            }
        }
        let item = self.entries.remove(from);
        self.entries.insert(to, item);
        Ok(())
    }

    /// Discard all customisation and restore the built-in set.
    pub fn reset_to_defaults(&mut self) {
        self.entries = default_preprompts().to_vec();
        self.menu_order.clear();
    }

    /// Replace every entry with an already-validated batch (bulk import).
    ///
    /// The custom menu order is cleared so imported triggers show up in `@all`.
    pub fn replace_all(&mut self, preprompts: Vec<Preprompt>) {
        self.entries = preprompts;
        self.menu_order.clear();
    }

    pub fn set_menu_order(&mut self, order: Vec<String>) {
        self.menu_order = order;
    }

    /// Entries of the `@all` menu.
    ///
    /// `special` lists the enabled special-command triggers in default order.
    /// A custom menu order is filtered down to what is currently available;
    /// without one, special commands come first followed by the registry.
    pub fn menu(&self, special: &[String]) -> Vec<String> {
        if self.menu_order.is_empty() {
            return special
                .iter()
                .cloned()
                .chain(self.entries.iter().map(|p| p.trigger.clone()))
                .collect();
        }
        self.menu_order
            .iter()
            .filter(|t| special.contains(t) || self.contains(t))
            .cloned()
            .collect()
    }
}
