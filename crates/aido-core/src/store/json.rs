use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{PrepromptStore, ShortcutStore, StoreError};
use crate::preprompt::RegistrySnapshot;
use crate::shortcuts::TextShortcut;

/// A single JSON document on disk.
///
/// Use one instance per file; the same type backs both preprompts and
/// shortcuts.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` if the file does not exist.
    fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StoreError::Format(e.to_string()))
    }

    /// Atomic write: write to .tmp then rename.
    fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(value).map_err(|e| StoreError::Format(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PrepromptStore for JsonFileStore {
    fn load(&self) -> Result<Option<RegistrySnapshot>, StoreError> {
        self.read()
    }

    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), StoreError> {
        self.write(snapshot)
    }
}

impl ShortcutStore for JsonFileStore {
    fn load(&self) -> Result<Vec<TextShortcut>, StoreError> {
        Ok(self.read()?.unwrap_or_default())
    }

    fn save(&self, items: &[TextShortcut]) -> Result<(), StoreError> {
        self.write(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprompt::{Preprompt, PrepromptRegistry};
    use crate::store::load_registry;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("preprompts.json"));
        assert!(PrepromptStore::load(&store).unwrap().is_none());
        assert!(ShortcutStore::load(&store).unwrap().is_empty());
    }

    #[test]
    fn preprompts_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/preprompts.json"));

        let mut reg = PrepromptRegistry::new();
        reg.add(Preprompt::new("@mine", "Do it.", "")).unwrap();
        reg.set_menu_order(vec!["@mine".to_string()]);
        PrepromptStore::save(&store, &reg.snapshot()).unwrap();

        assert!(!store.path().with_extension("tmp").exists());
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"isDefault\""));
        assert!(raw.contains("\"menuOrder\""));

        assert_eq!(load_registry(&store), reg);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preprompts.json");
        fs::write(&path, b"{ not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(
            PrepromptStore::load(&store),
            Err(StoreError::Format(_))
        ));
        assert_eq!(load_registry(&store), PrepromptRegistry::new());
    }

    #[test]
    fn hand_edited_file_loads_unique_valid_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preprompts.json");
        let entry = |t: &str, i: &str| {
            format!(r#"{{"trigger":"{t}","instruction":"{i}","example":"","isDefault":false}}"#)
        };
        let raw = format!(
            r#"{{"preprompts":[{},{},{},{}],"menuOrder":[]}}"#,
            entry("@dup", "first"),
            entry("@dup", "second"),
            entry("nosymbol", "bad trigger"),
            entry("@blank", " "),
        );
        fs::write(&path, raw).unwrap();

        let reg = load_registry(&JsonFileStore::new(&path));
        let triggers: Vec<&str> = reg.entries().iter().map(|p| p.trigger.as_str()).collect();
        assert_eq!(triggers, vec!["@dup"]);
        assert_eq!(reg.entries()[0].instruction, "first");
    }

    #[test]
    fn shortcuts_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("shortcuts.json"));
        let items = vec![TextShortcut {
            id: 3,
            trigger: "!sig".to_string(),
            replacement: "Best,\nMe".to_string(),
        }];
        ShortcutStore::save(&store, &items).unwrap();
        assert_eq!(ShortcutStore::load(&store).unwrap(), items);
    }
}
