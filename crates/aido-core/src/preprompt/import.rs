use std::collections::HashMap;

use tracing::debug;

use super::validate::validate_preprompt;
use super::Preprompt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("File format not supported: {0}")]
    Parse(String),
    #[error("No prompts found in file")]
    Empty,
    #[error("Invalid prompt data for {}", display_trigger(.trigger))]
    Invalid { trigger: String },
    #[error("Duplicate triggers found: {}", .0.join(", "))]
    Duplicates(Vec<String>),
}

fn display_trigger(trigger: &str) -> &str {
    if trigger.trim().is_empty() {
        "(blank trigger)"
    } else {
        trigger
    }
}

/// Parse and validate an exported preprompt file.
///
/// The whole batch is rejected on the first problem; nothing is partially
/// accepted. Every trigger must start with `required_prefix` on top of the
/// usual trigger rules.
pub fn import_json(json: &str, required_prefix: &str) -> Result<Vec<Preprompt>, ImportError> {
    let imported: Option<Vec<Preprompt>> =
        serde_json::from_str(json).map_err(|e| ImportError::Parse(e.to_string()))?;
    let imported = imported.ok_or_else(|| ImportError::Parse("null document".to_string()))?;

    if imported.is_empty() {
        return Err(ImportError::Empty);
    }

    if let Some(bad) = imported.iter().find(|p| {
        !p.trigger.starts_with(required_prefix) || validate_preprompt(p).is_err()
    }) {
        return Err(ImportError::Invalid {
            trigger: bad.trigger.clone(),
        });
    }

    // Duplicates are reported in first-seen order.
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for p in &imported {
        let n = counts.entry(p.trigger.as_str()).or_insert(0);
        if *n == 0 {
            order.push(p.trigger.as_str());
        }
        *n += 1;
    }
    let duplicates: Vec<String> = order
        .into_iter()
        .filter(|t| counts[t] > 1)
        .map(str::to_string)
        .collect();
    if !duplicates.is_empty() {
        return Err(ImportError::Duplicates(duplicates));
    }

    debug!(count = imported.len(), "preprompts imported");
    Ok(imported)
}

/// Pretty JSON array in the format [`import_json`] accepts.
pub fn export_json(preprompts: &[Preprompt]) -> String {
    // Serialising plain strings and bools into a Vec cannot fail.
    serde_json::to_string_pretty(preprompts).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_app_export_shape() {
        let json = r#"[
            {"trigger": "@fixg", "instruction": "Fix grammar.", "example": "", "isDefault": true},
            {"trigger": "@mine", "instruction": "Do my thing."}
        ]"#;
        let got = import_json(json, "@").unwrap();
        assert_eq!(got.len(), 2);
        assert!(got[0].is_default);
        assert_eq!(got[1].example, "");
        assert!(!got[1].is_default);
    }

    #[test]
    fn rejects_non_json() {
        assert!(matches!(import_json("not json", "@"), Err(ImportError::Parse(_))));
        assert!(matches!(import_json("null", "@"), Err(ImportError::Parse(_))));
    }

    #[test]
    fn rejects_empty_list() {
        let err = import_json("[]", "@").unwrap_err();
        assert_eq!(err.to_string(), "No prompts found in file");
    }

    #[test]
    fn rejects_wrong_prefix() {
        let json = r#"[{"trigger": "~x", "instruction": "ok"}]"#;
        let err = import_json(json, "@").unwrap_err();
        assert_eq!(err.to_string(), "Invalid prompt data for ~x");
    }

    #[test]
    fn rejects_blank_trigger_with_label() {
        let json = r#"[{"trigger": "  ", "instruction": "ok"}]"#;
        let err = import_json(json, "@").unwrap_err();
        assert_eq!(err.to_string(), "Invalid prompt data for (blank trigger)");
    }

    #[test]
    fn rejects_blank_instruction() {
        let json = r#"[{"trigger": "@a", "instruction": " "}]"#;
        assert_eq!(
            import_json(json, "@"),
            Err(ImportError::Invalid {
                trigger: "@a".to_string()
            })
        );
    }

    #[test]
    fn reports_every_duplicate() {
        let json = r#"[
            {"trigger": "@b", "instruction": "1"},
            {"trigger": "@a", "instruction": "2"},
            {"trigger": "@b", "instruction": "3"},
            {"trigger": "@a", "instruction": "4"},
            {"trigger": "@c", "instruction": "5"}
        ]"#;
        let err = import_json(json, "@").unwrap_err();
        assert_eq!(err.to_string(), "Duplicate triggers found: @b, @a");
    }

    #[test]
    fn export_then_import() {
        let list = vec![
            Preprompt::new("@one", "First", "ex"),
            Preprompt::new("@two", "Second", ""),
        ];
        let json = export_json(&list);
        assert!(json.contains("\"isDefault\": false"));
        assert_eq!(import_json(&json, "@").unwrap(), list);
    }
}
