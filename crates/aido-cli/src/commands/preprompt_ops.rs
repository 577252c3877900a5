use std::fs;
use std::path::Path;

use aido_core::command::CommandConfig;
use aido_core::preprompt::{export_json, import_json, Preprompt, PrepromptRegistry};
use aido_core::settings::settings;
use aido_core::store::{load_registry, JsonFileStore, PrepromptStore};

use super::PREPROMPTS_FILE;
use crate::table::{column_width, pad, preview};

fn store(dir: &Path) -> JsonFileStore {
    JsonFileStore::new(dir.join(PREPROMPTS_FILE))
}

fn open(dir: &Path) -> PrepromptRegistry {
    load_registry(&store(dir))
}

fn save(dir: &Path, registry: &PrepromptRegistry) {
    let store = store(dir);
    die!(
        PrepromptStore::save(&store, &registry.snapshot()),
        "Error saving {}: {}",
        store.path().display()
    );
}

pub fn list(dir: &Path, verbose: bool) {
    let registry = open(dir);
    if registry.is_empty() {
        println!("(empty)");
        return;
    }
    let width = column_width(registry.entries().iter().map(|p| p.trigger.as_str()));
    for (i, p) in registry.entries().iter().enumerate() {
        let mark = if p.is_default { "*" } else { " " };
        println!(
            "{i:>3} {mark} {}  {}",
            pad(&p.trigger, width),
            preview(&p.instruction, 60)
        );
        if verbose && !p.example.is_empty() {
            println!("        e.g. {}", p.example);
        }
    }
    println!("---");
    println!("{} preprompts (* = built-in)", registry.len());
}

pub fn add(dir: &Path, trigger: &str, instruction: &str, example: &str) {
    let mut registry = open(dir);
    let p = Preprompt::new(trigger, instruction, example);
    let trigger = p.trigger.clone();
    die!(registry.add(p), "Error: {}");
    save(dir, &registry);
    println!("Added: {trigger}");
}

pub fn update(
    dir: &Path,
    old_trigger: &str,
    trigger: Option<&str>,
    instruction: Option<&str>,
    example: Option<&str>,
) {
    let mut registry = open(dir);
    let Some(current) = registry.get(old_trigger).cloned() else {
        eprintln!("Not found: {old_trigger}");
        std::process::exit(1);
    };
    let p = Preprompt::new(
        trigger.unwrap_or(&current.trigger),
        instruction.unwrap_or(&current.instruction),
        example.unwrap_or(&current.example),
    );
    let new_trigger = p.trigger.clone();
    die!(registry.update(old_trigger, p), "Error: {}");
    save(dir, &registry);
    if new_trigger == old_trigger {
        println!("Updated: {new_trigger}");
    } else {
        println!("Updated: {old_trigger} → {new_trigger}");
    }
}

pub fn delete(dir: &Path, trigger: &str) {
    let mut registry = open(dir);
    let removed = die!(registry.delete(trigger), "Error: {}");
    save(dir, &registry);
    println!("Deleted: {}", removed.trigger);
}

pub fn reorder(dir: &Path, from: usize, to: usize) {
    let mut registry = open(dir);
    die!(registry.reorder(from, to), "Error: {}");
    save(dir, &registry);
    println!("Moved {from} → {to}");
}

pub fn reset(dir: &Path) {
    let mut registry = open(dir);
    registry.reset_to_defaults();
    save(dir, &registry);
    println!("Restored {} built-in preprompts", registry.len());
}

pub fn import(dir: &Path, file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let imported = die!(
        import_json(&content, &settings().import.required_prefix),
        "Error: {}"
    );
    let mut registry = open(dir);
    let count = imported.len();
    registry.replace_all(imported);
    save(dir, &registry);
    println!("Imported {count} preprompts");
}

pub fn export(dir: &Path, output: Option<&str>) {
    let registry = open(dir);
    let json = export_json(registry.entries());
    match output {
        Some(path) => {
            die!(fs::write(path, &json), "Error writing {path}: {}");
            println!("Exported {} preprompts to {path}", registry.len());
        }
        None => println!("{json}"),
    }
}

/// Print the `@all` menu, or store a new order when `order` is given.
pub fn menu(dir: &Path, order: &[String], with_specials: bool) {
    let mut registry = open(dir);
    if !order.is_empty() {
        registry.set_menu_order(order.to_vec());
        save(dir, &registry);
    }
    let config = if with_specials {
        CommandConfig {
            smart_reply_enabled: true,
            tone_rewrite_enabled: true,
            search_enabled: true,
            ..CommandConfig::default()
        }
    } else {
        CommandConfig::default()
    };
    for trigger in registry.menu(&config.special_triggers()) {
        println!("{trigger}");
    }
}
