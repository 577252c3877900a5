use std::path::Path;

use aido_core::command::{classify, Command, CommandConfig};
use aido_core::prompt::parse_input;
use aido_core::store::{load_registry, JsonFileStore};
use aido_core::trigger::find_triggers;
use aido_core::words::WordIndex;

use super::PREPROMPTS_FILE;

/// Show how the keyboard would read `input`.
pub fn parse(dir: &Path, input: &str, all_commands: bool) {
    let registry = load_registry(&JsonFileStore::new(dir.join(PREPROMPTS_FILE)));

    let triggers: Vec<&str> = find_triggers(input).map(|m| m.text).collect();
    if triggers.is_empty() {
        println!("triggers:  (none)");
    } else {
        println!("triggers:  {}", triggers.join(" "));
    }

    let parsed = parse_input(input, registry.entries());
    println!("trigger:   {}", parsed.trigger.as_deref().unwrap_or("(none)"));
    println!("clean:     {:?}", parsed.clean_text);
    match &parsed.matched {
        Some(p) => println!("matched:   {}", p.trigger),
        None => println!("matched:   (no)"),
    }
    println!("prompt:    {:?}", parsed.final_prompt);

    let config = if all_commands {
        CommandConfig {
            smart_reply_enabled: true,
            tone_rewrite_enabled: true,
            all_menu_enabled: true,
            search_enabled: true,
            toggle_enabled: true,
            ..CommandConfig::default()
        }
    } else {
        CommandConfig::default()
    };
    println!("command:   {}", describe(&classify(input, &config, &registry)));
}

fn describe(cmd: &Command) -> String {
    match cmd {
        Command::None => "none".to_string(),
        Command::Toggle { on, cleaned } => {
            format!("toggle {} → {cleaned:?}", if *on { "on" } else { "off" })
        }
        Command::Paused => "paused".to_string(),
        Command::SmartReply => "smart reply".to_string(),
        Command::ToneRewrite { text } => format!("tone rewrite of {text:?}"),
        Command::AllMenu { triggers } => format!("menu [{}]", triggers.join(", ")),
        Command::Search { query } => format!("search {query:?}"),
        Command::MissingText { trigger } => format!("missing text before {trigger}"),
        Command::Prompt(p) => format!("prompt via {}", p.trigger.as_deref().unwrap_or("?")),
    }
}

pub fn suggest(prefix: &str, n: usize, plain: bool) {
    let index = WordIndex::builtin();
    let words = if plain {
        index.suggestions(prefix, n)
    } else {
        index.smart_suggestions(prefix, n)
    };
    if words.is_empty() {
        println!("(no suggestions)");
        return;
    }
    for w in words {
        println!("{w}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe(&Command::None), "none");
        assert_eq!(
            describe(&Command::Toggle {
                on: false,
                cleaned: "hi".to_string()
            }),
            "toggle off → \"hi\""
        );
        assert_eq!(
            describe(&Command::MissingText {
                trigger: "@tone".to_string()
            }),
            "missing text before @tone"
        );
    }
}
