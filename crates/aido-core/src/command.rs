//! Special commands recognised ahead of the preprompt lookup.

use tracing::debug;

use crate::preprompt::PrepromptRegistry;
use crate::prompt::{parse_input, ParseResult};
use crate::settings::settings;

/// Per-user command toggles and triggers, owned by the host app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConfig {
    pub smart_reply_enabled: bool,
    pub tone_rewrite_enabled: bool,
    pub all_menu_enabled: bool,
    pub search_enabled: bool,
    /// `@on` / `@off` handling.
    pub toggle_enabled: bool,
    /// Current app state when toggling is enabled.
    pub app_on: bool,
    pub smart_reply_trigger: String,
    pub tone_rewrite_trigger: String,
    pub search_trigger: String,
    pub smart_reply_prompt: String,
    pub tone_rewrite_prompt: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        let c = &settings().commands;
        Self {
            smart_reply_enabled: false,
            tone_rewrite_enabled: false,
            all_menu_enabled: false,
            search_enabled: false,
            toggle_enabled: false,
            app_on: true,
            smart_reply_trigger: c.smart_reply_trigger.clone(),
            tone_rewrite_trigger: c.tone_rewrite_trigger.clone(),
            search_trigger: c.search_trigger.clone(),
            smart_reply_prompt: String::new(),
            tone_rewrite_prompt: String::new(),
        }
    }
}

impl CommandConfig {
    /// Enabled special-command triggers in default menu order.
    pub fn special_triggers(&self) -> Vec<String> {
        [
            (self.smart_reply_enabled, &self.smart_reply_trigger),
            (self.tone_rewrite_enabled, &self.tone_rewrite_trigger),
            (self.search_enabled, &self.search_trigger),
        ]
        .into_iter()
        .filter(|(on, t)| *on && !t.trim().is_empty())
        .map(|(_, t)| t.clone())
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Nothing to do for this text.
    None,
    /// App switched on or off; `cleaned` is the text with the toggle token removed.
    Toggle { on: bool, cleaned: String },
    /// App is toggled off.
    Paused,
    SmartReply,
    ToneRewrite { text: String },
    AllMenu { triggers: Vec<String> },
    Search { query: String },
    /// A special command was typed with nothing before it.
    MissingText { trigger: String },
    Prompt(ParseResult),
}

/// Decide what the current field text asks for.
pub fn classify(text: &str, config: &CommandConfig, registry: &PrepromptRegistry) -> Command {
    let _span = tracing::debug_span!("classify").entered();
    let cmd = classify_inner(text, config, registry);
    debug!(?cmd, "classified");
    cmd
}

fn classify_inner(text: &str, config: &CommandConfig, registry: &PrepromptRegistry) -> Command {
    let commands = &settings().commands;

    if config.toggle_enabled {
        if contains_ignore_case(text, &commands.toggle_off) {
            return Command::Toggle {
                on: false,
                cleaned: remove_ignore_case(text, &commands.toggle_off),
            };
        }
        if contains_ignore_case(text, &commands.toggle_on) {
            return Command::Toggle {
                on: true,
                cleaned: remove_ignore_case(text, &commands.toggle_on),
            };
        }
        if !config.app_on {
            return Command::Paused;
        }
    }

    let trimmed = text.trim();

    if ends_with_trigger(trimmed, &config.smart_reply_trigger) {
        return if config.smart_reply_enabled {
            Command::SmartReply
        } else {
            Command::None
        };
    }

    if ends_with_trigger(trimmed, &config.tone_rewrite_trigger) {
        if !config.tone_rewrite_enabled {
            return Command::None;
        }
        return match text_before_last(text, &config.tone_rewrite_trigger) {
            Some(text) => Command::ToneRewrite { text },
            None => Command::MissingText {
                trigger: config.tone_rewrite_trigger.clone(),
            },
        };
    }

    if ends_with_trigger(trimmed, &commands.all_trigger) {
        if !config.all_menu_enabled {
            return Command::None;
        }
        return Command::AllMenu {
            triggers: registry.menu(&config.special_triggers()),
        };
    }

    if ends_with_trigger(trimmed, &config.search_trigger) {
        if !config.search_enabled {
            return Command::None;
        }
        return match text_before_last(text, &config.search_trigger) {
            Some(query) => Command::Search { query },
            None => Command::MissingText {
                trigger: config.search_trigger.clone(),
            },
        };
    }

    let parsed = parse_input(text, registry.entries());
    if parsed.is_matched() {
        Command::Prompt(parsed)
    } else {
        Command::None
    }
}

/// Blank triggers never match; a host config may leave one empty.
fn ends_with_trigger(text: &str, trigger: &str) -> bool {
    !trigger.trim().is_empty() && text.ends_with(trigger)
}

/// Trimmed text preceding the last occurrence of `trigger`, if non-empty.
fn text_before_last(text: &str, trigger: &str) -> Option<String> {
    let before = match text.rfind(trigger) {
        Some(i) => &text[..i],
        None => text,
    };
    let before = before.trim();
    (!before.is_empty()).then(|| before.to_string())
}

fn contains_ignore_case(text: &str, token: &str) -> bool {
    text.to_ascii_lowercase()
        .contains(&token.to_ascii_lowercase())
}

/// Remove every ASCII-case-insensitive occurrence of `token`, then trim.
fn remove_ignore_case(text: &str, token: &str) -> String {
    if token.is_empty() {
        return text.trim().to_string();
    }
    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();
    let needle = token.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (i, _) in lower.match_indices(&needle) {
        out.push_str(&text[last..i]);
        last = i + needle.len();
    }
    out.push_str(&text[last..]);
    out.trim().to_string()
}
