use std::path::Path;

use aido_core::prompt::parse_input;
use aido_core::store::{load_registry, JsonFileStore};

use super::PREPROMPTS_FILE;
use crate::provider::ChatClient;

pub struct AskOptions<'a> {
    pub base_url: &'a str,
    pub model: &'a str,
    pub api_key: &'a str,
    /// Print the prompt instead of sending it.
    pub dry_run: bool,
}

/// Resolve `input` against the preprompt library and send the result.
pub fn ask(dir: &Path, input: &str, opts: &AskOptions) {
    let registry = load_registry(&JsonFileStore::new(dir.join(PREPROMPTS_FILE)));
    let parsed = parse_input(input, registry.entries());
    if !parsed.is_matched() {
        let trigger = parsed.trigger.as_deref().unwrap_or("(none)");
        eprintln!("No preprompt for trigger {trigger}");
        std::process::exit(1);
    }
    if opts.dry_run {
        println!("{}", parsed.final_prompt);
        return;
    }
    if opts.api_key.is_empty() {
        eprintln!("Error: no API key (use --api-key or AIDO_API_KEY)");
        std::process::exit(1);
    }
    let client = ChatClient::new(opts.base_url, opts.api_key, opts.model);
    let reply = die!(client.complete(&parsed.final_prompt), "Error: {}");
    println!("{reply}");
}
