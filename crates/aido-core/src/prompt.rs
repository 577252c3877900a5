//! Prompt construction from typed text and the preprompt library.

use tracing::debug;

use crate::preprompt::Preprompt;
use crate::trigger::{extract_trigger, remove_trigger};

pub const DEFAULT_SMART_REPLY_INSTRUCTIONS: &str = "\
The user is typing a reply in a messaging app.

CRITICAL LANGUAGE DETECTION:
1. Look at the MOST RECENT messages in the conversation (ignore app UI text)
2. Detect the exact language used in the last 2-3 messages
3. The MOST RECENT message has the HIGHEST priority for language detection
4. Common languages: English, Bengali (বাংলা), Hindi (हिन्दी)

CRITICAL LANGUAGE MATCHING:
1. Generate replies in the EXACT SAME language as the most recent messages
2. If the recent messages are in English, reply ONLY in English
3. If the recent messages are in Bengali, reply ONLY in Bengali
4. If the recent messages are in Hindi, reply ONLY in Hindi
5. DO NOT change language or mix languages
6. DO NOT default to any particular language - match what you see

Based on the conversation context, suggest 6 short, natural, and contextually relevant replies.
Output ONLY the replies, one per line. Do not include numbering or quotes.";

pub const DEFAULT_TONE_REWRITE_INSTRUCTIONS: &str = "\
CRITICAL LANGUAGE INSTRUCTION:
1. First, identify the language of the original text above
2. Rewrite ONLY in that exact same language
3. If original is in Bengali, rewrite in Bengali
4. If original is in English, rewrite in English
5. If original is in Hindi, rewrite in Hindi
6. DO NOT change the language or default to Hindi/English

Rewrite the above text in 6 different tones:
1. Professional
2. Casual/Friendly
3. Witty/Creative
4. Empathetic/Supportive
5. Confident/Assertive
6. Polite/Formal

Output ONLY the rewritten versions, one per line. Do not include numbering or labels.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub original_input: String,
    pub trigger: Option<String>,
    pub clean_text: String,
    pub matched: Option<Preprompt>,
    pub final_prompt: String,
}

impl ParseResult {
    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }
}

pub fn build_final_prompt(text: &str, preprompt: Option<&Preprompt>) -> String {
    match preprompt {
        Some(p) => format!("{} {}", p.instruction, text),
        None => text.to_string(),
    }
}

/// Extract the trailing trigger, strip it, and resolve it against `preprompts`.
pub fn parse_input(input: &str, preprompts: &[Preprompt]) -> ParseResult {
    let trigger = extract_trigger(input);
    let clean_text = remove_trigger(input);
    let matched = trigger.and_then(|t| preprompts.iter().find(|p| p.trigger == t));
    let final_prompt = build_final_prompt(&clean_text, matched);

    debug!(
        trigger = trigger.unwrap_or(""),
        matched = matched.is_some(),
        "parsed input"
    );

    ParseResult {
        original_input: input.to_string(),
        trigger: trigger.map(str::to_string),
        clean_text,
        matched: matched.cloned(),
        final_prompt,
    }
}

fn or_default<'a>(custom: &'a str, default: &'a str) -> &'a str {
    if custom.is_empty() {
        default
    } else {
        custom
    }
}

/// Prompt asking for reply suggestions given the visible conversation.
pub fn smart_reply_prompt(context: &str, custom_instructions: &str) -> String {
    let instructions = or_default(custom_instructions, DEFAULT_SMART_REPLY_INSTRUCTIONS);
    format!("Context from screen:\n{context}\n\n{instructions}")
}

/// Prompt asking for the same text rewritten in several tones.
pub fn tone_rewrite_prompt(text: &str, custom_instructions: &str) -> String {
    let instructions = or_default(custom_instructions, DEFAULT_TONE_REWRITE_INSTRUCTIONS);
    format!("Original text: \"{text}\"\n\n{instructions}")
}

/// Split a multi-line model response into suggestion strings.
pub fn parse_suggestions(response: &str, max: usize) -> Vec<String> {
    response
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let s = line.trim();
            let s = s.strip_prefix("- ").unwrap_or(s);
            let s = s.strip_prefix('"').unwrap_or(s);
            let s = s.strip_suffix('"').unwrap_or(s);
            s.to_string()
        })
        .take(max)
        .collect()
}
