//! Inline trigger token detection.
//!
//! A trigger is one symbol from [`TRIGGER_SYMBOLS`] followed by one or more
//! word characters (ASCII letters, digits, underscore). Tokens are found
//! left to right without overlap, each extending as far as the word run goes.

/// Symbols that may introduce a trigger.
pub const TRIGGER_SYMBOLS: &str = "`~!@#$%^&*()-_=+[]{}\\|;:'\",<.>/?";

pub fn is_trigger_symbol(c: char) -> bool {
    TRIGGER_SYMBOLS.contains(c)
}

/// Word characters allowed after the symbol. ASCII only.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A trigger occurrence inside a buffer. `start..end` are byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerMatch<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Iterator over all non-overlapping trigger tokens in a string.
pub struct TriggerMatches<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Iterator for TriggerMatches<'a> {
    type Item = TriggerMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() {
            let rest = &self.input[self.pos..];
            let mut chars = rest.char_indices();
            let (_, first) = chars.next()?;
            let start = self.pos;

            if !is_trigger_symbol(first) {
                self.pos += first.len_utf8();
                continue;
            }

            // Byte length of the word run after the symbol.
            let sym_len = first.len_utf8();
            let tail_len = rest[sym_len..]
                .find(|c: char| !is_word_char(c))
                .unwrap_or(rest.len() - sym_len);

            if tail_len == 0 {
                self.pos += sym_len;
                continue;
            }

            let end = start + sym_len + tail_len;
            self.pos = end;
            return Some(TriggerMatch {
                text: &self.input[start..end],
                start,
                end,
            });
        }
        None
    }
}

pub fn find_triggers(input: &str) -> TriggerMatches<'_> {
    TriggerMatches { input, pos: 0 }
}

/// Return the last (rightmost) trigger token in `input`.
pub fn extract_trigger(input: &str) -> Option<&str> {
    find_triggers(input).last().map(|m| m.text)
}

/// Remove the extracted trigger from `input` and trim surrounding whitespace.
///
/// Only the first textual occurrence of the trigger string is removed, which
/// is not necessarily the occurrence that was matched when the same text
/// appears earlier in the buffer.
pub fn remove_trigger(input: &str) -> String {
    match extract_trigger(input) {
        Some(trigger) => input.replacen(trigger, "", 1).trim().to_string(),
        None => input.trim().to_string(),
    }
}

/// Whether `trigger` is a single well-formed trigger token.
pub fn is_trigger_token(trigger: &str) -> bool {
    let mut chars = trigger.chars();
    match chars.next() {
        Some(c) if is_trigger_symbol(c) => {}
        _ => return false,
    }
    let tail = chars.as_str();
    !tail.is_empty() && tail.chars().all(is_word_char)
}


#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use super::*;

    /// Text that can never contain a trigger: letters, digits and spaces only.
    fn plain_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ]{0,40}"
    }

    fn token() -> impl Strategy<Value = String> {
        (
            prop::sample::select(TRIGGER_SYMBOLS.chars().collect::<Vec<_>>()),
            "[a-zA-Z0-9_]{1,10}",
        )
            .prop_map(|(sym, tail)| format!("{sym}{tail}"))
    }

    proptest! {
        #[test]
        fn no_symbol_means_no_trigger(s in plain_text()) {
            prop_assert_eq!(extract_trigger(&s), None);
            prop_assert_eq!(remove_trigger(&s), s.trim());
        }

        #[test]
        fn single_token_is_extracted_and_removed(
            before in plain_text(),
            tok in token(),
            after in plain_text(),
        ) {
            // Spaces keep the token from fusing with neighbouring word characters.
            let s = format!("{before} {tok} {after}");
            prop_assert_eq!(extract_trigger(&s), Some(tok.as_str()));
            let expected = format!("{before}  {after}");
            prop_assert_eq!(remove_trigger(&s), expected.trim());
        }

        #[test]
        fn rightmost_token_wins(
            toks in prop::collection::vec(token(), 2..5),
            filler in "[a-z ]{0,8}",
        ) {
            let s = toks.join(&format!(" {filler} "));
            prop_assert_eq!(extract_trigger(&s), toks.last().map(|t| t.as_str()));
        }
    }
}
