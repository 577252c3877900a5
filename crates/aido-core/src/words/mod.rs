//! Prefix completion over a fixed list of common words.

mod list;

use tracing::debug_span;

use crate::settings::settings;

/// The built-in English list, most frequent first.
pub fn builtin_words() -> &'static [&'static str] {
    list::WORDS
}

/// Read-only word list ranked by position.
///
/// Position doubles as frequency: entries are grouped into tiers of
/// `tier_size` consecutive words, and tier order dominates the ranking.
#[derive(Debug, Clone, Copy)]
pub struct WordIndex<'a> {
    words: &'a [&'a str],
    tier_size: usize,
}

impl WordIndex<'static> {
    /// The built-in English list with the configured tier size.
    pub fn builtin() -> Self {
        Self::new(list::WORDS, settings().suggestions.tier_size)
    }
}

impl<'a> WordIndex<'a> {
    pub fn new(words: &'a [&'a str], tier_size: usize) -> Self {
        Self {
            words,
            tier_size: tier_size.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Position-tagged completions of `prefix`, in list order.
    fn completions(&self, prefix: &str) -> Option<(String, Vec<(usize, &'a str)>)> {
        if prefix.trim().is_empty() {
            return None;
        }
        let prefix = prefix.trim().to_lowercase();
        let matches = self
            .words
            .iter()
            .enumerate()
            .filter(|(_, w)| w.starts_with(prefix.as_str()) && **w != prefix)
            .map(|(i, w)| (i, *w))
            .collect();
        Some((prefix, matches))
    }

    /// Completions ranked by frequency tier, then by how few characters
    /// they add to the prefix.
    pub fn smart_suggestions(&self, prefix: &str, max_results: usize) -> Vec<&'a str> {
        let _span = debug_span!("smart_suggestions", prefix).entered();
        let Some((prefix, mut matches)) = self.completions(prefix) else {
            return Vec::new();
        };
        let tier = self.tier_size;
        // Stable sort keeps list order within equal keys.
        matches.sort_by_key(|(i, w)| (i / tier, w.len() - prefix.len()));
        matches
            .into_iter()
            .take(max_results)
            .map(|(_, w)| w)
            .collect()
    }

    /// Completions ranked shortest first, then alphabetically.
    pub fn suggestions(&self, prefix: &str, max_results: usize) -> Vec<&'a str> {
        let Some((_, matches)) = self.completions(prefix) else {
            return Vec::new();
        };
        let mut words: Vec<&'a str> = matches.into_iter().map(|(_, w)| w).collect();
        words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        words.truncate(max_results);
        words
    }

    pub fn contains_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.iter().any(|w| *w == word)
    }
}
