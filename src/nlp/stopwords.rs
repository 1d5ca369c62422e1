//! Stopword filtering
//!
//! This module provides order-preserving stopword removal backed by the
//! `stop-words` crate for the built-in English list, with support for
//! custom vocabularies loaded from lexicon definitions.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from a token stream.
///
/// Entries are stored lowercase; lookups fold case so that callers may
/// probe with raw text. Filtering never reorders the surviving tokens.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase).
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a filter loaded with the built-in English stopword list.
    pub fn english() -> Self {
        let stopwords = get(LANGUAGE::English).iter().map(|s| s.to_string()).collect();
        Self { stopwords }
    }

    /// Create an empty stopword filter (no filtering).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter.
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: impl IntoIterator<Item = S>) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        // Tokens reaching the pipeline are already folded; only fall back
        // to an allocation when the probe carries uppercase.
        if word.chars().any(char::is_uppercase) {
            return self.stopwords.contains(&word.to_lowercase());
        }
        false
    }

    /// Remove stopwords from a token slice, preserving the relative
    /// order (and duplicates) of the survivors.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| !self.is_stopword(t))
            .map(String::from)
            .collect()
    }

    /// In-place variant of [`filter`](Self::filter) that reuses the
    /// input allocation.
    pub fn filter_owned(&self, mut tokens: Vec<String>) -> Vec<String> {
        tokens.retain(|t| !self.is_stopword(t));
        tokens
    }

    /// Get the number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

impl FromIterator<String> for StopwordFilter {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let stopwords = iter.into_iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }
}
