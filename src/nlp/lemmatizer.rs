//! Dictionary-form lemmatization
//!
//! Reduces an inflected word to its dictionary base form for a given
//! part of speech, in the style of WordNet's morphy procedure:
//! irregular forms come from per-tag exception tables, regular
//! inflections from ordered suffix-detachment rules whose candidates
//! are checked against a base-form dictionary. A word that matches
//! nothing is returned unchanged, so out-of-vocabulary input passes
//! through as a no-op rather than being mangled.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::nlp::tagger::{
    CORE_ADJECTIVES, CORE_ADVERBS, CORE_NOUNS, CORE_VERBS, IRREGULAR_ADJECTIVES,
    IRREGULAR_ADVERBS, IRREGULAR_NOUNS, IRREGULAR_VERBS,
};
use crate::types::PosTag;

/// Reduces a word to its dictionary base form for a part of speech.
///
/// Implementations must be deterministic and total: unknown words come
/// back unchanged rather than erroring.
pub trait Lemmatizer: Send + Sync {
    /// Lemmatize one lowercase token.
    fn lemmatize(&self, word: &str, pos: PosTag) -> String;
}

// ─── Detachment rules ────────────────────────────────────────────────

/// Ordered noun suffix substitutions; first dictionary hit wins.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Adverbs inflect only irregularly; no detachment rules apply.
const ADVERB_RULES: &[(&str, &str)] = &[];

// ─── Rule lemmatizer ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct PosMorphology {
    dictionary: FxHashSet<&'static str>,
    exceptions: FxHashMap<&'static str, &'static str>,
    rules: &'static [(&'static str, &'static str)],
}

impl PosMorphology {
    fn new(
        dictionary: &[&'static str],
        exceptions: &[(&'static str, &'static str)],
        rules: &'static [(&'static str, &'static str)],
    ) -> Self {
        PosMorphology {
            dictionary: dictionary.iter().copied().collect(),
            exceptions: exceptions.iter().copied().collect(),
            rules,
        }
    }

    fn reduce(&self, word: &str) -> Option<String> {
        if let Some(&base) = self.exceptions.get(word) {
            return Some(base.to_string());
        }
        if self.dictionary.contains(word) {
            return Some(word.to_string());
        }
        for &(suffix, replacement) in self.rules {
            if word.len() <= suffix.len() {
                continue;
            }
            if let Some(stem) = word.strip_suffix(suffix) {
                let candidate = format!("{stem}{replacement}");
                if self.dictionary.contains(candidate.as_str()) {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

/// Rule-based lemmatizer over the built-in word tables.
///
/// The per-tag dictionaries and exception maps come from the same
/// tables the default tagger draws on, so a word the tagger recognizes
/// reduces consistently. Satellite adjectives share the adjective
/// morphology.
#[derive(Debug, Clone)]
pub struct RuleLemmatizer {
    nouns: PosMorphology,
    verbs: PosMorphology,
    adjectives: PosMorphology,
    adverbs: PosMorphology,
}

impl Default for RuleLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleLemmatizer {
    /// Build the lemmatizer from the built-in word tables.
    pub fn new() -> Self {
        RuleLemmatizer {
            nouns: PosMorphology::new(CORE_NOUNS, IRREGULAR_NOUNS, NOUN_RULES),
            verbs: PosMorphology::new(CORE_VERBS, IRREGULAR_VERBS, VERB_RULES),
            adjectives: PosMorphology::new(CORE_ADJECTIVES, IRREGULAR_ADJECTIVES, ADJECTIVE_RULES),
            adverbs: PosMorphology::new(CORE_ADVERBS, IRREGULAR_ADVERBS, ADVERB_RULES),
        }
    }

    fn morphology(&self, pos: PosTag) -> &PosMorphology {
        match pos {
            PosTag::Noun => &self.nouns,
            PosTag::Verb => &self.verbs,
            PosTag::Adjective | PosTag::AdjectiveSatellite => &self.adjectives,
            PosTag::Adverb => &self.adverbs,
        }
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, word: &str, pos: PosTag) -> String {
        // Atomic multi-word replacements pass through untouched.
        if !word.chars().all(char::is_alphabetic) {
            return word.to_string();
        }
        self.morphology(pos)
            .reduce(word)
            .unwrap_or_else(|| word.to_string())
    }
}
