//! Lexicon assembly
//!
//! Three vocabularies drive normalization: a base (language) stopword
//! list applied to raw surface forms, a corpus-adaptive stopword list
//! derived from the collection's own entity identifiers, and a
//! grammar-fix mapping that rewrites informal tokens to standard
//! phrases. Definitions come from line-oriented text: a line with a
//! single token declares a stopword, a line with several tokens maps
//! the first to the rest, and blank lines are skipped, so stopwords and
//! fixes can live in one file.
//!
//! A [`Lexicon`] is assembled once per batch, after corpus statistics
//! are known, and never mutated afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::errors::{PrepError, Result};
use crate::nlp::stopwords::StopwordFilter;

/// Brand and platform terms excluded alongside the entity identifiers.
///
/// These saturate review text without naming the reviewed app itself,
/// so they carry no topical signal.
pub const DEFAULT_SUPPLEMENTAL_STOPWORDS: &[&str] = &[
    "android", "apple", "google", "huawei", "ios", "iphone", "playstore", "samsung", "xiaomi",
];

/// Filesystem locations of the lexicon definition files.
///
/// Both files use the same line-oriented format; the split exists so a
/// deployment can swap the base stopword list without touching its
/// grammar fixes. Leaving `base_stopwords` unset selects the built-in
/// English list.
#[derive(Debug, Clone, Default)]
pub struct LexiconSources {
    /// Replaces the built-in English base stopword list when set.
    pub base_stopwords: Option<PathBuf>,
    /// Grammar fixes plus any additional stopword lines.
    pub grammar_fixes: Option<PathBuf>,
}

/// Parsed line-oriented lexicon definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconDefinitions {
    /// Single-token lines, lowercased.
    pub stopwords: Vec<String>,
    /// First token of each multi-token line mapped to the remaining
    /// tokens joined by single spaces, lowercased.
    pub fixes: Vec<(String, String)>,
}

impl LexiconDefinitions {
    /// Parse definition text.
    ///
    /// Tokens are whitespace-delimited; interior runs of whitespace in
    /// a replacement collapse to single spaces.
    pub fn parse(text: &str) -> Self {
        let mut stopwords = Vec::new();
        let mut fixes = Vec::new();
        for line in text.lines() {
            let mut parts = line.split_whitespace();
            let Some(head) = parts.next() else {
                continue;
            };
            let rest: Vec<&str> = parts.collect();
            if rest.is_empty() {
                stopwords.push(head.to_lowercase());
            } else {
                fixes.push((head.to_lowercase(), rest.join(" ").to_lowercase()));
            }
        }
        LexiconDefinitions { stopwords, fixes }
    }

    /// Read and parse a definition file.
    ///
    /// A file that is unreadable or defines nothing at all is a
    /// configuration error rather than a silent no-op.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            PrepError::Config(format!("cannot read lexicon file {}: {e}", path.display()))
        })?;
        let definitions = Self::parse(&text);
        if definitions.is_empty() {
            return Err(PrepError::Config(format!(
                "lexicon file {} contains no definitions",
                path.display()
            )));
        }
        Ok(definitions)
    }

    /// True when the source defined neither stopwords nor fixes.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty() && self.fixes.is_empty()
    }
}

/// Frozen vocabulary bundle the pipeline reads during normalization.
#[derive(Debug, Clone)]
pub struct Lexicon {
    base: StopwordFilter,
    corpus: StopwordFilter,
    fixes: FxHashMap<String, String>,
}

impl Lexicon {
    /// Assemble a lexicon from definition files and corpus statistics.
    ///
    /// With no `base_source` the built-in English stopword list is
    /// used; a provided file replaces it entirely. Fix lines from
    /// either file join the grammar-fix mapping, later definitions
    /// overriding earlier ones, and stopword lines from `fix_source`
    /// extend the base list. The corpus stopword set is the union of
    /// `entities` and `supplemental`, all lowercased.
    pub fn load(
        base_source: Option<&Path>,
        fix_source: Option<&Path>,
        entities: &[String],
        supplemental: &[String],
    ) -> Result<Self> {
        let base = base_source.map(LexiconDefinitions::from_file).transpose()?;
        let extra = fix_source.map(LexiconDefinitions::from_file).transpose()?;
        Ok(Self::from_definitions(
            base.as_ref(),
            extra.as_ref(),
            entities,
            supplemental,
        ))
    }

    /// Assemble a lexicon from already-parsed definitions.
    pub fn from_definitions(
        base: Option<&LexiconDefinitions>,
        extra: Option<&LexiconDefinitions>,
        entities: &[String],
        supplemental: &[String],
    ) -> Self {
        let mut base_filter = match base {
            Some(definitions) => {
                let mut filter = StopwordFilter::empty();
                filter.add_stopwords(&definitions.stopwords);
                filter
            }
            None => StopwordFilter::english(),
        };
        let mut fixes = FxHashMap::default();
        for definitions in [base, extra].into_iter().flatten() {
            for (key, replacement) in &definitions.fixes {
                fixes.insert(key.clone(), replacement.clone());
            }
        }
        if let Some(definitions) = extra {
            base_filter.add_stopwords(&definitions.stopwords);
        }

        let mut corpus = StopwordFilter::empty();
        // Multi-word app names are split so each part can match the
        // single tokens the pipeline produces.
        for entity in entities {
            corpus.add_stopwords(entity.split_whitespace());
        }
        corpus.add_stopwords(supplemental);

        Lexicon {
            base: base_filter,
            corpus,
            fixes,
        }
    }

    /// Base (language) stopwords, applied before morphological
    /// resolution.
    pub fn base(&self) -> &StopwordFilter {
        &self.base
    }

    /// Corpus-adaptive stopwords, applied after morphological
    /// resolution.
    pub fn corpus(&self) -> &StopwordFilter {
        &self.corpus
    }

    /// Replacement phrase for an informal token, when one is defined.
    pub fn grammar_fix(&self, token: &str) -> Option<&str> {
        self.fixes.get(token).map(String::as_str)
    }

    /// Number of grammar-fix mappings.
    pub fn fix_count(&self) -> usize {
        self.fixes.len()
    }
}
