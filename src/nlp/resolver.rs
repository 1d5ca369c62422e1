//! Morphological resolution
//!
//! Ties the per-token normalization steps together: grammar-fix
//! substitution, part-of-speech tagging, then dictionary-form
//! lemmatization. The resolver is the unit the batch runner applies to
//! every token surviving the base stopword pass.

use crate::errors::RecordFailure;
use crate::lexicon::Lexicon;
use crate::nlp::lemmatizer::{Lemmatizer, RuleLemmatizer};
use crate::nlp::tagger::{LexicalTagger, Tagger};

/// Per-token resolution seam used by the batch runner.
///
/// The built-in [`Resolver`] is total and infallible; implementations
/// backed by an external tagger or dictionary report faults as
/// [`RecordFailure::Resolver`], which the runner absorbs record by
/// record without aborting the batch.
pub trait TokenResolver: Send + Sync {
    /// Resolve one lowercase token to its normalized surface form.
    fn resolve(&self, token: &str, lexicon: &Lexicon) -> Result<String, RecordFailure>;
}

/// Grammar-fix substitution followed by POS-aware lemmatization.
///
/// A token matching a grammar-fix key is replaced before tagging; the
/// replacement is treated as one atomic unit even when it expands to
/// several words, so downstream filtering sees the whole phrase and
/// the informal key itself never reaches the output.
#[derive(Debug, Clone, Default)]
pub struct Resolver<T = LexicalTagger, L = RuleLemmatizer> {
    tagger: T,
    lemmatizer: L,
}

impl Resolver {
    /// Resolver over the built-in tagger and lemmatizer.
    pub fn new() -> Self {
        Resolver {
            tagger: LexicalTagger::new(),
            lemmatizer: RuleLemmatizer::new(),
        }
    }
}

impl<T: Tagger, L: Lemmatizer> Resolver<T, L> {
    /// Compose a resolver from custom tagging/lemmatization stages.
    pub fn with_stages(tagger: T, lemmatizer: L) -> Self {
        Resolver { tagger, lemmatizer }
    }

    /// Resolve one token: substitute, tag, lemmatize.
    pub fn resolve(&self, token: &str, lexicon: &Lexicon) -> String {
        let surface = lexicon.grammar_fix(token).unwrap_or(token);
        let pos = self.tagger.tag(surface);
        self.lemmatizer.lemmatize(surface, pos)
    }
}

impl<T: Tagger, L: Lemmatizer> TokenResolver for Resolver<T, L> {
    fn resolve(&self, token: &str, lexicon: &Lexicon) -> Result<String, RecordFailure> {
        Ok(self.resolve(token, lexicon))
    }
}
