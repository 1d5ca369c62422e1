//! Batch runner — orchestrates filtering and normalization over a
//! review collection.
//!
//! Construction is two-phase. [`Pipeline::prepare`] scans the full
//! collection once (the per-app counts feed both the high-volume
//! eligibility set and the corpus stopword vocabulary), then freezes
//! the lexicon and the document filter. [`Pipeline::run`] afterwards
//! maps the per-record chain over the collection:
//!
//! 1. Document filter (frozen eligibility verdict)
//! 2. Symbol normalization + tokenization
//! 3. Stopword pass 1 — base (language) vocabulary
//! 4. Per-token morphological resolution (fix, tag, lemmatize)
//! 5. Stopword pass 2 — corpus-adaptive vocabulary
//!
//! The two stopword passes deliberately bracket resolution: the base
//! pass removes function words from raw surface forms, the corpus pass
//! runs after lemmatization so entity-name variants collapse onto the
//! frozen vocabulary before being checked.
//!
//! Records are independent, so the map runs on the rayon pool when
//! `parallel` is set; output order follows input order either way. A
//! record that fails mid-processing is absorbed: the failure is logged,
//! its token sequence stays empty, and the empty result demotes the
//! record to ineligible. One bad record never aborts the batch.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::eligibility::{EligibilityFilter, EntityCounts};
use crate::errors::{RecordFailure, Result};
use crate::lexicon::{Lexicon, LexiconSources};
use crate::nlp::resolver::{Resolver, TokenResolver};
use crate::nlp::tokenizer::{normalize_symbols, tokenize};
use crate::pipeline::{BatchSummary, PrepOutput};
use crate::types::{Annotation, PrepConfig, ReviewRecord};

// ============================================================================
// RecordOutcome — what happened to one eligible record
// ============================================================================

/// Outcome of normalizing a single eligible record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Normalization produced this (possibly empty) token sequence.
    Tokens(Vec<String>),
    /// Processing failed; the record is absorbed with empty tokens.
    Failed(RecordFailure),
}

// ============================================================================
// Pipeline — frozen filter + lexicon + resolver
// ============================================================================

/// A frozen preprocessing pipeline.
///
/// Holds the lexicon, the document filter, and the morphological
/// resolver, all read-only after construction, so one pipeline can be
/// shared across worker threads. The resolver seam defaults to the
/// built-in [`Resolver`]; anything implementing [`TokenResolver`] can
/// stand in.
#[derive(Debug, Clone)]
pub struct Pipeline<R = Resolver> {
    config: PrepConfig,
    lexicon: Lexicon,
    filter: EligibilityFilter,
    resolver: R,
}

impl Pipeline {
    /// Two-phase initialization with the built-in resolver: tally
    /// statistics over the full collection, then freeze the lexicon
    /// and the document filter.
    pub fn prepare(
        config: PrepConfig,
        sources: &LexiconSources,
        records: &[ReviewRecord],
    ) -> Result<Self> {
        Self::prepare_with_resolver(config, sources, records, Resolver::new())
    }
}

impl<R: TokenResolver> Pipeline<R> {
    /// [`prepare`](Pipeline::prepare) with a custom resolver behind the
    /// [`TokenResolver`] seam.
    pub fn prepare_with_resolver(
        config: PrepConfig,
        sources: &LexiconSources,
        records: &[ReviewRecord],
        resolver: R,
    ) -> Result<Self> {
        config.validate()?;

        // Phase 1: statistics over the full collection.
        let counts = EntityCounts::tally(records);

        // Phase 2: freeze the corpus-dependent pieces.
        let filter = EligibilityFilter::new(&config.eligibility, &counts)?;
        let entity_names: Vec<String> = counts.entities().map(str::to_string).collect();
        let lexicon = Lexicon::load(
            sources.base_stopwords.as_deref(),
            sources.grammar_fixes.as_deref(),
            &entity_names,
            &config.supplemental_stopwords,
        )?;

        info!(
            records = records.len(),
            entities = counts.len(),
            high_volume = filter.high_volume_len(),
            base_stopwords = lexicon.base().len(),
            corpus_stopwords = lexicon.corpus().len(),
            grammar_fixes = lexicon.fix_count(),
            "pipeline prepared"
        );
        Ok(Pipeline {
            config,
            lexicon,
            filter,
            resolver,
        })
    }

    /// The frozen vocabulary bundle.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The frozen document filter.
    pub fn filter(&self) -> &EligibilityFilter {
        &self.filter
    }

    /// Run the batch, producing one [`Annotation`] per input record.
    pub fn run(&self, records: &[ReviewRecord]) -> PrepOutput {
        let outcomes: Vec<Option<RecordOutcome>> = if self.config.parallel {
            records
                .par_iter()
                .map(|r| self.filter.is_eligible(r).then(|| self.process_record(r)))
                .collect()
        } else {
            records
                .iter()
                .map(|r| self.filter.is_eligible(r).then(|| self.process_record(r)))
                .collect()
        };

        let mut summary = BatchSummary {
            total: records.len(),
            ..BatchSummary::default()
        };
        let mut annotations = Vec::with_capacity(records.len());
        for (index, outcome) in outcomes.into_iter().enumerate() {
            let annotation = match outcome {
                None => Annotation::default(),
                Some(RecordOutcome::Tokens(tokens)) => {
                    summary.marked_eligible += 1;
                    if tokens.is_empty() {
                        summary.demoted += 1;
                        debug!(record = index, "no tokens survived, record demoted");
                        Annotation::default()
                    } else {
                        Annotation {
                            eligible: true,
                            normalized_tokens: tokens,
                        }
                    }
                }
                Some(RecordOutcome::Failed(failure)) => {
                    summary.marked_eligible += 1;
                    summary.demoted += 1;
                    summary.failed += 1;
                    warn!(record = index, error = %failure, "record absorbed after failure");
                    Annotation::default()
                }
            };
            annotations.push(annotation);
        }

        info!(
            total = summary.total,
            eligible = summary.eligible(),
            demoted = summary.demoted,
            failed = summary.failed,
            "batch complete"
        );
        PrepOutput {
            annotations,
            summary,
        }
    }

    fn process_record(&self, record: &ReviewRecord) -> RecordOutcome {
        // Stage 1: symbol normalization + tokenization.
        let normalized = normalize_symbols(&record.content);
        let tokens = tokenize(&normalized);
        if tokens.len() > self.config.max_tokens_per_record {
            return RecordOutcome::Failed(RecordFailure::TooManyTokens {
                count: tokens.len(),
                limit: self.config.max_tokens_per_record,
            });
        }

        // Stage 2: base stopword pass on raw surface forms.
        let tokens = self.lexicon.base().filter_owned(tokens);

        // Stage 3: per-token morphological resolution.
        let mut resolved = Vec::with_capacity(tokens.len());
        for token in &tokens {
            match self.resolver.resolve(token, &self.lexicon) {
                Ok(lemma) => resolved.push(lemma),
                Err(failure) => return RecordOutcome::Failed(failure),
            }
        }

        // Stage 4: corpus stopword pass on resolved forms.
        RecordOutcome::Tokens(self.lexicon.corpus().filter_owned(resolved))
    }
}
