//! Deterministic text preprocessing for app-store review corpora.
//!
//! `review-prep` turns raw, noisy review text into a cleaned token
//! stream ready for keyword-assisted topic modeling. Two concerns make
//! up the core: deciding which reviews are informative enough to keep
//! (marker terms, rating, recency, and per-app volume), and normalizing
//! the survivors (symbol substitution, tokenization, grammar fixes,
//! POS-aware lemmatization, and two stopword passes bracketing the
//! morphological step).
//!
//! Everything is frozen before the first record is processed: corpus
//! statistics are tallied over the full collection, then the lexicon
//! and the document filter never change, so runs are reproducible and
//! trivially parallel.
//!
//! # Quick start
//!
//! ```
//! use review_prep::lexicon::LexiconSources;
//! use review_prep::pipeline::runner::Pipeline;
//! use review_prep::types::{PrepConfig, ReviewRecord};
//!
//! # fn main() -> Result<(), review_prep::PrepError> {
//! let records = vec![ReviewRecord::new(
//!     "ride-hail",
//!     "driver cancels every time when I book",
//!     1,
//!     chrono::NaiveDate::from_ymd_opt(2021, 3, 2).unwrap(),
//! )];
//!
//! let mut config = PrepConfig::default();
//! config.eligibility.min_entity_reviews = 0;
//!
//! let pipeline = Pipeline::prepare(config, &LexiconSources::default(), &records)?;
//! let output = pipeline.run(&records);
//! assert_eq!(output.annotations.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod eligibility;
mod errors;
pub mod lexicon;
pub mod nlp;
pub mod pipeline;
pub mod types;

pub use dataset::ReviewTable;
pub use eligibility::{EligibilityFilter, EntityCounts};
pub use errors::{PrepError, RecordFailure, Result};
pub use lexicon::{Lexicon, LexiconDefinitions, LexiconSources};
pub use nlp::resolver::{Resolver, TokenResolver};
pub use pipeline::runner::{Pipeline, RecordOutcome};
pub use pipeline::{BatchSummary, PrepOutput};
pub use types::{Annotation, EligibilityConfig, PosTag, PrepConfig, ReviewRecord};
