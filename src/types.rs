//! Core data types shared across the preprocessing stages

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{PrepError, Result};

/// A single app-store review with the fields the pipeline consumes.
///
/// Input tables may carry additional columns; those are preserved
/// verbatim by the dataset layer and never reach the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Identifier of the reviewed app.
    pub app: String,
    /// Free-form review text.
    pub content: String,
    /// Star rating given by the reviewer (1 to 5 on most stores).
    pub score: u8,
    /// Calendar date the review was posted.
    pub date: NaiveDate,
}

impl ReviewRecord {
    /// Creates a record from its four required fields.
    pub fn new(
        app: impl Into<String>,
        content: impl Into<String>,
        score: u8,
        date: NaiveDate,
    ) -> Self {
        ReviewRecord {
            app: app.into(),
            content: content.into(),
            score,
            date,
        }
    }
}

/// Derived fields the pipeline attaches to each record.
///
/// `eligible` starts as the document filter's verdict and is demoted
/// when normalization leaves no tokens; `normalized_tokens` stays empty
/// for every record that never entered (or fell out of) the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Whether the record survives the informativeness filter.
    pub eligible: bool,
    /// Normalized tokens in original left-to-right order.
    pub normalized_tokens: Vec<String>,
}

impl Annotation {
    /// Tokens re-joined with single spaces, the output-column format.
    pub fn joined_tokens(&self) -> String {
        self.normalized_tokens.join(" ")
    }
}

/// Coarse part-of-speech category driving lemmatization rules.
///
/// The satellite variant covers adjectives that only occur grouped
/// around a head adjective in WordNet-style lexicons; it shares the
/// adjective morphology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Nouns, the default for unrecognized words.
    Noun,
    /// Verbs in any inflection.
    Verb,
    /// Adjectives.
    Adjective,
    /// Satellite adjectives.
    AdjectiveSatellite,
    /// Adverbs.
    Adverb,
}

impl Default for PosTag {
    fn default() -> Self {
        PosTag::Noun
    }
}

// ─── Configuration ───────────────────────────────────────────────────

/// Thresholds and marker vocabulary for the document filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EligibilityConfig {
    /// Temporal/conditional marker terms matched as whole words,
    /// case-insensitively, in the raw review text.
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
    /// Highest rating that still counts as a negative review.
    #[serde(default = "default_max_score")]
    pub max_score: u8,
    /// Latest posting date a review may carry.
    #[serde(default = "default_cutoff_date")]
    pub cutoff_date: NaiveDate,
    /// An app enters the high-volume set only when its total review
    /// count over the full collection exceeds this value.
    #[serde(default = "default_min_entity_reviews")]
    pub min_entity_reviews: usize,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            markers: default_markers(),
            max_score: default_max_score(),
            cutoff_date: default_cutoff_date(),
            min_entity_reviews: default_min_entity_reviews(),
        }
    }
}

/// Top-level pipeline configuration.
///
/// Deserializes from JSON; omitted fields fall back to the documented
/// defaults, so `{}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrepConfig {
    /// Document filter thresholds and marker vocabulary.
    #[serde(default)]
    pub eligibility: EligibilityConfig,
    /// Process records on the rayon thread pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Per-record token ceiling; a record tokenizing past it is treated
    /// as malformed and absorbed as a per-record failure.
    #[serde(default = "default_max_tokens_per_record")]
    pub max_tokens_per_record: usize,
    /// Corpus stopwords added on top of the entity identifiers (brand
    /// and platform terms that are not themselves entity identifiers).
    #[serde(default = "default_supplemental_stopwords")]
    pub supplemental_stopwords: Vec<String>,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            eligibility: EligibilityConfig::default(),
            parallel: default_parallel(),
            max_tokens_per_record: default_max_tokens_per_record(),
            supplemental_stopwords: default_supplemental_stopwords(),
        }
    }
}

impl PrepConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            PrepError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: PrepConfig = serde_json::from_str(&text)
            .map_err(|e| PrepError::Config(format!("invalid configuration JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the pipeline cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.eligibility.markers.is_empty() {
            return Err(PrepError::Config(
                "marker term list must not be empty".to_string(),
            ));
        }
        if self
            .eligibility
            .markers
            .iter()
            .any(|m| m.trim().is_empty())
        {
            return Err(PrepError::Config(
                "marker terms must not be blank".to_string(),
            ));
        }
        if self.max_tokens_per_record == 0 {
            return Err(PrepError::Config(
                "max_tokens_per_record must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_markers() -> Vec<String> {
    crate::eligibility::DEFAULT_MARKER_TERMS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_max_score() -> u8 {
    2
}

fn default_cutoff_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 12, 31).expect("valid cutoff date")
}

fn default_min_entity_reviews() -> usize {
    1000
}

fn default_parallel() -> bool {
    true
}

fn default_max_tokens_per_record() -> usize {
    10_000
}

fn default_supplemental_stopwords() -> Vec<String> {
    crate::lexicon::DEFAULT_SUPPLEMENTAL_STOPWORDS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_construction() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 14).unwrap();
        let record = ReviewRecord::new("banking-app", "crashes on login", 1, date);
        assert_eq!(record.app, "banking-app");
        assert_eq!(record.score, 1);
        assert_eq!(record.date, date);
    }

    #[test]
    fn test_default_pos_is_noun() {
        assert_eq!(PosTag::default(), PosTag::Noun);
    }

    #[test]
    fn test_annotation_joins_tokens() {
        let annotation = Annotation {
            eligible: true,
            normalized_tokens: vec!["crash".to_string(), "login".to_string()],
        };
        assert_eq!(annotation.joined_tokens(), "crash login");
        assert_eq!(Annotation::default().joined_tokens(), "");
    }

    #[test]
    fn test_config_defaults() {
        let config = PrepConfig::default();
        assert_eq!(config.eligibility.max_score, 2);
        assert_eq!(config.eligibility.min_entity_reviews, 1000);
        assert!(config.eligibility.markers.contains(&"when".to_string()));
        assert!(config.parallel);
        assert_eq!(config.max_tokens_per_record, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_a_complete_config() {
        let config: PrepConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PrepConfig::default());
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let json = r#"{
            "eligibility": { "max_score": 3, "cutoff_date": "2020-06-30" },
            "parallel": false
        }"#;
        let config: PrepConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.eligibility.max_score, 3);
        assert_eq!(
            config.eligibility.cutoff_date,
            NaiveDate::from_ymd_opt(2020, 6, 30).unwrap()
        );
        assert!(!config.parallel);
        // Unspecified fields keep their defaults.
        assert_eq!(config.max_tokens_per_record, 10_000);
    }

    #[test]
    fn test_unknown_config_field_rejected() {
        let result: std::result::Result<PrepConfig, _> =
            serde_json::from_str(r#"{ "paralel": true }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_empty_markers() {
        let mut config = PrepConfig::default();
        config.eligibility.markers.clear();
        assert!(matches!(config.validate(), Err(PrepError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_blank_marker() {
        let mut config = PrepConfig::default();
        config.eligibility.markers.push("   ".to_string());
        assert!(matches!(config.validate(), Err(PrepError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_token_ceiling() {
        let config = PrepConfig {
            max_tokens_per_record: 0,
            ..PrepConfig::default()
        };
        assert!(matches!(config.validate(), Err(PrepError::Config(_))));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = PrepConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PrepConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
