//! Document filtering
//!
//! Decides which raw reviews enter the normalization pipeline. A review
//! qualifies when it reads like situational bug feedback: its text
//! mentions a temporal/conditional marker, it carries a low rating, it
//! predates the collection cutoff, and it belongs to an app with enough
//! total reviews to support stable topics.
//!
//! Construction is two-phase: entity counts are tallied over the full
//! collection first, then the filter freezes the high-volume set and
//! the compiled marker pattern. Nothing mutates after that, so the
//! filter can be shared across worker threads.

use chrono::NaiveDate;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::{PrepError, Result};
use crate::types::{EligibilityConfig, ReviewRecord};

/// Marker terms whose presence suggests situational feedback.
///
/// Reviews that anchor a complaint in time or circumstance ("crashes
/// *when* I open the camera", "charged twice *after* the update") name
/// a reproducible condition; reviews without any marker tend to be bare
/// sentiment.
pub const DEFAULT_MARKER_TERMS: &[&str] = &[
    "after",
    "before",
    "when",
    "while",
    "until",
    "during",
    "every time",
    "as soon as",
    "then",
    "whenever",
];

/// Per-app review counts over the full collection.
#[derive(Debug, Clone, Default)]
pub struct EntityCounts {
    counts: FxHashMap<String, usize>,
}

impl EntityCounts {
    /// Tally review counts per entity identifier.
    pub fn tally(records: &[ReviewRecord]) -> Self {
        let mut counts = FxHashMap::default();
        for record in records {
            *counts.entry(record.app.clone()).or_insert(0) += 1;
        }
        EntityCounts { counts }
    }

    /// Total reviews recorded for `app`.
    pub fn count(&self, app: &str) -> usize {
        self.counts.get(app).copied().unwrap_or(0)
    }

    /// Distinct entity identifiers observed, in no particular order.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Identifiers whose count strictly exceeds `min_reviews`.
    pub fn high_volume(&self, min_reviews: usize) -> FxHashSet<String> {
        self.counts
            .iter()
            .filter(|(_, &count)| count > min_reviews)
            .map(|(app, _)| app.clone())
            .collect()
    }

    /// Number of distinct entities.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no records were tallied.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Frozen informativeness filter.
#[derive(Debug, Clone)]
pub struct EligibilityFilter {
    marker: Regex,
    max_score: u8,
    cutoff_date: NaiveDate,
    high_volume: FxHashSet<String>,
}

impl EligibilityFilter {
    /// Freeze a filter from configuration and full-collection counts.
    pub fn new(config: &EligibilityConfig, counts: &EntityCounts) -> Result<Self> {
        Ok(EligibilityFilter {
            marker: compile_marker_pattern(&config.markers)?,
            max_score: config.max_score,
            cutoff_date: config.cutoff_date,
            high_volume: counts.high_volume(config.min_entity_reviews),
        })
    }

    /// Whole-word, case-insensitive marker match against raw text.
    pub fn has_marker(&self, text: &str) -> bool {
        self.marker.is_match(text)
    }

    /// Whether `app` cleared the minimum-volume threshold.
    pub fn is_high_volume(&self, app: &str) -> bool {
        self.high_volume.contains(app)
    }

    /// Number of apps in the high-volume set.
    pub fn high_volume_len(&self) -> usize {
        self.high_volume.len()
    }

    /// All four criteria must hold: marker term, low rating, cutoff
    /// date, and entity volume. Failing any one makes the record
    /// ineligible.
    pub fn is_eligible(&self, record: &ReviewRecord) -> bool {
        record.score <= self.max_score
            && record.date <= self.cutoff_date
            && self.high_volume.contains(&record.app)
            && self.marker.is_match(&record.content)
    }
}

/// Compile marker terms into one whole-word, case-insensitive
/// alternation.
///
/// The list must be non-empty and free of blank terms: a blank term
/// would compile to an empty branch matching at every word boundary.
fn compile_marker_pattern(markers: &[String]) -> Result<Regex> {
    if markers.is_empty() {
        return Err(PrepError::Config(
            "marker term list must not be empty".to_string(),
        ));
    }
    if markers.iter().any(|m| m.trim().is_empty()) {
        return Err(PrepError::Config(
            "marker terms must not be blank".to_string(),
        ));
    }
    let alternation = markers
        .iter()
        .map(|m| regex::escape(m.trim()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
        .map_err(|e| PrepError::Config(format!("marker terms do not compile: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(app: &str, content: &str, score: u8, date: (i32, u32, u32)) -> ReviewRecord {
        ReviewRecord::new(
            app,
            content,
            score,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
    }

    fn small_config() -> EligibilityConfig {
        EligibilityConfig {
            min_entity_reviews: 2,
            ..EligibilityConfig::default()
        }
    }

    fn sample_records() -> Vec<ReviewRecord> {
        vec![
            record("wallet", "crashes when i pay", 1, (2021, 3, 1)),
            record("wallet", "slow after update", 2, (2021, 4, 2)),
            record("wallet", "fine", 5, (2021, 5, 3)),
            record("niche", "broken when offline", 1, (2021, 6, 4)),
        ]
    }

    #[test]
    fn test_tally_counts_per_entity() {
        let counts = EntityCounts::tally(&sample_records());

        assert_eq!(counts.count("wallet"), 3);
        assert_eq!(counts.count("niche"), 1);
        assert_eq!(counts.count("unknown"), 0);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_high_volume_threshold_is_strict() {
        let counts = EntityCounts::tally(&sample_records());

        let set = counts.high_volume(2);
        assert!(set.contains("wallet"));
        assert!(!set.contains("niche"));
        // A count equal to the threshold does not qualify.
        assert!(counts.high_volume(3).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let counts = EntityCounts::tally(&[]);

        assert!(counts.is_empty());
        assert!(counts.high_volume(0).is_empty());
    }

    #[test]
    fn test_marker_matches_whole_words_only() {
        let counts = EntityCounts::tally(&sample_records());
        let filter = EligibilityFilter::new(&small_config(), &counts).unwrap();

        assert!(filter.has_marker("it broke after the update"));
        assert!(filter.has_marker("Every Time I open it"));
        // Substrings of longer words never match.
        assert!(!filter.has_marker("the aftermath was bad"));
        assert!(!filter.has_marker("i went to whenceforth"));
    }

    #[test]
    fn test_eligibility_requires_all_criteria() {
        let counts = EntityCounts::tally(&sample_records());
        let filter = EligibilityFilter::new(&small_config(), &counts).unwrap();

        let eligible = record("wallet", "crashes when i pay", 1, (2021, 3, 1));
        assert!(filter.is_eligible(&eligible));

        let high_score = record("wallet", "crashes when i pay", 4, (2021, 3, 1));
        assert!(!filter.is_eligible(&high_score));

        let too_recent = record("wallet", "crashes when i pay", 1, (2022, 3, 1));
        assert!(!filter.is_eligible(&too_recent));

        let low_volume = record("niche", "crashes when i pay", 1, (2021, 3, 1));
        assert!(!filter.is_eligible(&low_volume));

        let no_marker = record("wallet", "crashes a lot", 1, (2021, 3, 1));
        assert!(!filter.is_eligible(&no_marker));
    }

    #[test]
    fn test_cutoff_date_is_inclusive() {
        let counts = EntityCounts::tally(&sample_records());
        let config = small_config();
        let filter = EligibilityFilter::new(&config, &counts).unwrap();

        let on_cutoff = ReviewRecord::new(
            "wallet",
            "crashes when i pay",
            1,
            config.cutoff_date,
        );
        assert!(filter.is_eligible(&on_cutoff));
    }

    #[test]
    fn test_multiword_markers_match() {
        let counts = EntityCounts::tally(&sample_records());
        let filter = EligibilityFilter::new(&small_config(), &counts).unwrap();

        assert!(filter.has_marker("logs me out every time i switch apps"));
        assert!(filter.has_marker("fails as soon as it opens"));
    }

    #[test]
    fn test_empty_marker_list_is_config_error() {
        let counts = EntityCounts::tally(&sample_records());
        let config = EligibilityConfig {
            markers: Vec::new(),
            ..EligibilityConfig::default()
        };

        assert!(matches!(
            EligibilityFilter::new(&config, &counts),
            Err(PrepError::Config(_))
        ));
    }

    #[test]
    fn test_blank_marker_is_config_error() {
        let counts = EntityCounts::tally(&sample_records());
        let config = EligibilityConfig {
            markers: vec!["when".to_string(), "   ".to_string()],
            ..EligibilityConfig::default()
        };

        // A blank term would otherwise match every record.
        assert!(matches!(
            EligibilityFilter::new(&config, &counts),
            Err(PrepError::Config(_))
        ));
    }
}
