//! Error types for review preprocessing
//!
//! Two layers: [`PrepError`] for failures that abort a run (bad
//! configuration, unreadable input, schema mismatch), and
//! [`RecordFailure`] for per-record faults that are absorbed by the
//! batch runner without aborting the remaining records.

use thiserror::Error;

/// Fatal errors raised while loading inputs or running a batch.
#[derive(Debug, Error)]
pub enum PrepError {
    /// Invalid or inconsistent configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The input table lacks one or more required columns.
    #[error("input table is missing required column(s): {}", .missing.join(", "))]
    Schema {
        /// Names of the absent required columns.
        missing: Vec<String>,
    },

    /// A data row could not be parsed into a review record.
    #[error("row {row}: {reason}")]
    Record {
        /// 1-based data row number (header excluded).
        row: usize,
        /// Human-readable parse failure.
        reason: String,
    },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV read or write failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Non-fatal faults scoped to a single record.
///
/// The batch runner converts these into an empty token sequence for the
/// affected record and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordFailure {
    /// The record expanded to more tokens than the configured ceiling.
    #[error("record produced {count} tokens, exceeding the limit of {limit}")]
    TooManyTokens {
        /// Observed token count.
        count: usize,
        /// Configured per-record ceiling.
        limit: usize,
    },

    /// A pluggable morphological resolver reported a fault.
    #[error("morphological resolution failed: {0}")]
    Resolver(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PrepError>;
