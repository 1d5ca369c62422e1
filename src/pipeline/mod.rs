//! Batch preprocessing pipeline
//!
//! Two-phase construction over a review collection followed by
//! per-record filtering and normalization.

pub mod runner;

/// Counters describing one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records in the input collection.
    pub total: usize,
    /// Records the document filter initially marked eligible.
    pub marked_eligible: usize,
    /// Initially-eligible records demoted for yielding no tokens.
    pub demoted: usize,
    /// Records absorbed as per-record failures (a subset of `demoted`).
    pub failed: usize,
}

impl BatchSummary {
    /// Records still eligible after empty-result demotion.
    pub fn eligible(&self) -> usize {
        self.marked_eligible - self.demoted
    }
}

/// Annotated output of a batch run.
#[derive(Debug, Clone)]
pub struct PrepOutput {
    /// Per-record annotations, aligned with the input by index.
    pub annotations: Vec<crate::types::Annotation>,
    /// Batch counters.
    pub summary: BatchSummary,
}
