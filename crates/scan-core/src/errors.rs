//! Triage outcome taxonomy.
//!
//! These are not process failures. Every variant is recovered inside the
//! dialogue and surfaces to the user as a scripted bot message, never as a
//! raw error. Crate-level failures (config, catalog, HTTP) have their own
//! error types in their respective crates.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TriageError {
    /// No candidate cleared the ranking threshold.
    #[error("no disease matched the description (best score {best_score:.1})")]
    NoMatchFound { best_score: f64 },

    /// A candidate's checklist emptied below the confirmation threshold.
    #[error("checklist for disease {disease_index} exhausted at {likelihood:.1}% likelihood")]
    ChecklistExhausted { disease_index: usize, likelihood: f64 },

    /// Every candidate was rejected or exhausted.
    #[error("all candidate diseases were ruled out")]
    QueueExhausted,

    /// The external advisor answered with something that is not the expected table.
    #[error("malformed external response: {0}")]
    MalformedExternalResponse(String),
}

impl TriageError {
    /// Whether the user should be told the scan failed and asked to try again.
    ///
    /// A malformed advisor reply is reported exactly like a missed match.
    #[must_use]
    pub const fn is_scan_failure(&self) -> bool {
        !matches!(self, Self::ChecklistExhausted { .. })
    }
}
