//! Similarity matching and candidate ranking thresholds.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Minimum disease-name score accepted as a near-exact match.
const fn default_name_threshold() -> f64 {
    50.0
}

/// Description scores must be strictly above this floor.
const fn default_description_floor() -> f64 {
    10.0
}

const fn default_description_top_k() -> usize {
    3
}

/// Terms present in more than this fraction of rows are ignored.
const fn default_max_df() -> f64 {
    0.5
}

const fn default_max_ngram() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MatchingConfig {
    /// Score (0..=100) at or above which a disease-name hit is taken as the single candidate.
    #[serde(default = "default_name_threshold")]
    pub name_threshold: f64,

    /// Score (0..=100) a symptom-description hit must exceed to become a candidate.
    #[serde(default = "default_description_floor")]
    pub description_floor: f64,

    /// Number of description hits seeded into the candidate queue.
    #[serde(default = "default_description_top_k")]
    pub description_top_k: usize,

    /// Document-frequency ceiling as a fraction of all rows, query included.
    #[serde(default = "default_max_df")]
    pub max_df: f64,

    /// Longest word n-gram in the term space (1 = unigrams only).
    #[serde(default = "default_max_ngram")]
    pub max_ngram: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            name_threshold: default_name_threshold(),
            description_floor: default_description_floor(),
            description_top_k: default_description_top_k(),
            max_df: default_max_df(),
            max_ngram: default_max_ngram(),
        }
    }
}

impl MatchingConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.name_threshold) {
            return Err(ConfigError::invalid(
                "matching.name_threshold",
                "must be between 0 and 100",
            ));
        }
        if !(0.0..=100.0).contains(&self.description_floor) {
            return Err(ConfigError::invalid(
                "matching.description_floor",
                "must be between 0 and 100",
            ));
        }
        if self.description_top_k == 0 {
            return Err(ConfigError::invalid(
                "matching.description_top_k",
                "must be at least 1",
            ));
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(ConfigError::invalid(
                "matching.max_df",
                "must be in (0, 1]",
            ));
        }
        if self.max_ngram == 0 {
            return Err(ConfigError::invalid(
                "matching.max_ngram",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
