//! Dialogue behaviour.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Likelihood (0..=100) at or above which a checklist confirms its disease.
const fn default_confirm_threshold() -> f64 {
    60.0
}

const fn default_pause_before_first_symptom() -> bool {
    true
}

const fn default_thread_limit() -> usize {
    15
}

/// Bot messages needed before a summary is worth producing.
const fn default_summary_min_replies() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DialogueConfig {
    #[serde(default = "default_confirm_threshold")]
    pub confirm_threshold: f64,

    /// Insert one silent, input-locked tick before the first question of a checklist.
    #[serde(default = "default_pause_before_first_symptom")]
    pub pause_before_first_symptom: bool,

    /// User and bot messages retained for summaries.
    #[serde(default = "default_thread_limit")]
    pub thread_limit: usize,

    #[serde(default = "default_summary_min_replies")]
    pub summary_min_replies: usize,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            confirm_threshold: default_confirm_threshold(),
            pause_before_first_symptom: default_pause_before_first_symptom(),
            thread_limit: default_thread_limit(),
            summary_min_replies: default_summary_min_replies(),
        }
    }
}

impl DialogueConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.confirm_threshold) {
            return Err(ConfigError::invalid(
                "dialogue.confirm_threshold",
                "must be between 0 and 100",
            ));
        }
        if self.thread_limit == 0 {
            return Err(ConfigError::invalid(
                "dialogue.thread_limit",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
