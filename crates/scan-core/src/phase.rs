//! Dialogue phases.
//!
//! ```text
//! NOT_ASKING ──free text──▶ IS_ASKING ──yes/stop──▶ NOT_ASKING
//!                               │
//!                               └─no──▶ ASKING_SYMPTOM ◀──answer── WAITING_SYMPTOM_ANSWER
//!                                        │       ▲  └──question──▶ ┘
//!                                        ▼       │
//!                              WAITING_SYMPTOM_CALCULATION ──confirmed──▶ NOT_ASKING
//!                                        │
//!                                        └─exhausted──▶ SCAN_FAILED ──▶ NOT_ASKING
//! ```

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Idle; waiting for a free-text symptom description.
    #[default]
    NotAsking,
    /// A top-line guess was presented; waiting for yes/no.
    IsAsking,
    /// Preparing the next checklist question.
    AskingSymptom,
    /// Waiting for yes/no to one symptom.
    WaitingSymptomAnswer,
    /// Computing the likelihood of the current candidate. Never waits for input.
    WaitingSymptomCalculation,
    /// Every candidate was exhausted. Never waits for input.
    ScanFailed,
}

impl Phase {
    /// Valid next phases from the current phase.
    ///
    /// `AskingSymptom` may stay put for the optional one-tick pause.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::NotAsking => &[Self::NotAsking, Self::IsAsking],
            Self::IsAsking => &[Self::NotAsking, Self::AskingSymptom, Self::ScanFailed],
            Self::AskingSymptom => &[
                Self::AskingSymptom,
                Self::WaitingSymptomAnswer,
                Self::WaitingSymptomCalculation,
                Self::ScanFailed,
            ],
            Self::WaitingSymptomAnswer => &[Self::NotAsking, Self::AskingSymptom],
            Self::WaitingSymptomCalculation => {
                &[Self::NotAsking, Self::AskingSymptom, Self::ScanFailed]
            }
            Self::ScanFailed => &[Self::NotAsking],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether this phase consumes a user utterance.
    #[must_use]
    pub const fn awaits_input(self) -> bool {
        matches!(
            self,
            Self::NotAsking | Self::IsAsking | Self::WaitingSymptomAnswer
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotAsking => "NOT_ASKING",
            Self::IsAsking => "IS_ASKING",
            Self::AskingSymptom => "ASKING_SYMPTOM",
            Self::WaitingSymptomAnswer => "WAITING_SYMPTOM_ANSWER",
            Self::WaitingSymptomCalculation => "WAITING_SYMPTOM_CALCULATION",
            Self::ScanFailed => "SCAN_FAILED",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
