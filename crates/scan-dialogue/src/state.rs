//! Per-session conversation state.

use std::collections::VecDeque;

use scan_core::{Candidate, Phase};
use serde::{Deserialize, Serialize};

use crate::checklist::SymptomChecklist;

/// Everything the state machine remembers between turns of one session.
///
/// The candidate queue is only read at its front or popped. The checklist,
/// when present, belongs to the front candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    pub phase: Phase,
    pub candidate_queue: VecDeque<Candidate>,
    pub checklist: Option<SymptomChecklist>,
    /// Defers the first question of a fresh checklist by one tick.
    pub awaiting_first_symptom_prompt: bool,
    /// Set while the bot is mid-response. Advisory only.
    pub input_locked: bool,
}

impl ConversationState {
    /// Back to an empty `NotAsking` state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn current_candidate(&self) -> Option<&Candidate> {
        self.candidate_queue.front()
    }

    /// Drop the front candidate and start the next one's checklist.
    ///
    /// Returns `false` (with no checklist) when the queue is now empty.
    pub fn advance_candidate(&mut self) -> bool {
        self.candidate_queue.pop_front();
        self.activate_front()
    }

    /// Start the checklist of the front candidate.
    pub fn activate_front(&mut self) -> bool {
        self.checklist = self.candidate_queue.front().map(SymptomChecklist::activate);
        self.awaiting_first_symptom_prompt = self.checklist.is_some();
        self.checklist.is_some()
    }
}
