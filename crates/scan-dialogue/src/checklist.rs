//! Per-candidate symptom checklist.

use std::collections::VecDeque;

use scan_core::Candidate;
use serde::{Deserialize, Serialize};

/// Symptoms still to ask about for one candidate, and the ones affirmed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomChecklist {
    disease_index: usize,
    pending: VecDeque<String>,
    /// Affirmed in answer order. A symptom listed twice counts twice.
    confirmed: Vec<String>,
    original_len: usize,
}

impl SymptomChecklist {
    /// Start a checklist from the candidate's comma-joined symptom list.
    #[must_use]
    pub fn activate(candidate: &Candidate) -> Self {
        Self::from_symptoms(candidate.index(), candidate.disease.symptom_list())
    }

    #[must_use]
    pub fn from_symptoms(disease_index: usize, symptoms: Vec<String>) -> Self {
        Self {
            disease_index,
            original_len: symptoms.len(),
            pending: symptoms.into(),
            confirmed: Vec::new(),
        }
    }

    #[must_use]
    pub const fn disease_index(&self) -> usize {
        self.disease_index
    }

    /// The symptom the next question is about.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.pending.front().map(String::as_str)
    }

    /// Affirm the current symptom.
    pub fn confirm(&mut self) -> Option<String> {
        let symptom = self.pending.pop_front()?;
        self.confirmed.push(symptom.clone());
        Some(symptom)
    }

    /// Deny the current symptom.
    pub fn reject(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn confirmed(&self) -> &[String] {
        &self.confirmed
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub const fn original_len(&self) -> usize {
        self.original_len
    }

    /// Confirmed symptoms as a percentage of the checklist's original length.
    ///
    /// An empty checklist has likelihood 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn likelihood(&self) -> f64 {
        if self.original_len == 0 {
            return 0.0;
        }
        self.confirmed.len() as f64 / self.original_len as f64 * 100.0
    }
}
