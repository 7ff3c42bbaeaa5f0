//! Response types returned as JSON by `symptoscan` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::candidate::{Candidate, CandidateSource};
use crate::messages::ChatMessage;
use crate::phase::Phase;
use crate::records::{DiseaseRecord, SymptomRecord};

/// The outcome of feeding one utterance to a session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Turn {
    /// Bot replies produced while the machine ran to the next input point.
    pub replies: Vec<ChatMessage>,
    /// Phase the session is parked in, waiting for the next utterance.
    pub phase: Phase,
}

/// A candidate flattened for output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RankedCandidate {
    pub index: usize,
    pub name: String,
    pub score: f64,
    pub source: CandidateSource,
    pub symptoms: Vec<String>,
}

impl From<&Candidate> for RankedCandidate {
    fn from(candidate: &Candidate) -> Self {
        Self {
            index: candidate.index(),
            name: candidate.disease.name.clone(),
            score: candidate.score,
            source: candidate.source,
            symptoms: candidate.disease.symptom_list(),
        }
    }
}

/// Response from `symptoscan rank`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RankResponse {
    pub query: String,
    pub candidates: Vec<RankedCandidate>,
    pub total_candidates: u32,
}

/// Response from `symptoscan catalog diseases`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DiseaseListResponse {
    pub diseases: Vec<DiseaseRecord>,
    pub total: u32,
}

/// Response from `symptoscan catalog symptoms`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SymptomListResponse {
    pub symptoms: Vec<SymptomRecord>,
    pub total: u32,
}
