use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::records::DiseaseRecord;

/// Which catalog field a ranking pass searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RankMode {
    /// Match the query against disease names; top-1, high threshold.
    DiseaseName,
    /// Match the query against the general-symptoms text; top-3, low floor.
    SymptomDescription,
}

impl RankMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DiseaseName => "disease_name",
            Self::SymptomDescription => "symptom_description",
        }
    }
}

impl fmt::Display for RankMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    DiseaseName,
    SymptomDescription,
    /// Picked by the external language-model advisor. Carries no local score.
    Advisor,
}

impl From<RankMode> for CandidateSource {
    fn from(mode: RankMode) -> Self {
        match mode {
            RankMode::DiseaseName => Self::DiseaseName,
            RankMode::SymptomDescription => Self::SymptomDescription,
        }
    }
}

/// A disease hypothesis under consideration, paired with its relevance score.
///
/// Lives only for one diagnostic attempt.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Candidate {
    pub disease: DiseaseRecord,
    /// Relevance in `0.0..=100.0`.
    pub score: f64,
    pub source: CandidateSource,
}

impl Candidate {
    #[must_use]
    pub const fn new(disease: DiseaseRecord, score: f64, source: CandidateSource) -> Self {
        Self {
            disease,
            score,
            source,
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.disease.index
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.disease.name
    }
}
