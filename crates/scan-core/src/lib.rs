//! # scan-core
//!
//! Core types shared across all SymptoScan crates:
//! - Immutable catalog records (diseases, symptoms)
//! - Ranked candidates and the mode that produced them
//! - The dialogue phase enum with its allowed transitions
//! - Chat messages and the bounded conversation transcript
//! - The triage error taxonomy
//! - CLI response types

pub mod candidate;
pub mod errors;
pub mod messages;
pub mod phase;
pub mod records;
pub mod responses;

pub use candidate::{Candidate, CandidateSource, RankMode};
pub use errors::TriageError;
pub use messages::{ChatMessage, Role, Transcript};
pub use phase::Phase;
pub use records::{DiseaseRecord, SymptomRecord};
pub use responses::{
    DiseaseListResponse, RankResponse, RankedCandidate, SymptomListResponse, Turn,
};
