//! # scan-match
//!
//! Text similarity for SymptoScan.
//!
//! - [`normalize`]: strips punctuation and filler words from user queries.
//! - [`tfidf`]: n-gram TF-IDF vectors with smoothed IDF and L2 rows.
//! - [`SimilarityMatcher`]: ranks any labelled corpus against a query.
//! - [`CandidateRanker`]: applies the disease-name and symptom-description
//!   acceptance rules over a [`scan_catalog::Catalog`].

pub mod normalize;
pub mod tfidf;

mod matcher;
mod ranker;

pub use matcher::{Scored, SimilarityMatcher};
pub use normalize::{Normalizer, StopwordNormalizer};
pub use ranker::CandidateRanker;
