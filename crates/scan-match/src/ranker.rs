use std::sync::Arc;

use scan_catalog::Catalog;
use scan_config::MatchingConfig;
use scan_core::{Candidate, CandidateSource, RankMode, SymptomRecord, TriageError};

use crate::matcher::SimilarityMatcher;

/// Turns a user query into an ordered list of candidate diseases.
#[derive(Debug)]
pub struct CandidateRanker {
    catalog: Arc<Catalog>,
    matcher: SimilarityMatcher,
    config: MatchingConfig,
}

impl CandidateRanker {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: MatchingConfig) -> Self {
        Self {
            matcher: SimilarityMatcher::new(&config),
            catalog,
            config,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Rank in one mode and apply that mode's acceptance rule.
    ///
    /// - [`RankMode::DiseaseName`]: the single best hit, accepted when its
    ///   score is at least `name_threshold`.
    /// - [`RankMode::SymptomDescription`]: up to `description_top_k` hits,
    ///   each kept only when its score is strictly above `description_floor`.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::NoMatchFound`] with the best score seen when no
    /// hit is accepted.
    pub fn rank(&self, query: &str, mode: RankMode) -> Result<Vec<Candidate>, TriageError> {
        let (corpus, top_k) = match mode {
            RankMode::DiseaseName => (self.catalog.disease_name_corpus(), 1),
            RankMode::SymptomDescription => (
                self.catalog.general_symptom_corpus(),
                self.config.description_top_k,
            ),
        };
        let hits = self.matcher.top_k(&corpus, query, top_k);
        let best_score = hits.first().map_or(0.0, |hit| hit.score);

        let accepted: Vec<Candidate> = hits
            .into_iter()
            .filter(|hit| match mode {
                RankMode::DiseaseName => hit.score >= self.config.name_threshold,
                RankMode::SymptomDescription => hit.score > self.config.description_floor,
            })
            .filter_map(|hit| {
                self.catalog
                    .disease(hit.label)
                    .map(|d| Candidate::new(d.clone(), hit.score, CandidateSource::from(mode)))
            })
            .collect();

        tracing::debug!(
            %mode,
            best_score,
            accepted = accepted.len(),
            "ranked query"
        );

        if accepted.is_empty() {
            return Err(TriageError::NoMatchFound { best_score });
        }
        Ok(accepted)
    }

    /// Disease-name match first, symptom-description match as fallback.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::NoMatchFound`] when neither mode accepts a hit;
    /// the reported score is the better of the two.
    pub fn rank_auto(&self, query: &str) -> Result<Vec<Candidate>, TriageError> {
        match self.rank(query, RankMode::DiseaseName) {
            Ok(candidates) => Ok(candidates),
            Err(TriageError::NoMatchFound { best_score: by_name }) => {
                self.rank(query, RankMode::SymptomDescription)
                    .map_err(|err| match err {
                        TriageError::NoMatchFound { best_score } => TriageError::NoMatchFound {
                            best_score: best_score.max(by_name),
                        },
                        other => other,
                    })
            }
            Err(other) => Err(other),
        }
    }

    /// The symptom row that best explains `name`.
    ///
    /// Exact (case-insensitive) name matches win; otherwise the closest
    /// symptom name by similarity, if any term is shared.
    #[must_use]
    pub fn explain_symptom(&self, name: &str) -> Option<&SymptomRecord> {
        if let Some(exact) = self.catalog.symptom_named(name) {
            return Some(exact);
        }
        let corpus = self.catalog.symptom_name_corpus();
        self.matcher
            .top_k(&corpus, name, 1)
            .into_iter()
            .find(|hit| hit.score > 0.0)
            .and_then(|hit| self.catalog.symptom(hit.label))
    }
}
