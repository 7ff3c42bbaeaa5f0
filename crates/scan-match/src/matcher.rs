use scan_config::MatchingConfig;
use serde::Serialize;

use crate::normalize::{Normalizer, StopwordNormalizer};
use crate::tfidf::TfidfVectorizer;

/// A corpus entry paired with its similarity to the query, in `0.0..=100.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scored<L> {
    pub label: L,
    pub score: f64,
}

/// Ranks a labelled corpus against a free-text query.
///
/// The query is normalized, appended to the corpus, and the whole set is
/// vectorized together. Scores are cosine similarity times 100.
pub struct SimilarityMatcher {
    normalizer: Box<dyn Normalizer>,
    vectorizer: TfidfVectorizer,
}

impl std::fmt::Debug for SimilarityMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityMatcher")
            .field("vectorizer", &self.vectorizer)
            .finish_non_exhaustive()
    }
}

impl Default for SimilarityMatcher {
    fn default() -> Self {
        Self::new(&MatchingConfig::default())
    }
}

impl SimilarityMatcher {
    #[must_use]
    pub fn new(config: &MatchingConfig) -> Self {
        Self::with_normalizer(config, Box::new(StopwordNormalizer))
    }

    #[must_use]
    pub fn with_normalizer(config: &MatchingConfig, normalizer: Box<dyn Normalizer>) -> Self {
        Self {
            normalizer,
            vectorizer: TfidfVectorizer::from(config),
        }
    }

    /// Return at most `top_k` entries, best first.
    ///
    /// Equal scores keep corpus order. An empty corpus, or a query that
    /// normalizes to nothing, yields no entries.
    #[must_use]
    pub fn top_k<L: Clone>(&self, corpus: &[(L, &str)], query: &str, top_k: usize) -> Vec<Scored<L>> {
        let filtered = self.normalizer.normalize(query).join(" ");
        if corpus.is_empty() || filtered.is_empty() || top_k == 0 {
            return Vec::new();
        }

        let mut docs: Vec<&str> = corpus.iter().map(|(_, text)| *text).collect();
        docs.push(&filtered);
        let vectors = self.vectorizer.fit_transform(&docs);
        let Some((query_vec, doc_vecs)) = vectors.split_last() else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, f64)> = doc_vecs
            .iter()
            .enumerate()
            .map(|(i, v)| (i, (query_vec.dot(v) * 100.0).clamp(0.0, 100.0)))
            .collect();
        // Stable, so ties stay in corpus order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        tracing::trace!(
            query = %filtered,
            best = scored.first().map_or(0.0, |s| s.1),
            "ranked corpus"
        );

        scored
            .into_iter()
            .take(top_k)
            .map(|(i, score)| Scored {
                label: corpus[i].0.clone(),
                score,
            })
            .collect()
    }
}
