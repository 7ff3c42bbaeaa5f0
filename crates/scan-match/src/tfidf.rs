//! A small TF-IDF vectorizer.
//!
//! Tokens are lowercase runs of two or more word characters. Features are
//! contiguous n-grams of those tokens. IDF is smoothed
//! (`ln((1 + n) / (1 + df)) + 1`) and every row is L2-normalized, so the
//! cosine similarity of two rows is their dot product.
//!
//! The vocabulary is fitted over every document passed to
//! [`TfidfVectorizer::fit_transform`]. Callers that include the query as a
//! document get query-aware document frequencies, which matters for
//! `max_df` pruning.

use std::collections::{BTreeMap, HashMap};

use scan_config::MatchingConfig;

/// Sparse, L2-normalized feature vector keyed by vocabulary position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector(BTreeMap<usize, f64>);

impl SparseVector {
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        let (small, large) = if self.0.len() <= other.0.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .0
            .iter()
            .filter_map(|(k, v)| large.0.get(k).map(|w| v * w))
            .sum()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn nnz(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TfidfVectorizer {
    max_ngram: usize,
    /// Terms present in more than this fraction of documents are dropped.
    max_df: f64,
    /// Terms present in fewer than this many documents are dropped.
    min_df: usize,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::from(&MatchingConfig::default())
    }
}

impl From<&MatchingConfig> for TfidfVectorizer {
    fn from(config: &MatchingConfig) -> Self {
        Self {
            max_ngram: config.max_ngram.max(1),
            max_df: config.max_df,
            min_df: 1,
        }
    }
}

impl TfidfVectorizer {
    #[must_use]
    pub const fn new(max_ngram: usize, max_df: f64) -> Self {
        Self {
            max_ngram: if max_ngram == 0 { 1 } else { max_ngram },
            max_df,
            min_df: 1,
        }
    }

    /// Fit a vocabulary over `docs` and return one vector per document.
    ///
    /// A document whose features were all pruned yields a zero vector.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fit_transform(&self, docs: &[&str]) -> Vec<SparseVector> {
        let counts: Vec<HashMap<String, usize>> =
            docs.iter().map(|doc| self.term_counts(doc)).collect();

        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for doc in &counts {
            for term in doc.keys() {
                *document_frequency.entry(term.as_str()).or_default() += 1;
            }
        }

        let n_docs = docs.len() as f64;
        let max_count = self.max_df * n_docs;

        // Sorted so feature positions are deterministic.
        let mut kept: Vec<(&str, usize)> = document_frequency
            .into_iter()
            .filter(|&(_, df)| df >= self.min_df && df as f64 <= max_count)
            .collect();
        kept.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let vocabulary: HashMap<&str, (usize, f64)> = kept
            .into_iter()
            .enumerate()
            .map(|(position, (term, df))| {
                let idf = ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0;
                (term, (position, idf))
            })
            .collect();

        counts
            .iter()
            .map(|doc| {
                let mut weights = BTreeMap::new();
                for (term, &count) in doc {
                    if let Some(&(position, idf)) = vocabulary.get(term.as_str()) {
                        weights.insert(position, count as f64 * idf);
                    }
                }
                normalize_l2(weights)
            })
            .collect()
    }

    fn term_counts(&self, doc: &str) -> HashMap<String, usize> {
        let tokens = tokenize(doc);
        let mut counts = HashMap::new();
        for n in 1..=self.max_ngram.min(tokens.len()) {
            for window in tokens.windows(n) {
                *counts.entry(window.join(" ")).or_default() += 1;
            }
        }
        counts
    }
}

/// Lowercase runs of at least two word characters (letters, digits, `_`).
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
        .collect()
}

fn normalize_l2(weights: BTreeMap<usize, f64>) -> SparseVector {
    let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm == 0.0 {
        return SparseVector::default();
    }
    SparseVector(weights.into_iter().map(|(k, w)| (k, w / norm)).collect())
}
