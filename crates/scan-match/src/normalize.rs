//! Query normalization.
//!
//! Free-text descriptions carry a lot of filler ("I am", "and", "two days").
//! Normalization strips punctuation and drops closed-class words so the
//! vectorizer sees symptom keywords. Only queries are normalized; corpus
//! text goes straight to the vectorizer.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Turns raw text into the tokens fed to the vectorizer.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> Vec<String>;
}

/// Remove every character that is not a letter, digit, whitespace or bracket.
#[must_use]
pub fn strip_special_chars(text: &str) -> String {
    text.chars()
        .filter(|c| {
            c.is_alphanumeric()
                || c.is_whitespace()
                || matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
        })
        .collect()
}

/// Closed-class English words: pronouns, auxiliary verbs, coordinating
/// conjunctions and spelled-out numerals.
const CLOSED_CLASS_WORDS: &[&str] = &[
    // pronouns
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "who",
    "whom", "whose", "someone", "somebody", "anyone", "anybody", "everyone", "everybody",
    "something", "anything", "everything", "nothing",
    // auxiliaries
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "ca",
    // coordinating conjunctions
    "and", "or", "but", "nor", "yet", "so",
    // numerals
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "fifteen", "twenty", "forty", "fifty", "sixty", "hundred",
];

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CLOSED_CLASS_WORDS.iter().copied().collect());

/// Default normalizer: punctuation stripping plus closed-class stopword removal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopwordNormalizer;

impl StopwordNormalizer {
    #[must_use]
    pub fn is_stopword(word: &str) -> bool {
        STOPWORDS.contains(word.to_lowercase().as_str())
    }
}

impl Normalizer for StopwordNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        strip_special_chars(text.trim())
            .split_whitespace()
            .filter(|word| !Self::is_stopword(word))
            .map(str::to_string)
            .collect()
    }
}
