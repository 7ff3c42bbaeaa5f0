//! System prompts for the three advisor capabilities.

use crate::table::ROW_INDEX_COLUMN;

const PREAMBLE: &str = "Respond with the result only. Do not add placeholders, \
                        commentary or formatting beyond what is asked.";

const THREAD_SEPARATOR: &str = "\n----\n";

pub fn rank_diseases(diseases_csv: &str, query: &str, top_k: usize) -> String {
    format!(
        "{PREAMBLE}\n\nDisease table (CSV):\n{diseases_csv}\n\
         Pick the {top_k} diseases from the table that best fit this description: \"{query}\".\n\
         Reply with those rows as CSV, keeping the original headers, and add a \
         leading column named \"{ROW_INDEX_COLUMN}\" holding each row's zero-based \
         position in the table. If nothing fits, reply with FALSE and nothing else. \
         Check that the CSV is well formed before answering."
    )
}

pub fn recommend(disease_name: &str) -> String {
    format!(
        "{PREAMBLE}\n\nA patient has {disease_name}. Write a reassuring, practical \
         recommendation they can follow at home, and say when they should see a doctor."
    )
}

pub fn summarize<S: AsRef<str>>(user_threads: &[S], bot_threads: &[S]) -> String {
    format!(
        "{PREAMBLE}\n\nSummarize this conversation between a user and a symptom triage \
         assistant, and note what it suggests about the user's health.\n\n\
         User messages:\n{}\n\nAssistant messages:\n{}",
        join_threads(user_threads),
        join_threads(bot_threads),
    )
}

fn join_threads<S: AsRef<str>>(threads: &[S]) -> String {
    threads
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(THREAD_SEPARATOR)
}
