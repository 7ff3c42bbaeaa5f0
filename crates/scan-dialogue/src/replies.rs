//! Scripted bot messages.

use scan_core::DiseaseRecord;

const EXAMPLE_QUERY: &str =
    "\"I am experiencing symptoms such as runny nose, coughing, sore throat.\"";

const COMMANDS_HINT: &str = "(Type **Yes** if correct, **No** if wrong, **Stop** to start over, \
                             or **Summarize** for a summary of this chat.)";

pub const GREETING: &str = "Greetings! I am SymptoScan, a symptom triage companion.\n\n\
     Describe what you are feeling and I will suggest conditions that match, then ask about \
     individual symptoms to narrow it down.\n\n\
     **NOTE**: I am not a doctor. If doubts persist, consult a licensed physician. \
     Nothing you type is stored once this session ends.";

pub fn help() -> String {
    format!(
        "Tell me which symptoms you are experiencing and I will try to identify what could be \
         causing them, for example: {EXAMPLE_QUERY}\n\n\
         Commands: **Help** shows this message, **Summarize** summarizes the conversation, \
         **Stop** abandons the current diagnosis."
    )
}

pub fn scan_failed() -> String {
    format!(
        "We have failed to scan your symptoms. Please try again, listing the symptoms you are \
         experiencing: e.g. {EXAMPLE_QUERY}"
    )
}

pub fn restart_prompt() -> String {
    format!(
        "You can continue this chat by telling us what symptoms you are currently experiencing.\n\n\
         It helps to name them specifically: e.g. {EXAMPLE_QUERY}"
    )
}

pub fn guess(disease: &DiseaseRecord) -> String {
    format!(
        "Based on the symptoms you described, you may be experiencing {name}. \
         Symptoms of {name} include: {symptoms}. Is the diagnosis correct?\n\n{COMMANDS_HINT}",
        name = disease.name,
        symptoms = disease.symptoms,
    )
}

pub fn symptom_question(symptom: &str, explanation: Option<&str>) -> String {
    let symptom = capitalize(symptom);
    match explanation.map(|e| e.trim().trim_end_matches('.')) {
        Some(explanation) if !explanation.is_empty() => {
            format!("Are you experiencing: {symptom}? {explanation}.")
        }
        _ => format!("Are you experiencing: {symptom}?"),
    }
}

pub fn confirmed(disease: &DiseaseRecord, recommendation: &str) -> String {
    format!(
        "Glad we got it correct! You are experiencing {name}. {description}\n\n\
         Its symptoms include: {symptoms}.\n\nOur recommendation: {recommendation}",
        name = disease.name,
        description = sentence(&disease.description),
        symptoms = disease.symptoms,
    )
}

pub fn likely(disease: &DiseaseRecord, likelihood: f64, recommendation: &str) -> String {
    format!(
        "You might be experiencing {name} ({likelihood:.0}% of its symptoms match). \
         {description}\n\nIts symptoms include: {symptoms}.\n\n\
         Our recommendation: {recommendation}\n\n\
         (If you are not confident in this answer, please try again and list what you are \
         experiencing.)",
        name = disease.name,
        description = sentence(&disease.description),
        symptoms = disease.symptoms,
    )
}

pub const SUMMARY_TOO_SHORT: &str =
    "This conversation is still too short to summarize. Please chat with SymptoScan a little more.";

/// Summary used when no advisor is available: the user's recent messages.
pub fn local_summary<'a>(user_threads: impl IntoIterator<Item = &'a String>) -> String {
    let lines: Vec<String> = user_threads
        .into_iter()
        .map(|message| format!("- {}", message.trim()))
        .collect();
    format!(
        "Summary of this chat. You told SymptoScan:\n{}",
        lines.join("\n")
    )
}

fn capitalize(text: &str) -> String {
    let mut chars = text.trim().chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn sentence(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() || text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{text}.")
    }
}
