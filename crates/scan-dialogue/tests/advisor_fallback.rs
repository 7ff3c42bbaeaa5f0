//! How the dialogue uses, and falls back from, the language-model advisor.

mod common;

use std::time::Duration;

use pretty_assertions::assert_eq;
use scan_config::DialogueConfig;
use scan_core::{CandidateSource, Phase, TriageError};
use scan_dialogue::{Session, SessionManager};

use common::{Scripted, ScriptedAdvisor, dialogue_with, offline_dialogue};

fn scripted(reply: Scripted) -> scan_dialogue::Dialogue<ScriptedAdvisor> {
    dialogue_with(ScriptedAdvisor(reply), DialogueConfig::default())
}

#[tokio::test]
async fn name_match_skips_the_advisor() {
    let dialogue = scripted(Scripted::Malformed);
    let candidates = dialogue.rank_candidates("influenza").await.unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name(), "Influenza");
    assert_eq!(candidates[0].source, CandidateSource::DiseaseName);
}

#[tokio::test]
async fn advisor_rows_become_candidates_in_order() {
    let dialogue = scripted(Scripted::Rows(vec![2, 99, 0]));
    let candidates = dialogue.rank_candidates("my head is pounding").await.unwrap();

    let names: Vec<&str> = candidates.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Migraine", "Common Cold"]);
    assert!(candidates.iter().all(|c| c.source == CandidateSource::Advisor));
}

#[tokio::test]
async fn malformed_reply_reads_as_failed_scan() {
    let dialogue = scripted(Scripted::Malformed);
    let err = dialogue
        .rank_candidates("sneezing and a runny nose")
        .await
        .unwrap_err();
    assert!(matches!(err, TriageError::MalformedExternalResponse(_)));

    let mut session = Session::default();
    let turn = session
        .submit(&dialogue, "sneezing and a runny nose")
        .await
        .unwrap();
    assert_eq!(turn.phase, Phase::NotAsking);
    assert!(turn.replies[0].content.contains("failed to scan"));
}

#[tokio::test]
async fn declined_reply_is_no_match() {
    let dialogue = scripted(Scripted::Declined);
    let err = dialogue.rank_candidates("glowing toes").await.unwrap_err();
    assert!(matches!(err, TriageError::NoMatchFound { .. }));
}

#[tokio::test]
async fn out_of_range_rows_are_malformed() {
    let dialogue = scripted(Scripted::Rows(vec![42]));
    let err = dialogue.rank_candidates("anything").await.unwrap_err();
    assert!(matches!(err, TriageError::MalformedExternalResponse(_)));
}

#[tokio::test]
async fn unavailable_advisor_falls_back_to_description_match() {
    let dialogue = scripted(Scripted::Down);
    let candidates = dialogue
        .rank_candidates("sneezing and a runny nose")
        .await
        .unwrap();
    assert_eq!(candidates[0].name(), "Common Cold");
    assert_eq!(candidates[0].source, CandidateSource::SymptomDescription);
}

#[tokio::test]
async fn confirmation_uses_advisor_recommendation() {
    let dialogue = scripted(Scripted::Rows(vec![0]));
    let mut session = Session::default();
    session.submit(&dialogue, "feeling rough").await.unwrap();

    let turn = session.submit(&dialogue, "yes").await.unwrap();
    assert!(
        turn.replies[0]
            .content
            .contains("Advisor says: take care of your Common Cold.")
    );
}

#[tokio::test]
async fn failed_recommendation_uses_catalog_text() {
    let dialogue = scripted(Scripted::Down);
    let mut session = Session::default();
    session.submit(&dialogue, "common cold").await.unwrap();

    let turn = session.submit(&dialogue, "yes").await.unwrap();
    assert!(turn.replies[0].content.contains("Rest and drink plenty of fluids."));
}

#[tokio::test]
async fn summary_needs_enough_bot_messages() {
    let dialogue = scripted(Scripted::Declined);
    let mut session = Session::default();

    let turn = session.submit(&dialogue, "summarize").await.unwrap();
    assert!(turn.replies[0].content.contains("too short"));

    for _ in 0..4 {
        session.submit(&dialogue, "purple elephants").await.unwrap();
    }
    let turn = session.submit(&dialogue, "Summarize").await.unwrap();
    assert_eq!(turn.replies[0].content, "Advisor summary of 6 messages.");
}

#[tokio::test]
async fn offline_summary_lists_user_messages() {
    let dialogue = offline_dialogue();
    let mut session = Session::default();
    for _ in 0..5 {
        session.submit(&dialogue, "purple elephants").await.unwrap();
    }

    let turn = session.submit(&dialogue, "summarize").await.unwrap();
    let summary = &turn.replies[0].content;
    assert!(summary.starts_with("Summary of this chat."));
    assert!(summary.contains("- purple elephants"));
}

#[tokio::test]
async fn summarize_during_guess_resets_state() {
    let dialogue = offline_dialogue();
    let mut session = Session::default();
    for _ in 0..5 {
        session.submit(&dialogue, "purple elephants").await.unwrap();
    }
    let turn = session.submit(&dialogue, "common cold").await.unwrap();
    assert_eq!(turn.phase, Phase::IsAsking);

    let turn = session.submit(&dialogue, "summarize").await.unwrap();
    assert_eq!(turn.phase, Phase::NotAsking);
    assert!(session.state().candidate_queue.is_empty());
}

#[tokio::test]
async fn pause_can_be_disabled() {
    let dialogue = dialogue_with(
        scan_advisor::ConfiguredAdvisor::Offline,
        DialogueConfig {
            pause_before_first_symptom: false,
            ..DialogueConfig::default()
        },
    );
    let mut session = Session::default();
    session.submit(&dialogue, "sneezing and a runny nose").await.unwrap();

    let turn = session.submit(&dialogue, "no").await.unwrap();
    assert_eq!(turn.phase, Phase::WaitingSymptomAnswer);
    assert!(!session.state().input_locked);
    assert!(!session.state().awaiting_first_symptom_prompt);
}

#[tokio::test]
async fn cancelled_turn_unlocks_the_session() {
    let dialogue = scripted(Scripted::Hang);
    let mut session = Session::default();

    let cancelled = tokio::time::timeout(
        Duration::from_millis(20),
        session.submit(&dialogue, "sneezing and a runny nose"),
    )
    .await;
    assert!(cancelled.is_err());

    assert!(!session.state().input_locked);
    assert_eq!(session.phase(), Phase::NotAsking);
    let turn = session.submit(&dialogue, "help").await.unwrap();
    assert_eq!(turn.phase, Phase::NotAsking);
}

#[tokio::test]
async fn manager_keeps_sessions_apart() {
    let mut manager = SessionManager::new(offline_dialogue());
    let greeting = manager.open("alice");
    assert_eq!(greeting.replies.len(), 1);

    manager.submit("alice", "common cold").await.unwrap();
    manager.submit("bob", "help").await.unwrap();

    assert_eq!(manager.len(), 2);
    assert_eq!(manager.session("alice").unwrap().phase(), Phase::IsAsking);
    assert_eq!(manager.session("bob").unwrap().phase(), Phase::NotAsking);

    assert!(manager.close("alice").is_some());
    assert!(manager.session("alice").is_none());
}
