//! End-to-end conversations through the state machine.

mod common;

use pretty_assertions::assert_eq;
use scan_core::{CandidateSource, Phase, Role, Transcript};
use scan_dialogue::{ConversationState, Session, SessionError, SymptomChecklist};

use common::{candidate, drive, offline_dialogue};

const COLD_QUERY: &str = "I am experiencing symptoms such as runny nose, coughing, sore throat";

#[tokio::test]
async fn description_query_guesses_common_cold() {
    let dialogue = offline_dialogue();
    let mut session = Session::default();

    let turn = session.submit(&dialogue, COLD_QUERY).await.unwrap();

    assert_eq!(turn.phase, Phase::IsAsking);
    assert_eq!(turn.replies.len(), 1);
    assert!(turn.replies[0].content.contains("Common Cold"));
    let front = session.state().current_candidate().unwrap();
    assert_eq!(front.name(), "Common Cold");
    assert!(front.score >= 50.0, "score {}", front.score);
}

#[tokio::test]
async fn yes_confirms_and_clears_state() {
    let dialogue = offline_dialogue();
    let mut session = Session::default();
    session.submit(&dialogue, COLD_QUERY).await.unwrap();

    let turn = session.submit(&dialogue, "Yes").await.unwrap();

    assert_eq!(turn.phase, Phase::NotAsking);
    assert_eq!(session.state(), &ConversationState::default());
    let reply = &turn.replies[0].content;
    assert!(reply.contains("Common Cold"));
    assert!(reply.contains("Rest and drink plenty of fluids."));
}

#[tokio::test]
async fn unrelated_text_fails_to_scan() {
    let dialogue = offline_dialogue();
    let mut session = Session::default();

    let turn = session.submit(&dialogue, "purple elephants").await.unwrap();

    assert_eq!(turn.phase, Phase::NotAsking);
    assert!(turn.replies[0].content.contains("failed to scan"));
    assert!(session.state().candidate_queue.is_empty());
}

#[tokio::test]
async fn rejecting_sole_candidate_goes_straight_to_scan_failed() {
    let dialogue = offline_dialogue();
    let mut state = ConversationState {
        phase: Phase::IsAsking,
        candidate_queue: [candidate(0)].into(),
        ..ConversationState::default()
    };
    let transcript = Transcript::default();

    let step = dialogue.step(&mut state, Some("no"), &transcript).await;
    assert_eq!(state.phase, Phase::ScanFailed);
    assert!(step.replies.is_empty());
    assert!(!step.awaiting_input);

    let step = dialogue.step(&mut state, None, &transcript).await;
    assert_eq!(state.phase, Phase::NotAsking);
    assert!(step.replies[0].contains("failed to scan"));
    assert!(step.awaiting_input);
}

fn checking(first: usize, rest: &[usize]) -> ConversationState {
    let mut state = ConversationState {
        phase: Phase::AskingSymptom,
        candidate_queue: std::iter::once(first)
            .chain(rest.iter().copied())
            .map(candidate)
            .collect(),
        ..ConversationState::default()
    };
    state.activate_front();
    state
}

#[tokio::test]
async fn three_of_five_confirms_from_calculation() {
    let dialogue = offline_dialogue();
    let transcript = Transcript::default();
    let mut state = checking(0, &[1]);

    let replies = drive(&dialogue, &mut state, None, &transcript).await;
    assert_eq!(
        replies,
        vec!["Are you experiencing: Runny nose? Excess nasal discharge."]
    );

    for answer in ["yes", "yes", "yes", "no"] {
        drive(&dialogue, &mut state, Some(answer), &transcript).await;
        assert_eq!(state.phase, Phase::WaitingSymptomAnswer);
    }
    let replies = drive(&dialogue, &mut state, Some("no"), &transcript).await;

    assert_eq!(state.phase, Phase::NotAsking);
    assert_eq!(replies.len(), 1);
    assert!(replies[0].starts_with("You might be experiencing Common Cold"));
    assert!(replies[0].contains("Rest and drink plenty of fluids."));
    assert!(state.candidate_queue.is_empty());
}

#[tokio::test]
async fn two_of_five_moves_to_next_candidate() {
    let dialogue = offline_dialogue();
    let transcript = Transcript::default();
    let mut state = checking(0, &[1]);
    drive(&dialogue, &mut state, None, &transcript).await;

    for answer in ["yes", "yes", "no", "no"] {
        drive(&dialogue, &mut state, Some(answer), &transcript).await;
    }
    let replies = drive(&dialogue, &mut state, Some("no"), &transcript).await;

    assert_eq!(state.phase, Phase::WaitingSymptomAnswer);
    assert_eq!(state.current_candidate().unwrap().name(), "Influenza");
    let checklist = state.checklist.as_ref().unwrap();
    assert_eq!(checklist.disease_index(), 1);
    assert!(checklist.confirmed().is_empty());
    assert_eq!(checklist.current(), Some("fever"));
    assert_eq!(
        replies,
        vec!["Are you experiencing: Fever? A raised body temperature."]
    );
}

#[tokio::test]
async fn empty_checklist_scores_zero_and_moves_on() {
    let dialogue = offline_dialogue();
    let transcript = Transcript::default();
    let mut state = checking(4, &[2]);
    assert_eq!(state.checklist.as_ref().map(SymptomChecklist::original_len), Some(0));

    let replies = drive(&dialogue, &mut state, None, &transcript).await;

    assert_eq!(state.current_candidate().unwrap().name(), "Migraine");
    assert_eq!(replies, vec!["Are you experiencing: Headache? Pain in the head."]);
}

#[tokio::test]
async fn last_candidate_rejected_symptoms_fail_scan() {
    let dialogue = offline_dialogue();
    let transcript = Transcript::default();
    let mut state = checking(2, &[]);
    drive(&dialogue, &mut state, None, &transcript).await;

    drive(&dialogue, &mut state, Some("no"), &transcript).await;
    let replies = drive(&dialogue, &mut state, Some("no"), &transcript).await;

    assert_eq!(state.phase, Phase::NotAsking);
    assert!(replies[0].contains("failed to scan"));
}

#[tokio::test]
async fn last_candidate_checklist_fails_even_when_affirmed() {
    let dialogue = offline_dialogue();
    let mut session = Session::default();

    let turn = session
        .submit(&dialogue, "sneezing and a runny nose")
        .await
        .unwrap();
    assert_eq!(turn.phase, Phase::IsAsking);
    let queue: Vec<&str> = session
        .state()
        .candidate_queue
        .iter()
        .map(|c| c.name())
        .collect();
    assert_eq!(queue, vec!["Common Cold", "Allergic Rhinitis"]);
    assert!(
        session
            .state()
            .candidate_queue
            .iter()
            .all(|c| c.source == CandidateSource::SymptomDescription)
    );

    let turn = session.submit(&dialogue, "no").await.unwrap();
    assert_eq!(turn.phase, Phase::WaitingSymptomAnswer);
    assert!(turn.replies[0].content.starts_with("Are you experiencing: Sneezing?"));
    assert!(!session.state().input_locked);

    let turn = session.submit(&dialogue, "yes").await.unwrap();
    assert!(turn.replies[0].content.starts_with("Are you experiencing: Itchy eyes?"));

    let turn = session.submit(&dialogue, "YES").await.unwrap();
    assert_eq!(turn.phase, Phase::NotAsking);
    assert_eq!(turn.replies.len(), 1);
    assert!(turn.replies[0].content.contains("failed to scan"));
    assert!(session.state().candidate_queue.is_empty());
}

#[tokio::test]
async fn sole_candidate_with_every_symptom_affirmed_fails_scan() {
    let dialogue = offline_dialogue();
    let transcript = Transcript::default();
    let mut state = checking(3, &[]);
    drive(&dialogue, &mut state, None, &transcript).await;

    let replies = drive(&dialogue, &mut state, Some("yes"), &transcript).await;
    assert!(replies[0].starts_with("Are you experiencing: Itchy eyes?"));
    let replies = drive(&dialogue, &mut state, Some("yes"), &transcript).await;

    assert_eq!(state, ConversationState::default());
    assert_eq!(replies.len(), 1);
    assert!(replies[0].contains("failed to scan"));
}

#[tokio::test]
async fn pause_tick_locks_input_once() {
    let dialogue = offline_dialogue();
    let transcript = Transcript::default();
    let mut state = checking(0, &[1]);

    let step = dialogue.step(&mut state, None, &transcript).await;
    assert!(step.replies.is_empty());
    assert!(!step.awaiting_input);
    assert!(state.input_locked);
    assert!(!state.awaiting_first_symptom_prompt);
    assert_eq!(state.phase, Phase::AskingSymptom);

    let step = dialogue.step(&mut state, None, &transcript).await;
    assert_eq!(
        step.replies,
        vec!["Are you experiencing: Runny nose? Excess nasal discharge.".to_string()]
    );
    assert!(step.awaiting_input);
    assert_eq!(state.phase, Phase::WaitingSymptomAnswer);
    assert!(!state.input_locked);
}

#[tokio::test]
async fn stop_abandons_checklist() {
    let dialogue = offline_dialogue();
    let transcript = Transcript::default();
    let mut state = checking(0, &[1]);
    drive(&dialogue, &mut state, None, &transcript).await;

    let replies = drive(&dialogue, &mut state, Some("  Stop "), &transcript).await;

    assert_eq!(state, ConversationState::default());
    assert!(replies[0].contains("continue this chat"));
}

#[tokio::test]
async fn stop_after_guess_resets() {
    let dialogue = offline_dialogue();
    let mut session = Session::default();
    session.submit(&dialogue, COLD_QUERY).await.unwrap();

    let turn = session.submit(&dialogue, "stop").await.unwrap();

    assert_eq!(turn.phase, Phase::NotAsking);
    assert!(session.state().candidate_queue.is_empty());
}

#[tokio::test]
async fn help_is_answered_without_ranking() {
    let dialogue = offline_dialogue();
    let mut session = Session::default();

    let turn = session.submit(&dialogue, "HELP").await.unwrap();

    assert_eq!(turn.phase, Phase::NotAsking);
    assert!(turn.replies[0].content.contains("Commands"));
}

#[tokio::test]
async fn greeting_and_transcript() {
    let dialogue = offline_dialogue();
    let mut session = Session::default();

    let greeting = session.greet();
    assert_eq!(greeting.replies.len(), 1);
    assert!(session.greet().replies.is_empty());

    session.submit(&dialogue, COLD_QUERY).await.unwrap();
    let roles: Vec<Role> = session
        .transcript()
        .messages()
        .iter()
        .map(|m| m.role)
        .collect();
    assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
    assert_eq!(session.transcript().bot_threads().len(), 1);
}

#[tokio::test]
async fn blank_input_is_rejected() {
    let dialogue = offline_dialogue();
    let mut session = Session::default();
    let err = session.submit(&dialogue, "   ").await.unwrap_err();
    assert_eq!(err, SessionError::EmptyInput);
    assert!(session.transcript().is_empty());
}
