//! The dialogue transition function.

use std::sync::Arc;

use scan_advisor::{Advisor, AdvisorError, ConfiguredAdvisor};
use scan_catalog::Catalog;
use scan_config::{DialogueConfig, MatchingConfig};
use scan_core::{Candidate, CandidateSource, Phase, RankMode, Transcript, TriageError};
use scan_match::CandidateRanker;

use crate::checklist::SymptomChecklist;
use crate::replies;
use crate::state::ConversationState;

/// Result of a single [`Dialogue::step`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    pub replies: Vec<String>,
    /// `true` when the machine cannot progress without a new utterance.
    pub awaiting_input: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Help,
    Yes,
    Stop,
    Summarize,
    Other,
}

impl Command {
    fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case("help") {
            Self::Help
        } else if input.eq_ignore_ascii_case("yes") {
            Self::Yes
        } else if input.eq_ignore_ascii_case("stop") {
            Self::Stop
        } else if input.eq_ignore_ascii_case("summarize") {
            Self::Summarize
        } else {
            Self::Other
        }
    }
}

/// Shared, read-only dialogue logic. One instance serves every session.
#[derive(Debug)]
pub struct Dialogue<A = ConfiguredAdvisor> {
    ranker: CandidateRanker,
    advisor: A,
    config: DialogueConfig,
}

impl<A: Advisor> Dialogue<A> {
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        matching: MatchingConfig,
        config: DialogueConfig,
        advisor: A,
    ) -> Self {
        Self {
            ranker: CandidateRanker::new(catalog, matching),
            advisor,
            config,
        }
    }

    #[must_use]
    pub const fn ranker(&self) -> &CandidateRanker {
        &self.ranker
    }

    #[must_use]
    pub const fn config(&self) -> &DialogueConfig {
        &self.config
    }

    /// Advance `state` by one reaction.
    ///
    /// `input` is consumed only by phases that wait for the user; the
    /// session driver passes it to the first step of a turn and `None`
    /// afterwards.
    ///
    /// The optional pause before a checklist's first question sets
    /// `input_locked`; emitting that question clears it again.
    pub async fn step(
        &self,
        state: &mut ConversationState,
        input: Option<&str>,
        transcript: &Transcript,
    ) -> Step {
        let from = state.phase;
        let mut replies = Vec::new();

        match (from, input) {
            (Phase::NotAsking | Phase::IsAsking | Phase::WaitingSymptomAnswer, None) => {}
            (Phase::NotAsking, Some(text)) => {
                self.on_free_text(state, text, transcript, &mut replies).await;
            }
            (Phase::IsAsking, Some(text)) => {
                self.on_guess_answer(state, text, transcript, &mut replies)
                    .await;
            }
            (Phase::AskingSymptom, _) => self.ask_symptom(state, &mut replies),
            (Phase::WaitingSymptomAnswer, Some(text)) => {
                Self::on_symptom_answer(state, text, &mut replies);
            }
            (Phase::WaitingSymptomCalculation, _) => {
                self.calculate(state, &mut replies).await;
            }
            (Phase::ScanFailed, _) => {
                state.reset();
                replies.push(replies::scan_failed());
            }
        }

        debug_assert!(
            (input.is_none() && from.awaits_input()) || from.can_transition_to(state.phase),
            "illegal transition {from} -> {}",
            state.phase
        );
        if from != state.phase {
            tracing::debug!(%from, to = %state.phase, "dialogue transition");
        }

        Step {
            replies,
            awaiting_input: state.phase.awaits_input(),
        }
    }

    /// Candidate selection for a free-text description.
    ///
    /// Disease-name match first. When that misses, the advisor is consulted
    /// if one is available, and the local symptom-description match is the
    /// final fallback.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::NoMatchFound`] when nothing matches, or
    /// [`TriageError::MalformedExternalResponse`] when the advisor answered
    /// with something unusable.
    pub async fn rank_candidates(&self, query: &str) -> Result<Vec<Candidate>, TriageError> {
        if !self.advisor.is_available() {
            return self.ranker.rank_auto(query);
        }

        let best_by_name = match self.ranker.rank(query, RankMode::DiseaseName) {
            Ok(candidates) => return Ok(candidates),
            Err(TriageError::NoMatchFound { best_score }) => best_score,
            Err(other) => return Err(other),
        };

        match self.advise(query).await {
            Some(result) => result,
            None => self
                .ranker
                .rank(query, RankMode::SymptomDescription)
                .map_err(|err| match err {
                    TriageError::NoMatchFound { best_score } => TriageError::NoMatchFound {
                        best_score: best_score.max(best_by_name),
                    },
                    other => other,
                }),
        }
    }

    /// Ask the advisor to rank `query`. `None` means "fall back locally".
    async fn advise(&self, query: &str) -> Option<Result<Vec<Candidate>, TriageError>> {
        let catalog = self.ranker.catalog();
        let table = match catalog.diseases_csv() {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(%e, "could not render disease table for advisor");
                return None;
            }
        };

        match self.advisor.rank_diseases(&table, query).await {
            Ok(indices) => {
                let candidates: Vec<Candidate> = indices
                    .into_iter()
                    .filter_map(|i| catalog.disease(i))
                    .map(|d| Candidate::new(d.clone(), 0.0, CandidateSource::Advisor))
                    .collect();
                tracing::debug!(candidates = candidates.len(), "advisor ranked query");
                if candidates.is_empty() {
                    return Some(Err(TriageError::MalformedExternalResponse(
                        "row_index outside the disease table".into(),
                    )));
                }
                Some(Ok(candidates))
            }
            Err(e) if e.is_unavailable() => {
                tracing::warn!(%e, "advisor unavailable; using local description match");
                None
            }
            Err(AdvisorError::Declined) => Some(Err(TriageError::NoMatchFound { best_score: 0.0 })),
            Err(e) => Some(Err(TriageError::MalformedExternalResponse(e.to_string()))),
        }
    }

    async fn on_free_text(
        &self,
        state: &mut ConversationState,
        text: &str,
        transcript: &Transcript,
        replies: &mut Vec<String>,
    ) {
        match Command::parse(text) {
            Command::Help => replies.push(replies::help()),
            Command::Summarize => replies.push(self.summary(transcript).await),
            Command::Yes | Command::Stop | Command::Other => {
                match self.rank_candidates(text).await {
                    Ok(candidates) => {
                        state.candidate_queue = candidates.into();
                        if let Some(front) = state.current_candidate() {
                            replies.push(replies::guess(&front.disease));
                            state.phase = Phase::IsAsking;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(%e, scan_failure = e.is_scan_failure(), "no candidates");
                        state.reset();
                        replies.push(replies::scan_failed());
                    }
                }
            }
        }
    }

    async fn on_guess_answer(
        &self,
        state: &mut ConversationState,
        text: &str,
        transcript: &Transcript,
        replies: &mut Vec<String>,
    ) {
        match Command::parse(text) {
            Command::Stop => {
                state.reset();
                replies.push(replies::restart_prompt());
            }
            Command::Summarize => {
                state.reset();
                replies.push(self.summary(transcript).await);
            }
            Command::Yes => {
                if let Some(front) = state.candidate_queue.pop_front() {
                    let recommendation = self.recommendation(&front).await;
                    replies.push(replies::confirmed(&front.disease, &recommendation));
                }
                state.reset();
            }
            Command::Help | Command::Other => {
                if state.advance_candidate() {
                    state.phase = Phase::AskingSymptom;
                } else {
                    tracing::debug!(e = %TriageError::QueueExhausted, "sole candidate rejected");
                    state.phase = Phase::ScanFailed;
                }
            }
        }
    }

    fn ask_symptom(&self, state: &mut ConversationState, replies: &mut Vec<String>) {
        if state.awaiting_first_symptom_prompt {
            state.awaiting_first_symptom_prompt = false;
            if self.config.pause_before_first_symptom {
                state.input_locked = true;
                return;
            }
        }

        let Some(symptom) = state.checklist.as_ref().and_then(|c| c.current()) else {
            // The last candidate is never scored: an exhausted checklist with
            // nothing behind it fails the scan.
            if state.candidate_queue.len() <= 1 {
                tracing::debug!(e = %TriageError::QueueExhausted, "last checklist exhausted");
                state.phase = Phase::ScanFailed;
            } else {
                state.phase = Phase::WaitingSymptomCalculation;
            }
            return;
        };
        let explanation = self
            .ranker
            .explain_symptom(symptom)
            .map(|record| record.explanation.as_str());
        replies.push(replies::symptom_question(symptom, explanation));
        state.input_locked = false;
        state.phase = Phase::WaitingSymptomAnswer;
    }

    fn on_symptom_answer(state: &mut ConversationState, text: &str, replies: &mut Vec<String>) {
        let command = Command::parse(text);
        if command == Command::Stop {
            state.reset();
            replies.push(replies::restart_prompt());
            return;
        }
        if let Some(checklist) = state.checklist.as_mut() {
            let answered = if command == Command::Yes {
                checklist.confirm()
            } else {
                checklist.reject()
            };
            tracing::debug!(symptom = ?answered, confirmed = command == Command::Yes, "symptom answered");
        }
        state.phase = Phase::AskingSymptom;
    }

    async fn calculate(&self, state: &mut ConversationState, replies: &mut Vec<String>) {
        let likelihood = state
            .checklist
            .as_ref()
            .map_or(0.0, SymptomChecklist::likelihood);

        if likelihood >= self.config.confirm_threshold {
            if let Some(front) = state.candidate_queue.pop_front() {
                let recommendation = self.recommendation(&front).await;
                replies.push(replies::likely(&front.disease, likelihood, &recommendation));
                state.reset();
                return;
            }
        }

        let exhausted = TriageError::ChecklistExhausted {
            disease_index: state
                .checklist
                .as_ref()
                .map_or(usize::MAX, SymptomChecklist::disease_index),
            likelihood,
        };
        tracing::debug!(e = %exhausted, "moving to next candidate");

        if state.advance_candidate() {
            state.phase = Phase::AskingSymptom;
        } else {
            tracing::debug!(e = %TriageError::QueueExhausted, "all candidates ruled out");
            state.phase = Phase::ScanFailed;
        }
    }

    /// Advisor recommendation when available, otherwise the catalog text.
    async fn recommendation(&self, candidate: &Candidate) -> String {
        let local = candidate.disease.recommendation.clone();
        if !self.advisor.is_available() {
            return local;
        }
        match self.advisor.recommend(candidate.name()).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(%e, disease = candidate.name(), "advisor recommendation failed");
                local
            }
        }
    }

    async fn summary(&self, transcript: &Transcript) -> String {
        if transcript.bot_threads().len() < self.config.summary_min_replies {
            return replies::SUMMARY_TOO_SHORT.to_string();
        }
        if self.advisor.is_available() {
            let user: Vec<String> = transcript.user_threads().iter().cloned().collect();
            let bot: Vec<String> = transcript.bot_threads().iter().cloned().collect();
            match self.advisor.summarize(&user, &bot).await {
                Ok(text) => return text,
                Err(e) => tracing::warn!(%e, "advisor summary failed; using local summary"),
            }
        }
        replies::local_summary(transcript.user_threads())
    }
}
