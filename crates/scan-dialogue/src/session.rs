//! Session driver and per-key session ownership.

use std::collections::HashMap;

use scan_advisor::{Advisor, ConfiguredAdvisor};
use scan_core::{ChatMessage, Phase, Transcript, Turn};

use crate::error::SessionError;
use crate::machine::Dialogue;
use crate::replies;
use crate::state::ConversationState;

/// Upper bound on steps per utterance.
const MAX_TICKS_PER_TURN: usize = 256;

/// One conversation: its state and transcript.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: ConversationState,
    transcript: Transcript,
}

impl Session {
    #[must_use]
    pub fn new(thread_limit: usize) -> Self {
        Self {
            state: ConversationState::default(),
            transcript: Transcript::new(thread_limit),
        }
    }

    /// Emit the greeting if nothing has been said yet.
    pub fn greet(&mut self) -> Turn {
        let mut replies = Vec::new();
        if self.transcript.is_empty() {
            let greeting = ChatMessage::assistant(replies::GREETING);
            self.transcript.record_log_only(greeting.clone());
            replies.push(greeting);
        }
        Turn {
            replies,
            phase: self.state.phase,
        }
    }

    /// Feed one utterance and run the machine until it needs the next one.
    ///
    /// If the returned future is dropped before the turn finishes (for
    /// example while waiting on the advisor), the half-finished diagnosis is
    /// abandoned and the session accepts input again.
    ///
    /// # Errors
    ///
    /// - [`SessionError::InputLocked`] while a previous turn is unfinished.
    /// - [`SessionError::EmptyInput`] for blank input.
    /// - [`SessionError::Stalled`] if the machine never settles; the state is
    ///   reset so the session stays usable.
    pub async fn submit<A: Advisor>(
        &mut self,
        dialogue: &Dialogue<A>,
        input: &str,
    ) -> Result<Turn, SessionError> {
        if self.state.input_locked {
            return Err(SessionError::InputLocked);
        }
        let input = input.trim();
        if input.is_empty() {
            return Err(SessionError::EmptyInput);
        }

        self.state.input_locked = true;
        self.transcript.record(ChatMessage::user(input));
        let mut turn = TurnGuard(&mut self.state);

        let mut pending = Some(input);
        let mut replies = Vec::new();
        for _ in 0..MAX_TICKS_PER_TURN {
            let step = dialogue
                .step(&mut *turn.0, pending.take(), &self.transcript)
                .await;
            for text in step.replies {
                let message = ChatMessage::assistant(text);
                self.transcript.record(message.clone());
                replies.push(message);
            }
            if step.awaiting_input {
                turn.0.input_locked = false;
                return Ok(Turn {
                    replies,
                    phase: turn.0.phase,
                });
            }
        }

        tracing::warn!(phase = %turn.0.phase, "dialogue stalled; resetting session state");
        turn.0.reset();
        Err(SessionError::Stalled {
            ticks: MAX_TICKS_PER_TURN,
        })
    }

    #[must_use]
    pub const fn state(&self) -> &ConversationState {
        &self.state
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Abandon any diagnosis in progress. The transcript is kept.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

/// Resets a turn's state if it is dropped while input is still locked.
struct TurnGuard<'a>(&'a mut ConversationState);

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        if self.0.input_locked {
            tracing::warn!(phase = %self.0.phase, "turn abandoned; resetting session state");
            self.0.reset();
        }
    }
}

/// Owns one [`Session`] per key and routes utterances to it.
#[derive(Debug)]
pub struct SessionManager<A = ConfiguredAdvisor> {
    dialogue: Dialogue<A>,
    sessions: HashMap<String, Session>,
}

impl<A: Advisor> SessionManager<A> {
    #[must_use]
    pub fn new(dialogue: Dialogue<A>) -> Self {
        Self {
            dialogue,
            sessions: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn dialogue(&self) -> &Dialogue<A> {
        &self.dialogue
    }

    /// Create the session if needed and return its greeting turn.
    pub fn open(&mut self, key: &str) -> Turn {
        self.session_mut(key).greet()
    }

    /// Route `input` to the session under `key`, creating it on first use.
    ///
    /// # Errors
    ///
    /// See [`Session::submit`].
    pub async fn submit(&mut self, key: &str, input: &str) -> Result<Turn, SessionError> {
        let thread_limit = self.dialogue.config().thread_limit;
        let session = self
            .sessions
            .entry(key.to_string())
            .or_insert_with(|| Session::new(thread_limit));
        session.submit(&self.dialogue, input).await
    }

    #[must_use]
    pub fn session(&self, key: &str) -> Option<&Session> {
        self.sessions.get(key)
    }

    pub fn close(&mut self, key: &str) -> Option<Session> {
        self.sessions.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn session_mut(&mut self, key: &str) -> &mut Session {
        let thread_limit = self.dialogue.config().thread_limit;
        self.sessions
            .entry(key.to_string())
            .or_insert_with(|| Session::new(thread_limit))
    }
}
