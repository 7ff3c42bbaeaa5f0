//! Chat messages and the per-session transcript.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default number of user and bot messages kept for summaries.
pub const DEFAULT_THREAD_LIMIT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One `(role, text)` pair crossing the presentation boundary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            at: Utc::now(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            at: Utc::now(),
        }
    }
}

/// Everything said in one session.
///
/// `messages` is the full log. `user_threads` and `bot_threads` are bounded
/// windows (oldest dropped first) fed to the summary advisor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    user_threads: VecDeque<String>,
    bot_threads: VecDeque<String>,
    thread_limit: usize,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(DEFAULT_THREAD_LIMIT)
    }
}

impl Transcript {
    #[must_use]
    pub fn new(thread_limit: usize) -> Self {
        Self {
            messages: Vec::new(),
            user_threads: VecDeque::new(),
            bot_threads: VecDeque::new(),
            thread_limit: thread_limit.max(1),
        }
    }

    /// Append a message, updating the matching bounded thread.
    pub fn record(&mut self, message: ChatMessage) {
        let thread = match message.role {
            Role::User => &mut self.user_threads,
            Role::Assistant => &mut self.bot_threads,
        };
        thread.push_back(message.content.clone());
        while thread.len() > self.thread_limit {
            thread.pop_front();
        }
        self.messages.push(message);
    }

    /// Append to the full log only. Used for the greeting, which summaries skip.
    pub fn record_log_only(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub const fn user_threads(&self) -> &VecDeque<String> {
        &self.user_threads
    }

    #[must_use]
    pub const fn bot_threads(&self) -> &VecDeque<String> {
        &self.bot_threads
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
