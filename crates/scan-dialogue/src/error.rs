use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The bot is still responding to the previous utterance.
    #[error("session is busy; input is locked until the bot finishes responding")]
    InputLocked,

    #[error("input is empty")]
    EmptyInput,

    /// The machine failed to reach an input point within the tick budget.
    #[error("dialogue did not settle after {ticks} steps")]
    Stalled { ticks: usize },
}
