//! # scan-dialogue
//!
//! The SymptoScan conversation engine.
//!
//! A [`Dialogue`] is the transition function: given a session's
//! [`ConversationState`] and at most one utterance it performs one reaction
//! and reports whether it now needs input. A [`Session`] drives that function
//! in a loop for each utterance and keeps the transcript; a
//! [`SessionManager`] owns sessions by key.
//!
//! Each candidate disease is confirmed either directly ("yes" to the guess)
//! or through a [`SymptomChecklist`] whose likelihood is measured against its
//! original length.

mod checklist;
mod error;
mod machine;
mod replies;
mod session;
mod state;

pub use checklist::SymptomChecklist;
pub use error::SessionError;
pub use machine::{Dialogue, Step};
pub use session::{Session, SessionManager};
pub use state::ConversationState;
