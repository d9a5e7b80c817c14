//! Conversation layer: transcript types, the controller state machine, and
//! the terminal session that drives it.

pub mod controller;
pub mod session;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Originator {
    User,
    Assistant,
}

/// One transcript entry. The transcript is append-only and chronological —
/// entries are never reordered or deleted for the life of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub originator: Originator,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        ChatMessage {
            text: text.into(),
            originator: Originator::User,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        ChatMessage {
            text: text.into(),
            originator: Originator::Assistant,
        }
    }
}
