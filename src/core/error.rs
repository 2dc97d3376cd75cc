//! Engine error type.
//!
//! `InvalidInput` and `PrematureEnd` are recovered inside the engine by
//! asking again; they only reach callers through helpers such as
//! [`crate::io::parse_index`]. The rest end the round.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the deck is empty")]
    EmptyDeck,

    #[error("the discard pile is empty")]
    NoDiscard,

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("cannot end the round on turn {turn}")]
    PrematureEnd { turn: u32 },

    #[error("input closed before the round finished")]
    InputClosed,

    #[error("play recursion exceeded depth {depth}")]
    RecursionLimit { depth: u8 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("bot policy made an invalid decision: {0}")]
    InvalidDecision(String),
}

impl GameError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        GameError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Errors the engine handles by asking again.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidInput { .. } | GameError::PrematureEnd { .. }
        )
    }
}
