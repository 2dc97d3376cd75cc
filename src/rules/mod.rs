//! Turn sequencing and scoring.
//!
//! - `RoundEngine`: Opening, turn loop, end requests, final results
//! - `score_round`: Power-card replacement and hand totals
//!
//! The engine hands every played card to `effects::play`; it never
//! resolves an exchange itself.

pub mod engine;
pub mod scoring;

pub use engine::{RoundEngine, RoundPhase, TurnChoice, TurnOutcome, END_TOKEN};
pub use scoring::{finalize_hand, score_hand, score_round, PlayerScore, RoundResult};
