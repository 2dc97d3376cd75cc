//! # ratcat
//!
//! Turn engine and card-exchange resolution for Rat-a-Tat-Cat, the
//! memory card game where every player holds four face-down cards and
//! tries to finish the round with the lowest total.
//!
//! ## Design Principles
//!
//! 1. **One mutable table**: All round state lives in [`Table`]; exactly
//!    one exchange resolves against it at a time.
//!
//! 2. **Collaborators at the edges**: Human decisions arrive through
//!    [`GameInput`], everything shown goes through [`GameDisplay`], and bot
//!    decisions come from a [`BotPolicy`]. The engine never touches a
//!    terminal.
//!
//! 3. **Deterministic by seed**: The deck and the bots draw from separate
//!    ChaCha streams derived from one seed, so a seed and a script of
//!    answers replay a round exactly.
//!
//! ## Modules
//!
//! - `core`: Players, table state, RNG, configuration, errors
//! - `cards`: Card values, power cards, deck composition
//! - `zones`: Hands with visibility, the discard pile
//! - `effects`: The four exchange protocols and play dispatch
//! - `rules`: Turn sequencing and end-of-round scoring
//! - `ai`: Bot decision policies
//! - `io`: Input and display collaborators

pub mod ai;
pub mod cards;
pub mod core;
pub mod effects;
pub mod io;
pub mod rules;
pub mod zones;

pub use crate::core::{
    Draw2Leftover, EmptyDeckPolicy, GameError, GameRng, GameRngState, Player, PlayerId,
    PlayerMap, RoundConfig, Table,
};

pub use crate::cards::{Card, Deck, DeckComposition, PowerCard};

pub use crate::zones::{DiscardPile, Hand, HandView, SlotView, HAND_SIZE};

pub use crate::effects::{play, Effect, Exchange, Offer, PlayContext};

pub use crate::rules::{
    score_round, PlayerScore, RoundEngine, RoundPhase, RoundResult, TurnChoice, TurnOutcome,
};

pub use crate::ai::{BotPolicy, BotView, SwapTarget, UniformPolicy};

pub use crate::io::{GameDisplay, GameInput, NullDisplay, RecordingDisplay, ScriptedInput};
