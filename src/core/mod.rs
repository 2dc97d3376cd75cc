//! Core round types: players, state, RNG, configuration, errors.
//!
//! This module holds the building blocks every other module uses.
//! The rules in `effects` and `rules` operate on a [`Table`].

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{Draw2Leftover, EmptyDeckPolicy, RoundConfig};
pub use error::GameError;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::Table;
