//! Round configuration.
//!
//! `RoundConfig` carries everything that shapes a round: seed, seats,
//! deck composition, and the policies for the situations the table rules
//! leave open (empty deck, the card Draw2 leaves behind, runaway
//! recursion, non-interactive turn limits).

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::cards::DeckComposition;
use crate::zones::HAND_SIZE;

/// What a draw does when the deck has run out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyDeckPolicy {
    /// Put every card beneath the discard top back into the deck.
    #[default]
    Recycle,
    /// Fail the draw with `GameError::EmptyDeck`.
    Fail,
}

/// Where the card not kept from a Draw2 goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Draw2Leftover {
    /// Removed from circulation for the rest of the round.
    #[default]
    Destroy,
    /// Placed in the discard pile beneath the top card.
    Bury,
}

/// Complete round configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Seed for the deck and bot streams.
    pub seed: u64,

    /// Number of bot seats.
    pub bot_count: usize,

    /// Whether seat 0 is a human. Bot-only tables are for simulation.
    pub with_human: bool,

    /// Default name for the human seat.
    pub human_name: String,

    /// Ask the human for a name at the opening.
    pub prompt_for_name: bool,

    /// Reminder about ending the round fires at this many turns per player.
    pub reminder_turns_per_player: u32,

    /// Smallest personal turn number (1-based) on which an end request is honored.
    pub min_turn_to_end: u32,

    /// End the round once the shared turn counter reaches this value.
    pub max_turns: Option<u32>,

    /// Deck contents.
    pub composition: DeckComposition,

    pub empty_deck: EmptyDeckPolicy,

    pub draw2_leftover: Draw2Leftover,

    /// Deepest nesting of plays (Draw2 replays the card it keeps).
    pub max_play_depth: u8,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            bot_count: 4,
            with_human: true,
            human_name: "Luke".to_string(),
            prompt_for_name: true,
            reminder_turns_per_player: 6,
            min_turn_to_end: 2,
            max_turns: None,
            composition: DeckComposition::default(),
            empty_deck: EmptyDeckPolicy::default(),
            draw2_leftover: Draw2Leftover::default(),
            max_play_depth: 8,
        }
    }
}

impl RoundConfig {
    /// Create a configuration with the given seed and default table settings.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_bots(mut self, count: usize) -> Self {
        self.bot_count = count;
        self
    }

    #[must_use]
    pub fn with_human_name(mut self, name: impl Into<String>) -> Self {
        self.human_name = name.into();
        self
    }

    /// Seat only bots.
    #[must_use]
    pub fn bots_only(mut self) -> Self {
        self.with_human = false;
        self
    }

    #[must_use]
    pub fn without_name_prompt(mut self) -> Self {
        self.prompt_for_name = false;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    #[must_use]
    pub fn with_composition(mut self, composition: DeckComposition) -> Self {
        self.composition = composition;
        self
    }

    #[must_use]
    pub fn with_empty_deck(mut self, policy: EmptyDeckPolicy) -> Self {
        self.empty_deck = policy;
        self
    }

    #[must_use]
    pub fn with_draw2_leftover(mut self, leftover: Draw2Leftover) -> Self {
        self.draw2_leftover = leftover;
        self
    }

    /// Total seats at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.bot_count + usize::from(self.with_human)
    }

    /// Check the configuration can deal a round.
    pub fn validate(&self) -> Result<(), GameError> {
        let players = self.player_count();
        if players < 2 {
            return Err(GameError::InvalidConfig(format!(
                "need at least 2 players, got {players}"
            )));
        }
        if players > 255 {
            return Err(GameError::InvalidConfig(format!(
                "at most 255 players supported, got {players}"
            )));
        }
        // Every hand plus the opening discard must come off the deck.
        let needed = players * HAND_SIZE + 1;
        let available = self.composition.total();
        if needed > available {
            return Err(GameError::InvalidConfig(format!(
                "{players} players need {needed} cards but the deck holds {available}"
            )));
        }
        if self.max_play_depth == 0 {
            return Err(GameError::InvalidConfig(
                "max_play_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
