//! End-of-round scoring.
//!
//! Power cards still in a hand are replaced by fresh deck draws (again
//! and again until a number comes up), then each hand is summed. The
//! lowest total wins; ties share the win.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameError, PlayerId, Table};
use crate::zones::{Hand, HAND_SIZE};

/// One player's final hand and score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player: PlayerId,
    pub name: String,
    pub hand: [Card; HAND_SIZE],
    pub score: u32,
}

/// Scores for every seat and the winners.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// In seat order.
    pub scores: Vec<PlayerScore>,
    /// Every player on the lowest score.
    pub winners: Vec<PlayerId>,
}

impl RoundResult {
    pub fn from_scores(scores: Vec<PlayerScore>) -> Self {
        let lowest = scores.iter().map(|s| s.score).min();
        let winners = scores
            .iter()
            .filter(|s| Some(s.score) == lowest)
            .map(|s| s.player)
            .collect();
        Self { scores, winners }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }

    #[must_use]
    pub fn score_of(&self, player: PlayerId) -> Option<u32> {
        self.scores
            .iter()
            .find(|s| s.player == player)
            .map(|s| s.score)
    }

    pub fn winner_names(&self) -> Vec<&str> {
        self.scores
            .iter()
            .filter(|s| self.is_winner(s.player))
            .map(|s| s.name.as_str())
            .collect()
    }
}

/// Replace every power card in `hand` with draws until all four slots are
/// numbers. Returns the power cards taken out, in the order removed.
pub fn finalize_hand(
    hand: &mut Hand,
    mut draw: impl FnMut() -> Result<Card, GameError>,
) -> Result<Vec<Card>, GameError> {
    let mut returned = Vec::new();
    let slots: Vec<usize> = hand.power_slots().collect();
    for slot in slots {
        while hand.card(slot).is_power() {
            let card = draw()?;
            returned.push(hand.replace(slot, card));
        }
    }
    Ok(returned)
}

/// Sum of the numeric cards in `hand`. Only meaningful once finalized.
#[must_use]
pub fn score_hand(hand: &Hand) -> u32 {
    hand.cards()
        .iter()
        .filter_map(|c| c.value())
        .map(u32::from)
        .sum()
}

/// Finalize and score every hand at the table.
///
/// Power cards taken out of hands go beneath the discard top once every
/// hand is finalized, so they cannot be redrawn during scoring. Scoring
/// works on a copy of the table; on error the table is left as it was.
pub fn score_round(table: &mut Table) -> Result<RoundResult, GameError> {
    let mut scratch = table.clone();
    let result = finalize_all(&mut scratch)?;
    *table = scratch;
    Ok(result)
}

fn finalize_all(table: &mut Table) -> Result<RoundResult, GameError> {
    let mut returned = Vec::new();
    let mut scores = Vec::with_capacity(table.player_count());

    let seats: Vec<PlayerId> = table.players.player_ids().collect();
    for player in seats {
        let mut hand = table.player(player).hand().clone();
        returned.extend(finalize_hand(&mut hand, || table.draw())?);

        let score = score_hand(&hand);
        let seated = table.player_mut(player);
        *seated.hand_mut() = hand;
        scores.push(PlayerScore {
            player,
            name: seated.name().to_string(),
            hand: seated.hand().cards(),
            score,
        });
    }

    for card in returned {
        table.discard.bury(card);
    }
    Ok(RoundResult::from_scores(scores))
}
