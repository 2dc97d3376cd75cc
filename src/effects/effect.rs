//! What a resolved play did.
//!
//! Every exchange protocol returns an `Effect` describing the mutation it
//! made. Draw2 nests the effect of the card it went on to play.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// A card offered to the acting player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub card: Card,
    /// Onlookers must not learn the card's value.
    pub hidden: bool,
}

impl Offer {
    /// Card everyone has seen (the discard top, or a deck card the human looked at).
    #[must_use]
    pub const fn visible(card: Card) -> Self {
        Self { card, hidden: false }
    }

    /// Card only the acting player has seen.
    #[must_use]
    pub const fn hidden(card: Card) -> Self {
        Self { card, hidden: true }
    }
}

/// Outcome of one exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// The offered card replaced `slot`; the old card went to the discard top.
    Exchanged {
        player: PlayerId,
        slot: usize,
        kept: Card,
        discarded: Card,
    },

    /// A Peek was discarded. Humans looked at `slot`; bots look at nothing.
    Peeked {
        player: PlayerId,
        slot: Option<usize>,
    },

    /// A Draw2 was discarded, two cards were drawn, one was played.
    DrewTwo {
        player: PlayerId,
        drawn: [Card; 2],
        /// Index into `drawn` of the card that was played.
        kept: usize,
        leftover: Card,
        then: Box<Effect>,
    },

    /// A Swap was discarded and two slots traded cards.
    Swapped {
        player: PlayerId,
        own_slot: usize,
        opponent: PlayerId,
        their_slot: usize,
        /// Card the acting player received.
        taken: Card,
        /// Card the opponent received.
        given: Card,
    },
}

impl Effect {
    /// Who made the play.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            Effect::Exchanged { player, .. }
            | Effect::Peeked { player, .. }
            | Effect::DrewTwo { player, .. }
            | Effect::Swapped { player, .. } => *player,
        }
    }

    /// The innermost play (through any Draw2 chain).
    #[must_use]
    pub fn innermost(&self) -> &Effect {
        match self {
            Effect::DrewTwo { then, .. } => then.innermost(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_and_innermost() {
        let inner = Effect::Exchanged {
            player: PlayerId::new(2),
            slot: 1,
            kept: Card::number(0),
            discarded: Card::number(9),
        };
        let outer = Effect::DrewTwo {
            player: PlayerId::new(2),
            drawn: [Card::number(0), Card::number(5)],
            kept: 0,
            leftover: Card::number(5),
            then: Box::new(inner.clone()),
        };

        assert_eq!(outer.player(), PlayerId::new(2));
        assert_eq!(outer.innermost(), &inner);
        assert_eq!(inner.innermost(), &inner);
    }

    #[test]
    fn test_offer_constructors() {
        assert!(!Offer::visible(Card::PEEK).hidden);
        assert!(Offer::hidden(Card::number(3)).hidden);
    }
}
