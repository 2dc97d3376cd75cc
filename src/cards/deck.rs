//! The draw deck.
//!
//! The deck is an unordered bag: every draw removes a uniformly random
//! remaining card, so there is nothing to shuffle. Cards only come back
//! through explicit recycling of the discard pile.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, PowerCard};
use crate::core::{GameError, GameRng};

/// How many copies of each card a fresh deck holds.
///
/// The default is the table's deck: four each of 0 through 8, three of
/// each power card, and nine 9s (54 cards).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    /// Copies of each value 0..=8.
    pub copies_per_value: usize,
    /// Copies of each power card.
    pub copies_per_power: usize,
    /// Copies of 9.
    pub nines: usize,
}

impl Default for DeckComposition {
    fn default() -> Self {
        Self {
            copies_per_value: 4,
            copies_per_power: 3,
            nines: 9,
        }
    }
}

impl DeckComposition {
    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.copies_per_value * 9 + self.copies_per_power * PowerCard::ALL.len() + self.nines
    }

    /// Every card, in a fixed order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.total());
        for _ in 0..self.copies_per_value {
            cards.extend((0..9).map(Card::Number));
        }
        for _ in 0..self.copies_per_power {
            cards.extend(PowerCard::ALL.iter().map(|&p| Card::Power(p)));
        }
        cards.extend(std::iter::repeat(Card::Number(9)).take(self.nines));
        cards
    }

    /// Copies per card.
    #[must_use]
    pub fn counts(&self) -> FxHashMap<Card, usize> {
        count_cards(self.cards())
    }
}

/// Tally a collection of cards.
pub fn count_cards(cards: impl IntoIterator<Item = Card>) -> FxHashMap<Card, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    counts
}

/// Remaining undrawn cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Fresh deck with the given composition.
    pub fn new(composition: &DeckComposition) -> Self {
        Self {
            cards: composition.cards(),
        }
    }

    /// Deck holding exactly these cards.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, in no meaningful order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove and return a uniformly random remaining card.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<Card, GameError> {
        if self.cards.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        let idx = rng.gen_range_usize(0..self.cards.len());
        Ok(self.cards.swap_remove(idx))
    }

    /// Return cards to the deck.
    pub fn restock(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_composition() {
        let composition = DeckComposition::default();
        let counts = composition.counts();

        assert_eq!(composition.total(), 54);
        for v in 0..9 {
            assert_eq!(counts[&Card::Number(v)], 4);
        }
        assert_eq!(counts[&Card::Number(9)], 9);
        assert_eq!(counts[&Card::PEEK], 3);
        assert_eq!(counts[&Card::SWAP], 3);
        assert_eq!(counts[&Card::DRAW2], 3);
    }

    #[test]
    fn test_draw_removes_card() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new(&DeckComposition::default());

        let card = deck.draw(&mut rng).unwrap();
        assert_eq!(deck.len(), 53);

        let counts = count_cards(deck.cards().iter().copied());
        let expected = DeckComposition::default().counts();
        assert_eq!(counts.get(&card).copied().unwrap_or(0) + 1, expected[&card]);
    }

    #[test]
    fn test_draw_empty_deck() {
        let mut rng = GameRng::new(1);
        let mut deck = Deck::from_cards([Card::number(2)]);

        assert_eq!(deck.draw(&mut rng), Ok(Card::number(2)));
        assert_eq!(deck.draw(&mut rng), Err(GameError::EmptyDeck));
    }

    #[test]
    fn test_draw_is_deterministic() {
        let draw_all = |seed| {
            let mut rng = GameRng::new(seed);
            let mut deck = Deck::new(&DeckComposition::default());
            (0..54).map(|_| deck.draw(&mut rng).unwrap()).collect::<Vec<_>>()
        };
        assert_eq!(draw_all(5), draw_all(5));
        assert_ne!(draw_all(5), draw_all(6));
    }

    #[test]
    fn test_restock() {
        let mut deck = Deck::from_cards([]);
        deck.restock([Card::number(1), Card::PEEK]);
        assert_eq!(deck.len(), 2);
    }
}
