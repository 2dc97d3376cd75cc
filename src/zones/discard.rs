//! Discard pile.
//!
//! Only the top card is ever visible or playable. The cards beneath it
//! are remembered so an empty deck can be restocked from them.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    /// Bottom first; the last card is the top.
    cards: Vec<Card>,
}

impl DiscardPile {
    /// Pile with a single face-up card.
    pub fn new(top: Card) -> Self {
        Self { cards: vec![top] }
    }

    /// The face-up card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Discard a card face-up on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Pick up the face-up card.
    pub fn take_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Slide a card under the top card.
    pub fn bury(&mut self, card: Card) {
        let at = self.cards.len().saturating_sub(1);
        self.cards.insert(at, card);
    }

    /// Remove every card except the top.
    pub fn take_buried(&mut self) -> Vec<Card> {
        match self.cards.pop() {
            Some(top) => std::mem::replace(&mut self.cards, vec![top]),
            None => Vec::new(),
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

    /// Every card, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
