//! A player's four face-down cards.
//!
//! Slots are replaced in place and never inserted or removed. Each slot
//! carries a `known` flag: whether the owner is currently being shown
//! that card. The flag never changes the stored value; it only decides
//! what [`HandView`] projections reveal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;

/// Cards per hand.
pub const HAND_SIZE: usize = 4;

/// One hand position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub card: Card,
    pub known: bool,
}

/// Fixed four-slot hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    slots: [Slot; HAND_SIZE],
}

impl Hand {
    /// Hand with every slot unknown to its owner.
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self {
            slots: cards.map(|card| Slot { card, known: false }),
        }
    }

    /// Card at `slot`. Panics outside 0..4.
    #[must_use]
    pub fn card(&self, slot: usize) -> Card {
        self.slots[slot].card
    }

    #[must_use]
    pub fn cards(&self) -> [Card; HAND_SIZE] {
        self.slots.map(|s| s.card)
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot; HAND_SIZE] {
        &self.slots
    }

    /// Put `card` in `slot`, returning the card it replaced.
    pub fn replace(&mut self, slot: usize, card: Card) -> Card {
        std::mem::replace(&mut self.slots[slot].card, card)
    }

    #[must_use]
    pub fn is_known(&self, slot: usize) -> bool {
        self.slots[slot].known
    }

    pub fn set_known(&mut self, slot: usize, known: bool) {
        self.slots[slot].known = known;
    }

    /// Turn every slot face-down for the owner.
    pub fn conceal_all(&mut self) {
        for slot in &mut self.slots {
            slot.known = false;
        }
    }

    /// Indices of slots holding power cards.
    pub fn power_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.card.is_power())
            .map(|(i, _)| i)
    }

    /// Sum of the hand, `None` while any power card remains.
    #[must_use]
    pub fn total(&self) -> Option<u32> {
        self.slots
            .iter()
            .map(|s| s.card.value().map(u32::from))
            .sum()
    }

    /// What the owner sees: the slots currently known to them.
    #[must_use]
    pub fn owner_view(&self) -> HandView {
        HandView {
            slots: self.slots.map(|s| {
                if s.known {
                    SlotView::FaceUp(s.card)
                } else {
                    SlotView::FaceDown
                }
            }),
        }
    }

    /// What the owner sees while peeking at one slot. Nothing is persisted.
    #[must_use]
    pub fn peek_view(&self, slot: usize) -> HandView {
        let mut view = HandView::face_down();
        view.slots[slot] = SlotView::FaceUp(self.slots[slot].card);
        view
    }

    /// What everyone else sees after slot `changed` was exchanged.
    ///
    /// The changed slot is shown face-up unless `hidden`, in which case it
    /// is only marked.
    #[must_use]
    pub fn onlooker_view(&self, changed: Option<usize>, hidden: bool) -> HandView {
        let mut view = HandView::face_down();
        if let Some(slot) = changed {
            view.slots[slot] = if hidden {
                SlotView::Marked
            } else {
                SlotView::FaceUp(self.slots[slot].card)
            };
        }
        view
    }

    /// Every card face-up.
    #[must_use]
    pub fn revealed_view(&self) -> HandView {
        HandView {
            slots: self.slots.map(|s| SlotView::FaceUp(s.card)),
        }
    }
}

/// Masked projection of one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotView {
    FaceDown,
    /// Changed this turn but the value stays hidden.
    Marked,
    FaceUp(Card),
}

/// Masked projection of a hand for one viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandView {
    pub slots: [SlotView; HAND_SIZE],
}

impl HandView {
    #[must_use]
    pub fn face_down() -> Self {
        Self {
            slots: [SlotView::FaceDown; HAND_SIZE],
        }
    }

    /// Face-up cards with their slot index.
    pub fn revealed(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| match s {
            SlotView::FaceUp(card) => Some((i, *card)),
            _ => None,
        })
    }
}

impl fmt::Display for HandView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str("\t")?;
            }
            match slot {
                SlotView::FaceDown => f.write_str("??")?,
                SlotView::Marked => f.write_str("[??]")?,
                SlotView::FaceUp(card) => write!(f, "{card}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Hand {
        Hand::new([Card::number(3), Card::number(7), Card::SWAP, Card::number(2)])
    }

    #[test]
    fn test_replace_in_place() {
        let mut hand = sample();
        let old = hand.replace(2, Card::number(5));

        assert_eq!(old, Card::SWAP);
        assert_eq!(
            hand.cards(),
            [Card::number(3), Card::number(7), Card::number(5), Card::number(2)]
        );
    }

    #[test]
    fn test_total() {
        let mut hand = sample();
        assert_eq!(hand.total(), None);

        hand.replace(2, Card::number(0));
        assert_eq!(hand.total(), Some(12));
    }

    #[test]
    fn test_power_slots() {
        let hand = Hand::new([Card::PEEK, Card::number(1), Card::DRAW2, Card::number(2)]);
        assert_eq!(hand.power_slots().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_owner_view_follows_known_flags() {
        let mut hand = sample();
        assert_eq!(hand.owner_view(), HandView::face_down());

        hand.set_known(0, true);
        hand.set_known(3, true);
        let view = hand.owner_view();
        assert_eq!(
            view.revealed().collect::<Vec<_>>(),
            vec![(0, Card::number(3)), (3, Card::number(2))]
        );
        assert_eq!(view.to_string(), "3\t??\t??\t2");

        hand.conceal_all();
        assert_eq!(hand.owner_view(), HandView::face_down());
        // Values are untouched by visibility
        assert_eq!(hand.card(0), Card::number(3));
    }

    #[test]
    fn test_peek_view_does_not_persist() {
        let hand = sample();
        let view = hand.peek_view(1);

        assert_eq!(view.slots[1], SlotView::FaceUp(Card::number(7)));
        assert!(!hand.is_known(1));
    }

    #[test]
    fn test_onlooker_view() {
        let hand = sample();

        let shown = hand.onlooker_view(Some(1), false);
        assert_eq!(shown.to_string(), "??\t7\t??\t??");

        let hidden = hand.onlooker_view(Some(1), true);
        assert_eq!(hidden.slots[1], SlotView::Marked);
        assert_eq!(hidden.revealed().count(), 0);
    }
}
