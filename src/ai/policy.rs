//! Bot decision policies.
//!
//! A policy answers each decision a bot faces from what that bot can
//! observe: its own hand (bots see their own cards), the public discard
//! top, and the number of seats. Randomness comes in through the caller's
//! RNG so a policy is a pure function of view and stream.

use crate::cards::Card;
use crate::core::{GameRng, PlayerId, Table};
use crate::zones::{Hand, HAND_SIZE};

/// Everything a bot may look at when deciding.
#[derive(Clone, Copy, Debug)]
pub struct BotView<'a> {
    pub me: PlayerId,
    pub hand: &'a Hand,
    pub discard_top: Option<Card>,
    pub player_count: usize,
}

impl<'a> BotView<'a> {
    /// View of the table from `me`'s seat.
    #[must_use]
    pub fn of(table: &'a Table, me: PlayerId) -> Self {
        Self {
            me,
            hand: table.player(me).hand(),
            discard_top: table.discard_top(),
            player_count: table.player_count(),
        }
    }

    /// Every seat except `me`.
    #[must_use]
    pub fn opponents(&self) -> Vec<PlayerId> {
        PlayerId::all(self.player_count)
            .filter(|&p| p != self.me)
            .collect()
    }
}

/// Target of a Swap: own slot, the opponent, and the opponent's slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapTarget {
    pub own_slot: usize,
    pub opponent: PlayerId,
    pub their_slot: usize,
}

/// Decision points for bot seats.
pub trait BotPolicy {
    /// Take the discard top (`true`) or draw from the deck (`false`).
    fn take_discard(&self, view: &BotView<'_>, rng: &mut GameRng) -> bool;

    /// Slot (0-based) to exchange for `offered`.
    fn discard_slot(&self, view: &BotView<'_>, offered: Card, rng: &mut GameRng) -> usize;

    /// Slots and opponent to swap with.
    fn swap_target(&self, view: &BotView<'_>, rng: &mut GameRng) -> SwapTarget;

    /// Which of the two Draw2 cards to keep (0 or 1).
    fn keep_from_draw2(&self, view: &BotView<'_>, drawn: [Card; 2], rng: &mut GameRng) -> usize;
}

/// Picks uniformly at random at every decision.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPolicy;

impl BotPolicy for UniformPolicy {
    fn take_discard(&self, _view: &BotView<'_>, rng: &mut GameRng) -> bool {
        rng.gen_bool(0.5)
    }

    fn discard_slot(&self, _view: &BotView<'_>, _offered: Card, rng: &mut GameRng) -> usize {
        rng.gen_range_usize(0..HAND_SIZE)
    }

    fn swap_target(&self, view: &BotView<'_>, rng: &mut GameRng) -> SwapTarget {
        let own_slot = rng.gen_range_usize(0..HAND_SIZE);
        let opponents = view.opponents();
        // A valid table always seats at least one opponent
        let opponent = rng.choose(&opponents).copied().unwrap_or(view.me);
        let their_slot = rng.gen_range_usize(0..HAND_SIZE);
        SwapTarget {
            own_slot,
            opponent,
            their_slot,
        }
    }

    fn keep_from_draw2(&self, _view: &BotView<'_>, _drawn: [Card; 2], rng: &mut GameRng) -> usize {
        rng.gen_range_usize(0..2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundConfig;

    #[test]
    fn test_view_opponents() {
        let table = Table::deal(RoundConfig::new(1).with_bots(3)).unwrap();
        let view = BotView::of(&table, PlayerId::new(2));

        assert_eq!(view.player_count, 4);
        assert_eq!(view.discard_top, table.discard_top());
        assert_eq!(
            view.opponents(),
            vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(3)]
        );
    }

    #[test]
    fn test_uniform_decisions_in_range() {
        let table = Table::deal(RoundConfig::new(9).with_bots(4)).unwrap();
        let view = BotView::of(&table, PlayerId::new(1));
        let mut rng = GameRng::new(3);
        let policy = UniformPolicy;

        for _ in 0..200 {
            assert!(policy.discard_slot(&view, Card::number(0), &mut rng) < HAND_SIZE);
            assert!(policy.keep_from_draw2(&view, [Card::PEEK, Card::number(1)], &mut rng) < 2);

            let target = policy.swap_target(&view, &mut rng);
            assert!(target.own_slot < HAND_SIZE);
            assert!(target.their_slot < HAND_SIZE);
            assert_ne!(target.opponent, PlayerId::new(1));
        }
    }

    #[test]
    fn test_uniform_take_discard_mixes() {
        let table = Table::deal(RoundConfig::new(9)).unwrap();
        let view = BotView::of(&table, PlayerId::new(1));
        let mut rng = GameRng::new(11);

        let taken = (0..200)
            .filter(|_| UniformPolicy.take_discard(&view, &mut rng))
            .count();
        assert!(taken > 50 && taken < 150);
    }
}
