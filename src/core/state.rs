//! Round state shared by every exchange.
//!
//! ## Table
//!
//! Everything a turn may read or mutate:
//! - Deck and discard pile (the discard top is the public card)
//! - Seated players and their hands
//! - Shared turn counter and per-player completed turns
//! - Cards a Draw2 removed from circulation
//! - The deck's RNG stream
//!
//! Exactly one exchange mutates the table at a time; it is passed by
//! `&mut` to whoever is resolving the current play.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::config::{EmptyDeckPolicy, RoundConfig};
use super::error::GameError;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{count_cards, Card, Deck};
use crate::zones::{DiscardPile, Hand};

/// Shared round state.
#[derive(Clone, Debug)]
pub struct Table {
    pub config: RoundConfig,

    /// Undrawn cards.
    pub deck: Deck,

    /// Discard pile; its top is visible to everyone.
    pub discard: DiscardPile,

    /// Seats in turn order.
    pub players: PlayerMap<Player>,

    /// Completed turns across all players.
    pub turn_counter: u32,

    /// Completed turns per player.
    pub completed_turns: PlayerMap<u32>,

    /// Cards permanently out of play (Draw2 leftovers under `Destroy`).
    pub removed: Vec<Card>,

    /// Stream used for deck draws.
    pub rng: GameRng,
}

impl Table {
    /// Build the deck, flip the opening discard, and deal every seat.
    ///
    /// Seat 0 is the human when `config.with_human`; bots are named
    /// `Bot1`, `Bot2`, ...
    pub fn deal(config: RoundConfig) -> Result<Self, GameError> {
        config.validate()?;

        let mut rng = GameRng::new(config.seed).for_context("deck");
        let mut deck = Deck::new(&config.composition);
        let top = deck.draw(&mut rng)?;

        let mut players = Vec::with_capacity(config.player_count());
        for seat in 0..config.player_count() {
            let id = PlayerId::new(seat as u8);
            let hand = Hand::new([
                deck.draw(&mut rng)?,
                deck.draw(&mut rng)?,
                deck.draw(&mut rng)?,
                deck.draw(&mut rng)?,
            ]);
            let player = if config.with_human && seat == 0 {
                Player::human(id, config.human_name.clone(), hand)
            } else {
                let number = if config.with_human { seat } else { seat + 1 };
                Player::bot(id, format!("Bot{number}"), hand)
            };
            players.push(player);
        }

        debug!(seed = config.seed, players = players.len(), deck = deck.len(), "dealt table");
        Ok(Self::from_parts(config, deck, DiscardPile::new(top), players, rng))
    }

    /// Table with a prepared deck, discard pile, and hands.
    ///
    /// Seats are renumbered in the order given.
    pub fn stacked(config: RoundConfig, deck: Deck, top: Card, players: Vec<Player>) -> Self {
        let rng = GameRng::new(config.seed).for_context("deck");
        let players = players
            .into_iter()
            .enumerate()
            .map(|(seat, p)| {
                let id = PlayerId::new(seat as u8);
                Player::new(id, p.name().to_string(), p.hand().clone(), p.is_bot())
            })
            .collect();
        Self::from_parts(config, deck, DiscardPile::new(top), players, rng)
    }

    fn from_parts(
        config: RoundConfig,
        deck: Deck,
        discard: DiscardPile,
        players: Vec<Player>,
        rng: GameRng,
    ) -> Self {
        let players = PlayerMap::from_vec(players);
        let completed_turns = PlayerMap::with_value(players.player_count(), 0);
        Self {
            config,
            deck,
            discard,
            players,
            turn_counter: 0,
            completed_turns,
            removed: Vec::new(),
            rng,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// First human seat, if any.
    #[must_use]
    pub fn human(&self) -> Option<PlayerId> {
        self.players.values().find(|p| !p.is_bot()).map(Player::id)
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new((self.turn_counter as usize % self.player_count()) as u8)
    }

    /// The face-up discard.
    #[must_use]
    pub fn discard_top(&self) -> Option<Card> {
        self.discard.top()
    }

    /// Draw from the deck, restocking from the discard pile when allowed.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        if self.deck.is_empty() && self.config.empty_deck == EmptyDeckPolicy::Recycle {
            let recycled = self.discard.take_buried();
            if !recycled.is_empty() {
                warn!(cards = recycled.len(), "deck empty, recycling the discard pile");
                self.deck.restock(recycled);
            }
        }
        self.deck.draw(&mut self.rng)
    }

    /// Record the end of the current player's turn.
    pub fn complete_turn(&mut self) {
        let player = self.current_player();
        self.completed_turns[player] += 1;
        self.turn_counter += 1;
        for (_, p) in self.players.iter_mut() {
            p.hand_mut().conceal_all();
        }
    }

    /// Turn number of `player` counted from 1 on their first turn.
    #[must_use]
    pub fn personal_turn(&self, player: PlayerId) -> u32 {
        self.completed_turns[player] + 1
    }

    /// Tally of every card on the table, including removed ones.
    #[must_use]
    pub fn card_counts(&self) -> FxHashMap<Card, usize> {
        let hands = self.players.values().flat_map(|p| p.hand().cards());
        count_cards(
            self.deck
                .cards()
                .iter()
                .chain(self.discard.cards())
                .chain(&self.removed)
                .copied()
                .chain(hands),
        )
    }
}
