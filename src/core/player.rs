//! Player identification, per-player storage, and the seated player.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Seat order is turn order.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! Display name, the player's hand, and whether a bot controls the seat.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::zones::Hand;

/// Seat identifier. Seat 0 is the first to act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat number as shown to people (1-based).
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 as usize + 1
    }

    /// Iterate over all player IDs for a table with `player_count` seats.
    ///
    /// ```
    /// use ratcat::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(5).collect();
    /// assert_eq!(players.len(), 5);
    /// assert_eq!(players[4], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use ratcat::core::{PlayerId, PlayerMap};
///
/// let mut turns: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// turns[PlayerId::new(1)] += 1;
/// assert_eq!(turns[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Wrap values already laid out in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seated player.
///
/// The hand is owned exclusively. The bot flag is fixed at construction;
/// the name can change (the human types it at the opening).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Hand,
    bot: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, hand: Hand, bot: bool) -> Self {
        Self {
            id,
            name: name.into(),
            hand,
            bot,
        }
    }

    /// Human-controlled player.
    pub fn human(id: PlayerId, name: impl Into<String>, hand: Hand) -> Self {
        Self::new(id, name, hand, false)
    }

    /// Bot-controlled player.
    pub fn bot(id: PlayerId, name: impl Into<String>, hand: Hand) -> Self {
        Self::new(id, name, hand, true)
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn is_bot(&self) -> bool {
        self.bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.number(), 2);
        assert_eq!(format!("{}", p0), "Player 1");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
    }

    #[test]
    fn test_player_map_from_vec() {
        let map = PlayerMap::from_vec(vec!["a", "b", "c"]);
        assert_eq!(map.player_count(), 3);
        assert_eq!(map[PlayerId::new(2)], "c");
        assert_eq!(map.player_ids().count(), 3);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<u32> = PlayerMap::with_value(2, 0);

        map[PlayerId::new(0)] = 10;
        for (_, v) in map.iter_mut() {
            *v += 1;
        }

        assert_eq!(map[PlayerId::new(0)], 11);
        assert_eq!(map[PlayerId::new(1)], 1);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_player_rename_keeps_bot_flag() {
        let hand = Hand::new([Card::number(1); 4]);
        let mut player = Player::human(PlayerId::new(0), "Luke", hand);
        player.set_name("Ada");

        assert_eq!(player.name(), "Ada");
        assert!(!player.is_bot());
        assert_eq!(player.id(), PlayerId::new(0));
    }
}
