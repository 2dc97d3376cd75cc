//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Card`: A numeric card 0-9 or a power card
//! - `PowerCard`: PEEK, SWAP, DRAW2
//! - `DeckComposition`: How many copies of each card a fresh deck holds
//! - `Deck`: Undrawn cards; draws are uniformly random without replacement

pub mod card;
pub mod deck;

pub use card::{Card, PowerCard, MAX_VALUE};
pub use deck::{count_cards, Deck, DeckComposition};
