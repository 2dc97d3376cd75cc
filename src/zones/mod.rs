//! Where cards sit during a round besides the deck.
//!
//! ## Key Types
//!
//! - `Hand`: Four face-down slots owned by one player
//! - `HandView` / `SlotView`: Masked projection of a hand for one viewer
//! - `DiscardPile`: Shared face-up pile; only its top is in play

pub mod discard;
pub mod hand;

pub use discard::DiscardPile;
pub use hand::{Hand, HandView, Slot, SlotView, HAND_SIZE};
