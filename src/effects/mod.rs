//! Exchange resolution.
//!
//! Playing a card means one of four protocols:
//! - `Normal`: the card replaces a hand slot, the old card is discarded
//! - `Peek`: the owner looks at one slot
//! - `Draw2`: draw two, keep one, play it
//! - `Swap`: trade a slot with an opponent's slot
//!
//! `play` selects the protocol from the card and resolves it against the
//! table through a `PlayContext`. Each resolution returns an `Effect`.

mod effect;
mod exchange;
mod resolver;
mod targeting;

pub use effect::{Effect, Offer};
pub use exchange::Exchange;
pub use resolver::{play, PlayContext};
pub use targeting::{check_opponent, check_slot};
