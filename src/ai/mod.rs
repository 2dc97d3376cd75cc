//! Bot decision making.
//!
//! - `BotPolicy`: One method per decision a bot faces
//! - `BotView`: The observable state a bot decides from
//! - `UniformPolicy`: Uniformly random choices
//!
//! Policies plug into the round engine independently of the rules.

mod policy;

pub use policy::{BotPolicy, BotView, SwapTarget, UniformPolicy};
