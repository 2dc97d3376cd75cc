//! Collaborators the engine talks to.
//!
//! - `GameInput`: Blocking requests for human decisions
//! - `GameDisplay`: Everything shown to the table
//! - `ScriptedInput`, `RecordingDisplay`, `NullDisplay`: In-memory
//!   implementations for tests and simulations
//!
//! Terminal implementations live in the binary.

mod display;
mod input;

pub use display::{DisplayEvent, GameDisplay, NullDisplay, RecordingDisplay};
pub use input::{ask_choice, ask_index, parse_index, GameInput, ScriptedInput};
