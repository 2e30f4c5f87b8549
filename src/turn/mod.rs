//! A single player's turn.
//!
//! - `Turn`: the roll-by-roll state machine
//! - `play_turn`: drives a `Turn` to completion and banks the result
//! - `Interaction`: progress hooks and manual keep-rolling decisions

pub mod interaction;
pub mod state;

pub use interaction::{Interaction, Unattended};
pub use state::{play_turn, Turn, TurnOutcome, TurnPhase};
