//! # press-or-pass
//!
//! Engine for a push-your-luck dice game: players draw three dice at a time
//! from a finite, depleting pool, bank score faces, carry blank faces into
//! the next roll and bust when damage reaches the threshold.
//!
//! ## Design Principles
//!
//! 1. **Explicit Configuration**: pool composition and thresholds live in
//!    `Rules`, passed to every layer. No global state.
//!
//! 2. **Injectable Randomness**: dice code is generic over `RandomSource`,
//!    so games can be replayed from a seed or scripted in tests.
//!
//! 3. **Collaborators at the Edges**: prompting and narration go through
//!    the `Interaction` trait; automated players use a tagged `Advisor`.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `dice`: outcome table, pool, draw engine
//! - `turn`: turn state machine and the interaction seam
//! - `advice`: keep-rolling strategies and roll odds
//! - `game`: rounds, games and sessions
//! - `cli`: confirmation prompts, console front end, die rendering

pub mod advice;
pub mod cli;
pub mod core;
pub mod dice;
pub mod game;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, Player, PlayerId, PlayerMap, RandomSource, Result, Rules, ScriptedRng,
    SessionConfig,
};

pub use crate::dice::{Category, DiceCounts, Face, Pool, RetainedSet, Roll, RolledDie};

pub use crate::turn::{play_turn, Interaction, Turn, TurnOutcome, TurnPhase, Unattended};

pub use crate::advice::{Advisor, Decision};

pub use crate::game::{sole_leader, GameReport, Session, SessionReport};
