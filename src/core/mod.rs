//! Core types: players, randomness, configuration and errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{Rules, SessionConfig, BUST_DAMAGE, DICE_PER_ROLL, FULL_RESERVE, GOAL_SCORE};
pub use error::{GameError, Result};
pub use player::{disambiguate_names, Player, PlayerId, PlayerMap};
pub use rng::{GameRng, RandomSource, ScriptedRng};
