//! Dice: the outcome table, the per-turn pool and the draw engine.
//!
//! ## Key Types
//!
//! - `Category` / `Face`: die kinds and what their faces show
//! - `DiceCounts`: per-category counts (pool, rerolls, retained dice)
//! - `Pool`: drawable dice of a turn, bounded by the reserve
//! - `draw` / `roll`: weighted sampling without replacement, face resolution

pub mod draw;
pub mod outcome;
pub mod pool;

pub use draw::{draw, roll, Roll, RolledDie};
pub use outcome::{Category, Face, FACE_COUNT, OUTCOMES};
pub use pool::{DiceCounts, Pool, RetainedSet};
