//! Advisors that decide whether a player keeps rolling.
//!
//! - `Advisor`: tagged strategy, `Manual` defers to the console
//! - `Decision`: read-only view of the turn handed to an advisor
//! - `odds`: exact bust and score odds of the next roll

pub mod advisor;
pub mod odds;

pub use advisor::{Advisor, Decision};
pub use odds::{bust_probability, expected_score};
