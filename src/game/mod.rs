//! Round, game and session loop.

mod session;

pub use session::{sole_leader, GameReport, Session, SessionReport, MAX_PLAYERS};
