//! Seam between the engine and whoever is watching or playing.
//!
//! The engine reports progress through `Interaction` and asks it for the
//! keep-rolling decision of manual players. Automated players never reach
//! `decide`.

use crate::advice::Decision;
use crate::core::{GameError, Player, Result};
use crate::dice::Roll;
use crate::game::GameReport;

use super::state::{TurnOutcome, TurnPhase};

/// Observer and manual decision maker.
///
/// Every hook except `decide` defaults to doing nothing.
pub trait Interaction {
    /// A round of turns is about to start (1-based).
    fn round_started(&mut self, _round: u32) -> Result<()> {
        Ok(())
    }

    /// A manual player is about to make their first roll.
    fn turn_started(&mut self, _player: &Player) -> Result<()> {
        Ok(())
    }

    /// A roll was resolved. `player` carries the updated turn tallies and
    /// `phase` tells whether the roll busted the turn.
    fn rolled(&mut self, _player: &Player, _roll: &Roll, _phase: TurnPhase) -> Result<()> {
        Ok(())
    }

    /// A turn finished.
    fn turn_ended(&mut self, _player: &Player, _outcome: TurnOutcome) -> Result<()> {
        Ok(())
    }

    /// A player reached the goal; the rest of the game is the last round.
    fn last_round(&mut self, _player: &Player) -> Result<()> {
        Ok(())
    }

    /// A game finished. Scores in `players` have not been reset yet.
    fn game_over(&mut self, _players: &[Player], _report: &GameReport) -> Result<()> {
        Ok(())
    }

    /// Ask a manual player whether to keep rolling.
    fn decide(&mut self, decision: &Decision<'_>) -> Result<bool>;
}

/// Headless interaction for fully automated sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unattended;

impl Interaction for Unattended {
    fn decide(&mut self, decision: &Decision<'_>) -> Result<bool> {
        Err(GameError::InteractionUnavailable(decision.player))
    }
}
