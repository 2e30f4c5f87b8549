//! Turn state machine.
//!
//! ```text
//! AwaitingFirstRoll --roll--> Rolling --roll--> Rolling
//!                                |  \--damage >= bust--> Busted
//!                                \--stop--> Stopped
//! ```
//!
//! Each roll draws fresh dice to complete a hand with the dice carried
//! over from the previous roll, then sorts the faces: Score dice are set
//! aside for the rest of the turn, Damage dice leave play, Blank dice stay
//! in hand for the next roll. The first roll is unconditional.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::advice::Decision;
use crate::core::{Player, PlayerId, RandomSource, Result, Rules};
use crate::dice::{self, DiceCounts, Face, Pool, RetainedSet, Roll};

use super::interaction::Interaction;

/// Where a turn is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingFirstRoll,
    Rolling,
    Busted,
    Stopped,
}

impl TurnPhase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::Busted | TurnPhase::Stopped)
    }
}

/// How a finished turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Damage reached the bust threshold; the turn score was forfeited.
    Busted,
    /// The player stopped and banked this many points.
    Stopped { banked: u32 },
}

/// One player's turn.
#[derive(Clone, Debug)]
pub struct Turn<'r> {
    rules: &'r Rules,
    pool: Pool,
    retained: RetainedSet,
    rerolls: DiceCounts,
    score: u32,
    damage: u32,
    rolls: u32,
    phase: TurnPhase,
}

impl<'r> Turn<'r> {
    /// A fresh turn with the full reserve in the pool.
    #[must_use]
    pub fn new(rules: &'r Rules) -> Self {
        Self::with_pool(rules, Pool::initialize(rules.reserve))
    }

    /// A fresh turn drawing from `pool`.
    #[must_use]
    pub fn with_pool(rules: &'r Rules, pool: Pool) -> Self {
        Self {
            rules,
            pool,
            retained: RetainedSet::zero(),
            rerolls: DiceCounts::zero(),
            score: 0,
            damage: 0,
            rolls: 0,
            phase: TurnPhase::AwaitingFirstRoll,
        }
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn damage(&self) -> u32 {
        self.damage
    }

    /// Rolls made so far.
    #[must_use]
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    #[must_use]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Dice set aside for score and not yet returned to the pool.
    #[must_use]
    pub fn retained(&self) -> &RetainedSet {
        &self.retained
    }

    /// Dice carried into the next roll.
    #[must_use]
    pub fn rerolls(&self) -> &DiceCounts {
        &self.rerolls
    }

    /// Make one roll.
    ///
    /// Panics if the turn is already over.
    pub fn roll<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Roll {
        assert!(
            !self.phase.is_terminal(),
            "cannot roll in a finished turn ({:?})",
            self.phase
        );
        self.phase = TurnPhase::Rolling;

        let per_roll = self.rules.dice_per_roll;
        let to_draw = per_roll - self.rerolls.total();
        self.pool.refill(&mut self.retained, &self.rerolls, per_roll);
        let hand = dice::draw(&mut self.pool, &self.rerolls, to_draw, rng);
        let results = dice::roll(&hand, rng);
        self.rolls += 1;

        self.rerolls = DiceCounts::zero();
        for die in &results {
            match die.face {
                Face::Blank => self.rerolls[die.category] += 1,
                Face::Score => {
                    self.score += 1;
                    self.retained[die.category] += 1;
                }
                Face::Damage => self.damage += 1,
            }
        }

        if self.damage >= self.rules.bust_threshold {
            self.score = 0;
            self.phase = TurnPhase::Busted;
        }

        debug!(
            roll = self.rolls,
            ?hand,
            score = self.score,
            damage = self.damage,
            phase = ?self.phase,
            "turn rolled"
        );
        results
    }

    /// End the turn voluntarily and return the points to bank.
    ///
    /// Panics unless the turn is `Rolling`.
    pub fn stop(&mut self) -> u32 {
        assert_eq!(self.phase, TurnPhase::Rolling, "can only stop after rolling");
        self.phase = TurnPhase::Stopped;
        self.score
    }

    /// Outcome of a finished turn.
    #[must_use]
    pub fn outcome(&self) -> Option<TurnOutcome> {
        match self.phase {
            TurnPhase::Busted => Some(TurnOutcome::Busted),
            TurnPhase::Stopped => Some(TurnOutcome::Stopped { banked: self.score }),
            _ => None,
        }
    }
}

/// Play a full turn for `player` and bank the result.
///
/// Automated players are decided by their advisor; manual players by
/// `interaction`.
pub fn play_turn<R, I>(
    players: &mut [Player],
    player: PlayerId,
    last_round: bool,
    rules: &Rules,
    rng: &mut R,
    interaction: &mut I,
) -> Result<TurnOutcome>
where
    R: RandomSource + ?Sized,
    I: Interaction + ?Sized,
{
    let seat = player.index();
    players[seat].start_turn();
    let advisor = players[seat].advisor;
    if advisor.is_manual() {
        interaction.turn_started(&players[seat])?;
    }

    let mut turn = Turn::new(rules);
    loop {
        let results = turn.roll(rng);
        players[seat].turn_score = turn.score();
        players[seat].turn_damage = turn.damage();
        interaction.rolled(&players[seat], &results, turn.phase())?;

        if turn.phase() == TurnPhase::Busted {
            break;
        }

        let decision = Decision {
            pool: turn.pool(),
            rerolls: turn.rerolls(),
            retained: turn.retained(),
            turn_score: turn.score(),
            turn_damage: turn.damage(),
            player,
            players: &*players,
            last_round,
            rules,
        };
        let keep_rolling = match advisor.advise(&decision) {
            Some(call) => call,
            None => interaction.decide(&decision)?,
        };
        if !keep_rolling {
            turn.stop();
            break;
        }
    }

    let outcome = turn
        .outcome()
        .expect("turn loop exits only in a terminal phase");
    if let TurnOutcome::Stopped { banked } = outcome {
        players[seat].score += banked;
    }
    debug!(player = %players[seat].name, ?outcome, score = players[seat].score, "turn over");
    interaction.turn_ended(&players[seat], outcome)?;
    Ok(outcome)
}
