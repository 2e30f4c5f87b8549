//! Continuation advisors.

use serde::{Deserialize, Serialize};

use super::odds::{bust_probability, expected_score};
use crate::core::{GameError, Player, PlayerId, Rules};
use crate::dice::{DiceCounts, Pool, RetainedSet};

/// Everything an advisor may look at when deciding whether to roll again.
#[derive(Clone, Copy, Debug)]
pub struct Decision<'a> {
    pub pool: &'a Pool,
    pub rerolls: &'a DiceCounts,
    /// Scored dice set aside this turn; they return to the pool on refill.
    pub retained: &'a RetainedSet,
    pub turn_score: u32,
    pub turn_damage: u32,
    pub player: PlayerId,
    pub players: &'a [Player],
    /// Someone has reached the goal this game.
    pub last_round: bool,
    pub rules: &'a Rules,
}

impl Decision<'_> {
    /// Permanent score of the deciding player if they stopped now.
    #[must_use]
    pub fn banked_total(&self) -> u32 {
        self.players[self.player.index()].score + self.turn_score
    }

    /// Best permanent score among the other players.
    #[must_use]
    pub fn best_rival(&self) -> Option<u32> {
        self.players
            .iter()
            .filter(|p| p.id != self.player)
            .map(|p| p.score)
            .max()
    }
}

/// Who decides whether a player keeps rolling.
///
/// Numeric ids (0-4) are accepted on the command line.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Advisor {
    /// Ask the person at the keyboard.
    #[default]
    Manual = 0,
    /// Roll while fewer than two damage.
    Cautious = 1,
    /// Roll with no damage, or one damage and a small turn score.
    Measured = 2,
    /// Roll while the odds favour it.
    ShortOdds = 3,
    /// `ShortOdds` plus last-round awareness.
    LongOdds = 4,
}

impl TryFrom<u8> for Advisor {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Advisor::Manual),
            1 => Ok(Advisor::Cautious),
            2 => Ok(Advisor::Measured),
            3 => Ok(Advisor::ShortOdds),
            4 => Ok(Advisor::LongOdds),
            _ => Err(GameError::UnknownStrategy(value)),
        }
    }
}

/// Highest bust risk `ShortOdds` accepts.
const MAX_BUST_RISK: f64 = 1.0 / 3.0;

/// Turn score at which `Measured` stops rolling with one damage.
const MEASURED_STOP_SCORE: u32 = 4;

impl Advisor {
    /// Strategies offered for advice, in menu order.
    pub const STRATEGIES: [Advisor; 4] = [
        Advisor::Cautious,
        Advisor::Measured,
        Advisor::ShortOdds,
        Advisor::LongOdds,
    ];

    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_manual(self) -> bool {
        matches!(self, Advisor::Manual)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Advisor::Manual => "manual play",
            Advisor::Cautious => "cautious strategy",
            Advisor::Measured => "measured strategy",
            Advisor::ShortOdds => "short odds strategy",
            Advisor::LongOdds => "long odds strategy",
        }
    }

    /// Whether to keep rolling. `None` for `Manual`, which has no heuristic.
    #[must_use]
    pub fn advise(self, decision: &Decision<'_>) -> Option<bool> {
        let keep_rolling = match self {
            Advisor::Manual => return None,
            Advisor::Cautious => decision.turn_damage < 2,
            Advisor::Measured => match decision.turn_damage {
                0 => true,
                1 => decision.turn_score < MEASURED_STOP_SCORE,
                _ => false,
            },
            Advisor::ShortOdds => odds_favour_rolling(decision),
            Advisor::LongOdds => match endgame_call(decision) {
                Some(call) => call,
                None => odds_favour_rolling(decision),
            },
        };
        Some(keep_rolling)
    }
}

fn odds_favour_rolling(decision: &Decision<'_>) -> bool {
    let p_bust = bust_probability(
        decision.pool,
        decision.rerolls,
        decision.retained,
        decision.turn_damage,
        decision.rules,
    );
    if p_bust >= MAX_BUST_RISK {
        return false;
    }
    let gain = expected_score(
        decision.pool,
        decision.rerolls,
        decision.retained,
        decision.rules,
    ) * (1.0 - p_bust);
    let loss = p_bust * decision.turn_score as f64;
    gain > loss
}

/// Forced choices in the last round: chase a leader you would not catch,
/// bank a sole lead.
fn endgame_call(decision: &Decision<'_>) -> Option<bool> {
    if !decision.last_round {
        return None;
    }
    let rival = decision.best_rival()?;
    let total = decision.banked_total();
    match total.cmp(&rival) {
        std::cmp::Ordering::Less => Some(true),
        std::cmp::Ordering::Greater if total >= decision.rules.goal => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(scores: &[u32]) -> Vec<Player> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                let mut p = Player::new(PlayerId::new(i as u8), format!("P{i}"), Advisor::LongOdds);
                p.score = s;
                p
            })
            .collect()
    }

    fn decide(
        advisor: Advisor,
        turn_score: u32,
        turn_damage: u32,
        scores: &[u32],
        last_round: bool,
    ) -> Option<bool> {
        let rules = Rules::default();
        let pool = Pool::initialize(rules.reserve);
        let rerolls = DiceCounts::zero();
        let roster = players(scores);
        let decision = Decision {
            pool: &pool,
            rerolls: &rerolls,
            retained: &rerolls,
            turn_score,
            turn_damage,
            player: PlayerId::new(0),
            players: &roster,
            last_round,
            rules: &rules,
        };
        advisor.advise(&decision)
    }

    #[test]
    fn test_try_from_ids() {
        for id in 0..=4u8 {
            assert_eq!(Advisor::try_from(id).unwrap().id(), id);
        }
        assert!(matches!(Advisor::try_from(5), Err(GameError::UnknownStrategy(5))));
    }

    #[test]
    fn test_manual_has_no_advice() {
        assert_eq!(decide(Advisor::Manual, 0, 0, &[0, 0], false), None);
    }

    #[test]
    fn test_cautious() {
        assert_eq!(decide(Advisor::Cautious, 5, 1, &[0, 0], false), Some(true));
        assert_eq!(decide(Advisor::Cautious, 0, 2, &[0, 0], false), Some(false));
    }

    #[test]
    fn test_measured() {
        assert_eq!(decide(Advisor::Measured, 9, 0, &[0, 0], false), Some(true));
        assert_eq!(decide(Advisor::Measured, 3, 1, &[0, 0], false), Some(true));
        assert_eq!(decide(Advisor::Measured, 4, 1, &[0, 0], false), Some(false));
    }

    #[test]
    fn test_short_odds() {
        // Fresh turn: nothing to lose.
        assert_eq!(decide(Advisor::ShortOdds, 0, 0, &[0, 0], false), Some(true));
        // Two damage on a full pool is too risky.
        assert_eq!(decide(Advisor::ShortOdds, 6, 2, &[0, 0], false), Some(false));
    }

    #[test]
    fn test_long_odds_chases_leader_in_last_round() {
        assert_eq!(decide(Advisor::LongOdds, 1, 2, &[3, 14], true), Some(true));
    }

    #[test]
    fn test_long_odds_banks_sole_lead() {
        assert_eq!(decide(Advisor::LongOdds, 5, 0, &[10, 13], true), Some(false));
    }

    #[test]
    fn test_long_odds_without_last_round_matches_short_odds() {
        for damage in 0..3 {
            for score in [0, 3, 8] {
                assert_eq!(
                    decide(Advisor::LongOdds, score, damage, &[4, 7], false),
                    decide(Advisor::ShortOdds, score, damage, &[4, 7], false)
                );
            }
        }
    }
}
