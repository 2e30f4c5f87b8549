//! Game and session configuration.
//!
//! - `Rules`: the fixed constants of the game (goal, bust threshold, dice
//!   per roll, reserve composition), passed explicitly to every layer
//! - `SessionConfig`: how many games to play and who is automated
//!
//! Nothing here is global; callers own their configuration values.

use serde::{Deserialize, Serialize};

use crate::advice::Advisor;
use crate::dice::DiceCounts;

/// Permanent score a player must reach to trigger the last round.
pub const GOAL_SCORE: u32 = 13;

/// Damage in a single turn that busts the player.
pub const BUST_DAMAGE: u32 = 3;

/// Dice in hand for every roll.
pub const DICE_PER_ROLL: u32 = 3;

/// Reserve totals per category, in `Category::ALL` order (Easy, Hard, Medium).
pub const FULL_RESERVE: [u32; 3] = [6, 3, 4];

/// Game rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Winning threshold; reaching it starts the last round.
    pub goal: u32,

    /// Turn damage at which the turn busts.
    pub bust_threshold: u32,

    /// Number of dice rolled each iteration (rerolls plus fresh draws).
    pub dice_per_roll: u32,

    /// Full reserve; every turn starts with a pool equal to this.
    pub reserve: DiceCounts,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            goal: GOAL_SCORE,
            bust_threshold: BUST_DAMAGE,
            dice_per_roll: DICE_PER_ROLL,
            reserve: DiceCounts::new(FULL_RESERVE),
        }
    }
}

impl Rules {
    /// Use a different goal score.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = goal;
        self
    }

    /// Use a different bust threshold.
    #[must_use]
    pub fn with_bust_threshold(mut self, threshold: u32) -> Self {
        self.bust_threshold = threshold;
        self
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of games to play.
    pub games: u32,

    /// Advisors assigned by seat; seats beyond the list play manually.
    pub advisors: Vec<Advisor>,

    /// Seed for the session RNG. `None` seeds from the OS.
    pub seed: Option<u64>,

    pub rules: Rules,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            games: 1,
            advisors: Vec::new(),
            seed: None,
            rules: Rules::default(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    #[must_use]
    pub fn with_advisors(mut self, advisors: Vec<Advisor>) -> Self {
        self.advisors = advisors;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Advisor for a seat, falling back to manual play.
    #[must_use]
    pub fn advisor_for(&self, seat: usize) -> Advisor {
        self.advisors.get(seat).copied().unwrap_or(Advisor::Manual)
    }
}
