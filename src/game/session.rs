//! Rounds, games and sessions.
//!
//! A round gives every player one turn in seat order. Once any player's
//! permanent score reaches the goal, the rest of the game is the last
//! round and advisors are told so. A game ends at the first round boundary
//! where a single player holds the highest score and that score is at or
//! above the goal; ties at the top keep the game going, with no round
//! limit. A session plays a number of games and counts wins.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{
    disambiguate_names, GameError, Player, PlayerId, PlayerMap, RandomSource, Result, Rules,
    SessionConfig,
};
use crate::turn::{play_turn, Interaction};

/// Seats addressable by `PlayerId`.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Result of one finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// 1-based game number within the session.
    pub game: u32,
    /// Rounds played, including the last one.
    pub rounds: u32,
    pub winner: PlayerId,
    /// Permanent scores at game end, in seat order.
    pub scores: Vec<u32>,
}

/// Result of a whole session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub wins: PlayerMap<u32>,
    pub games: Vec<GameReport>,
}

/// The player alone at the top with at least `goal` points, if any.
#[must_use]
pub fn sole_leader(players: &[Player], goal: u32) -> Option<PlayerId> {
    let best = players.iter().map(|p| p.score).max()?;
    if best < goal {
        return None;
    }
    let mut leaders = players.iter().filter(|p| p.score == best);
    let leader = leaders.next()?;
    match leaders.next() {
        Some(_) => None,
        None => Some(leader.id),
    }
}

/// A table of players and the rules they play by.
#[derive(Clone, Debug)]
pub struct Session {
    players: Vec<Player>,
    rules: Rules,
    games_played: u32,
}

impl Session {
    /// Seat players by name, assigning advisors by position.
    ///
    /// Repeated names are made unique first.
    pub fn new<S: AsRef<str>>(
        names: impl IntoIterator<Item = S>,
        config: &SessionConfig,
    ) -> Result<Self> {
        let names = disambiguate_names(names);
        if names.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers(names.len()));
        }
        let players = names
            .into_iter()
            .enumerate()
            .map(|(seat, name)| Player::new(PlayerId::new(seat as u8), name, config.advisor_for(seat)))
            .collect();
        Self::from_players(players, config.rules.clone())
    }

    /// Seat prepared players. Ids must match seat positions.
    pub fn from_players(players: Vec<Player>, rules: Rules) -> Result<Self> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers(players.len()));
        }
        assert!(
            players.iter().enumerate().all(|(seat, p)| p.id.index() == seat),
            "player ids must match seat order"
        );
        Ok(Self {
            players,
            rules,
            games_played: 0,
        })
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Play one game to completion.
    ///
    /// The winner's win count goes up and every permanent score is reset
    /// afterwards, ready for the next game.
    pub fn play_game<R, I>(&mut self, rng: &mut R, interaction: &mut I) -> Result<GameReport>
    where
        R: RandomSource + ?Sized,
        I: Interaction + ?Sized,
    {
        let goal = self.rules.goal;
        let mut last_round = false;
        let mut round = 0u32;

        let winner = loop {
            round += 1;
            interaction.round_started(round)?;
            debug!(round, "round started");

            for seat in PlayerId::all(self.players.len()) {
                play_turn(&mut self.players, seat, last_round, &self.rules, rng, interaction)?;

                let player = &self.players[seat.index()];
                if !last_round && player.score >= goal {
                    last_round = true;
                    info!(player = %player.name, score = player.score, "last round");
                    interaction.last_round(player)?;
                }
            }

            if let Some(winner) = sole_leader(&self.players, goal) {
                break winner;
            }
        };

        self.games_played += 1;
        let report = GameReport {
            game: self.games_played,
            rounds: round,
            winner,
            scores: self.players.iter().map(|p| p.score).collect(),
        };
        info!(
            game = report.game,
            rounds = report.rounds,
            winner = %self.players[winner.index()].name,
            "game over"
        );
        interaction.game_over(&self.players, &report)?;

        self.players[winner.index()].wins += 1;
        for player in &mut self.players {
            player.start_game();
        }
        Ok(report)
    }

    /// Play `games` games and tally the wins.
    pub fn play<R, I>(&mut self, games: u32, rng: &mut R, interaction: &mut I) -> Result<SessionReport>
    where
        R: RandomSource + ?Sized,
        I: Interaction + ?Sized,
    {
        let mut reports = Vec::with_capacity(games as usize);
        for _ in 0..games {
            reports.push(self.play_game(rng, interaction)?);
        }
        Ok(SessionReport {
            wins: PlayerMap::new(self.players.len(), |id| self.players[id.index()].wins),
            games: reports,
        })
    }
}
