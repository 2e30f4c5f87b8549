//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! Seat index in turn order, 0-based.
//!
//! ## Player
//!
//! Name, session win count, permanent score for the current game, the
//! running tallies of the turn in progress, and the [`Advisor`] that
//! decides whether to keep rolling.
//!
//! ## PlayerMap
//!
//! `Vec`-backed per-player storage indexed by `PlayerId`.

use std::ops::{Index, IndexMut};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::advice::Advisor;

/// Seat index supporting 1-255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a table with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Games won this session.
    pub wins: u32,
    /// Permanent score in the current game.
    pub score: u32,
    /// Score accumulated in the turn in progress.
    pub turn_score: u32,
    /// Damage taken in the turn in progress.
    pub turn_damage: u32,
    pub advisor: Advisor,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, advisor: Advisor) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            score: 0,
            turn_score: 0,
            turn_damage: 0,
            advisor,
        }
    }

    /// Clear the turn tallies before a new turn starts.
    pub fn start_turn(&mut self) {
        self.turn_score = 0;
        self.turn_damage = 0;
    }

    /// Clear the permanent score before a new game starts.
    pub fn start_game(&mut self) {
        self.score = 0;
        self.start_turn();
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use press_or_pass::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// wins[PlayerId::new(1)] += 1;
/// assert_eq!(wins[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// All values as a slice, in seat order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Make player names unique.
///
/// Every copy of a repeated name gets a 1-based occurrence suffix; unique
/// names are left alone. Order is preserved.
///
/// ```
/// use press_or_pass::core::disambiguate_names;
///
/// let names = disambiguate_names(["Ann", "Bob", "Ann"]);
/// assert_eq!(names, ["Ann1", "Bob", "Ann2"]);
/// ```
pub fn disambiguate_names<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Vec<String> {
    let names: Vec<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();

    let mut totals: FxHashMap<&str, usize> = FxHashMap::default();
    for name in &names {
        *totals.entry(name.as_str()).or_default() += 1;
    }

    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    names
        .iter()
        .map(|name| {
            if totals[name.as_str()] == 1 {
                return name.clone();
            }
            let occurrence = seen.entry(name.as_str()).or_default();
            *occurrence += 1;
            format!("{}{}", name, occurrence)
        })
        .collect()
}
