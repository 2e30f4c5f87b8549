//! Die categories and the static outcome table.

use serde::{Deserialize, Serialize};

/// Die kind. Categories differ only in how their six faces are split
/// between outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Easy,
    Hard,
    Medium,
}

impl Category {
    /// All categories in pool order. Draw indices map onto this order.
    pub const ALL: [Category; 3] = [Category::Easy, Category::Hard, Category::Medium];

    /// Slot of this category in per-category arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Category::Easy => 0,
            Category::Hard => 1,
            Category::Medium => 2,
        }
    }

    /// The six faces of a die of this category.
    #[must_use]
    pub fn faces(self) -> &'static [Face; FACE_COUNT] {
        &OUTCOMES[self.index()]
    }

    /// Outcome shown by face `slot` (0-based, below [`FACE_COUNT`]).
    #[must_use]
    pub fn face(self, slot: usize) -> Face {
        self.faces()[slot]
    }

    /// Number of faces of this category that show `face`.
    #[must_use]
    pub fn count(self, face: Face) -> usize {
        self.faces().iter().filter(|&&f| f == face).count()
    }

    /// Probability that a single roll of this category shows `face`.
    #[must_use]
    pub fn probability(self, face: Face) -> f64 {
        self.count(face) as f64 / FACE_COUNT as f64
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Easy => "Easy",
            Category::Hard => "Hard",
            Category::Medium => "Medium",
        };
        f.write_str(name)
    }
}

/// What a rolled die shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// No score, no damage; the die stays in hand and is rolled again.
    Blank,
    /// One point, and the die is set aside for the rest of the turn.
    Score,
    /// One damage; the die leaves play for the rest of the turn.
    Damage,
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Face::Blank => "Blank",
            Face::Score => "Score",
            Face::Damage => "Damage",
        };
        f.write_str(name)
    }
}

/// Faces per die.
pub const FACE_COUNT: usize = 6;

use Face::{Blank, Damage, Score};

/// Outcome table indexed by `Category::index()`.
///
/// Easy 3/2/1, Hard 1/2/3, Medium 2/2/2 (Blank/Score/Damage).
pub static OUTCOMES: [[Face; FACE_COUNT]; 3] = [
    [Blank, Blank, Blank, Score, Score, Damage],
    [Blank, Score, Score, Damage, Damage, Damage],
    [Blank, Blank, Score, Score, Damage, Damage],
];
