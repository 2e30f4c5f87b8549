//! Drawing dice from the pool and rolling them.
//!
//! A draw picks dice one at a time without replacement, each pick weighted
//! by how many dice of each category remain. Dice carried over from the
//! previous roll join the hand without touching the pool.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::outcome::{Category, Face, FACE_COUNT};
use super::pool::{DiceCounts, Pool};
use crate::core::RandomSource;

/// One rolled die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolledDie {
    pub category: Category,
    pub face: Face,
}

/// The dice of one roll, in category order.
pub type Roll = SmallVec<[RolledDie; 4]>;

/// Pick the hand for the next roll.
///
/// Draws `n_to_draw` fresh dice from `pool` and returns them merged with
/// `rerolls`. Panics if the pool holds fewer than `n_to_draw` dice.
pub fn draw<R: RandomSource + ?Sized>(
    pool: &mut Pool,
    rerolls: &DiceCounts,
    n_to_draw: u32,
    rng: &mut R,
) -> DiceCounts {
    assert!(
        n_to_draw <= pool.total(),
        "cannot draw {n_to_draw} dice from a pool of {}",
        pool.total()
    );

    let mut drawn = DiceCounts::zero();
    for _ in 0..n_to_draw {
        let category = pick(pool.counts(), rng);
        pool.take(category);
        drawn[category] += 1;
    }

    let mut hand = *rerolls;
    hand.merge(&drawn);
    hand
}

/// Map a uniform index over the remaining dice to a category using
/// cumulative count ranges.
fn pick<R: RandomSource + ?Sized>(counts: &DiceCounts, rng: &mut R) -> Category {
    let mut index = rng.below(counts.total() as usize) as u32;
    for (category, count) in counts.iter() {
        if index < count {
            return category;
        }
        index -= count;
    }
    unreachable!("index exceeded pool total")
}

/// Roll every die in `hand`, choosing one of six faces uniformly.
pub fn roll<R: RandomSource + ?Sized>(hand: &DiceCounts, rng: &mut R) -> Roll {
    let mut results = Roll::new();
    for (category, quantity) in hand.iter() {
        for _ in 0..quantity {
            let face = category.face(rng.below(FACE_COUNT));
            results.push(RolledDie { category, face });
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};

    fn reserve() -> DiceCounts {
        DiceCounts::new([6, 3, 4])
    }

    #[test]
    fn test_pick_uses_cumulative_ranges() {
        let counts = DiceCounts::new([2, 1, 3]);
        let mut rng = ScriptedRng::new([0, 1, 2, 3, 5]);
        let picks: Vec<_> = (0..5).map(|_| pick(&counts, &mut rng)).collect();
        assert_eq!(
            picks,
            vec![
                Category::Easy,
                Category::Easy,
                Category::Hard,
                Category::Medium,
                Category::Medium,
            ]
        );
    }

    #[test]
    fn test_draw_decrements_pool() {
        let mut pool = Pool::initialize(reserve());
        // Easy (0 of 13), Hard (6 of 12), Medium (10 of 11)
        let mut rng = ScriptedRng::new([0, 6, 10]);

        let hand = draw(&mut pool, &DiceCounts::zero(), 3, &mut rng);

        assert_eq!(hand, DiceCounts::new([1, 1, 1]));
        assert_eq!(pool.counts(), &DiceCounts::new([5, 2, 3]));
    }

    #[test]
    fn test_draw_merges_rerolls_without_consuming_pool() {
        let mut pool = Pool::initialize(reserve());
        let rerolls = DiceCounts::new([0, 2, 0]);
        let mut rng = ScriptedRng::new([0]);

        let hand = draw(&mut pool, &rerolls, 1, &mut rng);

        assert_eq!(hand, DiceCounts::new([1, 2, 0]));
        assert_eq!(pool.total(), 12);
        assert_eq!(rerolls, DiceCounts::new([0, 2, 0]));
    }

    #[test]
    fn test_draw_conserves_dice() {
        let mut rng = GameRng::new(3);
        for _ in 0..200 {
            let mut pool = Pool::initialize(reserve());
            let before = pool.total();
            let hand = draw(&mut pool, &DiceCounts::zero(), 3, &mut rng);
            assert_eq!(hand.total(), 3);
            assert_eq!(pool.total(), before - 3);
            assert!(pool.counts().within(&reserve()));
        }
    }

    #[test]
    #[should_panic(expected = "cannot draw 3 dice")]
    fn test_draw_more_than_pool_panics() {
        let mut pool = Pool::with_counts(reserve(), DiceCounts::new([1, 1, 0]));
        let mut rng = GameRng::new(1);
        draw(&mut pool, &DiceCounts::zero(), 3, &mut rng);
    }

    #[test]
    fn test_roll_resolves_faces_per_category() {
        let hand = DiceCounts::new([1, 1, 1]);
        let mut rng = ScriptedRng::new([5, 0, 2]);

        let results = roll(&hand, &mut rng);

        assert_eq!(
            results.as_slice(),
            &[
                RolledDie { category: Category::Easy, face: Face::Damage },
                RolledDie { category: Category::Hard, face: Face::Blank },
                RolledDie { category: Category::Medium, face: Face::Score },
            ]
        );
    }

    #[test]
    fn test_hard_only_face_frequencies() {
        let reserve = DiceCounts::new([0, 3, 0]);
        let mut rng = GameRng::new(2024);
        let mut tally = [0u32; 3];
        let trials = 60_000;

        for _ in 0..trials {
            let mut pool = Pool::initialize(reserve);
            let hand = draw(&mut pool, &DiceCounts::zero(), 1, &mut rng);
            assert_eq!(hand, DiceCounts::new([0, 1, 0]));
            for die in roll(&hand, &mut rng) {
                assert_eq!(die.category, Category::Hard);
                let slot = match die.face {
                    Face::Blank => 0,
                    Face::Score => 1,
                    Face::Damage => 2,
                };
                tally[slot] += 1;
            }
        }

        let expected = [1.0 / 6.0, 2.0 / 6.0, 3.0 / 6.0];
        for (observed, expected) in tally.iter().zip(expected) {
            let freq = *observed as f64 / trials as f64;
            assert!((freq - expected).abs() < 0.01, "freq {freq} vs {expected}");
        }
    }
}
