//! Per-category dice counts and the drawable pool.
//!
//! The pool starts every turn at the full reserve. Draws take dice out of
//! it; when it runs short the dice set aside for score this turn are put
//! back. At no point does a category hold more dice than its reserve.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::outcome::Category;

/// A count of dice for each category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceCounts([u32; 3]);

/// Dice set aside this turn because they scored.
pub type RetainedSet = DiceCounts;

impl DiceCounts {
    /// Counts in `Category::ALL` order.
    #[must_use]
    pub const fn new(counts: [u32; 3]) -> Self {
        Self(counts)
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self([0; 3])
    }

    /// Sum over all categories.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate over (category, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self[c]))
    }

    /// Add another set of counts to this one.
    pub fn merge(&mut self, other: &DiceCounts) {
        for category in Category::ALL {
            self[category] += other[category];
        }
    }

    /// True if every category is at or below `bound`.
    #[must_use]
    pub fn within(&self, bound: &DiceCounts) -> bool {
        Category::ALL.iter().all(|&c| self[c] <= bound[c])
    }
}

impl Index<Category> for DiceCounts {
    type Output = u32;

    fn index(&self, category: Category) -> &Self::Output {
        &self.0[category.index()]
    }
}

impl IndexMut<Category> for DiceCounts {
    fn index_mut(&mut self, category: Category) -> &mut Self::Output {
        &mut self.0[category.index()]
    }
}

/// The drawable dice of a single turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    counts: DiceCounts,
    reserve: DiceCounts,
}

impl Pool {
    /// A pool holding the whole reserve.
    #[must_use]
    pub fn initialize(reserve: DiceCounts) -> Self {
        Self {
            counts: reserve,
            reserve,
        }
    }

    /// A pool with explicit counts.
    ///
    /// Panics if any category exceeds its reserve total.
    #[must_use]
    pub fn with_counts(reserve: DiceCounts, counts: DiceCounts) -> Self {
        assert!(
            counts.within(&reserve),
            "pool {counts:?} exceeds reserve {reserve:?}"
        );
        Self { counts, reserve }
    }

    /// Dice currently available to draw.
    #[must_use]
    pub fn counts(&self) -> &DiceCounts {
        &self.counts
    }

    #[must_use]
    pub fn reserve(&self) -> &DiceCounts {
        &self.reserve
    }

    /// Available dice of one category.
    #[must_use]
    pub fn available(&self, category: Category) -> u32 {
        self.counts[category]
    }

    /// Available dice over all categories.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.total()
    }

    /// Remove one die of `category`.
    ///
    /// Panics if none is left; the draw engine never asks for more dice
    /// than the pool holds.
    pub fn take(&mut self, category: Category) {
        assert!(
            self.counts[category] > 0,
            "no {category} dice left in pool {:?}",
            self.counts
        );
        self.counts[category] -= 1;
    }

    /// Return the retained dice to the pool if the next roll cannot be
    /// filled otherwise.
    ///
    /// The next roll needs `dice_per_roll` dice, of which `rerolls` are
    /// already in hand. If the pool cannot supply the rest, every retained
    /// die goes back into the pool and `retained` is cleared. Returns
    /// whether a refill happened.
    ///
    /// Panics if a category would end up above its reserve; retained dice
    /// always come out of this pool, so that means the counts were corrupted.
    pub fn refill(
        &mut self,
        retained: &mut RetainedSet,
        rerolls: &DiceCounts,
        dice_per_roll: u32,
    ) -> bool {
        if self.total() + rerolls.total() >= dice_per_roll {
            return false;
        }

        debug!(pool = ?self.counts, ?retained, "refilling pool from retained dice");
        for category in Category::ALL {
            let room = self.reserve[category] - self.counts[category];
            assert!(
                retained[category] <= room,
                "returning {} {category} dice overflows reserve {:?}",
                retained[category],
                self.reserve
            );
        }
        self.counts.merge(retained);
        *retained = DiceCounts::zero();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserve() -> DiceCounts {
        DiceCounts::new([6, 3, 4])
    }

    #[test]
    fn test_initialize_is_full() {
        let pool = Pool::initialize(reserve());
        assert_eq!(pool.counts(), &reserve());
        assert_eq!(pool.total(), 13);
        assert_eq!(pool.available(Category::Hard), 3);
    }

    #[test]
    fn test_take() {
        let mut pool = Pool::initialize(reserve());
        pool.take(Category::Medium);
        assert_eq!(pool.available(Category::Medium), 3);
        assert_eq!(pool.total(), 12);
    }

    #[test]
    #[should_panic(expected = "no Hard dice left")]
    fn test_take_from_empty_category() {
        let mut pool = Pool::with_counts(reserve(), DiceCounts::new([1, 0, 0]));
        pool.take(Category::Hard);
    }

    #[test]
    fn test_refill_returns_retained() {
        let mut pool = Pool::with_counts(reserve(), DiceCounts::new([1, 0, 0]));
        let mut retained = DiceCounts::new([2, 0, 0]);

        assert!(pool.refill(&mut retained, &DiceCounts::zero(), 3));
        assert_eq!(pool.counts(), &DiceCounts::new([3, 0, 0]));
        assert!(retained.is_empty());
    }

    #[test]
    fn test_refill_counts_rerolls_in_hand() {
        let mut pool = Pool::with_counts(reserve(), DiceCounts::new([1, 0, 0]));
        let mut retained = DiceCounts::new([0, 2, 2]);
        let rerolls = DiceCounts::new([0, 1, 1]);

        assert!(!pool.refill(&mut retained, &rerolls, 3));
        assert_eq!(pool.total(), 1);
        assert_eq!(retained.total(), 4);
    }

    #[test]
    fn test_refill_up_to_full_reserve() {
        let mut pool = Pool::with_counts(reserve(), DiceCounts::new([0, 0, 2]));
        let mut retained = DiceCounts::new([6, 1, 2]);

        assert!(pool.refill(&mut retained, &DiceCounts::zero(), 3));
        assert_eq!(pool.counts(), &DiceCounts::new([6, 1, 4]));
        assert!(pool.counts().within(pool.reserve()));
    }

    #[test]
    #[should_panic(expected = "overflows reserve")]
    fn test_refill_rejects_more_dice_than_exist() {
        let mut pool = Pool::with_counts(reserve(), DiceCounts::new([0, 0, 0]));
        let mut retained = DiceCounts::new([9, 1, 2]);
        pool.refill(&mut retained, &DiceCounts::zero(), 3);
    }

    #[test]
    #[should_panic(expected = "exceeds reserve")]
    fn test_with_counts_rejects_overfull() {
        let _ = Pool::with_counts(reserve(), DiceCounts::new([7, 0, 0]));
    }

    #[test]
    fn test_counts_merge_and_iter() {
        let mut counts = DiceCounts::new([1, 0, 2]);
        counts.merge(&DiceCounts::new([0, 1, 1]));
        let pairs: Vec<_> = counts.iter().collect();
        assert_eq!(
            pairs,
            vec![(Category::Easy, 1), (Category::Hard, 1), (Category::Medium, 3)]
        );
    }
}
