//! Exact odds of the next roll.
//!
//! The next hand is the carried-over rerolls plus fresh dice drawn from the
//! pool, after the retained dice have gone back in if the pool runs short.
//! Fresh draws are enumerated pick by pick with their
//! without-replacement probabilities, then the damage count of each hand
//! is convolved die by die.

use crate::core::Rules;
use crate::dice::{DiceCounts, Face, Pool, RetainedSet};

/// A possible hand for the next roll and its probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedHand {
    pub hand: DiceCounts,
    pub probability: f64,
}

/// Every hand the next roll can use, with probabilities summing to 1.
///
/// Mirrors `Pool::refill`: if the pool cannot cover the fresh dice, the
/// retained dice are drawable too.
#[must_use]
pub fn next_hands(
    pool: &Pool,
    rerolls: &DiceCounts,
    retained: &RetainedSet,
    rules: &Rules,
) -> Vec<WeightedHand> {
    let to_draw = rules.dice_per_roll.saturating_sub(rerolls.total());
    let mut source = *pool.counts();
    if to_draw > pool.total() {
        source.merge(retained);
    }

    let mut hands = Vec::new();
    enumerate(source, *rerolls, to_draw, 1.0, &mut hands);
    hands
}

fn enumerate(
    source: DiceCounts,
    hand: DiceCounts,
    remaining: u32,
    probability: f64,
    out: &mut Vec<WeightedHand>,
) {
    let total = source.total();
    if remaining == 0 || total == 0 {
        out.push(WeightedHand { hand, probability });
        return;
    }

    for (category, count) in source.iter() {
        if count == 0 {
            continue;
        }
        let mut next_source = source;
        next_source[category] -= 1;
        let mut next_hand = hand;
        next_hand[category] += 1;
        let p = probability * count as f64 / total as f64;
        enumerate(next_source, next_hand, remaining - 1, p, out);
    }
}

/// Distribution of the number of damage faces rolled by `hand`.
///
/// Entry `k` is the probability of exactly `k` damage.
#[must_use]
pub fn damage_distribution(hand: &DiceCounts) -> Vec<f64> {
    let mut dist = vec![1.0];
    for (category, quantity) in hand.iter() {
        let p = category.probability(Face::Damage);
        for _ in 0..quantity {
            let mut next = vec![0.0; dist.len() + 1];
            for (k, &q) in dist.iter().enumerate() {
                next[k] += q * (1.0 - p);
                next[k + 1] += q * p;
            }
            dist = next;
        }
    }
    dist
}

/// Probability that the next roll busts a turn already holding `damage`.
#[must_use]
pub fn bust_probability(
    pool: &Pool,
    rerolls: &DiceCounts,
    retained: &RetainedSet,
    damage: u32,
    rules: &Rules,
) -> f64 {
    let needed = rules.bust_threshold.saturating_sub(damage) as usize;
    next_hands(pool, rerolls, retained, rules)
        .iter()
        .map(|wh| {
            let dist = damage_distribution(&wh.hand);
            let p_bust: f64 = dist.iter().skip(needed).sum();
            wh.probability * p_bust
        })
        .sum()
}

/// Expected score faces on the next roll.
#[must_use]
pub fn expected_score(
    pool: &Pool,
    rerolls: &DiceCounts,
    retained: &RetainedSet,
    rules: &Rules,
) -> f64 {
    next_hands(pool, rerolls, retained, rules)
        .iter()
        .map(|wh| {
            let per_hand: f64 = wh
                .hand
                .iter()
                .map(|(c, n)| n as f64 * c.probability(Face::Score))
                .sum();
            wh.probability * per_hand
        })
        .sum()
}
