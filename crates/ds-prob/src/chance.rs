//! "At least K successes" odds for pools of identical dice.

use ds_core::{Error, Result};

use crate::binomial;

/// A pool of identical dice and the threshold the roll must meet.
///
/// Defaults to d6 dice where a single face counts as a win and one win is
/// enough, so `DicePool::new(n)` is "roll n d6, hit a given face at least
/// once".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DicePool {
    /// Number of dice rolled.
    pub dice_count: u64,
    /// Faces per die that count as a success.
    pub winning_sides: u64,
    /// Minimum successes for the roll to succeed overall.
    pub wins_needed: u64,
    /// Faces per die.
    pub sides: u64,
}

impl DicePool {
    /// `dice_count` dice with the default configuration
    /// (`winning_sides = 1`, `wins_needed = 1`, `sides = 6`).
    pub fn new(dice_count: u64) -> Self {
        Self { dice_count, winning_sides: 1, wins_needed: 1, sides: 6 }
    }

    /// Sets how many faces per die count as a success.
    pub fn winning_sides(mut self, winning_sides: u64) -> Self {
        self.winning_sides = winning_sides;
        self
    }

    /// Sets the minimum number of successes required.
    pub fn wins_needed(mut self, wins_needed: u64) -> Self {
        self.wins_needed = wins_needed;
        self
    }

    /// Sets the number of faces per die.
    pub fn sides(mut self, sides: u64) -> Self {
        self.sides = sides;
        self
    }
}

/// Probability in `[0, 1]` of at least `wins_needed` successes when rolling
/// the pool.
///
/// Tail sum of the binomial PMF for `r` from `wins_needed` through
/// `dice_count` inclusive, with per-die success probability
/// `winning_sides / sides`. The tail has no elementary closed form, so it
/// is summed term by term. An unreachable threshold
/// (`wins_needed > dice_count`) is an empty range and yields 0.
pub fn at_least_probability(pool: DicePool) -> Result<f64> {
    if pool.sides == 0 {
        return Err(Error::Validation("sides must be positive".to_string()));
    }
    if pool.winning_sides > pool.sides {
        return Err(Error::Validation(format!(
            "winning_sides must be <= sides, got winning_sides={} sides={}",
            pool.winning_sides, pool.sides
        )));
    }
    if pool.wins_needed > pool.dice_count {
        return Ok(0.0);
    }
    let p = pool.winning_sides as f64 / pool.sides as f64;
    let mut total = 0.0;
    for r in pool.wins_needed..=pool.dice_count {
        total += binomial::pmf(p, r, pool.dice_count)?;
    }
    Ok(total)
}

/// Same as [`at_least_probability`], expressed as a percentage in `[0, 100]`.
pub fn chance_of_at_least(pool: DicePool) -> Result<f64> {
    Ok(at_least_probability(pool)? * 100.0)
}
