//! Exact binomial coefficients (`n choose k`).

use num_bigint::BigUint;
use num_traits::Zero;

use crate::factorial::factorial;

/// `n choose k`: the number of unordered `k`-subsets of an `n`-element set,
/// computed exactly as `n! / (k! (n-k)!)`.
///
/// Returns 0 when `k > n`. The guard runs before any factorial is taken, so
/// the undefined "factorial of a negative number" case never arises.
pub fn choose(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    factorial(n) / (factorial(k) * factorial(n - k))
}

/// `choose` with `n` taken from a collection's length.
///
/// Counterpart to the collection form of the coefficient: the subsets being
/// counted are subsets of `items`, only their count matters.
pub fn choose_from<T>(items: &[T], k: u64) -> BigUint {
    choose(items.len() as u64, k)
}
