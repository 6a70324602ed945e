//! Exact factorials over arbitrary-precision integers.

use num_bigint::BigUint;
use num_traits::One;

/// Exact `n!` as an arbitrary-precision integer.
///
/// Returns 1 for `n = 0` (the empty product). Staying in `BigUint` until
/// the final ratio keeps `choose` exact for values of `n` whose factorial
/// does not fit in any fixed-width integer.
pub fn factorial(n: u64) -> BigUint {
    let mut acc = BigUint::one();
    for i in 2..=n {
        acc *= i;
    }
    acc
}
