//! Binomial distribution probability mass.

use ds_core::{Error, Result};
use num_traits::ToPrimitive;

use crate::choose::choose;

/// PMF of a Binomial distribution: the probability of exactly `r` successes
/// in `n` independent trials with per-trial success probability `p`.
///
/// `C(n, r) * p^r * (1-p)^(n-r)`, with the coefficient computed exactly and
/// converted to `f64` only at this final ratio. Exponentiation follows the
/// `0^0 = 1` convention, so `p = 0, r = 0` and `p = 1, r = n` both give
/// probability 1.
pub fn pmf(p: f64, r: u64, n: u64) -> Result<f64> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(Error::Validation(format!("p must be finite and in [0,1], got {}", p)));
    }
    if r > n {
        // C(n, r) = 0: no way to see more successes than trials.
        return Ok(0.0);
    }
    let ways = choose(n, r)
        .to_f64()
        .ok_or_else(|| Error::Computation(format!("C({}, {}) exceeds f64 range", n, r)))?;
    Ok(ways * p.powf(r as f64) * (1.0 - p).powf((n - r) as f64))
}
