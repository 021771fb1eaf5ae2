//! Exact rational arithmetic for cross-checking the floating-point engine.

use num::bigint::BigInt;
use num::rational::BigRational;
use num::traits::{One, Zero};

use crate::hypergeometric::HypergeometricParams;

/// `C(n, k)` as an arbitrary-precision integer, 0 when `k > n`.
///
/// Multiplies in the falling factorial one factor at a time and divides by
/// `i + 1` right away; every partial result is itself a binomial coefficient,
/// so each division is exact.
pub fn binomial_exact(n: u64, k: u64) -> BigInt {
    if k > n {
        return BigInt::zero();
    }
    let k = std::cmp::min(k, n - k);
    if k == 0 {
        return BigInt::one();
    }
    let mut result = BigInt::one();
    for i in 0..k {
        result *= BigInt::from(n - i);
        result /= BigInt::from(i + 1);
    }
    result
}

/// Exact PMF: `P(X = x) = C(K, x) * C(N-K, n-x) / C(N, n)`.
///
/// Follows the same zero conventions as [`crate::pmf`]: anything outside the
/// support, or any negative parameter, has zero mass.
///
/// # Parameters
/// - `params`: Hypergeometric distribution parameters.
/// - `x`: Query value.
///
/// # Returns
/// Exact probability mass `P(X = x)`.
pub fn pmf_exact(params: &HypergeometricParams, x: i64) -> BigRational {
    if x < 0 || x > params.max_val() || x < params.min_val() || !params.is_valid() {
        return BigRational::zero();
    }
    // Validity makes every cast below lossless.
    let (n, k, s, x) = (
        params.population as u64,
        params.successes as u64,
        params.draws as u64,
        x as u64,
    );

    let numerator = binomial_exact(k, x) * binomial_exact(n - k, s - x);
    let denominator = binomial_exact(n, s);

    if denominator.is_zero() {
        return BigRational::zero();
    }

    BigRational::new(numerator, denominator)
}
