/// Natural logarithm of `n!`, by direct summation of `ln(i)` for `i = 2..=n`.
///
/// `ln(0!)` and `ln(1!)` are both 0. Negative `n` is outside the contract and
/// also yields 0.
///
/// # Parameters
/// - `n`: Factorial argument.
///
/// # Returns
/// `ln(n!)` as `f64`.
pub fn ln_factorial(n: i64) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    (2..=n).map(|i| (i as f64).ln()).sum()
}

/// Natural logarithm of the binomial coefficient `C(n, k)`.
///
/// Evaluated as `ln(n!) - ln(k!) - ln((n-k)!)` so that no intermediate value
/// leaves the `f64` range. Returns `f64::NEG_INFINITY` (i.e. `ln 0`) when
/// `k` is outside `0..=n`.
///
/// # Parameters
/// - `n`: Population count.
/// - `k`: Selection count.
///
/// # Returns
/// `ln C(n, k)`.
pub fn ln_binomial(n: i64, k: i64) -> f64 {
    if k < 0 || k > n {
        return f64::NEG_INFINITY;
    }
    // Use the smaller of k and n-k so that C(n, k) and C(n, n-k) take the
    // exact same floating-point path.
    let k = std::cmp::min(k, n - k);
    if k == 0 {
        return 0.0;
    }
    ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}

/// Binomial coefficient `C(n, k)` computed in log space and rounded to the
/// nearest integer.
///
/// Direct factorial products overflow `f64` past `170!`; subtracting
/// log-factorials keeps every intermediate small and only the final value is
/// exponentiated. The result is exact for small `n` and a close approximation
/// for very large `n`. Values beyond the `f64` range come back as
/// `f64::INFINITY`.
///
/// # Parameters
/// - `n`: Population count.
/// - `k`: Selection count.
///
/// # Returns
/// `C(n, k)`, or `0.0` when `k < 0` or `k > n`.
pub fn binomial_coefficient(n: i64, k: i64) -> f64 {
    if k < 0 || k > n {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }
    ln_binomial(n, k).exp().round()
}
