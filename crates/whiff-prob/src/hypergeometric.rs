use crate::combinatorics::{binomial_coefficient, ln_binomial};

/// Parameters for a hypergeometric distribution.
///
/// Models drawing `draws` cards without replacement from a deck of
/// `population` cards, `successes` of which are targets. X is the number of
/// targets drawn.
///
/// Any combination of values is accepted. Inputs that do not describe a real
/// deck give zero probability mass instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HypergeometricParams {
    /// Population size N (cards left in the deck).
    pub population: i64,
    /// Success states K (target cards in the deck).
    pub successes: i64,
    /// Sample size n (cards drawn).
    pub draws: i64,
}

impl HypergeometricParams {
    pub const fn new(population: i64, successes: i64, draws: i64) -> Self {
        Self {
            population,
            successes,
            draws,
        }
    }

    /// True when `0 <= K <= N` and `0 <= n <= N`.
    pub fn is_valid(&self) -> bool {
        self.population >= 0
            && (0..=self.population).contains(&self.successes)
            && (0..=self.population).contains(&self.draws)
    }

    /// Minimum possible value of `X`: the draw cannot hold more non-targets
    /// than the deck has.
    pub fn min_val(&self) -> i64 {
        let failures = self.population.saturating_sub(self.successes);
        std::cmp::max(0, self.draws.saturating_sub(failures))
    }

    /// Maximum possible value of `X`.
    pub fn max_val(&self) -> i64 {
        std::cmp::min(self.successes, self.draws)
    }

    /// Expected value `E[X] = n * K / N`.
    ///
    /// # Returns
    /// Floating-point expectation, 0 when `N <= 0`.
    pub fn expected_value(&self) -> f64 {
        if self.population <= 0 {
            return 0.0;
        }
        (self.draws as f64) * (self.successes as f64) / (self.population as f64)
    }

    /// `P(X = k)`; see [`pmf`].
    pub fn pmf(&self, k: i64) -> f64 {
        pmf(self.population, self.successes, self.draws, k)
    }

    /// Full distribution over `k = 0..=min(K, n)`; see [`distribution`].
    pub fn distribution(&self) -> Distribution {
        distribution(self.population, self.successes, self.draws)
    }

    /// Whiff/hit statistics; see [`summary`].
    pub fn summary(&self) -> DrawSummary {
        summary(self.population, self.successes, self.draws)
    }
}

/// Hypergeometric PMF: `P(X = k) = C(K, k) * C(N-K, n-k) / C(N, n)`.
///
/// Returns 0 for any `k` outside the support `max(0, n-(N-K)) ..= min(K, n)`
/// and for degenerate populations where `C(N, n) = 0`. The support check runs
/// before any combinatorics. When the coefficients overflow `f64` the ratio
/// is taken in log space, so the result is always finite and in `[0, 1]`.
///
/// # Parameters
/// - `population`: Population size N.
/// - `successes`: Success states K.
/// - `draws`: Sample size n.
/// - `k`: Observed successes.
///
/// # Returns
/// Probability mass `P(X = k)`.
pub fn pmf(population: i64, successes: i64, draws: i64, k: i64) -> f64 {
    let params = HypergeometricParams::new(population, successes, draws);
    if k < 0 || k > params.max_val() || k < params.min_val() {
        return 0.0;
    }

    let failures = population - successes;
    let numerator =
        binomial_coefficient(successes, k) * binomial_coefficient(failures, draws - k);
    let denominator = binomial_coefficient(population, draws);

    if denominator == 0.0 {
        return 0.0;
    }

    let p = if numerator.is_finite() && denominator.is_finite() {
        numerator / denominator
    } else {
        let ln_p = ln_binomial(successes, k) + ln_binomial(failures, draws - k)
            - ln_binomial(population, draws);
        ln_p.exp()
    };

    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Probability of every outcome `k = 0..=min(K, n)`, in increasing `k`.
///
/// Index `i` of [`Distribution::probabilities`] holds `P(X = i)`, so the
/// sequence can be labelled by position. The largest value is tracked for
/// chart scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    probabilities: Vec<f64>,
    max_probability: f64,
}

impl Distribution {
    /// Probabilities indexed by `k`.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Largest single probability, 0 for an empty distribution.
    pub fn max_probability(&self) -> f64 {
        self.max_probability
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// `(k, P(X = k))` pairs in increasing `k`.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.probabilities
            .iter()
            .enumerate()
            .map(|(k, &p)| (k as i64, p))
    }

    /// `P(X = k)`, 0 outside the tabulated range.
    pub fn get(&self, k: i64) -> f64 {
        usize::try_from(k)
            .ok()
            .and_then(|i| self.probabilities.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum of all probabilities; 1 up to rounding for a valid deck.
    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Tail probability `P(X >= k)`.
    pub fn at_least(&self, k: i64) -> f64 {
        let start = usize::try_from(k.max(0)).unwrap_or(usize::MAX);
        let tail: f64 = self.probabilities.iter().skip(start).sum();
        tail.clamp(0.0, 1.0)
    }

    /// `E[X]` computed from the tabulated masses.
    pub fn expected_value(&self) -> f64 {
        self.iter().map(|(k, p)| k as f64 * p).sum()
    }
}

/// Tabulate `pmf(N, K, n, k)` for `k = 0..=min(K, n)`.
///
/// Returns an empty distribution when `min(K, n) < 0`.
///
/// # Parameters
/// - `population`: Population size N.
/// - `successes`: Success states K.
/// - `draws`: Sample size n.
///
/// # Returns
/// The ordered distribution and its maximum.
pub fn distribution(population: i64, successes: i64, draws: i64) -> Distribution {
    let max_k = std::cmp::min(successes, draws);
    let probabilities: Vec<f64> = (0..=max_k)
        .map(|k| pmf(population, successes, draws, k))
        .collect();
    let max_probability = probabilities.iter().copied().fold(0.0, f64::max);
    Distribution {
        probabilities,
        max_probability,
    }
}

/// Whiff and hit probabilities for one opening draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawSummary {
    /// `P(X = 0)`: no target drawn.
    pub whiff: f64,
    /// `P(X = 1)`.
    pub exactly_one: f64,
    /// `P(X >= 1) = 1 - whiff`.
    pub at_least_one: f64,
    /// `P(X >= 2) = 1 - whiff - exactly_one`.
    pub two_or_more: f64,
    /// `whiff^2`: two independent draws from the same starting deck both miss.
    ///
    /// This treats a mulligan as an independent redraw with identical odds.
    /// It does not model a sequential process where the deck changes between
    /// the two draws.
    pub whiff_twice: f64,
}

/// Derive the five summary statistics from `(N, targets, sample_size)`.
///
/// Each value is clamped to `[0, 1]`, which only absorbs floating-point
/// residue from the subtractions.
///
/// # Parameters
/// - `population`: Population size N.
/// - `targets`: Target cards K.
/// - `sample_size`: Cards drawn n.
///
/// # Returns
/// The summary statistics for this draw.
pub fn summary(population: i64, targets: i64, sample_size: i64) -> DrawSummary {
    let whiff = pmf(population, targets, sample_size, 0);
    let exactly_one = pmf(population, targets, sample_size, 1);
    DrawSummary {
        whiff,
        exactly_one,
        at_least_one: (1.0 - whiff).clamp(0.0, 1.0),
        two_or_more: (1.0 - whiff - exactly_one).clamp(0.0, 1.0),
        whiff_twice: whiff * whiff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn opening_hand_without_a_target() {
        // 48 cards left, 3 targets, draw 7, see none.
        let p = pmf(48, 3, 7, 0);
        assert!((p - 0.6163).abs() < 1e-4, "got {p}");
    }

    #[test]
    fn both_targets_in_a_five_card_draw() {
        // C(2,2) * C(8,3) / C(10,5) = 56 / 252
        let p = pmf(10, 2, 5, 2);
        assert!((p - 56.0 / 252.0).abs() < 1e-12, "got {p}");
    }

    #[test]
    fn no_targets_means_certain_whiff() {
        assert_eq!(pmf(5, 0, 3, 0), 1.0);
    }

    #[test]
    fn empty_population_draws_nothing_with_certainty() {
        assert_eq!(pmf(0, 0, 0, 0), 1.0);
    }

    #[test]
    fn k_above_support_is_zero() {
        assert_eq!(pmf(10, 2, 5, 5), 0.0);
        assert_eq!(pmf(10, 2, 5, 3), 0.0);
    }

    #[test]
    fn k_below_support_is_zero() {
        // 10 cards, 8 targets, draw 5: at most 2 non-targets can be drawn.
        assert_eq!(pmf(10, 8, 5, 2), 0.0);
        assert!(pmf(10, 8, 5, 3) > 0.0);
        assert_eq!(pmf(10, 8, 5, -1), 0.0);
    }

    #[test]
    fn known_value_one_sixth() {
        // C(3,0) * C(7,4) / C(10,4) = 35 / 210
        let p = pmf(10, 3, 4, 0);
        assert!((p - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn draw_entire_population() {
        let params = HypergeometricParams::new(10, 3, 10);
        assert_eq!(params.min_val(), 3);
        assert_eq!(params.max_val(), 3);
        assert_eq!(params.pmf(3), 1.0);
        assert_eq!(params.pmf(2), 0.0);
    }

    #[test]
    fn degenerate_inputs_return_zero() {
        // Sample larger than the population.
        assert_eq!(pmf(5, 2, 8, 1), 0.0);
        // Negative population left after too many turns.
        assert_eq!(pmf(-4, 2, 3, 0), 0.0);
        // More targets than cards.
        assert_eq!(pmf(5, 9, 3, 3), 0.0);
        // Negative draw count.
        assert_eq!(pmf(5, 2, -1, 0), 0.0);
    }

    #[test]
    fn huge_population_stays_finite() {
        // C(3000, 1500) overflows f64; the log-space fallback keeps the mass.
        let p = pmf(3000, 1500, 1500, 750);
        assert!(p.is_finite());
        assert!(p > 0.0 && p < 1.0, "got {p}");
        let d = distribution(3000, 1500, 1500);
        assert!((d.total() - 1.0).abs() < 1e-6, "total {}", d.total());
    }

    #[test]
    fn distribution_is_indexed_by_k() {
        let d = distribution(10, 2, 5);
        assert_eq!(d.len(), 3);
        for (k, p) in d.iter() {
            assert!((p - pmf(10, 2, 5, k)).abs() < 1e-15);
        }
        assert!((d.total() - 1.0).abs() < 1e-12);
        assert_eq!(
            d.max_probability(),
            d.probabilities().iter().copied().fold(0.0, f64::max)
        );
    }

    #[test]
    fn distribution_empty_for_negative_bound() {
        let d = distribution(10, -1, 5);
        assert!(d.is_empty());
        assert_eq!(d.max_probability(), 0.0);
        assert_eq!(d.total(), 0.0);
        assert_eq!(d.at_least(0), 0.0);
    }

    #[test]
    fn distribution_max_zero_when_all_mass_missing() {
        // Sample larger than deck: every entry is zero.
        let d = distribution(4, 2, 6);
        assert_eq!(d.len(), 3);
        assert_eq!(d.max_probability(), 0.0);
    }

    #[test]
    fn at_least_matches_summary() {
        let d = distribution(40, 4, 7);
        let s = summary(40, 4, 7);
        assert!((d.at_least(0) - 1.0).abs() < 1e-12);
        assert!((d.at_least(1) - s.at_least_one).abs() < 1e-12);
        assert!((d.at_least(2) - s.two_or_more).abs() < 1e-12);
        assert_eq!(d.at_least(99), 0.0);
        assert_eq!(d.get(99), 0.0);
        assert_eq!(d.get(-1), 0.0);
    }

    #[test]
    fn expected_value_agrees_with_closed_form() {
        let params = HypergeometricParams::new(60, 12, 7);
        let d = params.distribution();
        assert!((d.expected_value() - params.expected_value()).abs() < 1e-9);
        assert_eq!(HypergeometricParams::new(0, 0, 0).expected_value(), 0.0);
    }

    #[test]
    fn summary_identities() {
        let s = summary(53, 4, 7);
        assert!((s.at_least_one + s.whiff - 1.0).abs() < EPS);
        assert!((s.two_or_more - (s.at_least_one - s.exactly_one)).abs() < EPS);
        assert_eq!(s.whiff_twice, s.whiff * s.whiff);
    }

    #[test]
    fn summary_with_no_targets() {
        let s = summary(40, 0, 7);
        assert_eq!(s.whiff, 1.0);
        assert_eq!(s.exactly_one, 0.0);
        assert_eq!(s.at_least_one, 0.0);
        assert_eq!(s.two_or_more, 0.0);
        assert_eq!(s.whiff_twice, 1.0);
    }

    #[test]
    fn summary_never_negative() {
        // whiff + exactly_one = 1 here; the subtraction must not dip below 0.
        let s = summary(10, 1, 5);
        assert!(s.two_or_more >= 0.0);
        assert!(s.two_or_more < EPS);
    }

    #[test]
    fn validity() {
        assert!(HypergeometricParams::new(10, 3, 4).is_valid());
        assert!(HypergeometricParams::new(0, 0, 0).is_valid());
        assert!(!HypergeometricParams::new(10, 11, 4).is_valid());
        assert!(!HypergeometricParams::new(10, 3, 11).is_valid());
        assert!(!HypergeometricParams::new(-1, 0, 0).is_valid());
    }

    // ---------------------------------------------------------------
    // Proptest: property-based / randomized tests
    // ---------------------------------------------------------------

    use proptest::prelude::*;

    /// Strategy that produces valid (N, K, n) triples.
    fn valid_params_strategy() -> impl Strategy<Value = (i64, i64, i64)> {
        (0i64..=250).prop_flat_map(|n| (Just(n), 0..=n, 0..=n))
    }

    proptest! {
        #![proptest_config(crate::test_support::prob_proptest_config())]

        #[test]
        fn pmf_sums_to_one((n, k, s) in valid_params_strategy()) {
            let total: f64 = (0..=std::cmp::min(k, s)).map(|x| pmf(n, k, s, x)).sum();
            prop_assert!(
                (total - 1.0).abs() < 1e-6,
                "PMF should sum to 1 for N={n}, K={k}, n={s}, got {total}"
            );
        }

        #[test]
        fn pmf_zero_outside_support((n, k, s) in valid_params_strategy(), extra in 1i64..20) {
            let params = HypergeometricParams::new(n, k, s);
            prop_assert_eq!(pmf(n, k, s, params.max_val() + extra), 0.0);
            for x in 0..params.min_val() {
                prop_assert_eq!(pmf(n, k, s, x), 0.0);
            }
        }

        #[test]
        fn pmf_in_unit_interval_for_any_input(
            n in -20i64..300,
            k in -20i64..300,
            s in -20i64..300,
            x in -20i64..300,
        ) {
            let p = pmf(n, k, s, x);
            prop_assert!(p.is_finite());
            prop_assert!((0.0..=1.0).contains(&p), "pmf({n},{k},{s},{x}) = {p}");
        }

        /// C(K,x)C(N-K,n-x)/C(N,n) = C(n,x)C(N-n,K-x)/C(N,K).
        #[test]
        fn pmf_symmetric_in_targets_and_draws((n, k, s) in valid_params_strategy()) {
            for x in 0..=std::cmp::max(k, s) {
                let a = pmf(n, k, s, x);
                let b = pmf(n, s, k, x);
                prop_assert!((a - b).abs() < 1e-9, "x={x}: {a} vs {b}");
            }
        }

        #[test]
        fn summary_identities_hold((n, k, s) in valid_params_strategy()) {
            let st = summary(n, k, s);
            prop_assert!((st.at_least_one + st.whiff - 1.0).abs() < 1e-9);
            prop_assert!((st.two_or_more - (st.at_least_one - st.exactly_one)).abs() < 1e-9);
            prop_assert!((st.whiff_twice - st.whiff * st.whiff).abs() < 1e-15);
        }

        #[test]
        fn distribution_max_is_tracked((n, k, s) in valid_params_strategy()) {
            let d = distribution(n, k, s);
            prop_assert_eq!(d.len() as i64, std::cmp::min(k, s) + 1);
            let max = d.probabilities().iter().copied().fold(0.0, f64::max);
            prop_assert_eq!(d.max_probability(), max);
            prop_assert!(d.max_probability() > 0.0);
        }
    }
}
