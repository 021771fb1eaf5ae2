#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (i16, i16, i16, i16)| {
    // Card-deck magnitudes, including negatives and out-of-support values.
    let (n, k, s, x) = (
        i64::from(input.0),
        i64::from(input.1),
        i64::from(input.2),
        i64::from(input.3),
    );

    // The core must never panic and never leave [0, 1].
    let p = whiff_prob::pmf(n, k, s, x);
    assert!(p.is_finite() && (0.0..=1.0).contains(&p));

    let c = whiff_prob::binomial_coefficient(n, x);
    assert!(c >= 0.0 && !c.is_nan());

    let summary = whiff_prob::summary(n, k, s);
    for v in [
        summary.whiff,
        summary.exactly_one,
        summary.at_least_one,
        summary.two_or_more,
        summary.whiff_twice,
    ] {
        assert!(v.is_finite() && (0.0..=1.0).contains(&v));
    }
});
