#![no_main]
use libfuzzer_sys::fuzz_target;
use whiff_prob::{DrawScenario, MAX_DECK_SIZE};

fuzz_target!(|input: (i64, i64, i64, i64)| {
    let scenario = DrawScenario::new(input.0, input.1, input.2, input.3);

    // Anything that validates is small enough to analyze.
    let Ok(valid) = scenario.validate() else {
        return;
    };
    assert!((1..=MAX_DECK_SIZE).contains(&valid.population()));

    let analysis = valid.analyze();
    assert!((analysis.distribution.total() - 1.0).abs() < 1e-6);
    assert!((0.0..=1.0).contains(&analysis.summary.whiff));
});
