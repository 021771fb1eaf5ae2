use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence, RngAlgorithm};

pub(crate) fn prob_proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        source_file: Some(file!()),
        failure_persistence: Some(Box::new(FileFailurePersistence::WithSource(
            "proptest-regressions",
        ))),
        rng_algorithm: RngAlgorithm::ChaCha,
        ..ProptestConfig::default()
    }
}
