//! Shared types used across CLI commands and tests.

use serde::Serialize;

use whiff_prob::{Distribution, DrawSummary, ScenarioAnalysis};

use crate::render::bar_heights;

pub(crate) const ODDS_REPORT_SCHEMA_VERSION: &str = "1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
pub(crate) struct ScenarioInputs {
    pub(crate) deck_size: i64,
    pub(crate) turns_elapsed: i64,
    pub(crate) sample_size: i64,
    pub(crate) targets: i64,
}

#[derive(Serialize)]
pub(crate) struct SummaryReport {
    pub(crate) whiff: f64,
    pub(crate) exactly_one: f64,
    pub(crate) at_least_one: f64,
    pub(crate) two_or_more: f64,
    pub(crate) whiff_twice: f64,
}

impl From<&DrawSummary> for SummaryReport {
    fn from(s: &DrawSummary) -> Self {
        Self {
            whiff: s.whiff,
            exactly_one: s.exactly_one,
            at_least_one: s.at_least_one,
            two_or_more: s.two_or_more,
            whiff_twice: s.whiff_twice,
        }
    }
}

/// One chart row: `P(X = k)`, `P(X >= k)` and the bar height in percent of
/// the tallest bar.
#[derive(Serialize)]
pub(crate) struct DistributionRow {
    pub(crate) k: i64,
    pub(crate) probability: f64,
    pub(crate) at_least: f64,
    pub(crate) bar_height: f64,
}

pub(crate) fn distribution_rows(distribution: &Distribution) -> Vec<DistributionRow> {
    distribution
        .iter()
        .zip(bar_heights(distribution))
        .map(|((k, probability), bar_height)| DistributionRow {
            k,
            probability,
            at_least: distribution.at_least(k),
            bar_height,
        })
        .collect()
}

#[derive(Serialize)]
pub(crate) struct OddsReport {
    pub(crate) schema_version: String,
    pub(crate) inputs: ScenarioInputs,
    pub(crate) population: i64,
    pub(crate) summary: SummaryReport,
    pub(crate) expected_targets: f64,
    pub(crate) distribution: Vec<DistributionRow>,
}

impl From<&ScenarioAnalysis> for OddsReport {
    fn from(analysis: &ScenarioAnalysis) -> Self {
        let scenario = &analysis.scenario;
        Self {
            schema_version: ODDS_REPORT_SCHEMA_VERSION.to_string(),
            inputs: ScenarioInputs {
                deck_size: scenario.deck_size,
                turns_elapsed: scenario.turns_elapsed,
                sample_size: scenario.sample_size,
                targets: scenario.targets,
            },
            population: analysis.population,
            summary: SummaryReport::from(&analysis.summary),
            expected_targets: analysis.expected_targets,
            distribution: distribution_rows(&analysis.distribution),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct PmfReport {
    pub(crate) population: i64,
    pub(crate) successes: i64,
    pub(crate) draws: i64,
    pub(crate) k: i64,
    pub(crate) probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) exact: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct BinomialReport {
    pub(crate) n: i64,
    pub(crate) k: i64,
    /// `None` when the coefficient exceeds the `f64` range.
    pub(crate) value: Option<f64>,
}

#[derive(Serialize)]
pub(crate) struct DistributionReport {
    pub(crate) population: i64,
    pub(crate) successes: i64,
    pub(crate) draws: i64,
    pub(crate) max_probability: f64,
    pub(crate) total: f64,
    pub(crate) distribution: Vec<DistributionRow>,
}
