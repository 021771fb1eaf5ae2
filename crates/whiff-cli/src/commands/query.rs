// Command handlers for: Pmf, Binomial, Distribution
//
// Raw probability queries. These call the core directly without scenario
// validation, so impossible inputs report probability 0. Counts above the
// supported deck size are still rejected.

use tracing::debug;

use whiff_prob::exact::pmf_exact;
use whiff_prob::HypergeometricParams;

use super::helpers::{ensure_deck_sized, print_json};
use crate::config::RenderConfig;
use crate::render::{format_percent, render_chart};
use crate::types::{distribution_rows, BinomialReport, DistributionReport, OutputFormat, PmfReport};

fn ensure_params_deck_sized(params: &HypergeometricParams) -> miette::Result<()> {
    ensure_deck_sized("Population", params.population)?;
    ensure_deck_sized("Successes", params.successes)?;
    ensure_deck_sized("Draws", params.draws)
}

pub(crate) fn run_pmf_command(
    params: HypergeometricParams,
    k: i64,
    exact: bool,
    format: OutputFormat,
) -> miette::Result<()> {
    ensure_params_deck_sized(&params)?;
    let probability = params.pmf(k);
    debug!(?params, k, probability, "pmf query");
    let exact = exact.then(|| pmf_exact(&params, k).to_string());

    match format {
        OutputFormat::Json => print_json(&PmfReport {
            population: params.population,
            successes: params.successes,
            draws: params.draws,
            k,
            probability,
            exact,
        }),
        OutputFormat::Text => {
            println!(
                "P(X = {k}) = {probability:.6} ({}) for N={}, K={}, n={}",
                format_percent(probability),
                params.population,
                params.successes,
                params.draws
            );
            if let Some(exact) = exact {
                println!("exact: {exact}");
            }
            Ok(())
        }
    }
}

pub(crate) fn run_binomial_command(n: i64, k: i64, format: OutputFormat) -> miette::Result<()> {
    ensure_deck_sized("n", n)?;
    let value = whiff_prob::binomial_coefficient(n, k);
    debug!(n, k, value, "binomial query");

    match format {
        OutputFormat::Json => print_json(&BinomialReport {
            n,
            k,
            value: value.is_finite().then_some(value),
        }),
        OutputFormat::Text => {
            if value.is_finite() {
                println!("C({n}, {k}) = {value}");
            } else {
                println!(
                    "C({n}, {k}) exceeds the f64 range (ln C = {:.4})",
                    whiff_prob::ln_binomial(n, k)
                );
            }
            Ok(())
        }
    }
}

pub(crate) fn run_distribution_command(
    params: HypergeometricParams,
    format: OutputFormat,
    render: &RenderConfig,
) -> miette::Result<()> {
    ensure_params_deck_sized(&params)?;
    let distribution = params.distribution();
    debug!(?params, outcomes = distribution.len(), "distribution query");

    match format {
        OutputFormat::Json => print_json(&DistributionReport {
            population: params.population,
            successes: params.successes,
            draws: params.draws,
            max_probability: distribution.max_probability(),
            total: distribution.total(),
            distribution: distribution_rows(&distribution),
        }),
        OutputFormat::Text => {
            println!(
                "N={}, K={}, n={} (expected {:.2})",
                params.population,
                params.successes,
                params.draws,
                params.expected_value()
            );
            print!("{}", render_chart(&distribution, render));
            Ok(())
        }
    }
}
