// Command handler for: Odds
//
// Validates a deck scenario and reports whiff/hit odds plus the full
// distribution of targets drawn.

use tracing::{debug, warn};

use whiff_prob::DrawScenario;

use super::helpers::print_json;
use crate::config::RenderConfig;
use crate::render::{render_chart, render_summary};
use crate::types::{OddsReport, OutputFormat};

/// Run the `odds` CLI command.
///
/// Rejected scenarios never reach the probability core; the validation
/// message is returned as the command error.
pub(crate) fn run_odds_command(
    scenario: DrawScenario,
    format: OutputFormat,
    render: &RenderConfig,
) -> miette::Result<()> {
    let valid = scenario.validate().map_err(|e| {
        warn!(?scenario, "rejected scenario: {e}");
        miette::miette!("{e}")
    })?;
    debug!(
        population = valid.population(),
        targets = valid.targets(),
        sample_size = valid.sample_size(),
        "validated scenario"
    );

    let analysis = valid.analyze();
    debug!(
        whiff = analysis.summary.whiff,
        at_least_one = analysis.summary.at_least_one,
        outcomes = analysis.distribution.len(),
        "computed odds"
    );

    match format {
        OutputFormat::Json => print_json(&OddsReport::from(&analysis)),
        OutputFormat::Text => {
            println!("{analysis}");
            println!();
            print!("{}", render_summary(&analysis.summary, render));
            println!();
            println!("Targets drawn:");
            print!("{}", render_chart(&analysis.distribution, render));
            Ok(())
        }
    }
}
