mod cli;
mod commands;
mod config;
mod render;
mod types;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use whiff_prob::{DrawScenario, HypergeometricParams};

use crate::cli::{Cli, Commands};
use crate::commands::helpers::parse_output_format;
use crate::config::RenderConfig;

fn main() -> miette::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = parse_output_format(&cli.format)?;
    let render = RenderConfig::from_env().with_overrides(cli.width, cli.no_color);

    match cli.command {
        Commands::Odds {
            deck,
            turns,
            sample,
            targets,
        } => {
            let scenario = DrawScenario::new(deck, turns, sample, targets);
            commands::odds::run_odds_command(scenario, format, &render)?;
        }
        Commands::Pmf {
            population,
            successes,
            draws,
            k,
            exact,
        } => {
            let params = HypergeometricParams::new(population, successes, draws);
            commands::query::run_pmf_command(params, k, exact, format)?;
        }
        Commands::Binomial { n, k } => {
            commands::query::run_binomial_command(n, k, format)?;
        }
        Commands::Distribution {
            population,
            successes,
            draws,
        } => {
            let params = HypergeometricParams::new(population, successes, draws);
            commands::query::run_distribution_command(params, format, &render)?;
        }
    }

    Ok(())
}
