// Shared helper functions used across CLI command handlers.
//
// These parse CLI string arguments into typed values and print reports.

use miette::IntoDiagnostic;
use serde::Serialize;

use whiff_prob::MAX_DECK_SIZE;

use crate::types::OutputFormat;

pub(crate) fn parse_output_format(raw: &str) -> miette::Result<OutputFormat> {
    match raw.trim().to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => miette::bail!("Unknown output format: {other}. Use 'text' or 'json'."),
    }
}

/// Reject counts above [`MAX_DECK_SIZE`] before they reach the core, whose
/// running time grows with them. Negative counts pass; the core maps them to
/// zero mass.
pub(crate) fn ensure_deck_sized(label: &str, value: i64) -> miette::Result<()> {
    if value > MAX_DECK_SIZE {
        miette::bail!("{label} ({value}) exceeds the supported maximum of {MAX_DECK_SIZE}");
    }
    Ok(())
}

pub(crate) fn print_json<T: Serialize>(report: &T) -> miette::Result<()> {
    let json = serde_json::to_string_pretty(report).into_diagnostic()?;
    println!("{json}");
    Ok(())
}
