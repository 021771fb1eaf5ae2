//! Text rendering: percentages, the red-yellow-green probability gradient and
//! the distribution bar chart.

use whiff_prob::{Distribution, DrawSummary};

use crate::config::RenderConfig;

const BAR_CHAR: char = '█';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Map a probability to red (0) → yellow (0.5) → green (1).
///
/// Below 0.5 the color runs from (255,0,50) to (255,200,50); from 0.5 up it
/// runs to (0,255,100).
pub(crate) fn probability_color(p: f64) -> Rgb {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    if p < 0.5 {
        let t = p * 2.0;
        Rgb {
            r: 255,
            g: channel(200.0 * t),
            b: 50,
        }
    } else {
        let t = (p - 0.5) * 2.0;
        Rgb {
            r: channel(255.0 * (1.0 - t)),
            g: channel(200.0 + 55.0 * t),
            b: channel(50.0 + 50.0 * t),
        }
    }
}

pub(crate) fn format_percent(p: f64) -> String {
    format!("{:.2}%", p * 100.0)
}

fn paint(text: &str, p: f64, cfg: &RenderConfig) -> String {
    if !cfg.color {
        return text.to_string();
    }
    let Rgb { r, g, b } = probability_color(p);
    format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
}

/// Bar heights in percent of the tallest bar; all zero when the maximum is 0.
pub(crate) fn bar_heights(distribution: &Distribution) -> Vec<f64> {
    let max = distribution.max_probability();
    distribution
        .probabilities()
        .iter()
        .map(|&p| if max > 0.0 { p / max * 100.0 } else { 0.0 })
        .collect()
}

pub(crate) fn render_summary(summary: &DrawSummary, cfg: &RenderConfig) -> String {
    let rows = [
        ("Whiff", summary.whiff),
        ("Exactly one", summary.exactly_one),
        ("At least one", summary.at_least_one),
        ("Two or more", summary.two_or_more),
        ("Whiff twice", summary.whiff_twice),
    ];
    rows.into_iter()
        .map(|(label, p)| {
            let value = format!("{:>7}", format_percent(p));
            format!("  {label:<13} {}\n", paint(&value, p, cfg))
        })
        .collect()
}

/// One row per `k`: label, bar scaled to `cfg.bar_width`, `P(X = k)` and
/// the cumulative `P(X >= k)`.
pub(crate) fn render_chart(distribution: &Distribution, cfg: &RenderConfig) -> String {
    if distribution.is_empty() {
        return "  (no outcomes)\n".to_string();
    }
    let label_width = distribution.len().saturating_sub(1).to_string().len().max(1);
    let mut out = format!(
        "  {:>label_width$}  {:<bar$}  {:>7}  {:>8}\n",
        "k",
        "",
        "P(=k)",
        "P(>=k)",
        bar = cfg.bar_width
    );
    for ((k, p), height) in distribution.iter().zip(bar_heights(distribution)) {
        let len = (height / 100.0 * cfg.bar_width as f64).round() as usize;
        let bar: String = std::iter::repeat(BAR_CHAR).take(len).collect();
        let padding = " ".repeat(cfg.bar_width.saturating_sub(len));
        out += &format!(
            "  {k:>label_width$}  {}{padding}  {:>7}  {:>8}\n",
            paint(&bar, p, cfg),
            format_percent(p),
            format_percent(distribution.at_least(k)),
        );
    }
    out
}
