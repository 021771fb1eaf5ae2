// Rendering configuration: environment defaults with CLI overrides.

use std::io::IsTerminal;

pub(crate) const DEFAULT_BAR_WIDTH: usize = 40;
pub(crate) const MAX_BAR_WIDTH: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RenderConfig {
    pub(crate) bar_width: usize,
    pub(crate) color: bool,
}

impl RenderConfig {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    /// Build from an arbitrary variable lookup. Color is only enabled when
    /// `tty` is true and neither `NO_COLOR` nor `WHIFF_NO_COLOR` is set.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>, tty: bool) -> Self {
        let env_or = |key: &str, default: usize| -> usize {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };
        let color_disabled = ["NO_COLOR", "WHIFF_NO_COLOR"]
            .into_iter()
            .any(|key| lookup(key).is_some_and(|v| !v.is_empty()));
        Self {
            bar_width: env_or("WHIFF_BAR_WIDTH", DEFAULT_BAR_WIDTH).clamp(1, MAX_BAR_WIDTH),
            color: tty && !color_disabled,
        }
    }

    pub(crate) fn with_overrides(mut self, width: Option<usize>, no_color: bool) -> Self {
        if let Some(width) = width {
            self.bar_width = width.clamp(1, MAX_BAR_WIDTH);
        }
        if no_color {
            self.color = false;
        }
        self
    }
}
