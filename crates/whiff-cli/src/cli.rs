//! CLI argument definitions: top-level `Cli` struct and `Commands` enum.

use clap::{Parser, Subcommand};

pub(crate) const CLI_LONG_ABOUT: &str =
    "Hypergeometric draw odds for card games.\n\n\
    Typical use:\n  \
    whiff odds --deck 60 --turns 2 --sample 7 --targets 4\n\n\
    Each elapsed turn removes 2 cards from the deck before the draw.\n\
    Raw queries (pmf, binomial, distribution) skip validation and return 0\n\
    for impossible inputs.";

#[derive(Parser)]
#[command(name = "whiff")]
#[command(about = "Hypergeometric draw odds for card games")]
#[command(long_about = CLI_LONG_ABOUT)]
#[command(version)]
pub(crate) struct Cli {
    /// Output format: text | json
    #[arg(long, global = true, default_value = "text")]
    pub(crate) format: String,

    /// Disable ANSI colors (also honoured via NO_COLOR / WHIFF_NO_COLOR)
    #[arg(long, global = true, default_value_t = false)]
    pub(crate) no_color: bool,

    /// Width of the longest chart bar in characters (default: WHIFF_BAR_WIDTH or 40)
    #[arg(long, global = true)]
    pub(crate) width: Option<usize>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Whiff/hit odds and the full distribution for a deck after some turns
    #[command(display_order = 1)]
    Odds {
        /// Cards in the deck before any turn
        #[arg(long, allow_negative_numbers = true)]
        deck: i64,

        /// Turns already played (2 cards leave the deck per turn)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        turns: i64,

        /// Cards drawn
        #[arg(long, allow_negative_numbers = true)]
        sample: i64,

        /// Target cards in the deck
        #[arg(long, allow_negative_numbers = true)]
        targets: i64,
    },

    /// Probability of exactly k targets: P(X = k) for population N, K targets, n draws
    #[command(display_order = 10)]
    Pmf {
        /// Population size N
        #[arg(allow_negative_numbers = true)]
        population: i64,

        /// Target count K
        #[arg(allow_negative_numbers = true)]
        successes: i64,

        /// Sample size n
        #[arg(allow_negative_numbers = true)]
        draws: i64,

        /// Observed targets k
        #[arg(allow_negative_numbers = true)]
        k: i64,

        /// Also print the exact rational value
        #[arg(long, default_value_t = false)]
        exact: bool,
    },

    /// Binomial coefficient C(n, k)
    #[command(display_order = 11)]
    Binomial {
        #[arg(allow_negative_numbers = true)]
        n: i64,

        #[arg(allow_negative_numbers = true)]
        k: i64,
    },

    /// Full distribution P(X = k) for k = 0..=min(K, n)
    #[command(display_order = 12)]
    Distribution {
        /// Population size N
        #[arg(allow_negative_numbers = true)]
        population: i64,

        /// Target count K
        #[arg(allow_negative_numbers = true)]
        successes: i64,

        /// Sample size n
        #[arg(allow_negative_numbers = true)]
        draws: i64,
    },
}
