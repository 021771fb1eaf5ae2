//! Hypergeometric draw probabilities for card decks.
//!
//! Every function here is pure and total: degenerate or out-of-support
//! inputs yield probability 0 rather than an error. Input validation for
//! user-facing scenarios lives in [`scenario`].

pub mod combinatorics;
pub mod exact;
pub mod hypergeometric;
pub mod scenario;

#[cfg(test)]
mod test_support;

pub use combinatorics::{binomial_coefficient, ln_binomial, ln_factorial};
pub use hypergeometric::{
    distribution, pmf, summary, Distribution, DrawSummary, HypergeometricParams,
};
pub use scenario::{
    DrawScenario, ScenarioAnalysis, ScenarioError, ValidScenario, CARDS_PER_TURN, MAX_DECK_SIZE,
};
