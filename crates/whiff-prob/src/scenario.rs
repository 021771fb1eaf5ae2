use thiserror::Error;

use crate::hypergeometric::{self, Distribution, DrawSummary, HypergeometricParams};

/// Cards that leave the deck on every elapsed turn.
pub const CARDS_PER_TURN: i64 = 2;

/// Largest deck accepted by [`DrawScenario::validate`].
///
/// Every core operation is linear in the population size, and a distribution
/// holds one entry per possible target count, so inputs are bounded here
/// before they reach the core.
pub const MAX_DECK_SIZE: i64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("{field} cannot be negative, got {value}")]
    Negative { field: &'static str, value: i64 },
    #[error("Deck size must be at least 1")]
    EmptyDeck,
    #[error("Deck size ({deck_size}) exceeds the supported maximum of {max}")]
    DeckTooLarge { deck_size: i64, max: i64 },
    #[error(
        "No cards remain after {turns} turns (deck of {deck_size}, {cards_per_turn} cards per turn)"
    )]
    DeckExhausted {
        deck_size: i64,
        turns: i64,
        cards_per_turn: i64,
    },
    #[error("Sample size ({sample_size}) cannot exceed remaining deck ({remaining})")]
    SampleExceedsDeck { sample_size: i64, remaining: i64 },
    #[error("Targets ({targets}) cannot exceed deck size ({deck_size})")]
    TargetsExceedDeck { targets: i64, deck_size: i64 },
    #[error("Targets ({targets}) cannot exceed remaining deck ({remaining})")]
    TargetsExceedRemaining { targets: i64, remaining: i64 },
}

/// Raw draw question as supplied by a user: a deck, how many turns have
/// already been played, how many cards are drawn, and how many targets the
/// deck holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawScenario {
    pub deck_size: i64,
    pub turns_elapsed: i64,
    pub sample_size: i64,
    pub targets: i64,
}

impl DrawScenario {
    pub const fn new(
        deck_size: i64,
        turns_elapsed: i64,
        sample_size: i64,
        targets: i64,
    ) -> Self {
        Self {
            deck_size,
            turns_elapsed,
            sample_size,
            targets,
        }
    }

    /// Cards left to draw from: `deck_size - CARDS_PER_TURN * turns_elapsed`.
    ///
    /// May be zero or negative for nonsensical input.
    pub fn effective_population(&self) -> i64 {
        self.deck_size
            .saturating_sub(CARDS_PER_TURN.saturating_mul(self.turns_elapsed))
    }

    /// Check the scenario describes a drawable deck.
    ///
    /// Checks run in order and the first failure is reported.
    pub fn validate(&self) -> Result<ValidScenario, ScenarioError> {
        for (field, value) in [
            ("Deck size", self.deck_size),
            ("Turns elapsed", self.turns_elapsed),
            ("Sample size", self.sample_size),
            ("Targets", self.targets),
        ] {
            if value < 0 {
                return Err(ScenarioError::Negative { field, value });
            }
        }

        if self.deck_size < 1 {
            return Err(ScenarioError::EmptyDeck);
        }
        if self.deck_size > MAX_DECK_SIZE {
            return Err(ScenarioError::DeckTooLarge {
                deck_size: self.deck_size,
                max: MAX_DECK_SIZE,
            });
        }

        let remaining = self.effective_population();
        if remaining < 1 {
            return Err(ScenarioError::DeckExhausted {
                deck_size: self.deck_size,
                turns: self.turns_elapsed,
                cards_per_turn: CARDS_PER_TURN,
            });
        }
        if self.sample_size > remaining {
            return Err(ScenarioError::SampleExceedsDeck {
                sample_size: self.sample_size,
                remaining,
            });
        }
        if self.targets > self.deck_size {
            return Err(ScenarioError::TargetsExceedDeck {
                targets: self.targets,
                deck_size: self.deck_size,
            });
        }
        if self.targets > remaining {
            return Err(ScenarioError::TargetsExceedRemaining {
                targets: self.targets,
                remaining,
            });
        }

        Ok(ValidScenario {
            scenario: *self,
            params: HypergeometricParams::new(remaining, self.targets, self.sample_size),
        })
    }

    /// Compute the analysis without validating first.
    ///
    /// The core is total, so this never fails; out-of-range inputs simply
    /// produce zero masses.
    pub fn evaluate_unchecked(&self) -> ScenarioAnalysis {
        let params =
            HypergeometricParams::new(self.effective_population(), self.targets, self.sample_size);
        ScenarioAnalysis::from_params(*self, params)
    }
}

/// A scenario that passed [`DrawScenario::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidScenario {
    scenario: DrawScenario,
    params: HypergeometricParams,
}

impl ValidScenario {
    pub fn scenario(&self) -> &DrawScenario {
        &self.scenario
    }

    pub fn params(&self) -> &HypergeometricParams {
        &self.params
    }

    /// Effective population size N.
    pub fn population(&self) -> i64 {
        self.params.population
    }

    pub fn targets(&self) -> i64 {
        self.params.successes
    }

    pub fn sample_size(&self) -> i64 {
        self.params.draws
    }

    pub fn summary(&self) -> DrawSummary {
        hypergeometric::summary(self.population(), self.targets(), self.sample_size())
    }

    pub fn distribution(&self) -> Distribution {
        hypergeometric::distribution(self.population(), self.targets(), self.sample_size())
    }

    pub fn analyze(&self) -> ScenarioAnalysis {
        ScenarioAnalysis::from_params(self.scenario, self.params)
    }
}

/// Everything the display layer needs for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioAnalysis {
    pub scenario: DrawScenario,
    /// Effective population size N.
    pub population: i64,
    pub summary: DrawSummary,
    pub distribution: Distribution,
    /// `E[X]`, the average number of targets drawn.
    pub expected_targets: f64,
}

impl ScenarioAnalysis {
    fn from_params(scenario: DrawScenario, params: HypergeometricParams) -> Self {
        Self {
            scenario,
            population: params.population,
            summary: params.summary(),
            distribution: params.distribution(),
            expected_targets: params.expected_value(),
        }
    }
}

/// Two-line description of the deck and the draw; the odds themselves are
/// left to the caller's renderer.
impl std::fmt::Display for ScenarioAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Deck: {} cards, {} turns elapsed, {} remaining",
            self.scenario.deck_size, self.scenario.turns_elapsed, self.population
        )?;
        write!(
            f,
            "Drawing {} with {} targets (expected {:.2} targets)",
            self.scenario.sample_size, self.scenario.targets, self.expected_targets
        )
    }
}
