//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{KnapsackError, Result};

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.generations, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in the population.
    ///
    /// Each generation pairs the population off, so an odd size loses its
    /// last individual after the first [`evolve`](super::GaEngine::evolve).
    pub population_size: usize,

    /// Number of generations [`GaRunner`](super::GaRunner) executes.
    ///
    /// There is no early stopping; the loop always runs this many times.
    pub generations: usize,

    /// Fraction of genes (0.0–1.0) flipped per mutation.
    ///
    /// The flip count is `floor(mutation_rate * gene_length)`.
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Upper bound on random draws during population initialization.
    ///
    /// `None` (the default) samples until the population is full. Since the
    /// all-zero selection is always feasible this terminates with
    /// probability one, but the expected number of draws grows quickly when
    /// capacity admits few selections.
    pub max_init_attempts: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 50,
            mutation_rate: 0.2,
            seed: None,
            max_init_attempts: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Bounds the number of initialization draws.
    pub fn with_max_init_attempts(mut self, attempts: u64) -> Self {
        self.max_init_attempts = Some(attempts);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`KnapsackError::InvalidConfiguration`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.generations == 0 {
            return Err(invalid("generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.max_init_attempts == Some(0) {
            return Err(invalid("max_init_attempts must be positive or None"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> KnapsackError {
    KnapsackError::InvalidConfiguration(msg.into())
}
