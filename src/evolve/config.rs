//! Search configuration.
//!
//! [`EvolveConfig`] holds every parameter of a run: population shape,
//! mutation rate, target, generation cap and seed.

use crate::error::{Error, Result};

/// Configuration for the evolutionary search.
///
/// # Defaults
///
/// ```
/// use arith_evolve::evolve::EvolveConfig;
///
/// let config = EvolveConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.expression_length, 5);
/// assert_eq!(config.target, 42);
/// assert_eq!(config.max_generations, 5000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use arith_evolve::evolve::EvolveConfig;
///
/// let config = EvolveConfig::default()
///     .with_population_size(20)
///     .with_expression_length(7)
///     .with_mutation_rate(0.05)
///     .with_target(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveConfig {
    /// Number of expressions kept after every generation.
    ///
    /// Each generation breeds `n * (n - 1)` offspring, so cost grows
    /// quadratically with this value.
    pub population_size: usize,

    /// Number of symbols per expression. Must be odd.
    pub expression_length: usize,

    /// Per-symbol mutation probability applied to every offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// The number the search tries to hit exactly.
    pub target: i64,

    /// Maximum number of generations before giving up.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            expression_length: 5,
            mutation_rate: 0.10,
            target: 42,
            max_generations: 5000,
            seed: None,
        }
    }
}

impl EvolveConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the expression length.
    pub fn with_expression_length(mut self, len: usize) -> Self {
        self.expression_length = len;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the target number.
    pub fn with_target(mut self, target: i64) -> Self {
        self.target = target;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Small, fast search.
    ///
    /// - Population: 10, Length: 5, Mutation: 0.10, Generations: 5000
    pub fn quick() -> Self {
        Self::default()
    }

    /// Larger population and longer expressions, for targets that need
    /// more operators to reach.
    ///
    /// - Population: 30, Length: 9, Mutation: 0.05, Generations: 20000
    pub fn thorough() -> Self {
        Self {
            population_size: 30,
            expression_length: 9,
            mutation_rate: 0.05,
            max_generations: 20_000,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - [`Error::InvalidPopulationSize`] for an empty population
    /// - [`Error::InvalidLength`] for a zero or even expression length
    /// - [`Error::Config`] for an out-of-range mutation rate or a zero
    ///   generation cap
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::InvalidPopulationSize);
        }
        if self.expression_length == 0 || self.expression_length % 2 == 0 {
            return Err(Error::InvalidLength(self.expression_length));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::Config(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.max_generations == 0 {
            return Err(Error::Config("max_generations must be at least 1".into()));
        }
        Ok(())
    }
}
