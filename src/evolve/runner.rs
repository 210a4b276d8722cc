//! The generational driving loop.
//!
//! [`EvolveRunner`] runs randomize → advance → ... until an exact match is
//! found or the generation cap is reached.

use super::config::EvolveConfig;
use super::population::Population;
use crate::error::Result;
use crate::expr::{Evaluation, Expression};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct EvolveResult {
    /// The best expression of the final population.
    pub best: Expression,

    /// Score of `best` (0 when the target was hit).
    pub best_score: u64,

    /// Evaluation of `best`.
    pub value: Evaluation,

    /// Number of generations bred after initialization.
    pub generations: usize,

    /// Whether an exact match was found before the cap.
    pub found: bool,

    /// Best score after initialization and after each generation.
    pub score_history: Vec<u64>,
}

/// Executes the search loop.
///
/// # Usage
///
/// ```
/// use arith_evolve::evolve::{EvolveConfig, EvolveRunner};
///
/// let config = EvolveConfig::default().with_target(24).with_seed(1);
/// let result = EvolveRunner::run(&config).unwrap();
/// println!("{} = {}", result.best, result.value);
/// ```
pub struct EvolveRunner;

impl EvolveRunner {
    /// Runs the search with an RNG seeded from `config.seed`, or from
    /// entropy when no seed is set.
    ///
    /// # Errors
    /// Returns the validation error if `config` is invalid.
    pub fn run(config: &EvolveConfig) -> Result<EvolveResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs the search drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(config: &EvolveConfig, rng: &mut R) -> Result<EvolveResult> {
        let mut population = Population::from_config(config)?;
        population.randomize(rng);

        let mut score_history = Vec::with_capacity(config.max_generations.min(1024) + 1);
        score_history.push(population.best_score());

        while !population.target_found() && population.generation() < config.max_generations {
            population.advance(rng);
            score_history.push(population.best_score());
        }

        let best = population.best().clone();
        let found = population.target_found();
        info!(
            "search for {} {} after {} generations: {} = {}",
            config.target,
            if found { "succeeded" } else { "gave up" },
            population.generation(),
            best,
            best.evaluate()
        );

        Ok(EvolveResult {
            best_score: population.best_score(),
            value: best.evaluate(),
            best,
            generations: population.generation(),
            found,
            score_history,
        })
    }
}
