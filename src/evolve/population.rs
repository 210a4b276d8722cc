//! Fixed-size population of expressions.

use super::config::EvolveConfig;
use crate::error::{Error, Result};
use crate::expr::Expression;
use log::debug;
use rand::Rng;

/// An ordered, fixed-size set of candidate expressions.
///
/// After [`randomize`](Self::randomize) or [`advance`](Self::advance) the
/// members are sorted by ascending score, so index 0 is always the best.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Expression>,
    expression_length: usize,
    mutation_rate: f64,
    target: i64,
    generation: usize,
}

impl Population {
    /// Creates `size` unpopulated expressions of `expression_length` symbols.
    ///
    /// # Errors
    /// - [`Error::InvalidPopulationSize`] if `size` is zero
    /// - [`Error::InvalidLength`] if `expression_length` is zero or even
    pub fn new(
        size: usize,
        expression_length: usize,
        mutation_rate: f64,
        target: i64,
    ) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidPopulationSize);
        }
        let members = (0..size)
            .map(|_| Expression::new(expression_length))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            members,
            expression_length,
            mutation_rate,
            target,
            generation: 0,
        })
    }

    /// Creates a population from a validated configuration.
    pub fn from_config(config: &EvolveConfig) -> Result<Self> {
        config.validate()?;
        Self::new(
            config.population_size,
            config.expression_length,
            config.mutation_rate,
            config.target,
        )
    }

    /// Replaces every member with a fresh random well-formed expression,
    /// then sorts.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for member in self.members.iter_mut() {
            member.fill_random(rng);
        }
        self.sort();
        debug!(
            "randomized {} members, best score {}",
            self.members.len(),
            self.best_score()
        );
    }

    /// Breeds the next generation.
    ///
    /// Every unordered pair `(i, j)` shares one random split index and
    /// yields two offspring: `i` spliced with `j`, and `j` spliced with
    /// `i`, each then mutated. The `n * (n - 1)` offspring are sorted and
    /// the best `n` replace the population. Offspring are never
    /// re-validated; malformed ones simply score last.
    ///
    /// A single-member population has no pairs and is left unchanged.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        let n = self.members.len();
        self.generation += 1;
        if n < 2 {
            debug!("generation {}: no pairs to breed", self.generation);
            return;
        }

        let mut offspring = Vec::with_capacity(n * (n - 1));
        for i in 0..n {
            for j in (i + 1)..n {
                let split = self.random_split(rng);
                let (a, b) = (&self.members[i], &self.members[j]);
                offspring.push(a.splice(b, split).mutate(self.mutation_rate, rng));
                offspring.push(b.splice(a, split).mutate(self.mutation_rate, rng));
            }
        }

        let target = self.target;
        offspring.sort_by_key(|e| e.score(target));
        offspring.truncate(n);
        self.members = offspring;

        debug!(
            "generation {}: best score {}",
            self.generation,
            self.best_score()
        );
    }

    /// Split index in `0..len - 1`; length 1 can only split at 0.
    fn random_split<R: Rng>(&self, rng: &mut R) -> usize {
        if self.expression_length < 2 {
            0
        } else {
            rng.random_range(0..self.expression_length - 1)
        }
    }

    fn sort(&mut self) {
        let target = self.target;
        self.members.sort_by_key(|e| e.score(target));
    }

    /// `true` once the best member hits the target exactly.
    pub fn target_found(&self) -> bool {
        self.best_score() == 0
    }

    /// The best-ranked member.
    pub fn best(&self) -> &Expression {
        // Construction guarantees at least one member.
        &self.members[0]
    }

    pub fn best_score(&self) -> u64 {
        self.best().score(self.target)
    }

    pub fn members(&self) -> &[Expression] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; a population holds at least one member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn expression_length(&self) -> usize {
        self.expression_length
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Number of [`advance`](Self::advance) calls so far.
    pub fn generation(&self) -> usize {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scores(pop: &Population) -> Vec<u64> {
        pop.members().iter().map(|e| e.score(pop.target())).collect()
    }

    fn assert_sorted(pop: &Population) {
        let s = scores(pop);
        for w in s.windows(2) {
            assert!(w[0] <= w[1], "population must be sorted: {s:?}");
        }
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(
            Population::new(0, 5, 0.1, 42).unwrap_err(),
            Error::InvalidPopulationSize
        );
        assert_eq!(
            Population::new(10, 4, 0.1, 42).unwrap_err(),
            Error::InvalidLength(4)
        );
        let pop = Population::new(10, 5, 0.1, 42).unwrap();
        assert_eq!(pop.len(), 10);
        assert_eq!(pop.generation(), 0);
        assert!(pop.members().iter().all(|e| e.len() == 5));
    }

    #[test]
    fn test_from_config() {
        let config = EvolveConfig::default().with_population_size(4).with_target(7);
        let pop = Population::from_config(&config).unwrap();
        assert_eq!(pop.len(), 4);
        assert_eq!(pop.target(), 7);
        assert_eq!(pop.expression_length(), 5);

        let bad = EvolveConfig::default().with_max_generations(0);
        assert!(Population::from_config(&bad).is_err());
    }

    #[test]
    fn test_randomize_sorts_valid_members() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = Population::new(15, 7, 0.1, 42).unwrap();
        pop.randomize(&mut rng);

        assert!(pop.members().iter().all(Expression::is_valid));
        assert_sorted(&pop);
        let min = scores(&pop).into_iter().min().unwrap();
        assert_eq!(pop.best_score(), min);
    }

    #[test]
    fn test_advance_keeps_size_and_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = Population::new(8, 5, 0.1, 42).unwrap();
        pop.randomize(&mut rng);

        for gen in 1..=20 {
            pop.advance(&mut rng);
            assert_eq!(pop.len(), 8);
            assert_eq!(pop.generation(), gen);
            assert!(pop.members().iter().all(|e| e.len() == 5));
            assert_sorted(&pop);
        }
    }

    #[test]
    fn test_advance_without_mutation_recombines_parents() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pop = Population::new(2, 3, 0.0, 42).unwrap();
        pop.randomize(&mut rng);
        let parents: Vec<Expression> = pop.members().to_vec();

        pop.advance(&mut rng);

        // Two parents give exactly two offspring, each a prefix of one parent
        // followed by the suffix of the other.
        assert_eq!(pop.len(), 2);
        for child in pop.members() {
            let from_split = (0..2).any(|s| {
                child == &parents[0].splice(&parents[1], s)
                    || child == &parents[1].splice(&parents[0], s)
            });
            assert!(from_split, "{child} is not a splice of the parents");
        }
    }

    #[test]
    fn test_single_member_population() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = Population::new(1, 5, 0.5, 42).unwrap();
        pop.randomize(&mut rng);
        let before = pop.best().clone();

        pop.advance(&mut rng);
        assert_eq!(pop.best(), &before);
        assert_eq!(pop.generation(), 1);
    }

    #[test]
    fn test_length_one_expressions() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = Population::new(6, 1, 0.3, 9).unwrap();
        pop.randomize(&mut rng);
        for _ in 0..200 {
            if pop.target_found() {
                break;
            }
            pop.advance(&mut rng);
        }
        assert!(pop.target_found());
        assert_eq!(pop.best().to_string(), "9");
    }

    #[test]
    fn test_target_found() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = Population::new(10, 5, 0.1, 42).unwrap();
        pop.randomize(&mut rng);
        let mut count = 0;
        while !pop.target_found() && count < 5000 {
            pop.advance(&mut rng);
            count += 1;
        }
        assert!(pop.target_found(), "no exact match after {count} generations");
        assert_eq!(pop.best().evaluate().value(), Some(42));
        assert_eq!(pop.generation(), count);
    }
}
