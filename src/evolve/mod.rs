//! Generational search over expressions.
//!
//! A [`Population`] of `n` expressions is bred by crossing every pair at a
//! shared random split point, mutating both offspring, and keeping the best
//! `n` of the `n * (n - 1)` candidates (truncation selection).
//!
//! # Key Types
//!
//! - [`EvolveConfig`]: search parameters (population size, expression
//!   length, mutation rate, target, generation cap, seed)
//! - [`Population`]: the ranked set of candidates and the breeding step
//! - [`EvolveRunner`]: runs generations until an exact match or the cap
//! - [`EvolveResult`]: best expression found plus run statistics

mod config;
mod population;
mod runner;

pub use config::EvolveConfig;
pub use population::Population;
pub use runner::{EvolveResult, EvolveRunner};
