//! Evolutionary search for arithmetic expressions.
//!
//! Candidates are left-to-right postfix (reverse-Polish) expressions over
//! the digits 1–9 and the operators `+ - * /`. A fixed-size population is
//! bred generation after generation until one member evaluates exactly to a
//! target number.
//!
//! - [`expr`]: the [`Expression`](expr::Expression) representation with its
//!   grammar check, evaluator, scoring, mutation and splice crossover.
//! - [`evolve`]: the [`Population`](evolve::Population), its configuration
//!   and the [`EvolveRunner`](evolve::EvolveRunner) driving loop.
//!
//! # Example
//!
//! ```
//! use arith_evolve::evolve::{EvolveConfig, EvolveRunner};
//!
//! let config = EvolveConfig::quick().with_target(12).with_seed(7);
//! let result = EvolveRunner::run(&config).unwrap();
//! assert!(result.generations <= config.max_generations);
//! if result.found {
//!     assert_eq!(result.best_score, 0);
//! }
//! ```

pub mod error;
pub mod evolve;
pub mod expr;

pub use error::{Error, Result};
