//! Crate-wide error type.

use thiserror::Error;

/// Errors raised while constructing expressions, populations or configs.
///
/// Evaluation failures (malformed grammar, division by zero, overflow) are
/// not errors: they surface as [`Evaluation::Undefined`](crate::expr::Evaluation::Undefined).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expression length must be a positive odd number, got {0}")]
    InvalidLength(usize),

    #[error("digit symbol must be in 0..=9, got {0}")]
    InvalidDigit(u8),

    #[error("population size must be at least 1")]
    InvalidPopulationSize,

    #[error("cannot parse symbol: {0:?}")]
    ParseSymbol(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
