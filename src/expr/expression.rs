//! Candidate postfix expressions and their genetic operators.

use super::symbol::Symbol;
use crate::error::{Error, Result};
use log::trace;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Outcome of evaluating an [`Expression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The expression is well formed and evaluated to this value.
    Value(i64),
    /// The grammar check failed, a division by zero occurred, or an
    /// intermediate result overflowed.
    Undefined,
}

impl Evaluation {
    /// Integer stand-in for [`Evaluation::Undefined`].
    ///
    /// Genuine evaluation can never produce it since overflow is reported
    /// as undefined.
    pub const SENTINEL: i64 = i64::MAX;

    pub fn value(self) -> Option<i64> {
        match self {
            Evaluation::Value(v) => Some(v),
            Evaluation::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Evaluation::Value(_))
    }

    /// Collapses the result into a plain integer, mapping `Undefined` to
    /// [`SENTINEL`](Self::SENTINEL).
    pub fn as_sentinel(self) -> i64 {
        self.value().unwrap_or(Self::SENTINEL)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Value(v) => write!(f, "{v}"),
            Evaluation::Undefined => f.write_str("undefined"),
        }
    }
}

/// A fixed-length sequence of symbols read as a left-to-right postfix
/// expression.
///
/// The length is always odd and at least 1. Validity is not stored: the
/// genetic operators freely produce malformed offspring, which score as
/// badly as possible instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")
)]
pub struct Expression {
    symbols: Vec<Symbol>,
}

impl Expression {
    /// Creates an unpopulated expression of `len` zero digits.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] if `len` is zero or even.
    pub fn new(len: usize) -> Result<Self> {
        check_length(len)?;
        Ok(Self {
            symbols: vec![Symbol::default(); len],
        })
    }

    /// Wraps an explicit symbol sequence.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] if the sequence length is zero or even.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self> {
        check_length(symbols.len())?;
        Ok(Self { symbols })
    }

    /// Generates a random well-formed expression by rejection sampling.
    ///
    /// Every slot is redrawn uniformly from the 13-symbol alphabet until
    /// the whole sequence passes [`is_valid`](Self::is_valid). There is no
    /// cap on the number of attempts.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] if `len` is zero or even.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Result<Self> {
        let mut expr = Self::new(len)?;
        expr.fill_random(rng);
        Ok(expr)
    }

    /// Redraws every symbol until the sequence is well formed.
    pub(crate) fn fill_random<R: Rng>(&mut self, rng: &mut R) {
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            for slot in self.symbols.iter_mut() {
                *slot = Symbol::random(rng);
            }
            if self.is_valid() {
                break;
            }
        }
        trace!("random expression of length {} after {attempts} attempts", self.len());
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Checks the postfix balance rule.
    ///
    /// A digit pushes one value; an operator pops two and pushes one. The
    /// stack depth must never drop below zero and must end at exactly one.
    pub fn is_valid(&self) -> bool {
        let mut depth: usize = 0;
        for sym in &self.symbols {
            if sym.is_operator() {
                if depth < 2 {
                    return false;
                }
                depth -= 1;
            } else {
                depth += 1;
            }
        }
        depth == 1
    }

    /// Evaluates the expression with a value stack.
    ///
    /// The earlier-pushed operand is the left one. Malformed expressions,
    /// a zero divisor, or `i64` overflow yield [`Evaluation::Undefined`].
    pub fn evaluate(&self) -> Evaluation {
        if !self.is_valid() {
            return Evaluation::Undefined;
        }

        let mut stack: Vec<i64> = Vec::with_capacity(self.len() / 2 + 1);
        for sym in &self.symbols {
            match *sym {
                Symbol::Digit(d) => stack.push(i64::from(d)),
                Symbol::Op(op) => {
                    // Depth >= 2 is guaranteed by the validity check.
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return Evaluation::Undefined;
                    };
                    match op.apply(left, right) {
                        Some(v) => stack.push(v),
                        None => return Evaluation::Undefined,
                    }
                }
            }
        }

        match stack.as_slice() {
            [v] => Evaluation::Value(*v),
            _ => Evaluation::Undefined,
        }
    }

    /// Distance between the evaluated value and `target`.
    ///
    /// Undefined evaluations score `u64::MAX`, worse than any defined value.
    pub fn score(&self, target: i64) -> u64 {
        match self.evaluate() {
            Evaluation::Value(v) => v.abs_diff(target),
            Evaluation::Undefined => u64::MAX,
        }
    }

    /// Orders two expressions by ascending score against `target`.
    pub fn cmp_by_score(&self, other: &Self, target: i64) -> Ordering {
        self.score(target).cmp(&other.score(target))
    }

    /// Returns a mutated copy.
    ///
    /// Each position is independently replaced by a uniformly drawn symbol
    /// with probability `rate`. The result is not re-validated.
    pub fn mutate<R: Rng>(&self, rate: f64, rng: &mut R) -> Self {
        let symbols = self
            .symbols
            .iter()
            .map(|&sym| {
                if rng.random::<f64>() < rate {
                    Symbol::random(rng)
                } else {
                    sym
                }
            })
            .collect();
        Self { symbols }
    }

    /// One-point crossover.
    ///
    /// Positions `0..=split` come from `self`, the remainder from `donor`.
    /// The result is not re-validated.
    ///
    /// # Panics
    /// Panics if the lengths differ or `split >= len`.
    pub fn splice(&self, donor: &Self, split: usize) -> Self {
        let n = self.len();
        assert_eq!(n, donor.len(), "spliced expressions must have equal length");
        assert!(split < n, "split index {split} out of range for length {n}");

        let mut symbols = Vec::with_capacity(n);
        symbols.extend_from_slice(&self.symbols[..=split]);
        symbols.extend_from_slice(&donor.symbols[split + 1..]);
        Self { symbols }
    }
}

fn check_length(len: usize) -> Result<()> {
    if len == 0 || len % 2 == 0 {
        return Err(Error::InvalidLength(len));
    }
    Ok(())
}

impl TryFrom<Vec<Symbol>> for Expression {
    type Error = Error;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self> {
        Self::from_symbols(symbols)
    }
}

impl From<Expression> for Vec<Symbol> {
    fn from(expr: Expression) -> Self {
        expr.symbols
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sym) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{sym}")?;
        }
        Ok(())
    }
}

impl FromStr for Expression {
    type Err = Error;

    /// Parses the rendered form, e.g. `"6 7 +"`.
    fn from_str(s: &str) -> Result<Self> {
        let symbols = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Symbol>>>()?;
        Self::from_symbols(symbols)
    }
}
