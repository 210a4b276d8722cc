//! Expression alphabet: digits and binary operators.

use crate::error::{Error, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of symbols drawn by [`Symbol::random`]: digits 1–9 plus four operators.
pub const ALPHABET_SIZE: u8 = 13;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators, in alphabet order.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// The glyph used when rendering an expression.
    pub fn glyph(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Computes `left ∘ right`.
    ///
    /// Division truncates toward zero. Returns `None` on a zero divisor or
    /// when the result does not fit in an `i64`.
    pub fn apply(self, left: i64, right: i64) -> Option<i64> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Sub => left.checked_sub(right),
            Operator::Mul => left.checked_mul(right),
            Operator::Div => left.checked_div(right),
        }
    }
}

/// One token of a postfix expression.
///
/// `Digit` holds a value in `0..=9`. Zero is never drawn at random; it is
/// the placeholder an unpopulated [`Expression`](super::Expression) is
/// filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    Digit(u8),
    Op(Operator),
}

impl Default for Symbol {
    fn default() -> Self {
        Symbol::Digit(0)
    }
}

impl Symbol {
    /// Creates a digit symbol, rejecting values above 9.
    pub fn digit(value: u8) -> Result<Self> {
        if value > 9 {
            return Err(Error::InvalidDigit(value));
        }
        Ok(Symbol::Digit(value))
    }

    /// Draws one of the 13 alphabet symbols uniformly.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.random_range(1..=ALPHABET_SIZE) {
            d @ 1..=9 => Symbol::Digit(d),
            k => Symbol::Op(Operator::ALL[usize::from(k - 10)]),
        }
    }

    pub fn is_operator(self) -> bool {
        matches!(self, Symbol::Op(_))
    }
}

impl From<Operator> for Symbol {
    fn from(op: Operator) -> Self {
        Symbol::Op(op)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Digit(d) => write!(f, "{d}"),
            Symbol::Op(op) => write!(f, "{}", op.glyph()),
        }
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Symbol::Op(Operator::Add)),
            "-" => Ok(Symbol::Op(Operator::Sub)),
            "*" => Ok(Symbol::Op(Operator::Mul)),
            "/" => Ok(Symbol::Op(Operator::Div)),
            _ => match s.parse::<u8>() {
                Ok(d) if d <= 9 && s.len() == 1 => Ok(Symbol::Digit(d)),
                _ => Err(Error::ParseSymbol(s.to_string())),
            },
        }
    }
}
