//! Postfix arithmetic expressions.
//!
//! An [`Expression`] is an odd-length sequence of [`Symbol`]s read in
//! left-to-right reverse-Polish notation: `6 7 +` is 13, `3 4 5 * -` is -17.
//! Expressions know how to check their own grammar, evaluate, score
//! against a target, and produce offspring via [`Expression::mutate`] and
//! [`Expression::splice`].
//!
//! Evaluation never fails loudly. Malformed sequences, division by zero and
//! arithmetic overflow all produce [`Evaluation::Undefined`], which scores
//! worse than any defined result.

mod expression;
mod symbol;

pub use expression::{Evaluation, Expression};
pub use symbol::{Operator, Symbol, ALPHABET_SIZE};
