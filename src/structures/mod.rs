//! Key structures, such as letters, connectors, and trees.
//!
//! # Formulas
//!
//! A formula is a string over some [alphabet], and is well formed if it is built by the following rules:
//! - Any [letter] is a formula.
//! - If A is a formula then the negation of A is a formula.
//! - If A and B are formulas then the connection of A and B by any binary [connector] is a formula.
//!
//! How negations and connections are written depends on the [notation](alphabet::Notation).
//! In infix notation every compound subformula is enclosed in parentheses, as in `!(A)` and `(A)&(B)`.
//! In Polish notation connectors precede their operands, as in `NA` and `KAB`, and there are no parentheses.
//!
//! A well formed formula is represented by a [token] sequence and a [tree], see [Formula](crate::formula::Formula).
//!
//! ## (Boolean) values
//!
//! The values of formulas are [true] and [false], and a [valuation] assigns one of these to each letter of a formula.

pub mod alphabet;
pub mod connector;
pub mod letter;
pub mod token;
pub mod tree;
pub mod valuation;
