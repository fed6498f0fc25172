//! The procedures which take a string to a syntax tree, and a syntax tree to a value.
//!
//! In order of application:
//! - [tokenize], from a string to a sequence of tokens.
//! - [well_formed], a check on whether a sequence of tokens is a formula.
//! - [build], from a checked sequence of tokens to a tree.
//! - [evaluate], from a tree and a valuation to a value.
//!
//! For the most part these are accessed via a [Formula](crate::formula::Formula), and primarily placed here for documentation.

pub mod build;
pub mod evaluate;
pub mod tokenize;
pub mod well_formed;
