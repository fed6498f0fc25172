//! A library for parsing propositional formulas written in infix or Polish notation, and for building their truth tables.
//!
//! wff reads a formula as a string, checks whether the string is a well formed formula, builds a syntax tree for the formula, and evaluates the tree under every valuation of its letters.
//!
//! # Orientation
//!
//! The library is designed around a [formula](crate::formula::Formula), which holds the string it was parsed from, its tokens, and its syntax tree.
//!
//! Formulas are written over an [alphabet](crate::structures::alphabet) of letters `a` … `z`, parentheses, and five connectors:
//!
//! | Connector   | Infix | Polish | Arity  |
//! |-------------|-------|--------|--------|
//! | implies     | `->`  | `C`    | binary |
//! | iff         | `<->` | `E`    | binary |
//! | and         | `&`   | `K`    | binary |
//! | or          | `\|`  | `A`    | binary |
//! | negation    | `!`   | `N`    | unary  |
//!
//! Infix formulas are fully parenthesized: every compound subformula is written within parentheses, as in `(p)->(!(q))`.
//! Polish formulas have no parentheses, as in `CpNq`.
//!
//! Parsing is factored into a handful of [procedures]:
//! - [Tokenization](crate::procedures::tokenize).
//! - A [well formed check](crate::procedures::well_formed), by reduction for infix notation and by counting for Polish notation.
//! - [Building](crate::procedures::build) a tree.
//!
//! And the value of a formula under a valuation is given by [evaluation](crate::procedures::evaluate) of its tree.
//!
//! Useful starting points, then, may be:
//! - [Formula](crate::formula::Formula), to parse a formula.
//! - [TruthTable](crate::table::TruthTable), to examine the values of a formula and its subformulas.
//! - The [structures], to familiarise yourself with tokens, trees, and valuations.
//! - The [configuration](crate::config) to see what may be configured.
//!
//! # Examples
//!
//! + The truth table of the law of excluded middle.
//!
//! ```rust
//! # use wff::formula::Formula;
//! # use wff::table::TruthTable;
//! let mut formula = Formula::infix("(p)|(!(p))").unwrap();
//! let table = TruthTable::new(&mut formula).unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert!(table.is_tautology());
//! ```
//!
//! + Translate a formula from Polish to infix notation.
//!
//! ```rust
//! # use wff::formula::Formula;
//! # use wff::structures::alphabet::Notation;
//! let formula = Formula::polish("CKpqNr").unwrap();
//! assert_eq!(formula.write(Notation::Infix), "((p)&(q))->(!(r))");
//! ```
//!
//! + Errors are returned by the stage at which parsing failed.
//!
//! ```rust
//! # use wff::formula::Formula;
//! # use wff::types::err::{self};
//! match Formula::infix("(p)#(q)") {
//!     Err(err::ErrorKind::Lexical(err::LexicalError::UnknownSymbol { position, .. })) => {
//!         assert_eq!(position, 3)
//!     }
//!     _ => panic!(),
//! }
//!
//! assert_eq!(
//!     Formula::polish("KpN").err(),
//!     Some(err::ErrorKind::Malformed(err::MalformedError::Unbalanced))
//! );
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//!
//! For example, when the binary is built with the `logging` feature:
//! - The value of each subformula under each valuation can be found with `RUST_LOG=evaluation=trace …` or,
//! - The steps of the infix check can be found with `RUST_LOG=well_formed=trace …`

#![allow(clippy::single_match)]

pub mod procedures;

pub mod config;
pub mod formula;
pub mod structures;
pub mod table;
pub mod types;

pub mod misc;
