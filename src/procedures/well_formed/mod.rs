//! Checks on whether a token sequence is a well formed formula.
//!
//! Each notation has its own algorithm:
//! - [Infix](infix) formulas are checked by reducing an abstraction of the tokens to a single formula.
//! - [Polish](polish) formulas are checked by counting the operands each connector receives.

pub mod infix;
pub mod polish;

use crate::{
    misc::log::targets::{self},
    structures::{
        alphabet::{Alphabet, Notation},
        token::Tokens,
    },
    types::err::{self},
};

/// Ok if the tokens are a well formed formula in the notation of `alphabet`.
pub fn check(tokens: &Tokens, alphabet: &Alphabet) -> Result<(), err::MalformedError> {
    if tokens.is_empty() {
        return Err(err::MalformedError::Empty);
    }

    let result = match alphabet.notation() {
        Notation::Infix => infix::check(tokens, alphabet),
        Notation::Polish => polish::check(tokens),
    };

    log::debug!(target: targets::WELL_FORMED, "{} {tokens}: {result:?}", alphabet.notation());
    result
}
