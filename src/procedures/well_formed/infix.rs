/*!
Well formed infix formulas, by reduction.

# Overview

The tokens are abstracted to a string in which:
- Every letter is `0`.
- Every binary connector is the [wildcard](crate::structures::alphabet::BINARY_WILDCARD).
- Negations and parentheses are unchanged.

Two rules are then applied, in turn, until neither applies:
1. Each `!(0)` is replaced by `0`.
2. Each `(0)@(0)` is replaced by `0`.

The tokens are a well formed formula exactly when the string reduces to `0`.

The rules mirror the formation rules of formulas, where a letter is a formula and `!(A)` and `(A)∘(B)` are the only ways to build a compound formula from formulas.
So, in particular, each compound subformula must be enclosed in parentheses.

Each rule replaces every non-overlapping occurrence, from left to right, and both rules are attempted on each pass.
Other orders of simplification are not guaranteed to agree.

```rust
# use wff::procedures::{tokenize::tokenize, well_formed::infix::reduce};
# use wff::structures::alphabet::{Alphabet, Notation};
let alphabet = Alphabet::of(Notation::Infix);

let tokens = tokenize("(p)->(!(q))", alphabet).unwrap();
assert_eq!(reduce(&tokens, alphabet), "0");

let tokens = tokenize("(p)->(!q)", alphabet).unwrap();
assert_eq!(reduce(&tokens, alphabet), "(0)@(!0)");
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        alphabet::{Alphabet, CLOSE, OPEN},
        connector::Name,
        token::{Token, Tokens},
    },
    types::err::{self},
};

/// The placeholder for a formula.
const FORMULA: &str = "0";

/// The abstraction of `tokens`, prior to any reduction.
pub fn abstraction(tokens: &Tokens, alphabet: &Alphabet) -> String {
    let mut abstracted = String::with_capacity(tokens.len());
    for token in tokens.iter() {
        match token {
            Token::Letter(_) => abstracted.push_str(FORMULA),
            Token::Connector(c) if c.is_binary() => abstracted.push(alphabet.binary_wildcard()),
            Token::Connector(c) => abstracted.push_str(c.symbol()),
            Token::Open => abstracted.push_str(OPEN),
            Token::Close => abstracted.push_str(CLOSE),
        }
    }
    abstracted
}

/// The result of applying the reductions to the abstraction of `tokens` until neither applies.
pub fn reduce(tokens: &Tokens, alphabet: &Alphabet) -> String {
    let negation = format!(
        "{}{OPEN}{FORMULA}{CLOSE}",
        alphabet.by_name(Name::Negation).symbol()
    );
    let binary = format!(
        "{OPEN}{FORMULA}{CLOSE}{}{OPEN}{FORMULA}{CLOSE}",
        alphabet.binary_wildcard()
    );

    let mut abstracted = abstraction(tokens, alphabet);

    loop {
        let negations_reduced = reduce_by(&mut abstracted, &negation);
        let binaries_reduced = reduce_by(&mut abstracted, &binary);

        log::trace!(target: targets::WELL_FORMED, "Reduced to {abstracted}");

        if abstracted == FORMULA || !(negations_reduced || binaries_reduced) {
            return abstracted;
        }
    }
}

/// Replaces each occurrence of `pattern` in `abstracted` with a formula, returning whether the string was shortened.
fn reduce_by(abstracted: &mut String, pattern: &str) -> bool {
    let reduced = abstracted.replace(pattern, FORMULA);
    match reduced.len() < abstracted.len() {
        true => {
            *abstracted = reduced;
            true
        }
        false => false,
    }
}

/// Ok if the tokens are a well formed infix formula.
pub fn check(tokens: &Tokens, alphabet: &Alphabet) -> Result<(), err::MalformedError> {
    match reduce(tokens, alphabet).as_str() {
        FORMULA => Ok(()),
        remainder => {
            log::warn!(target: targets::WELL_FORMED, "Irreducible infix: {remainder}");
            Err(err::MalformedError::Irreducible)
        }
    }
}
