/*!
Well formed Polish formulas, by counting operands.

# Overview

Each token has a count of operands it still requires: zero for a letter, one for a unary connector, and two for a binary connector.
Tokens are examined from left to right, while keeping a stack of the indicies of connectors which still require some operand.

On examining any token other than the first:
- The count of the connector at the top of the stack is decremented, as the token begins an operand of that connector.
- If that count is now zero, the connector is complete and is removed from the stack.

Then, if the token is a connector its index is pushed to the stack.

The tokens are a well formed formula exactly when all counts sum to zero after examining every token.
If the stack is empty when some operand is examined, there is no connector for the operand and the tokens are not a formula.

```rust
# use wff::procedures::{tokenize::tokenize, well_formed::polish::check};
# use wff::structures::alphabet::{Alphabet, Notation};
# use wff::types::err::MalformedError;
let alphabet = Alphabet::of(Notation::Polish);

assert!(check(&tokenize("CpCqp", alphabet).unwrap()).is_ok());
assert_eq!(check(&tokenize("CEN", alphabet).unwrap()), Err(MalformedError::Unbalanced));
assert_eq!(check(&tokenize("Kpqr", alphabet).unwrap()), Err(MalformedError::NoPendingOperator(3)));
```
*/

use crate::{
    misc::log::targets::{self},
    structures::token::{Token, Tokens},
    types::err::{self},
};

/// Ok if the tokens are a well formed Polish formula.
pub fn check(tokens: &Tokens) -> Result<(), err::MalformedError> {
    let mut counts: Vec<usize> = Vec::with_capacity(tokens.len());
    let mut pending: Vec<usize> = Vec::default();

    for (index, token) in tokens.iter().enumerate() {
        let Some(count) = token.operand_count() else {
            log::warn!(target: targets::WELL_FORMED, "Parenthesis at {index}");
            return Err(err::MalformedError::Parenthesis(index));
        };
        counts.push(count);

        if index > 0 {
            let Some(&top) = pending.last() else {
                log::warn!(target: targets::WELL_FORMED, "No operator for {token} at {index}");
                return Err(err::MalformedError::NoPendingOperator(index));
            };

            counts[top] -= 1;
            if counts[top] == 0 {
                pending.pop();
            }
        }

        if let Token::Connector(_) = token {
            pending.push(index);
        }
    }

    match counts.iter().sum::<usize>() {
        0 => Ok(()),
        outstanding => {
            log::warn!(target: targets::WELL_FORMED, "{outstanding} operands outstanding");
            Err(err::MalformedError::Unbalanced)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        procedures::tokenize::tokenize,
        structures::alphabet::{Alphabet, Notation},
    };

    fn polish_check(formula: &str) -> Result<(), err::MalformedError> {
        check(&tokenize(formula, Alphabet::of(Notation::Polish)).unwrap())
    }

    #[test]
    fn well_formed() {
        for formula in ["p", "Np", "NNNr", "CpCqp", "CENApKNrAsNpsKNpq"] {
            assert_eq!(polish_check(formula), Ok(()), "{formula}");
        }
    }

    #[test]
    fn incomplete() {
        assert_eq!(polish_check("CEN"), Err(err::MalformedError::Unbalanced));
        assert_eq!(polish_check("Kp"), Err(err::MalformedError::Unbalanced));
        assert_eq!(polish_check("N"), Err(err::MalformedError::Unbalanced));
    }

    #[test]
    fn left_over_operands() {
        assert_eq!(polish_check("pq"), Err(err::MalformedError::NoPendingOperator(1)));
        assert_eq!(polish_check("Npq"), Err(err::MalformedError::NoPendingOperator(2)));
    }

    #[test]
    fn parentheses() {
        assert_eq!(polish_check("K(p)q"), Err(err::MalformedError::Parenthesis(1)));
    }

    #[test]
    fn empty() {
        assert_eq!(polish_check(""), Ok(()));
    }
}
