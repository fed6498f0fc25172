/*!
A parsed formula --- the string, its tokens, and its tree.

Parsing is the composition of [procedures](crate::procedures):
- The string is [tokenized](crate::procedures::tokenize) against the [alphabet](Alphabet) of the notation.
- The tokens are [checked](crate::procedures::well_formed) to be a well formed formula.
- A [tree](crate::procedures::build) is built from the tokens.

Any failure is returned as an error, and no part of the formula is kept.

# Example

```rust
# use wff::formula::Formula;
# use wff::structures::alphabet::Notation;
# use wff::types::err::{ErrorKind, MalformedError};
let formula = Formula::infix("(p)->((q)->(p))").unwrap();

assert_eq!(formula.len(), 13);
assert_eq!(formula.letters().len(), 2);
assert_eq!(formula.tree().write(Notation::Polish), "CpCqp");

assert_eq!(
    Formula::infix("(p)->(q").err(),
    Some(ErrorKind::Malformed(MalformedError::Irreducible))
);
```
*/

use crate::{
    misc::log::targets::{self},
    procedures::{build, tokenize::tokenize, well_formed},
    structures::{
        alphabet::{Alphabet, Notation},
        letter::Letter,
        token::Tokens,
        tree::Tree,
    },
    types::err::{self},
};

/// A well formed formula.
#[derive(Clone, Debug)]
pub struct Formula {
    source: String,
    notation: Notation,
    tokens: Tokens,
    tree: Tree,
}

impl Formula {
    /// The formula written as `source` in the given notation.
    pub fn parse(source: &str, notation: Notation) -> Result<Self, err::ErrorKind> {
        let alphabet = Alphabet::of(notation);

        let tokens = tokenize(source, alphabet)?;
        well_formed::check(&tokens, alphabet)?;
        let tree = build::build(&tokens, notation)?;

        log::debug!(target: targets::TREE, "Parsed {notation} formula {tokens}");

        Ok(Formula {
            source: source.to_string(),
            notation,
            tokens,
            tree,
        })
    }

    /// The formula written as `source` in [infix](Notation::Infix) notation.
    pub fn infix(source: &str) -> Result<Self, err::ErrorKind> {
        Self::parse(source, Notation::Infix)
    }

    /// The formula written as `source` in [Polish](Notation::Polish) notation.
    pub fn polish(source: &str) -> Result<Self, err::ErrorKind> {
        Self::parse(source, Notation::Polish)
    }

    /// The string the formula was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// The tokens of the formula, in order.
    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    /// The count of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false, as a well formed formula has some token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The distinct letters of the formula, in order.
    pub fn letters(&self) -> Vec<Letter> {
        self.tokens.letters()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Mutable access to the tree, for [evaluation](crate::procedures::evaluate).
    ///
    /// The shape of the tree cannot be changed, only the values stored on its nodes.
    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// The formula, written in the given notation.
    pub fn write(&self, notation: Notation) -> String {
        self.tree.write(notation)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_by_stage() {
        assert!(matches!(
            Formula::infix("(p)?(q)"),
            Err(err::ErrorKind::Lexical(_))
        ));
        assert_eq!(
            Formula::polish("CEN").err(),
            Some(err::ErrorKind::Malformed(err::MalformedError::Unbalanced))
        );
        assert_eq!(
            Formula::infix("").err(),
            Some(err::ErrorKind::Malformed(err::MalformedError::Empty))
        );
        assert_eq!(
            Formula::polish(" ").err(),
            Some(err::ErrorKind::Malformed(err::MalformedError::Empty))
        );
    }

    #[test]
    fn single_letter() {
        for notation in [Notation::Infix, Notation::Polish] {
            let formula = Formula::parse("p", notation).unwrap();
            assert_eq!(formula.len(), 1);
            assert_eq!(formula.tree().len(), 1);
        }
    }

    #[test]
    fn display_strips_whitespace() {
        let formula = Formula::infix("( p ) & ( q )").unwrap();
        assert_eq!(formula.to_string(), "(p)&(q)");
        assert_eq!(formula.source(), "( p ) & ( q )");
    }
}
