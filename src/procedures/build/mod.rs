//! Trees from well formed token sequences.
//!
//! - [Infix](infix) trees are built by recursive descent, scanning for matching parentheses.
//! - [Polish](polish) trees are built in a single pass with a stack of pending parents.

pub mod infix;
pub mod polish;

use crate::{
    misc::log::targets::{self},
    structures::{
        alphabet::Notation,
        token::Tokens,
        tree::Tree,
    },
    types::err::{self},
};

/// The tree of a well formed token sequence in the given notation.
pub fn build(tokens: &Tokens, notation: Notation) -> Result<Tree, err::MalformedError> {
    let tree = match notation {
        Notation::Infix => infix::build(tokens)?,
        Notation::Polish => polish::build(tokens)?,
    };
    log::debug!(target: targets::TREE, "Built {} nodes from {} tokens", tree.len(), tokens.len());
    Ok(tree)
}
