/*!
Trees from well formed infix token sequences, by recursive descent.

# Overview

At each step the tokens of some subformula are examined:
- A single letter is a leaf.
- A leading negation is followed by its parenthesized operand, and the operand is the only child.
- A leading opening parenthesis begins the left operand of a binary connector.
  The end of the operand is found by scanning forward with a count of open parentheses, starting from one, until the count returns to zero.
  The token after the closing parenthesis is the connector, and what remains (inside its enclosing parentheses) is the right operand.
  The operands are added as the first and second child of the connector.

Each node records the index of its token in the full sequence, and so the descent tracks the offset of each subsequence.

Tokens are expected to have been [checked](crate::procedures::well_formed), and a sequence of any other shape is an error rather than a partial tree.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        connector::Arity,
        token::{Token, Tokens},
        tree::{Label, NodeIndex, Tree},
    },
    types::err::{self},
};

/// The tree of a well formed infix token sequence.
pub fn build(tokens: &Tokens) -> Result<Tree, err::MalformedError> {
    let mut tree = Tree::default();
    build_subtree(&mut tree, tokens.as_slice(), 0, None)?;
    Ok(tree)
}

/// Adds the tree of `tokens` to `tree` below `parent`, returning the index of the root of the added subtree.
///
/// `offset` is the index of the first of `tokens` in the full sequence.
fn build_subtree(
    tree: &mut Tree,
    tokens: &[Token],
    offset: usize,
    parent: Option<NodeIndex>,
) -> Result<NodeIndex, err::MalformedError> {
    match tokens {
        [Token::Letter(letter)] => {
            log::trace!(target: targets::TREE, "Leaf {letter} at {offset}");
            Ok(tree.add_node(Label::Letter(*letter), offset, parent))
        }

        [Token::Connector(connector), Token::Open, operand @ .., Token::Close]
            if connector.arity() == Arity::Unary =>
        {
            log::trace!(target: targets::TREE, "Unary {connector} at {offset}");
            let node = tree.add_node(Label::Connector(*connector), offset, parent);
            build_subtree(tree, operand, offset + 2, Some(node))?;
            Ok(node)
        }

        [Token::Open, ..] => {
            let close = matching_close(tokens)?;

            let connector = match tokens.get(close + 1) {
                Some(Token::Connector(connector)) if connector.arity() == Arity::Binary => connector,
                _ => return Err(err::MalformedError::Structure),
            };

            let right = match tokens.get(close + 2..) {
                Some([Token::Open, right @ .., Token::Close]) => right,
                _ => return Err(err::MalformedError::Structure),
            };

            log::trace!(target: targets::TREE, "Binary {connector} at {}", offset + close + 1);
            let node = tree.add_node(Label::Connector(*connector), offset + close + 1, parent);
            build_subtree(tree, &tokens[1..close], offset + 1, Some(node))?;
            build_subtree(tree, right, offset + close + 3, Some(node))?;
            Ok(node)
        }

        _ => Err(err::MalformedError::Structure),
    }
}

/// The index of the parenthesis which closes the parenthesis at the start of `tokens`.
fn matching_close(tokens: &[Token]) -> Result<usize, err::MalformedError> {
    let mut depth = 1;
    for (index, token) in tokens.iter().enumerate().skip(1) {
        match token {
            Token::Open => depth += 1,
            Token::Close => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            return Ok(index);
        }
    }
    Err(err::MalformedError::Structure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        procedures::tokenize::tokenize,
        structures::{
            alphabet::{Alphabet, Notation},
            connector::Name,
        },
    };

    fn infix_tree(formula: &str) -> Result<Tree, err::MalformedError> {
        build(&tokenize(formula, Alphabet::of(Notation::Infix)).unwrap())
    }

    fn root_name(tree: &Tree) -> Option<Name> {
        match tree.node(tree.root()?)?.label() {
            Label::Connector(connector) => Some(connector.name()),
            Label::Letter(_) => None,
        }
    }

    #[test]
    fn leaf() {
        let tree = infix_tree("p").unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.node(0).unwrap().is_leaf());
    }

    #[test]
    fn principal_connector() {
        let tree = infix_tree("((p)&(q))->(!(r))").unwrap();
        assert_eq!(root_name(&tree), Some(Name::Implies));
        assert_eq!(tree.len(), 6);

        let root = tree.node(tree.root().unwrap()).unwrap();
        assert_eq!(root.token(), 9);
        let [left, right] = root.children() else {
            panic!("Binary root without two children");
        };
        assert_eq!(tree.node(*left).unwrap().label().name(), "and");
        assert_eq!(tree.node(*right).unwrap().label().name(), "negation");
        assert_eq!(tree.node(*right).unwrap().order(), 1);
    }

    #[test]
    fn token_offsets() {
        let tree = infix_tree("!((p)|(q))").unwrap();
        let tokens = tree.nodes().iter().map(|n| n.token()).collect::<Vec<_>>();
        // ! at 0, | at 5, p at 3, q at 7
        assert_eq!(tokens, vec![0, 5, 3, 7]);
    }

    #[test]
    fn unchecked_shapes() {
        assert_eq!(infix_tree("(p)->(q").err(), Some(err::MalformedError::Structure));
        assert_eq!(infix_tree("(p)").err(), Some(err::MalformedError::Structure));
        assert_eq!(infix_tree("pq").err(), Some(err::MalformedError::Structure));
    }
}
