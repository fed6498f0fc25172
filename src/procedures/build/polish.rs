/*!
Trees from well formed Polish token sequences, in a single pass.

# Overview

A stack of pending parents is kept, of connector nodes which have not yet received all their operands.

For each token, in order:
- The parent of the token is the top of the stack, and there is no parent only for the first token.
- If the token is the last operand of the parent, the parent is complete and is removed from the stack.
- The token is added to the tree as the next child of the parent.
- If the token is a connector, it is pushed to the stack as a pending parent.

As connectors precede their operands there is no need to look ahead, unlike the [infix](super::infix) descent which scans for matching parentheses.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        token::{Token, Tokens},
        tree::{Label, NodeIndex, Tree},
    },
    types::err::{self},
};

/// The tree of a well formed Polish token sequence.
pub fn build(tokens: &Tokens) -> Result<Tree, err::MalformedError> {
    let mut tree = Tree::default();
    let mut pending: Vec<NodeIndex> = Vec::default();

    for (index, token) in tokens.iter().enumerate() {
        let parent = match pending.last() {
            Some(&top) => {
                let Some(parent_node) = tree.node(top) else {
                    return Err(err::MalformedError::Structure);
                };
                if parent_node.children().len() + 1 == parent_node.required_children() {
                    pending.pop();
                }
                Some(top)
            }

            None if index > 0 => return Err(err::MalformedError::NoPendingOperator(index)),

            None => None,
        };

        let label = match token {
            Token::Letter(letter) => Label::Letter(*letter),
            Token::Connector(connector) => Label::Connector(*connector),
            Token::Open | Token::Close => return Err(err::MalformedError::Parenthesis(index)),
        };

        let node = tree.add_node(label, index, parent);
        log::trace!(target: targets::TREE, "Node {label} at {index} below {parent:?}");

        if let Label::Connector(_) = label {
            pending.push(node);
        }
    }

    match pending.is_empty() {
        true => Ok(tree),
        false => Err(err::MalformedError::Unbalanced),
    }
}
