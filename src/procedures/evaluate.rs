/*!
The value of a tree, or of some node of a tree, under a valuation.

See [Tree::evaluate] and [Tree::evaluate_node].

# Overview

- The value of a leaf is the value of its letter under the valuation.
- The value of a connector node is the [truth function](crate::structures::connector::Name::apply) of the connector applied to the values of its children, in order.

After computing the value of a connector node the value is stored on the node, keyed by the [key](crate::structures::valuation::ValuationKey) of the valuation.
If a value is already stored for the key, the stored value is returned without examining the children.
As a key records the letters of a valuation as well as their values, a value stored under a valuation over other letters is never returned.

Stored values are what a [truth table](crate::table) reads when reporting the value of each subformula.
The cost of this is one entry per valuation for each connector node.

# Example

```rust
# use wff::formula::Formula;
# use wff::structures::valuation::Valuation;
let mut formula = Formula::infix("(p)->(!(q))").unwrap();
let letters = formula.letters();

let valuation = Valuation::from_index(&letters, 0b11);
assert_eq!(formula.tree_mut().evaluate(&valuation), Ok(false));

let root = formula.tree().root().unwrap();
assert_eq!(formula.tree().node(root).unwrap().value(valuation.key()), Some(false));
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        tree::{Label, NodeIndex, Tree},
        valuation::Valuation,
    },
    types::err::{self},
};

impl Tree {
    /// The value of the tree under `valuation`, storing the value of each connector node along the way.
    pub fn evaluate(&mut self, valuation: &Valuation) -> Result<bool, err::EvaluationError> {
        match self.root() {
            Some(root) => self.evaluate_node(root, valuation),
            None => Err(err::EvaluationError::UnknownNode(0)),
        }
    }

    /// The value of the subtree at `index` under `valuation`.
    ///
    /// For documentation see [procedures::evaluate](crate::procedures::evaluate).
    pub fn evaluate_node(
        &mut self,
        index: NodeIndex,
        valuation: &Valuation,
    ) -> Result<bool, err::EvaluationError> {
        let key = valuation.key();

        let Some(node) = self.node(index) else {
            return Err(err::EvaluationError::UnknownNode(index));
        };

        let connector = match node.label() {
            Label::Letter(letter) => {
                return valuation
                    .value_of(letter)
                    .ok_or(err::EvaluationError::MissingLetter(letter));
            }
            Label::Connector(connector) => connector,
        };

        if let Some(value) = node.value(key) {
            return Ok(value);
        }

        if node.children().len() != connector.arity().operand_count() {
            return Err(err::EvaluationError::Arity);
        }

        let children = node.children().to_vec();
        let mut operands = Vec::with_capacity(children.len());
        for child in children {
            operands.push(self.evaluate_node(child, valuation)?);
        }

        let value = connector
            .apply(&operands)
            .ok_or(err::EvaluationError::Arity)?;

        log::trace!(target: targets::EVALUATION, "{connector} at {index} under {key}: {value}");

        match self.node_mut(index) {
            Some(node) => node.store_value(key, value),
            None => return Err(err::EvaluationError::UnknownNode(index)),
        }

        Ok(value)
    }
}
