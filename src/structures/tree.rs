/*!
Ordered, rooted, syntax trees.

A tree is stored as a vector of [nodes](Node), and nodes refer to each other by [index](NodeIndex).
Each node is labelled with a [letter](Letter) or a [connector](Connector), and:
- A node labelled with a letter is a leaf.
- A node labelled with a unary connector owns exactly one child.
- A node labelled with a binary connector owns exactly two children, the first of which is the left operand.

Each node records its position among the children of its parent (the root has order 0) and the index of the [token](crate::structures::token) it was built from.
The shape of a tree does not change after construction.

# Values

Each connector node stores the value of its subformula under each valuation it has been evaluated on, keyed by the [key](ValuationKey) of the valuation.
The store belongs to the node, and so to the occurrence of the connector, rather than to the connector of some alphabet.
See [evaluate](crate::procedures::evaluate).

# Writing

A tree may be written in either notation, which gives both a projection back to the tokens of a formula and a translation between notations.

```rust
# use wff::formula::Formula;
# use wff::structures::alphabet::Notation;
let formula = Formula::polish("CpCqp").unwrap();
assert_eq!(formula.tree().write(Notation::Infix), "(p)->((q)->(p))");
```
*/

use std::collections::HashMap;

use super::{
    alphabet::{Alphabet, Notation, CLOSE, OPEN},
    connector::{Arity, Connector},
    letter::Letter,
    valuation::ValuationKey,
};

/// The index of a node in a tree.
pub type NodeIndex = usize;

/// The label of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Letter(Letter),
    Connector(Connector),
}

impl Label {
    /// The name of the label: the symbol of a letter, or the canonical name of a connector.
    pub fn name(&self) -> String {
        match self {
            Self::Letter(letter) => letter.to_string(),
            Self::Connector(connector) => connector.name().to_string(),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "{letter}"),
            Self::Connector(connector) => write!(f, "{connector}"),
        }
    }
}

/// A node of a tree.
#[derive(Clone, Debug)]
pub struct Node {
    label: Label,
    order: usize,
    token: usize,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
    values: HashMap<ValuationKey, bool>,
}

impl Node {
    pub fn label(&self) -> Label {
        self.label
    }

    /// The position of the node among the children of its parent.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The index of the token the node was built from.
    pub fn token(&self) -> usize {
        self.token
    }

    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// The children of the node, in order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The count of children the label of the node requires.
    pub fn required_children(&self) -> usize {
        match self.label {
            Label::Letter(_) => 0,
            Label::Connector(connector) => connector.arity().operand_count(),
        }
    }

    /// The stored value of the node under the valuation with the given key, if some value has been stored.
    pub fn value(&self, key: ValuationKey) -> Option<bool> {
        self.values.get(&key).copied()
    }

    pub(crate) fn store_value(&mut self, key: ValuationKey, value: bool) {
        self.values.insert(key, value);
    }
}

/// A syntax tree.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    token_nodes: HashMap<usize, NodeIndex>,
}

impl Tree {
    /// Adds a node to the tree, as the last child of `parent`, or as the root if there is no parent.
    ///
    /// The order of the node is the count of children of the parent before the addition.
    pub(crate) fn add_node(
        &mut self,
        label: Label,
        token: usize,
        parent: Option<NodeIndex>,
    ) -> NodeIndex {
        let index = self.nodes.len();

        let order = match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(parent_node) => {
                parent_node.children.push(index);
                parent_node.children.len() - 1
            }
            None => 0,
        };

        self.nodes.push(Node {
            label,
            order,
            token,
            parent,
            children: Vec::default(),
            values: HashMap::default(),
        });
        self.token_nodes.insert(token, index);

        index
    }

    /// The index of the root, if the tree has some node.
    pub fn root(&self) -> Option<NodeIndex> {
        self.nodes.iter().position(|node| node.parent.is_none())
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    /// All nodes, in order of addition.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The count of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node built from the token at the given index, if some node was.
    ///
    /// Parentheses are not nodes.
    pub fn node_for_token(&self, token: usize) -> Option<NodeIndex> {
        self.token_nodes.get(&token).copied()
    }

    /// The tree written in the given notation.
    pub fn write(&self, notation: Notation) -> String {
        let alphabet = Alphabet::of(notation);
        let mut out = String::default();
        if let Some(root) = self.root() {
            self.write_node(root, alphabet, &mut out);
        }
        out
    }

    fn write_node(&self, index: NodeIndex, alphabet: &Alphabet, out: &mut String) {
        let Some(node) = self.nodes.get(index) else {
            return;
        };

        match node.label {
            Label::Letter(letter) => out.push(letter.symbol()),

            Label::Connector(connector) => {
                let symbol = alphabet.by_name(connector.name()).symbol();

                match (alphabet.notation(), connector.arity()) {
                    (Notation::Polish, _) => {
                        out.push_str(symbol);
                        for child in &node.children {
                            self.write_node(*child, alphabet, out);
                        }
                    }

                    (Notation::Infix, Arity::Unary) => {
                        out.push_str(symbol);
                        for child in &node.children {
                            self.write_parenthesized(*child, alphabet, out);
                        }
                    }

                    (Notation::Infix, Arity::Binary) => {
                        for (position, child) in node.children.iter().enumerate() {
                            if position > 0 {
                                out.push_str(symbol);
                            }
                            self.write_parenthesized(*child, alphabet, out);
                        }
                    }
                }
            }
        }
    }

    fn write_parenthesized(&self, index: NodeIndex, alphabet: &Alphabet, out: &mut String) {
        out.push_str(OPEN);
        self.write_node(index, alphabet, out);
        out.push_str(CLOSE);
    }

    fn fmt_node(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        index: NodeIndex,
        prefix: &str,
    ) -> std::fmt::Result {
        let Some(node) = self.nodes.get(index) else {
            return Ok(());
        };

        let count = node.children.len();
        for (position, child) in node.children.iter().enumerate() {
            let Some(child_node) = self.nodes.get(*child) else {
                continue;
            };
            let (branch, extension) = match position + 1 == count {
                true => ("└── ", "    "),
                false => ("├── ", "│   "),
            };
            writeln!(f, "{prefix}{branch}{}", child_node.label)?;
            self.fmt_node(f, *child, &format!("{prefix}{extension}"))?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Tree {
    /// One node per line, children below and to the right of their parent, in order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(root) = self.root() {
            if let Some(node) = self.nodes.get(root) {
                writeln!(f, "{}", node.label)?;
                self.fmt_node(f, root, "")?;
            }
        }
        Ok(())
    }
}
