/*!
Connectors, aka. logical operators.

A connector is a notation specific symbol together with a notation independent [canonical name](Name) and an [arity](Arity).
The canonical name fixes the truth function of the connector, and the arity fixes how many operands a node of the connector owns in a [tree](crate::structures::tree).

| Name     | Arity  | Infix | Polish |
|----------|--------|-------|--------|
| negation | unary  | `!`   | `N`    |
| and      | binary | `&`   | `K`    |
| or       | binary | `\|`  | `A`    |
| implies  | binary | `->`  | `C`    |
| iff      | binary | `<->` | `E`    |

Connectors are [Copy], and so each occurrence of a connector in a formula is a fresh value.
Values computed for an occurrence are stored on the tree node of the occurrence, rather than on the connector.

```rust
# use wff::structures::connector::{Connector, Name};
let implies = Connector::new("->", Name::Implies);

assert_eq!(implies.apply(&[true, false]), Some(false));
assert_eq!(implies.apply(&[false, false]), Some(true));
assert_eq!(implies.apply(&[true]), None);
```
*/

/// The arity of a connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    /// The count of operands required by the arity.
    pub fn operand_count(&self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// The canonical, notation independent, name of a connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Name {
    Implies,
    Iff,
    And,
    Or,
    Negation,
}

impl Name {
    /// The arity fixed by the name.
    pub fn arity(&self) -> Arity {
        match self {
            Self::Negation => Arity::Unary,
            Self::Implies | Self::Iff | Self::And | Self::Or => Arity::Binary,
        }
    }

    /// The truth function of the name, applied to the values of some operands.
    ///
    /// None, if the count of operands does not match the arity.
    pub fn apply(&self, operands: &[bool]) -> Option<bool> {
        match (self, operands) {
            (Self::Negation, [a]) => Some(!a),

            (Self::And, [a, b]) => Some(*a && *b),

            (Self::Or, [a, b]) => Some(!(!a && !b)),

            (Self::Implies, [a, b]) => Some(!(*a && !b)),

            (Self::Iff, [a, b]) => Some(a == b),

            _ => None,
        }
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Implies => write!(f, "implies"),
            Self::Iff => write!(f, "iff"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Negation => write!(f, "negation"),
        }
    }
}

/// A connector, as written in some notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Connector {
    symbol: &'static str,
    name: Name,
}

impl Connector {
    /// A connector with the given symbol and name.
    pub const fn new(symbol: &'static str, name: Name) -> Self {
        Connector { symbol, name }
    }

    /// The symbol of the connector.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The canonical name of the connector.
    pub fn name(&self) -> Name {
        self.name
    }

    pub fn arity(&self) -> Arity {
        self.name.arity()
    }

    pub fn is_binary(&self) -> bool {
        self.arity() == Arity::Binary
    }

    /// For documentation see [Name::apply].
    pub fn apply(&self, operands: &[bool]) -> Option<bool> {
        self.name.apply(operands)
    }
}

impl std::fmt::Display for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: [[bool; 2]; 4] = [[true, true], [true, false], [false, true], [false, false]];

    fn column(name: Name) -> Vec<bool> {
        ROWS.iter().filter_map(|row| name.apply(row)).collect()
    }

    #[test]
    fn binary_truth_functions() {
        assert_eq!(column(Name::And), vec![true, false, false, false]);
        assert_eq!(column(Name::Or), vec![true, true, true, false]);
        assert_eq!(column(Name::Implies), vec![true, false, true, true]);
        assert_eq!(column(Name::Iff), vec![true, false, false, true]);
    }

    #[test]
    fn negation() {
        assert_eq!(Name::Negation.apply(&[true]), Some(false));
        assert_eq!(Name::Negation.apply(&[false]), Some(true));
        assert_eq!(Name::Negation.apply(&[true, true]), None);
    }

    #[test]
    fn arity_mismatch() {
        assert_eq!(Name::And.apply(&[true]), None);
        assert_eq!(Name::Iff.apply(&[]), None);
    }
}
