/*!
The vocabulary of a notation.

An alphabet is a set of [connectors](Connector), indexed by symbol and by canonical name, a set of interned [letters](Letter), and a pair of parentheses.
Two alphabets exist, one for each [Notation], and these differ only in the symbols of their connectors.

Alphabets are process-wide, constructed on first use and never mutated.

```rust
# use wff::structures::alphabet::{Alphabet, Notation};
# use wff::structures::connector::Name;
let infix = Alphabet::of(Notation::Infix);

assert!(infix.contains("<->"));
assert!(!infix.contains("<-"));
assert_eq!(infix.connector("->").map(|c| c.name()), Some(Name::Implies));
assert_eq!(infix.by_name(Name::Iff).symbol(), "<->");

let polish = Alphabet::of(Notation::Polish);
assert_eq!(polish.by_name(Name::Iff).symbol(), "E");
```
*/

use std::{collections::HashMap, sync::OnceLock};

use super::{
    connector::{Connector, Name},
    letter::Letter,
};

/// A notation in which formulas may be written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Notation {
    /// Fully parenthesized infix notation, e.g. `(p)->((q)->(p))`.
    Infix,

    /// Polish (prefix) notation, e.g. `CpCqp`.
    Polish,
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Infix => write!(f, "infix"),
            Self::Polish => write!(f, "polish"),
        }
    }
}

/// The opening parenthesis, shared by both notations.
pub const OPEN: &str = "(";

/// The closing parenthesis, shared by both notations.
pub const CLOSE: &str = ")";

/// The symbol which stands for any binary connector during the [infix check](crate::procedures::well_formed::infix).
pub const BINARY_WILDCARD: char = '@';

const INFIX_CONNECTORS: [Connector; 5] = [
    Connector::new("->", Name::Implies),
    Connector::new("<->", Name::Iff),
    Connector::new("&", Name::And),
    Connector::new("|", Name::Or),
    Connector::new("!", Name::Negation),
];

const POLISH_CONNECTORS: [Connector; 5] = [
    Connector::new("C", Name::Implies),
    Connector::new("E", Name::Iff),
    Connector::new("K", Name::And),
    Connector::new("A", Name::Or),
    Connector::new("N", Name::Negation),
];

/// An alphabet.
#[derive(Debug)]
pub struct Alphabet {
    notation: Notation,
    connectors: HashMap<&'static str, Connector>,
    letters: HashMap<String, Letter>,
    parentheses: [&'static str; 2],
    binary_wildcard: char,
}

impl Alphabet {
    fn from_connectors(notation: Notation, connectors: &[Connector]) -> Self {
        Alphabet {
            notation,
            connectors: connectors.iter().map(|c| (c.symbol(), *c)).collect(),
            letters: Letter::all().map(|l| (l.to_string(), l)).collect(),
            parentheses: [OPEN, CLOSE],
            binary_wildcard: BINARY_WILDCARD,
        }
    }

    /// The alphabet of the given notation.
    pub fn of(notation: Notation) -> &'static Alphabet {
        static INFIX: OnceLock<Alphabet> = OnceLock::new();
        static POLISH: OnceLock<Alphabet> = OnceLock::new();

        match notation {
            Notation::Infix => {
                INFIX.get_or_init(|| Alphabet::from_connectors(notation, &INFIX_CONNECTORS))
            }
            Notation::Polish => {
                POLISH.get_or_init(|| Alphabet::from_connectors(notation, &POLISH_CONNECTORS))
            }
        }
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// The connector with the given symbol, if some such connector exists.
    pub fn connector(&self, symbol: &str) -> Option<Connector> {
        self.connectors.get(symbol).copied()
    }

    /// The connector with the given canonical name.
    pub fn by_name(&self, name: Name) -> Connector {
        let connectors = match self.notation {
            Notation::Infix => &INFIX_CONNECTORS,
            Notation::Polish => &POLISH_CONNECTORS,
        };

        // Connector tables are ordered by name.
        match name {
            Name::Implies => connectors[0],
            Name::Iff => connectors[1],
            Name::And => connectors[2],
            Name::Or => connectors[3],
            Name::Negation => connectors[4],
        }
    }

    /// The interned letter with the given symbol, if some such letter exists.
    pub fn letter(&self, symbol: &str) -> Option<Letter> {
        self.letters.get(symbol).copied()
    }

    pub fn is_parenthesis(&self, symbol: &str) -> bool {
        self.parentheses.contains(&symbol)
    }

    pub fn binary_wildcard(&self) -> char {
        self.binary_wildcard
    }

    /// Whether the symbol belongs to the alphabet.
    pub fn contains(&self, symbol: &str) -> bool {
        self.is_parenthesis(symbol)
            || self.letters.contains_key(symbol)
            || self.connectors.contains_key(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_has_a_connector() {
        let names = [Name::Implies, Name::Iff, Name::And, Name::Or, Name::Negation];

        for notation in [Notation::Infix, Notation::Polish] {
            let alphabet = Alphabet::of(notation);
            for name in names {
                let connector = alphabet.by_name(name);
                assert_eq!(connector.name(), name);
                assert_eq!(alphabet.connector(connector.symbol()), Some(connector));
            }
        }
    }
}
