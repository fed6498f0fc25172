/*!
Truth tables, by exhaustive evaluation.

A truth table of a formula over *n* distinct letters has 2^*n* rows.
The *i*th row is for the [valuation](Valuation) given by the binary representation of *i*, zero-padded to *n* bits, with the most significant bit for the first letter.

On construction the formula is evaluated under each valuation, and this stores the value of each connector node of the tree for each valuation.
Rows are read from these stored values:
- The value of each letter.
- The value of each token, in token order, where each connector token has the value of the subformula it is the principal connector of, and any other token is a hole.
- The value of the formula.

# Example

```rust
# use wff::formula::Formula;
# use wff::table::TruthTable;
let mut formula = Formula::infix("(p)->(q)").unwrap();
let table = TruthTable::new(&mut formula).unwrap();

assert_eq!(table.len(), 4);
let values = table.rows().map(|row| row.value).collect::<Vec<_>>();
assert_eq!(values, vec![true, true, false, true]);

let row = table.row(2).unwrap();
assert_eq!(row.valuation.bit_string(), "10");
assert_eq!(row.subformulas, vec![None, None, None, Some(false), None, None, None]);
```

Construction borrows the formula mutably, as values are stored on its tree, and the table keeps a shared borrow of the formula afterwards.
*/

mod render;

use crate::{
    config::Config,
    formula::Formula,
    misc::log::targets::{self},
    structures::{
        letter::Letter,
        token::Token,
        tree::{Label, NodeIndex},
        valuation::Valuation,
    },
    types::err::{self},
};

/// The label of the final column of a table.
pub const VALUE_HEADER: &str = "Value";

/// A truth table.
#[derive(Debug)]
pub struct TruthTable<'f> {
    formula: &'f Formula,
    letters: Vec<Letter>,
    valuations: Vec<Valuation>,
}

/// The header of a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// The distinct letters of the formula, in order.
    pub letters: Vec<Letter>,

    /// The symbols of the tokens of the formula, in order.
    pub tokens: Vec<String>,

    pub value: &'static str,
}

/// A row of a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row<'t> {
    /// The valuation of the row.
    pub valuation: &'t Valuation,

    /// The value of each token, in token order, or None for a token which is not a connector.
    pub subformulas: Vec<Option<bool>>,

    /// The value of the formula.
    pub value: bool,
}

impl<'f> TruthTable<'f> {
    /// The truth table of `formula`, with the default [Config].
    pub fn new(formula: &'f mut Formula) -> Result<Self, err::ErrorKind> {
        Self::from_config(formula, &Config::default())
    }

    /// The truth table of `formula`.
    ///
    /// An error if the formula has more distinct letters than the letter limit of `config`.
    pub fn from_config(formula: &'f mut Formula, config: &Config) -> Result<Self, err::ErrorKind> {
        let letters = formula.letters();

        let limit = config.letter_limit.value;
        if letters.len() > limit {
            log::warn!(target: targets::TRUTH_TABLE, "{} letters over the limit of {limit}", letters.len());
            return Err(err::ErrorKind::from(err::TableError::TooManyLetters {
                count: letters.len(),
                limit,
            }));
        }

        let row_count = 1_usize << letters.len();
        let mut valuations = Vec::with_capacity(row_count);

        for index in 0..row_count {
            let valuation = Valuation::from_index(&letters, index);
            let value = formula.tree_mut().evaluate(&valuation)?;
            log::trace!(target: targets::TRUTH_TABLE, "Row {}: {value}", valuation.bit_string());
            valuations.push(valuation);
        }

        log::debug!(target: targets::TRUTH_TABLE, "{row_count} rows for {formula}");

        let formula: &'f Formula = formula;
        Ok(TruthTable {
            formula,
            letters,
            valuations,
        })
    }

    pub fn formula(&self) -> &Formula {
        self.formula
    }

    /// The distinct letters of the formula, in order.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// The valuations of the rows, in row order.
    pub fn valuations(&self) -> &[Valuation] {
        &self.valuations
    }

    /// The count of rows.
    pub fn len(&self) -> usize {
        self.valuations.len()
    }

    /// Always false, as there is a row for the empty valuation of a formula without letters.
    pub fn is_empty(&self) -> bool {
        self.valuations.is_empty()
    }

    pub fn header(&self) -> Header {
        Header {
            letters: self.letters.clone(),
            tokens: self.formula.tokens().iter().map(Token::symbol).collect(),
            value: VALUE_HEADER,
        }
    }

    /// The value of the subformula at `index` under `valuation`, as stored during construction.
    fn stored_value(&self, index: NodeIndex, valuation: &Valuation) -> Option<bool> {
        let node = self.formula.tree().node(index)?;
        match node.label() {
            Label::Letter(letter) => valuation.value_of(letter),
            Label::Connector(_) => node.value(valuation.key()),
        }
    }

    /// The row at `index`, if there is such a row.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        let valuation = self.valuations.get(index)?;
        let tree = self.formula.tree();

        let subformulas = self
            .formula
            .tokens()
            .iter()
            .enumerate()
            .map(|(position, token)| match token {
                Token::Connector(_) => tree
                    .node_for_token(position)
                    .and_then(|node| self.stored_value(node, valuation)),
                _ => None,
            })
            .collect();

        let value = self.stored_value(tree.root()?, valuation)?;

        Some(Row {
            valuation,
            subformulas,
            value,
        })
    }

    /// The rows of the table, in order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.len()).filter_map(move |index| self.row(index))
    }

    /// The valuations on which the formula is true.
    pub fn models(&self) -> impl Iterator<Item = &Valuation> {
        self.rows().filter(|row| row.value).map(|row| row.valuation)
    }

    /// Whether the formula is true on every valuation.
    pub fn is_tautology(&self) -> bool {
        self.rows().all(|row| row.value)
    }

    /// Whether the formula is false on every valuation.
    pub fn is_contradiction(&self) -> bool {
        self.models().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_count() {
        let mut formula = Formula::polish("KpKqKrs").unwrap();
        let table = TruthTable::new(&mut formula).unwrap();
        assert_eq!(table.len(), 16);
        assert_eq!(table.models().count(), 1);
    }

    #[test]
    fn letter_limit() {
        let mut config = Config::default();
        config.letter_limit.value = 1;

        let mut formula = Formula::infix("(p)&(q)").unwrap();
        assert_eq!(
            TruthTable::from_config(&mut formula, &config).err(),
            Some(err::ErrorKind::Table(err::TableError::TooManyLetters {
                count: 2,
                limit: 1
            }))
        );
    }

    #[test]
    fn single_letter() {
        let mut formula = Formula::infix("p").unwrap();
        let table = TruthTable::new(&mut formula).unwrap();
        let values = table.rows().map(|row| row.value).collect::<Vec<_>>();
        assert_eq!(values, vec![false, true]);
        assert_eq!(table.row(0).unwrap().subformulas, vec![None]);
    }

    #[test]
    fn header() {
        let mut formula = Formula::infix("!((p)|(q))").unwrap();
        let table = TruthTable::new(&mut formula).unwrap();
        let header = table.header();
        assert_eq!(header.letters.len(), 2);
        assert_eq!(header.tokens.concat(), "!((p)|(q))");
        assert_eq!(header.value, VALUE_HEADER);
    }

    #[test]
    fn subformulas_in_token_order() {
        let mut formula = Formula::infix("!((p)|(q))").unwrap();
        let table = TruthTable::new(&mut formula).unwrap();
        let row = table.row(0).unwrap();
        // FF: p|q is false, and so the negation is true.
        assert_eq!(
            row.subformulas,
            vec![Some(true), None, None, None, None, Some(false), None, None, None, None]
        );
    }

    #[test]
    fn tautology_and_contradiction() {
        let mut excluded_middle = Formula::infix("(p)|(!(p))").unwrap();
        let table = TruthTable::new(&mut excluded_middle).unwrap();
        assert!(table.is_tautology());
        assert!(!table.is_contradiction());

        let mut contradiction = Formula::polish("KpNp").unwrap();
        let table = TruthTable::new(&mut contradiction).unwrap();
        assert!(table.is_contradiction());
        assert!(!table.is_tautology());
    }
}
