//! Error types used in the library.
//!
//! - Lexical and malformed formula errors are external, and are returned when a string fails to parse.
//! - Evaluation errors are internal consistency guards, and should not be seen from a tree built by the library.
//! - Table errors concern the configured limits on truth table construction.
//!
//! None of these errors are recoverable for the attempt which produced them.
//! A malformed formula has no meaningful partial tree, and so no partial result is returned.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::letter::Letter;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Lexical(LexicalError),
    Malformed(MalformedError),
    Evaluation(EvaluationError),
    Table(TableError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Malformed(e) => write!(f, "{e}"),
            Self::Evaluation(e) => write!(f, "{e}"),
            Self::Table(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors when splitting a string into tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LexicalError {
    /// No symbol of the alphabet matches the input from `position` (a character offset, ignoring whitespace).
    ///
    /// Either the character at the position is not part of the alphabet, or some multi-character connector is unterminated.
    UnknownSymbol { position: usize, remainder: String },
}

impl From<LexicalError> for ErrorKind {
    fn from(e: LexicalError) -> Self {
        ErrorKind::Lexical(e)
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol {
                position,
                remainder,
            } => write!(
                f,
                "The provided string is not a well formed formula: no symbol matches '{remainder}' at {position}."
            ),
        }
    }
}

/// Noted errors when checking a token sequence is a well formed formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MalformedError {
    /// There were no tokens.
    Empty,

    /// The infix reductions stopped before reaching a single formula.
    Irreducible,

    /// Some operator did not receive the operands it requires, or some operand was left over.
    Unbalanced,

    /// An operand at the given token index has no operator waiting for it.
    NoPendingOperator(usize),

    /// A parenthesis at the given token index, where parentheses have no place.
    Parenthesis(usize),

    /// Tree construction found a token sequence of an unexpected shape.
    ///
    /// Sequences are checked before construction, and so this is unexpected.
    Structure,
}

impl From<MalformedError> for ErrorKind {
    fn from(e: MalformedError) -> Self {
        ErrorKind::Malformed(e)
    }
}

impl std::fmt::Display for MalformedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The provided string is not a well formed formula")?;
        match self {
            Self::Empty => write!(f, ": it is empty."),
            Self::Irreducible => write!(f, "."),
            Self::Unbalanced => write!(f, ": operators and operands do not balance."),
            Self::NoPendingOperator(index) => {
                write!(f, ": no operator is waiting for the operand at token {index}.")
            }
            Self::Parenthesis(index) => write!(f, ": unexpected parenthesis at token {index}."),
            Self::Structure => write!(f, ": the token sequence has an unexpected shape."),
        }
    }
}

/// Noted errors during evaluation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// The valuation has no value for the letter.
    MissingLetter(Letter),

    /// A connector node does not own as many children as the arity of the connector requires.
    Arity,

    /// A node index outside of the tree.
    UnknownNode(usize),
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLetter(letter) => write!(f, "No value for the letter {letter}."),
            Self::Arity => write!(f, "A connector does not have the operands it requires."),
            Self::UnknownNode(index) => write!(f, "No node {index} in the tree."),
        }
    }
}

/// Noted errors when building a truth table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TableError {
    /// The formula has more distinct letters than the limit.
    TooManyLetters { count: usize, limit: usize },
}

impl From<TableError> for ErrorKind {
    fn from(e: TableError) -> Self {
        ErrorKind::Table(e)
    }
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyLetters { count, limit } => write!(
                f,
                "The formula has {count} distinct letters, and tables are limited to {limit}."
            ),
        }
    }
}
