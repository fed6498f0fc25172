/*!
Tokens, and sequences of tokens.

A [Token] is the smallest unit of a formula: a [letter](Letter), a [connector](Connector), or a parenthesis.
Each token carries its own symbol, and so a sequence of tokens may be written back to a string.

A [Tokens] sequence is the linear decomposition of a formula string, in source order, together with the set of distinct letters found in the string.
Sequences are produced by [tokenize](crate::procedures::tokenize::tokenize).
*/

use std::collections::BTreeSet;

use super::{
    alphabet::{CLOSE, OPEN},
    connector::Connector,
    letter::Letter,
};

/// A token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Letter(Letter),
    Connector(Connector),
    Open,
    Close,
}

impl Token {
    /// The symbol of the token, as written.
    pub fn symbol(&self) -> String {
        match self {
            Self::Letter(letter) => letter.to_string(),
            Self::Connector(connector) => connector.symbol().to_string(),
            Self::Open => OPEN.to_string(),
            Self::Close => CLOSE.to_string(),
        }
    }

    /// The count of operands the token requires to be complete.
    ///
    /// Letters are complete, and so require none.
    /// Parentheses are not operands, and so have no count.
    pub fn operand_count(&self) -> Option<usize> {
        match self {
            Self::Letter(_) => Some(0),
            Self::Connector(connector) => Some(connector.arity().operand_count()),
            Self::Open | Self::Close => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A sequence of tokens, with the distinct letters of the sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<Token>,
    letters: BTreeSet<Letter>,
}

impl Tokens {
    /// Adds a token to the end of the sequence.
    pub fn push(&mut self, token: Token) {
        if let Token::Letter(letter) = token {
            self.letters.insert(letter);
        }
        self.tokens.push(token);
    }

    /// The tokens, in order.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// The count of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The distinct letters of the sequence, in order.
    pub fn letters(&self) -> Vec<Letter> {
        self.letters.iter().copied().collect()
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut tokens = Tokens::default();
        for token in iter {
            tokens.push(token);
        }
        tokens
    }
}

impl std::fmt::Display for Tokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
