/*!
Splits a string into a sequence of tokens.

# Overview

Whitespace is removed, and the remaining string is scanned from left to right.

At each position a candidate symbol is grown one character at a time, and the candidate is tested against the parentheses, the letters, and then the connectors of an [alphabet](Alphabet).
On the first match the token for the symbol is added to the sequence and scanning resumes after the symbol.
If the candidate grows past the end of the string without some match, the string is not a formula.

Growing the candidate is required as some connectors span multiple characters, e.g. `->` and `<->`.

Each connector token is a fresh value, while letters are the interned letters of the alphabet.

# Example

```rust
# use wff::procedures::tokenize::tokenize;
# use wff::structures::alphabet::{Alphabet, Notation};
let tokens = tokenize("(p) -> ((q) <-> (p))", Alphabet::of(Notation::Infix)).unwrap();

assert_eq!(tokens.len(), 13);
assert_eq!(tokens.letters().len(), 2);
assert_eq!(tokens.to_string(), "(p)->((q)<->(p))");
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        alphabet::{Alphabet, CLOSE, OPEN},
        token::{Token, Tokens},
    },
    types::err::{self},
};

/// The tokens of `formula`, over `alphabet`.
pub fn tokenize(formula: &str, alphabet: &Alphabet) -> Result<Tokens, err::LexicalError> {
    let string = formula
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();

    // Byte offsets of each character, and of the end of the string.
    let boundaries = string
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(string.len()))
        .collect::<Vec<_>>();
    let char_count = boundaries.len() - 1;

    let mut tokens = Tokens::default();

    let mut start = 0;
    let mut end = start + 1;

    while start < char_count {
        let symbol = &string[boundaries[start]..boundaries[end]];

        let token = if alphabet.is_parenthesis(symbol) {
            match symbol {
                OPEN => Some(Token::Open),
                CLOSE => Some(Token::Close),
                _ => None,
            }
        } else if let Some(letter) = alphabet.letter(symbol) {
            Some(Token::Letter(letter))
        } else {
            alphabet.connector(symbol).map(Token::Connector)
        };

        match token {
            Some(token) => {
                log::trace!(target: targets::TOKENIZE, "Token {token} at {start}");
                tokens.push(token);
                start = end;
                end = start + 1;
            }

            None if end + 1 > char_count => {
                log::warn!(target: targets::TOKENIZE, "No symbol at {start} of {string}");
                return Err(err::LexicalError::UnknownSymbol {
                    position: start,
                    remainder: string[boundaries[start]..].to_string(),
                });
            }

            None => end += 1,
        }
    }

    log::debug!(target: targets::TOKENIZE, "{} tokens from {string}", tokens.len());
    Ok(tokens)
}
