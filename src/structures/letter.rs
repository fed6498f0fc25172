/*!
Propositional letters, aka. 'atoms'.

A letter is a single lowercase ascii character, `a` through `z`.
The identity of a letter is its symbol, and so distinct occurrences of the same symbol within a formula are equal and hash equal.

```rust
# use wff::structures::letter::Letter;
let p = Letter::try_from('p').unwrap();
let also_p = Letter::try_from('p').unwrap();

assert_eq!(p, also_p);
assert!(Letter::try_from('P').is_err());
```

Letters are ordered by their symbol, and this order fixes the order of letters in a [valuation](crate::structures::valuation).
*/

/// The count of distinct letters.
pub const LETTER_COUNT: usize = 26;

/// A propositional letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter {
    symbol: char,
}

impl Letter {
    /// The symbol of the letter.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// The position of the letter in the alphabet, from 0 for `a` to 25 for `z`.
    pub fn index(&self) -> u32 {
        u32::from(self.symbol) - u32::from('a')
    }

    /// All letters, in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        ('a'..='z').map(|symbol| Letter { symbol })
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol.is_ascii_lowercase() {
            true => Ok(Letter { symbol }),
            false => Err(symbol),
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
