/*!
A total function from the letters of a formula to truth values.

The letters of a valuation are distinct and ordered, and each has a value.
With this, the values of a valuation are a sequence of booleans, and so a binary number whose most significant bit is the value of the first letter.
That number, together with the set of letters, is the [key](ValuationKey) of the valuation, and indexes the values stored on [tree](crate::structures::tree) nodes.
Valuations over different sets of letters have different keys, even when their values agree.

```rust
# use wff::structures::letter::Letter;
# use wff::structures::valuation::Valuation;
let letters = ['p', 'q', 'r'].map(|c| Letter::try_from(c).unwrap());
let valuation = Valuation::from_index(&letters, 0b011);

assert_eq!(valuation.value_of(letters[0]), Some(false));
assert_eq!(valuation.value_of(letters[2]), Some(true));
assert_eq!(valuation.bit_string(), "011");
```

As letters are limited to `a` through `z`, both the letter set and the values of a key fit in a [u32].
*/

use super::letter::Letter;

/// The compact key of a valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValuationKey {
    /// One bit for each letter of the alphabet, set if the letter is part of the valuation.
    letters: u32,

    /// The values, with the most significant bit for the first letter.
    bits: u32,
}

impl ValuationKey {
    fn of(letters: &[Letter], values: &[bool]) -> Self {
        ValuationKey {
            letters: letters
                .iter()
                .fold(0, |mask, letter| mask | (1 << letter.index())),
            bits: values
                .iter()
                .fold(0, |bits, value| (bits << 1) | u32::from(*value)),
        }
    }

    /// The values of the key, as a binary number.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// The count of letters of the key.
    pub fn width(&self) -> usize {
        self.letters.count_ones() as usize
    }
}

impl std::fmt::Display for ValuationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = self.width())
    }
}

/// A valuation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Valuation {
    letters: Vec<Letter>,
    values: Vec<bool>,
    key: ValuationKey,
}

impl Valuation {
    /// The valuation pairing each letter with the value at the same position.
    ///
    /// Letters are sorted and deduplicated, and so `letters` is expected to be sorted and free of duplicates.
    /// None, if this is not the case or the counts of letters and values differ.
    pub fn new(letters: &[Letter], values: Vec<bool>) -> Option<Self> {
        if letters.len() != values.len() || letters.windows(2).any(|pair| pair[0] >= pair[1]) {
            return None;
        }

        let key = ValuationKey::of(letters, &values);

        Some(Valuation {
            letters: letters.to_vec(),
            values,
            key,
        })
    }

    /// The valuation whose values are the bits of `index`, zero-padded to the count of letters, with the most significant bit for the first letter.
    ///
    /// `letters` are expected to be sorted and free of duplicates.
    pub fn from_index(letters: &[Letter], index: usize) -> Self {
        let width = letters.len();
        let values = (0..width)
            .map(|position| (index >> (width - 1 - position)) & 1 == 1)
            .collect::<Vec<_>>();

        let key = ValuationKey::of(letters, &values);

        Valuation {
            letters: letters.to_vec(),
            values,
            key,
        }
    }

    /// The value of a letter, if the letter is part of the valuation.
    pub fn value_of(&self, letter: Letter) -> Option<bool> {
        match self.letters.binary_search(&letter) {
            Ok(index) => self.values.get(index).copied(),
            Err(_) => None,
        }
    }

    pub fn key(&self) -> ValuationKey {
        self.key
    }

    /// The letters of the valuation, in order.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// The values of the letters, in the order of the letters.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// The values of the valuation as a string of binary digits, one per letter.
    pub fn bit_string(&self) -> String {
        self.values
            .iter()
            .map(|value| match value {
                true => '1',
                false => '0',
            })
            .collect()
    }
}
