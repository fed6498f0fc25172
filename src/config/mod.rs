/*!
Configuration of parsing and truth tables.

All configuration is contained within a [Config].
Parsing reads the notation, and [truth tables](crate::table) read the letter limit and the symbols used when rendering.
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::structures::{alphabet::Notation, letter::LETTER_COUNT};

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The notation formulas are written in.
    pub notation: ConfigOption<Notation>,

    /// The most distinct letters a truth table will be built for.
    ///
    /// A table over *n* letters has 2^*n* rows.
    pub letter_limit: ConfigOption<usize>,

    /// The symbol used to render true.
    pub true_symbol: ConfigOption<char>,

    /// The symbol used to render false.
    pub false_symbol: ConfigOption<char>,

    /// The symbol used to render a token which has no value of its own, e.g. a letter or a parenthesis.
    pub hole_symbol: ConfigOption<char>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notation: ConfigOption {
                name: "notation",
                min: Notation::Infix,
                max: Notation::Polish,
                value: Notation::Infix,
            },

            letter_limit: ConfigOption {
                name: "letter_limit",
                min: 0,
                max: LETTER_COUNT,
                value: 20,
            },

            true_symbol: ConfigOption {
                name: "true_symbol",
                min: '!',
                max: char::MAX,
                value: 'T',
            },

            false_symbol: ConfigOption {
                name: "false_symbol",
                min: '!',
                max: char::MAX,
                value: 'F',
            },

            hole_symbol: ConfigOption {
                name: "hole_symbol",
                min: '!',
                max: char::MAX,
                value: '_',
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_limit_bounds() {
        let mut config = Config::default();
        assert!(!config.letter_limit.set(LETTER_COUNT + 1));
        assert_eq!(config.letter_limit.value, 20);
        assert!(config.letter_limit.set(3));
        assert_eq!(config.letter_limit.value, 3);
        assert_eq!(config.letter_limit.min_max(), (0, LETTER_COUNT));
    }

    #[test]
    fn symbols_exclude_whitespace() {
        let mut config = Config::default();
        assert!(!config.true_symbol.set(' '));
        assert!(config.true_symbol.set('1'));
    }
}
