//! Rendering of truth tables, as an org-mode style table.
//!
//! ```text
//! | p q | ( p ) -> ( q ) | Value |
//! |-----+----------------+-------|
//! | F F | _ _ _ T  _ _ _ | T     |
//! ```
//!
//! Each token value is drawn under the symbol of its token, and columns are padded to their widest cell.

use crate::config::Config;

use super::TruthTable;

fn symbol(value: Option<bool>, config: &Config) -> char {
    match value {
        Some(true) => config.true_symbol.value,
        Some(false) => config.false_symbol.value,
        None => config.hole_symbol.value,
    }
}

fn pad(cell: &str, width: usize) -> String {
    format!("{cell:<width$}")
}

impl TruthTable<'_> {
    /// The table as a string, with values drawn using the symbols of `config`.
    pub fn render(&self, config: &Config) -> String {
        let header = self.header();

        let token_widths = header
            .tokens
            .iter()
            .map(|token| token.chars().count().max(1))
            .collect::<Vec<_>>();

        let mut lines: Vec<[String; 3]> = Vec::with_capacity(self.len() + 1);

        lines.push([
            header
                .letters
                .iter()
                .map(|letter| letter.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            header.tokens.join(" "),
            header.value.to_string(),
        ]);

        for row in self.rows() {
            let letters = row
                .valuation
                .values()
                .iter()
                .map(|value| symbol(Some(*value), config).to_string())
                .collect::<Vec<_>>()
                .join(" ");

            let tokens = row
                .subformulas
                .iter()
                .zip(&token_widths)
                .map(|(value, width)| pad(&symbol(*value, config).to_string(), *width))
                .collect::<Vec<_>>()
                .join(" ");

            lines.push([letters, tokens, symbol(Some(row.value), config).to_string()]);
        }

        let mut widths = [0; 3];
        for line in &lines {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::default();
        for (index, line) in lines.iter().enumerate() {
            let cells = line
                .iter()
                .zip(widths)
                .map(|(cell, width)| pad(cell, width))
                .collect::<Vec<_>>();
            out.push_str(&format!("| {} |\n", cells.join(" | ")));

            if index == 0 {
                let rule = widths
                    .iter()
                    .map(|width| "-".repeat(width + 2))
                    .collect::<Vec<_>>();
                out.push_str(&format!("|{}|\n", rule.join("+")));
            }
        }
        out
    }
}

impl std::fmt::Display for TruthTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&Config::default()))
    }
}
