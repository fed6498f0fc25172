use rand::{rngs::StdRng, Rng, SeedableRng};

use wff::{
    formula::Formula,
    procedures::tokenize::tokenize,
    structures::alphabet::{Alphabet, Notation},
    table::TruthTable,
};

const INFIX_BINARY: [&str; 4] = ["->", "<->", "&", "|"];

/// A random infix formula over the first `letters` letters, with at most `depth` nested connectives.
fn random_infix(rng: &mut StdRng, depth: usize, letters: u8) -> String {
    if depth == 0 || rng.random_bool(0.3) {
        let letter = (b'a' + rng.random_range(0..letters)) as char;
        return letter.to_string();
    }

    match rng.random_bool(0.25) {
        true => format!("!({})", random_infix(rng, depth - 1, letters)),
        false => {
            let connector = INFIX_BINARY[rng.random_range(0..INFIX_BINARY.len())];
            format!(
                "({}){connector}({})",
                random_infix(rng, depth - 1, letters),
                random_infix(rng, depth - 1, letters)
            )
        }
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn written_as_read() {
        let mut rng = StdRng::seed_from_u64(7);
        let alphabet = Alphabet::of(Notation::Infix);

        for _ in 0..200 {
            let source = random_infix(&mut rng, 5, 6);
            let formula = Formula::infix(&source).unwrap();

            let written = formula.write(Notation::Infix);
            assert_eq!(written, source);
            assert_eq!(&tokenize(&written, alphabet).unwrap(), formula.tokens());
        }
    }

    #[test]
    fn through_polish() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let source = random_infix(&mut rng, 4, 4);
            let mut infix = Formula::infix(&source).unwrap();

            let mut polish = Formula::polish(&infix.write(Notation::Polish)).unwrap();
            assert_eq!(polish.write(Notation::Infix), source);

            let infix_values = TruthTable::new(&mut infix)
                .unwrap()
                .rows()
                .map(|row| row.value)
                .collect::<Vec<_>>();
            let polish_values = TruthTable::new(&mut polish)
                .unwrap()
                .rows()
                .map(|row| row.value)
                .collect::<Vec<_>>();
            assert_eq!(infix_values, polish_values, "{source}");
        }
    }

    #[test]
    fn tree_covers_non_parenthesis_tokens() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let source = random_infix(&mut rng, 5, 26);
            let formula = Formula::infix(&source).unwrap();

            let parentheses = source.chars().filter(|c| *c == '(' || *c == ')').count();
            assert_eq!(formula.tree().len() + parentheses, formula.len());
        }
    }
}
