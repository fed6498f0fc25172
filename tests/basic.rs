use wff::{
    config::Config,
    formula::Formula,
    structures::alphabet::Notation,
    table::TruthTable,
    types::err::{self},
};

fn values(formula: &mut Formula) -> Vec<bool> {
    TruthTable::new(formula)
        .unwrap()
        .rows()
        .map(|row| row.value)
        .collect()
}

mod basic {
    use super::*;

    #[test]
    fn one_letter() {
        let mut formula = Formula::infix("p").unwrap();
        assert_eq!(values(&mut formula), vec![false, true]);
    }

    #[test]
    fn implication() {
        // Rows are FF, FT, TF, TT.
        let mut formula = Formula::infix("(p)->(q)").unwrap();
        assert_eq!(values(&mut formula), vec![true, true, false, true]);
    }

    #[test]
    fn biconditional() {
        let mut formula = Formula::infix("(p)<->(q)").unwrap();
        assert_eq!(values(&mut formula), vec![true, false, false, true]);
    }

    #[test]
    fn nested_implication() {
        let mut formula = Formula::infix("(p)->((q)->(p))").unwrap();
        let table = TruthTable::new(&mut formula).unwrap();
        assert!(table.is_tautology());
    }

    #[test]
    fn long_polish() {
        let mut formula = Formula::polish("CENApKNrAsNpsKNpq").unwrap();
        assert_eq!(formula.letters().len(), 4);

        let table = TruthTable::new(&mut formula).unwrap();
        assert_eq!(table.len(), 16);
    }

    #[test]
    fn repeated_letters() {
        let formula = Formula::infix("((p)&(p))|(p)").unwrap();
        assert_eq!(formula.letters().len(), 1);
    }

    #[test]
    fn whitespace() {
        let spaced = Formula::infix(" ( p ) ->\t( q )\n").unwrap();
        let unspaced = Formula::infix("(p)->(q)").unwrap();
        assert_eq!(spaced.tokens(), unspaced.tokens());
    }
}

mod rejection {
    use super::*;

    #[test]
    fn unbalanced_parenthesis() {
        assert_eq!(
            Formula::infix("(p)->(q").err(),
            Some(err::ErrorKind::Malformed(err::MalformedError::Irreducible))
        );
    }

    #[test]
    fn incomplete_polish() {
        assert_eq!(
            Formula::polish("CEN").err(),
            Some(err::ErrorKind::Malformed(err::MalformedError::Unbalanced))
        );
    }

    #[test]
    fn unknown_symbol() {
        assert!(matches!(
            Formula::infix("(p)->(Q)"),
            Err(err::ErrorKind::Lexical(err::LexicalError::UnknownSymbol { position: 6, .. }))
        ));
    }

    #[test]
    fn wrong_notation() {
        assert!(Formula::polish("(p)&(q)").is_err());
        assert!(Formula::infix("Kpq").is_err());
    }

    #[test]
    fn unparenthesized_operands() {
        assert!(Formula::infix("p&q").is_err());
        assert!(Formula::infix("!p").is_err());
        assert!(Formula::infix("((p)&(q))").is_err());
    }

    #[test]
    fn too_many_letters() {
        let mut config = Config::default();
        config.letter_limit.value = 2;

        let mut formula = Formula::polish("KpKqr").unwrap();
        assert!(matches!(
            TruthTable::from_config(&mut formula, &config),
            Err(err::ErrorKind::Table(err::TableError::TooManyLetters { count: 3, limit: 2 }))
        ));
    }
}

mod translation {
    use super::*;

    #[test]
    fn polish_to_infix() {
        let formula = Formula::polish("CENApKNrAsNpsKNpq").unwrap();
        assert_eq!(
            formula.write(Notation::Infix),
            "((!((p)|((!(r))&((s)|(!(p))))))<->(s))->((!(p))&(q))"
        );
    }

    #[test]
    fn infix_to_polish() {
        let formula = Formula::infix("(p)->((q)->(p))").unwrap();
        assert_eq!(formula.write(Notation::Polish), "CpCqp");
    }

    #[test]
    fn same_notation() {
        let source = "!((p)|(!(q)))";
        let formula = Formula::infix(source).unwrap();
        assert_eq!(formula.write(Notation::Infix), source);
    }
}
