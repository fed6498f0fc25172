use std::collections::HashSet;

use wff::{formula::Formula, structures::alphabet::Notation, table::TruthTable};

/// The value of each row of the table of `source`.
fn values(source: &str, notation: Notation) -> Vec<bool> {
    let mut formula = Formula::parse(source, notation).unwrap();
    let table = TruthTable::new(&mut formula).unwrap();
    table.rows().map(|row| row.value).collect()
}

fn infix_values(source: &str) -> Vec<bool> {
    values(source, Notation::Infix)
}

mod equivalence {
    use super::*;

    #[test]
    fn de_morgan() {
        assert_eq!(
            infix_values("(p)&(q)"),
            infix_values("!((!(p))|(!(q)))")
        );
        assert_eq!(
            infix_values("(p)|(q)"),
            infix_values("!((!(p))&(!(q)))")
        );
    }

    #[test]
    fn implication_as_disjunction() {
        assert_eq!(infix_values("(p)->(q)"), infix_values("(!(p))|(q)"));
    }

    #[test]
    fn biconditional_as_implications() {
        assert_eq!(
            infix_values("(p)<->(q)"),
            infix_values("((p)->(q))&((q)->(p))")
        );
    }

    #[test]
    fn double_negation() {
        assert_eq!(infix_values("!(!(p))"), infix_values("p"));
        assert_eq!(infix_values("!(!(!(p)))"), infix_values("!(p)"));
    }

    #[test]
    fn notations_agree() {
        let pairs = [
            ("(p)->((q)->(p))", "CpCqp"),
            ("!((p)&(q))", "NKpq"),
            ("((p)|(q))<->(r)", "EApqr"),
            (
                "((!((p)|((!(r))&((s)|(!(p))))))<->(s))->((!(p))&(q))",
                "CENApKNrAsNpsKNpq",
            ),
        ];

        for (infix, polish) in pairs {
            assert_eq!(
                infix_values(infix),
                values(polish, Notation::Polish),
                "{infix} and {polish}"
            );
        }
    }
}

mod tables {
    use super::*;

    #[test]
    fn distinct_valuations() {
        let mut formula = Formula::polish("KpAqErCsNt").unwrap();
        let table = TruthTable::new(&mut formula).unwrap();

        assert_eq!(table.len(), 1 << 5);

        let keys = table
            .valuations()
            .iter()
            .map(|valuation| valuation.key())
            .collect::<HashSet<_>>();
        assert_eq!(keys.len(), table.len());
    }

    #[test]
    fn letters_in_order() {
        let mut formula = Formula::infix("((z)&(a))->(m)").unwrap();
        let table = TruthTable::new(&mut formula).unwrap();

        let symbols = table
            .letters()
            .iter()
            .map(|letter| letter.symbol())
            .collect::<String>();
        assert_eq!(symbols, "amz");

        // The first letter is the most significant.
        let row = table.row(4).unwrap();
        assert_eq!(row.valuation.values(), &[true, false, false]);
    }

    #[test]
    fn subformula_values_match_parts() {
        let mut whole = Formula::infix("(!(p))&(q)").unwrap();
        let table = TruthTable::new(&mut whole).unwrap();

        let negation = infix_values("!(p)");
        let negation_values = table
            .rows()
            .map(|row| row.subformulas[1])
            .collect::<Vec<_>>();

        // Rows are FF, FT, TF, TT, and the negation depends only on p.
        let expected = [negation[0], negation[0], negation[1], negation[1]]
            .into_iter()
            .map(Some)
            .collect::<Vec<_>>();
        assert_eq!(negation_values, expected);
    }
}
