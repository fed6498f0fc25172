use wff::{
    formula::Formula,
    structures::alphabet::Notation,
    table::TruthTable,
    types::err::{self},
};

mod parse;

/// Malformed input, whether from an unknown symbol or a string which is not a formula.
const EXIT_MALFORMED: i32 = 1;

/// A truth table could not be built.
const EXIT_TABLE: i32 = 2;

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = parse::config::config_from_args(&matches);

    let Some(source) = matches.get_one::<String>("formula") else {
        std::process::exit(EXIT_MALFORMED);
    };

    let mut formula = match Formula::parse(source, config.notation.value) {
        Ok(formula) => formula,
        Err(e) => {
            println!("{e}");
            std::process::exit(EXIT_MALFORMED);
        }
    };

    println!("{formula} is a well formed {} formula.", formula.notation());

    if matches.get_flag("translate") {
        let other = match formula.notation() {
            Notation::Infix => Notation::Polish,
            Notation::Polish => Notation::Infix,
        };
        println!("In {other} notation: {}", formula.write(other));
    }

    if matches.get_flag("tree") {
        println!();
        print!("{}", formula.tree());
    }

    if matches.get_flag("no_table") {
        return;
    }

    match TruthTable::from_config(&mut formula, &config) {
        Ok(table) => {
            println!();
            print!("{}", table.render(&config));
        }
        Err(e @ err::ErrorKind::Table(_)) | Err(e @ err::ErrorKind::Evaluation(_)) => {
            println!("{e}");
            std::process::exit(EXIT_TABLE);
        }
        Err(e) => {
            println!("{e}");
            std::process::exit(EXIT_MALFORMED);
        }
    }
}
