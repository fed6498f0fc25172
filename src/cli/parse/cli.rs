use clap::{value_parser, Arg, ArgAction, Command};

use wff::config::Config;

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("wff")
        .about("Checks whether a string is a well formed formula, and draws its truth table")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("formula")
            .required(true)
            .num_args(1)
            .value_parser(value_parser!(String))
            .help("The formula, in infix notation unless '--polish' is passed.")
            .long_help("The formula, in infix notation unless '--polish' is passed.

Infix formulas are fully parenthesized, e.g. '(p)->(!(q))'.
Polish formulas have no parentheses, e.g. 'CpNq'.
Letters are a … z, and whitespace is ignored."))

        .arg(Arg::new("polish")
            .short('p')
            .long("polish")
            .action(ArgAction::SetTrue)
            .help("Read the formula in Polish notation."))

        .arg(Arg::new("tree")
            .short('t')
            .long("tree")
            .action(ArgAction::SetTrue)
            .help("Display the syntax tree of the formula."))

        .arg(Arg::new("no_table")
            .long("no-table")
            .action(ArgAction::SetTrue)
            .help("Do not build a truth table, and so only check the formula."))

        .arg(Arg::new("translate")
            .long("translate")
            .action(ArgAction::SetTrue)
            .help("Display the formula written in the other notation."))

        .arg(Arg::new("letter_limit")
            .long("letter-limit")
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The most distinct letters to build a truth table for.
Default: {}

A table over n letters has 2^n rows.", defaults.letter_limit.value)))

        .arg(Arg::new("true_symbol")
            .long("true")
            .value_name("SYMBOL")
            .value_parser(value_parser!(char))
            .required(false)
            .num_args(1)
            .help(format!("The symbol for true in a truth table.
Default: {}", defaults.true_symbol.value)))

        .arg(Arg::new("false_symbol")
            .long("false")
            .value_name("SYMBOL")
            .value_parser(value_parser!(char))
            .required(false)
            .num_args(1)
            .help(format!("The symbol for false in a truth table.
Default: {}", defaults.false_symbol.value)))

        .arg(Arg::new("hole_symbol")
            .long("hole")
            .value_name("SYMBOL")
            .value_parser(value_parser!(char))
            .required(false)
            .num_args(1)
            .help(format!("The symbol for a token without a value of its own in a truth table.
Default: {}", defaults.hole_symbol.value)))
}
