use clap::ArgMatches;

use wff::{
    config::{Config, ConfigOption},
    structures::alphabet::Notation,
};

fn set_or_warn<T: Clone + PartialOrd + std::fmt::Display>(option: &mut ConfigOption<T>, value: T) {
    if !option.set(value.clone()) {
        let (min, max) = option.min_max();
        eprintln!(
            "Ignoring {value} for {}, which is bounded by {min} and {max}",
            option.name
        );
    }
}

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if args.get_flag("polish") {
        the_config.notation.value = Notation::Polish
    };

    if let Ok(Some(limit)) = args.try_get_one::<usize>("letter_limit") {
        set_or_warn(&mut the_config.letter_limit, *limit)
    };

    if let Ok(Some(symbol)) = args.try_get_one::<char>("true_symbol") {
        set_or_warn(&mut the_config.true_symbol, *symbol)
    };

    if let Ok(Some(symbol)) = args.try_get_one::<char>("false_symbol") {
        set_or_warn(&mut the_config.false_symbol, *symbol)
    };

    if let Ok(Some(symbol)) = args.try_get_one::<char>("hole_symbol") {
        set_or_warn(&mut the_config.hole_symbol, *symbol)
    };

    the_config
}
