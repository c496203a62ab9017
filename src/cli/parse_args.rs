use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use ttable::config::{FORMULA_LENGTH_MAX, VARIABLE_COUNT_MAX};

/// Default level of detail for chatter around the table.
pub const DETAILS: u8 = 0;

/// Options specific to the CLI, read from the argument matches.
pub struct CliOptions {
    pub show_trace: bool,
    pub detail: u8,
    pub report: bool,
}

pub fn cli() -> Command {
    Command::new("ttable")
        .about("Enumerates the truth table of a boolean formula written in postfix notation.")

        .arg(Arg::new("variables")
            .required(true)
            .value_parser(value_parser!(usize))
            .help(format!("The count of variables the formula ranges over, from 1 to {VARIABLE_COUNT_MAX}.")))

        .arg(Arg::new("formula")
            .required(true)
            .help(format!("The formula, in postfix notation, up to {FORMULA_LENGTH_MAX} characters.
Variables 'a'-'z', constants '0'/'1', negation '-', and connectives '|' (or), '&' (and), '#' (xor), '>' (implication), '=' (equivalence).")))

        .arg(Arg::new("no_trace")
            .long("no-trace")
            .action(ArgAction::SetTrue)
            .help("Leave the formula column of each row blank, rather than tracing per-token values."))

        .arg(Arg::new("report")
            .short('r')
            .long("report")
            .action(ArgAction::SetTrue)
            .help("Classify the formula (tautology/contradiction/contingent) after the table."))

        .arg(Arg::new("detail")
            .long("detail")
            .short('d')
            .value_name("LEVEL")
            .value_parser(value_parser!(u8))
            .num_args(1)
            .help(format!("The level to which details are communicated around the table.
Default: {DETAILS}")))
}

pub fn options_from_args(args: &ArgMatches) -> CliOptions {
    let mut the_options = CliOptions {
        show_trace: true,
        detail: DETAILS,
        report: false,
    };

    if args.get_flag("no_trace") {
        the_options.show_trace = false;
    }

    if args.get_flag("report") {
        the_options.report = true;
    }

    if let Ok(Some(level)) = args.try_get_one::<u8>("detail") {
        the_options.detail = *level;
    }

    the_options
}
