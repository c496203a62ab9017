use ttable::{config::Config, context::Context};

mod parse_args;
mod table;

use parse_args::options_from_args;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse_args::cli().get_matches();

    let cli_options = options_from_args(&matches);

    let variable_count = *matches
        .get_one::<usize>("variables")
        .expect("variable count required");
    let formula_string = matches
        .get_one::<String>("formula")
        .expect("formula required");

    let mut the_context = Context::from_config(Config::default());

    match the_context.set_formula(formula_string, variable_count) {
        Ok(()) => {}
        Err(e) => {
            println!("Invalid formula or number of variables. ({e:?})");
            std::process::exit(1);
        }
    }

    if let Some(formula) = the_context.formula() {
        table::print_header(variable_count, formula);
    }

    let show_trace = cli_options.show_trace;
    let report = match the_context.enumerate(|assignment, evaluation| {
        table::print_row(assignment, evaluation, show_trace);
    }) {
        Ok(report) => report,

        Err(e) => {
            println!("c Evaluation failed: {e:?}");
            std::process::exit(2);
        }
    };

    if cli_options.detail > 0 {
        println!(
            "c {} rows, {} tokens scanned",
            the_context.counters.rows_evaluated, the_context.counters.tokens_scanned
        );
    }

    if cli_options.report {
        println!("s {report}");
    }
}
