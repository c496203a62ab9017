//! Rendering of the table: the header, its rule, and each row.

use ttable::structures::{assignment::Assignment, evaluation::Evaluation, formula::Formula};

/// Prints the `a b … : formula : Result` header, with a rule of `=` underneath.
pub fn print_header(variable_count: usize, formula: &Formula) {
    for index in 0..variable_count {
        print!("{} ", (b'a' + index as u8) as char);
    }
    println!(": {formula} : Result");

    // Two columns per variable name, the separators, and the result column.
    let width = 2 * variable_count + formula.token_count() + 11;
    println!("{}", "=".repeat(width));
}

/// Prints one row: assignment bits, the trace (or blank space) under the formula, and the result.
pub fn print_row(assignment: &Assignment, evaluation: &Evaluation, show_trace: bool) {
    match show_trace {
        true => println!("{assignment} : {} : {}", evaluation.trace, evaluation.value as u8),

        false => println!(
            "{assignment} : {} : {}",
            " ".repeat(evaluation.trace.len()),
            evaluation.value as u8
        ),
    }
}
