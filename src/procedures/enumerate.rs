/*!
A context method to enumerate the full truth table of the installed formula.

See [Context::enumerate] for the relevant method.

# Overview

Enumeration walks every assignment of the declared variables in binary counter order, all-zero first, and [evaluates](crate::procedures::evaluate) the installed formula on each --- 2^n rows for n variables, each assignment visited exactly once.

The caller sees each row through an observer, called with the assignment and its evaluation, in order.
Display is the observer's concern; enumeration never prints.

On completion the rows are summed up as a [report](crate::reports): a formula true on every row is a tautology, false on every row a contradiction, and anything between is contingent.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    reports::Report,
    structures::{assignment::Assignment, evaluation::Evaluation},
    types::err::{self, ErrorKind},
};

impl Context {
    /// Evaluates the installed formula on every assignment, in counter order, calling the observer on each row.
    pub fn enumerate(
        &mut self,
        mut observer: impl FnMut(&Assignment, &Evaluation),
    ) -> Result<Report, ErrorKind> {
        if self.formula().is_none() {
            return Err(err::ContextError::NoFormula.into());
        }

        let variable_count = self.variable_count();
        let row_count: usize = 1 << variable_count;

        log::info!(target: targets::ENUMERATION, "Enumerating {row_count} rows over {variable_count} variables");

        let mut assignment = Assignment::zeroed(variable_count);
        let mut true_rows: usize = 0;

        for _ in 0..row_count {
            let evaluation = self.evaluate(&assignment)?;

            if evaluation.value {
                true_rows += 1;
            }

            observer(&assignment, &evaluation);
            assignment.increment();
        }

        let report = match true_rows {
            0 => Report::Contradiction,
            count if count == row_count => Report::Tautology,
            _ => Report::Contingent,
        };

        log::info!(target: targets::ENUMERATION, "{true_rows}/{row_count} rows true: {report}");

        Ok(report)
    }
}
