use std::collections::HashSet;

use ttable::{
    config::Config,
    context::Context,
    reports::Report,
    structures::assignment::Assignment,
    types::err::{self, ErrorKind},
};

fn context_with(source: &str, variable_count: usize) -> Context {
    let mut ctx = Context::from_config(Config::default());
    ctx.set_formula(source, variable_count)
        .expect("the formula installs");
    ctx
}

mod coverage {
    use super::*;

    #[test]
    fn every_assignment_once() {
        let mut ctx = context_with("ab&c|", 3);

        let mut seen: HashSet<Vec<bool>> = HashSet::new();
        let mut rows = 0;

        ctx.enumerate(|assignment, _evaluation| {
            rows += 1;
            assert!(seen.insert(assignment.printed_bits().collect()));
        })
        .unwrap();

        assert_eq!(rows, 8);
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn counter_order() {
        let mut ctx = context_with("ab|", 2);

        let mut row = 0;
        ctx.enumerate(|assignment, _evaluation| {
            // Row i is the counter at i, index 0 least significant.
            for index in 0..assignment.variable_count() {
                assert_eq!(assignment.value_of(index), Some((row >> index) & 1 == 1));
            }
            row += 1;
        })
        .unwrap();
    }

    #[test]
    fn first_row_all_zero() {
        let mut ctx = context_with("a-", 1);

        let mut first = None;
        ctx.enumerate(|assignment, evaluation| {
            if first.is_none() {
                first = Some((assignment.clone(), evaluation.clone()));
            }
        })
        .unwrap();

        let (assignment, evaluation) = first.unwrap();
        assert_eq!(assignment, Assignment::zeroed(1));
        assert!(evaluation.value);
    }
}

mod tables {
    use super::*;

    fn results_of(source: &str, variable_count: usize) -> Vec<bool> {
        let mut ctx = context_with(source, variable_count);
        let mut results = Vec::new();
        ctx.enumerate(|_assignment, evaluation| results.push(evaluation.value))
            .unwrap();
        results
    }

    #[test]
    fn conjunction() {
        // In counter order: a b = 00, 01, 10, 11 read high bit to low.
        assert_eq!(results_of("ab&", 2), vec![false, false, false, true]);
    }

    #[test]
    fn disjunction() {
        assert_eq!(results_of("ab|", 2), vec![false, true, true, true]);
    }

    #[test]
    fn implication() {
        assert_eq!(results_of("ab>", 2), vec![true, true, false, true]);
    }

    #[test]
    fn negation() {
        assert_eq!(results_of("a-", 1), vec![true, false]);
    }
}

mod reports {
    use super::*;

    fn report_of(source: &str, variable_count: usize) -> Report {
        context_with(source, variable_count)
            .enumerate(|_, _| {})
            .unwrap()
    }

    #[test]
    fn tautology() {
        assert_eq!(report_of("aa=", 1), Report::Tautology);
        assert_eq!(report_of("aa-|", 1), Report::Tautology);
        assert_eq!(report_of("1", 1), Report::Tautology);
    }

    #[test]
    fn contradiction() {
        assert_eq!(report_of("aa#", 1), Report::Contradiction);
        assert_eq!(report_of("aa-&", 1), Report::Contradiction);
    }

    #[test]
    fn contingent() {
        assert_eq!(report_of("ab&", 2), Report::Contingent);
        assert_eq!(report_of("a", 1), Report::Contingent);
    }
}

mod counters {
    use super::*;

    #[test]
    fn rows_and_tokens() {
        let mut ctx = context_with("ab&", 2);
        ctx.enumerate(|_, _| {}).unwrap();

        assert_eq!(ctx.counters.rows_evaluated, 4);
        assert_eq!(ctx.counters.tokens_scanned, 12);
    }
}

mod guards {
    use super::*;

    #[test]
    fn no_formula() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.enumerate(|_, _| {}),
            Err(ErrorKind::Context(err::ContextError::NoFormula)),
        );
    }
}
