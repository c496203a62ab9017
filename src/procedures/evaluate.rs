/*!
A context method to evaluate the installed formula against one assignment.

See [Context::evaluate] for the relevant method.

# Overview

Evaluation replays the token sequence against a fresh value stack:

- A variable pushes its value under the assignment, a constant pushes itself.
- Negation pops one value and pushes the complement.
- A binary connective pops `operand2` then `operand1` --- reverse push order, so the operator's left-hand operand is the one pushed earlier --- and pushes the connective applied to the pair.

When the scan ends, the single remaining value is the value of the formula.

Alongside the value, the scan builds a [trace](crate::structures::evaluation): one character per token, the value pushed or computed as the token was consumed.

# Variable order

A variable reads the assignment through [value_of_variable](crate::structures::assignment::Assignment::value_of_variable), which maps variable `a` to the *highest* counter index.
The mapping is deliberately reversed against the counter so the printed column of each variable lines up with the value evaluation reads.
It would be easy to 'fix' this by reading the counter directly --- the result would be a table whose columns are transposed against its results.

# Errors

A formula only enters a context after [validation](crate::procedures::validate), and on a validated formula no check below can fire.
The checks stay anyway, as each is cheap against a scan, and an [EvaluationError](crate::types::err::EvaluationError) marks a contract bug to surface, never a user error to recover from.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{assignment::Assignment, evaluation::Evaluation, token::Token},
    types::err::{self, ErrorKind},
};

impl Context {
    /// Evaluates the installed formula against the given assignment.
    pub fn evaluate(&mut self, assignment: &Assignment) -> Result<Evaluation, ErrorKind> {
        let Some(formula) = self.formula() else {
            return Err(err::ContextError::NoFormula.into());
        };
        let token_count = formula.token_count();

        let mut stack: Vec<bool> = Vec::with_capacity(token_count);
        let mut trace = String::with_capacity(token_count);

        for (position, token) in formula.tokens().iter().enumerate() {
            let pushed = match token {
                Token::Variable(variable) => match assignment.value_of_variable(*variable) {
                    Some(value) => value,

                    None => {
                        return Err(err::EvaluationError::VariableOutOfRange {
                            variable: (b'a' + variable) as char,
                        }
                        .into());
                    }
                },

                Token::Constant(value) => *value,

                Token::Negation => {
                    let Some(operand) = stack.pop() else {
                        return Err(err::EvaluationError::StackUnderflow { position }.into());
                    };
                    !operand
                }

                Token::Connective(connective) => {
                    let Some(operand2) = stack.pop() else {
                        return Err(err::EvaluationError::StackUnderflow { position }.into());
                    };
                    let Some(operand1) = stack.pop() else {
                        return Err(err::EvaluationError::StackUnderflow { position }.into());
                    };
                    connective.apply(operand1, operand2)
                }
            };

            stack.push(pushed);
            trace.push(if pushed { '1' } else { '0' });
        }

        self.counters.tokens_scanned += token_count;

        if stack.len() != 1 {
            return Err(err::EvaluationError::StackImbalance { depth: stack.len() }.into());
        }
        let value = stack.pop().expect("a value remains after the balance check");

        log::trace!(target: targets::EVALUATION, "{assignment} ⊨ {} ({trace})", value as u8);

        self.counters.rows_evaluated += 1;

        Ok(Evaluation { value, trace })
    }
}
