/*!
A formula method to decide well-formedness.

See [Formula::validate] for the relevant method.

# Overview

A postfix formula is well-formed exactly when every operator finds the operands it needs, and one value remains when the scan ends.
As the check is independent of which values are pushed, no value stack is kept --- a count of operands in flight is enough:

- A variable or constant puts one operand in flight.
- Negation requires an operand in flight, and leaves the count unchanged.
- A binary connective requires two operands in flight, and nets the count down one.

The scan accepts if the final count is exactly one.
A count of zero is an empty formula, and anything above one is leftover operands --- each as malformed as an operator short of operands.

The scan is a pure function of the token sequence: O(n) time, one pass, no allocation, independent of any assignment.
*/

use crate::{
    misc::log::targets::{self},
    structures::{formula::Formula, token::Token},
    types::err::{self},
};

impl Formula {
    /// Decides whether the formula is well-formed, by a single arity-balance scan.
    pub fn validate(&self) -> Result<(), err::ValidationError> {
        let mut depth: usize = 0;

        for (position, token) in self.tokens().iter().enumerate() {
            match token {
                Token::Variable(_) | Token::Constant(_) => depth += 1,

                Token::Negation => {
                    if depth == 0 {
                        log::info!(target: targets::VALIDATION, "Negation at {position} without an operand");
                        return Err(err::ValidationError::OperandDeficit { position });
                    }
                    // One popped, one pushed.
                }

                Token::Connective(_) => {
                    if depth < 2 {
                        log::info!(target: targets::VALIDATION, "Connective at {position} with {depth} operand(s)");
                        return Err(err::ValidationError::OperandDeficit { position });
                    }
                    depth -= 1;
                }
            }
        }

        match depth {
            1 => Ok(()),

            _ => {
                log::info!(target: targets::VALIDATION, "Scan ended at depth {depth}");
                Err(err::ValidationError::Unbalanced { depth })
            }
        }
    }
}
