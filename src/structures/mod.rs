//! Structures which represent the abstract elements of a truth table --- tokens, formulas, assignments, and evaluations.

pub mod assignment;
pub mod evaluation;
pub mod formula;
pub mod token;
