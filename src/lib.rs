//! A library for enumerating the truth table of a boolean formula written in postfix notation.
//!
//! ttable takes a formula over up to 26 named propositional variables, written in postfix (reverse Polish) notation, checks the formula is well-formed, and evaluates the formula on every assignment of truth values to its variables.
//!
//! The formula engine is deliberately small.
//! Still, the engine carries the invariants worth caring about --- stack balance, operator arity, and single-result termination --- and the library is written so each invariant is checked exactly where it matters.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! Contexts are built with a [configuration](crate::config), and a formula is installed with [set_formula](crate::context::Context::set_formula).
//! Installation parses the formula, checks it is well-formed, and checks every variable is declared, so a context never holds a formula evaluation could choke on.
//!
//! Useful starting points:
//! - The [structures] to familiarise yourself with tokens, formulas, assignments, and evaluations.
//! - The [procedures] for the validation and evaluation scans, and for enumeration of a full table.
//! - The [types::err](crate::types::err) module for the error taxonomy.
//!
//! # Token alphabet
//!
//! One character per token:
//! - `a`..`z` --- a variable, by position in the alphabet.
//! - `0` / `1` --- a truth constant.
//! - `-` --- unary negation.
//! - `|`, `&`, `#`, `>`, `=` --- or, and, xor, implication, equivalence.
//!
//! No whitespace, no parentheses, nothing else.
//!
//! # Examples
//!
//! + Evaluate a formula on a single assignment.
//!
//! ```rust
//! # use ttable::config::Config;
//! # use ttable::context::Context;
//! # use ttable::structures::assignment::Assignment;
//! let mut the_context = Context::from_config(Config::default());
//! the_context.set_formula("ab&", 2).unwrap();
//!
//! // Variable 'a' reads the *last* bit of the assignment, 'b' the one before, etc.
//! let assignment = Assignment::from_bits(vec![false, true]);
//!
//! let evaluation = the_context.evaluate(&assignment).unwrap();
//! assert!(!evaluation.value);
//! assert_eq!(evaluation.trace, "100");
//! ```
//!
//! + Enumerate a full table and classify the formula.
//!
//! ```rust
//! # use ttable::config::Config;
//! # use ttable::context::Context;
//! # use ttable::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//! the_context.set_formula("ab>ba>&", 2).unwrap();
//!
//! let mut true_rows = 0;
//! let report = the_context
//!     .enumerate(|_assignment, evaluation| {
//!         if evaluation.value {
//!             true_rows += 1;
//!         }
//!     })
//!     .unwrap();
//!
//! assert_eq!(true_rows, 2);
//! assert_eq!(report, Report::Contingent);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with a target for each part of the library.
//! No log implementation is provided --- the targets are listed in [misc::log], and pair well with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - `RUST_LOG=validation …` for the well-formedness scan.
//! - `RUST_LOG=evaluation=trace …` for per-token evaluation detail.

pub mod config;
pub mod context;
pub mod procedures;
pub mod structures;
pub mod types;

pub mod reports;

pub mod misc;
