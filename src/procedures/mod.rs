//! Procedures of the truth-table engine, each a single left-to-right scan.
//!
//! - [validate] decides whether a formula is well-formed, tracking only how many operands are in flight.
//! - [evaluate] replays a formula against one assignment, tracking actual values.
//! - [enumerate] walks every assignment in counter order and evaluates each.
//!
//! Validation is a method on a [formula](crate::structures::formula), as no context is required.
//! Evaluation and enumeration are methods on a [context](crate::context), which guarantees the formula scanned was validated.

pub mod enumerate;
pub mod evaluate;
pub mod validate;
