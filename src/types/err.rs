//! Error types used in the library.
//!
//! - Parse and validation errors are expected, as these reject bad input.
//! - Evaluation errors are defensive --- a formula only enters a context after validation, so an evaluation error signals a contract bug rather than bad input.
//!
//! Names of the error enums overlap with corresponding modules.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The general error enum, wrapping each specific error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Context(ContextError),
    Evaluation(EvaluationError),
    Parse(ParseError),
    Validation(ValidationError),
}

/// Noted errors when installing a formula in a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContextError {
    /// The requested variable count falls outside the configured range.
    VariableCountOutOfRange { count: usize },

    /// The formula mentions a variable beyond the declared count.
    UndeclaredVariable { variable: char },

    /// Evaluation or enumeration was requested of a context without a formula.
    NoFormula,
}

impl From<ContextError> for ErrorKind {
    fn from(e: ContextError) -> Self {
        ErrorKind::Context(e)
    }
}

/// Noted errors during evaluation of a formula against an assignment.
///
/// Each of these is unreachable for a formula which passed validation, and so each signals a validator/evaluator contract mismatch rather than a user error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// An operator at the given token index found too few values on the stack.
    StackUnderflow { position: usize },

    /// The scan ended with other than exactly one value on the stack.
    StackImbalance { depth: usize },

    /// A variable token with no value under the given assignment.
    VariableOutOfRange { variable: char },
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

/// Errors during parsing of a formula string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A character outside the token alphabet, with its index in the string.
    InvalidCharacter { character: char, position: usize },

    /// The formula string is longer than the configured limit.
    FormulaTooLong { length: usize, limit: usize },

    /// An empty string, where some non-empty string was required.
    Empty,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Arity imbalances found by the well-formedness scan --- in short, malformed formulas.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// Negation or a binary connective at the given token index required more operands than were in flight.
    OperandDeficit { position: usize },

    /// The scan ended with other than exactly one operand in flight.
    ///
    /// A depth of zero is an empty formula, anything above one is leftover operands.
    Unbalanced { depth: usize },
}

impl From<ValidationError> for ErrorKind {
    fn from(e: ValidationError) -> Self {
        ErrorKind::Validation(e)
    }
}
