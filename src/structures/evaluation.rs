/*!
The result of replaying a formula against an assignment.

An evaluation pairs the truth value of the formula with a trace of the scan: one character per token, in scan order.
- For a variable or constant, the value pushed.
- For negation or a connective, the value computed.

The trace is as long as the formula, so it prints aligned under the formula string.
Evaluation never prints --- the trace is data, and display is the caller's concern.
*/

/// The value of a formula under an assignment, with the per-token trace of the scan.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Evaluation {
    /// The truth value of the formula.
    pub value: bool,

    /// One character per token: `0` or `1`, in scan order.
    pub trace: String,
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.trace, self.value as u8)
    }
}
