/*!
Reports for the context.
*/

/// High-level reports regarding a full enumeration.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula is true on every assignment.
    Tautology,

    /// The formula is false on every assignment.
    Contradiction,

    /// The formula is true on some assignments and false on others.
    Contingent,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tautology => write!(f, "Tautology"),
            Self::Contradiction => write!(f, "Contradiction"),
            Self::Contingent => write!(f, "Contingent"),
        }
    }
}
