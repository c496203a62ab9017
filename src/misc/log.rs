/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to parsing a formula string
    pub const PARSE: &str = "parse";

    /// Logs related to the [well-formedness scan](crate::procedures::validate)
    pub const VALIDATION: &str = "validation";

    /// Logs related to [evaluation](crate::procedures::evaluate) of a formula against an assignment
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to [enumeration](crate::procedures::enumerate) of a full table
    pub const ENUMERATION: &str = "enumeration";
}
