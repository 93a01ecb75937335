/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [normalization](crate::structures::expression::cnf)
    pub const NORMALIZATION: &str = "normalization";

    /// Logs related to [forward chaining](crate::procedures::chaining)
    pub const CHAINING: &str = "chaining";

    /// Logs related to [entailment](crate::procedures::entail)
    pub const ENTAILMENT: &str = "entailment";

    /// Logs related to the [clause-file parser](crate::builder)
    pub const PARSER: &str = "parser";
}
