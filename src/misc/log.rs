/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, at trace level for each token or node and at debug level for each formula.

Note, no log implementation is provided.
The cli installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `logging` feature.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [tokenizing](crate::procedures::tokenize)
    pub const TOKENIZE: &str = "tokenize";

    /// Logs related to [well formed checks](crate::procedures::well_formed)
    pub const WELL_FORMED: &str = "well_formed";

    /// Logs related to [building trees](crate::procedures::build)
    pub const TREE: &str = "tree";

    /// Logs related to [evaluation](crate::procedures::evaluate)
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to [truth tables](crate::table)
    pub const TRUTH_TABLE: &str = "truth_table";
}
