/*!
Configuration of a context.

All configuration for a context is contained within the context.
Procedures read the relevant options when invoked.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// Derive a normalized copy of the knowledge base before a goal-directed entailment query.
    ///
    /// With the option disabled the query runs over the assertions exactly as given.
    pub preprocessing: ConfigOption<bool>,

    /// The cap on rewrite passes when normalizing an expression to conjunctive normal form.
    ///
    /// A value of `0` derives the cap from the connective count of the expression at hand.
    pub normalization_limit: ConfigOption<usize>,
}

impl Default for Config {
    /// The default configuration mirrors the conventional pipeline: the knowledge base is normalized ahead of entailment queries, with the normalization cap derived per expression.
    fn default() -> Self {
        Config {
            preprocessing: ConfigOption {
                name: "preprocessing",
                min: false,
                max: true,
                value: true,
            },

            normalization_limit: ConfigOption {
                name: "normalization_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },
        }
    }
}
