/*!
A context method to derive a normalized copy of the knowledge base.

Preprocessing replaces each assertion with its conjunctive normal form, in assertion order.
The result is a fresh sequence: the assertions held by the context are never revised.

The pass-cap for each normalization is read from [normalization_limit](crate::config::Config::normalization_limit), with the default of `0` deriving the cap from the connective count of the assertion at hand.
*/

use crate::{
    context::Context,
    misc::log::targets,
    structures::expression::Expression,
    types::err::{self, ErrorKind},
};

impl Context {
    /// A copy of the knowledge base with each assertion normalized to conjunctive normal form.
    pub fn preprocess(&self) -> Result<Vec<Expression>, ErrorKind> {
        let mut normalized = Vec::with_capacity(self.assertions.len());

        for assertion in &self.assertions {
            let limit = match self.config.normalization_limit.value {
                0 => assertion.connective_count() + 1,
                fixed => fixed,
            };

            match assertion.cnf_with_limit(limit) {
                Ok(expression) => {
                    if &expression != assertion {
                        log::trace!(target: targets::NORMALIZATION, "{assertion} normalized to {expression}.");
                    }
                    normalized.push(expression);
                }

                Err(e) => return Err(err::ErrorKind::from(e)),
            }
        }

        Ok(normalized)
    }
}
