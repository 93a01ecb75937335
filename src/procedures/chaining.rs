/*!
A context method for monotonic forward chaining.

# Overview

Forward chaining saturates a set of inferred facts by repeated passes over the knowledge base, until a full pass derives nothing fresh:

- A literal assertion not yet inferred is inferred.
- An implication whose premise is established and whose conclusion is not yet inferred contributes its conclusion.
  A conjunctive premise is established when every conjunct is established; any other premise is established by membership in the inferred set.
- A conjunction asserted at the top level, each of whose operands is already inferred, is itself inferred as a compound fact.

The inferred set only ever grows, and every candidate is a sub-expression of the knowledge base, so the candidate universe is finite and the idle pass detecting the fixpoint is reached after finitely many passes.

This is propositional Horn-style saturation: disjunctive and negated premises are not handled, and assertions of other shapes are passed over.

# Example

```rust
# use stoat_kb::config::Config;
# use stoat_kb::context::Context;
# use stoat_kb::structures::expression::Expression;
let mut the_context = Context::from_config(Config::default());

let wet = Expression::symbol("Wet");
let rain = Expression::symbol("Rain");

the_context.add_assertion(rain.clone());
the_context.add_assertion(Expression::implies(rain.clone(), wet.clone()));

let inferred = the_context.forward_chaining();
assert!(inferred.contains(&rain));
assert!(inferred.contains(&wet));
```
*/

use std::collections::HashSet;

use crate::{context::Context, misc::log::targets, structures::expression::Expression};

impl Context {
    /// The set of facts derivable from the knowledge base by forward chaining.
    pub fn forward_chaining(&self) -> HashSet<Expression> {
        let mut inferred: HashSet<Expression> = HashSet::new();
        let mut fresh_facts = true;

        while fresh_facts {
            fresh_facts = false;

            for rule in &self.assertions {
                match rule {
                    Expression::Implies(premise, conclusion) => {
                        if established(&inferred, premise)
                            && !inferred.contains(conclusion.as_ref())
                        {
                            log::trace!(target: targets::CHAINING, "{conclusion} by {rule}.");
                            inferred.insert(conclusion.as_ref().clone());
                            fresh_facts = true;
                        }
                    }

                    Expression::And(operands) => {
                        if operands.iter().all(|operand| inferred.contains(operand))
                            && !inferred.contains(rule)
                        {
                            log::trace!(target: targets::CHAINING, "Compound fact {rule}.");
                            inferred.insert(rule.clone());
                            fresh_facts = true;
                        }
                    }

                    literal if literal.is_literal() => {
                        if inferred.insert(literal.clone()) {
                            log::trace!(target: targets::CHAINING, "Asserted fact {literal}.");
                            fresh_facts = true;
                        }
                    }

                    _ => {}
                }
            }
        }

        log::info!(target: targets::CHAINING, "Saturated with {} facts.", inferred.len());
        inferred
    }
}

/// Whether a premise is established relative to the inferred set.
///
/// Conjunctive premises are established conjunct-by-conjunct; all else by membership.
fn established(inferred: &HashSet<Expression>, premise: &Expression) -> bool {
    match premise {
        Expression::And(operands) => operands
            .iter()
            .all(|operand| established(inferred, operand)),

        _ => inferred.contains(premise),
    }
}
