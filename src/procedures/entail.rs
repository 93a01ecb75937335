/*!
A context method for goal-directed entailment.

# Overview

The query maintains an ordered `solved` sequence of expressions, a growing record of what has been derived.
Each outer iteration:

1. If every goal is covered by the record, the answer is [YES](crate::reports::Report::Entailed).
   A conjunctive goal is covered when each conjunct is covered, a negated goal when the negated expression is a member of the record, and any other goal by direct membership.
2. Otherwise the knowledge base is scanned once, in assertion order, for the first clause able to make progress:
   - A bare symbol not yet solved is solved.
   - An implication whose premise is a solved symbol and whose conclusion is unsolved contributes its conclusion.
   - A disjunction of literals with *exactly one* positive literal, every negated literal resting on a solved symbol, and the positive literal unsolved, contributes its positive literal.
     This is unit propagation on a Horn clause in clausal form.
3. If the scan makes no progress, the answer is [NO](crate::reports::Report::NotEntailed).

Each successful iteration appends one previously-absent expression to the record, and every candidate is drawn from the finite universe of sub-expressions of the knowledge base, so the loop terminates.

# Limitations

The procedure is sound for Horn-shaped knowledge bases.
- Conjunctions are not resolved at this stage: a conjunctive assertion never contributes to the record, and never produces a false YES.
- Disjunctions with more than one positive literal are likewise never resolved.

Both gaps are deliberate and stable: such clauses always yield no progress, rather than behaviour which varies between runs.

# Preprocessing

With [preprocessing](crate::config::Config::preprocessing) enabled (the default) the scan runs over a [normalized copy](crate::procedures::preprocess) of the knowledge base, so implications with compound premises take part as clauses.
The assertions of the context are never revised.

# Example

```rust
# use stoat_kb::config::Config;
# use stoat_kb::context::Context;
# use stoat_kb::reports::Report;
# use stoat_kb::structures::expression::Expression;
let mut the_context = Context::from_config(Config::default());

let a = Expression::symbol("a");
let b = Expression::symbol("b");

the_context.add_assertion(a.clone());
the_context.add_assertion(Expression::not_of(a));

assert_eq!(the_context.entails(&[b]), Ok(Report::NotEntailed));
```
*/

use crate::{
    context::Context, misc::log::targets, reports::Report, structures::expression::Expression,
    types::err::ErrorKind,
};

impl Context {
    /// Whether the knowledge base entails every goal.
    pub fn entails(&self, goals: &[Expression]) -> Result<Report, ErrorKind> {
        let assertions = match self.config.preprocessing.value {
            true => self.preprocess()?,
            false => self.assertions.clone(),
        };

        let mut solved: Vec<Expression> = Vec::new();

        loop {
            if goals.iter().all(|goal| covered(&solved, goal)) {
                log::info!(target: targets::ENTAILMENT, "All goals covered with {} steps.", solved.len());
                return Ok(Report::Entailed);
            }

            let mut progress = false;

            'scan: for clause in &assertions {
                match clause {
                    Expression::Symbol(_) => {
                        if !solved.contains(clause) {
                            log::trace!(target: targets::ENTAILMENT, "Solved {clause}.");
                            solved.push(clause.clone());
                            progress = true;
                            break 'scan;
                        }
                    }

                    Expression::Implies(premise, conclusion) => {
                        if matches!(premise.as_ref(), Expression::Symbol(_))
                            && solved.contains(premise)
                            && !solved.contains(conclusion)
                        {
                            log::trace!(target: targets::ENTAILMENT, "Solved {conclusion} by {clause}.");
                            solved.push(conclusion.as_ref().clone());
                            progress = true;
                            break 'scan;
                        }
                    }

                    Expression::Or(literals) => {
                        if let Some(unit) = unit_consequence(&solved, literals) {
                            log::trace!(target: targets::ENTAILMENT, "Solved {unit} by unit propagation on {clause}.");
                            solved.push(unit.clone());
                            progress = true;
                            break 'scan;
                        }
                    }

                    // Conjunctions are not resolved at this stage.
                    _ => {}
                }
            }

            if !progress {
                log::info!(target: targets::ENTAILMENT, "No clause makes progress after {} steps.", solved.len());
                return Ok(Report::NotEntailed);
            }
        }
    }
}

/// Whether a goal is covered by the solved record.
fn covered(solved: &[Expression], goal: &Expression) -> bool {
    match goal {
        Expression::And(operands) => operands.iter().all(|operand| covered(solved, operand)),

        Expression::Not(negated) => solved.contains(negated),

        _ => solved.contains(goal),
    }
}

/// The unsolved positive literal asserted by a clause on the solved record, if one exists.
///
/// Returns Some(*l*) iff *l* is the unique positive literal of the clause, *l* is unsolved, every other operand is the negation of a solved symbol, and no operand falls outside the literal shapes.
fn unit_consequence<'c>(
    solved: &[Expression],
    literals: &'c [Expression],
) -> Option<&'c Expression> {
    let mut positive: Option<&Expression> = None;

    for literal in literals {
        match literal {
            Expression::Symbol(_) => match positive {
                // A second positive literal: the clause is outside the contract.
                Some(_) => return None,
                None => positive = Some(literal),
            },

            Expression::Not(negated) => match negated.as_ref() {
                Expression::Symbol(_) if solved.contains(negated) => continue,
                _ => return None,
            },

            _ => return None,
        }
    }

    match positive {
        Some(literal) if !solved.contains(literal) => Some(literal),
        _ => None,
    }
}
