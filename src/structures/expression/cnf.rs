/*!
Normalization of expressions to conjunctive normal form.

# Overview

Normalization is split in two:

- [to_cnf](Expression::to_cnf) makes a *single* pass of the classic rewrite system:
  double negations are eliminated, negations are pushed through conjunctions and disjunctions (De Morgan), implications and biconditionals are expanded, and disjunctions are distributed over the conjunctions they contain.
- [cnf](Expression::cnf) applies [to_cnf](Expression::to_cnf) to a *fixpoint*, as a single pass may leave a conjunction nested under a disjunction:
  distribution exposes fresh disjunctions whose operands were normalized before the distribution took place, and these are only revisited on the next pass.

Each pass either eliminates a connective or pushes a conjunction strictly outward relative to its enclosing disjunction, so the number of passes is bounded by the connective count of the formula.
The bound is enforced with an explicit cap rather than trusting the argument: exceeding the cap signals a regression in the rewrite rules and surfaces as a [LimitExceeded](NormalizationError::LimitExceeded) error.

# Implementation

The rewrite pass walks the expression with an explicit work stack, pairing each sub-expression with the polarity of the enclosing negations.
Rewrites of negated connectives then fall out of pushing operands with flipped polarity, and arbitrarily deep formulas cannot exhaust the call stack.

# Example

```rust
# use stoat_kb::structures::expression::Expression;
let p = Expression::symbol("p");
let q = Expression::symbol("q");

let negated_conjunction = Expression::not_of(Expression::and_of([p.clone(), q.clone()]));

let expected = Expression::or_of([Expression::not_of(p), Expression::not_of(q)]);
assert_eq!(negated_conjunction.to_cnf(), expected);
```
*/

use crate::{misc::log::targets, types::err::NormalizationError};

use super::Expression;

/// An item of the rewrite work stack.
///
/// `Conjoin` and `Disjoin` combine the topmost `arity` rewritten results into a fresh connective, with `Disjoin` additionally applying distribution.
enum Frame<'e> {
    Rewrite { expression: &'e Expression, negated: bool },
    Conjoin { arity: usize },
    Disjoin { arity: usize },
}

impl Expression {
    /// A single pass of the rewrite system over the expression.
    ///
    /// The pass is total and infallible, but its result need not be in conjunctive normal form: see the [module documentation](crate::structures::expression::cnf) for the fixpoint.
    pub fn to_cnf(&self) -> Expression {
        let mut stack: Vec<Frame> = vec![Frame::Rewrite {
            expression: self,
            negated: false,
        }];
        let mut results: Vec<Expression> = Vec::new();

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Rewrite {
                    expression,
                    negated,
                } => match (expression, negated) {
                    // A symbol is a literal, negated or not.
                    (Expression::Symbol(_), false) => results.push(expression.clone()),

                    (Expression::Symbol(_), true) => {
                        results.push(Expression::not_of(expression.clone()))
                    }

                    // Double negation elimination, by flipping the polarity.
                    (Expression::Not(operand), negated) => stack.push(Frame::Rewrite {
                        expression: operand,
                        negated: !negated,
                    }),

                    (Expression::And(operands), false) => {
                        stack.push(Frame::Conjoin {
                            arity: operands.len(),
                        });
                        for operand in operands {
                            stack.push(Frame::Rewrite {
                                expression: operand,
                                negated: false,
                            });
                        }
                    }

                    // ¬(a ∧ b ∧ …) → ¬a ∨ ¬b ∨ …
                    (Expression::And(operands), true) => {
                        stack.push(Frame::Disjoin {
                            arity: operands.len(),
                        });
                        for operand in operands {
                            stack.push(Frame::Rewrite {
                                expression: operand,
                                negated: true,
                            });
                        }
                    }

                    (Expression::Or(operands), false) => {
                        stack.push(Frame::Disjoin {
                            arity: operands.len(),
                        });
                        for operand in operands {
                            stack.push(Frame::Rewrite {
                                expression: operand,
                                negated: false,
                            });
                        }
                    }

                    // ¬(a ∨ b ∨ …) → ¬a ∧ ¬b ∧ …
                    (Expression::Or(operands), true) => {
                        stack.push(Frame::Conjoin {
                            arity: operands.len(),
                        });
                        for operand in operands {
                            stack.push(Frame::Rewrite {
                                expression: operand,
                                negated: true,
                            });
                        }
                    }

                    // p ⊃ c → ¬p ∨ c
                    (Expression::Implies(premise, conclusion), false) => {
                        stack.push(Frame::Disjoin { arity: 2 });
                        stack.push(Frame::Rewrite {
                            expression: conclusion,
                            negated: false,
                        });
                        stack.push(Frame::Rewrite {
                            expression: premise,
                            negated: true,
                        });
                    }

                    // ¬(p ⊃ c) → p ∧ ¬c
                    (Expression::Implies(premise, conclusion), true) => {
                        stack.push(Frame::Conjoin { arity: 2 });
                        stack.push(Frame::Rewrite {
                            expression: conclusion,
                            negated: true,
                        });
                        stack.push(Frame::Rewrite {
                            expression: premise,
                            negated: false,
                        });
                    }

                    // l ≡ r → (l ⊃ r) ∧ (r ⊃ l)
                    (Expression::Iff(left, right), false) => {
                        stack.push(Frame::Conjoin { arity: 2 });

                        stack.push(Frame::Disjoin { arity: 2 });
                        stack.push(Frame::Rewrite {
                            expression: left,
                            negated: false,
                        });
                        stack.push(Frame::Rewrite {
                            expression: right,
                            negated: true,
                        });

                        stack.push(Frame::Disjoin { arity: 2 });
                        stack.push(Frame::Rewrite {
                            expression: right,
                            negated: false,
                        });
                        stack.push(Frame::Rewrite {
                            expression: left,
                            negated: true,
                        });
                    }

                    // ¬(l ≡ r), as the negation of the expanded biconditional.
                    (Expression::Iff(left, right), true) => {
                        stack.push(Frame::Disjoin { arity: 2 });

                        stack.push(Frame::Conjoin { arity: 2 });
                        stack.push(Frame::Rewrite {
                            expression: left,
                            negated: true,
                        });
                        stack.push(Frame::Rewrite {
                            expression: right,
                            negated: false,
                        });

                        stack.push(Frame::Conjoin { arity: 2 });
                        stack.push(Frame::Rewrite {
                            expression: right,
                            negated: true,
                        });
                        stack.push(Frame::Rewrite {
                            expression: left,
                            negated: false,
                        });
                    }
                },

                Frame::Conjoin { arity } => {
                    let operands = results.split_off(results.len() - arity);
                    results.push(Expression::and_of(operands));
                }

                Frame::Disjoin { arity } => {
                    let operands = results.split_off(results.len() - arity);
                    results.push(distribute(Expression::or_of(operands)));
                }
            }
        }

        debug_assert_eq!(results.len(), 1);
        results.pop().expect("corrupt rewrite stack")
    }

    /// The expression normalized to a fixpoint of [to_cnf](Expression::to_cnf), with the iteration cap derived from the expression's connective count.
    ///
    /// Returns the normalized expression, which satisfies [is_clausal](Expression::is_clausal), or a [NormalizationError] if the cap is exceeded.
    pub fn cnf(&self) -> Result<Expression, NormalizationError> {
        self.cnf_with_limit(self.connective_count() + 1)
    }

    /// As [cnf](Expression::cnf), with an explicit cap on the number of rewrite passes.
    pub fn cnf_with_limit(&self, limit: usize) -> Result<Expression, NormalizationError> {
        let mut expression = self.clone();
        let mut passes = 0;

        while !expression.is_clausal() {
            if passes == limit {
                log::error!(target: targets::NORMALIZATION, "No fixpoint after {limit} passes: {expression}");
                return Err(NormalizationError::LimitExceeded(limit));
            }

            expression = expression.to_cnf();
            passes += 1;
            log::trace!(target: targets::NORMALIZATION, "Pass {passes}: {expression}");
        }

        Ok(expression)
    }
}

/// Distributes a disjunction over the first conjunction among its operands, if any.
///
/// `a ∨ (b ∧ c) ∨ d` becomes `(b ∨ a ∨ d) ∧ (c ∨ a ∨ d)`.
/// Conjunctions among the *remaining* operands are left in place, to be distributed on a later pass.
/// Expressions other than disjunctions pass through untouched.
fn distribute(expression: Expression) -> Expression {
    match expression {
        Expression::Or(operands) => {
            match operands
                .iter()
                .position(|operand| matches!(operand, Expression::And(_)))
            {
                None => Expression::Or(operands),

                Some(index) => {
                    let mut rest = operands;
                    let conjunction = rest.remove(index);

                    let Expression::And(members) = conjunction else {
                        unreachable!("position reported a conjunction");
                    };

                    Expression::and_of(members.into_iter().map(|member| {
                        Expression::or_of(std::iter::once(member).chain(rest.iter().cloned()))
                    }))
                }
            }
        }

        other => other,
    }
}
