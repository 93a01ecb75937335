/*!
Predicates on the shape of an expression --- literals, clauses, and conjunctive normal form.

The predicates are used by the [normalizer](crate::structures::expression::cnf) to detect its fixpoint, and independently as well-formedness assertions.

Distinctness of operands holds by construction for expressions built through the smart constructors.
The checks are made all the same, as the predicates are documented over arbitrary expressions.
*/

use std::collections::HashSet;

use super::Expression;

impl Expression {
    /// Whether the expression is a literal, i.e. a symbol or the negation of a symbol.
    pub fn is_literal(&self) -> bool {
        match self {
            Expression::Symbol(_) => true,
            Expression::Not(operand) => matches!(operand.as_ref(), Expression::Symbol(_)),
            _ => false,
        }
    }

    /// Whether the expression is a clause, i.e. a literal or a disjunction of pairwise-distinct literals.
    pub fn is_clause(&self) -> bool {
        match self {
            Expression::Or(operands) => {
                operands.iter().all(Expression::is_literal) && pairwise_distinct(operands)
            }
            literal => literal.is_literal(),
        }
    }

    /// Whether the expression is in conjunctive normal form, i.e. is a conjunction of pairwise-distinct clauses.
    ///
    /// A bare clause does not qualify: the expression must be a conjunction.
    /// For the wider predicate used to detect the normalization fixpoint, see [is_clausal](Expression::is_clausal).
    pub fn is_cnf(&self) -> bool {
        match self {
            Expression::And(operands) => {
                operands.iter().all(Expression::is_clause) && pairwise_distinct(operands)
            }
            _ => false,
        }
    }

    /// Whether the expression is a conjunction of clauses, a clause, or a literal.
    ///
    /// This is the acceptance predicate for the [normalization fixpoint](Expression::cnf).
    /// It is wider than [is_cnf](Expression::is_cnf), as a formula whose conjunctive normal form has a single clause never becomes a conjunction under the rewrite rules.
    pub fn is_clausal(&self) -> bool {
        self.is_cnf() || self.is_clause()
    }
}

fn pairwise_distinct(operands: &[Expression]) -> bool {
    let mut seen = HashSet::with_capacity(operands.len());
    operands.iter().all(|operand| seen.insert(operand))
}
