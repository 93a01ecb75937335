/*!
Expressions --- the representation of propositional formulas.

An [Expression] is a recursive sum of the connectives of propositional logic over named symbols.
Expressions are immutable values: no expression is revised after construction, and every transformation (normalization, inference, etc.) builds fresh expressions.

# Construction

Expressions are built with the smart constructors ([symbol](Expression::symbol), [not_of](Expression::not_of), [and_of](Expression::and_of), [or_of](Expression::or_of), [implies](Expression::implies), [iff](Expression::iff)), or with the operator sugar detailed in [ops].

The constructors for the commutative connectives normalize eagerly:
- Nested operands of the same connective are flattened, so a conjunction never directly contains a conjunction, and likewise for disjunctions.
- Operands are placed in a canonical order and deduplicated.

As a consequence two differently-built but logically-identical conjunctions (or disjunctions, or biconditionals) are *identical values*, and the derived implementations of [PartialEq], [Ord] and [Hash](std::hash::Hash) respect commutativity for free.
In particular, equal expressions always hash equal, and expressions may be used as members of hashed collections without further ceremony.

<div class="warning">
The variants of the enum are public to support exhaustive case analysis by consumers.
Building a variant directly skips flattening, ordering, and deduplication, and in turn breaks the equality contract.
Use the constructors.
</div>

# Example

```rust
# use stoat_kb::structures::expression::Expression;
let p = Expression::symbol("p");
let q = Expression::symbol("q");

let pq = Expression::and_of([p.clone(), q.clone()]);
let qp = Expression::and_of([q.clone(), p.clone()]);

assert_eq!(pq, qp);

let nested = Expression::and_of([p.clone(), Expression::and_of([q.clone(), p.clone()])]);
assert_eq!(nested, pq);
```

# Notes

- Double negation is *not* collapsed at construction.
  `¬¬p` and `p` are distinct values, identified only by [normalization](crate::structures::expression::cnf).
- Implication is positional: `p ⊃ q` and `q ⊃ p` are distinct.
- In the SAT literature symbols are often called 'variables' or 'atoms'.
*/

pub mod cnf;
pub mod form;
pub mod ops;

/// A propositional formula over named symbols.
///
/// See the [module documentation](crate::structures::expression) for the construction contract.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Expression {
    /// An atomic proposition, identified by name alone.
    Symbol(String),

    /// The negation of an expression.
    Not(Box<Expression>),

    /// An n-ary conjunction of distinct expressions, in canonical order.
    And(Vec<Expression>),

    /// An n-ary disjunction of distinct expressions, in canonical order.
    Or(Vec<Expression>),

    /// An implication from a premise to a conclusion.
    Implies(Box<Expression>, Box<Expression>),

    /// A biconditional, with the pair in canonical order.
    Iff(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// An atomic proposition with the given name.
    pub fn symbol(name: impl Into<String>) -> Self {
        Expression::Symbol(name.into())
    }

    /// The negation of `expression`.
    pub fn not_of(expression: Expression) -> Self {
        Expression::Not(Box::new(expression))
    }

    /// The conjunction of the given operands, flattened, deduplicated, and canonically ordered.
    pub fn and_of(operands: impl IntoIterator<Item = Expression>) -> Self {
        Expression::And(canonical_operands(operands, Connective::Conjunction))
    }

    /// The disjunction of the given operands, flattened, deduplicated, and canonically ordered.
    pub fn or_of(operands: impl IntoIterator<Item = Expression>) -> Self {
        Expression::Or(canonical_operands(operands, Connective::Disjunction))
    }

    /// The implication from `premise` to `conclusion`.
    pub fn implies(premise: Expression, conclusion: Expression) -> Self {
        Expression::Implies(Box::new(premise), Box::new(conclusion))
    }

    /// The biconditional of `left` and `right`, with the pair in canonical order.
    pub fn iff(left: Expression, right: Expression) -> Self {
        match left <= right {
            true => Expression::Iff(Box::new(left), Box::new(right)),
            false => Expression::Iff(Box::new(right), Box::new(left)),
        }
    }

    /// A count of the connectives in the expression, i.e. of the non-symbol nodes.
    ///
    /// The count bounds the number of rewrite passes required to normalize the expression, and so is used to fix the default [normalization limit](crate::structures::expression::cnf).
    ///
    /// Traversal is by an explicit stack, so deep expressions do not exhaust the call stack.
    pub fn connective_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(expression) = stack.pop() {
            match expression {
                Expression::Symbol(_) => {}

                Expression::Not(operand) => {
                    count += 1;
                    stack.push(operand);
                }

                Expression::And(operands) | Expression::Or(operands) => {
                    count += 1;
                    stack.extend(operands.iter());
                }

                Expression::Implies(left, right) | Expression::Iff(left, right) => {
                    count += 1;
                    stack.push(left);
                    stack.push(right);
                }
            }
        }

        count
    }
}

/// The two flattenable connectives, used to direct [canonical_operands].
enum Connective {
    Conjunction,
    Disjunction,
}

/// Flattens nested operands of the given connective, then sorts and deduplicates.
fn canonical_operands(
    operands: impl IntoIterator<Item = Expression>,
    connective: Connective,
) -> Vec<Expression> {
    let mut pending: Vec<Expression> = operands.into_iter().collect();
    pending.reverse();

    let mut flat: Vec<Expression> = Vec::with_capacity(pending.len());

    while let Some(operand) = pending.pop() {
        match (&connective, operand) {
            (Connective::Conjunction, Expression::And(inner)) => {
                pending.extend(inner.into_iter().rev());
            }

            (Connective::Disjunction, Expression::Or(inner)) => {
                pending.extend(inner.into_iter().rev());
            }

            (_, other) => flat.push(other),
        }
    }

    flat.sort();
    flat.dedup();
    flat
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Symbol(name) => write!(f, "{name}"),

            Expression::Not(operand) => match operand.as_ref() {
                Expression::Symbol(name) => write!(f, "¬{name}"),
                compound => write!(f, "¬({compound})"),
            },

            Expression::And(operands) => {
                let parts = operands.iter().map(|op| op.to_string()).collect::<Vec<_>>();
                write!(f, "({})", parts.join(" ∧ "))
            }

            Expression::Or(operands) => {
                let parts = operands.iter().map(|op| op.to_string()).collect::<Vec<_>>();
                write!(f, "({})", parts.join(" ∨ "))
            }

            Expression::Implies(premise, conclusion) => write!(f, "({premise} ⊃ {conclusion})"),

            Expression::Iff(left, right) => write!(f, "({left} ≡ {right})"),
        }
    }
}
