use stoat_kb::{structures::expression::Expression, types::err::NormalizationError};

mod single_pass {
    use super::*;

    #[test]
    fn symbols_and_literals_are_fixed() {
        let a = Expression::symbol("a");
        let negated = Expression::not_of(a.clone());

        assert_eq!(a.to_cnf(), a);
        assert_eq!(negated.to_cnf(), negated);
    }

    #[test]
    fn double_negation_eliminates() {
        let a = Expression::symbol("a");

        let doubled = Expression::not_of(Expression::not_of(a.clone()));
        assert_eq!(doubled.to_cnf(), a);

        let quadrupled = Expression::not_of(Expression::not_of(doubled));
        assert_eq!(quadrupled.to_cnf(), a);
    }

    #[test]
    fn negated_conjunction_by_de_morgan() {
        let a = Expression::symbol("a");
        let b = Expression::symbol("b");

        let negated = Expression::not_of(Expression::and_of([a.clone(), b.clone()]));

        assert_eq!(
            negated.to_cnf(),
            Expression::or_of([Expression::not_of(a), Expression::not_of(b)])
        );
    }

    #[test]
    fn negated_disjunction_by_de_morgan() {
        let a = Expression::symbol("a");
        let b = Expression::symbol("b");

        let negated = Expression::not_of(Expression::or_of([a.clone(), b.clone()]));

        assert_eq!(
            negated.to_cnf(),
            Expression::and_of([Expression::not_of(a), Expression::not_of(b)])
        );
    }

    #[test]
    fn implication_as_disjunction() {
        let p = Expression::symbol("p");
        let q = Expression::symbol("q");

        let implication = Expression::implies(p.clone(), q.clone());

        assert_eq!(
            implication.to_cnf(),
            Expression::or_of([Expression::not_of(p), q])
        );
    }

    #[test]
    fn negated_implication_as_conjunction() {
        let p = Expression::symbol("p");
        let q = Expression::symbol("q");

        let negated = Expression::not_of(Expression::implies(p.clone(), q.clone()));

        assert_eq!(
            negated.to_cnf(),
            Expression::and_of([p, Expression::not_of(q)])
        );
    }

    #[test]
    fn biconditional_as_paired_implications() {
        let a = Expression::symbol("a");
        let b = Expression::symbol("b");

        let biconditional = Expression::iff(a.clone(), b.clone());

        let expected = Expression::and_of([
            Expression::or_of([Expression::not_of(a.clone()), b.clone()]),
            Expression::or_of([a, Expression::not_of(b)]),
        ]);

        assert_eq!(biconditional.to_cnf(), expected);
    }

    #[test]
    fn disjunction_distributes_over_conjunction() {
        let a = Expression::symbol("a");
        let b = Expression::symbol("b");
        let c = Expression::symbol("c");

        let formula = Expression::or_of([
            a.clone(),
            Expression::and_of([b.clone(), c.clone()]),
        ]);

        let expected = Expression::and_of([
            Expression::or_of([a.clone(), b]),
            Expression::or_of([a, c]),
        ]);

        assert_eq!(formula.to_cnf(), expected);
    }

    #[test]
    fn idempotent_on_normal_forms() {
        let a = Expression::symbol("a");
        let b = Expression::symbol("b");
        let c = Expression::symbol("c");

        let formula = Expression::and_of([
            Expression::or_of([a, Expression::not_of(b)]),
            c,
        ]);

        assert!(formula.is_cnf());
        assert_eq!(formula.to_cnf(), formula);
    }
}

mod fixpoint {
    use test_log::test;

    use super::*;

    #[test]
    fn normal_forms_require_no_passes() {
        let a = Expression::symbol("a");
        let b = Expression::symbol("b");

        let formula = Expression::and_of([Expression::or_of([a.clone(), b.clone()]), b]);

        assert_eq!(formula.cnf(), Ok(formula.clone()));
        assert_eq!(a.cnf(), Ok(a));
    }

    #[test]
    fn negated_biconditional_requires_a_second_pass() {
        let a = Expression::symbol("a");
        let b = Expression::symbol("b");

        let negated = Expression::not_of(Expression::iff(a.clone(), b.clone()));

        // A first pass leaves a conjunction under each fresh disjunction.
        assert!(!negated.to_cnf().is_clausal());

        let expected = Expression::and_of([
            Expression::or_of([a.clone(), b.clone()]),
            Expression::or_of([a.clone(), Expression::not_of(a.clone())]),
            Expression::or_of([b.clone(), Expression::not_of(b.clone())]),
            Expression::or_of([Expression::not_of(a), Expression::not_of(b)]),
        ]);

        assert_eq!(negated.cnf(), Ok(expected));
    }

    #[test]
    fn stacked_conjunctions_distribute_pass_by_pass() {
        let symbols: Vec<Expression> = ["a", "b", "c", "d", "e", "f"]
            .into_iter()
            .map(Expression::symbol)
            .collect();

        let formula = Expression::or_of([
            Expression::and_of([symbols[0].clone(), symbols[1].clone()]),
            Expression::and_of([symbols[2].clone(), symbols[3].clone()]),
            Expression::and_of([symbols[4].clone(), symbols[5].clone()]),
        ]);

        let normalized = formula.cnf().expect("the cap covers each conjunction");

        assert!(normalized.is_cnf());

        // Eight clauses: one per choice of a disjunct from each conjunction.
        match &normalized {
            Expression::And(clauses) => assert_eq!(clauses.len(), 8),
            _ => panic!("expected a conjunction"),
        }
    }

    #[test]
    fn deeply_nested_biconditional_converges() {
        let a = Expression::symbol("A");
        let b = Expression::symbol("B");
        let c = Expression::symbol("C");
        let d = Expression::symbol("D");
        let e = Expression::symbol("E");

        let formula = Expression::iff(
            a.clone(),
            Expression::implies(
                Expression::or_of([
                    Expression::and_of([
                        b.clone(),
                        Expression::or_of([
                            d.clone(),
                            Expression::and_of([
                                b.clone(),
                                Expression::or_of([
                                    c.clone(),
                                    Expression::or_of([a.clone(), b.clone()]),
                                ]),
                            ]),
                        ]),
                    ]),
                    e.clone(),
                ]),
                Expression::not_of(c.clone()),
            ),
        );

        let normalized = formula.cnf().expect("convergence within the connective bound");
        assert!(normalized.is_cnf());
    }

    #[test]
    fn an_exhausted_cap_is_an_error() {
        let p = Expression::symbol("p");
        let q = Expression::symbol("q");

        let implication = Expression::implies(p, q);

        assert_eq!(
            implication.cnf_with_limit(0),
            Err(NormalizationError::LimitExceeded(0))
        );
    }
}
