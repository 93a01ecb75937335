use std::collections::HashSet;

use stoat_kb::{config::Config, context::Context, structures::expression::Expression};

mod chaining {
    use test_log::test;

    use super::*;

    #[test]
    fn saturation_over_the_school_knowledge_base() {
        let first_grade = Expression::symbol("FirstGrade");
        let child = Expression::symbol("Child");
        let male = Expression::symbol("Male");
        let boy = Expression::symbol("Boy");
        let kindergarten = Expression::symbol("Kindergarten");
        let female = Expression::symbol("Female");
        let girl = Expression::symbol("Girl");

        let mut ctx = Context::from_config(Config::default());

        ctx.add_assertion(first_grade.clone());
        ctx.add_assertion(Expression::implies(first_grade.clone(), child.clone()));
        ctx.add_assertion(Expression::implies(
            Expression::and_of([child.clone(), male]),
            boy,
        ));
        ctx.add_assertion(Expression::implies(kindergarten, child.clone()));
        ctx.add_assertion(Expression::implies(
            Expression::and_of([child.clone(), female.clone()]),
            girl.clone(),
        ));
        ctx.add_assertion(female.clone());

        let inferred = ctx.forward_chaining();

        // Male is never asserted, so neither Boy nor Kindergarten-derived facts appear.
        let expected: HashSet<Expression> =
            HashSet::from([first_grade, child, female, girl]);

        assert_eq!(inferred, expected);
    }

    #[test]
    fn cyclic_implications_terminate() {
        let a = Expression::symbol("a");
        let b = Expression::symbol("b");

        let mut ctx = Context::from_config(Config::default());

        ctx.add_assertion(Expression::implies(a.clone(), b.clone()));
        ctx.add_assertion(Expression::implies(b.clone(), a.clone()));
        ctx.add_assertion(a.clone());

        let inferred = ctx.forward_chaining();

        assert_eq!(inferred, HashSet::from([a, b]));
    }

    #[test]
    fn asserted_conjunctions_become_compound_facts() {
        let a = Expression::symbol("a");
        let b = Expression::symbol("b");
        let both = Expression::and_of([a.clone(), b.clone()]);

        let mut ctx = Context::from_config(Config::default());

        ctx.add_assertion(a.clone());
        ctx.add_assertion(b.clone());
        ctx.add_assertion(both.clone());

        let inferred = ctx.forward_chaining();

        assert_eq!(inferred, HashSet::from([a, b, both]));
    }

    #[test]
    fn unsupported_conjunctions_are_passed_over() {
        let a = Expression::symbol("a");
        let b = Expression::symbol("b");

        let mut ctx = Context::from_config(Config::default());

        // Neither operand is inferable, so the conjunction never becomes a fact.
        ctx.add_assertion(Expression::and_of([a, b]));

        assert!(ctx.forward_chaining().is_empty());
    }

    #[test]
    fn negative_literals_are_facts() {
        let a = Expression::symbol("a");
        let b = Expression::symbol("b");
        let not_a = Expression::not_of(a);

        let mut ctx = Context::from_config(Config::default());

        ctx.add_assertion(not_a.clone());
        ctx.add_assertion(Expression::implies(not_a.clone(), b.clone()));

        let inferred = ctx.forward_chaining();

        assert_eq!(inferred, HashSet::from([not_a, b]));
    }

    #[test]
    fn an_empty_knowledge_base_yields_no_facts() {
        let ctx = Context::from_config(Config::default());

        assert!(ctx.forward_chaining().is_empty());
    }
}
