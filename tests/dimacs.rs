use std::io::Write;

use stoat_kb::{
    config::Config,
    context::Context,
    structures::expression::Expression,
    types::err::{ErrorKind, ParseError},
};

mod reading {
    use super::*;

    #[test]
    fn a_clause_line_loads_as_a_disjunction_of_literals() {
        let mut ctx = Context::from_config(Config::default());

        let mut file = vec![];
        let _ = file.write(b"1 -2 0\n");

        assert!(ctx.read_dimacs(file.as_slice()).is_ok());

        let expected = Expression::or_of([
            Expression::symbol("1"),
            Expression::not_of(Expression::symbol("2")),
        ]);

        assert_eq!(ctx.assertions, vec![expected]);
    }

    #[test]
    fn a_single_literal_line_loads_as_the_bare_literal() {
        let mut ctx = Context::from_config(Config::default());

        let mut file = vec![];
        let _ = file.write(b"3 0\n-4 0\n");

        assert!(ctx.read_dimacs(file.as_slice()).is_ok());

        assert_eq!(
            ctx.assertions,
            vec![
                Expression::symbol("3"),
                Expression::not_of(Expression::symbol("4")),
            ]
        );
    }

    #[test]
    fn comment_and_problem_lines_are_ignored() {
        let mut ctx = Context::from_config(Config::default());

        let mut file = vec![];
        let _ = file.write(
            b"c A comment.
p cnf 2 1
1 2 0
",
        );

        let info = ctx.read_dimacs(file.as_slice()).unwrap();

        assert_eq!(info.clauses_added, 1);
        assert_eq!(ctx.assertion_count(), 1);
    }

    #[test]
    fn a_percent_line_ends_the_read() {
        let mut ctx = Context::from_config(Config::default());

        let mut file = vec![];
        let _ = file.write(
            b"1 0
%
2 0
",
        );

        let info = ctx.read_dimacs(file.as_slice()).unwrap();

        assert_eq!(info.clauses_added, 1);
        assert_eq!(ctx.assertions, vec![Expression::symbol("1")]);
    }

    #[test]
    fn repeated_clauses_are_skipped_regardless_of_literal_order() {
        let mut ctx = Context::from_config(Config::default());

        let mut file = vec![];
        let _ = file.write(
            b"1 2 0
2 1 0
",
        );

        let info = ctx.read_dimacs(file.as_slice()).unwrap();

        assert_eq!(info.clauses_added, 1);
        assert_eq!(info.clauses_skipped, 1);
        assert_eq!(ctx.assertion_count(), 1);
    }

    #[test]
    fn repeated_literals_within_a_clause_collapse() {
        let mut ctx = Context::from_config(Config::default());

        let mut file = vec![];
        let _ = file.write(b"1 2 1 0\n");

        assert!(ctx.read_dimacs(file.as_slice()).is_ok());

        let expected = Expression::or_of([Expression::symbol("1"), Expression::symbol("2")]);
        assert_eq!(ctx.assertions, vec![expected]);
    }

    #[test]
    fn every_distinct_symbol_is_recorded() {
        let mut ctx = Context::from_config(Config::default());

        let mut file = vec![];
        let _ = file.write(
            b"1 -2 0
2 3 0
",
        );

        let info = ctx.read_dimacs(file.as_slice()).unwrap();

        assert_eq!(info.symbols.len(), 3);
        assert!(info.symbols.contains(&Expression::symbol("2")));
    }
}

mod malformed {
    use super::*;

    #[test]
    fn a_missing_terminator_is_an_error() {
        let mut ctx = Context::from_config(Config::default());

        let mut file = vec![];
        let _ = file.write(b"1 2\n");

        assert_eq!(
            ctx.read_dimacs(file.as_slice()),
            Err(ErrorKind::Parse(ParseError::MissingTerminator(1)))
        );
    }

    #[test]
    fn a_terminator_without_literals_is_an_error() {
        let mut ctx = Context::from_config(Config::default());

        let mut file = vec![];
        let _ = file.write(b"0\n");

        assert_eq!(
            ctx.read_dimacs(file.as_slice()),
            Err(ErrorKind::Parse(ParseError::EmptyClause(1)))
        );
    }

    #[test]
    fn a_bare_negation_prefix_is_an_error() {
        let mut ctx = Context::from_config(Config::default());

        let mut file = vec![];
        let _ = file.write(b"1 - 0\n");

        assert_eq!(
            ctx.read_dimacs(file.as_slice()),
            Err(ErrorKind::Parse(ParseError::Negation(1)))
        );
    }
}
