//! A library for deciding whether a propositional knowledge base entails a collection of goals.
//!
//! stoat_kb represents propositional formulas as [expressions](crate::structures::expression), normalizes formulas to conjunctive normal form, and decides entailment with two complementary procedures: monotonic [forward chaining](crate::procedures::chaining) and a goal-directed, solved-literal-accumulation [search](crate::procedures::entail).
//!
//! stoat_kb is developed to help researchers, developers, or anyone curious, to investigate inference procedures, whether as a novice or through implementing novel ideas.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config), and assertions may be added [programatically](crate::context::Context::add_assertion) or through the [DIMACS-style](crate::context::Context::read_dimacs) representation of a formula in conjunctive normal form.
//!
//! Internally, and at a high-level, a query is viewed in terms of a growing record of derived expressions:
//! - Forward chaining saturates a set of facts from the knowledge base, and returns the set.
//! - The entailment search accumulates solved expressions until every goal is covered or no assertion makes progress, and returns [YES or NO](crate::reports::Report).
//!
//! Useful starting points, then, may be:
//! - The [expression model](crate::structures::expression) to familiarise yourself with how formulas are built and compared.
//! - The [normalizer](crate::structures::expression::cnf) to inspect the rewrite system and its fixpoint.
//! - The [procedures] to inspect the dynamics of a query.
//! - The [configuration](crate::config) to see what switches are supported.
//!
//! # Examples
//!
//! + Build a knowledge base, saturate it, and pose a query.
//!
//! ```rust
//! # use stoat_kb::config::Config;
//! # use stoat_kb::context::Context;
//! # use stoat_kb::reports::Report;
//! # use stoat_kb::structures::expression::Expression;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let first_grade = Expression::symbol("FirstGrade");
//! let child = Expression::symbol("Child");
//! let female = Expression::symbol("Female");
//! let girl = Expression::symbol("Girl");
//!
//! the_context.add_assertion(first_grade.clone());
//! the_context.add_assertion(Expression::implies(first_grade, child.clone()));
//! the_context.add_assertion(Expression::implies(
//!     Expression::and_of([child.clone(), female.clone()]),
//!     girl.clone(),
//! ));
//! the_context.add_assertion(female.clone());
//!
//! let inferred = the_context.forward_chaining();
//! assert!(inferred.contains(&child));
//! assert!(inferred.contains(&girl));
//!
//! assert_eq!(the_context.entails(&[girl]), Ok(Report::Entailed));
//! ```
//!
//! + Parse a DIMACS-style formula and pose a query.
//!
//! ```rust
//! # use stoat_kb::config::Config;
//! # use stoat_kb::context::Context;
//! # use stoat_kb::reports::Report;
//! # use stoat_kb::structures::expression::Expression;
//! # use std::io::Write;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut clause_file = vec![];
//! let _ = clause_file.write(b"
//!  1    0
//! -1  2 0
//! ");
//!
//! assert!(the_context.read_dimacs(clause_file.as_slice()).is_ok());
//!
//! let goal = Expression::symbol("2");
//! assert_eq!(the_context.entails(&[goal]), Ok(Report::Entailed));
//! ```
//!
//! # Scope
//!
//! The procedures are propositional and Horn-flavoured by design:
//! - Forward chaining does not handle disjunctive or negated premises.
//! - The entailment search resolves neither conjunctive assertions nor clauses with more than one positive literal --- such assertions stably make no progress, and never produce a false YES.
//!
//! The limitations are documented with the [procedures].
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the entailment search](crate::procedures::entail) can be filtered with `RUST_LOG=entailment …` or,
//! - Logs of each normalization pass can be found with `RUST_LOG=normalization=trace …`

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod misc;
pub mod reports;
