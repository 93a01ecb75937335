//! A reader for clause-per-line files, in the style of the DIMACS CNF format.

use std::{collections::HashSet, io::BufRead};

use crate::{
    context::Context,
    misc::log::targets,
    structures::expression::Expression,
    types::err::{self, ErrorKind},
};

/// Details from a read of a clause file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// Every distinct symbol encountered during the read.
    pub symbols: HashSet<Expression>,

    /// A count of the clauses added to the knowledge base.
    pub clauses_added: usize,

    /// A count of the clause lines skipped as duplicates of an earlier line from the same read.
    pub clauses_skipped: usize,
}

impl Context {
    /// Reads a clause file into the knowledge base of the context.
    ///
    /// Each non-comment, non-problem line is a whitespace-separated sequence of symbol names closed by the terminator `0`.
    /// A name prefixed with `-` is read as the negation of the named symbol, and the line as the disjunction of its literals.
    /// A line with a single literal is read as that bare literal rather than a disjunction, and a line repeating an earlier clause from the same read is skipped.
    ///
    /// Lines opening with `c` or `p` are ignored, and a line opening with `%` ends the read.
    ///
    /// ```rust
    /// # use stoat_kb::config::Config;
    /// # use stoat_kb::context::Context;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut clause_file = vec![];
    /// let _ = clause_file.write(b"
    /// c An example pair of clauses.
    /// p cnf 2 2
    ///  1    0
    /// -1  2 0
    /// ");
    ///
    /// let info = the_context.read_dimacs(clause_file.as_slice()).unwrap();
    ///
    /// assert_eq!(info.clauses_added, 2);
    /// assert_eq!(info.symbols.len(), 2);
    /// assert_eq!(the_context.assertion_count(), 2);
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let mut seen: HashSet<Expression> = HashSet::new();

        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        'formula_loop: loop {
            buffer.clear();

            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') | Some('p') => continue 'formula_loop,
                _ => {}
            }

            let tokens: Vec<&str> = buffer.split_whitespace().collect();

            let Some((terminator, literal_tokens)) = tokens.split_last() else {
                // A blank line.
                continue 'formula_loop;
            };

            if *terminator != "0" {
                return Err(err::ErrorKind::from(err::ParseError::MissingTerminator(
                    line_counter,
                )));
            }

            if literal_tokens.is_empty() {
                return Err(err::ErrorKind::from(err::ParseError::EmptyClause(
                    line_counter,
                )));
            }

            let mut literals = Vec::with_capacity(literal_tokens.len());

            for token in literal_tokens {
                let literal = match token.strip_prefix('-') {
                    Some("") => {
                        return Err(err::ErrorKind::from(err::ParseError::Negation(
                            line_counter,
                        )))
                    }

                    Some(name) => {
                        info.symbols.insert(Expression::symbol(name));
                        Expression::not_of(Expression::symbol(name))
                    }

                    None => {
                        info.symbols.insert(Expression::symbol(*token));
                        Expression::symbol(*token)
                    }
                };

                literals.push(literal);
            }

            // A clause with a single distinct literal loads as the bare literal.
            let clause = match Expression::or_of(literals) {
                Expression::Or(mut operands) if operands.len() == 1 => {
                    operands.pop().expect("an operand was just counted")
                }
                clause => clause,
            };

            match seen.insert(clause.clone()) {
                true => {
                    self.assertions.push(clause);
                    info.clauses_added += 1;
                }

                false => {
                    log::trace!(target: targets::PARSER, "Duplicate clause at line {line_counter}.");
                    info.clauses_skipped += 1;
                }
            }
        }

        log::info!(
            target: targets::PARSER,
            "Read {} clauses over {} symbols.",
            info.clauses_added,
            info.symbols.len()
        );

        Ok(info)
    }
}
