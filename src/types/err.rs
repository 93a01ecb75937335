//! Error types used in the library.
//!
//! - Well-formedness of expressions is guaranteed by construction, so errors only arise at the boundary (the clause-file parser) or from the defensive convergence check on normalization.
//! - As [Expression](crate::structures::expression::Expression) is a closed sum type and every consumer matches exhaustively, there is no runtime error for an unsupported expression kind --- the case is impossible at compile time.
//
//  Names of the error enums overlap with corresponding concerns, and throughout the library err::{self} is used to prefix use of the types with `err::`.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Normalization(NormalizationError),
}

/// Noted errors while parsing a clause file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A clause line without the terminator as its trailing token.
    MissingTerminator(usize),

    /// A clause line with a terminator but no literals.
    EmptyClause(usize),

    /// A negation prefix was read, but no symbol name followed.
    Negation(usize),

    /// Some unspecific problem at a specific line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors during normalization to conjunctive normal form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NormalizationError {
    /// The fixpoint loop exceeded its pass limit.
    ///
    /// Each pass either eliminates a connective or pushes a conjunction outward, so the limit is unreachable unless a rewrite rule has regressed.
    LimitExceeded(usize),
}

impl From<NormalizationError> for ErrorKind {
    fn from(e: NormalizationError) -> Self {
        ErrorKind::Normalization(e)
    }
}
