//! # recurcalc
//!
//! recurcalc is an arithmetic expression evaluator written in Rust.
//! It parses a textual expression into a syntax tree with a recursive-descent
//! parser and reduces the tree to an `f64`.
//!
//! The grammar is small and fixed: `+ - * / ^`, parentheses, unary minus,
//! the functions `sqrt ln exp sin cos tg ctg`, and the constants `pi` and
//! `e`. No construct of the grammar can do anything but compute a number.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::fmt;

use log::debug;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum and the operator, function, constant
/// and angle-unit types it is built from. The tree is built by the parser and
/// read by the evaluator.
///
/// # Responsibilities
/// - Defines one node variant per syntactic construct.
/// - Records the angle unit on trigonometric calls.
/// - Renders trees back to expression text for diagnostics.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// Parse errors carry the offset at which they were detected; evaluation
/// errors currently consist of division by zero.
pub mod error;
/// Lexer, parser and evaluator.
///
/// This module ties together the phases that turn expression text into a
/// number.
pub mod interpreter;

pub use crate::{
    ast::{AngleUnit, Node},
    error::{EvalError, ParseError},
    interpreter::{evaluator::evaluate, parser::parse},
};

/// The outcome of evaluating an expression through [`evaluate_expression`].
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationOutcome {
    /// The expression was parsed and evaluated.
    Success(f64),
    /// The expression text was rejected by the parser.
    ParserFailure(String),
    /// The expression parsed, but evaluating it failed.
    EvaluationFailure(String),
}

impl EvaluationOutcome {
    /// Returns `true` if the expression produced a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The computed value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Success(value) => Some(*value),
            _ => None,
        }
    }

    /// The failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::ParserFailure(message) | Self::EvaluationFailure(message) => Some(message.as_str()),
        }
    }
}

impl From<ParseError> for EvaluationOutcome {
    fn from(err: ParseError) -> Self {
        Self::ParserFailure(format!("Parser error: {err}"))
    }
}

impl From<EvalError> for EvaluationOutcome {
    fn from(err: EvalError) -> Self {
        Self::EvaluationFailure(format!("Error during evaluation: {err}"))
    }
}

impl fmt::Display for EvaluationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Result: {value:?}"),
            Self::ParserFailure(message) | Self::EvaluationFailure(message) => {
                f.write_str(message)
            },
        }
    }
}

/// Parses and evaluates an expression.
///
/// This never fails: malformed input and evaluation errors are reported as
/// [`EvaluationOutcome::ParserFailure`] and
/// [`EvaluationOutcome::EvaluationFailure`] with a readable message. The
/// parsed tree is dropped once evaluation finishes.
///
/// # Parameters
/// - `text`: The expression source. Whitespace is ignored.
/// - `angle_unit`: How trigonometric arguments are interpreted.
///
/// # Examples
/// ```
/// use recurcalc::{AngleUnit, EvaluationOutcome, evaluate_expression};
///
/// assert_eq!(evaluate_expression("2 + 3 * 4", AngleUnit::Radian),
///            EvaluationOutcome::Success(14.0));
///
/// assert_eq!(evaluate_expression("1/0", AngleUnit::Radian),
///            EvaluationOutcome::EvaluationFailure("Error during evaluation: Division by zero.".to_string()));
///
/// assert_eq!(evaluate_expression("1/", AngleUnit::Radian).message(),
///            Some("Parser error: Invalid number at position 2."));
/// ```
#[must_use]
pub fn evaluate_expression(text: &str, angle_unit: AngleUnit) -> EvaluationOutcome {
    let tree = match parse(text, angle_unit) {
        Ok(tree) => tree,
        Err(err) => {
            debug!("rejected {text:?}: {err}");
            return err.into();
        },
    };
    debug!("parsed {text:?} as {tree}");

    match tree.evaluate() {
        Ok(value) => {
            debug!("{tree} = {value:?}");
            EvaluationOutcome::Success(value)
        },
        Err(err) => {
            debug!("evaluation of {tree} failed: {err}");
            err.into()
        },
    }
}
