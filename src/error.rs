/// Parsing errors.
///
/// Defines every way the text of an expression can be rejected before any
/// arithmetic happens: characters outside the grammar, malformed number
/// literals, unbalanced parentheses, missing operands, and leftover input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the failures the evaluator itself raises while reducing a tree.
/// Overflow and NaN are ordinary results and never appear here.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::{ParseError, ParseErrorKind};
