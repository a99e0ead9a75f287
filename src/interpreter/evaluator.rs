/// Core evaluation logic.
///
/// Contains the dispatch over node kinds and the result type shared by the
/// evaluator.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators, including the division-by-zero check.
pub mod binary;

/// Built-in function and constant evaluation.
///
/// Applies `sqrt`, `ln`, `exp` and the trigonometric functions, converting
/// degrees to radians where needed, and supplies the values of `pi` and `e`.
pub mod function;

pub use self::core::{EvalResult, evaluate};
