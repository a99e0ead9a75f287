use thiserror::Error;

/// Represents all errors that can occur while evaluating a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The divisor of a `/` evaluated to exactly zero.
    #[error("Division by zero.")]
    DivisionByZero,
}
