use crate::{ast::BinaryOperator, error::EvalError, interpreter::evaluator::core::EvalResult};

/// Applies a binary operator to two evaluated operands.
///
/// Arithmetic follows IEEE-754: overflow saturates to infinity and invalid
/// operations produce NaN. The only failure is a divisor equal to zero
/// (either sign).
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] for `Div` with `rhs == 0.0`.
///
/// # Example
/// ```
/// use recurcalc::{ast::BinaryOperator, error::EvalError, interpreter::evaluator::binary::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::Pow, 3.0, 4.0), Ok(81.0));
/// assert_eq!(apply_binary(BinaryOperator::Div, 1.0, 0.0), Err(EvalError::DivisionByZero));
/// assert!(apply_binary(BinaryOperator::Pow, -8.0, 1.0 / 3.0).unwrap().is_nan());
/// ```
pub fn apply_binary(op: BinaryOperator, lhs: f64, rhs: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(lhs + rhs),
        BinaryOperator::Sub => Ok(lhs - rhs),
        BinaryOperator::Mul => Ok(lhs * rhs),
        BinaryOperator::Div if rhs == 0.0 => Err(EvalError::DivisionByZero),
        BinaryOperator::Div => Ok(lhs / rhs),
        BinaryOperator::Pow => Ok(lhs.powf(rhs)),
    }
}
