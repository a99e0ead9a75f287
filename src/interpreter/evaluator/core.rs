use crate::{
    ast::{AngleUnit, BinaryOperator, Function, Node},
    error::EvalError,
    interpreter::evaluator::binary::apply_binary,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a tree and returns the resulting number.
///
/// Equivalent to [`Node::evaluate`].
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] if any divisor in the tree evaluates
/// to zero.
///
/// # Example
/// ```
/// use recurcalc::{ast::AngleUnit, evaluate, parse};
///
/// let tree = parse("2+3*4", AngleUnit::Radian).unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 14.0);
/// ```
pub fn evaluate(node: &Node) -> EvalResult<f64> {
    node.evaluate()
}

/// A pending unit of work in the post-order walk.
enum Step<'a> {
    /// Evaluate this subtree and push its value.
    Visit(&'a Node),
    /// Pop the right then the left operand and push their combination.
    Combine(BinaryOperator),
    /// Pop the argument and push the function applied to it.
    Apply(Function, AngleUnit),
}

impl Node {
    /// Evaluates the tree rooted at this node.
    ///
    /// Leaves are evaluated before the operators that consume them, left
    /// operand first. The tree is only read, so evaluating it again yields
    /// the same result bit for bit.
    ///
    /// The walk keeps its own stack, so a long operator chain such as
    /// `1+1+...+1` does not consume call stack.
    ///
    /// Overflow, infinities and NaN are ordinary results, not errors.
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] if a divisor evaluates to zero.
    pub fn evaluate(&self) -> EvalResult<f64> {
        let mut steps = vec![Step::Visit(self)];
        let mut values: Vec<f64> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Self::Number(value)) => values.push(*value),
                Step::Visit(Self::Constant(constant)) => values.push(constant.value()),
                Step::Visit(Self::BinaryOp { op, left, right }) => {
                    steps.push(Step::Combine(*op));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                },
                Step::Visit(Self::UnaryFunction { function,
                                                  operand,
                                                  angle_unit, }) => {
                    steps.push(Step::Apply(*function, *angle_unit));
                    steps.push(Step::Visit(operand));
                },
                Step::Combine(op) => {
                    let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
                        unreachable!("both operands are visited before they are combined");
                    };
                    values.push(apply_binary(op, lhs, rhs)?);
                },
                Step::Apply(function, angle_unit) => {
                    let Some(argument) = values.pop() else {
                        unreachable!("the operand is visited before the function is applied");
                    };
                    values.push(function.apply(argument, angle_unit));
                },
            }
        }

        match values.pop() {
            Some(value) => Ok(value),
            None => unreachable!("the root always leaves one value"),
        }
    }
}
