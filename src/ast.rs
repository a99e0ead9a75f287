use std::{
    fmt::{self, Write},
    mem,
};

/// The unit in which trigonometric function arguments are interpreted.
///
/// The unit is chosen once per parse and stored on every
/// [`Node::UnaryFunction`] node, so a tree evaluates the same way no matter
/// who evaluates it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    /// Arguments are radians. This is the default.
    #[default]
    Radian,
    /// Arguments are degrees and are converted to radians before the
    /// trigonometric function is applied.
    Degree,
}

impl AngleUnit {
    /// Converts an angle expressed in this unit to radians.
    ///
    /// # Example
    /// ```
    /// use recurcalc::ast::AngleUnit;
    ///
    /// assert_eq!(AngleUnit::Radian.to_radians(1.5), 1.5);
    /// assert_eq!(AngleUnit::Degree.to_radians(180.0), std::f64::consts::PI);
    /// ```
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radian => angle,
            Self::Degree => angle.to_radians(),
        }
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// The character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

/// Built-in single-argument functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Square root, `sqrt`.
    Sqrt,
    /// Natural logarithm, `ln`.
    Ln,
    /// Exponential function, `exp`.
    Exp,
    /// Sine, `sin`.
    Sin,
    /// Cosine, `cos`.
    Cos,
    /// Tangent, `tg`.
    Tan,
    /// Cotangent, `ctg`.
    Cot,
}

impl Function {
    /// The keyword this function is called by in expression text.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tg",
            Self::Cot => "ctg",
        }
    }

    /// Returns `true` for the functions whose argument is an angle.
    #[must_use]
    pub const fn is_trigonometric(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan | Self::Cot)
    }
}

/// Named mathematical constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// π, written `pi`.
    Pi,
    /// Euler's number, written `e`.
    E,
}

impl Constant {
    /// The keyword this constant is written as.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }
}

/// A node of the abstract syntax tree.
///
/// The tree is built bottom-up by the parser and owns every subtree
/// exclusively. It is never mutated after construction; evaluation only reads
/// it.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal.
    Number(f64),
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A built-in function applied to a single operand.
    UnaryFunction {
        /// The function to apply.
        function:   Function,
        /// The argument expression.
        operand:    Box<Self>,
        /// Unit of the argument. Only consulted for trigonometric functions.
        angle_unit: AngleUnit,
    },
    /// A named constant.
    Constant(Constant),
}

impl Node {
    /// Builds a [`Node::BinaryOp`] from two operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds a [`Node::UnaryFunction`] node.
    #[must_use]
    pub fn function(function: Function, operand: Self, angle_unit: AngleUnit) -> Self {
        Self::UnaryFunction { function,
                              operand: Box::new(operand),
                              angle_unit }
    }

    /// Builds the tree a leading unary minus desugars to: `0 - operand`.
    #[must_use]
    pub fn negation(operand: Self) -> Self {
        Self::binary(BinaryOperator::Sub, Self::Number(0.0), operand)
    }
}

/// Detaches the children of each node before it is freed, so dropping a
/// deep tree does not recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.detach_children(&mut detached);
        while let Some(mut node) = detached.pop() {
            node.detach_children(&mut detached);
        }
    }
}

impl Node {
    /// Moves the subtrees of this node into `into`, leaving leaves behind.
    fn detach_children(&mut self, into: &mut Vec<Self>) {
        match self {
            Self::BinaryOp { left, right, .. } => {
                into.push(mem::replace(left.as_mut(), Self::Number(0.0)));
                into.push(mem::replace(right.as_mut(), Self::Number(0.0)));
            },
            Self::UnaryFunction { operand, .. } => {
                into.push(mem::replace(operand.as_mut(), Self::Number(0.0)));
            },
            Self::Number(_) | Self::Constant(_) => {},
        }
    }
}

/// A pending piece of output while rendering a tree.
enum Piece<'a> {
    Node(&'a Node),
    Symbol(char),
}

/// Renders the tree as a fully parenthesised expression.
///
/// Parsing the rendered text with the same [`AngleUnit`] yields an equal tree.
///
/// # Example
/// ```
/// use recurcalc::{ast::AngleUnit, parse};
///
/// let tree = parse("2+3*sqrt(4)", AngleUnit::Radian).unwrap();
/// assert_eq!(tree.to_string(), "(2.0+(3.0*sqrt(4.0)))");
/// ```
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Symbol(symbol) => f.write_char(symbol)?,
                Piece::Node(Self::Number(value)) => write!(f, "{value:?}")?,
                Piece::Node(Self::Constant(constant)) => f.write_str(constant.keyword())?,
                Piece::Node(Self::BinaryOp { op, left, right }) => {
                    f.write_char('(')?;
                    pending.extend([Piece::Symbol(')'),
                                    Piece::Node(right),
                                    Piece::Symbol(op.symbol()),
                                    Piece::Node(left)]);
                },
                Piece::Node(Self::UnaryFunction { function, operand, .. }) => {
                    f.write_str(function.keyword())?;
                    if matches!(**operand, Self::BinaryOp { .. }) {
                        pending.push(Piece::Node(operand));
                    } else {
                        f.write_char('(')?;
                        pending.extend([Piece::Symbol(')'), Piece::Node(operand)]);
                    }
                },
            }
        }
        Ok(())
    }
}
