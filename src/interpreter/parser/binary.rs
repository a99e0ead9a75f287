use log::trace;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `term := factor (("+" | "-") factor)*`
    pub(crate) fn parse_term(&mut self) -> ParseResult<Node> {
        trace!("term at {}", self.offset());
        let mut left = self.parse_factor()?;
        while let Some(op) = self.peek_operator()
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            self.advance();
            let right = self.parse_factor()?;
            left = Node::binary(op, left, right);
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators: `*` and `/`.
    ///
    /// The rule is: `factor := exponent (("*" | "/") exponent)*`
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Node> {
        trace!("factor at {}", self.offset());
        let mut left = self.parse_exponent()?;
        while let Some(op) = self.peek_operator()
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            self.advance();
            let right = self.parse_exponent()?;
            left = Node::binary(op, left, right);
        }
        Ok(left)
    }

    /// Parses exponentiation expressions.
    ///
    /// Chains fold to the left: `a ^ b ^ c` parses as `(a ^ b) ^ c`.
    /// Operands are primaries, so a leading minus or a function call binds
    /// tighter than `^`: `-2^2` is `(0 - 2) ^ 2`.
    ///
    /// The rule is: `exponent := primary ("^" primary)*`
    pub(crate) fn parse_exponent(&mut self) -> ParseResult<Node> {
        trace!("exponent at {}", self.offset());
        let mut left = self.parse_primary()?;
        while let Some(BinaryOperator::Pow) = self.peek_operator() {
            self.advance();
            let right = self.parse_primary()?;
            left = Node::binary(BinaryOperator::Pow, left, right);
        }
        Ok(left)
    }

    /// Returns the binary operator at the front of the stream, if any.
    fn peek_operator(&mut self) -> Option<BinaryOperator> {
        match self.peek() {
            Some((Ok(token), _)) => token_to_binary_operator(token),
            _ => None,
        }
    }
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use recurcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
