use log::trace;

use crate::{
    ast::{Constant, Function, Node},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a primary (atomic) expression.
    ///
    /// Primary expressions form the base of the expression grammar:
    /// - number literals
    /// - constants (`pi`, `e`)
    /// - parenthesized expressions
    /// - a leading unary minus applied to another primary
    /// - a function keyword applied to another primary
    ///
    /// Grammar:
    /// ```text
    ///     primary := "(" term ")"
    ///              | "-" primary
    ///              | function primary
    ///              | constant
    ///              | number
    /// ```
    ///
    /// # Errors
    /// - `InvalidNumber` at the input length if the input ended where an
    ///   operand was required.
    /// - `IncompleteExpression` if the next token cannot start an operand.
    /// - The lexer's error if the next text does not form a token.
    /// - `TooDeeplyNested` if [`MAX_NESTING_DEPTH`] primaries are already
    ///   open.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Node> {
        let offset = self.offset();
        trace!("primary at {offset}, depth {}", self.depth);
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeeplyNested { offset });
        }

        self.depth += 1;
        let node = self.parse_operand();
        self.depth -= 1;
        node
    }

    /// Parses the operand a primary consists of, without the depth check.
    fn parse_operand(&mut self) -> ParseResult<Node> {
        let Some((token, offset)) = self.peek() else {
            return Err(ParseError::InvalidNumber { offset: self.end() });
        };
        let token = token.map_err(|err| self.lex_error(err, offset))?;

        match token {
            Token::Number(value) => {
                self.advance();
                Ok(Node::Number(value))
            },
            Token::LParen => self.parse_grouping(),
            Token::Minus => {
                self.advance();
                let operand = self.parse_primary()?;
                Ok(Node::negation(operand))
            },
            Token::Pi | Token::E => {
                self.advance();
                let constant = if token == Token::Pi { Constant::Pi } else { Constant::E };
                Ok(Node::Constant(constant))
            },
            _ => match token_to_function(token) {
                Some(function) => self.parse_function_call(function),
                None => Err(ParseError::IncompleteExpression { offset }),
            },
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// The stream must be positioned at `(`. The contents restart at the
    /// lowest precedence level.
    ///
    /// # Errors
    /// Returns `UnmatchedParenthesis` if the token after the inner expression
    /// is not `)`, or if the input ends first.
    fn parse_grouping(&mut self) -> ParseResult<Node> {
        self.advance();
        let inner = self.parse_term()?;
        match self.advance() {
            Some((Ok(Token::RParen), _)) => Ok(inner),
            Some((Ok(_), span)) => Err(ParseError::UnmatchedParenthesis { offset: span.start }),
            Some((Err(err), span)) => Err(self.lex_error(err, span.start)),
            None => Err(ParseError::UnmatchedParenthesis { offset: self.end() }),
        }
    }

    /// Parses a function keyword and the primary it is applied to.
    ///
    /// Parentheses are not required: `sqrt4` and `sqrt(4)` are the same call,
    /// and `sin-x` applies `sin` to `0 - x`.
    fn parse_function_call(&mut self, function: Function) -> ParseResult<Node> {
        self.advance();
        if self.peek().is_none() {
            return Err(ParseError::IncompleteExpression { offset: self.end() });
        }
        let operand = self.parse_primary()?;
        Ok(Node::function(function, operand, self.angle_unit))
    }
}

/// Maps a keyword token to the function it names.
///
/// Returns `None` for every token that is not a function keyword, constants
/// included.
#[must_use]
pub const fn token_to_function(token: Token) -> Option<Function> {
    match token {
        Token::Sqrt => Some(Function::Sqrt),
        Token::Sin => Some(Function::Sin),
        Token::Cos => Some(Function::Cos),
        Token::Tg => Some(Function::Tan),
        Token::Ctg => Some(Function::Cot),
        Token::Ln => Some(Function::Ln),
        Token::Exp => Some(Function::Exp),
        _ => None,
    }
}
