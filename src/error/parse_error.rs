use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the offset, counted from zero in the
/// whitespace-stripped input, at which the problem was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a character that no token starts with.
    #[error("Unexpected character '{character}' at position {offset}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        offset:    usize,
    },
    /// A number literal was malformed, or an operand was missing at the end
    /// of the input.
    #[error("Invalid number at position {offset}.")]
    InvalidNumber {
        /// Start of the literal, or the input length for a missing operand.
        offset: usize,
    },
    /// A `(` was not closed by a `)` where one was expected.
    #[error("Mismatched parentheses at position {offset}.")]
    UnmatchedParenthesis {
        /// Where the closing parenthesis was expected.
        offset: usize,
    },
    /// Input remained after a complete expression was parsed.
    #[error("Incomplete or invalid expression at position {offset}.")]
    TrailingInput {
        /// Start of the first unconsumed token.
        offset: usize,
    },
    /// An operator or function keyword was not followed by an operand.
    #[error("Expected an operand at position {offset}.")]
    IncompleteExpression {
        /// Where the operand was expected.
        offset: usize,
    },
    /// Parentheses, leading minus signs and function calls were nested
    /// deeper than the parser allows.
    #[error("Expression nested too deeply at position {offset}.")]
    TooDeeplyNested {
        /// Start of the primary that would exceed the limit.
        offset: usize,
    },
}

/// The kind of a [`ParseError`], without its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// See [`ParseError::UnexpectedCharacter`].
    UnexpectedCharacter,
    /// See [`ParseError::InvalidNumber`].
    InvalidNumber,
    /// See [`ParseError::UnmatchedParenthesis`].
    UnmatchedParenthesis,
    /// See [`ParseError::TrailingInput`].
    TrailingInput,
    /// See [`ParseError::IncompleteExpression`].
    IncompleteExpression,
    /// See [`ParseError::TooDeeplyNested`].
    TooDeeplyNested,
}

impl ParseError {
    /// Returns the offset at which the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match *self {
            Self::UnexpectedCharacter { offset, .. }
            | Self::InvalidNumber { offset }
            | Self::UnmatchedParenthesis { offset }
            | Self::TrailingInput { offset }
            | Self::IncompleteExpression { offset }
            | Self::TooDeeplyNested { offset } => offset,
        }
    }

    /// Returns the kind of the error.
    ///
    /// # Example
    /// ```
    /// use recurcalc::{ast::AngleUnit, error::ParseErrorKind, parse};
    ///
    /// let err = parse("2+3@5", AngleUnit::Radian).unwrap_err();
    /// assert_eq!(err.kind(), ParseErrorKind::UnexpectedCharacter);
    /// assert_eq!(err.offset(), 3);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::UnexpectedCharacter { .. } => ParseErrorKind::UnexpectedCharacter,
            Self::InvalidNumber { .. } => ParseErrorKind::InvalidNumber,
            Self::UnmatchedParenthesis { .. } => ParseErrorKind::UnmatchedParenthesis,
            Self::TrailingInput { .. } => ParseErrorKind::TrailingInput,
            Self::IncompleteExpression { .. } => ParseErrorKind::IncompleteExpression,
            Self::TooDeeplyNested { .. } => ParseErrorKind::TooDeeplyNested,
        }
    }
}
