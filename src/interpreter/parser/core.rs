use std::iter::Peekable;

use log::trace;
use logos::{Logos, Span, SpannedIter};

use crate::{
    ast::{AngleUnit, Node},
    error::ParseError,
    interpreter::lexer::{LexError, Token},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of primaries that may be open at once.
///
/// Every `(`, leading `-` and function keyword opens one. The limit keeps the
/// recursion of the parser well inside the default thread stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses an expression into an abstract syntax tree.
///
/// All whitespace is removed before scanning, so it is never significant,
/// not even inside a number literal. Error offsets refer to the stripped
/// text.
///
/// Grammar, from lowest to highest precedence:
/// ```text
///     term     := factor (("+" | "-") factor)*
///     factor   := exponent (("*" | "/") exponent)*
///     exponent := primary ("^" primary)*
///     primary  := "(" term ")" | "-" primary | function primary
///               | constant | number
/// ```
///
/// # Parameters
/// - `text`: The expression source.
/// - `angle_unit`: Unit recorded on every trigonometric call in the tree.
///
/// # Returns
/// The root of the parsed tree.
///
/// # Errors
/// Returns a [`ParseError`] describing the first problem found, scanning left
/// to right.
///
/// # Example
/// ```
/// use recurcalc::{ast::{AngleUnit, BinaryOperator, Node}, parse};
///
/// let tree = parse("1 + 2", AngleUnit::Radian).unwrap();
/// assert_eq!(tree, Node::binary(BinaryOperator::Add, Node::Number(1.0), Node::Number(2.0)));
///
/// assert!(parse("1 +", AngleUnit::Radian).is_err());
/// ```
pub fn parse(text: &str, angle_unit: AngleUnit) -> ParseResult<Node> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    trace!("parsing {stripped:?} with angle unit {angle_unit:?}");
    Parser::new(&stripped, angle_unit).parse_complete()
}

/// Recursive-descent parser over a lazily lexed token stream.
///
/// Tokens are pulled one at a time, so a lexical error behind a syntax error
/// is never reported first.
pub struct Parser<'src> {
    pub(super) source:     &'src str,
    pub(super) tokens:     Peekable<SpannedIter<'src, Token>>,
    pub(super) angle_unit: AngleUnit,
    pub(super) depth:      usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over already whitespace-stripped text.
    #[must_use]
    pub fn new(source: &'src str, angle_unit: AngleUnit) -> Self {
        Self { source,
               tokens: Token::lexer(source).spanned().peekable(),
               angle_unit,
               depth: 0 }
    }

    /// Parses one expression and requires that nothing follows it.
    ///
    /// # Errors
    /// - Any error raised while parsing the expression itself.
    /// - `TrailingInput` if tokens remain afterwards.
    /// - The lexer's error if the first leftover text does not form a token.
    pub fn parse_complete(mut self) -> ParseResult<Node> {
        let node = self.parse_term()?;
        match self.advance() {
            None => Ok(node),
            Some((Ok(_), span)) => Err(ParseError::TrailingInput { offset: span.start }),
            Some((Err(err), span)) => Err(self.lex_error(err, span.start)),
        }
    }

    /// Returns the next token and its offset without consuming it.
    pub(super) fn peek(&mut self) -> Option<(Result<Token, LexError>, usize)> {
        self.tokens.peek().map(|(token, span)| (*token, span.start))
    }

    /// Consumes the next token.
    pub(super) fn advance(&mut self) -> Option<(Result<Token, LexError>, Span)> {
        let next = self.tokens.next();
        if let Some((token, span)) = &next {
            trace!("consumed {token:?} at {}", span.start);
        }
        next
    }

    /// Offset of the next token, or the input length at end of input.
    pub(super) fn offset(&mut self) -> usize {
        self.peek().map_or(self.source.len(), |(_, offset)| offset)
    }

    /// Offset just past the last character, used for errors at end of input.
    pub(super) const fn end(&self) -> usize {
        self.source.len()
    }

    /// Turns a lexer error found at `offset` into a [`ParseError`].
    pub(super) fn lex_error(&self, err: LexError, offset: usize) -> ParseError {
        match err {
            LexError::InvalidNumber => ParseError::InvalidNumber { offset },
            LexError::UnexpectedCharacter => {
                let character = self.source[offset..].chars().next().unwrap_or_default();
                ParseError::UnexpectedCharacter { character, offset }
            },
        }
    }
}
