use logos::{Lexer, Logos};

/// Errors the lexer reports for a single token.
///
/// The parser attaches the offset and, for unexpected characters, the
/// character itself when it turns one of these into a
/// [`ParseError`](crate::error::ParseError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token rule matches at this position.
    #[default]
    UnexpectedCharacter,
    /// The text looks like a number literal but does not form a finite
    /// `f64`.
    InvalidNumber,
}

/// Represents a lexical token of an expression.
///
/// The lexer runs over whitespace-stripped text, so there is no whitespace
/// token. Keywords are matched as fixed spellings; when two keywords share a
/// prefix (`e` and `exp`) the longest match wins, and a keyword may be
/// immediately followed by another one (`sinpi` lexes as `sin`, `pi`).
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.1e-10`.
    ///
    /// The patterns also accept malformed literals such as `2e`, `1e+` or
    /// `.5` so that they are rejected as a whole with
    /// [`LexError::InvalidNumber`].
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]*([eE][+-]?[0-9]*)?", reject_number)]
    Number(f64),
    /// `sqrt`
    #[token("sqrt")]
    Sqrt,
    /// `sin`
    #[token("sin")]
    Sin,
    /// `cos`
    #[token("cos")]
    Cos,
    /// `tg`
    #[token("tg")]
    Tg,
    /// `ctg`
    #[token("ctg")]
    Ctg,
    /// `ln`
    #[token("ln")]
    Ln,
    /// `exp`
    #[token("exp")]
    Exp,
    /// `pi`
    #[token("pi")]
    Pi,
    /// `e`
    #[token("e")]
    E,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a number literal from the current token slice.
///
/// The slice must start with a digit, which the pattern guarantees, and must
/// convert to a finite `f64`. Literals such as `2e` or `1e999` fail.
fn parse_number(lex: &mut Lexer<Token>) -> Result<f64, LexError> {
    lex.slice()
       .parse::<f64>()
       .ok()
       .filter(|value| value.is_finite())
       .ok_or(LexError::InvalidNumber)
}

/// Rejects a literal without a digit before its decimal point.
fn reject_number(_: &mut Lexer<Token>) -> Result<f64, LexError> {
    Err(LexError::InvalidNumber)
}
