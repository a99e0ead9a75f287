/// Parser state and the top-level entry point.
///
/// Owns the token stream, strips whitespace before scanning, and checks that
/// the whole input was consumed.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level: additive, multiplicative, and
/// exponentiation.
pub mod binary;

/// Primary expression parsing.
///
/// Handles number literals, parenthesised groups, leading unary minus,
/// function calls, and constants.
pub mod unary;

pub use self::core::{MAX_NESTING_DEPTH, ParseResult, parse};
