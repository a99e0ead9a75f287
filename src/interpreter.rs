/// The evaluator module reduces a syntax tree to a number.
///
/// The evaluator walks the tree bottom-up, applies each operator and function
/// with IEEE-754 semantics, and reports the only evaluation failure, division
/// by zero.
///
/// # Responsibilities
/// - Evaluates every node kind of the tree.
/// - Converts trigonometric arguments from degrees when requested.
/// - Leaves overflow and NaN as ordinary results.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// The lexer reads whitespace-stripped text and produces number literals,
/// operators, parentheses, and keyword tokens. Anything else is rejected.
///
/// # Responsibilities
/// - Recognises the fixed keyword spellings, longest match first.
/// - Converts number literals to finite `f64` values.
/// - Reports characters outside the grammar.
pub mod lexer;
/// The parser module builds the abstract syntax tree from tokens.
///
/// The parser is a recursive descent over the token stream with one function
/// per precedence level.
///
/// # Responsibilities
/// - Encodes operator precedence and associativity.
/// - Desugars unary minus and applies function keywords.
/// - Reports syntax errors with the offset where they were detected.
pub mod parser;
