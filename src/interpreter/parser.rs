/// Core parsing entry points.
///
/// Contains the public `parse` function tying tokenization, token validation
/// and recursive descent together, plus the standalone AST validation pass.
pub mod core;

/// Binary operator precedence levels.
///
/// Implements the additive, multiplicative and power levels of the grammar,
/// including the right-associativity of exponentiation.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, names, function calls with argument
/// lists, and parenthesized groups.
pub mod unary;
