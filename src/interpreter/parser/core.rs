use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind, tokenize, validate_tokens},
        parser::binary::parse_additive,
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a source string into an expression tree.
///
/// The string is tokenized, the token stream is checked for balanced
/// parentheses, and the tokens are consumed by recursive descent. After the
/// expression, the next token must be end-of-input; anything else is reported
/// as trailing garbage. On failure no partial tree is returned.
///
/// # Errors
/// Returns a `SyntaxError` carrying the offending position if the source
/// cannot be tokenized or parsed as a single complete expression.
///
/// # Example
/// ```
/// use expreval::interpreter::parser::core::parse;
///
/// assert!(parse("1 + 2 * (3 - 4)").is_ok());
/// assert!(parse("1 +").is_err());
/// assert!(parse("2 3").is_err());
/// ```
pub fn parse(text: &str) -> ParseResult<Expr> {
    let tokens = tokenize(text)?;
    validate_tokens(&tokens)?;

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    match iter.peek() {
        Some(token) if token.kind != TokenKind::EndOfInput => {
            Err(SyntaxError::TrailingTokens { token:    token.text.clone(),
                                              position: token.position, })
        },
        _ => Ok(expr),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, additive, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_additive(tokens)
}

/// Re-checks the structural completeness of an expression tree.
///
/// Parsing already guarantees these properties; this pass exists for trees
/// constructed by other means (deserialization, tests, hand-built nodes). It
/// verifies that every number node holds a finite value and that every
/// function call carries a non-empty name.
///
/// # Errors
/// Returns a `SyntaxError` pointing at the first offending node.
///
/// # Example
/// ```
/// use expreval::{ast::Expr, interpreter::parser::core::validate_ast};
///
/// let good = Expr::Number { value:    1.5,
///                           position: 0, };
/// let bad = Expr::Number { value:    f64::INFINITY,
///                          position: 0, };
///
/// assert!(validate_ast(&good).is_ok());
/// assert!(validate_ast(&bad).is_err());
/// ```
pub fn validate_ast(expr: &Expr) -> ParseResult<()> {
    match expr {
        Expr::Number { value, position } => {
            if value.is_finite() {
                Ok(())
            } else {
                Err(SyntaxError::NonFiniteNumber { position: *position, })
            }
        },
        Expr::Variable { .. } | Expr::Constant { .. } => Ok(()),
        Expr::UnaryOp { operand, .. } => validate_ast(operand),
        Expr::BinaryOp { left, right, .. } => {
            validate_ast(left)?;
            validate_ast(right)
        },
        Expr::FunctionCall { name,
                             arguments,
                             position, } => {
            if name.is_empty() {
                return Err(SyntaxError::EmptyFunctionName { position: *position, });
            }
            for argument in arguments {
                validate_ast(argument)?;
            }
            Ok(())
        },
    }
}
