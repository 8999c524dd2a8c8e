use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{OperatorKind, Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` (identity) and `-` (negation).
/// Unary operators are right-recursive, so an input like `--x` is parsed as
/// `-(-x)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.peek()
       && let TokenKind::Operator(symbol) = token.kind
       && matches!(symbol, OperatorKind::Plus | OperatorKind::Minus)
    {
        let position = token.position;
        let op = if symbol == OperatorKind::Minus {
            UnaryOperator::Negate
        } else {
            UnaryOperator::Plus
        };
        tokens.next();
        let operand = parse_unary(tokens)?;
        return Ok(Expr::UnaryOp { op,
                                  operand: Box::new(operand),
                                  position });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - constants and variables
/// - function calls
/// - parenthesized expressions
///
/// This function does not handle unary or binary operators. It dispatches to
/// specialized parsing functions depending on the leading token.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | CONSTANT
///              | VARIABLE
///              | FUNCTION "(" arguments ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `SyntaxError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = match tokens.peek() {
        Some(token) => *token,
        None => return Err(SyntaxError::UnexpectedEndOfInput { position: 0 }),
    };

    match token.kind {
        TokenKind::Number(value) => {
            tokens.next();
            if !value.is_finite() {
                return Err(SyntaxError::LiteralTooLarge { position: token.position, });
            }
            Ok(Expr::Number { value,
                              position: token.position, })
        },
        TokenKind::Constant => {
            tokens.next();
            Ok(Expr::Constant { name:     token.text.clone(),
                                position: token.position, })
        },
        TokenKind::Variable => {
            tokens.next();
            Ok(Expr::Variable { name:     token.text.clone(),
                                position: token.position, })
        },
        TokenKind::Function => parse_function_call(tokens),
        TokenKind::LeftParen => parse_grouping(tokens),
        TokenKind::EndOfInput => {
            Err(SyntaxError::UnexpectedEndOfInput { position: token.position, })
        },
        _ => Err(SyntaxError::UnexpectedToken { token:    token.text.clone(),
                                                position: token.position, }),
    }
}

/// Parses a function call of the form `name(arg1, arg2, ...)`.
///
/// The scanner only classifies an identifier as a function when `(` follows,
/// so the name token and the opening parenthesis are both consumed here.
/// An empty argument list `f()` is permitted; otherwise arguments are full
/// expressions separated by commas.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a function-name token.
///
/// # Returns
/// An [`Expr::FunctionCall`] node.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name_token = tokens.next().unwrap();
    let position = name_token.position;

    match tokens.next() {
        Some(token) if token.kind == TokenKind::LeftParen => {},
        Some(token) => {
            return Err(SyntaxError::UnexpectedToken { token:    token.text.clone(),
                                                      position: token.position, });
        },
        None => return Err(SyntaxError::UnexpectedEndOfInput { position }),
    }

    let arguments = parse_call_arguments(tokens, position)?;

    Ok(Expr::FunctionCall { name: name_token.text.clone(),
                            arguments,
                            position })
}

/// Parses a comma-separated argument list until the closing `)`.
///
/// An immediately encountered `)` produces an empty list. Each argument is a
/// full expression, so nested calls and operators are allowed.
///
/// # Errors
/// Returns a `SyntaxError` if an argument fails to parse, if something other
/// than `,` or `)` follows an argument, or if input ends inside the list.
fn parse_call_arguments<'a, I>(tokens: &mut Peekable<I>,
                               call_position: usize)
                               -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut arguments = Vec::new();

    if let Some(token) = tokens.peek()
       && token.kind == TokenKind::RightParen
    {
        tokens.next();
        return Ok(arguments);
    }

    loop {
        arguments.push(parse_expression(tokens)?);
        match tokens.next() {
            Some(token) if token.kind == TokenKind::Comma => {},
            Some(token) if token.kind == TokenKind::RightParen => break,
            Some(token) => {
                return Err(SyntaxError::UnexpectedToken { token:    token.text.clone(),
                                                          position: token.position, });
            },
            None => return Err(SyntaxError::UnexpectedEndOfInput { position: call_position, }),
        }
    }

    Ok(arguments)
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. The inner expression is
/// returned as-is; there is no wrapper node, so parentheses only influence
/// grouping.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = tokens.next().unwrap();
    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some(token) if token.kind == TokenKind::RightParen => Ok(expr),
        Some(token) => Err(SyntaxError::ExpectedClosingParen { position: token.position, }),
        None => Err(SyntaxError::ExpectedClosingParen { position: open.position, }),
    }
}
