use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{OperatorKind, Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let TokenKind::Operator(symbol) = token.kind
           && matches!(token_to_binary_operator(symbol),
                       BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = token.position;
            let op = token_to_binary_operator(symbol);
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, `//`, and `%`.
///
/// The rule is: `multiplicative := power (("*" | "/" | "//" | "%") power)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_power(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let TokenKind::Operator(symbol) = token.kind
           && matches!(token_to_binary_operator(symbol),
                       BinaryOperator::Mul
                       | BinaryOperator::Div
                       | BinaryOperator::FloorDiv
                       | BinaryOperator::Mod)
        {
            let position = token.position;
            let op = token_to_binary_operator(symbol);
            tokens.next();
            let right = parse_power(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ** b ** c` parses as
/// `a ** (b ** c)`. The left operand comes from the unary level; on seeing a
/// power operator the right operand recurses into this level itself rather
/// than the next-lower one.
///
/// The rule is: `power := unary (("**" | "^") power)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_unary(tokens)?;

    if let Some(token) = tokens.peek()
       && let TokenKind::Operator(symbol) = token.kind
       && matches!(token_to_binary_operator(symbol), BinaryOperator::Pow)
    {
        let position = token.position;
        tokens.next();
        let right = parse_power(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(right),
                                   position });
    }

    Ok(left)
}

/// Maps an operator symbol to its binary operator.
///
/// Every lexical operator of the language has a binary meaning, so the
/// mapping is total; `+` and `-` double as unary operators, which the unary
/// level checks for before this mapping is consulted. Both `**` and `^`
/// map to [`BinaryOperator::Pow`].
///
/// # Example
/// ```
/// use expreval::{
///     ast::BinaryOperator,
///     interpreter::{lexer::OperatorKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(OperatorKind::Caret),
///            BinaryOperator::Pow);
/// ```
#[must_use]
pub const fn token_to_binary_operator(symbol: OperatorKind) -> BinaryOperator {
    match symbol {
        OperatorKind::Plus => BinaryOperator::Add,
        OperatorKind::Minus => BinaryOperator::Sub,
        OperatorKind::Star => BinaryOperator::Mul,
        OperatorKind::Slash => BinaryOperator::Div,
        OperatorKind::DoubleSlash => BinaryOperator::FloorDiv,
        OperatorKind::Percent => BinaryOperator::Mod,
        OperatorKind::DoubleStar | OperatorKind::Caret => BinaryOperator::Pow,
    }
}
