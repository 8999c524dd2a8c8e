//! # expreval
//!
//! expreval is a numeric expression interpreter written in Rust.
//! It tokenizes, parses, and evaluates arithmetic expressions with support
//! for variables, named constants, builtin math functions, and user-registered
//! functions, while guarding evaluation with recursion-depth and wall-clock
//! limits.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;

use crate::{
    error::SyntaxError,
    interpreter::{
        evaluator::core::{Context, EvaluationResult},
        parser::core::parse,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// the syntactic structure of an expression as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
/// - Serializes trees back into re-parseable text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, including positions and remediation
/// suggestions for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, and error handling
/// to provide a complete pipeline from an expression string to a numeric
/// result. It exposes the public API for interpreting expressions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides entry points for tokenizing, parsing and evaluating.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses and evaluates an expression with a default context.
///
/// This is the one-call convenience entry: the source is tokenized, parsed,
/// and evaluated against a freshly built [`Context`] (default constants and
/// builtin functions). The optional `bindings` map supplies variable values
/// for the call.
///
/// # Errors
/// Returns a [`SyntaxError`] if the source fails to tokenize or parse.
/// Evaluation failures are not errors at this level: they are carried inside
/// the returned [`EvaluationResult`] together with the elapsed time.
///
/// # Examples
/// ```
/// use expreval::evaluate_source;
///
/// // A plain expression evaluates to its value.
/// let result = evaluate_source("2 ** 3 ** 2", None).unwrap();
/// assert_eq!(result.value(), Some(512.0));
///
/// // Malformed input is a syntax error.
/// assert!(evaluate_source("2 +", None).is_err());
///
/// // Domain violations surface inside the evaluation result.
/// let result = evaluate_source("sqrt(-1)", None).unwrap();
/// assert!(!result.is_ok());
/// ```
pub fn evaluate_source(source: &str,
                       bindings: Option<&HashMap<String, f64>>)
                       -> Result<EvaluationResult, SyntaxError> {
    let expr = parse(source)?;
    let context = Context::new();

    Ok(context.evaluate(&expr, bindings))
}
