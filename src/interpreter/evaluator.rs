/// Core evaluation logic and context management.
///
/// Contains the evaluation context with its variable, constant and function
/// tables, the per-node dispatch, and the `EvaluationResult` type carrying
/// timing metadata.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic for the closed binary operator set, including
/// zero-divisor checks, exponentiation domain guards, and overflow wrapping.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles identity and arithmetic negation.
pub mod unary;

/// Per-call safety limits.
///
/// Tracks recursion depth and elapsed wall-clock time through a budget value
/// threaded by copy through the recursive tree walk.
pub(crate) mod budget;

/// Function evaluation.
///
/// Handles builtin and registered function calls, argument-count checking,
/// and the builtin function table.
pub mod function;
