/// Syntax errors.
///
/// Defines all error types that can occur during tokenization and parsing of
/// an expression. Syntax errors carry the byte offset of the offending token
/// and offer a one-line remediation suggestion where one makes sense.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking an expression
/// tree: undefined names, domain violations, arithmetic failures, and
/// safety-limit breaches, plus the narrow lookup errors surfaced by the
/// context API.
pub mod eval_error;

pub use eval_error::{EvalError, FunctionError, VariableError};
pub use syntax_error::SyntaxError;
