use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvalError {
    /// Tried to use a name that resolves to neither a variable nor a constant.
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Byte offset of the reference in the source.
        position: usize,
    },
    /// Called a function that is not registered.
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Byte offset of the call in the source.
        position: usize,
    },
    /// A fixed-arity function received the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// How many arguments the function expects.
        expected: usize,
        /// How many arguments were supplied.
        found:    usize,
        /// Byte offset of the call in the source.
        position: usize,
    },
    /// A variable-arity function received fewer arguments than its minimum.
    TooFewArguments {
        /// The name of the function.
        name:     String,
        /// The minimum number of arguments.
        least:    usize,
        /// How many arguments were supplied.
        found:    usize,
        /// Byte offset of the call in the source.
        position: usize,
    },
    /// Attempted division (or floor division) by zero.
    DivisionByZero {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// Attempted modulo by zero.
    ModuloByZero {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// Raised zero to a negative power.
    ZeroToNegativePower {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// Raised a negative base to a non-integer exponent.
    NegativeBaseNonIntegerExponent {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// An argument fell outside the mathematical domain of a function.
    Domain {
        /// Description of the violated domain, e.g. "Square root of negative
        /// number".
        details:  String,
        /// Byte offset of the call in the source.
        position: usize,
    },
    /// An arithmetic operation produced a value outside the finite `f64`
    /// range.
    Math {
        /// The operator symbol or function name that failed.
        operation: String,
        /// Description of the failure.
        details:   String,
        /// Byte offset of the operation in the source.
        position:  usize,
    },
    /// Evaluation descended deeper than the recursion limit allows.
    RecursionLimitExceeded {
        /// The configured depth limit.
        limit:    usize,
        /// Byte offset of the node that breached the limit.
        position: usize,
    },
    /// Evaluation ran longer than the execution-time limit allows.
    ExecutionTimeExceeded {
        /// The configured time limit.
        limit:    Duration,
        /// Byte offset of the node that breached the limit.
        position: usize,
    },
}

impl EvalError {
    /// Gets the source position the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UndefinedVariable { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::ArgumentCountMismatch { position, .. }
            | Self::TooFewArguments { position, .. }
            | Self::DivisionByZero { position }
            | Self::ModuloByZero { position }
            | Self::ZeroToNegativePower { position }
            | Self::NegativeBaseNonIntegerExponent { position }
            | Self::Domain { position, .. }
            | Self::Math { position, .. }
            | Self::RecursionLimitExceeded { position, .. }
            | Self::ExecutionTimeExceeded { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, position } => {
                write!(f, "Error at position {position}: Undefined variable '{name}'.")
            },
            Self::UnknownFunction { name, position } => {
                write!(f, "Error at position {position}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          position, } => write!(f,
                                                                "Error at position {position}: Function '{name}' expects {expected} argument(s), but found {found}."),
            Self::TooFewArguments { name,
                                    least,
                                    found,
                                    position, } => write!(f,
                                                          "Error at position {position}: Function '{name}' expects at least {least} argument(s), but found {found}."),
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::ModuloByZero { position } => {
                write!(f, "Error at position {position}: Modulo by zero.")
            },
            Self::ZeroToNegativePower { position } => write!(f,
                                                             "Error at position {position}: Zero to negative power is undefined."),
            Self::NegativeBaseNonIntegerExponent { position } => write!(f,
                                                                        "Error at position {position}: Negative base with non-integer exponent."),
            Self::Domain { details, position } => {
                write!(f, "Error at position {position}: {details}.")
            },
            Self::Math { operation,
                         details,
                         position, } => write!(f,
                                               "Error at position {position}: Mathematical error in {operation}: {details}."),
            Self::RecursionLimitExceeded { limit, position } => write!(f,
                                                                      "Error at position {position}: Maximum recursion depth ({limit}) exceeded."),
            Self::ExecutionTimeExceeded { limit, position } => write!(f,
                                                                     "Error at position {position}: Maximum execution time ({limit:?}) exceeded."),
        }
    }
}

impl std::error::Error for EvalError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Name-resolution failure for variable lookups through the context API.
///
/// Inside the evaluator this is widened to [`EvalError::UndefinedVariable`]
/// via [`VariableError::into_eval_error`].
pub enum VariableError {
    /// The variable has not been set.
    Undefined {
        /// The name of the variable.
        name: String,
    },
}

impl VariableError {
    /// Widens the lookup failure into an evaluation error at a position.
    #[must_use]
    pub fn into_eval_error(self, position: usize) -> EvalError {
        match self {
            Self::Undefined { name } => EvalError::UndefinedVariable { name, position },
        }
    }
}

impl std::fmt::Display for VariableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined { name } => write!(f, "Variable '{name}' is not defined."),
        }
    }
}

impl std::error::Error for VariableError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Name-resolution failure for function lookups through the context API.
///
/// Inside the evaluator this is widened to [`EvalError::UnknownFunction`]
/// via [`FunctionError::into_eval_error`].
pub enum FunctionError {
    /// No function is registered under the name.
    Unknown {
        /// The name of the function.
        name: String,
    },
}

impl FunctionError {
    /// Widens the lookup failure into an evaluation error at a position.
    #[must_use]
    pub fn into_eval_error(self, position: usize) -> EvalError {
        match self {
            Self::Unknown { name } => EvalError::UnknownFunction { name, position },
        }
    }
}

impl std::fmt::Display for FunctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown { name } => write!(f, "Function '{name}' is not defined."),
        }
    }
}

impl std::error::Error for FunctionError {}
