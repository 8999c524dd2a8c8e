use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use crate::{
    ast::Expr,
    error::{EvalError, VariableError},
    interpreter::evaluator::{
        budget::EvalBudget,
        function::core::{FunctionEntry, builtin_entries},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default ceiling on evaluator recursion depth.
pub const MAX_RECURSION_DEPTH: usize = 1000;
/// Default ceiling on wall-clock time for a single `evaluate` call.
pub const MAX_EXECUTION_TIME: Duration = Duration::from_secs(10);

/// The named constants every context starts with.
///
/// The scanner also consults this table to classify identifiers as constant
/// tokens. Constants registered later through
/// [`Context::register_constant`] still resolve during evaluation; their
/// tokens merely classify as variables.
pub const DEFAULT_CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI),
                                                ("e", std::f64::consts::E),
                                                ("tau", std::f64::consts::TAU),
                                                ("inf", f64::INFINITY)];

/// Checks whether a name belongs to the default constant table.
///
/// ## Example
/// ```
/// use expreval::interpreter::evaluator::core::is_default_constant;
///
/// assert!(is_default_constant("pi"));
/// assert!(!is_default_constant("x"));
/// ```
#[must_use]
pub fn is_default_constant(name: &str) -> bool {
    DEFAULT_CONSTANTS.iter().any(|(constant, _)| *constant == name)
}

/// Stores the evaluation context.
///
/// This struct holds the three name-keyed tables consulted while walking an
/// expression tree: user-settable variables, named constants, and callable
/// functions. The tables are private; constants and functions change only
/// through the explicit registration APIs, variables through
/// [`Context::set_variable`] and [`Context::clear_variables`].
///
/// ## Usage
///
/// A `Context` is created once and reused across evaluations. Evaluation
/// itself takes `&self`, since nothing in an expression can mutate the
/// tables, so a shared context can serve concurrent evaluations as long as
/// the mutating APIs are externally synchronized.
pub struct Context {
    pub(crate) variables: HashMap<String, f64>,
    pub(crate) constants: HashMap<String, f64>,
    pub(crate) functions: HashMap<String, FunctionEntry>,
    /// Recursion-depth limit for a single `evaluate` call.
    pub max_recursion_depth: usize,
    /// Wall-clock limit for a single `evaluate` call.
    pub max_execution_time: Duration,
}

/// The outcome of a single `evaluate` call.
///
/// Either a finite numeric value or an [`EvalError`], always bundled with the
/// elapsed wall-clock time. Evaluation is all-or-nothing: no partial results
/// exist.
#[derive(Debug)]
pub struct EvaluationResult {
    result:         Result<f64, EvalError>,
    execution_time: Duration,
}

impl EvaluationResult {
    /// Gets the computed value, if evaluation succeeded.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self.result {
            Ok(value) => Some(value),
            Err(_) => None,
        }
    }

    /// Gets the evaluation error, if evaluation failed.
    #[must_use]
    pub const fn error(&self) -> Option<&EvalError> {
        match &self.result {
            Ok(_) => None,
            Err(error) => Some(error),
        }
    }

    /// Gets the user-facing error message, if evaluation failed.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error().map(std::string::ToString::to_string)
    }

    /// Gets the source position the failure points at, if evaluation failed.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.error().map(EvalError::position)
    }

    /// Whether evaluation produced a value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// How long evaluation ran, including on failure.
    #[must_use]
    pub const fn execution_time(&self) -> Duration {
        self.execution_time
    }

    /// Unwraps the result, discarding the timing metadata.
    #[must_use]
    pub fn into_result(self) -> Result<f64, EvalError> {
        self.result
    }
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no variables, the default
    /// constants (`pi`, `e`, `tau`, `inf`), the builtin function table, and
    /// the default safety limits.
    #[must_use]
    pub fn new() -> Self {
        let constants = DEFAULT_CONSTANTS.iter()
                                         .map(|(name, value)| ((*name).to_string(), *value))
                                         .collect();

        Self { variables: HashMap::new(),
               constants,
               functions: builtin_entries(),
               max_recursion_depth: MAX_RECURSION_DEPTH,
               max_execution_time: MAX_EXECUTION_TIME, }
    }

    /// Evaluates an expression tree and returns the outcome with timing
    /// metadata.
    ///
    /// This is the main entry point for evaluation. A fresh depth/time budget
    /// is created per call, so concurrent or repeated evaluations never share
    /// limit state. The optional `bindings` map overlays the context's
    /// variables for the duration of the call without mutating them.
    ///
    /// The call never panics and never returns a partial result: any failure
    /// inside the tree walk surfaces as the result's error, with the elapsed
    /// time still attached.
    ///
    /// # Parameters
    /// - `expr`: Expression tree to evaluate.
    /// - `bindings`: Optional per-call variable bindings, consulted before
    ///   the context's own variables.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use expreval::interpreter::{evaluator::core::Context, parser::core::parse};
    ///
    /// let context = Context::new();
    ///
    /// let expr = parse("2 + 3 * 4").unwrap();
    /// assert_eq!(context.evaluate(&expr, None).value(), Some(14.0));
    ///
    /// let expr = parse("x * y").unwrap();
    /// let bindings = HashMap::from([("x".to_string(), 10.0), ("y".to_string(), 5.0)]);
    /// assert_eq!(context.evaluate(&expr, Some(&bindings)).value(), Some(50.0));
    ///
    /// let expr = parse("5 / 0").unwrap();
    /// let result = context.evaluate(&expr, None);
    /// assert!(result.error_message().unwrap().contains("Division by zero"));
    /// ```
    #[must_use]
    pub fn evaluate(&self,
                    expr: &Expr,
                    bindings: Option<&HashMap<String, f64>>)
                    -> EvaluationResult {
        let started = Instant::now();
        let budget = EvalBudget::new(started, self.max_recursion_depth, self.max_execution_time);

        let result = self.eval_node(expr, bindings, budget);

        EvaluationResult { result,
                           execution_time: started.elapsed(), }
    }

    /// Evaluates a single node, dispatching on its variant.
    ///
    /// Every descent derives a deeper budget first, so both safety limits are
    /// checked on each visited node. Binary operands are evaluated eagerly,
    /// left before right; function arguments eagerly, left to right.
    pub(crate) fn eval_node(&self,
                            expr: &Expr,
                            bindings: Option<&HashMap<String, f64>>,
                            budget: EvalBudget)
                            -> EvalResult<f64> {
        let budget = budget.descend(expr.position())?;

        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, position } | Expr::Constant { name, position } => {
                self.eval_name(name, *position, bindings)
            },
            Expr::UnaryOp { op, operand, .. } => {
                let value = self.eval_node(operand, bindings, budget)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let lhs = self.eval_node(left, bindings, budget)?;
                let rhs = self.eval_node(right, bindings, budget)?;
                Self::eval_binary(*op, lhs, rhs, *position)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 position, } => {
                let mut args = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    args.push(self.eval_node(argument, bindings, budget)?);
                }
                self.eval_function(name, &args, *position)
            },
        }
    }

    /// Resolves a name against the call bindings, then the variable table,
    /// then the constant table.
    ///
    /// Variable and constant nodes share this lookup: the scanner's
    /// classification only affects the token kind, not resolution order. A
    /// miss in every table is widened from the narrow [`VariableError`] into
    /// the evaluation error carrying the reference's position.
    fn eval_name(&self,
                 name: &str,
                 position: usize,
                 bindings: Option<&HashMap<String, f64>>)
                 -> EvalResult<f64> {
        if let Some(bindings) = bindings
           && let Some(value) = bindings.get(name)
        {
            return Ok(*value);
        }
        if let Some(value) = self.variables.get(name) {
            return Ok(*value);
        }
        if let Some(value) = self.constants.get(name) {
            return Ok(*value);
        }
        Err(VariableError::Undefined { name: name.to_owned(), }.into_eval_error(position))
    }

    /// Sets a variable, replacing any previous value under the name.
    ///
    /// ## Example
    /// ```
    /// use expreval::interpreter::{evaluator::core::Context, parser::core::parse};
    ///
    /// let mut context = Context::new();
    /// context.set_variable("x", 10.0);
    ///
    /// let expr = parse("x + 1").unwrap();
    /// assert_eq!(context.evaluate(&expr, None).value(), Some(11.0));
    /// ```
    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Looks up a variable by name.
    ///
    /// Only the variable table is consulted; constants are a separate
    /// namespace reachable through evaluation.
    ///
    /// # Errors
    /// Returns a [`VariableError`] if the variable has not been set.
    ///
    /// ## Example
    /// ```
    /// use expreval::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// context.set_variable("x", 2.5);
    ///
    /// assert_eq!(context.get_variable("x"), Ok(2.5));
    /// assert!(context.get_variable("y").is_err());
    /// ```
    pub fn get_variable(&self, name: &str) -> Result<f64, VariableError> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| VariableError::Undefined { name: name.to_string(), })
    }

    /// Removes all variables from the context.
    ///
    /// Constants and functions are unaffected.
    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    /// Registers a named constant, replacing any previous value under the
    /// name.
    ///
    /// ## Example
    /// ```
    /// use expreval::interpreter::{evaluator::core::Context, parser::core::parse};
    ///
    /// let mut context = Context::new();
    /// context.register_constant("phi", 1.618_033_988_749_895);
    ///
    /// let expr = parse("phi * 2").unwrap();
    /// assert!(context.evaluate(&expr, None).is_ok());
    /// ```
    pub fn register_constant(&mut self, name: &str, value: f64) {
        self.constants.insert(name.to_string(), value);
    }
}
