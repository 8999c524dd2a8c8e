use std::collections::HashMap;

use crate::{
    error::FunctionError,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        function::{builtin, factorial, min_max},
    },
};

/// Type alias for function implementations.
///
/// A function receives the slice of already-evaluated argument values and the
/// byte offset of the call for error reporting. The dispatcher validates the
/// argument count against the entry's [`Arity`] before invoking the
/// implementation, so implementations index the slice directly.
pub type FunctionImpl = fn(&[f64], usize) -> EvalResult<f64>;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `AtLeast(n)` means the function accepts `n` or more arguments.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Arity {
    /// The function takes exactly this many arguments.
    Exact(usize),
    /// The function takes at least this many arguments.
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    ///
    /// ## Example
    /// ```
    /// use expreval::interpreter::evaluator::function::core::Arity;
    ///
    /// assert!(Arity::Exact(2).check(2));
    /// assert!(!Arity::Exact(2).check(3));
    /// assert!(Arity::AtLeast(1).check(4));
    /// assert!(!Arity::AtLeast(1).check(0));
    /// ```
    #[must_use]
    pub const fn check(self, count: usize) -> bool {
        match self {
            Self::Exact(expected) => count == expected,
            Self::AtLeast(least) => count >= least,
        }
    }

    /// Checks an argument count, producing the matching evaluation error on
    /// mismatch.
    pub(crate) fn validate(self, name: &str, found: usize, position: usize) -> EvalResult<()> {
        use crate::error::EvalError;

        match self {
            Self::Exact(expected) if found != expected => {
                Err(EvalError::ArgumentCountMismatch { name: name.to_owned(),
                                                       expected,
                                                       found,
                                                       position })
            },
            Self::AtLeast(least) if found < least => {
                Err(EvalError::TooFewArguments { name: name.to_owned(),
                                                 least,
                                                 found,
                                                 position })
            },
            _ => Ok(()),
        }
    }
}

/// A callable registered in a context.
///
/// The arity contract and the implementation live together, so each
/// function's metadata has a single source of truth; there is no separate
/// arity table to drift out of sync.
#[derive(Clone, Copy)]
pub struct FunctionEntry {
    /// How many arguments the function accepts.
    pub arity: Arity,
    /// The implementation invoked after arity validation.
    pub func:  FunctionImpl,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table seeding every new context),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  FunctionImpl,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"       => { arity: Arity::Exact(1), func: builtin::abs },
    "round"     => { arity: Arity::Exact(1), func: |args, position| builtin::unary_round("round", args, position) },
    "ceil"      => { arity: Arity::Exact(1), func: |args, position| builtin::unary_round("ceil", args, position) },
    "floor"     => { arity: Arity::Exact(1), func: |args, position| builtin::unary_round("floor", args, position) },
    "int"       => { arity: Arity::Exact(1), func: builtin::int },
    "float"     => { arity: Arity::Exact(1), func: builtin::float },
    "sin"       => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"       => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"       => { arity: Arity::Exact(1), func: builtin::tan },
    "asin"      => { arity: Arity::Exact(1), func: builtin::asin },
    "acos"      => { arity: Arity::Exact(1), func: builtin::acos },
    "atan"      => { arity: Arity::Exact(1), func: builtin::atan },
    "sinh"      => { arity: Arity::Exact(1), func: builtin::sinh },
    "cosh"      => { arity: Arity::Exact(1), func: builtin::cosh },
    "tanh"      => { arity: Arity::Exact(1), func: builtin::tanh },
    "log"       => { arity: Arity::Exact(1), func: |args, position| builtin::logarithm("log", args, position) },
    "log10"     => { arity: Arity::Exact(1), func: |args, position| builtin::logarithm("log10", args, position) },
    "log2"      => { arity: Arity::Exact(1), func: |args, position| builtin::logarithm("log2", args, position) },
    "ln"        => { arity: Arity::Exact(1), func: |args, position| builtin::logarithm("ln", args, position) },
    "exp"       => { arity: Arity::Exact(1), func: builtin::exp },
    "sqrt"      => { arity: Arity::Exact(1), func: builtin::sqrt },
    "factorial" => { arity: Arity::Exact(1), func: factorial::factorial },
    "degrees"   => { arity: Arity::Exact(1), func: builtin::degrees },
    "radians"   => { arity: Arity::Exact(1), func: builtin::radians },
    "atan2"     => { arity: Arity::Exact(2), func: builtin::atan2 },
    "pow"       => { arity: Arity::Exact(2), func: builtin::pow },
    "min"       => { arity: Arity::AtLeast(1), func: |args, position| min_max::min_max("min", args, position) },
    "max"       => { arity: Arity::AtLeast(1), func: |args, position| min_max::min_max("max", args, position) },
    "sum"       => { arity: Arity::AtLeast(1), func: min_max::sum },
}

/// Builds the function table every new context starts with.
pub(crate) fn builtin_entries() -> HashMap<String, FunctionEntry> {
    BUILTIN_TABLE.iter()
                 .map(|def| {
                     (def.name.to_string(),
                      FunctionEntry { arity: def.arity,
                                      func:  def.func, })
                 })
                 .collect()
}

impl Context {
    /// Evaluates a function call.
    ///
    /// The name is resolved in the function table, the argument count is
    /// validated against the entry's arity, and the implementation is
    /// invoked. Domain guards live inside the implementations themselves.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values.
    /// - `position`: Byte offset of the call, for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup, arity, or the function
    /// itself fails.
    pub(crate) fn eval_function(&self,
                                name: &str,
                                args: &[f64],
                                position: usize)
                                -> EvalResult<f64> {
        let entry = match self.lookup_function(name) {
            Ok(entry) => entry,
            Err(error) => return Err(error.into_eval_error(position)),
        };

        entry.arity.validate(name, args.len(), position)?;

        (entry.func)(args, position)
    }

    /// Looks up a function entry by name.
    ///
    /// # Errors
    /// Returns a [`FunctionError`] if no function is registered under the
    /// name.
    pub fn lookup_function(&self, name: &str) -> Result<&FunctionEntry, FunctionError> {
        self.functions
            .get(name)
            .ok_or_else(|| FunctionError::Unknown { name: name.to_string(), })
    }

    /// Registers a function, replacing any previous entry under the name.
    ///
    /// The arity travels with the implementation; calls are validated against
    /// it before the implementation runs.
    ///
    /// ## Example
    /// ```
    /// use expreval::interpreter::{
    ///     evaluator::{core::Context, function::core::Arity},
    ///     parser::core::parse,
    /// };
    ///
    /// let mut context = Context::new();
    /// context.register_function("double", Arity::Exact(1), |args, _position| Ok(args[0] * 2.0));
    ///
    /// let expr = parse("double(21)").unwrap();
    /// assert_eq!(context.evaluate(&expr, None).value(), Some(42.0));
    ///
    /// let expr = parse("double(1, 2)").unwrap();
    /// assert!(!context.evaluate(&expr, None).is_ok());
    /// ```
    pub fn register_function(&mut self, name: &str, arity: Arity, func: FunctionImpl) {
        self.functions.insert(name.to_string(),
                              FunctionEntry { arity, func });
    }
}
