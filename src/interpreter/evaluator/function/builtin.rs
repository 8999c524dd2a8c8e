use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Wraps a computed value, rejecting non-finite results of finite inputs.
///
/// A non-finite result produced from finite arguments means the operation
/// itself overflowed (or is undefined), and is reported as a mathematical
/// error naming the function. Non-finite arguments (the `inf` constant)
/// propagate untouched.
pub(crate) fn finite_result(value: f64,
                            args: &[f64],
                            name: &str,
                            position: usize)
                            -> EvalResult<f64> {
    if value.is_finite() || args.iter().any(|arg| !arg.is_finite()) {
        Ok(value)
    } else {
        Err(EvalError::Math { operation: name.to_owned(),
                              details:   if value.is_nan() {
                                  "result is undefined".to_string()
                              } else {
                                  "result overflowed".to_string()
                              },
                              position,  })
    }
}

/// Applies a one-argument `f64` method as a builtin function.
///
/// The generated functions take the single validated argument, apply the
/// named method, and wrap the result with [`finite_result`] so overflowing
/// operations (e.g. `exp` of a large value) report a mathematical error
/// instead of leaking infinity.
macro_rules! unary_builtin {
    ($fname:ident, $method:ident) => {
        pub(crate) fn $fname(args: &[f64], position: usize) -> EvalResult<f64> {
            finite_result(args[0].$method(), args, stringify!($fname), position)
        }
    };
}

unary_builtin!(abs, abs);
unary_builtin!(sin, sin);
unary_builtin!(cos, cos);
unary_builtin!(tan, tan);
unary_builtin!(atan, atan);
unary_builtin!(sinh, sinh);
unary_builtin!(cosh, cosh);
unary_builtin!(tanh, tanh);
unary_builtin!(exp, exp);
unary_builtin!(int, trunc);
unary_builtin!(degrees, to_degrees);
unary_builtin!(radians, to_radians);

/// Returns the argument unchanged.
///
/// Exists for symmetry with `int`: every value in this language is already a
/// double-precision float.
pub(crate) fn float(args: &[f64], _position: usize) -> EvalResult<f64> {
    Ok(args[0])
}

/// Applies a rounding operation (`floor`, `ceil`, or `round`) selected by
/// name.
pub(crate) fn unary_round(name: &str, args: &[f64], _position: usize) -> EvalResult<f64> {
    let op = match name {
        "floor" => f64::floor,
        "ceil" => f64::ceil,
        "round" => f64::round,
        _ => unreachable!(),
    };

    Ok(op(args[0]))
}

/// Computes the inverse sine, rejecting arguments outside `[-1, 1]`.
pub(crate) fn asin(args: &[f64], position: usize) -> EvalResult<f64> {
    let value = args[0];
    if !(-1.0..=1.0).contains(&value) {
        return Err(EvalError::Domain { details:  "Inverse sine argument outside [-1, 1]".to_string(),
                                       position, });
    }
    Ok(value.asin())
}

/// Computes the inverse cosine, rejecting arguments outside `[-1, 1]`.
pub(crate) fn acos(args: &[f64], position: usize) -> EvalResult<f64> {
    let value = args[0];
    if !(-1.0..=1.0).contains(&value) {
        return Err(EvalError::Domain { details:  "Inverse cosine argument outside [-1, 1]".to_string(),
                                       position, });
    }
    Ok(value.acos())
}

/// Computes a logarithm selected by name, rejecting non-positive arguments.
///
/// `log` and `ln` are the natural logarithm; `log10` and `log2` use the
/// matching fixed base.
pub(crate) fn logarithm(name: &str, args: &[f64], position: usize) -> EvalResult<f64> {
    let value = args[0];

    if value <= 0.0 {
        return Err(EvalError::Domain { details:  "Logarithm of non-positive number".to_string(),
                                       position, });
    }

    let result = match name {
        "log" | "ln" => value.ln(),
        "log10" => value.log10(),
        "log2" => value.log2(),
        _ => unreachable!(),
    };

    Ok(result)
}

/// Computes the square root, rejecting negative arguments.
pub(crate) fn sqrt(args: &[f64], position: usize) -> EvalResult<f64> {
    let value = args[0];
    if value < 0.0 {
        return Err(EvalError::Domain { details:  "Square root of negative number".to_string(),
                                       position, });
    }
    Ok(value.sqrt())
}

/// Computes the four-quadrant arctangent of `args[0] / args[1]`.
pub(crate) fn atan2(args: &[f64], _position: usize) -> EvalResult<f64> {
    Ok(args[0].atan2(args[1]))
}

/// Raises `args[0]` to the power `args[1]`.
///
/// Shares the exponentiation semantics of the `**` operator, including its
/// domain guards, by delegating to the operator evaluation.
pub(crate) fn pow(args: &[f64], position: usize) -> EvalResult<f64> {
    use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

    Context::eval_binary(BinaryOperator::Pow, args[0], args[1], position)
}
