use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Computes the factorial of a non-negative integer argument.
///
/// The factorial is only defined here for non-negative integers: a negative
/// argument and a fractional argument each produce a domain error. The
/// product is accumulated in `f64`; 170! is the largest factorial a double
/// can represent, so anything above that bound is reported as a mathematical
/// overflow before the loop runs.
///
/// # Parameters
/// - `args`: Slice containing one validated argument.
/// - `position`: Byte offset of the call, for error reporting.
///
/// # Returns
/// The factorial value wrapped in `EvalResult`.
pub(crate) fn factorial(args: &[f64], position: usize) -> EvalResult<f64> {
    let value = args[0];

    if value < 0.0 {
        return Err(EvalError::Domain { details:  "Factorial of negative number".to_string(),
                                       position, });
    }
    if value.fract() != 0.0 {
        return Err(EvalError::Domain { details:  "Factorial of non-integer number".to_string(),
                                       position, });
    }
    if value > 170.0 {
        return Err(EvalError::Math { operation: "factorial".to_string(),
                                     details:   "result overflowed".to_string(),
                                     position,  });
    }

    let n = value as u64;
    let mut result = 1.0_f64;
    for k in 2..=n {
        result *= k as f64;
    }

    Ok(result)
}
