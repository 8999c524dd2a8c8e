use crate::interpreter::evaluator::{core::EvalResult, function::builtin::finite_result};

/// Computes the minimum or maximum of one or more numeric values.
///
/// The operation is selected by the `name` parameter, which must be `"min"`
/// or `"max"`. The argument list is folded pairwise, so any arity of one or
/// more works.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing at least one argument.
/// - `_position`: Byte offset of the call; unused, the fold cannot fail.
///
/// # Returns
/// The extreme value wrapped in `EvalResult`.
pub(crate) fn min_max(name: &str, args: &[f64], _position: usize) -> EvalResult<f64> {
    let mut result = args[0];

    for &value in &args[1..] {
        result = if name == "min" {
            result.min(value)
        } else {
            result.max(value)
        };
    }

    Ok(result)
}

/// Sums one or more numeric values.
///
/// Accumulation happens in `f64`; a sum that overflows the finite range from
/// finite inputs is reported as a mathematical error.
pub(crate) fn sum(args: &[f64], position: usize) -> EvalResult<f64> {
    let total: f64 = args.iter().sum();

    finite_result(total, args, "sum", position)
}
