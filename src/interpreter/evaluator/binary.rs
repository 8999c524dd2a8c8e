use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a binary operation on two already-computed operands.
    ///
    /// Dispatch is a single exhaustive `match` over the closed operator enum.
    /// Zero divisors are rejected for `/`, `//` and `%`, so division never
    /// produces `inf` or `NaN`. Exponentiation rejects `0 ** negative` and a
    /// negative base with a non-integer exponent. A non-finite result from
    /// finite operands is reported as a mathematical error; non-finite
    /// operands (the `inf` constant) propagate untouched.
    ///
    /// # Parameters
    /// - `op`: The binary operator.
    /// - `left`: Left operand value.
    /// - `right`: Right operand value.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Returns
    /// The computed value wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use expreval::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let value = Context::eval_binary(BinaryOperator::FloorDiv, 7.0, 2.0, 0).unwrap();
    /// assert_eq!(value, 3.0);
    ///
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0, 0).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       position: usize)
                       -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

        let value = match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                left / right
            },
            FloorDiv => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                (left / right).floor()
            },
            Mod => {
                if right == 0.0 {
                    return Err(EvalError::ModuloByZero { position });
                }
                left % right
            },
            Pow => {
                if left == 0.0 && right < 0.0 {
                    return Err(EvalError::ZeroToNegativePower { position });
                }
                if left < 0.0 && right.fract() != 0.0 {
                    return Err(EvalError::NegativeBaseNonIntegerExponent { position });
                }
                left.powf(right)
            },
        };

        if value.is_finite() || !left.is_finite() || !right.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::Math { operation: format!("{op} operation"),
                                  details:   if value.is_nan() {
                                      "result is undefined".to_string()
                                  } else {
                                      "result overflowed".to_string()
                                  },
                                  position,  })
        }
    }
}
