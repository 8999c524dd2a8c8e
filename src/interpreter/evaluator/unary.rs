use crate::{ast::UnaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Evaluates a unary operation on an already-computed operand.
    ///
    /// `+x` is the identity and `-x` negates; neither can fail on an `f64`.
    ///
    /// # Example
    /// ```
    /// use expreval::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Plus, 5.0), 5.0);
    /// ```
    #[must_use]
    pub const fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => -value,
        }
    }
}
