use crate::{
    ast::{Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a sign operator on a value.
    ///
    /// - `Plus` returns the operand unchanged, whatever its type.
    /// - `Minus` negates integers and reals. Integer negation wraps, so
    ///   `-(-2147483648)` stays `-2147483648`.
    ///
    /// # Errors
    /// Returns `UnaryOperatorError` if `Minus` is applied to a non-numeric
    /// value.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::{Position, UnaryOperator},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pos = Position::new(1, 0);
    ///
    /// let v = Context::eval_unary(UnaryOperator::Minus, &Value::Integer(5), pos).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Minus, &Value::Bool(true), pos).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, pos: Position) -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => Ok(value.clone()),
            UnaryOperator::Minus => match value {
                Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
                Value::Real(r) => Ok(Value::Real(-r)),
                _ => Err(RuntimeError::UnaryOperatorError { symbol: op.symbol(),
                                                            pos }),
            },
        }
    }

    /// Evaluates `NOT` on a value.
    ///
    /// # Errors
    /// Returns `NegationError` if the operand is not a boolean.
    pub fn eval_not(value: &Value, pos: Position) -> EvalResult<Value> {
        match value {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            _ => Err(RuntimeError::NegationError { pos }),
        }
    }
}
