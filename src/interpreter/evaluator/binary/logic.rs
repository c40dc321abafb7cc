use crate::{
    ast::{BooleanOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// Both operands have already been evaluated; there is no short-circuit.
    ///
    /// # Errors
    /// Returns `InvalidBooleanOperator` if either operand is not a boolean.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::{BooleanOperator, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pos = Position::new(1, 0);
    /// let a = Value::Bool(true);
    /// let b = Value::Bool(false);
    ///
    /// assert_eq!(Context::eval_boolean(BooleanOperator::Or, &a, &b, pos).unwrap(),
    ///            Value::Bool(true));
    /// assert!(Context::eval_boolean(BooleanOperator::And, &a, &Value::Integer(1), pos).is_err());
    /// ```
    pub fn eval_boolean(op: BooleanOperator,
                        left: &Value,
                        right: &Value,
                        pos: Position)
                        -> EvalResult<Value> {
        match (left, right) {
            (Value::Bool(a), Value::Bool(b)) => {
                let result = match op {
                    BooleanOperator::And => *a && *b,
                    BooleanOperator::Or => *a || *b,
                };
                Ok(Value::Bool(result))
            },
            _ => Err(RuntimeError::InvalidBooleanOperator { op: op.to_string(),
                                                            left: left.kind_name(),
                                                            right: right.kind_name(),
                                                            pos }),
        }
    }
}
