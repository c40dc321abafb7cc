use crate::{
    ast::{Position, RelationalOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `<>` compare any two values structurally; values of different
    /// kinds are simply unequal, so `3 == 3.0` is `FALSE`.
    ///
    /// The ordering operators are only defined for two integers or two reals.
    /// Unlike the arithmetic operators they do not promote, so `3 > 2.5` is an
    /// error.
    ///
    /// # Errors
    /// Returns `InvalidRelationalOperator` if an ordering operator receives
    /// operands of mismatched or non-numeric types.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::{Position, RelationalOperator},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pos = Position::new(1, 0);
    ///
    /// let less = Context::eval_relational(RelationalOperator::Less,
    ///                                     &Value::Real(3.0),
    ///                                     &Value::Real(5.0),
    ///                                     pos);
    /// assert_eq!(less.unwrap(), Value::Bool(true));
    ///
    /// let mixed = Context::eval_relational(RelationalOperator::Greater,
    ///                                      &Value::Integer(3),
    ///                                      &Value::Real(2.5),
    ///                                      pos);
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_relational(op: RelationalOperator,
                           left: &Value,
                           right: &Value,
                           pos: Position)
                           -> EvalResult<Value> {
        use RelationalOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let result = match op {
            Equal => left == right,
            NotEqual => left != right,
            Greater | Less | GreaterEqual | LessEqual => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => ordering_holds(op, a, b),
                (Value::Real(a), Value::Real(b)) => ordering_holds(op, a, b),
                _ => {
                    return Err(RuntimeError::InvalidRelationalOperator { op:    op.to_string(),
                                                                         left:  left.kind_name(),
                                                                         right: right.kind_name(),
                                                                         pos, });
                },
            },
        };

        Ok(Value::Bool(result))
    }
}

fn ordering_holds<T: PartialOrd>(op: RelationalOperator, a: T, b: T) -> bool {
    match op {
        RelationalOperator::Greater => a > b,
        RelationalOperator::Less => a < b,
        RelationalOperator::GreaterEqual => a >= b,
        RelationalOperator::LessEqual => a <= b,
        RelationalOperator::Equal => a == b,
        RelationalOperator::NotEqual => a != b,
    }
}
