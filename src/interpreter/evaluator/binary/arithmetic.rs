use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an additive or multiplicative operation.
    ///
    /// - Two integers give an integer. Integer arithmetic wraps on overflow
    ///   and `/` truncates toward zero.
    /// - Two reals give a real.
    /// - An integer mixed with a real is promoted, and the result is a real.
    /// - For `+` only, if either side is text, both sides are rendered and
    ///   concatenated instead.
    ///
    /// # Errors
    /// - `DivisionByZero` for integer `/` or `%` by zero. Real division follows
    ///   IEEE-754 and yields an infinity or NaN instead.
    /// - `InvalidOperator` for any other combination of operand types.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pos = Position::new(1, 0);
    ///
    /// let sum = Context::eval_arithmetic(BinaryOperator::Add,
    ///                                    &Value::Integer(5),
    ///                                    &Value::Integer(10),
    ///                                    pos).unwrap();
    /// assert_eq!(sum, Value::Integer(15));
    ///
    /// let mixed = Context::eval_arithmetic(BinaryOperator::Mul,
    ///                                      &Value::Integer(3),
    ///                                      &Value::Real(0.5),
    ///                                      pos).unwrap();
    /// assert_eq!(mixed, Value::Real(1.5));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           pos: Position)
                           -> EvalResult<Value> {
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => Self::eval_integer_op(op, *a, *b, pos),
            (Real(a), Real(b)) => Ok(Real(Self::eval_real_op(op, *a, *b))),
            (Integer(a), Real(b)) => Ok(Real(Self::eval_real_op(op, promote(*a), *b))),
            (Real(a), Integer(b)) => Ok(Real(Self::eval_real_op(op, *a, promote(*b)))),
            _ if op == BinaryOperator::Add && (left.is_text() || right.is_text()) => {
                Ok(Self::eval_concat(left, right))
            },
            _ => Err(RuntimeError::InvalidOperator { verb: op.verb(),
                                                     left: left.kind_name(),
                                                     right: right.kind_name(),
                                                     pos }),
        }
    }

    fn eval_integer_op(op: BinaryOperator, a: i32, b: i32, pos: Position) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let result = match op {
            Add => a.wrapping_add(b),
            Sub => a.wrapping_sub(b),
            Mul => a.wrapping_mul(b),
            Div | Mod if b == 0 => return Err(RuntimeError::DivisionByZero { pos }),
            Div => a.wrapping_div(b),
            Mod => a.wrapping_rem(b),
        };

        Ok(Value::Integer(result))
    }

    fn eval_real_op(op: BinaryOperator, a: f32, b: f32) -> f32 {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        match op {
            Add => a + b,
            Sub => a - b,
            Mul => a * b,
            Div => a / b,
            Mod => a % b,
        }
    }
}

/// Widens an integer operand for mixed integer/real arithmetic.
#[allow(clippy::cast_precision_loss)]
const fn promote(value: i32) -> f32 {
    value as f32
}
