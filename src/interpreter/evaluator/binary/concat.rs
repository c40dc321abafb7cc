use crate::interpreter::{evaluator::core::Context, value::core::Value};

impl Context<'_> {
    /// Concatenates the rendered forms of two values into text.
    ///
    /// Never fails: booleans render as `TRUE`/`FALSE`, empty values as
    /// nothing, and everything else in its natural form.
    ///
    /// # Example
    /// ```
    /// use codelang::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let joined = Context::eval_concat(&Value::Integer(5), &Value::Bool(false));
    /// assert_eq!(joined, Value::Text("5FALSE".to_string()));
    /// ```
    #[must_use]
    pub fn eval_concat(left: &Value, right: &Value) -> Value {
        Value::Text(format!("{left}{right}"))
    }
}
