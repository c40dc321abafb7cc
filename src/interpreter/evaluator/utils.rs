use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Returns `true` if `sequence` may appear inside an escape literal.
///
/// Escapes exist to print characters the language gives a meaning to, such as
/// `[#]`, `[$]`, `[&]` or `[[]`, so only ASCII punctuation is accepted.
#[must_use]
pub const fn is_escapable(sequence: char) -> bool {
    sequence.is_ascii_punctuation()
}

impl Context<'_> {
    /// Evaluates an escape literal such as `[#]` to the text it stands for.
    ///
    /// # Errors
    /// Returns `InvalidEscapeSequence` if the character cannot be escaped.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::Position,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pos = Position::new(1, 0);
    ///
    /// assert_eq!(Context::eval_escape('#', pos).unwrap(), Value::Text("#".to_string()));
    /// assert!(Context::eval_escape('a', pos).is_err());
    /// ```
    pub fn eval_escape(sequence: char, pos: Position) -> EvalResult<Value> {
        if is_escapable(sequence) {
            Ok(Value::Text(sequence.to_string()))
        } else {
            Err(RuntimeError::InvalidEscapeSequence { sequence, pos })
        }
    }
}
