use std::fmt;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The type annotation written in a declaration (`INT`, `FLOAT`, ...).
///
/// A binding's declared type is fixed for the whole run. Every non-empty value
/// stored in the binding has the runtime variant that matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    /// `INT`, a 32-bit signed integer.
    Integer,
    /// `FLOAT`, a 32-bit floating-point number.
    Real,
    /// `BOOL`
    Bool,
    /// `CHAR`
    Char,
    /// `STRING`
    Text,
}

impl DeclaredType {
    /// The keyword naming the type in source code and in diagnostics.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Integer => "INT",
            Self::Real => "FLOAT",
            Self::Bool => "BOOL",
            Self::Char => "CHAR",
            Self::Text => "STRING",
        }
    }

    /// Converts one piece of scanned input into a value of this type.
    ///
    /// The text is expected to be trimmed already.
    ///
    /// - `INT` and `FLOAT` use the standard numeric parsers.
    /// - `BOOL` accepts `true` or `false` in any letter case.
    /// - `CHAR` accepts exactly one character.
    /// - `STRING` accepts anything.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidScanFormat` naming the input and this
    /// type if the text cannot be converted.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::Position,
    ///     interpreter::value::{core::Value, declared_type::DeclaredType},
    /// };
    ///
    /// let pos = Position::new(1, 0);
    ///
    /// assert_eq!(DeclaredType::Integer.parse_input("42", pos).unwrap(), Value::Integer(42));
    /// assert_eq!(DeclaredType::Bool.parse_input("TRUE", pos).unwrap(), Value::Bool(true));
    /// assert!(DeclaredType::Char.parse_input("ab", pos).is_err());
    /// ```
    pub fn parse_input(self, input: &str, pos: Position) -> EvalResult<Value> {
        let invalid = || RuntimeError::InvalidScanFormat { input: input.to_string(),
                                                           expected: self,
                                                           pos };

        match self {
            Self::Integer => input.parse().map(Value::Integer).map_err(|_| invalid()),
            Self::Real => input.parse().map(Value::Real).map_err(|_| invalid()),
            Self::Bool => {
                if input.eq_ignore_ascii_case("true") {
                    Ok(Value::Bool(true))
                } else if input.eq_ignore_ascii_case("false") {
                    Ok(Value::Bool(false))
                } else {
                    Err(invalid())
                }
            },
            Self::Char => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Value::Char(c)),
                    _ => Err(invalid()),
                }
            },
            Self::Text => Ok(Value::Text(input.to_string())),
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
