use crate::{
    ast::{LiteralValue, Position},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::declared_type::DeclaredType},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every datum that can appear in expressions, assignments
/// and conditions. Values are never mutated; operators always build new ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A 32-bit signed integer.
    Integer(i32),
    /// A 32-bit floating-point number.
    Real(f32),
    /// A boolean value.
    /// Produced by comparison operators and `NOT`/`AND`/`OR`. Conditions of
    /// `IF` and the loops must evaluate to `Bool`.
    Bool(bool),
    /// A single character.
    Char(char),
    /// A piece of text.
    Text(String),
    /// The value of a declared but never assigned variable.
    #[default]
    Empty,
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// Returns the declared type matching this value, or `None` for
    /// [`Value::Empty`].
    ///
    /// # Example
    /// ```
    /// use codelang::interpreter::value::{core::Value, declared_type::DeclaredType};
    ///
    /// assert_eq!(Value::Real(1.5).type_of(), Some(DeclaredType::Real));
    /// assert_eq!(Value::Empty.type_of(), None);
    /// ```
    #[must_use]
    pub const fn type_of(&self) -> Option<DeclaredType> {
        match self {
            Self::Integer(_) => Some(DeclaredType::Integer),
            Self::Real(_) => Some(DeclaredType::Real),
            Self::Bool(_) => Some(DeclaredType::Bool),
            Self::Char(_) => Some(DeclaredType::Char),
            Self::Text(_) => Some(DeclaredType::Text),
            Self::Empty => None,
        }
    }

    /// The type name used in diagnostics: the declared-type keyword, or
    /// `NULL` for an empty value.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self.type_of() {
            Some(ty) => ty.keyword(),
            None => "NULL",
        }
    }

    /// Renders the value the way `DISPLAY` and `&` print it.
    ///
    /// Booleans render as the uppercase literals `TRUE` and `FALSE`; an empty
    /// value renders as nothing. Everything else uses its natural text form.
    ///
    /// # Example
    /// ```
    /// use codelang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Bool(true).render(), "TRUE");
    /// assert_eq!(Value::Real(5.5).render(), "5.5");
    /// assert_eq!(Value::Empty.render(), "");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Interprets the value as the outcome of a condition.
    ///
    /// # Errors
    /// Returns `RuntimeError::LogicError` if the value is not a boolean.
    pub fn as_condition(&self, pos: Position) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::LogicError { value: self.render(),
                                                pos }),
        }
    }

    /// Checks that the value may be stored in a binding of type `expected`.
    ///
    /// No widening or narrowing happens here: an `INT` value is rejected for a
    /// `FLOAT` binding even though the two mix freely inside expressions.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeMismatch` if the variants differ.
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
    /// assert!(Value::Integer(3).check_type(DeclaredType::Integer, pos).is_ok());
    /// assert!(Value::Integer(3).check_type(DeclaredType::Real, pos).is_err());
    /// ```
    pub fn check_type(&self, expected: DeclaredType, pos: Position) -> EvalResult<()> {
        if self.type_of() == Some(expected) {
            Ok(())
        } else {
            Err(RuntimeError::TypeMismatch { found: self.kind_name(),
                                             expected,
                                             pos })
        }
    }

    /// Returns `true` if the value is [`Value::Text`].
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(true) => write!(f, "TRUE"),
            Self::Bool(false) => write!(f, "FALSE"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Empty => Ok(()),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Real(r) => (*r).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Char(c) => (*c).into(),
            LiteralValue::Text(s) => s.as_str().into(),
        }
    }
}
