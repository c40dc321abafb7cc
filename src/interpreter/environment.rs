use std::collections::HashMap;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, declared_type::DeclaredType},
    },
};

/// A declared identifier's type and current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The type fixed at declaration.
    pub ty:    DeclaredType,
    /// The current value; [`Value::Empty`] until first assigned.
    pub value: Value,
}

/// The symbol table of a program run.
///
/// The namespace is flat: there is no nesting and no shadowing, and a name can
/// be declared only once. One `Environment` lives for exactly one run.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding for `name`.
    ///
    /// Without an initial value the binding starts out empty. An initial value
    /// must have exactly the declared type.
    ///
    /// # Errors
    /// - `RedeclaredVariable` if `name` is already bound. The existing binding
    ///   is left untouched.
    /// - `TypeMismatch` if `initial` does not have type `ty`.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::Position,
    ///     interpreter::{
    ///         environment::Environment,
    ///         value::{core::Value, declared_type::DeclaredType},
    ///     },
    /// };
    ///
    /// let mut env = Environment::new();
    /// let pos = Position::new(1, 0);
    ///
    /// env.declare("x", DeclaredType::Integer, Some(Value::Integer(5)), pos).unwrap();
    /// assert!(env.declare("x", DeclaredType::Real, None, pos).is_err());
    /// assert_eq!(env.lookup_value("x", pos).unwrap(), &Value::Integer(5));
    /// ```
    pub fn declare(&mut self,
                   name: &str,
                   ty: DeclaredType,
                   initial: Option<Value>,
                   pos: Position)
                   -> EvalResult<()> {
        if self.bindings.contains_key(name) {
            return Err(RuntimeError::RedeclaredVariable { name: name.to_string(),
                                                          pos });
        }

        let value = match initial {
            Some(value) => {
                value.check_type(ty, pos)?;
                value
            },
            None => Value::Empty,
        };

        self.bindings.insert(name.to_string(), Binding { ty, value });
        Ok(())
    }

    /// Replaces the value bound to `name`.
    ///
    /// # Errors
    /// - `UndefinedVariable` if `name` is not bound.
    /// - `TypeMismatch` if `value` does not have the declared type.
    pub fn assign(&mut self, name: &str, value: Value, pos: Position) -> EvalResult<()> {
        let binding =
            self.bindings
                .get_mut(name)
                .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                                 pos })?;

        value.check_type(binding.ty, pos)?;
        binding.value = value;
        Ok(())
    }

    /// Returns the current value of `name`.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if `name` is not bound.
    pub fn lookup_value(&self, name: &str, pos: Position) -> EvalResult<&Value> {
        self.bindings
            .get(name)
            .map(|binding| &binding.value)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             pos })
    }

    /// Returns the declared type of `name`.
    ///
    /// Used by `SCAN`, which reports unknown names with their own diagnostic.
    ///
    /// # Errors
    /// Returns `UndeclaredVariable` if `name` is not bound.
    pub fn lookup_type(&self, name: &str, pos: Position) -> EvalResult<DeclaredType> {
        self.bindings
            .get(name)
            .map(|binding| binding.ty)
            .ok_or_else(|| RuntimeError::UndeclaredVariable { name: name.to_string(),
                                                              pos })
    }

    /// Returns the binding for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Number of declared identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing has been declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
