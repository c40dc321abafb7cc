use thiserror::Error;

use crate::{ast::Position, interpreter::value::declared_type::DeclaredType};

/// Represents all errors that can occur during evaluation and execution.
///
/// The `Display` form of every variant is the complete diagnostic line shown
/// to the user. Apart from [`RuntimeError::RedeclaredVariable`], which the
/// evaluator only reports as a warning, every variant ends the run.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Read or assigned a variable that has no binding.
    #[error("Error: {pos} -> variable '{name}' is not defined.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// Where the variable was referenced.
        pos:  Position,
    },
    /// `SCAN` named a variable that was never declared.
    #[error("Error: {pos} -> variable '{name}' has not been declared.")]
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// Position of the `SCAN` statement.
        pos:  Position,
    },
    /// Declared a variable that already has a binding.
    #[error("Warning: {pos} -> redefinition of variable '{name}'.")]
    RedeclaredVariable {
        /// The name of the variable.
        name: String,
        /// Position of the second declaration.
        pos:  Position,
    },
    /// A value did not match the declared type of its target.
    #[error("Error: {pos} -> cannot convert {found} to {expected}.")]
    TypeMismatch {
        /// The type name of the offending value.
        found:    &'static str,
        /// The declared type of the target.
        expected: DeclaredType,
        /// Where the value was stored.
        pos:      Position,
    },
    /// A condition did not evaluate to a boolean.
    #[error("Error: {pos} -> cannot convert {value} to boolean.")]
    LogicError {
        /// The rendered value of the condition.
        value: String,
        /// Position of the statement owning the condition.
        pos:   Position,
    },
    /// An arithmetic operator was applied to unsupported operand types.
    #[error("Error: {pos} -> cannot {verb} values of types {left} and {right}.")]
    InvalidOperator {
        /// What the operator does, such as `add`.
        verb:  &'static str,
        /// Type name of the left operand.
        left:  &'static str,
        /// Type name of the right operand.
        right: &'static str,
        /// Position of the operation.
        pos:   Position,
    },
    /// A relational operator was applied to unsupported operand types.
    #[error("Error: {pos} -> cannot compare values of types {left} and {right} with '{op}' operator.")]
    InvalidRelationalOperator {
        /// The operator symbol.
        op:    String,
        /// Type name of the left operand.
        left:  &'static str,
        /// Type name of the right operand.
        right: &'static str,
        /// Position of the operation.
        pos:   Position,
    },
    /// `AND` or `OR` was applied to a non-boolean operand.
    #[error("Error: {pos} -> invalid boolean operator: cannot apply {op} to values of types {left} and {right}.")]
    InvalidBooleanOperator {
        /// The operator keyword.
        op:    String,
        /// Type name of the left operand.
        left:  &'static str,
        /// Type name of the right operand.
        right: &'static str,
        /// Position of the operation.
        pos:   Position,
    },
    /// A sign operator was applied to a non-numeric operand.
    #[error("Error: {pos} -> cannot get unary value for symbol {symbol}.")]
    UnaryOperatorError {
        /// The operator symbol.
        symbol: &'static str,
        /// Position of the operation.
        pos:    Position,
    },
    /// `NOT` was applied to a non-boolean operand.
    #[error("Error: {pos} -> argument must be of boolean value.")]
    NegationError {
        /// Position of the operation.
        pos: Position,
    },
    /// An escape literal named a character that cannot be escaped.
    #[error("Error: {pos} -> invalid escape sequence character: {sequence}")]
    InvalidEscapeSequence {
        /// The character between the brackets.
        sequence: char,
        /// Position of the literal.
        pos:      Position,
    },
    /// Integer division or modulo by zero.
    #[error("Error: {pos} -> cannot divide by zero.")]
    DivisionByZero {
        /// Position of the operation.
        pos: Position,
    },
    /// A loop reached the iteration cap.
    #[error("Error: {pos} -> infinite loop detected.")]
    InfiniteLoop {
        /// Position of the loop statement.
        pos: Position,
    },
    /// `SCAN` received too few or too many comma-separated values.
    #[error("Error: {pos} -> invalid number of inputs. Expected between 1 and {expected}, but got {found}.")]
    InvalidScanInputCount {
        /// The number of identifiers named by the statement.
        expected: usize,
        /// The number of values supplied.
        found:    usize,
        /// Position of the `SCAN` statement.
        pos:      Position,
    },
    /// A scanned value could not be converted to the variable's type.
    #[error("Error: in Input Scan, in line {} -> input '{input}' is not in the expected format for data type {expected}.", .pos.line)]
    InvalidScanFormat {
        /// The offending piece of input.
        input:    String,
        /// The declared type of the target variable.
        expected: DeclaredType,
        /// Position of the `SCAN` statement.
        pos:      Position,
    },
    /// Reading input or writing output failed.
    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}

impl RuntimeError {
    /// Returns the source position attached to the error, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::UndefinedVariable { pos, .. }
            | Self::UndeclaredVariable { pos, .. }
            | Self::RedeclaredVariable { pos, .. }
            | Self::TypeMismatch { pos, .. }
            | Self::LogicError { pos, .. }
            | Self::InvalidOperator { pos, .. }
            | Self::InvalidRelationalOperator { pos, .. }
            | Self::InvalidBooleanOperator { pos, .. }
            | Self::UnaryOperatorError { pos, .. }
            | Self::NegationError { pos }
            | Self::InvalidEscapeSequence { pos, .. }
            | Self::DivisionByZero { pos }
            | Self::InfiniteLoop { pos }
            | Self::InvalidScanInputCount { pos, .. }
            | Self::InvalidScanFormat { pos, .. } => Some(*pos),
            Self::Io(_) => None,
        }
    }

    /// Returns `false` for the conditions that are reported and skipped
    /// instead of ending the run.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::RedeclaredVariable { .. })
    }
}
