use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unrecognized characters, unexpected tokens, premature end of input
/// and out-of-range literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution, such as undefined variables, type mismatches, invalid operand
/// types, runaway loops and malformed scan input.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that stops a program, from the front end or from evaluation.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text is not a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
