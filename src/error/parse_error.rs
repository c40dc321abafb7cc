use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during lexing or parsing.
///
/// A syntax error stops the program before any statement runs.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Found a character sequence that is not a token.
    #[error("Syntax error: {pos} -> unrecognized input '{text}'.")]
    UnrecognizedInput {
        /// The offending source text.
        text: String,
        /// Where the text starts.
        pos:  Position,
    },
    /// Found an unexpected token while parsing.
    #[error("Syntax error: {pos} -> unexpected token {found}, expected {expected}.")]
    UnexpectedToken {
        /// The token encountered.
        found:    String,
        /// What the parser was looking for.
        expected: String,
        /// Where the token starts.
        pos:      Position,
    },
    /// Reached the end of input unexpectedly.
    #[error("Syntax error: unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
    },
    /// An integer literal does not fit in 32 bits.
    #[error("Syntax error: {pos} -> literal '{text}' is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        text: String,
        /// Where the literal starts.
        pos:  Position,
    },
}
