/// Core parsing entry points.
///
/// Parses the program frame, full expressions and parenthesized conditions.
pub mod core;

/// Prefix operators and primary expressions.
///
/// Handles `NOT`, unary `+` and `-`, literals, names and parentheses.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence level, from `OR` down to `*`, `/` and `%`.
pub mod binary;

/// Block parsing.
///
/// Parses statement sequences and the `BEGIN K ... END K` frames around them.
pub mod block;

/// Shared token helpers for the parser.
pub mod utils;

/// Statement parsing.
///
/// Implements declarations, assignments, `DISPLAY`, `SCAN`, conditionals and
/// both loop forms.
pub mod statement;
