/// Core evaluation logic and context management.
///
/// Contains the runtime `Context`, expression dispatch, statement dispatch,
/// declarations and assignments.
pub mod core;

/// Sign operators and `NOT`.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic with promotion, comparisons, boolean connectives and
/// string concatenation.
pub mod binary;

/// `IF` / `ELSE IF` / `ELSE` chains.
pub mod conditional;

/// `WHILE` and `DO ... WHILE` loops, including the runaway-loop guard.
pub mod loops;

/// The built-in statements `DISPLAY` and `SCAN`.
pub mod builtin;

/// Utility functions for evaluation.
///
/// Provides escape-literal handling.
pub mod utils;
