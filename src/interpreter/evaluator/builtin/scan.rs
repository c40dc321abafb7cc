use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

/// Splits one line of `SCAN` input into trimmed, comma-separated pieces.
///
/// A blank line supplies no values at all. Otherwise every comma starts a new
/// piece, so `"5,,6"` supplies three values, the middle one empty.
///
/// # Example
/// ```
/// use codelang::interpreter::evaluator::builtin::scan::split_scan_input;
///
/// assert_eq!(split_scan_input("5, abc\n"), vec!["5", "abc"]);
/// assert!(split_scan_input("   \n").is_empty());
/// ```
#[must_use]
pub fn split_scan_input(line: &str) -> Vec<&str> {
    if line.trim().is_empty() {
        return Vec::new();
    }

    line.split(',').map(str::trim).collect()
}

impl Context<'_> {
    /// Executes `SCAN: a, b, ...`.
    ///
    /// Reads one line from the input. Between one and `names.len()` values
    /// must be supplied; they are paired with the names from the left. Each
    /// value is converted to the declared type of its variable and assigned
    /// before the next one is looked at.
    ///
    /// # Errors
    /// - `InvalidScanInputCount` if too few or too many values are supplied.
    ///   No variable is changed.
    /// - `UndeclaredVariable` if a paired name was never declared.
    /// - `InvalidScanFormat` if a value does not convert to its variable's
    ///   type.
    ///
    /// Variables assigned before a failing value keep their new values.
    pub fn execute_scan(&mut self, names: &[String], pos: Position) -> EvalResult<()> {
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        let inputs = split_scan_input(&line);
        if inputs.is_empty() || inputs.len() > names.len() {
            return Err(RuntimeError::InvalidScanInputCount { expected: names.len(),
                                                             found: inputs.len(),
                                                             pos });
        }

        for (name, input) in names.iter().zip(inputs) {
            let ty = self.environment.lookup_type(name, pos)?;
            let value = ty.parse_input(input, pos)?;

            debug!(name = %name, value = %value, "scanned value");
            self.environment.assign(name, value, pos)?;
        }

        Ok(())
    }
}
