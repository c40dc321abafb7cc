use std::io::Write;

use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Executes `DISPLAY: expr`.
    ///
    /// Writes the rendered value to the output. No separator or newline is
    /// added; programs print line breaks with `$`.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::{Expr, Position},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut input = std::io::empty();
    /// let mut output = Vec::new();
    /// let mut context = Context::new(&mut input, &mut output);
    ///
    /// let expr = Expr::Literal { value: true.into(),
    ///                            pos:   Position::new(1, 0), };
    /// context.execute_display(&expr).unwrap();
    /// drop(context);
    ///
    /// assert_eq!(String::from_utf8(output).unwrap(), "TRUE");
    /// ```
    pub fn execute_display(&mut self, expr: &Expr) -> EvalResult<()> {
        let value = self.eval(expr)?;
        write!(self.output, "{value}")?;
        Ok(())
    }
}
