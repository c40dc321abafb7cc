use tracing::debug;

use crate::{
    ast::{Expr, Position, Statement},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Executes a `WHILE` loop.
    ///
    /// The guard is evaluated before every pass. The body may run at most
    /// `config.max_loop_iterations` times; when the guard still holds after
    /// that many passes the loop fails instead of starting another one.
    ///
    /// # Errors
    /// - `LogicError` if the guard is not a boolean.
    /// - `InfiniteLoop` when the iteration cap is reached.
    /// - Any error raised by the body.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::{Expr, Position},
    ///     config::Config,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut input = std::io::empty();
    /// let mut output = Vec::new();
    /// let config = Config::default().with_max_loop_iterations(3);
    /// let mut context = Context::with_config(config, &mut input, &mut output);
    ///
    /// let pos = Position::new(1, 0);
    /// let forever = Expr::Literal { value: true.into(),
    ///                               pos };
    ///
    /// let result = context.execute_while(&forever, &[], pos);
    /// assert!(matches!(result, Err(RuntimeError::InfiniteLoop { .. })));
    /// ```
    pub fn execute_while(&mut self,
                         condition: &Expr,
                         body: &[Statement],
                         pos: Position)
                         -> EvalResult<()> {
        let cap = self.config.max_loop_iterations;
        let mut iterations = 0;

        while self.eval(condition)?.as_condition(pos)? {
            if iterations >= cap {
                return Err(RuntimeError::InfiniteLoop { pos });
            }

            self.execute_block(body)?;
            iterations += 1;
        }

        debug!(iterations, "while loop finished");
        Ok(())
    }

    /// Executes a `DO ... WHILE` loop.
    ///
    /// The body runs once before the guard is first evaluated. The cap is
    /// checked right after each pass, before the guard: the pass that reaches
    /// `config.max_loop_iterations` fails the loop even if the guard would
    /// have ended it.
    ///
    /// # Errors
    /// - `InfiniteLoop` when the iteration cap is reached.
    /// - `LogicError` if the guard is not a boolean.
    /// - Any error raised by the body.
    pub fn execute_do_while(&mut self,
                            body: &[Statement],
                            condition: &Expr,
                            pos: Position)
                            -> EvalResult<()> {
        let cap = self.config.max_loop_iterations;
        let mut iterations = 0;

        loop {
            self.execute_block(body)?;
            iterations += 1;

            if iterations >= cap {
                return Err(RuntimeError::InfiniteLoop { pos });
            }
            if !self.eval(condition)?.as_condition(pos)? {
                break;
            }
        }

        debug!(iterations, "do-while loop finished");
        Ok(())
    }
}
