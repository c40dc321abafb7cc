use tracing::trace;

use crate::{
    ast::{ConditionalBranch, Statement},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Executes an `IF` / `ELSE IF` / `ELSE` chain.
    ///
    /// Guards are evaluated left to right and the first one that holds runs
    /// its block; later guards are not evaluated. If none holds, the `ELSE`
    /// block runs when present. At most one block executes.
    ///
    /// # Errors
    /// Returns `LogicError` if an evaluated guard is not a boolean, plus any
    /// error raised inside the chosen block.
    pub fn execute_if(&mut self,
                      branch: &ConditionalBranch,
                      else_ifs: &[ConditionalBranch],
                      else_body: Option<&[Statement]>)
                      -> EvalResult<()> {
        for (index, candidate) in std::iter::once(branch).chain(else_ifs).enumerate() {
            if self.eval(&candidate.condition)?.as_condition(candidate.pos)? {
                trace!(branch = index, "taking conditional branch");
                return self.execute_block(&candidate.body);
            }
        }

        if let Some(body) = else_body {
            trace!("taking else branch");
            self.execute_block(body)?;
        }

        Ok(())
    }
}
