use std::io::{BufRead, Write};

use tracing::{debug, trace, warn};

use crate::{
    ast::{Declarator, Expr, Position, Program, Statement},
    config::Config,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        value::{core::Value, declared_type::DeclaredType},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state of one program run.
///
/// The context owns the run's [`Environment`] and borrows the input the
/// `SCAN` statement reads from and the output that `DISPLAY` and warnings
/// write to.
///
/// ## Usage
///
/// A `Context` is created once per run. Statements are executed in order with
/// [`Context::execute`]; the first error stops the run and is handed back to
/// the caller, which decides how to report it.
pub struct Context<'io> {
    /// All bindings declared so far.
    pub environment:   Environment,
    /// Settings for this run.
    pub config:        Config,
    /// Non-fatal diagnostics reported so far, in order.
    pub warnings:      Vec<RuntimeError>,
    pub(crate) input:  &'io mut dyn BufRead,
    pub(crate) output: &'io mut dyn Write,
}

impl<'io> Context<'io> {
    /// Creates a context with the default configuration and an empty
    /// environment.
    #[must_use]
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self::with_config(Config::default(), input, output)
    }

    /// Creates a context with an explicit configuration.
    #[must_use]
    pub fn with_config(config: Config,
                       input: &'io mut dyn BufRead,
                       output: &'io mut dyn Write)
                       -> Self {
        Self { environment: Environment::new(),
               config,
               warnings: Vec::new(),
               input,
               output }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Children are
    /// evaluated first, left to right, and the operator is then applied to
    /// their values.
    ///
    /// # Example
    /// ```
    /// use codelang::{
    ///     ast::{BinaryOperator, Expr, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut input = std::io::empty();
    /// let mut output = Vec::new();
    /// let context = Context::new(&mut input, &mut output);
    ///
    /// let pos = Position::new(1, 0);
    /// let expr = Expr::Binary { left: Box::new(Expr::Literal { value: 2.5f32.into(),
    ///                                                          pos }),
    ///                           op: BinaryOperator::Add,
    ///                           right: Box::new(Expr::Literal { value: 3.into(),
    ///                                                           pos }),
    ///                           pos };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Value::Real(5.5));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, pos } => self.environment.lookup_value(name, *pos).cloned(),
            Expr::Unary { op, expr, pos } => Self::eval_unary(*op, &self.eval(expr)?, *pos),
            Expr::Binary { left,
                           op,
                           right,
                           pos, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_arithmetic(*op, &left, &right, *pos)
            },
            Expr::Relational { left,
                               op,
                               right,
                               pos, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_relational(*op, &left, &right, *pos)
            },
            Expr::Boolean { left,
                            op,
                            right,
                            pos, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_boolean(*op, &left, &right, *pos)
            },
            Expr::Concat { left, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_concat(&left, &right))
            },
            Expr::Paren { expr, .. } => self.eval(expr),
            Expr::Not { expr, pos } => Self::eval_not(&self.eval(expr)?, *pos),
            Expr::Escape { sequence, pos } => Self::eval_escape(*sequence, *pos),
            Expr::Newline { .. } => Ok(Value::Text("\n".to_string())),
        }
    }

    /// Executes a single statement.
    ///
    /// Declarations and assignments update the environment, `IF` and the loops
    /// run their blocks, and the built-ins talk to the borrowed input and
    /// output.
    ///
    /// # Errors
    /// Returns the first fatal error raised by the statement. Side effects
    /// made before the error (earlier assignments, printed text) are kept.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        trace!(pos = %statement.position(), "executing statement");

        match statement {
            Statement::Declaration { ty, declarators, .. } => {
                self.execute_declaration(*ty, declarators)
            },
            Statement::Assignment { targets, value, pos } => {
                self.execute_assignment(targets, value, *pos)
            },
            Statement::If { branch,
                            else_ifs,
                            else_body,
                            .. } => self.execute_if(branch, else_ifs, else_body.as_deref()),
            Statement::While { condition, body, pos } => {
                self.execute_while(condition, body, *pos)
            },
            Statement::DoWhile { body, condition, pos } => {
                self.execute_do_while(body, condition, *pos)
            },
            Statement::Display { expr, .. } => self.execute_display(expr),
            Statement::Scan { names, pos } => self.execute_scan(names, *pos),
        }
    }

    /// Executes a sequence of statements, stopping at the first error.
    pub fn execute_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        statements.iter().try_for_each(|statement| self.execute(statement))
    }

    /// Executes every top-level statement of `program` in order.
    pub fn execute_program(&mut self, program: &Program) -> EvalResult<()> {
        debug!(statements = program.statements.len(), "running program");
        self.execute_block(&program.statements)?;
        self.output.flush()?;
        debug!(bindings = self.environment.len(), "program finished");
        Ok(())
    }

    /// Declares every identifier of a declaration statement.
    ///
    /// Initializers are evaluated in textual order and belong to the
    /// identifier they follow. An identifier that is already bound is
    /// reported as a warning and skipped without evaluating its initializer.
    fn execute_declaration(&mut self,
                           ty: DeclaredType,
                           declarators: &[Declarator])
                           -> EvalResult<()> {
        for declarator in declarators {
            if self.environment.get(&declarator.name).is_some() {
                let warning = RuntimeError::RedeclaredVariable { name: declarator.name.clone(),
                                                                 pos:  declarator.pos, };
                self.report_warning(warning)?;
                continue;
            }

            let initial = declarator.initializer
                                    .as_ref()
                                    .map(|expr| self.eval(expr))
                                    .transpose()?;

            self.environment.declare(&declarator.name, ty, initial, declarator.pos)?;
            debug!(name = %declarator.name, %ty, "declared variable");
        }

        Ok(())
    }

    /// Evaluates the right-hand side once and stores it into every target, in
    /// textual order.
    fn execute_assignment(&mut self,
                          targets: &[String],
                          value: &Expr,
                          pos: Position)
                          -> EvalResult<()> {
        let value = self.eval(value)?;

        for target in targets {
            self.environment.assign(target, value.clone(), pos)?;
            debug!(name = %target, value = %value, "assigned variable");
        }

        Ok(())
    }

    /// Records a non-fatal diagnostic and writes it to the output.
    pub(crate) fn report_warning(&mut self, warning: RuntimeError) -> EvalResult<()> {
        warn!(%warning, "non-fatal diagnostic");
        writeln!(self.output, "{warning}")?;
        self.warnings.push(warning);
        Ok(())
    }
}
