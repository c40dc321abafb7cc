/// Default number of loop-body executions allowed before a loop is treated as
/// runaway.
pub const MAX_LOOP_ITERATIONS: usize = 1000;

/// Settings that shape a single program run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How many times a `WHILE` or `DO WHILE` body may run before the loop
    /// fails with an infinite-loop error.
    pub max_loop_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_loop_iterations: MAX_LOOP_ITERATIONS }
    }
}

impl Config {
    /// Returns a copy of `self` with a different iteration cap.
    ///
    /// # Example
    /// ```
    /// use codelang::config::Config;
    ///
    /// let config = Config::default().with_max_loop_iterations(10);
    /// assert_eq!(config.max_loop_iterations, 10);
    /// ```
    #[must_use]
    pub const fn with_max_loop_iterations(mut self, max_loop_iterations: usize) -> Self {
        self.max_loop_iterations = max_loop_iterations;
        self
    }
}
