/// `DISPLAY`, which prints a rendered value.
pub mod display;
/// `SCAN`, which reads comma-separated input into variables.
pub mod scan;
