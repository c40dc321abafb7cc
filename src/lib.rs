//! # codelang
//!
//! codelang is an interpreter for CODE, a small statically typed teaching
//! language. Programs declare typed variables, compute with arithmetic,
//! comparison, logical and concatenation operators, branch and loop, and talk
//! to the user through `DISPLAY` and `SCAN`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::{
    ast::Program,
    config::Config,
    error::{Error, ParseError, RuntimeError},
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types that
/// represent a program as a tree. The AST is built by the parser and
/// traversed by the evaluator; it can also be constructed by hand.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Runtime settings for the interpreter.
///
/// Holds the loop iteration cap used to detect runaway loops.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// executing code. Each error renders as the exact diagnostic shown to the
/// user, including its source position.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Separates the non-fatal redeclaration warning from fatal errors.
/// - Wraps I/O failures of the input and output streams.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the variable environment to provide a complete
/// runtime for CODE programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and executing programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Lexes and parses `source` into a [`Program`] without running it.
///
/// # Errors
/// Returns a [`ParseError`] for unrecognized input or malformed syntax.
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}

/// Executes an already-built program against the given input and output.
///
/// Redeclaration warnings are written to `output` and execution continues.
/// The first fatal error stops the run; output written before it is kept.
///
/// # Errors
/// Returns the [`RuntimeError`] that stopped the program.
pub fn run_program(program: &Program,
                   config: Config,
                   input: &mut dyn BufRead,
                   output: &mut dyn Write)
                   -> Result<(), RuntimeError> {
    let mut context = Context::with_config(config, input, output);
    context.execute_program(program)
}

/// Parses and executes a CODE program.
///
/// # Errors
/// Returns an error if parsing fails, or if any runtime error occurs.
///
/// # Examples
/// ```
/// use codelang::{config::Config, run_source};
///
/// let source = "BEGIN CODE\nINT x = 4\nDISPLAY: x * 2 & $ & \"done\"\nEND CODE\n";
/// let mut input = std::io::empty();
/// let mut output = Vec::new();
///
/// run_source(source, Config::default(), &mut input, &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "8\ndone");
///
/// // Example with an intentional error (unknown variable).
/// let source = "BEGIN CODE\nDISPLAY: y\nEND CODE";
/// let mut output = Vec::new();
/// let res = run_source(source, Config::default(), &mut input, &mut output);
/// assert!(res.is_err());
/// ```
pub fn run_source(source: &str,
                  config: Config,
                  input: &mut dyn BufRead,
                  output: &mut dyn Write)
                  -> Result<(), Error> {
    let program = parse_source(source)?;
    run_program(&program, config, input, output)?;
    Ok(())
}
