/// The environment module holds the run's symbol table.
///
/// Every declared identifier maps to a binding holding its fixed declared type
/// and its current value. The namespace is flat and lives for a single run.
///
/// # Responsibilities
/// - Declares identifiers and rejects redeclarations.
/// - Enforces that stored values match the declared type.
/// - Resolves identifiers for reads, assignments and `SCAN`.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// drives input and output for the built-in statements.
///
/// # Responsibilities
/// - Evaluates every expression form and operator.
/// - Runs declarations, assignments, conditionals and loops.
/// - Reports runtime errors with the position of the failing construct.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens for
/// keywords, literals, identifiers, operators and line breaks, each tagged
/// with its line and column.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Skips comments and horizontal whitespace.
/// - Reports characters that do not start any token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a `Program` made of statements and expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with position info.
/// - Encodes operator precedence and associativity.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution (integers,
/// reals, booleans, characters, text and the empty value) together with the
/// declared types they correspond to.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `DeclaredType` enum.
/// - Renders values for `DISPLAY` and concatenation.
/// - Checks values against declared types and converts scanned text.
pub mod value;
