use std::iter::Peekable;

use crate::{
    ast::{Expr, Position, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_logical_or,
            block::parse_statements,
            utils::{expect, skip_newlines, unexpected},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// Grammar: `program := NL* BEGIN CODE NL statement* END CODE NL*`
///
/// Nothing but line breaks may follow the closing `END CODE`.
///
/// # Parameters
/// - `tokens`: The full token stream produced by the lexer.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns a `ParseError` if the program frame is missing or any statement
/// is malformed.
///
/// # Example
/// ```
/// use codelang::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("BEGIN CODE\nDISPLAY: 1 + 2\nEND CODE").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 1);
/// assert!(matches!(program.statements[0], Statement::Display { .. }));
/// ```
pub fn parse_program(tokens: &[(Token, Position)]) -> ParseResult<Program> {
    let mut tokens = tokens.iter().peekable();

    skip_newlines(&mut tokens);
    let pos = expect(&mut tokens, &Token::Begin, "'BEGIN CODE'")?;
    expect(&mut tokens, &Token::Code, "'CODE' after 'BEGIN'")?;

    let statements = parse_statements(&mut tokens)?;

    expect(&mut tokens, &Token::End, "'END CODE'")?;
    expect(&mut tokens, &Token::Code, "'CODE' after 'END'")?;

    skip_newlines(&mut tokens);
    if let Some((tok, pos)) = tokens.next() {
        return Err(unexpected(tok, *pos, "end of program"));
    }

    Ok(Program { statements, pos })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_logical_or(tokens)
}

/// Parses a parenthesized condition, as written after `IF` and `WHILE`.
///
/// Grammar: `condition := "(" expression ")"`
///
/// The parentheses belong to the statement, so the returned expression is
/// the one inside them.
pub fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect(tokens, &Token::LParen, "'(' before condition")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "')' after condition")?;
    Ok(condition)
}
