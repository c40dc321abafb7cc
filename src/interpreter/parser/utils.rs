use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token if it equals `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token that must come next.
/// - `description`: How the token is named in the error message.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is a different one,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &str)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((tok, pos)) if tok == expected => Ok(*pos),
        Some((tok, pos)) => Err(unexpected(tok, *pos, description)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: description.to_string() }),
    }
}

/// Parses a plain identifier and returns its name and position.
///
/// The next token must be `Token::Identifier`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Identifier(s), pos)) => Ok((s.clone(), *pos)),
        Some((tok, pos)) => Err(unexpected(tok, *pos, "identifier")),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "identifier".to_string() }),
    }
}

/// Parses a comma-separated list of identifiers, as used by `SCAN`.
///
/// Grammar: `names := identifier ("," identifier)*`
///
/// # Errors
/// Returns a `ParseError` if a name is missing after a comma.
pub(in crate::interpreter::parser) fn parse_identifier_list<'a, I>(tokens: &mut Peekable<I>)
                                                                   -> ParseResult<Vec<String>>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut names = vec![parse_identifier(tokens)?.0];

    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        names.push(parse_identifier(tokens)?.0);
    }

    Ok(names)
}

/// Skips any number of line breaks.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, Position)>
{
    while let Some((Token::NewLine, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Requires that a statement ends here: at a line break, which is consumed,
/// or at the end of input.
///
/// # Errors
/// Returns `UnexpectedToken` if anything else follows the statement.
pub(in crate::interpreter::parser) fn expect_statement_end<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::NewLine, _)) | None => Ok(()),
        Some((tok, pos)) => Err(unexpected(tok, *pos, "end of line")),
    }
}

/// Builds the error for a token the parser did not expect.
pub(in crate::interpreter::parser) fn unexpected(found: &Token,
                                                 pos: Position,
                                                 expected: &str)
                                                 -> ParseError {
    ParseError::UnexpectedToken { found: format!("{found:?}"),
                                  expected: expected.to_string(),
                                  pos }
}
