use std::iter::Peekable;

use crate::{
    ast::{Position, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, expect_statement_end, skip_newlines},
        },
    },
};

/// Parses statements up to, but not including, the next `END`.
///
/// Blank lines between statements are skipped. Every statement must be
/// followed by a line break.
///
/// Grammar: `statements := (NL* statement NL)* NL*`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the line break that opens the
///   block.
///
/// # Returns
/// The statements in source order.
pub fn parse_statements<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_newlines(tokens);

        match tokens.peek() {
            Some((Token::End, _)) | None => break,
            Some(_) => {
                statements.push(parse_statement(tokens)?);
                expect_statement_end(tokens)?;
            },
        }
    }

    Ok(statements)
}

/// Parses a keyword-delimited block such as `BEGIN IF ... END IF`.
///
/// Grammar: `block(K) := NL* BEGIN K NL statement* END K`
///
/// # Parameters
/// - `tokens`: Token stream positioned before the block.
/// - `keyword`: The keyword that follows both `BEGIN` and `END`.
/// - `name`: How the keyword is spelled, for error messages.
///
/// # Returns
/// The statements inside the block.
///
/// # Errors
/// - `UnexpectedToken` if `BEGIN K` or `END K` is missing or mismatched.
/// - `UnexpectedEndOfInput` if the block is not closed.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          keyword: &Token,
                          name: &str)
                          -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    skip_newlines(tokens);
    expect(tokens, &Token::Begin, &format!("'BEGIN {name}'"))?;
    expect(tokens, keyword, &format!("'{name}' after 'BEGIN'"))?;
    expect(tokens, &Token::NewLine, &format!("line break after 'BEGIN {name}'"))?;

    let body = parse_statements(tokens)?;

    expect(tokens, &Token::End, &format!("'END {name}'"))?;
    expect(tokens, keyword, &format!("'{name}' after 'END'"))?;

    Ok(body)
}
