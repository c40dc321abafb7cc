use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Position, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_equality,
            core::{ParseResult, parse_expression},
            utils::{expect, unexpected},
        },
    },
};

/// Parses logical negation.
///
/// `NOT` binds looser than the comparisons, so `NOT a == b` negates the
/// whole comparison. It may be repeated.
///
/// The rule is: `not := "NOT" not | equality`
pub fn parse_not<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if let Some((Token::Not, pos)) = tokens.peek() {
        tokens.next();
        let expr = parse_not(tokens)?;
        return Ok(Expr::Not { expr: Box::new(expr),
                              pos:  *pos, });
    }

    parse_equality(tokens)
}

/// Parses prefix `+` and `-`.
///
/// The rule is: `unary := ("+" | "-") unary | primary`
///
/// The sign is never part of a literal, so `-2147483648` is rejected by the
/// lexer as too large; the smallest integer is written `-2147483647 - 1`.
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::Unary` node, or the primary expression itself.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Minus, _)) => UnaryOperator::Minus,
        _ => return parse_primary(tokens),
    };

    let Some((_, pos)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: "expression".to_string() });
    };
    let expr = parse_unary(tokens)?;

    Ok(Expr::Unary { op,
                     expr: Box::new(expr),
                     pos: *pos })
}

/// Parses a primary expression.
///
/// Primary expressions are the atomic building blocks:
/// - literals of every type,
/// - variable names,
/// - `$`, the newline literal,
/// - escape literals such as `[&]`,
/// - parenthesized expressions.
///
/// # Errors
/// - `UnexpectedToken` if the token cannot start an expression, or a
///   closing `)` is missing.
/// - `UnexpectedEndOfInput` if the expression is cut off.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let Some((token, pos)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: "expression".to_string() });
    };
    let pos = *pos;

    let literal = |value: LiteralValue| -> ParseResult<Expr> { Ok(Expr::Literal { value, pos }) };

    match token {
        Token::Integer(n) => literal(LiteralValue::Integer(*n)),
        Token::Real(x) => literal(LiteralValue::Real(*x)),
        Token::Bool(b) => literal(LiteralValue::Bool(*b)),
        Token::Char(c) => literal(LiteralValue::Char(*c)),
        Token::Text(s) => literal(LiteralValue::Text(s.clone())),
        Token::Identifier(name) => Ok(Expr::Variable { name: name.clone(),
                                                       pos }),
        Token::Dollar => Ok(Expr::Newline { pos }),
        Token::Escape(sequence) => Ok(Expr::Escape { sequence: *sequence,
                                                     pos }),
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')'")?;
            Ok(Expr::Paren { expr: Box::new(expr),
                             pos })
        },
        tok => Err(unexpected(tok, pos, "expression")),
    }
}
