use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, BooleanOperator, Expr, Position, RelationalOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_not, parse_unary},
        },
    },
};

/// Parses logical OR expressions.
///
/// The rule is: `logical_or := logical_and ("OR" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::Boolean` tree, or the operand itself when no `OR` follows.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_logical_and(tokens)?;
    while let Some((Token::Or, pos)) = tokens.peek() {
        tokens.next();
        let right = parse_logical_and(tokens)?;
        left = Expr::Boolean { left:  Box::new(left),
                               op:    BooleanOperator::Or,
                               right: Box::new(right),
                               pos:   *pos, };
    }
    Ok(left)
}

/// Parses logical AND expressions.
///
/// The rule is: `logical_and := not ("AND" not)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_not(tokens)?;
    while let Some((Token::And, pos)) = tokens.peek() {
        tokens.next();
        let right = parse_not(tokens)?;
        left = Expr::Boolean { left:  Box::new(left),
                               op:    BooleanOperator::And,
                               right: Box::new(right),
                               pos:   *pos, };
    }
    Ok(left)
}

/// Parses equality comparisons.
///
/// The rule is: `equality := relational (("==" | "<>") relational)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::Relational` tree using `Equal` or `NotEqual`.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_relational(tokens)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_relational_operator(token)
           && matches!(op, RelationalOperator::Equal | RelationalOperator::NotEqual)
        {
            tokens.next();
            let right = parse_relational(tokens)?;
            left = Expr::Relational { left: Box::new(left),
                                      op,
                                      right: Box::new(right),
                                      pos: *pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses ordering comparisons.
///
/// The rule is: `relational := concat (("<" | ">" | "<=" | ">=") concat)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_concat(tokens)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_relational_operator(token)
           && !matches!(op, RelationalOperator::Equal | RelationalOperator::NotEqual)
        {
            tokens.next();
            let right = parse_concat(tokens)?;
            left = Expr::Relational { left: Box::new(left),
                                      op,
                                      right: Box::new(right),
                                      pos: *pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses concatenation with `&`.
///
/// The rule is: `concat := additive ("&" additive)*`
pub fn parse_concat<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_additive(tokens)?;
    while let Some((Token::Ampersand, pos)) = tokens.peek() {
        tokens.next();
        let right = parse_additive(tokens)?;
        left = Expr::Concat { left:  Box::new(left),
                              right: Box::new(right),
                              pos:   *pos, };
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  pos: *pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  pos: *pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its arithmetic operator, if it is one.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

/// Maps a token to its comparison operator, if it is one.
const fn token_to_relational_operator(token: &Token) -> Option<RelationalOperator> {
    match token {
        Token::Greater => Some(RelationalOperator::Greater),
        Token::Less => Some(RelationalOperator::Less),
        Token::GreaterEqual => Some(RelationalOperator::GreaterEqual),
        Token::LessEqual => Some(RelationalOperator::LessEqual),
        Token::EqualEqual => Some(RelationalOperator::Equal),
        Token::NotEqual => Some(RelationalOperator::NotEqual),
        _ => None,
    }
}
