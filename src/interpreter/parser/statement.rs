use std::iter::Peekable;

use crate::{
    ast::{ConditionalBranch, Declarator, Position, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_condition, parse_expression},
            utils::{expect, parse_identifier, parse_identifier_list, skip_newlines, unexpected},
        },
        value::declared_type::DeclaredType,
    },
};

/// Parses a single statement.
///
/// The first token decides the kind of statement:
/// - a type keyword starts a declaration,
/// - an identifier starts an assignment,
/// - `DISPLAY`, `SCAN`, `IF`, `WHILE` and `DO` start their own statements.
///
/// The line break that ends the statement is left for the caller.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let Some((token, pos)) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: "statement".to_string() });
    };
    let pos = *pos;

    if let Some(ty) = token_to_declared_type(token) {
        tokens.next();
        return parse_declaration(tokens, ty, pos);
    }

    match token {
        Token::Identifier(_) => parse_assignment(tokens, pos),
        Token::Display => {
            tokens.next();
            expect(tokens, &Token::Colon, "':' after 'DISPLAY'")?;
            let expr = parse_expression(tokens)?;
            Ok(Statement::Display { expr, pos })
        },
        Token::Scan => {
            tokens.next();
            expect(tokens, &Token::Colon, "':' after 'SCAN'")?;
            let names = parse_identifier_list(tokens)?;
            Ok(Statement::Scan { names, pos })
        },
        Token::If => parse_if(tokens, pos),
        Token::While => {
            tokens.next();
            let condition = parse_condition(tokens)?;
            let body = parse_block(tokens, &Token::While, "WHILE")?;
            Ok(Statement::While { condition,
                                  body,
                                  pos })
        },
        Token::Do => {
            tokens.next();
            let body = parse_block(tokens, &Token::Do, "DO")?;
            skip_newlines(tokens);
            expect(tokens, &Token::While, "'WHILE' after 'END DO'")?;
            let condition = parse_condition(tokens)?;
            Ok(Statement::DoWhile { body,
                                    condition,
                                    pos })
        },
        tok => Err(unexpected(tok, pos, "statement")),
    }
}

/// Parses the declarators of a declaration; the type keyword is already
/// consumed.
///
/// Grammar:
/// ```text
///     declaration := type declarator ("," declarator)*
///     declarator  := identifier ("=" expression)?
/// ```
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>,
                            ty: DeclaredType,
                            pos: Position)
                            -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut declarators = vec![parse_declarator(tokens)?];

    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        declarators.push(parse_declarator(tokens)?);
    }

    Ok(Statement::Declaration { ty,
                                declarators,
                                pos })
}

fn parse_declarator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Declarator>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (name, pos) = parse_identifier(tokens)?;

    let initializer = if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    Ok(Declarator { name,
                    initializer,
                    pos })
}

/// Parses an assignment with one or more targets.
///
/// `x = y = 4` assigns to both `x` and `y`. An identifier belongs to the
/// target list only when another `=` follows it; otherwise it starts the
/// value expression.
///
/// Grammar: `assignment := identifier ("=" identifier)* "=" expression`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, pos: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut targets = vec![parse_identifier(tokens)?.0];
    expect(tokens, &Token::Equals, "'=' in assignment")?;

    loop {
        let mut lookahead = tokens.clone();
        if let Some((Token::Identifier(name), _)) = lookahead.next()
           && let Some((Token::Equals, _)) = lookahead.next()
        {
            targets.push(name.clone());
            tokens.next();
            tokens.next();
            continue;
        }
        break;
    }

    let value = parse_expression(tokens)?;

    Ok(Statement::Assignment { targets,
                               value,
                               pos })
}

/// Parses an `IF` statement with any number of `ELSE IF` branches and an
/// optional `ELSE`.
///
/// Syntax:
/// ```text
///     IF (condition)
///     BEGIN IF
///         ...
///     END IF
///     ELSE IF (condition)
///     BEGIN IF
///         ...
///     END IF
///     ELSE
///     BEGIN IF
///         ...
///     END IF
/// ```
/// Line breaks between `END IF` and a following `ELSE` are allowed. When no
/// `ELSE` follows, those line breaks are left in place to end the statement.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, pos: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let branch = parse_branch(tokens)?;
    let mut else_ifs = Vec::new();
    let mut else_body = None;

    while else_follows(tokens) {
        skip_newlines(tokens);
        tokens.next();

        if let Some((Token::If, _)) = tokens.peek() {
            else_ifs.push(parse_branch(tokens)?);
        } else {
            else_body = Some(parse_block(tokens, &Token::If, "IF")?);
            break;
        }
    }

    Ok(Statement::If { branch,
                       else_ifs,
                       else_body,
                       pos })
}

/// Parses `IF (condition) BEGIN IF ... END IF`, starting at the `IF`.
fn parse_branch<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ConditionalBranch>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let pos = expect(tokens, &Token::If, "'IF'")?;
    let condition = parse_condition(tokens)?;
    let body = parse_block(tokens, &Token::If, "IF")?;

    Ok(ConditionalBranch { condition,
                           body,
                           pos })
}

/// Whether the next token after any line breaks is `ELSE`.
fn else_follows<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut lookahead = tokens.clone();
    skip_newlines(&mut lookahead);
    matches!(lookahead.peek(), Some((Token::Else, _)))
}

const fn token_to_declared_type(token: &Token) -> Option<DeclaredType> {
    match token {
        Token::Int => Some(DeclaredType::Integer),
        Token::Float => Some(DeclaredType::Real),
        Token::BoolType => Some(DeclaredType::Bool),
        Token::CharType => Some(DeclaredType::Char),
        Token::StringType => Some(DeclaredType::Text),
        _ => None,
    }
}
