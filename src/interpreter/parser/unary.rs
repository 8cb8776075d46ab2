use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::{Location, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, peek},
        },
    },
};

/// Parses a unary expression.
///
/// Prefix operators are right-recursive, so `not not x` and `- -x` nest.
///
/// Grammar: `unary := ("not" | "-") unary | primary`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = peek(tokens)?;
    let op = match token.kind {
        TokenKind::Not => UnaryOperator::Not,
        TokenKind::Minus => UnaryOperator::Negate,
        _ => return parse_primary(tokens),
    };

    tokens.next();
    let operand = parse_unary(tokens)?;

    Ok(Expr::Unary { op,
                     operand: Box::new(operand),
                     line: token.line })
}

/// Parses a primary expression: a literal, a variable or a parenthesized
/// group.
///
/// Grammar: `primary := NUMBER | STRING | "true" | "false" | "nil" |
/// IDENTIFIER | "(" expression ")"`
///
/// # Errors
/// - `ExpectedExpression` if the next token cannot start an expression. The
///   token is not consumed.
/// - `ExpectedToken` if a group is missing its `)`.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = peek(tokens)?;
    let line = token.line;

    let value = match &token.kind {
        TokenKind::Number(n) => LiteralValue::Number(*n),
        TokenKind::Str(s) => LiteralValue::Str(s.clone()),
        TokenKind::True => LiteralValue::Bool(true),
        TokenKind::False => LiteralValue::Bool(false),
        TokenKind::Nil => LiteralValue::Nil,
        TokenKind::Identifier(name) => {
            tokens.next();
            return Ok(Expr::Variable { name: name.clone(),
                                       line });
        },
        TokenKind::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, &TokenKind::RParen, "Expected ')' after expression")?;
            return Ok(Expr::Grouping { expr: Box::new(expr),
                                       line });
        },
        _ => {
            return Err(ParseError::ExpectedExpression { location: Location::of(token),
                                                        line });
        },
    };

    tokens.next();
    Ok(Expr::Literal { value, line })
}
