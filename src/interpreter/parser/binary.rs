use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses `or` and `nor` expressions.
///
/// `a nor b` is rewritten to `not (a or b)`, so the right operand keeps the
/// short-circuit of `or`.
///
/// The rule is: `logic_or := logic_xor (("or" | "nor") logic_xor)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_logical_xor(tokens)?;

    while let Some(token) = tokens.next_if(|t| matches!(t.kind, TokenKind::Or | TokenKind::Nor)) {
        let right = parse_logical_xor(tokens)?;
        let or = Expr::logical(left, LogicalOperator::Or, right, token.line);

        left = match token.kind {
            TokenKind::Nor => Expr::not(or, token.line),
            _ => or,
        };
    }

    Ok(left)
}

/// Parses `xor` and `xnor` expressions.
///
/// `a xor b` is rewritten to `(a and not b) or (not a and b)`. Both operand
/// trees appear twice in the result, so an operand with side effects may run
/// more than once. `a xnor b` is the negation of the same tree.
///
/// The rule is: `logic_xor := logic_and (("xor" | "xnor") logic_and)*`
pub fn parse_logical_xor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_logical_and(tokens)?;

    while let Some(token) = tokens.next_if(|t| matches!(t.kind, TokenKind::Xor | TokenKind::Xnor))
    {
        let right = parse_logical_and(tokens)?;
        let line = token.line;
        let xor = Expr::logical(Expr::logical(left.clone(),
                                              LogicalOperator::And,
                                              Expr::not(right.clone(), line),
                                              line),
                                LogicalOperator::Or,
                                Expr::logical(Expr::not(left, line),
                                              LogicalOperator::And,
                                              right,
                                              line),
                                line);

        left = match token.kind {
            TokenKind::Xnor => Expr::not(xor, line),
            _ => xor,
        };
    }

    Ok(left)
}

/// Parses `and` and `nand` expressions.
///
/// `a nand b` is rewritten to `not (a and b)`.
///
/// The rule is: `logic_and := equality (("and" | "nand") equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_equality(tokens)?;

    while let Some(token) = tokens.next_if(|t| matches!(t.kind, TokenKind::And | TokenKind::Nand))
    {
        let right = parse_equality(tokens)?;
        let and = Expr::logical(left, LogicalOperator::And, right, token.line);

        left = match token.kind {
            TokenKind::Nand => Expr::not(and, token.line),
            _ => and,
        };
    }

    Ok(left)
}

/// Parses `==` and `!=`.
///
/// The rule is: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           parse_comparison,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual])
}

/// Parses `<`, `<=`, `>` and `>=`.
///
/// The rule is: `comparison := additive (("<" | "<=" | ">" | ">=")
/// additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           parse_additive,
                           &[BinaryOperator::Less,
                             BinaryOperator::LessEqual,
                             BinaryOperator::Greater,
                             BinaryOperator::GreaterEqual])
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           parse_multiplicative,
                           &[BinaryOperator::Add, BinaryOperator::Sub])
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           parse_unary,
                           &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod])
}

/// Parses one left-associative precedence level.
///
/// Operands are parsed with `operand`; any operator in `operators` joins the
/// accumulated left side with the next operand.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operand: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                                 operators: &[BinaryOperator])
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = operand(tokens)?;

    while let Some(token) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && operators.contains(&op)
    {
        let line = token.line;
        tokens.next();
        let right = operand(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents an arithmetic or
/// comparison operator. Logical keywords are not binary operators; they are
/// parsed into `Expr::Logical` nodes.
///
/// # Example
/// ```
/// use lack::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Percent), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&TokenKind::And), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
