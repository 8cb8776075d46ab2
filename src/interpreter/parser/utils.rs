use std::iter::Peekable;

use crate::{
    error::{Location, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Error used when the token stream runs out before its `Eof` token.
const fn end_of_input() -> ParseError {
    ParseError::ExpectedExpression { location: Location::AtEnd,
                                     line:     0, }
}

/// Returns the next token without consuming it.
///
/// # Errors
/// Returns a `ParseError` if the stream is exhausted.
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().copied().ok_or_else(end_of_input)
}

/// Consumes and returns the next token.
///
/// # Errors
/// Returns a `ParseError` if the stream is exhausted.
pub(in crate::interpreter::parser) fn advance<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next().ok_or_else(end_of_input)
}

/// Consumes the next token if it is of kind `kind`.
///
/// # Returns
/// The consumed token, or `None` (consuming nothing) if the next token is of
/// another kind.
pub(in crate::interpreter::parser) fn match_kind<'a, I>(tokens: &mut Peekable<I>,
                                                        kind: &TokenKind)
                                                        -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| token.kind == *kind)
}

/// Consumes a token of kind `kind`, or fails with `message`.
///
/// # Errors
/// Returns `ParseError::ExpectedToken` located at the offending token, which
/// is left unconsumed.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: &TokenKind,
                                                    message: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = match_kind(tokens, kind) {
        return Ok(token);
    }

    Err(ParseError::expected(message, peek(tokens)?))
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns `ParseError::ExpectedToken` with `message` if the next token is
/// not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              message: &str)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    let token = peek(tokens)?;
    match &token.kind {
        TokenKind::Identifier(name) => {
            tokens.next();
            Ok(name.clone())
        },
        _ => Err(ParseError::expected(message, token)),
    }
}

/// Returns whether `kind` can begin an expression.
pub(in crate::interpreter::parser) const fn starts_expression(kind: &TokenKind) -> bool {
    matches!(kind,
             TokenKind::Number(_)
             | TokenKind::Str(_)
             | TokenKind::Identifier(_)
             | TokenKind::True
             | TokenKind::False
             | TokenKind::Nil
             | TokenKind::Not
             | TokenKind::Minus
             | TokenKind::LParen)
}
