use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::{Location, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_logical_or, statement::parse_statement, utils::match_kind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Statements are parsed until the `Eof` token. A statement that fails to
/// parse is recorded and skipped via [`synchronize`], so a single pass reports
/// every independent syntax error.
///
/// # Parameters
/// - `tokens`: The scanned tokens, ending with `Eof`.
///
/// # Returns
/// The statements, or every syntax error found.
///
/// # Example
/// ```
/// use lack::interpreter::{lexer::scan, parser::core::parse_program};
///
/// let (tokens, _) = scan("let = 1; write ; writeln 2;");
/// let errors = parse_program(&tokens).unwrap_err();
///
/// assert_eq!(errors.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> Result<Vec<Statement>, Vec<ParseError>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while iter.peek().is_some_and(|token| token.kind != TokenKind::Eof) {
        match parse_statement(&mut iter, &mut errors) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                debug!(%error, "recovering from syntax error");
                errors.push(error);
                synchronize(&mut iter);
            },
        }
    }

    debug!(statements = statements.len(), errors = errors.len(), "parsed program");

    if errors.is_empty() { Ok(statements) } else { Err(errors) }
}

/// Discards tokens until a statement boundary.
///
/// At least one token is consumed unless the stream is at `Eof`. Stops after a
/// `;`, or before a token that begins a statement or closes a block.
pub fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while let Some(token) = tokens.next_if(|token| token.kind != TokenKind::Eof) {
        if token.kind == TokenKind::Semicolon {
            return;
        }

        if tokens.peek()
                 .is_some_and(|next| next.kind.starts_statement() || next.kind == TokenKind::RBrace)
        {
            return;
        }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_assignment(tokens)
}

/// Parses an assignment.
///
/// Assignment is right-associative: `a = b = 1` assigns `1` to `b`, then to
/// `a`. The target must be a plain variable.
///
/// Grammar: `assignment := IDENTIFIER "=" assignment | logic_or`
///
/// # Errors
/// - `InvalidAssignmentTarget` if the left side is not a variable.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let target = parse_logical_or(tokens)?;

    let Some(equals) = match_kind(tokens, &TokenKind::Equals) else {
        return Ok(target);
    };

    let value = parse_assignment(tokens)?;

    match target {
        Expr::Variable { name, .. } => Ok(Expr::Assign { name,
                                                         value: Box::new(value),
                                                         line: equals.line }),
        _ => Err(ParseError::InvalidAssignmentTarget { location: Location::of(equals),
                                                       line:     equals.line, }),
    }
}
