use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, synchronize},
            statement::parse_statement,
            utils::peek,
        },
    },
};

/// Parses a block statement delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is encountered.
///
/// Grammar: `block := "{" statement* "}"`
///
/// A statement that fails to parse is pushed to `errors` and skipped, and
/// parsing resumes inside the block. An error found at the closing `}` does
/// not consume it.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
/// - `errors`: Collects the errors of inner statements.
///
/// # Errors
/// - `ExpectedToken` if the input ends before the closing `}`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          line: usize,
                          errors: &mut Vec<ParseError>)
                          -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = Vec::new();

    loop {
        let token = peek(tokens)?;
        match token.kind {
            TokenKind::RBrace => {
                tokens.next();
                break;
            },
            TokenKind::Eof => return Err(ParseError::expected("Expected '}' after block", token)),
            _ => match parse_statement(tokens, errors) {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    errors.push(error);
                    // The block's own `}` is left for the next iteration to close it.
                    if tokens.peek().is_some_and(|next| next.kind != TokenKind::RBrace) {
                        synchronize(tokens);
                    }
                },
            },
        }
    }

    Ok(Statement::Block { statements, line })
}
