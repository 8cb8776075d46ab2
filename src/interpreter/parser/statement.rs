use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{advance, expect, match_kind, parse_identifier, peek, starts_expression},
        },
    },
};

/// Parses a single statement.
///
/// The statement form is chosen by its first token:
/// - `write` / `writeln`, `read` / `readnum`, `let`.
/// - `{` for a block.
/// - `if`, `while`, `for`, `repeat`.
/// - `break` / `continue`.
/// - anything else is an expression statement.
///
/// Errors inside a nested block are recovered from within that block and
/// pushed to `errors`; the block itself still parses.
///
/// # Errors
/// - `ReservedKeyword` for `fun`, `return`, `class`, `this` and `super`.
/// - Propagates the errors of the chosen form.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              errors: &mut Vec<ParseError>)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let token = peek(tokens)?;

    match &token.kind {
        TokenKind::Write | TokenKind::Writeln => parse_write(tokens),
        TokenKind::Read | TokenKind::ReadNum => parse_read(tokens),
        TokenKind::Let => parse_let(tokens),
        TokenKind::LBrace => {
            tokens.next();
            parse_block(tokens, token.line, errors)
        },
        TokenKind::If => parse_if(tokens, errors),
        TokenKind::While => parse_while(tokens, errors),
        TokenKind::For => parse_for(tokens, errors),
        TokenKind::Repeat => parse_repeat(tokens, errors),
        TokenKind::Break | TokenKind::Continue => parse_loop_control(tokens),
        kind if kind.is_reserved() => Err(ParseError::ReservedKeyword { keyword:
                                                                          token.lexeme.clone(),
                                                                      line:    token.line, }),
        _ => parse_expression_statement(tokens),
    }
}

/// Parses an expression used as a statement.
///
/// Grammar: `exprStmt := expression ";"`
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = peek(tokens)?.line;
    let expr = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Semicolon, "Expected ';' after expression")?;

    Ok(Statement::Expression { expr, line })
}

/// Parses `write <expr>;` and `writeln <expr>;`.
fn parse_write<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = advance(tokens)?;
    let terminator = match keyword.kind {
        TokenKind::Writeln => "\n",
        _ => "",
    };

    let expr = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Semicolon, "Expected ';' after value")?;

    Ok(Statement::Write { expr,
                          terminator,
                          line: keyword.line })
}

/// Parses `read <name>;` and `readnum <name>;`.
///
/// These statements only assign; the variable must already be declared when
/// the statement runs.
fn parse_read<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = advance(tokens)?;
    let name = parse_identifier(tokens,
                                &format!("Expected variable name after '{}'", keyword.lexeme))?;
    expect(tokens, &TokenKind::Semicolon, "Expected ';' after variable name")?;

    let line = keyword.line;
    Ok(match keyword.kind {
           TokenKind::ReadNum => Statement::ReadNum { name, line },
           _ => Statement::Read { name, line },
       })
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `let <identifier> (= <expression>)?;`. Without
/// an initializer the variable starts as `nil`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is missing,
/// - the initializer is malformed,
/// - the `;` is missing.
fn parse_let<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = advance(tokens)?.line;
    let name = parse_identifier(tokens, "Expected variable name after 'let'")?;

    let initializer = match match_kind(tokens, &TokenKind::Equals) {
        Some(_) => Some(parse_expression(tokens)?),
        None => None,
    };

    expect(tokens, &TokenKind::Semicolon, "Expected ';' after variable declaration")?;

    Ok(Statement::Let { name,
                        initializer,
                        line })
}

/// Parses an `if` statement with an optional `else`.
///
/// Syntax:
/// ```text
///     if <condition> <statement>
///     if <condition> <statement> else <statement>
/// ```
/// Braces are optional; an `else` belongs to the nearest `if` without one.
fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                   errors: &mut Vec<ParseError>)
                   -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = advance(tokens)?.line;
    let condition = parse_expression(tokens)?;
    let then_branch = Box::new(parse_statement(tokens, errors)?);

    let else_branch = match match_kind(tokens, &TokenKind::Else) {
        Some(_) => Some(Box::new(parse_statement(tokens, errors)?)),
        None => None,
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses `while <condition> <statement>`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>,
                      errors: &mut Vec<ParseError>)
                      -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = advance(tokens)?.line;
    let condition = parse_expression(tokens)?;
    let body = Box::new(parse_statement(tokens, errors)?);

    Ok(Statement::While { condition,
                          body,
                          increment: None,
                          line })
}

/// Parses a counted `for` loop and desugars it into a `while`.
///
/// Syntax:
/// ```text
///     for <initializer>? ; <condition>? ; <increment>? <statement>
/// ```
/// The initializer is a `let` declaration or an expression statement. A
/// missing condition is `true`. The increment is present when the token after
/// the second `;` can start an expression.
///
/// The result is `{ <initializer> while <condition> <statement> }` with the
/// increment attached to the `while`; without an initializer no block is
/// produced.
fn parse_for<'a, I>(tokens: &mut Peekable<I>,
                    errors: &mut Vec<ParseError>)
                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = advance(tokens)?.line;

    let initializer = match peek(tokens)?.kind {
        TokenKind::Semicolon => {
            tokens.next();
            None
        },
        TokenKind::Let => Some(parse_let(tokens)?),
        _ => Some(parse_expression_statement(tokens)?),
    };

    let condition = match peek(tokens)?.kind {
        TokenKind::Semicolon => Expr::Literal { value: LiteralValue::Bool(true),
                                                line },
        _ => parse_expression(tokens)?,
    };
    expect(tokens, &TokenKind::Semicolon, "Expected ';' after loop condition")?;

    let increment = if starts_expression(&peek(tokens)?.kind) {
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    let body = Box::new(parse_statement(tokens, errors)?);
    let while_loop = Statement::While { condition,
                                        body,
                                        increment,
                                        line };

    Ok(match initializer {
           Some(initializer) => Statement::Block { statements: vec![initializer, while_loop],
                                                   line },
           None => while_loop,
       })
}

/// Parses the post-test loops `repeat <statement> until <condition>;` and
/// `repeat <statement> for <count>;`.
///
/// # Errors
/// - `ExpectedToken` if the body is followed by neither `until` nor `for`, or
///   the `;` is missing.
fn parse_repeat<'a, I>(tokens: &mut Peekable<I>,
                       errors: &mut Vec<ParseError>)
                       -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = advance(tokens)?.line;
    let body = Box::new(parse_statement(tokens, errors)?);

    let keyword = peek(tokens)?;
    let statement = match keyword.kind {
        TokenKind::Until => {
            tokens.next();
            let condition = parse_expression(tokens)?;
            Statement::RepeatUntil { body,
                                     condition,
                                     line }
        },
        TokenKind::For => {
            tokens.next();
            let count = parse_expression(tokens)?;
            Statement::RepeatFor { count,
                                   body,
                                   line: keyword.line }
        },
        _ => {
            return Err(ParseError::expected("Expected 'until' or 'for' after repeat body",
                                            keyword));
        },
    };

    expect(tokens, &TokenKind::Semicolon, "Expected ';' after repeat condition")?;

    Ok(statement)
}

/// Parses `break;` and `continue;`.
///
/// Whether the statement sits inside a loop is checked before execution, not
/// here.
fn parse_loop_control<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = advance(tokens)?;
    expect(tokens,
           &TokenKind::Semicolon,
           &format!("Expected ';' after '{}'", keyword.lexeme))?;

    let line = keyword.line;
    Ok(match keyword.kind {
           TokenKind::Continue => Statement::Continue { line },
           _ => Statement::Break { line },
       })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::BinaryOperator,
        error::Location,
        interpreter::{lexer::scan, parser::core::parse_program},
    };

    fn parse(source: &str) -> Result<Vec<Statement>, Vec<ParseError>> {
        let (tokens, errors) = scan(source);
        assert!(errors.is_empty(), "lex errors: {errors:?}");
        parse_program(&tokens)
    }

    fn single(source: &str) -> Statement {
        let mut statements = parse(source).expect("parse failed");
        assert_eq!(statements.len(), 1);
        statements.remove(0)
    }

    #[test]
    fn write_and_writeln_terminators() {
        assert!(matches!(single("write 1;"), Statement::Write { terminator: "", .. }));
        assert!(matches!(single("writeln 1;"), Statement::Write { terminator: "\n", .. }));
    }

    #[test]
    fn let_without_initializer() {
        assert_eq!(single("let x;"),
                   Statement::Let { name:        "x".into(),
                                    initializer: None,
                                    line:        1, });
    }

    #[test]
    fn dangling_else_binds_to_nearest_if() {
        let Statement::If { else_branch,
                            then_branch,
                            .. } = single("if a if b write 1; else write 2;")
        else {
            panic!("expected if");
        };
        assert!(else_branch.is_none());
        assert!(matches!(*then_branch, Statement::If { else_branch: Some(_), .. }));
    }

    #[test]
    fn for_desugars_into_block_and_while() {
        let Statement::Block { statements, .. } =
            single("for let i = 0; i < 3; i = i + 1 write i;")
        else {
            panic!("expected block");
        };
        assert!(matches!(statements[0], Statement::Let { .. }));
        let Statement::While { condition,
                               increment,
                               .. } = &statements[1]
        else {
            panic!("expected while");
        };
        assert!(matches!(condition, Expr::Binary { op: BinaryOperator::Less, .. }));
        assert!(matches!(increment, Some(Expr::Assign { .. })));
    }

    #[test]
    fn empty_for_header_loops_on_true() {
        let Statement::While { condition,
                               increment,
                               .. } = single("for ;; { break; }")
        else {
            panic!("expected bare while");
        };
        assert_eq!(condition,
                   Expr::Literal { value: LiteralValue::Bool(true),
                                   line:  1, });
        assert_eq!(increment, None);
    }

    #[test]
    fn repeat_forms() {
        assert!(matches!(single("repeat write 1; until true;"), Statement::RepeatUntil { .. }));
        assert!(matches!(single("repeat {\n write 1;\n} for 3;"),
                         Statement::RepeatFor { line: 3, .. }));
    }

    #[test]
    fn repeat_requires_until_or_for() {
        let errors = parse("repeat write 1; while true;").unwrap_err();
        assert_eq!(errors[0],
                   ParseError::ExpectedToken { message:
                                                   "Expected 'until' or 'for' after repeat body".into(),
                                               location: Location::At("while".into()),
                                               line:     1, });
    }

    #[test]
    fn read_statements() {
        assert_eq!(single("read name;"),
                   Statement::Read { name: "name".into(),
                                     line: 1, });
        assert_eq!(single("readnum n;"),
                   Statement::ReadNum { name: "n".into(),
                                        line: 1, });
    }

    #[test]
    fn reserved_keywords_are_rejected() {
        assert_eq!(parse("fun f;").unwrap_err(),
                   vec![ParseError::ReservedKeyword { keyword: "fun".into(),
                                                      line:    1, }]);
    }

    #[test]
    fn unclosed_block() {
        let errors = parse("{ write 1;").unwrap_err();
        assert_eq!(errors,
                   vec![ParseError::ExpectedToken { message:  "Expected '}' after block".into(),
                                                    location: Location::AtEnd,
                                                    line:     1, }]);
    }
}
