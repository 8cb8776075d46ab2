//! # lack
//!
//! lack is a tree-walking interpreter for Lack, a small dynamically typed
//! scripting language written in Rust. Source text is scanned, parsed into an
//! AST and executed directly, with variables, block scoping, conditionals,
//! several loop forms and line-based console I/O.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::{error::LackError, interpreter::evaluator::core::Interpreter};
use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. Every error carries the source line it refers to and
/// renders as `Error on line N...`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Groups the outcome of a failed run into a single `LackError`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, scopes and value
/// representations to provide a complete runtime for Lack programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert `f64` values into counts without silent data loss.
pub mod util;

/// Scans `source` into tokens.
///
/// Scanning never stops at an error: the offending text is skipped, the error
/// recorded, and scanning resumes. The token list always ends with `Eof`.
///
/// # Example
/// ```
/// let (tokens, errors) = lack::scan("write 1 @ 2;");
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].to_string(), "Error on line 1: Unexpected character '@'.");
/// assert_eq!(tokens.len(), 5);
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<Token>, Vec<ParseError>) {
    interpreter::lexer::scan(source)
}

/// Scans and parses `source` into a program.
///
/// # Errors
/// Every lexical and syntax error of the pass, ordered by line. A program is
/// only returned when there are none.
///
/// # Example
/// ```
/// // The unterminated string also leaves `write` without an operand.
/// let errors = lack::parse("let = 1;\nwrite \"open;").unwrap_err();
///
/// assert_eq!(errors.iter().map(|e| e.line()).collect::<Vec<_>>(), [1, 2, 2]);
/// ```
pub fn parse(source: &str) -> Result<Vec<Statement>, Vec<ParseError>> {
    let (tokens, mut errors) = scan(source);

    match parse_program(&tokens) {
        Ok(program) if errors.is_empty() => Ok(program),
        Ok(_) => Err(errors),
        Err(syntax_errors) => {
            errors.extend(syntax_errors);
            errors.sort_by_key(ParseError::line);
            debug!(errors = errors.len(), "rejected source");
            Err(errors)
        },
    }
}

/// Runs `source` with a fresh interpreter on stdin and stdout.
///
/// # Errors
/// Returns `LackError::Syntax` if the source does not parse, in which case
/// nothing runs, or `LackError::Runtime` for the error that stopped it.
///
/// # Examples
/// ```
/// // Prints "4" to stdout.
/// assert!(lack::run_source("writeln 2 + 2;").is_ok());
///
/// // Undefined variable.
/// let error = lack::run_source("writeln x + 1;").unwrap_err();
/// assert_eq!(error.to_string(), "Error on line 1: Undefined variable 'x'.");
/// ```
pub fn run_source(source: &str) -> Result<(), LackError> {
    Interpreter::stdio().run(source)
}
