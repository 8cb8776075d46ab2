use std::fmt;

use crate::interpreter::lexer::{Token, TokenKind};

/// Where in the token stream a syntax error was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// At the given lexeme.
    At(String),
    /// At the end of input.
    AtEnd,
}

impl Location {
    /// Builds the location of `token`.
    #[must_use]
    pub fn of(token: &Token) -> Self {
        match token.kind {
            TokenKind::Eof => Self::AtEnd,
            _ => Self::At(token.lexeme.clone()),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(lexeme) => write!(f, " at '{lexeme}'"),
            Self::AtEnd => write!(f, " at end"),
        }
    }
}

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A character that does not start any token.
    #[error("Error on line {line}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal without its closing quote.
    #[error("Error on line {line}: Unterminated string.")]
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block comment without its closing `*/`.
    #[error("Error on line {line}: Unterminated block comment.")]
    UnterminatedComment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression was required but the token cannot start one.
    #[error("Error on line {line}{location}: Expected expression.")]
    ExpectedExpression {
        /// The token at which parsing failed.
        location: Location,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A specific token was required but not found.
    #[error("Error on line {line}{location}: {message}.")]
    ExpectedToken {
        /// What was expected, e.g. `Expected ';' after value`.
        message:  String,
        /// The token found instead.
        location: Location,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The left side of `=` is not a variable.
    #[error("Error on line {line}{location}: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// The `=` token.
        location: Location,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A keyword reserved for future use appeared where a statement starts.
    #[error("Error on line {line}: '{keyword}' is reserved.")]
    ReservedKeyword {
        /// The reserved keyword.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Builds an [`ParseError::ExpectedToken`] located at `found`.
    #[must_use]
    pub fn expected(message: impl Into<String>, found: &Token) -> Self {
        Self::ExpectedToken { message:  message.into(),
                              location: Location::of(found),
                              line:     found.line, }
    }

    /// Gets the line number the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::UnterminatedComment { line }
            | Self::ExpectedExpression { line, .. }
            | Self::ExpectedToken { line, .. }
            | Self::InvalidAssignmentTarget { line, .. }
            | Self::ReservedKeyword { line, .. } => *line,
        }
    }
}
