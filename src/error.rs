/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unexpected characters, unterminated literals and comments, missing
/// tokens and invalid assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution,
/// such as type mismatches, division by zero, undefined variables and loop
/// control outside a loop.
pub mod runtime_error;

pub use parse_error::{Location, ParseError};
pub use runtime_error::RuntimeError;

/// The outcome of a failed run.
///
/// A run either fails to compile, in which case every lexical and syntax error
/// found in the single pass is reported, or fails at runtime with the first
/// runtime error.
#[derive(Debug, thiserror::Error)]
pub enum LackError {
    /// One or more lexical or syntax errors. Nothing was executed.
    #[error("{}", render_all(.0))]
    Syntax(Vec<ParseError>),
    /// Execution stopped at a runtime error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl LackError {
    /// Process exit code conventionally used for this kind of failure.
    ///
    /// ```
    /// use lack::error::{LackError, RuntimeError};
    ///
    /// assert_eq!(LackError::Syntax(Vec::new()).exit_code(), 65);
    /// assert_eq!(LackError::Runtime(RuntimeError::DivisionByZero { line: 1 }).exit_code(), 70);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Syntax(_) => 65,
            Self::Runtime(_) => 70,
        }
    }
}

impl From<Vec<ParseError>> for LackError {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Syntax(errors)
    }
}

fn render_all(errors: &[ParseError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}
