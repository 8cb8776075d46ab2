/// Represents all errors that can occur during evaluation and runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Read or assigned a variable that no enclosing scope defines.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator needed a numeric operand.
    #[error("Error on line {line}: Operand must be a number.")]
    OperandMustBeNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator needed two numeric operands.
    #[error("Error on line {line}: Operands must be numbers.")]
    OperandsMustBeNumbers {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `+` applied to anything but two numbers or two strings.
    #[error("Error on line {line}: Operands must be two numbers or two strings.")]
    InvalidAddition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string multiplied by something other than a non-negative integer.
    #[error("Error on line {line}: String can only be multiplied by int.")]
    InvalidStringRepetition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// String repetition whose result cannot be allocated.
    #[error("Error on line {line}: String too large.")]
    StringTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted modulo by zero.
    #[error("Error on line {line}: Modulo by zero.")]
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The count of a `repeat ... for` loop is not a non-negative integer.
    #[error("Error on line {line}: Expected integer after 'for'.")]
    InvalidRepeatCount {
        /// The line of the `for` keyword.
        line: usize,
    },
    /// `break` or `continue` with no enclosing loop.
    #[error("Error on line {line}: '{keyword}' must be inside a loop.")]
    LoopControlOutsideLoop {
        /// Either `break` or `continue`.
        keyword: &'static str,
        /// The line of the keyword.
        line:    usize,
    },
    /// `readnum` received text that is not a number.
    #[error("Error on line {line}: Invalid number input '{input}'.")]
    InvalidNumberInput {
        /// The line as read, without its terminator.
        input: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reading from the input stream failed.
    #[error("Error on line {line}: Invalid input: {details}.")]
    InputFailure {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Writing to the output stream failed.
    #[error("Error on line {line}: Output failure: {details}.")]
    OutputFailure {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Gets the line number the error was raised on.
    ///
    /// ```
    /// use lack::error::RuntimeError;
    ///
    /// let error = RuntimeError::UndefinedVariable { name: "y".to_string(),
    ///                                               line: 3, };
    /// assert_eq!(error.line(), 3);
    /// assert_eq!(error.to_string(), "Error on line 3: Undefined variable 'y'.");
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::OperandMustBeNumber { line }
            | Self::OperandsMustBeNumbers { line }
            | Self::InvalidAddition { line }
            | Self::InvalidStringRepetition { line }
            | Self::StringTooLarge { line }
            | Self::DivisionByZero { line }
            | Self::ModuloByZero { line }
            | Self::InvalidRepeatCount { line }
            | Self::LoopControlOutsideLoop { line, .. }
            | Self::InvalidNumberInput { line, .. }
            | Self::InputFailure { line, .. }
            | Self::OutputFailure { line, .. } => *line,
        }
    }
}
