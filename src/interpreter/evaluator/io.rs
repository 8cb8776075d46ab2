use std::io::{BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<R, W> Interpreter<R, W>
    where R: BufRead,
          W: Write
{
    /// Prints the display form of `value` followed by `terminator`.
    ///
    /// The writer is flushed after every statement so that a prompt written
    /// with `write` is visible before a following `read` blocks.
    ///
    /// # Errors
    /// `OutputFailure` if the writer fails.
    pub fn write_value(&mut self, value: &Value, terminator: &str, line: usize) -> EvalResult<()> {
        let written = write!(self.output, "{value}{terminator}").and_then(|()| self.output.flush());

        written.map_err(|error| RuntimeError::OutputFailure { details: error.to_string(),
                                                              line })
    }

    /// Executes `read <name>;`: assigns the next input line, without its
    /// terminator, to the existing variable `name`.
    ///
    /// At end of input the variable is set to `nil`.
    ///
    /// # Errors
    /// - `InputFailure` if the reader fails.
    /// - `UndefinedVariable` if `name` is not declared.
    pub fn read_line_into(&mut self, name: &str, line: usize) -> EvalResult<()> {
        let value = self.read_input_line(line)?.map_or(Value::Nil, Value::from);
        self.assign(name, value, line)
    }

    /// Executes `readnum <name>;`: parses the next input line as a number
    /// and assigns it to the existing variable `name`.
    ///
    /// Whitespace around the number is ignored.
    ///
    /// # Errors
    /// - `InvalidNumberInput` if the line is not a number or input has ended;
    ///   the variable keeps its value.
    /// - `InputFailure` if the reader fails.
    /// - `UndefinedVariable` if `name` is not declared.
    pub fn read_number_into(&mut self, name: &str, line: usize) -> EvalResult<()> {
        let input = self.read_input_line(line)?.unwrap_or_default();

        let number = input.trim()
                          .parse::<f64>()
                          .map_err(|_| RuntimeError::InvalidNumberInput { input: input.clone(),
                                                                          line })?;

        self.assign(name, Value::Number(number), line)
    }

    /// Reads one line of input, stripping a trailing `\n` or `\r\n`.
    ///
    /// # Returns
    /// `None` at end of input.
    fn read_input_line(&mut self, line: usize) -> EvalResult<Option<String>> {
        let mut buffer = String::new();
        let read = self.input
                       .read_line(&mut buffer)
                       .map_err(|error| RuntimeError::InputFailure { details: error.to_string(),
                                                                     line })?;
        if read == 0 {
            return Ok(None);
        }

        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }
        Ok(Some(buffer))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use crate::{
        error::{LackError, RuntimeError},
        interpreter::{evaluator::core::Interpreter, value::core::Value},
    };

    fn interpreter(input: &'static str) -> Interpreter<Cursor<&'static str>, Vec<u8>> {
        Interpreter::new(Cursor::new(input), Vec::new())
    }

    #[test]
    fn write_and_writeln_differ_only_in_terminator() {
        let mut interpreter = interpreter("");
        interpreter.run(r#"write "a"; writeln 1.5; write nil; writeln true;"#).unwrap();
        assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "a1.5\nniltrue\n");
    }

    #[test]
    fn read_strips_line_terminators() {
        let mut interpreter = interpreter("first\r\nsecond\n");
        interpreter.run("let a; let b; read a; read b;").unwrap();
        assert_eq!(interpreter.environment().get("a"), Some(&Value::from("first")));
        assert_eq!(interpreter.environment().get("b"), Some(&Value::from("second")));
    }

    #[test]
    fn read_at_end_of_input_assigns_nil() {
        let mut interpreter = interpreter("only");
        interpreter.run(r#"let a; let b = "x"; read a; read b;"#).unwrap();
        assert_eq!(interpreter.environment().get("a"), Some(&Value::from("only")));
        assert_eq!(interpreter.environment().get("b"), Some(&Value::Nil));
    }

    #[test]
    fn read_requires_a_declared_variable() {
        let mut interpreter = interpreter("text\n");
        let error = interpreter.run("read missing;").unwrap_err();
        assert!(matches!(error,
                         LackError::Runtime(RuntimeError::UndefinedVariable { line: 1, .. })));
    }

    #[test]
    fn readnum_parses_trimmed_numbers() {
        let mut interpreter = interpreter("  42 \n-0.5\n");
        interpreter.run("let a; let b; readnum a; readnum b; write a + b;").unwrap();
        assert_eq!(interpreter.output(), b"41.5");
    }

    #[test]
    fn readnum_rejects_text() {
        let mut interpreter = interpreter("abc\n");
        let error = interpreter.run("let n = 1;\nreadnum n;").unwrap_err();
        assert!(matches!(error,
                         LackError::Runtime(RuntimeError::InvalidNumberInput { ref input, line: 2 })
                         if input == "abc"));
        assert_eq!(interpreter.environment().get("n"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn readnum_at_end_of_input_fails() {
        let mut interpreter = interpreter("");
        let error = interpreter.run("let n; readnum n;").unwrap_err();
        assert!(matches!(error,
                         LackError::Runtime(RuntimeError::InvalidNumberInput { .. })));
    }
}
