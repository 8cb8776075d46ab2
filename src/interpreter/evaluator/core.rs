use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::{LackError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::{binary::core::eval_binary, legality::check_loop_control, unary::eval_unary},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// Blocks stop at the first statement that does not complete normally and
/// hand the signal to their caller; loops consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `break` is unwinding to the nearest loop, which then exits.
    Break,
    /// A `continue` is unwinding to the nearest loop, which then starts its
    /// next iteration.
    Continue,
}

/// Stores the runtime state of a Lack program.
///
/// The interpreter owns the variable scopes, the reader `read`/`readnum`
/// consume lines from and the writer `write`/`writeln` print to.
///
/// ## Usage
///
/// An `Interpreter` is created once and may run any number of sources in
/// turn; globals defined by one run are visible to the next.
///
/// ```
/// use std::io::Cursor;
///
/// use lack::interpreter::evaluator::core::Interpreter;
///
/// let mut interpreter = Interpreter::new(Cursor::new("21\n"), Vec::new());
/// interpreter.run("let x; readnum x;").unwrap();
/// interpreter.run("writeln x * 2;").unwrap();
///
/// assert_eq!(interpreter.output(), b"42\n");
/// ```
pub struct Interpreter<R, W> {
    pub(in crate::interpreter::evaluator) env:    Environment,
    pub(in crate::interpreter::evaluator) input:  R,
    pub(in crate::interpreter::evaluator) output: W,
}

impl Interpreter<StdinLock<'static>, Stdout> {
    /// Creates an interpreter reading from stdin and writing to stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> Interpreter<R, W>
    where R: BufRead,
          W: Write
{
    /// Creates an interpreter with an empty global scope.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { env: Environment::new(),
               input,
               output }
    }

    /// The writer program output goes to.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// The reader `read` and `readnum` consume lines from.
    ///
    /// The interactive shell reads its own input lines through this reader
    /// so that it and the running program share one stream.
    pub const fn input_mut(&mut self) -> &mut R {
        &mut self.input
    }

    /// Consumes the interpreter, returning its writer.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// The variable scopes.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// Scans, parses and executes `source`.
    ///
    /// Nothing is executed if the source has any lexical or syntax error.
    ///
    /// # Errors
    /// Returns `LackError::Syntax` with every error of the pass, or
    /// `LackError::Runtime` with the error that stopped execution. Output
    /// written and variables bound before a runtime error are kept.
    pub fn run(&mut self, source: &str) -> Result<(), LackError> {
        let program = crate::parse(source)?;
        self.execute_program(&program)?;
        Ok(())
    }

    /// Executes a parsed program statement by statement.
    ///
    /// The program is first checked for `break`/`continue` outside a loop;
    /// if one is found, nothing runs.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised.
    pub fn execute_program(&mut self, program: &[Statement]) -> EvalResult<()> {
        check_loop_control(program)?;

        for statement in program {
            if let Err(error) = self.execute(statement) {
                debug!(line = error.line(), "run aborted");
                return Err(error);
            }
        }

        debug!(statements = program.len(), "run finished");
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands of
    /// arithmetic and comparison operators are evaluated left to right before
    /// the operator is applied; `and` / `or` evaluate their right operand
    /// only when the left one does not decide the result.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for undefined variables and for operands of
    /// the wrong type.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Unary { op, operand, line } => {
                let operand = self.eval(operand)?;
                eval_unary(*op, &operand, *line)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, &left, &right, *line)
            },
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right),
            Expr::Variable { name, line } => self.lookup(name, *line),
            Expr::Assign { name, value, line } => {
                let value = self.eval(value)?;
                self.assign(name, value.clone(), *line)?;
                Ok(value)
            },
        }
    }

    /// Reads the value bound to `name` in the nearest scope.
    pub(in crate::interpreter::evaluator) fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.env
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Rebinds `name` in the nearest scope that defines it.
    pub(in crate::interpreter::evaluator) fn assign(&mut self,
                                                    name: &str,
                                                    value: Value,
                                                    line: usize)
                                                    -> EvalResult<()> {
        self.env
            .assign(name, value)
            .map_err(|_| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                           line })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn interpreter() -> Interpreter<Cursor<&'static [u8]>, Vec<u8>> {
        Interpreter::new(Cursor::new(&b""[..]), Vec::new())
    }

    fn eval_source(source: &str) -> EvalResult<Value> {
        let mut interpreter = interpreter();
        let program = crate::parse(&format!("{source};")).unwrap();
        match &program[..] {
            [Statement::Expression { expr, .. }] => interpreter.eval(expr),
            other => panic!("expected one expression statement, got {other:?}"),
        }
    }

    #[test]
    fn evaluates_arithmetic_with_precedence() {
        assert_eq!(eval_source("1 + 2 * 3"), Ok(Value::Number(7.0)));
        assert_eq!(eval_source("(1 + 2) * 3"), Ok(Value::Number(9.0)));
        assert_eq!(eval_source("-(2 - 5)"), Ok(Value::Number(3.0)));
    }

    #[test]
    fn undefined_variable_reports_its_line() {
        assert_eq!(eval_source("\n\ny"),
                   Err(RuntimeError::UndefinedVariable { name: "y".to_string(),
                                                         line: 3, }));
    }

    #[test]
    fn assignment_yields_the_assigned_value() {
        let mut interpreter = interpreter();
        interpreter.run("let a; let b;").unwrap();
        interpreter.run("a = b = 4;").unwrap();
        assert_eq!(interpreter.environment().get("a"), Some(&Value::Number(4.0)));
        assert_eq!(interpreter.environment().get("b"), Some(&Value::Number(4.0)));
    }

    #[test]
    fn assignment_to_undeclared_name_fails_before_binding() {
        let mut interpreter = interpreter();
        let error = interpreter.run("z = 1;").unwrap_err();
        assert!(matches!(error,
                         LackError::Runtime(RuntimeError::UndefinedVariable { ref name, line: 1 })
                         if name == "z"));
        assert_eq!(interpreter.environment().get("z"), None);
    }

    #[test]
    fn globals_persist_across_runs() {
        let mut interpreter = interpreter();
        interpreter.run("let count = 1;").unwrap();
        interpreter.run("count = count + 1;").unwrap();
        assert_eq!(interpreter.environment().get("count"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn runtime_error_keeps_earlier_effects() {
        let mut interpreter = interpreter();
        let error = interpreter.run("let x = 1; write x; x = 1 / 0; x = 3;").unwrap_err();
        assert_eq!(error.exit_code(), 70);
        assert_eq!(interpreter.output(), b"1");
        assert_eq!(interpreter.environment().get("x"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn syntax_error_executes_nothing() {
        let mut interpreter = interpreter();
        let error = interpreter.run("write 1; write ;").unwrap_err();
        assert_eq!(error.exit_code(), 65);
        assert!(interpreter.into_output().is_empty());
    }
}
