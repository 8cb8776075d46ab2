use std::io::{BufRead, Write};

use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Flow, Interpreter},
    util::num::f64_to_count_checked,
};

impl<R, W> Interpreter<R, W>
    where R: BufRead,
          W: Write
{
    /// Evaluates a `while` loop, including loops desugared from `for`.
    ///
    /// The condition is tested before every iteration. After an iteration
    /// that ends normally or with `continue`, the increment (if any) is
    /// evaluated; `break` leaves the loop without running it.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use lack::interpreter::evaluator::core::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new(Cursor::new(""), Vec::new());
    /// interpreter.run("for let i = 0; i < 5; i = i + 1 { if i == 1 continue; write i; }")
    ///            .unwrap();
    /// assert_eq!(interpreter.output(), b"0234");
    /// ```
    pub fn execute_while(&mut self,
                         condition: &Expr,
                         body: &Statement,
                         increment: Option<&Expr>)
                         -> EvalResult<Flow> {
        let mut iteration = 0_usize;

        while self.eval(condition)?.is_truthy() {
            trace!(iteration, line = condition.line_number(), "while iteration");
            iteration += 1;

            if self.execute(body)? == Flow::Break {
                break;
            }

            if let Some(increment) = increment {
                self.eval(increment)?;
            }
        }

        Ok(Flow::Normal)
    }

    /// Evaluates `repeat <body> until <condition>;`.
    ///
    /// The body always runs at least once; the loop ends after the first
    /// iteration whose condition is truthy, or on `break`.
    pub fn execute_repeat_until(&mut self, body: &Statement, condition: &Expr) -> EvalResult<Flow> {
        loop {
            trace!(line = condition.line_number(), "repeat-until iteration");

            if self.execute(body)? == Flow::Break {
                break;
            }

            if self.eval(condition)?.is_truthy() {
                break;
            }
        }

        Ok(Flow::Normal)
    }

    /// Evaluates `repeat <body> for <count>;`.
    ///
    /// The count is evaluated once, before the first iteration, and must be a
    /// non-negative integer. A count of zero runs the body zero times.
    ///
    /// # Errors
    /// `InvalidRepeatCount` at `line` (the line of the `for` keyword) if the
    /// count is not a non-negative integer.
    pub fn execute_repeat_for(&mut self,
                              count: &Expr,
                              body: &Statement,
                              line: usize)
                              -> EvalResult<Flow> {
        let invalid = RuntimeError::InvalidRepeatCount { line };
        let times = self.eval(count)?.as_number().ok_or_else(|| invalid.clone())?;
        let times = f64_to_count_checked(times, invalid)?;

        for iteration in 0..times {
            trace!(iteration, times, "repeat-for iteration");

            if self.execute(body)? == Flow::Break {
                break;
            }
        }

        Ok(Flow::Normal)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use crate::{
        error::{LackError, RuntimeError},
        interpreter::evaluator::core::Interpreter,
    };

    fn run(source: &str) -> (Result<(), LackError>, String) {
        let mut interpreter = Interpreter::new(Cursor::new(&b""[..]), Vec::new());
        let result = interpreter.run(source);
        (result, String::from_utf8(interpreter.into_output()).unwrap())
    }

    #[test]
    fn while_honours_continue_and_break() {
        let source = "let i = 0;
                      while i < 5 {
                          i = i + 1;
                          if i == 3 break;
                          write i;
                          continue;
                          write \"unreachable\";
                      }";
        let (result, output) = run(source);
        assert!(result.is_ok());
        assert_eq!(output, "12");
    }

    #[test]
    fn for_runs_the_increment_after_continue() {
        let (_, output) = run("for let i = 0; i < 4; i = i + 1 { if i == 2 continue; write i; }");
        assert_eq!(output, "013");
    }

    #[test]
    fn for_skips_the_increment_on_break() {
        let (_, output) =
            run("let last; for let i = 0; i < 9; i = i + 1 { last = i; if i == 2 break; } write last;");
        assert_eq!(output, "2");
    }

    #[test]
    fn for_variable_is_scoped_to_the_loop() {
        let (result, output) = run("for let i = 0; i < 2; i = i + 1 write i; write i;");
        assert_eq!(output, "01");
        assert!(matches!(result,
                         Err(LackError::Runtime(RuntimeError::UndefinedVariable { line: 1, .. }))));
    }

    #[test]
    fn for_without_clauses_loops_until_break() {
        let (_, output) = run("let n = 0; for ; ; { n = n + 1; if n == 3 break; } write n;");
        assert_eq!(output, "3");
    }

    #[test]
    fn repeat_until_runs_at_least_once() {
        let (_, output) = run(r#"repeat write "x"; until true;"#);
        assert_eq!(output, "x");
    }

    #[test]
    fn repeat_until_tests_after_the_body() {
        let (_, output) = run("let n = 0; repeat { n = n + 1; write n; } until n >= 3;");
        assert_eq!(output, "123");
    }

    #[test]
    fn repeat_until_tests_its_condition_after_continue() {
        let (result, output) =
            run("let n = 0; repeat { n = n + 1; if n == 2 continue; write n; } until n >= 2;");
        assert!(result.is_ok());
        assert_eq!(output, "1");
    }

    #[test]
    fn repeat_for_continue_moves_to_the_next_count() {
        let (result, output) =
            run("let n = 0; repeat { n = n + 1; if n % 2 == 0 continue; write n; } for 5;");
        assert!(result.is_ok());
        assert_eq!(output, "135");
    }

    #[test]
    fn repeat_for_runs_a_fixed_number_of_times() {
        let (_, output) = run(r#"repeat write "x"; for 3;"#);
        assert_eq!(output, "xxx");

        let (_, output) = run(r#"repeat write "x"; for 0;"#);
        assert_eq!(output, "");
    }

    #[test]
    fn repeat_for_evaluates_its_count_once() {
        let (_, output) = run("let n = 2; repeat { n = n + 1; write n; } for n;");
        assert_eq!(output, "34");
    }

    #[test]
    fn repeat_for_stops_on_break() {
        let (_, output) = run("let n = 0; repeat { n = n + 1; if n == 2 break; } for 10; write n;");
        assert_eq!(output, "2");
    }

    #[test]
    fn repeat_for_rejects_fractional_and_negative_counts() {
        for count in ["2.5", "-1", "\"3\"", "nil"] {
            let source = format!("repeat write \"x\";\nfor {count};");
            let (result, output) = run(&source);
            assert_eq!(output, "", "count {count}");
            assert!(matches!(result,
                             Err(LackError::Runtime(RuntimeError::InvalidRepeatCount { line: 2 }))),
                    "count {count}");
        }
    }

    #[test]
    fn break_inside_a_block_leaves_only_the_innermost_loop() {
        let source = "let i = 0;
                      while i < 2 {
                          i = i + 1;
                          repeat { write i; break; } for 5;
                      }";
        let (_, output) = run(source);
        assert_eq!(output, "12");
    }
}
