use std::io::{BufRead, Write};

use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<R, W> Interpreter<R, W>
    where R: BufRead,
          W: Write
{
    /// Evaluates a short-circuiting logical operation.
    ///
    /// The left operand is always evaluated. `or` returns it unchanged when
    /// it is truthy and `and` when it is falsy; otherwise the right operand is
    /// evaluated and returned. The result is an operand value, not a coerced
    /// boolean.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use lack::interpreter::evaluator::core::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new(Cursor::new(""), Vec::new());
    /// interpreter.run(r#"write nil or "fallback"; write 0 and missing;"#).unwrap();
    /// assert_eq!(interpreter.output(), b"fallback0");
    /// ```
    pub fn eval_logical(&mut self,
                        left: &Expr,
                        op: LogicalOperator,
                        right: &Expr)
                        -> EvalResult<Value> {
        let left = self.eval(left)?;

        let decided = match op {
            LogicalOperator::Or => left.is_truthy(),
            LogicalOperator::And => !left.is_truthy(),
        };

        if decided { Ok(left) } else { self.eval(right) }
    }
}
