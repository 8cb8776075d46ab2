use std::io::{BufRead, Write};

use tracing::trace;

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::core::Value,
    },
};

impl<R, W> Interpreter<R, W>
    where R: BufRead,
          W: Write
{
    /// Executes a single statement.
    ///
    /// Declarations bind in the current scope, blocks run in a fresh scope,
    /// loops and I/O statements are handled by their own modules.
    ///
    /// # Returns
    /// `Flow::Normal` when execution should continue with the next statement,
    /// or the `Break` / `Continue` signal raised inside it.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised while executing.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Flow::Normal)
            },
            Statement::Write { expr,
                               terminator,
                               line, } => {
                let value = self.eval(expr)?;
                self.write_value(&value, terminator, *line)?;
                Ok(Flow::Normal)
            },
            Statement::Let { name, initializer, .. } => {
                let value = match initializer {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                self.env.define(name, value);
                Ok(Flow::Normal)
            },
            Statement::Block { statements, .. } => self.execute_block(statements),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Statement::While { condition,
                               body,
                               increment,
                               .. } => self.execute_while(condition, body, increment.as_ref()),
            Statement::RepeatUntil { body, condition, .. } => {
                self.execute_repeat_until(body, condition)
            },
            Statement::RepeatFor { count, body, line } => {
                self.execute_repeat_for(count, body, *line)
            },
            Statement::Break { .. } => Ok(Flow::Break),
            Statement::Continue { .. } => Ok(Flow::Continue),
            Statement::Read { name, line } => {
                self.read_line_into(name, *line)?;
                Ok(Flow::Normal)
            },
            Statement::ReadNum { name, line } => {
                self.read_number_into(name, *line)?;
                Ok(Flow::Normal)
            },
        }
    }

    /// Runs `statements` in a new scope nested in the current one.
    ///
    /// Stops at the first statement that does not complete normally and
    /// returns its signal. The scope is left on every exit path, errors
    /// included.
    pub fn execute_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        self.env.push();
        let result = self.execute_sequence(statements);
        self.env.pop();

        trace!(?result, "block finished");
        result
    }

    fn execute_sequence(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            let flow = self.execute(statement)?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }
}
