use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::{eval_add, eval_div, eval_mod, eval_mul, eval_sub},
                comparison::eval_comparison,
            },
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two already evaluated values.
///
/// This function routes the operation to the handler for its operator
/// family. Arithmetic operators go to the `arithmetic` handlers, where `+`
/// also concatenates strings and `*` also repeats them. Relational and
/// equality operators use `eval_comparison`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use lack::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Add, &Value::from(3.0), &Value::from(4.0), 1);
/// assert_eq!(result.unwrap(), Value::Number(7.0));
///
/// let result = eval_binary(BinaryOperator::Mul, &Value::from("ab"), &Value::from(2.0), 1);
/// assert_eq!(result.unwrap(), Value::from("abab"));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
    };

    match op {
        Add => eval_add(left, right, line),
        Sub => eval_sub(left, right, line),
        Mul => eval_mul(left, right, line),
        Div => eval_div(left, right, line),
        Mod => eval_mod(left, right, line),

        Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
            eval_comparison(op, left, right, line)
        },
    }
}
