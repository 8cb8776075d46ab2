use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation; any other operand type is an error.
/// - `Not`: the inverse of the operand's truthiness, as a boolean.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Input value.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The computed `Value` wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use lack::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// // Negation
/// let v = eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
/// assert_eq!(v, Value::Number(-5.0));
///
/// // Logical not works on any value
/// let v = eval_unary(UnaryOperator::Not, &Value::from(""), 1).unwrap();
/// assert_eq!(v, Value::Bool(true));
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(RuntimeError::OperandMustBeNumber { line }),
        },
        UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_requires_a_number() {
        assert_eq!(eval_unary(UnaryOperator::Negate, &Value::from("5"), 2),
                   Err(RuntimeError::OperandMustBeNumber { line: 2 }));
        assert_eq!(eval_unary(UnaryOperator::Negate, &Value::Nil, 3),
                   Err(RuntimeError::OperandMustBeNumber { line: 3 }));
    }

    #[test]
    fn negating_zero_gives_a_truthy_value() {
        let negated = eval_unary(UnaryOperator::Negate, &Value::Number(0.0), 1).unwrap();
        assert!(negated.is_truthy());
        assert_eq!(eval_unary(UnaryOperator::Not, &negated, 1), Ok(Value::Bool(false)));
    }

    #[test]
    fn not_inverts_truthiness() {
        assert_eq!(eval_unary(UnaryOperator::Not, &Value::Nil, 1), Ok(Value::Bool(true)));
        assert_eq!(eval_unary(UnaryOperator::Not, &Value::Number(0.0), 1), Ok(Value::Bool(true)));
        assert_eq!(eval_unary(UnaryOperator::Not, &Value::from("x"), 1), Ok(Value::Bool(false)));
    }
}
