use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{binary::arithmetic::numeric_operands, core::EvalResult},
        value::core::Value,
    },
};

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// For `Equal` and `NotEqual`, values of any type are compared with
/// [`Value::equals`]; values of different types are never equal. The
/// relational operators require two numbers.
///
/// # Parameters
/// - `op`: The comparison operator.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
/// - `line`: Current line number used for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean result.
///
/// # Example
/// ```
/// use lack::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let a = Value::Number(3.0);
/// let b = Value::Number(5.0);
///
/// assert_eq!(eval_comparison(BinaryOperator::Less, &a, &b, 1).unwrap(), Value::Bool(true));
/// assert_eq!(eval_comparison(BinaryOperator::Equal, &a, &Value::Nil, 1).unwrap(),
///            Value::Bool(false));
/// ```
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    Ok(Value::Bool(match op {
                       BinaryOperator::Equal => left.equals(right),
                       BinaryOperator::NotEqual => !left.equals(right),

                       BinaryOperator::Less
                       | BinaryOperator::Greater
                       | BinaryOperator::LessEqual
                       | BinaryOperator::GreaterEqual => {
                           let (left, right) = numeric_operands(left, right, line)?;

                           match op {
                               BinaryOperator::Less => left < right,
                               BinaryOperator::Greater => left > right,
                               BinaryOperator::LessEqual => left <= right,
                               _ => left >= right,
                           }
                       },

                       _ => unreachable!("eval_comparison used with arithmetic operator {op}"),
                   }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    #[test]
    fn equality_never_crosses_types() {
        let cases = [(Value::Nil, Value::Nil, true),
                     (Value::Nil, Value::Bool(false), false),
                     (Value::Number(0.0), Value::Bool(false), false),
                     (Value::from("1"), Value::Number(1.0), false),
                     (Value::from("a"), Value::from("a"), true)];

        for (left, right, equal) in cases {
            assert_eq!(eval_comparison(BinaryOperator::Equal, &left, &right, 1),
                       Ok(Value::Bool(equal)));
            assert_eq!(eval_comparison(BinaryOperator::NotEqual, &left, &right, 1),
                       Ok(Value::Bool(!equal)));
        }
    }

    #[test]
    fn ordering_requires_numbers() {
        assert_eq!(eval_comparison(BinaryOperator::GreaterEqual,
                                   &Value::from(2.0),
                                   &Value::from(2.0),
                                   1),
                   Ok(Value::Bool(true)));
        assert_eq!(eval_comparison(BinaryOperator::Less, &Value::from("a"), &Value::from("b"), 5),
                   Err(RuntimeError::OperandsMustBeNumbers { line: 5 }));
    }
}
