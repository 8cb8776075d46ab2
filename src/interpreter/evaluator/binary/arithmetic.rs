use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::f64_to_count_checked,
};

/// Unwraps two numeric operands.
///
/// # Errors
/// `OperandsMustBeNumbers` if either operand is not a number.
pub fn numeric_operands(left: &Value, right: &Value, line: usize) -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
    }
}

/// `+`: numeric addition or string concatenation.
///
/// # Errors
/// `InvalidAddition` unless both operands are numbers or both are strings.
pub fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => Ok(Value::from(format!("{a}{b}"))),
        _ => Err(RuntimeError::InvalidAddition { line }),
    }
}

/// `-` on numbers.
///
/// # Errors
/// `OperandsMustBeNumbers` for any non-numeric operand.
pub fn eval_sub(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let (a, b) = numeric_operands(left, right, line)?;
    Ok(Value::Number(a - b))
}

/// `*`: numeric product, or string repetition when either side is a string.
///
/// The string may be on either side; the other operand is the count and
/// must be a non-negative integer.
///
/// # Errors
/// `InvalidStringRepetition` if a string is paired with anything but a valid
/// count, `OperandsMustBeNumbers` if neither side is a string and one is not
/// a number.
pub fn eval_mul(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Str(text), count) | (count, Value::Str(text)) => repeat(text, count, line),
        _ => {
            let (a, b) = numeric_operands(left, right, line)?;
            Ok(Value::Number(a * b))
        },
    }
}

/// `/` on numbers.
///
/// # Errors
/// `DivisionByZero` when the divisor is zero, `OperandsMustBeNumbers` for
/// any non-numeric operand.
pub fn eval_div(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let (a, b) = numeric_operands(left, right, line)?;
    if b == 0.0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    Ok(Value::Number(a / b))
}

/// `%` on numbers: the floating remainder truncated toward zero, so the
/// result takes the sign of the dividend.
///
/// # Errors
/// `ModuloByZero` when the divisor is zero, `OperandsMustBeNumbers` for any
/// non-numeric operand.
pub fn eval_mod(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let (a, b) = numeric_operands(left, right, line)?;
    if b == 0.0 {
        return Err(RuntimeError::ModuloByZero { line });
    }
    Ok(Value::Number(a % b))
}

fn repeat(text: &Rc<str>, count: &Value, line: usize) -> EvalResult<Value> {
    let invalid = RuntimeError::InvalidStringRepetition { line };
    let times = count.as_number().ok_or_else(|| invalid.clone())?;
    let times = f64_to_count_checked(times, invalid)?;

    if text.is_empty() {
        return Ok(Value::from(""));
    }

    let too_large = RuntimeError::StringTooLarge { line };
    let len = text.len().checked_mul(times).ok_or_else(|| too_large.clone())?;

    // A failed allocation must surface as an error, not abort the process.
    let mut repeated = String::new();
    repeated.try_reserve_exact(len).map_err(|_| too_large)?;
    for _ in 0..times {
        repeated.push_str(text);
    }

    Ok(Value::from(repeated))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_needs_matching_types() {
        assert_eq!(eval_add(&Value::from("ab"), &Value::from("cd"), 1),
                   Ok(Value::from("abcd")));
        assert_eq!(eval_add(&Value::from("a"), &Value::from(1.0), 4),
                   Err(RuntimeError::InvalidAddition { line: 4 }));
        assert_eq!(eval_add(&Value::Nil, &Value::Nil, 2),
                   Err(RuntimeError::InvalidAddition { line: 2 }));
    }

    #[test]
    fn repetition_works_from_both_sides() {
        assert_eq!(eval_mul(&Value::from("ab"), &Value::from(3.0), 1),
                   Ok(Value::from("ababab")));
        assert_eq!(eval_mul(&Value::from(3.0), &Value::from("ab"), 1),
                   Ok(Value::from("ababab")));
        assert_eq!(eval_mul(&Value::from("ab"), &Value::from(0.0), 1), Ok(Value::from("")));
    }

    #[test]
    fn repetition_rejects_bad_counts() {
        for count in [Value::from(2.5), Value::from(-1.0), Value::from("2"), Value::Nil] {
            assert_eq!(eval_mul(&Value::from("ab"), &count, 7),
                       Err(RuntimeError::InvalidStringRepetition { line: 7 }));
        }
    }

    #[test]
    fn unallocatable_repetition_is_an_error() {
        assert_eq!(eval_mul(&Value::from("ab"), &Value::from(1e15), 2),
                   Err(RuntimeError::StringTooLarge { line: 2 }));
        assert_eq!(eval_mul(&Value::from(""), &Value::from(1e15), 2), Ok(Value::from("")));
    }

    #[test]
    fn zero_divisors_have_distinct_errors() {
        assert_eq!(eval_div(&Value::from(1.0), &Value::from(0.0), 1),
                   Err(RuntimeError::DivisionByZero { line: 1 }));
        assert_eq!(eval_mod(&Value::from(1.0), &Value::from(0.0), 1),
                   Err(RuntimeError::ModuloByZero { line: 1 }));
        assert_eq!(eval_div(&Value::from(1.0), &Value::from(2.0), 1), Ok(Value::Number(0.5)));
    }

    #[test]
    fn remainder_follows_the_dividend_sign() {
        assert_eq!(eval_mod(&Value::from(-7.0), &Value::from(3.0), 1), Ok(Value::Number(-1.0)));
        assert_eq!(eval_mod(&Value::from(7.5), &Value::from(2.0), 1), Ok(Value::Number(1.5)));
    }

    #[test]
    fn arithmetic_rejects_non_numbers() {
        assert_eq!(eval_sub(&Value::Bool(true), &Value::from(1.0), 3),
                   Err(RuntimeError::OperandsMustBeNumbers { line: 3 }));
        assert_eq!(eval_mul(&Value::Nil, &Value::from(1.0), 3),
                   Err(RuntimeError::OperandsMustBeNumbers { line: 3 }));
    }
}
