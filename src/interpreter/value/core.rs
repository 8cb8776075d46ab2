use std::rc::Rc;

use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments and conditions. There are no compound values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value; also the initial value of `let x;`.
    Nil,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable string.
    Str(Rc<str>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v.into())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.as_str().into()),
        }
    }
}

impl Value {
    /// Coerces the value to a boolean for use in a condition.
    ///
    /// `nil`, `false`, positive zero and the empty string are falsy; every
    /// other value is truthy. Negative zero prints as `-0` and is truthy.
    ///
    /// # Example
    /// ```
    /// use lack::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::Number(-0.0).is_truthy());
    /// assert!(Value::from("0").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Number(n) => !(*n == 0.0 && n.is_sign_positive()),
            Self::Str(s) => !s.is_empty(),
        }
    }

    /// Compares two values for `==`.
    ///
    /// Values of different types are never equal; `nil` equals only `nil`.
    /// Numbers compare by IEEE value, so `NaN` is not equal to itself.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            _ => false,
        }
    }

    /// Returns the number inside `self`, if it is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(0.5).is_truthy());
        assert!(Value::from("a").is_truthy());
    }

    #[test]
    fn equality_never_crosses_types() {
        assert!(Value::Nil.equals(&Value::Nil));
        assert!(!Value::Nil.equals(&Value::Bool(false)));
        assert!(!Value::Number(1.0).equals(&Value::from("1")));
        assert!(Value::from("ab").equals(&Value::from(String::from("ab"))));
        assert!(!Value::Number(f64::NAN).equals(&Value::Number(f64::NAN)));
    }
}
