use std::fmt;

use crate::interpreter::value::core::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

/// Formats a number for display.
///
/// Whole numbers print without a fractional part; everything else prints
/// with the shortest representation that round-trips.
///
/// # Example
/// ```
/// use lack::interpreter::value::display::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-2.25), "-2.25");
/// ```
#[must_use]
pub fn format_number(n: f64) -> String {
    // `f64`'s `Display` never emits a trailing `.0` or an exponent.
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_each_type() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Number(7.0).to_string(), "7");
        assert_eq!(Value::Number(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(Value::from("hi there").to_string(), "hi there");
    }

    #[test]
    fn special_numbers() {
        assert_eq!(format_number(-0.0), "-0");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn large_numbers_print_in_full() {
        assert_eq!(format_number(1e7), "10000000");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }
}
