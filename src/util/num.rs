/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to a count if the value is finite, non-negative,
/// integral and exactly representable.
///
/// Used for string repetition and `repeat ... for` counts, where the language
/// only accepts whole non-negative numbers.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, negative, fractional or too large
/// values.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use lack::util::num::f64_to_count_checked;
///
/// assert_eq!(f64_to_count_checked(3.0, "bad"), Ok(3));
/// assert_eq!(f64_to_count_checked(0.0, "bad"), Ok(0));
/// assert_eq!(f64_to_count_checked(2.5, "bad"), Err("bad"));
/// assert_eq!(f64_to_count_checked(-1.0, "bad"), Err("bad"));
/// assert_eq!(f64_to_count_checked(f64::INFINITY, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_count_checked<E>(value: f64, error: E) -> Result<usize, E> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(error);
    }
    if value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return Err(error);
    }

    usize::try_from(value as u64).map_or(Err(error), Ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_is_a_valid_count() {
        assert_eq!(f64_to_count_checked(-0.0, ()), Ok(0));
    }

    #[test]
    fn rejects_values_beyond_exact_range() {
        assert_eq!(f64_to_count_checked(1e300, ()), Err(()));
        assert_eq!(f64_to_count_checked(f64::NAN, ()), Err(()));
    }
}
