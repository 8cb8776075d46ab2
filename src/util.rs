/// Numeric conversion helpers.
///
/// This module provides safe functions for converting floating-point values
/// into counts without risking silent truncation. All functions return a
/// `Result`, which is `Ok` if the conversion is lossless and valid.
pub mod num;
