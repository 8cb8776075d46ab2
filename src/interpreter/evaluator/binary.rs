/// Operator dispatch.
pub mod core;

/// Addition, concatenation, repetition, subtraction, division and modulo.
pub mod arithmetic;

/// Ordering comparisons and equality.
pub mod comparison;

/// Short-circuiting `and` / `or`.
pub mod logic;
