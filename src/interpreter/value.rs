/// Runtime value representation.
///
/// Defines the `Value` enum, conversions from literals, truthiness and
/// equality.
pub mod core;
/// Display formatting of runtime values.
///
/// Renders values the way `write` prints them: whole numbers without a
/// trailing `.0`, `nil` as the literal text `nil`.
pub mod display;
