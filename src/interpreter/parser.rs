/// Core parsing logic.
///
/// Contains the program entry point, error synchronization and the
/// assignment level of the expression grammar.
pub mod core;

/// Binary and logical expression parsing.
///
/// Implements the precedence ladder from `or` down to multiplication, and
/// rewrites `nor`, `nand`, `xor` and `xnor` into `and`, `or` and `not`.
pub mod binary;

/// Unary expression and primary parsing.
///
/// Handles prefix `not` and `-`, literals, variables and parenthesized groups.
pub mod unary;

/// Block parsing.
///
/// Parses brace-delimited statement lists.
pub mod block;

/// Statement parsing.
///
/// Parses every statement form, including the loop headers and their
/// desugaring.
pub mod statement;

/// Parser utilities.
///
/// Small helpers for peeking at, matching and expecting tokens.
pub mod utils;
