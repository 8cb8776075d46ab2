/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation and repetition, comparisons,
/// equality and the short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter` itself, the control-flow signal returned by
/// statements, expression evaluation and the program entry points.
pub mod core;

/// Statement execution.
///
/// Runs declarations, blocks, conditionals and expression statements, and
/// propagates `break` / `continue` signals outward.
pub mod statement;

/// Evaluation of loops.
///
/// Covers `while` (and the desugared `for`), `repeat ... until` and
/// `repeat ... for`.
pub mod loops;

/// Console I/O statements: `write`, `writeln`, `read` and `readnum`.
pub mod io;

/// Static check that every `break` and `continue` sits inside a loop.
pub mod legality;
