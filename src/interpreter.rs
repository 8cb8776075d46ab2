/// The environment module holds variable bindings during execution.
///
/// Scopes form a chain from the innermost block out to the global scope.
/// Lookups and assignments walk that chain outward; declarations always bind
/// in the innermost scope.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, executes
/// statements, and performs console I/O. It is the core execution engine of
/// the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions and executes statements, including loops.
/// - Propagates `break` / `continue` as control-flow signals, not errors.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters, and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their lexeme and
///   source line.
/// - Skips whitespace and comments.
/// - Reports lexical errors and keeps scanning after them.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. Derived operators and `for` loops are desugared on the way.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar, reporting errors with line and location.
/// - Recovers after an error so that one pass reports every syntax error.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values a program computes with: `nil`, booleans,
/// numbers and strings. It also defines truthiness, equality and the text
/// form `write` prints.
pub mod value;
