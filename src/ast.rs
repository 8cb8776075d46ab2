/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code: numbers, strings, booleans and `nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The absence of a value.
    Nil,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal, without its quotes.
    Str(String),
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Expression nodes are built once by the parser and only read afterwards; a
/// loop body is evaluated from the same tree on every iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or nil).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`-x`, `not x`).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A binary operation that always evaluates both operands.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A short-circuiting `and` / `or`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand, evaluated only when the left does not decide.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment to an existing variable; evaluates to the assigned value.
    Assign {
        /// Name of the variable.
        name:  String,
        /// The value being assigned.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use lack::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Grouping { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Logical { line, .. }
            | Self::Variable { line, .. }
            | Self::Assign { line, .. } => *line,
        }
    }

    /// Wraps `operand` in a logical `not`.
    #[must_use]
    pub fn not(operand: Self, line: usize) -> Self {
        Self::Unary { op: UnaryOperator::Not,
                      operand: Box::new(operand),
                      line }
    }

    /// Builds a short-circuiting logical node.
    #[must_use]
    pub fn logical(left: Self, op: LogicalOperator, right: Self, line: usize) -> Self {
        Self::Logical { left: Box::new(left),
                        op,
                        right: Box::new(right),
                        line }
    }
}

/// Represents a statement.
///
/// A program is an ordered list of statements. Loop headers that the surface
/// syntax offers in several shapes (`for`) are desugared by the parser into
/// these nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `write` / `writeln`.
    Write {
        /// The value to print.
        expr:       Expr,
        /// Printed after the value: `""` for `write`, `"\n"` for `writeln`.
        terminator: &'static str,
        /// Line number in the source code.
        line:       usize,
    },
    /// A variable declaration using `let`.
    Let {
        /// The name of the variable.
        name:        String,
        /// The initial value; `nil` when absent.
        initializer: Option<Expr>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A braced block; introduces a new scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// Conditional statement.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Executed if the condition is truthy.
        then_branch: Box<Self>,
        /// Executed otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// Pre-test loop; also the target of `for` desugaring.
    While {
        /// Tested before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Evaluated after every iteration not ended by `break`.
        increment: Option<Expr>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `repeat <body> until <condition>;`
    RepeatUntil {
        /// The loop body.
        body:      Box<Self>,
        /// Tested after every iteration; the loop ends once it is truthy.
        condition: Expr,
        /// Line number in the source code.
        line:      usize,
    },
    /// `repeat <body> for <count>;`
    RepeatFor {
        /// Evaluated once; the number of iterations.
        count: Expr,
        /// The loop body.
        body:  Box<Self>,
        /// Line of the `for` keyword, used for count errors.
        line:  usize,
    },
    /// `break;`
    Break {
        /// Line of the keyword.
        line: usize,
    },
    /// `continue;`
    Continue {
        /// Line of the keyword.
        line: usize,
    },
    /// `read <name>;`
    Read {
        /// The existing variable receiving the line of input.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `readnum <name>;`
    ReadNum {
        /// The existing variable receiving the parsed number.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication or string repetition (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a short-circuiting logical operator.
///
/// `nand`, `nor`, `xor` and `xnor` have no operator of their own; the parser
/// rewrites them in terms of these two and `not`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
