use std::fmt;

use crate::interpreter::value::declared_type::DeclaredType;

/// A location in the source text.
///
/// Lines are 1-based, columns are 0-based, matching the way diagnostics are
/// printed (`Error: 3:4 -> ...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number in the source code.
    pub line:   usize,
    /// Column of the first character of the node.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Represents a literal value in the language.
///
/// `LiteralValue` covers every constant that can appear directly in source
/// code. It is converted into a runtime [`Value`] without any checks.
///
/// [`Value`]: crate::interpreter::value::core::Value
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 32-bit signed integer literal, such as `42`.
    Integer(i32),
    /// A 32-bit floating-point literal, such as `2.5`.
    Real(f32),
    /// A boolean literal, written `"TRUE"` or `"FALSE"`.
    Bool(bool),
    /// A character literal, such as `'c'`.
    Char(char),
    /// A string literal, such as `"hello"`.
    Text(String),
}

impl From<i32> for LiteralValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<f32> for LiteralValue {
    fn from(value: f32) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for LiteralValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Prefix sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+`
    Plus,
    /// `-`
    Minus,
}

impl UnaryOperator {
    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

/// Additive and multiplicative operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl BinaryOperator {
    /// The verb used when the operands cannot be combined, as in
    /// `cannot add values of types INT and BOOL`.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "subtract",
            Self::Mul => "multiply",
            Self::Div => "divide",
            Self::Mod => "get modulo for the",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{symbol}")
    }
}

/// Ordering and equality operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationalOperator {
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `==`
    Equal,
    /// `<>`
    NotEqual,
}

impl fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Equal => "==",
            Self::NotEqual => "<>",
        };
        write!(f, "{symbol}")
    }
}

/// Logical connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOperator {
    /// `AND`
    And,
    /// `OR`
    Or,
}

impl fmt::Display for BooleanOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant carries the position of the construct so that runtime
/// errors can point back at the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Position in the source code.
        pos:   Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Position in the source code.
        pos:  Position,
    },
    /// A prefix `+` or `-`.
    Unary {
        /// The sign operator.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Position in the source code.
        pos:  Position,
    },
    /// An additive or multiplicative operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Position in the source code.
        pos:   Position,
    },
    /// A comparison.
    Relational {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    RelationalOperator,
        /// Right operand.
        right: Box<Self>,
        /// Position in the source code.
        pos:   Position,
    },
    /// `AND` / `OR`.
    Boolean {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BooleanOperator,
        /// Right operand.
        right: Box<Self>,
        /// Position in the source code.
        pos:   Position,
    },
    /// String concatenation with `&`.
    Concat {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Position in the source code.
        pos:   Position,
    },
    /// A parenthesized expression.
    Paren {
        /// The inner expression.
        expr: Box<Self>,
        /// Position in the source code.
        pos:  Position,
    },
    /// Logical negation with `NOT`.
    Not {
        /// The operand expression.
        expr: Box<Self>,
        /// Position in the source code.
        pos:  Position,
    },
    /// An escape literal such as `[#]`.
    Escape {
        /// The character between the brackets.
        sequence: char,
        /// Position in the source code.
        pos:      Position,
    },
    /// The newline literal `$`.
    Newline {
        /// Position in the source code.
        pos: Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use codelang::ast::{Expr, Position};
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             pos:  Position::new(5, 2), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 2));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { pos, .. }
            | Self::Variable { pos, .. }
            | Self::Unary { pos, .. }
            | Self::Binary { pos, .. }
            | Self::Relational { pos, .. }
            | Self::Boolean { pos, .. }
            | Self::Concat { pos, .. }
            | Self::Paren { pos, .. }
            | Self::Not { pos, .. }
            | Self::Escape { pos, .. }
            | Self::Newline { pos } => *pos,
        }
    }
}

/// One identifier of a declaration statement, with its optional initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    /// The declared identifier.
    pub name:        String,
    /// The initializer, if the identifier was followed by `=`.
    pub initializer: Option<Expr>,
    /// Position of the identifier.
    pub pos:         Position,
}

/// A guarded block of an `IF` / `ELSE IF` chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalBranch {
    /// The guard; must evaluate to a boolean.
    pub condition: Expr,
    /// Statements executed when the guard holds.
    pub body:      Vec<Statement>,
    /// Position of the `IF` keyword.
    pub pos:       Position,
}

/// A statement of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `INT x, y = 5`
    Declaration {
        /// The type shared by all declarators.
        ty:          DeclaredType,
        /// The declared identifiers, in textual order.
        declarators: Vec<Declarator>,
        /// Position of the type keyword.
        pos:         Position,
    },
    /// `x = y = 4`
    Assignment {
        /// The assigned identifiers, in textual order.
        targets: Vec<String>,
        /// The assigned expression.
        value:   Expr,
        /// Position of the first target.
        pos:     Position,
    },
    /// `IF (...) BEGIN IF ... END IF ELSE IF ... ELSE ...`
    If {
        /// The leading `IF` branch.
        branch:    ConditionalBranch,
        /// `ELSE IF` branches in declaration order.
        else_ifs:  Vec<ConditionalBranch>,
        /// The `ELSE` block, if present.
        else_body: Option<Vec<Statement>>,
        /// Position of the `IF` keyword.
        pos:       Position,
    },
    /// `WHILE (...) BEGIN WHILE ... END WHILE`
    While {
        /// The loop guard.
        condition: Expr,
        /// The loop body.
        body:      Vec<Statement>,
        /// Position of the `WHILE` keyword.
        pos:       Position,
    },
    /// `DO BEGIN DO ... END DO WHILE (...)`
    DoWhile {
        /// The loop body.
        body:      Vec<Statement>,
        /// The loop guard, checked after each pass.
        condition: Expr,
        /// Position of the `DO` keyword.
        pos:       Position,
    },
    /// `DISPLAY: expr`
    Display {
        /// The printed expression.
        expr: Expr,
        /// Position of the `DISPLAY` keyword.
        pos:  Position,
    },
    /// `SCAN: x, y`
    Scan {
        /// The identifiers receiving input, in textual order.
        names: Vec<String>,
        /// Position of the `SCAN` keyword.
        pos:   Position,
    },
}

impl Statement {
    /// Gets the source position from `self`.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Declaration { pos, .. }
            | Self::Assignment { pos, .. }
            | Self::If { pos, .. }
            | Self::While { pos, .. }
            | Self::DoWhile { pos, .. }
            | Self::Display { pos, .. }
            | Self::Scan { pos, .. } => *pos,
        }
    }
}

/// A complete program: the statements between `BEGIN CODE` and `END CODE`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level statements in execution order.
    pub statements: Vec<Statement>,
    /// Position of the `BEGIN` keyword.
    pub pos:        Position,
}
