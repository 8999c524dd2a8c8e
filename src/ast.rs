/// An abstract syntax tree (AST) node representing a parsed expression.
///
/// `Expr` covers every construct the expression language knows: numeric
/// literals, variable and constant references, unary and binary operations,
/// and function calls. Each variant carries the byte offset of the token that
/// introduced it, so evaluation errors can point back into the source string.
///
/// Nodes form a strict tree: children are owned through `Box` and a node is
/// never shared between parents. Once built by the parser a tree is immutable.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal. The value is always finite; the parser rejects
    /// literals that overflow an `f64` before constructing the node.
    Number {
        /// The literal value.
        value:    f64,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Byte offset of the identifier in the source.
        position: usize,
    },
    /// Reference to a named constant such as `pi`.
    Constant {
        /// Name of the constant.
        name:     String,
        /// Byte offset of the identifier in the source.
        position: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// A binary operation (addition, division, exponentiation, ...).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in call order. May be empty.
        arguments: Vec<Self>,
        /// Byte offset of the function name in the source.
        position:  usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    ///
    /// ## Example
    /// ```
    /// use expreval::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Variable { position, .. }
            | Self::Constant { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
///
/// The set is closed: the evaluator dispatches over it with a single
/// exhaustive `match`. Both `**` and `^` map to [`BinaryOperator::Pow`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**` or `^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Expr {
    /// Writes the expression in a fully parenthesized form that parses back
    /// into a structurally identical tree.
    ///
    /// ## Example
    /// ```
    /// use expreval::interpreter::parser::core::parse;
    ///
    /// let expr = parse("1 + 2 * 3").unwrap();
    ///
    /// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } | Self::Constant { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, operand, .. } => write!(f, "({op}{operand})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}
