/// Represents a binary operator.
///
/// Only the four arithmetic operators of the parenthesized grammar exist.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps an operator character to its [`BinaryOperator`].
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('*'), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol('^'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Floating-point semantics apply throughout, so dividing by zero yields
    /// an infinity or `NaN` instead of failing.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(7.0, 2.0), 5.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// A node of the expression tree.
///
/// The kind of a node is decided once, when the builder creates it. Operator
/// nodes hold their operands as optional children: a permissive build of
/// malformed input may leave either side absent, and evaluation treats an
/// absent side as zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An integer literal such as `42`.
    Literal {
        /// The digits exactly as they appeared in the source.
        text:  String,
        /// The parsed numeric value.
        value: f64,
    },
    /// A variable reference such as `x` or `rate2`.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation over two sub-expressions.
    Operator {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand, if one was built.
        left:  Option<Box<Self>>,
        /// Right operand, if one was built.
        right: Option<Box<Self>>,
    },
}

impl Node {
    /// Creates a literal leaf from a run of decimal digits.
    ///
    /// A digit run always parses; runs too long for `f64` saturate to
    /// infinity.
    #[must_use]
    pub fn literal(text: &str) -> Self {
        let value = text.parse().unwrap_or(f64::INFINITY);
        Self::Literal { text: text.to_string(),
                        value }
    }

    /// Creates a variable leaf.
    #[must_use]
    pub fn variable(name: &str) -> Self {
        Self::Variable { name: name.to_string() }
    }

    /// Creates an operator node owning both (possibly absent) operands.
    #[must_use]
    pub fn operator(op: BinaryOperator, left: Option<Self>, right: Option<Self>) -> Self {
        Self::Operator { op,
                         left: left.map(Box::new),
                         right: right.map(Box::new) }
    }

    /// Returns the token this node contributes to a printed traversal.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::{BinaryOperator, Node};
    ///
    /// let node = Node::operator(BinaryOperator::Div,
    ///                           Some(Node::literal("8")),
    ///                           Some(Node::variable("n")));
    ///
    /// assert_eq!(node.symbol(), "/");
    /// ```
    #[must_use]
    pub fn symbol(&self) -> String {
        match self {
            Self::Literal { text, .. } => text.clone(),
            Self::Variable { name } => name.clone(),
            Self::Operator { op, .. } => op.to_string(),
        }
    }

    /// Returns the left child, if any.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::Operator { left, .. } => left.as_deref(),
            _ => None,
        }
    }

    /// Returns the right child, if any.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::Operator { right, .. } => right.as_deref(),
            _ => None,
        }
    }

    /// Whether at least one child is present.
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.left().is_some() || self.right().is_some()
    }

    /// Counts the nodes in this subtree, including `self`.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.left().map_or(0, Self::size) + self.right().map_or(0, Self::size)
    }
}
