#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that strict tree building can report.
pub enum BuildError {
    /// Parentheses do not pair up, either in the whole expression or in what
    /// remains after stripping the outer pair.
    UnbalancedParentheses {
        /// The expression whose parentheses do not match.
        expression: String,
    },
    /// Splitting at an operator left one side empty.
    EmptyOperand {
        /// The expression that was being split.
        expression: String,
    },
    /// A piece of input is neither a literal, a variable, nor an operation.
    UnrecognizedToken {
        /// The offending text.
        token: String,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParentheses { expression } => {
                write!(f, "Unbalanced parentheses in '{expression}'.")
            },
            Self::EmptyOperand { expression } => {
                write!(f, "Operator without an operand in '{expression}'.")
            },
            Self::UnrecognizedToken { token } => write!(f,
                                                        "Unrecognized token '{token}': expected a number, a variable or a parenthesized operation."),
        }
    }
}

impl std::error::Error for BuildError {}
