#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that strict evaluation can report.
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    DivisionByZero {
        /// The printed left operand.
        dividend: String,
    },
    /// An operator node is missing one of its operands, or the tree is empty.
    MissingOperand,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => write!(f, "Division by zero: {dividend} / 0."),
            Self::MissingOperand => write!(f, "Operand missing from expression tree."),
        }
    }
}

impl std::error::Error for EvalError {}
