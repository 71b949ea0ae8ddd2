use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::{BinaryOperator, Node},
    error::EvalError,
};

/// Result type used by strict evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Values bound to variable names.
pub type Variables = HashMap<String, f64>;

/// Evaluates a (sub)tree, substituting zero for anything missing.
///
/// - An absent node evaluates to `0`.
/// - A literal evaluates to its parsed value.
/// - A variable evaluates to its binding, or `0` when unbound.
/// - An operator applies itself to its evaluated children; division by zero
///   follows floating-point rules and gives an infinity or `NaN`.
///
/// # Parameters
/// - `node`: The node to evaluate, if any.
/// - `variables`: Variable bindings.
///
/// # Example
/// ```
/// use exprtree::interpreter::{builder::build, evaluator::{Variables, evaluate}};
///
/// let tree = build("((3+4)*2)");
/// assert_eq!(evaluate(tree.as_ref(), &Variables::new()), 14.0);
///
/// let tree = build("(a+3)");
/// assert_eq!(evaluate(tree.as_ref(), &Variables::new()), 3.0);
/// ```
#[must_use]
pub fn evaluate(node: Option<&Node>, variables: &Variables) -> f64 {
    let Some(node) = node else {
        return 0.0;
    };

    match node {
        Node::Literal { value, .. } => *value,
        Node::Variable { name } => lookup(name, variables),
        Node::Operator { op, left, right } => {
            let left = evaluate(left.as_deref(), variables);
            let right = evaluate(right.as_deref(), variables);
            op.apply(left, right)
        },
    }
}

/// Evaluates a tree, failing instead of substituting defaults.
///
/// Unbound variables still evaluate to `0`; only structural gaps and zero
/// divisors are reported.
///
/// # Errors
/// - `MissingOperand` if `node` or any operand below it is absent.
/// - `DivisionByZero` if a divisor evaluates to zero.
///
/// # Example
/// ```
/// use exprtree::{
///     error::EvalError,
///     interpreter::{builder::build, evaluator::{Variables, evaluate_strict}},
/// };
///
/// let tree = build("(10/(4-4))");
/// assert!(matches!(evaluate_strict(tree.as_ref(), &Variables::new()),
///                  Err(EvalError::DivisionByZero { .. })));
/// ```
pub fn evaluate_strict(node: Option<&Node>, variables: &Variables) -> EvalResult<f64> {
    let node = node.ok_or(EvalError::MissingOperand)?;

    match node {
        Node::Literal { value, .. } => Ok(*value),
        Node::Variable { name } => Ok(lookup(name, variables)),
        Node::Operator { op, left, right } => {
            let left = evaluate_strict(left.as_deref(), variables)?;
            let right = evaluate_strict(right.as_deref(), variables)?;

            if *op == BinaryOperator::Div && right == 0.0 {
                return Err(EvalError::DivisionByZero { dividend: left.to_string() });
            }

            Ok(op.apply(left, right))
        },
    }
}

fn lookup(name: &str, variables: &Variables) -> f64 {
    if let Some(value) = variables.get(name) {
        *value
    } else {
        trace!(name, "unbound variable, using 0");
        0.0
    }
}
