/// Tree building errors.
///
/// Defines the errors the strict builder reports for malformed input:
/// unbalanced parentheses, empty operands and tokens that are neither a
/// literal nor a variable. The permissive builder never raises them.
pub mod build_error;
/// Evaluation errors.
///
/// Contains the errors raised by strict evaluation, such as division by zero
/// or an operator missing one of its operands.
pub mod eval_error;

pub use build_error::BuildError;
pub use eval_error::EvalError;
