/// The builder module turns source text into an expression tree.
///
/// It splits fully parenthesized input at the rightmost top-level operator
/// and recurses into both halves until only leaves remain.
///
/// # Responsibilities
/// - Builds trees permissively, leaving malformed pieces absent.
/// - Builds trees strictly, reporting the first malformed piece.
pub mod builder;
/// The evaluator module computes the numeric value of a tree.
///
/// Absent subtrees and unbound variables count as zero. Strict evaluation
/// reports gaps and zero divisors instead.
pub mod evaluator;
/// The lexer module classifies leaf text.
///
/// A leaf is either a run of digits or a variable name; both patterns are
/// defined once here and used by the builder.
pub mod lexer;
/// The printer module renders prefix, postfix and infix traversals.
pub mod printer;
/// The tree module pairs a built tree with its variable bindings.
pub mod tree;
