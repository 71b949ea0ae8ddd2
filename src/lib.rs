//! # exprtree
//!
//! exprtree builds a binary expression tree from a fully parenthesized
//! arithmetic expression such as `((3+4)*2)`, evaluates it, and prints it in
//! prefix, postfix and infix notation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::info;

use crate::interpreter::{
    builder::BuildMode,
    evaluator::Variables,
    tree::{ExpressionTree, report_with_value},
};

/// Defines the expression tree nodes.
///
/// This module declares the `Node` enum and the `BinaryOperator` type. A node
/// is either a literal, a variable, or an operator owning up to two children.
///
/// # Responsibilities
/// - Represents the kind of every node, decided once at build time.
/// - Keeps literal text so printed output matches the input.
pub mod ast;
/// Provides the error types for building and evaluation.
///
/// Errors only surface in strict mode; the permissive defaults absorb every
/// problem by substituting zero or an absent subtree.
pub mod error;
/// Builds, evaluates and prints expression trees.
///
/// # Responsibilities
/// - Classifies leaves and splits expressions into trees.
/// - Evaluates trees against variable bindings.
/// - Renders the three traversal notations.
pub mod interpreter;

/// Settings for a single build, evaluate and print cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Reject malformed input and zero divisors instead of defaulting.
    pub strict:    bool,
    /// Variable bindings; unbound variables evaluate to `0`.
    pub variables: Variables,
}

impl Options {
    /// The build mode these options select.
    #[must_use]
    pub const fn mode(&self) -> BuildMode {
        if self.strict { BuildMode::Strict } else { BuildMode::Permissive }
    }
}

/// Builds, evaluates and prints one expression.
///
/// The returned text holds four lines: infix, prefix and postfix renderings
/// followed by `Expression evaluates to: <value>`.
///
/// # Errors
/// Only in strict mode: a build error for malformed input, or an evaluation
/// error for division by zero.
///
/// # Examples
/// ```
/// use exprtree::{Options, get_result};
///
/// let report = get_result("((3+4)*2)", &Options::default()).unwrap();
/// assert_eq!(report.lines().last(), Some("Expression evaluates to: 14"));
///
/// // Malformed input only fails in strict mode.
/// let strict = Options { strict: true,
///                        ..Options::default() };
/// assert!(get_result("(3+)", &Options::default()).is_ok());
/// assert!(get_result("(3+)", &strict).is_err());
/// ```
pub fn get_result(source: &str, options: &Options) -> Result<String, Box<dyn std::error::Error>> {
    let tree = ExpressionTree::build_with_mode(source, options.mode())?
                   .with_variables(options.variables.clone());

    let value = if options.strict { tree.evaluate_strict()? } else { tree.evaluate() };
    info!(source, value, "evaluated");

    Ok(report_with_value(&tree, value))
}
