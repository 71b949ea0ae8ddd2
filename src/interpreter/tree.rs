use tracing::debug;

use crate::{
    ast::Node,
    interpreter::{
        builder::{self, BuildMode, BuildResult},
        evaluator::{self, EvalResult, Variables},
        printer::{self, Fragment, Notation},
    },
};

/// A built expression together with its variable bindings.
///
/// The tree is built once and never changes afterwards; evaluation and
/// printing only read it. Bindings start out empty, so every variable
/// evaluates to `0` until [`ExpressionTree::set_variable`] is called.
///
/// ## Usage
/// ```
/// use exprtree::interpreter::{printer::Notation, tree::ExpressionTree};
///
/// let mut tree = ExpressionTree::build("((x+4)*2)");
/// assert_eq!(tree.evaluate(), 8.0);
///
/// tree.set_variable("x", 3.0);
/// assert_eq!(tree.evaluate(), 14.0);
/// assert_eq!(tree.line(Notation::Postfix), "Postfix: x 4 + 2 * ");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionTree {
    root:      Option<Node>,
    variables: Variables,
}

impl ExpressionTree {
    /// Builds a tree permissively; malformed pieces become absent subtrees.
    #[must_use]
    pub fn build(source: &str) -> Self {
        let root = builder::build(source);
        debug!(nodes = root.as_ref().map_or(0, Node::size), "tree built");
        Self::from_root(root)
    }

    /// Builds a tree, rejecting input outside the grammar.
    ///
    /// # Errors
    /// Any [`BuildError`](crate::error::BuildError) from
    /// [`builder::build_strict`].
    pub fn build_strict(source: &str) -> BuildResult<Self> {
        let root = builder::build_strict(source)?;
        debug!(nodes = root.size(), "tree built");
        Ok(Self::from_root(Some(root)))
    }

    /// Builds a tree in either mode.
    ///
    /// # Errors
    /// Only in [`BuildMode::Strict`].
    pub fn build_with_mode(source: &str, mode: BuildMode) -> BuildResult<Self> {
        let root = builder::build_with_mode(source, mode)?;
        debug!(?mode, nodes = root.as_ref().map_or(0, Node::size), "tree built");
        Ok(Self::from_root(root))
    }

    /// Wraps an already built root.
    #[must_use]
    pub fn from_root(root: Option<Node>) -> Self {
        Self { root,
               variables: Variables::new() }
    }

    /// The root node, if anything was built.
    #[must_use]
    pub const fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Adds every binding in `variables`, replacing existing ones.
    #[must_use]
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables.extend(variables);
        self
    }

    /// Evaluates the tree; see [`evaluator::evaluate`].
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        evaluator::evaluate(self.root(), &self.variables)
    }

    /// Evaluates the tree strictly; see [`evaluator::evaluate_strict`].
    ///
    /// # Errors
    /// Any [`EvalError`](crate::error::EvalError) from strict evaluation.
    pub fn evaluate_strict(&self) -> EvalResult<f64> {
        evaluator::evaluate_strict(self.root(), &self.variables)
    }

    /// Traverses the tree in the given notation.
    #[must_use]
    pub fn traverse(&self, notation: Notation) -> Vec<Fragment> {
        printer::traverse(self.root(), notation)
    }

    /// Prefix fragments.
    #[must_use]
    pub fn prefix(&self) -> Vec<Fragment> {
        self.traverse(Notation::Prefix)
    }

    /// Postfix fragments.
    #[must_use]
    pub fn postfix(&self) -> Vec<Fragment> {
        self.traverse(Notation::Postfix)
    }

    /// Infix fragments.
    #[must_use]
    pub fn infix(&self) -> Vec<Fragment> {
        self.traverse(Notation::Infix)
    }

    /// A labelled traversal, without the line break.
    #[must_use]
    pub fn line(&self, notation: Notation) -> String {
        format!("{}{}", notation.label(), printer::render(&self.traverse(notation)))
    }

    /// The full printout: infix, prefix and postfix lines followed by the
    /// value, each terminated by a line break.
    #[must_use]
    pub fn report(&self) -> String {
        report_with_value(self, self.evaluate())
    }
}

/// Formats the printout of `tree` with an already computed `value`.
pub(crate) fn report_with_value(tree: &ExpressionTree, value: f64) -> String {
    let mut report = String::new();
    for notation in [Notation::Infix, Notation::Prefix, Notation::Postfix] {
        report.push_str(&tree.line(notation));
        report.push('\n');
    }
    report.push_str(&format!("Expression evaluates to: {value}\n"));
    report
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::error::{BuildError, EvalError};

    #[test]
    fn report_lists_notations_then_value() {
        let tree = ExpressionTree::build("((3+4)*2)");
        assert_eq!(tree.report(),
                   "Infix: ((3 + 4 )* 2 )\nPrefix: * + 3 4 2 \nPostfix: 3 4 + 2 * \nExpression evaluates to: 14\n");
    }

    #[test]
    fn empty_tree_reports_zero() {
        let tree = ExpressionTree::build("");
        assert!(tree.root().is_none());
        assert_eq!(tree.report(),
                   "Infix: \nPrefix: \nPostfix: \nExpression evaluates to: 0\n");
    }

    #[test]
    fn bindings_replace_the_zero_default() {
        let mut tree = ExpressionTree::build("(a+3)");
        assert_eq!(tree.variable("a"), None);
        assert_eq!(tree.evaluate(), 3.0);

        tree.set_variable("a", 2.0);
        assert_eq!(tree.variable("a"), Some(2.0));
        assert_eq!(tree.evaluate(), 5.0);

        let tree = tree.with_variables(Variables::from([("a".to_string(), -3.0)]));
        assert_eq!(tree.evaluate(), 0.0);
    }

    #[test]
    fn division_by_zero_reports_infinity() {
        let tree = ExpressionTree::build("(10/0)");
        assert!(tree.report().ends_with("Expression evaluates to: inf\n"));
        assert_eq!(tree.evaluate_strict(),
                   Err(EvalError::DivisionByZero { dividend: "10".to_string() }));
    }

    #[test]
    fn strict_build_propagates_errors() {
        assert_eq!(ExpressionTree::build_strict("(1+2"),
                   Err(BuildError::UnbalancedParentheses { expression: "(1+2".to_string() }));
        assert_eq!(ExpressionTree::build_strict("(1+2)").map(|tree| tree.evaluate()), Ok(3.0));
    }

    #[test]
    fn mode_selects_builder() {
        let permissive = ExpressionTree::build_with_mode("(4*)", BuildMode::Permissive).unwrap();
        assert_eq!(permissive.evaluate(), 0.0);
        assert_eq!(permissive.evaluate_strict(), Err(EvalError::MissingOperand));
        assert!(ExpressionTree::build_with_mode("(4*)", BuildMode::Strict).is_err());
    }

    #[test]
    fn notation_shortcuts_match_traverse() {
        let tree = ExpressionTree::build("(n/(2+m))");
        assert_eq!(tree.prefix(), tree.traverse(Notation::Prefix));
        assert_eq!(printer::render(&tree.postfix()), "n 2 m + / ");
        assert_eq!(printer::render(&tree.infix()), "(n / (2 + m ))");
    }

    #[test]
    fn consumers_can_read_the_tree_concurrently() {
        let tree = ExpressionTree::build("((12*(a-2))/(3+1))").with_variables(Variables::from([(
            "a".to_string(),
            4.0,
        )]));

        let (value, lines) = thread::scope(|scope| {
            let value = scope.spawn(|| tree.evaluate());
            let lines = [Notation::Infix, Notation::Prefix, Notation::Postfix].map(|notation| {
                            let tree = &tree;
                            scope.spawn(move || tree.line(notation))
                        });
            (value.join().unwrap(), lines.map(|handle| handle.join().unwrap()))
        });

        assert_eq!(value, 6.0);
        assert_eq!(lines,
                   ["Infix: ((12 * (a - 2 ))/ (3 + 1 ))",
                    "Prefix: / * 12 - a 2 + 3 1 ",
                    "Postfix: 12 a 2 - * 3 1 + / "]);
    }
}
