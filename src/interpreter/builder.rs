use tracing::{debug, trace};

use crate::{
    ast::{BinaryOperator, Node},
    error::BuildError,
    interpreter::lexer::{LeafKind, classify},
};

pub type BuildResult<T> = Result<T, BuildError>;

/// How the builder reacts to input outside the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Malformed pieces silently become absent subtrees.
    #[default]
    Permissive,
    /// The first malformed piece aborts the build with a [`BuildError`].
    Strict,
}

/// Builds an expression tree, tolerating malformed input.
///
/// Grammar:
/// ```text
///     expression := digits | letters digits* | "(" expression op expression ")"
///     op         := "+" | "-" | "*" | "/"
/// ```
///
/// Each call trims its input, returns a leaf if the whole text is a literal
/// or variable, strips one outer pair of parentheses and splits at the
/// rightmost operator outside any parentheses. Pieces that cannot be reduced
/// any further come back as `None` and the operator above them simply lacks
/// that child.
///
/// Because the split takes the rightmost operator, the right operand is the
/// shortest possible suffix: an unparenthesized chain `8-4-2` is read as
/// `(8-4)-2`.
///
/// # Parameters
/// - `expression`: Source text of one expression.
///
/// # Returns
/// The root node, or `None` if nothing could be built.
///
/// # Example
/// ```
/// use exprtree::interpreter::builder::build;
///
/// let root = build("((3+4)*2)").unwrap();
/// assert_eq!(root.symbol(), "*");
/// assert_eq!(root.left().unwrap().symbol(), "+");
///
/// assert!(build("").is_none());
/// ```
#[must_use]
pub fn build(expression: &str) -> Option<Node> {
    debug!(expression, "building permissive tree");
    build_node(expression, BuildMode::Permissive).ok().flatten()
}

/// Builds an expression tree, rejecting anything outside the grammar.
///
/// Follows the same steps as [`build`] but checks parenthesis balance before
/// and after stripping the outer pair, rejects empty operands, and rejects
/// text that neither classifies as a leaf nor contains a top-level operator.
///
/// # Errors
/// - `UnbalancedParentheses` if parentheses do not pair up.
/// - `EmptyOperand` if an operator lacks a left or right side.
/// - `UnrecognizedToken` if a piece of text cannot be reduced.
///
/// # Example
/// ```
/// use exprtree::{error::BuildError, interpreter::builder::build_strict};
///
/// assert!(build_strict("(a*(b+1))").is_ok());
/// assert_eq!(build_strict("(1+)"),
///            Err(BuildError::EmptyOperand { expression: "(1+)".to_string() }));
/// ```
pub fn build_strict(expression: &str) -> BuildResult<Node> {
    debug!(expression, "building strict tree");
    match build_node(expression, BuildMode::Strict)? {
        Some(node) => Ok(node),
        None => Err(BuildError::UnrecognizedToken { token: expression.trim().to_string() }),
    }
}

/// Builds a tree in the requested mode.
///
/// # Errors
/// Only in [`BuildMode::Strict`], see [`build_strict`].
pub fn build_with_mode(expression: &str, mode: BuildMode) -> BuildResult<Option<Node>> {
    match mode {
        BuildMode::Permissive => Ok(build(expression)),
        BuildMode::Strict => build_strict(expression).map(Some),
    }
}

fn build_node(expression: &str, mode: BuildMode) -> BuildResult<Option<Node>> {
    let expression = expression.trim();

    match classify(expression) {
        Some(LeafKind::Literal) => return Ok(Some(Node::literal(expression))),
        Some(LeafKind::Variable) => return Ok(Some(Node::variable(expression))),
        None => {},
    }

    let strict = mode == BuildMode::Strict;
    if strict {
        if expression.is_empty() {
            return Err(BuildError::EmptyOperand { expression: String::new() });
        }
        check_balanced(expression, expression)?;
    }

    let inner = strip_outer(expression);
    if strict {
        check_balanced(inner, expression)?;
    }

    let Some((position, op)) = find_split(inner) else {
        trace!(expression, "no top-level operator");
        return if strict {
            Err(BuildError::UnrecognizedToken { token: expression.to_string() })
        } else {
            Ok(None)
        };
    };

    let left = inner[..position].trim();
    let right = inner[position + 1..].trim();
    trace!(left, right, %op, "split");

    if strict && (left.is_empty() || right.is_empty()) {
        return Err(BuildError::EmptyOperand { expression: expression.to_string() });
    }

    let left = build_node(left, mode)?;
    let right = build_node(right, mode)?;

    Ok(Some(Node::operator(op, left, right)))
}

/// Removes exactly one pair of enclosing parentheses, if present.
///
/// The pair is not checked to belong together: `(1)+(2)` becomes `1)+(2`.
fn strip_outer(expression: &str) -> &str {
    expression.strip_prefix('(')
              .and_then(|rest| rest.strip_suffix(')'))
              .unwrap_or(expression)
}

/// Finds the rightmost operator at parenthesis depth zero.
///
/// Scans right to left; `)` opens a level and `(` closes one.
fn find_split(expression: &str) -> Option<(usize, BinaryOperator)> {
    let mut depth = 0_i32;

    for (position, symbol) in expression.char_indices().rev() {
        match symbol {
            ')' => depth += 1,
            '(' => depth -= 1,
            _ if depth == 0 => {
                if let Some(op) = BinaryOperator::from_symbol(symbol) {
                    return Some((position, op));
                }
            },
            _ => {},
        }
    }

    None
}

fn check_balanced(text: &str, expression: &str) -> BuildResult<()> {
    let mut depth = 0_usize;

    for symbol in text.chars() {
        match symbol {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)
                             .ok_or_else(|| unbalanced(expression))?;
            },
            _ => {},
        }
    }

    if depth == 0 { Ok(()) } else { Err(unbalanced(expression)) }
}

fn unbalanced(expression: &str) -> BuildError {
    BuildError::UnbalancedParentheses { expression: expression.to_string() }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn lit(text: &str) -> Option<Node> {
        Some(Node::literal(text))
    }

    fn var(name: &str) -> Option<Node> {
        Some(Node::variable(name))
    }

    fn op(op: BinaryOperator, left: Option<Node>, right: Option<Node>) -> Option<Node> {
        Some(Node::operator(op, left, right))
    }

    #[test]
    fn nested_expression_builds_expected_shape() {
        let expected = op(BinaryOperator::Mul,
                          op(BinaryOperator::Add, lit("3"), lit("4")),
                          lit("2"));
        assert_eq!(build("((3+4)*2)"), expected);
    }

    #[test]
    fn whitespace_is_ignored_around_every_piece() {
        assert_eq!(build("  ( ( 3 + x1 ) * 2 )  "), build("((3+x1)*2)"));
    }

    #[test]
    fn rightmost_operator_is_the_split_point() {
        let expected = op(BinaryOperator::Sub,
                          op(BinaryOperator::Sub, lit("1"), lit("2")),
                          lit("3"));
        assert_eq!(build("((1-2)-3)"), expected);
        assert_eq!(build("(1-2-3)"), expected);
    }

    #[test]
    fn parenthesized_right_operand_keeps_its_grouping() {
        let expected = op(BinaryOperator::Div,
                          var("a"),
                          op(BinaryOperator::Add, var("b"), lit("1")));
        assert_eq!(build("(a/(b+1))"), expected);
    }

    #[test]
    fn bare_leaf_is_not_reclassified_after_stripping() {
        assert_eq!(build("(5)"), None);
        assert_eq!(build("((1+2))"), None);
    }

    #[test]
    fn missing_operands_become_absent_children() {
        assert_eq!(build("(-3)"), op(BinaryOperator::Sub, None, lit("3")));
        assert_eq!(build("(4*)"), op(BinaryOperator::Mul, lit("4"), None));
        assert_eq!(build("(3.5+1)"), op(BinaryOperator::Add, None, lit("1")));
    }

    #[test]
    fn lone_parenthesis_is_not_stripped() {
        assert_eq!(build("("), None);
        assert_eq!(build(")"), None);
        assert_eq!(build("()"), None);
    }

    #[test]
    fn strict_accepts_well_formed_input() {
        assert_eq!(build_strict("((3+4)*2)").ok(), build("((3+4)*2)"));
        assert_eq!(build_strict("7"), Ok(Node::literal("7")));
    }

    #[rstest]
    #[case::unclosed("((1+2)", BuildError::UnbalancedParentheses { expression: "((1+2)".to_string() })]
    #[case::stray_close("(1+2))", BuildError::UnbalancedParentheses { expression: "(1+2))".to_string() })]
    #[case::mismatched_outer_pair("(1+2)*(3+4)",
                                  BuildError::UnbalancedParentheses { expression: "(1+2)*(3+4)".to_string() })]
    #[case::empty_left("(-3)", BuildError::EmptyOperand { expression: "(-3)".to_string() })]
    #[case::empty_right("(3*)", BuildError::EmptyOperand { expression: "(3*)".to_string() })]
    #[case::empty_input("   ", BuildError::EmptyOperand { expression: String::new() })]
    #[case::decimal("(3.5+1)", BuildError::UnrecognizedToken { token: "3.5".to_string() })]
    #[case::redundant_parens("(5)", BuildError::UnrecognizedToken { token: "(5)".to_string() })]
    #[case::underscore("a_b", BuildError::UnrecognizedToken { token: "a_b".to_string() })]
    fn strict_reports_malformed_input(#[case] input: &str, #[case] expected: BuildError) {
        assert_eq!(build_strict(input), Err(expected));
    }

    #[test]
    fn strict_mode_never_returns_partial_trees() {
        assert!(build_with_mode("((1+2)*(3-))", BuildMode::Strict).is_err());
        assert!(matches!(build_with_mode("((1+2)*(3-))", BuildMode::Permissive), Ok(Some(_))));
    }
}
