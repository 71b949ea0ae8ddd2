use crate::ast::Node;

/// The order in which a traversal emits a node relative to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Node, then left subtree, then right subtree.
    Prefix,
    /// Left subtree, then right subtree, then node.
    Postfix,
    /// Left subtree, node, right subtree; every node with a child is wrapped
    /// in parentheses.
    Infix,
}

impl Notation {
    /// The label that precedes a printed traversal, e.g. `"Prefix: "`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prefix => "Prefix: ",
            Self::Postfix => "Postfix: ",
            Self::Infix => "Infix: ",
        }
    }
}

/// One piece of a printed traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// `(`
    Open,
    /// A node's value.
    Value(String),
    /// `)`
    Close,
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "("),
            Self::Value(value) => write!(f, "{value} "),
            Self::Close => write!(f, ")"),
        }
    }
}

/// Walks the tree depth-first and collects what the traversal prints.
///
/// Every node is visited exactly once. Absent nodes emit nothing.
///
/// # Example
/// ```
/// use exprtree::interpreter::{
///     builder::build,
///     printer::{Notation, traverse, values},
/// };
///
/// let tree = build("((3+4)*2)");
/// let prefix = traverse(tree.as_ref(), Notation::Prefix);
///
/// assert_eq!(values(&prefix), ["*", "+", "3", "4", "2"]);
/// ```
#[must_use]
pub fn traverse(node: Option<&Node>, notation: Notation) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    visit(node, notation, &mut fragments);
    fragments
}

fn visit(node: Option<&Node>, notation: Notation, out: &mut Vec<Fragment>) {
    let Some(node) = node else {
        return;
    };

    match notation {
        Notation::Prefix => {
            out.push(Fragment::Value(node.symbol()));
            visit(node.left(), notation, out);
            visit(node.right(), notation, out);
        },
        Notation::Postfix => {
            visit(node.left(), notation, out);
            visit(node.right(), notation, out);
            out.push(Fragment::Value(node.symbol()));
        },
        Notation::Infix => {
            let wrap = node.has_children();
            if wrap {
                out.push(Fragment::Open);
            }
            visit(node.left(), notation, out);
            out.push(Fragment::Value(node.symbol()));
            visit(node.right(), notation, out);
            if wrap {
                out.push(Fragment::Close);
            }
        },
    }
}

/// Renders fragments as printed text.
///
/// Each value is followed by a single space and parentheses are written bare,
/// so an infix rendering reads `((3 + 4 )* 2 )`.
#[must_use]
pub fn render(fragments: &[Fragment]) -> String {
    fragments.iter().map(ToString::to_string).collect()
}

/// Returns just the node values of a traversal, in order.
#[must_use]
pub fn values(fragments: &[Fragment]) -> Vec<&str> {
    fragments.iter()
             .filter_map(|fragment| match fragment {
                 Fragment::Value(value) => Some(value.as_str()),
                 Fragment::Open | Fragment::Close => None,
             })
             .collect()
}
