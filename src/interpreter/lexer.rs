use logos::Logos;

/// The two kinds of leaf the grammar recognizes.
///
/// Each variant carries the pattern a whole leaf must match. A leaf is the
/// text left over once the builder can split no further.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LeafKind {
    /// A run of decimal digits, such as `42`.
    #[regex(r"[0-9]+")]
    Literal,
    /// Letters optionally followed by digits, such as `x` or `rate2`.
    #[regex(r"[a-zA-Z]+[0-9]*")]
    Variable,
}

/// Classifies `text` as a literal or a variable.
///
/// The text must consist of exactly one token: `12ab`, `a b` or `3.5` match
/// neither pattern and yield `None`.
///
/// # Parameters
/// - `text`: Already trimmed candidate leaf.
///
/// # Returns
/// - `Some(LeafKind)`: The kind of the leaf when one token spans all of
///   `text`.
/// - `None`: Otherwise, including for the empty string.
///
/// # Example
/// ```
/// use exprtree::interpreter::lexer::{LeafKind, classify};
///
/// assert_eq!(classify("314"), Some(LeafKind::Literal));
/// assert_eq!(classify("rate2"), Some(LeafKind::Variable));
/// assert_eq!(classify("2rate"), None);
/// ```
#[must_use]
pub fn classify(text: &str) -> Option<LeafKind> {
    let mut lexer = LeafKind::lexer(text);
    let kind = lexer.next()?.ok()?;

    if lexer.span().end == text.len() {
        Some(kind)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_literals() {
        assert_eq!(classify("0"), Some(LeafKind::Literal));
        assert_eq!(classify("0042"), Some(LeafKind::Literal));
    }

    #[test]
    fn letters_then_digits_are_variables() {
        assert_eq!(classify("a"), Some(LeafKind::Variable));
        assert_eq!(classify("Total"), Some(LeafKind::Variable));
        assert_eq!(classify("x10"), Some(LeafKind::Variable));
    }

    #[test]
    fn mixed_or_foreign_text_is_rejected() {
        for text in ["", "x1y", "1x", "3.5", "a_b", "a b", "(a)", "+", "é"] {
            assert_eq!(classify(text), None, "{text:?} should not classify");
        }
    }
}
