//! Paragraph element handling.

use crate::dom::ElementNode;

/// A paragraph is its flattened text with no prefix.
pub(crate) fn render_paragraph<N: ElementNode>(element: &N) -> String {
    element.text()
}
