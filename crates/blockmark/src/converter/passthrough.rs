//! Elements without a Markdown rendering.

use crate::dom::ElementNode;

/// Emit the element's own markup unchanged, subtree included.
pub(crate) fn render_passthrough<N: ElementNode>(element: &N) -> String {
    tracing::debug!(tag = element.tag_name(), "passing element through as HTML");
    element.outer_html()
}
