//! Image element handling.

use crate::dom::ElementNode;

/// Alt text used when an image has none.
const DEFAULT_ALT: &str = "Image";

/// Markdown image from the `alt` and `src` attributes.
///
/// Attribute values are embedded as-is; brackets and parentheses are not escaped.
pub(crate) fn render_image<N: ElementNode>(element: &N) -> String {
    let alt = element.attr("alt");
    let src = element.attr("src");
    let alt = if alt.is_empty() { DEFAULT_ALT } else { alt.as_str() };
    format!("![{alt}]({src})")
}
