//! Preformatted element handling.

use crate::dom::ElementNode;

const FENCE: &str = "```";

/// Fenced code block around the raw text of the element. No info string is emitted.
pub(crate) fn render_preformatted<N: ElementNode>(element: &N) -> String {
    let code = element.whole_text();
    let mut output = String::with_capacity(code.len() + 2 * FENCE.len() + 2);
    output.push_str(FENCE);
    output.push('\n');
    output.push_str(&code);
    output.push('\n');
    output.push_str(FENCE);
    output
}
