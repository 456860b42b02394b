//! Heading element (h1-h6) handling.

use crate::dom::ElementNode;

/// Heading level for a lower-cased `h1`..`h6` tag name.
pub(crate) fn heading_level(tag_name: &str) -> Option<u8> {
    match tag_name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// ATX heading: `level` hashes, a space, then the flattened heading text.
pub(crate) fn render_heading<N: ElementNode>(element: &N, level: u8) -> String {
    let text = element.text();
    let mut output = String::with_capacity(usize::from(level) + 1 + text.len());
    for _ in 0..level {
        output.push('#');
    }
    output.push(' ');
    output.push_str(&text);
    output
}
