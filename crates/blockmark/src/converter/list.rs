//! List element (ul, ol) handling.
//!
//! Items are gathered with a subtree search, so nested lists are flattened
//! into the outer list and share its bullet or numbering. An item's text
//! includes the text of any list nested inside it.

use crate::converter::main::ListKind;
use crate::dom::ElementNode;

/// Render every `<li>` under `element`, one per line, each line terminated by `\n`.
pub(crate) fn render_list<N: ElementNode>(element: &N, kind: ListKind) -> String {
    let items = element.select(&["li"]);
    tracing::trace!(?kind, items = items.len(), "rendering list");

    let mut output = String::new();
    for (index, item) in items.iter().enumerate() {
        match kind {
            ListKind::Unordered => output.push_str("- "),
            ListKind::Ordered => {
                output.push_str(&(index + 1).to_string());
                output.push_str(". ");
            }
        }
        output.push_str(&item.text());
        output.push('\n');
    }
    output
}
