//! Table element handling.
//!
//! `thead` and `tbody` are rendered independently, each as its own pipe
//! table. Every rendered section gets a `|---` separator row after its data
//! rows, sized from the first row of that section. A body-only table therefore
//! still gets a separator, and Markdown renderers will treat its rows as a
//! header.

use std::borrow::Cow;

use crate::dom::ElementNode;

/// Sections rendered, in output order.
const TABLE_SECTIONS: [&str; 2] = ["thead", "tbody"];

/// Render the first `thead` and the first `tbody` found under `table`.
///
/// Each section is followed by an extra `\n`. A table with neither section
/// renders as an empty string.
pub(crate) fn render_table<N: ElementNode>(table: &N) -> String {
    let mut output = String::new();
    for section_name in TABLE_SECTIONS {
        if let Some(section) = table.select_first(section_name) {
            output.push_str(&render_table_section(&section));
            output.push('\n');
        }
    }
    output
}

/// Render every `tr` under `section` followed by a single separator row.
pub(crate) fn render_table_section<N: ElementNode>(section: &N) -> String {
    let rows = section.select(&["tr"]);
    tracing::trace!(section = section.tag_name(), rows = rows.len(), "rendering table section");

    let mut output = String::new();
    let mut separator_width = None;
    for row in &rows {
        let cells = row.select(&["td", "th"]);
        if separator_width.is_none() {
            separator_width = Some(cells.len());
        }

        for cell in &cells {
            output.push_str("| ");
            output.push_str(&escape_cell_pipes(&cell.text()));
            output.push(' ');
        }
        output.push_str("|\n");
    }

    if let Some(width) = separator_width {
        for _ in 0..width {
            output.push_str("|---");
        }
        output.push_str("|\n");
    }

    output
}

/// Replace `|` with its numeric character reference so cells cannot split.
fn escape_cell_pipes(text: &str) -> Cow<'_, str> {
    if text.contains('|') {
        Cow::Owned(text.replace('|', "&#124;"))
    } else {
        Cow::Borrowed(text)
    }
}
