//! HTML to Markdown conversion.
//!
//! The dispatcher in [`main`] routes each top-level element to one of the
//! block renderers below.

pub(crate) mod block;
pub(crate) mod list;
pub mod main;
pub(crate) mod media;
pub(crate) mod passthrough;

pub use main::{BlockKind, Fragment, ListKind, assemble, convert, render_fragment, render_fragments};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::dom::{Document, Element, ElementNode};

    /// Parse `html` and return its body element.
    pub(crate) fn parse_body(html: &str) -> Element {
        Document::parse(html).body().expect("document has a body")
    }

    /// Parse `html` and return the first element child of its body.
    pub(crate) fn first_block(html: &str) -> Element {
        parse_body(html)
            .children()
            .into_iter()
            .next()
            .expect("body has an element child")
    }
}
