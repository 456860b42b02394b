//! Element navigation used by the converter.
//!
//! The converter never touches a concrete DOM. It only needs the handful of
//! read-only queries in [`ElementNode`], which [`Element`] implements on top of
//! an html5ever tree.

mod element;

pub use element::{Document, Element};

/// Read-only view of a parsed HTML element.
///
/// Implementations must be cheap to clone; renderers clone nodes freely while
/// walking.
pub trait ElementNode: Clone {
    /// Tag name as reported by the parser.
    fn tag_name(&self) -> &str;

    /// Attribute value by name, or an empty string when absent.
    fn attr(&self, name: &str) -> String;

    /// Direct child elements in document order. Text and comment nodes are skipped.
    fn children(&self) -> Vec<Self>;

    /// All descendant elements whose tag name matches any of `tag_names`.
    ///
    /// Matching is case-insensitive and the search descends the whole subtree
    /// in document order. The receiver itself is never part of the result.
    fn select(&self, tag_names: &[&str]) -> Vec<Self>;

    /// First descendant element named `tag_name`, if any.
    fn select_first(&self, tag_name: &str) -> Option<Self> {
        self.select(&[tag_name]).into_iter().next()
    }

    /// Flattened text content: tags stripped, whitespace collapsed, trimmed.
    fn text(&self) -> String;

    /// Raw text content with original whitespace and line breaks.
    fn whole_text(&self) -> String;

    /// The element and its subtree serialized back to markup.
    fn outer_html(&self) -> String;
}
