//! Block-level HTML to Markdown conversion.
//!
//! `blockmark` converts the direct children of an HTML `<body>` into Markdown,
//! one block at a time. Each child is routed by tag name to a fixed renderer:
//!
//! | Element | Output |
//! |---|---|
//! | `h1`..`h6` | `#`..`######` followed by the heading text |
//! | `p` | the paragraph text |
//! | `ul`, `ol` | one `- ` or `N. ` line per `li` found anywhere inside |
//! | `blockquote` | `> ` followed by the quote text |
//! | `pre` | a fenced code block with the raw text |
//! | `img` | `![alt](src)`, with `Image` as the default alt |
//! | `table` | a pipe table per `thead`/`tbody` section |
//! | anything else | the element's HTML, unchanged |
//!
//! Inline formatting is reduced to plain text and nothing below the first
//! level is dispatched again; a `<div>` wrapping paragraphs is emitted as HTML.
//!
//! ```
//! let markdown = blockmark::convert_html("<h1>Title</h1><p>Some <b>text</b></p>").unwrap();
//! assert_eq!(markdown, "# Title\n\nSome text\n\n");
//! ```
//!
//! The engine itself works on any [`ElementNode`], so a different parser can be
//! plugged in by implementing that trait and calling [`convert`].

pub mod converter;
pub mod dom;
pub mod error;
pub mod options;
mod text;

pub use converter::{BlockKind, Fragment, ListKind, assemble, convert, render_fragment, render_fragments};
pub use dom::{Document, Element, ElementNode};
pub use error::{ConversionError, Result};
pub use options::ConversionOptions;

/// Parse an HTML document and convert its body to Markdown.
///
/// # Errors
///
/// Returns [`ConversionError::MissingBody`] if the document has neither a
/// `body` nor a `frameset` element.
pub fn convert_html(html: &str) -> Result<String> {
    let document = Document::parse(html);
    let Some(body) = document.body() else {
        tracing::warn!("document has no body element");
        return Err(ConversionError::MissingBody);
    };
    Ok(convert(&body))
}

/// Decode raw bytes, parse them as HTML and convert the body to Markdown.
///
/// # Errors
///
/// Returns [`ConversionError::UnknownEncoding`] for an unrecognised encoding
/// label, or any error from [`convert_html`].
pub fn convert_bytes(bytes: &[u8], options: &ConversionOptions) -> Result<String> {
    let html = options.decode(bytes)?;
    convert_html(&html)
}
