//! Top-level dispatch for HTML to Markdown conversion.
//!
//! Only the direct children of the body are converted. Each child is
//! classified into a [`BlockKind`] by tag name and rendered by exactly one
//! block renderer; nothing below that level is dispatched again.

use crate::converter::block::blockquote::render_blockquote;
use crate::converter::block::heading::{heading_level, render_heading};
use crate::converter::block::paragraph::render_paragraph;
use crate::converter::block::preformatted::render_preformatted;
use crate::converter::block::table::render_table;
use crate::converter::list::render_list;
use crate::converter::media::render_image;
use crate::converter::passthrough::render_passthrough;
use crate::dom::ElementNode;

/// Separator appended after every fragment.
const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Kind of list element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `<ul>`: items rendered with `- ` bullets.
    Unordered,
    /// `<ol>`: items numbered from 1.
    Ordered,
}

/// The closed set of block renderers a top-level element can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `<h1>`..`<h6>` with the heading level.
    Heading(u8),
    /// `<p>`
    Paragraph,
    /// `<ul>` or `<ol>`
    List(ListKind),
    /// `<blockquote>`
    Blockquote,
    /// `<pre>`
    Preformatted,
    /// `<img>`
    Image,
    /// `<table>`
    Table,
    /// Any other element; emitted as raw HTML.
    Fallback,
}

impl BlockKind {
    /// Classify an element by tag name, ignoring ASCII case.
    pub fn classify(tag_name: &str) -> Self {
        let tag_name = tag_name.to_ascii_lowercase();
        if let Some(level) = heading_level(&tag_name) {
            return Self::Heading(level);
        }

        match tag_name.as_str() {
            "p" => Self::Paragraph,
            "ul" => Self::List(ListKind::Unordered),
            "ol" => Self::List(ListKind::Ordered),
            "blockquote" => Self::Blockquote,
            "pre" => Self::Preformatted,
            "img" => Self::Image,
            "table" => Self::Table,
            _ => Self::Fallback,
        }
    }

    /// Render `element` with the renderer for this kind.
    pub fn render<N: ElementNode>(self, element: &N) -> String {
        match self {
            Self::Heading(level) => render_heading(element, level),
            Self::Paragraph => render_paragraph(element),
            Self::List(kind) => render_list(element, kind),
            Self::Blockquote => render_blockquote(element),
            Self::Preformatted => render_preformatted(element),
            Self::Image => render_image(element),
            Self::Table => render_table(element),
            Self::Fallback => render_passthrough(element),
        }
    }
}

/// Markdown produced for a single top-level element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Position of the source element among the body's element children.
    pub index: usize,
    /// Renderer that produced this fragment.
    pub kind: BlockKind,
    /// Rendered Markdown, without the trailing block separator.
    pub markdown: String,
}

/// Render one top-level element at position `index`.
pub fn render_fragment<N: ElementNode>(index: usize, element: &N) -> Fragment {
    let kind = BlockKind::classify(element.tag_name());
    tracing::debug!(index, tag = element.tag_name(), ?kind, "rendering block");

    Fragment {
        index,
        kind,
        markdown: kind.render(element),
    }
}

/// Render every direct child element of `body`, in document order.
pub fn render_fragments<N: ElementNode>(body: &N) -> Vec<Fragment> {
    body.children()
        .iter()
        .enumerate()
        .map(|(index, child)| render_fragment(index, child))
        .collect()
}

/// Join fragments into the final document.
///
/// Fragments are ordered by their source index first, so callers that render
/// out of order get the same output as a sequential pass. Every fragment is
/// followed by one blank line.
pub fn assemble(mut fragments: Vec<Fragment>) -> String {
    fragments.sort_by_key(|fragment| fragment.index);

    let capacity = fragments
        .iter()
        .map(|fragment| fragment.markdown.len() + FRAGMENT_SEPARATOR.len())
        .sum();
    let mut output = String::with_capacity(capacity);
    for fragment in &fragments {
        output.push_str(&fragment.markdown);
        output.push_str(FRAGMENT_SEPARATOR);
    }
    output
}

/// Convert the children of a body element to Markdown.
///
/// This never fails: unknown elements pass through as HTML, and missing
/// attributes or table sections are treated as empty.
pub fn convert<N: ElementNode>(body: &N) -> String {
    assemble(render_fragments(body))
}
