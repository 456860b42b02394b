//! html5ever-backed implementation of [`ElementNode`].

use std::fmt;

use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use super::ElementNode;
use crate::text::{normalized_text, raw_text};

/// A fully parsed HTML document.
///
/// Parsing never fails: html5ever recovers from malformed markup the way a
/// browser does and always synthesises `html`, `head` and `body` elements for
/// non-frameset documents.
pub struct Document {
    root: Handle,
}

impl Document {
    /// Parse an HTML string into a document.
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        Self { root: dom.document }
    }

    /// The `body` element, or the `frameset` element of a frameset document.
    pub fn body(&self) -> Option<Element> {
        let document = self.root.children.borrow();
        let html = document.iter().find(|node| has_name(node, "html"))?;
        let children = html.children.borrow();
        children
            .iter()
            .find(|node| has_name(node, "body"))
            .or_else(|| children.iter().find(|node| has_name(node, "frameset")))
            .map(|node| Element::new(node.clone(), self.root.clone()))
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document").finish_non_exhaustive()
    }
}

/// An element node inside a parsed [`Document`].
///
/// Holds the document root as well: dropping the last reference to an rcdom
/// root detaches every descendant from its children.
#[derive(Clone)]
pub struct Element {
    node: Handle,
    root: Handle,
}

impl Element {
    fn new(node: Handle, root: Handle) -> Self {
        Self { node, root }
    }

    fn related(&self, node: Handle) -> Self {
        Self::new(node, self.root.clone())
    }

    #[cfg(test)]
    pub(crate) fn handle(&self) -> &Handle {
        &self.node
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element").field(&self.tag_name()).finish()
    }
}

fn has_name(handle: &Handle, tag_name: &str) -> bool {
    match &handle.data {
        NodeData::Element { name, .. } => name.local.as_ref().eq_ignore_ascii_case(tag_name),
        _ => false,
    }
}

fn collect_matching(handle: &Handle, tag_names: &[&str], results: &mut Vec<Handle>) {
    for child in handle.children.borrow().iter() {
        if tag_names.iter().any(|tag_name| has_name(child, tag_name)) {
            results.push(child.clone());
        }
        collect_matching(child, tag_names, results);
    }
}

fn find_first_matching(handle: &Handle, tag_name: &str) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if has_name(child, tag_name) {
            return Some(child.clone());
        }
        if let Some(found) = find_first_matching(child, tag_name) {
            return Some(found);
        }
    }
    None
}

impl ElementNode for Element {
    fn tag_name(&self) -> &str {
        match &self.node.data {
            NodeData::Element { name, .. } => name.local.as_ref(),
            _ => "",
        }
    }

    fn attr(&self, name: &str) -> String {
        match &self.node.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|attr| attr.name.local.as_ref().eq_ignore_ascii_case(name))
                .map(|attr| attr.value.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn children(&self) -> Vec<Self> {
        self.node
            .children
            .borrow()
            .iter()
            .filter(|child| matches!(child.data, NodeData::Element { .. }))
            .map(|child| self.related(child.clone()))
            .collect()
    }

    fn select(&self, tag_names: &[&str]) -> Vec<Self> {
        let mut matches = Vec::new();
        collect_matching(&self.node, tag_names, &mut matches);
        matches.into_iter().map(|node| self.related(node)).collect()
    }

    fn select_first(&self, tag_name: &str) -> Option<Self> {
        find_first_matching(&self.node, tag_name).map(|node| self.related(node))
    }

    fn text(&self) -> String {
        normalized_text(&self.node)
    }

    fn whole_text(&self) -> String {
        raw_text(&self.node)
    }

    fn outer_html(&self) -> String {
        let mut buf = Vec::new();
        let serializable = SerializableHandle::from(self.node.clone());
        let opts = SerializeOpts {
            traversal_scope: TraversalScope::IncludeNode,
            ..Default::default()
        };
        serialize(&mut buf, &serializable, opts)
            .ok()
            .and_then(|()| String::from_utf8(buf).ok())
            .unwrap_or_default()
    }
}
