//! Text content derivation for parsed elements.
//!
//! Two views are produced: a flattened view where whitespace runs collapse to
//! single spaces (used by most renderers), and a raw view that keeps every
//! character of every descendant text node (used for preformatted blocks).

use markup5ever_rcdom::{Handle, NodeData};

/// Elements whose text keeps its original whitespace inside the flattened view.
const PRESERVE_WHITESPACE_TAGS: &[&str] = &["pre", "textarea", "listing", "plaintext"];

/// Elements whose contents never count as text.
const NON_TEXT_TAGS: &[&str] = &["script", "style"];

/// HTML whitespace as defined by the tokenizer.
pub(crate) fn is_html_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0C' | '\r')
}

/// Check if a lower-cased tag name is a block-level element for text joining purposes.
pub(crate) fn is_block_level_name(tag_name: &str) -> bool {
    matches!(
        tag_name,
        "address"
            | "article"
            | "aside"
            | "blockquote"
            | "body"
            | "caption"
            | "center"
            | "col"
            | "colgroup"
            | "dd"
            | "details"
            | "dir"
            | "div"
            | "dl"
            | "dt"
            | "fieldset"
            | "figcaption"
            | "figure"
            | "footer"
            | "form"
            | "frameset"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "header"
            | "hgroup"
            | "hr"
            | "html"
            | "li"
            | "listing"
            | "main"
            | "menu"
            | "nav"
            | "ol"
            | "p"
            | "plaintext"
            | "pre"
            | "section"
            | "table"
            | "tbody"
            | "td"
            | "tfoot"
            | "th"
            | "thead"
            | "tr"
            | "ul"
    )
}

/// Flattened text of `handle` and all its descendants.
///
/// Whitespace runs collapse to one space, block boundaries and `<br>` become a
/// single space, and the result is trimmed. Text under `pre`-like elements is
/// kept verbatim, so the result may still contain line breaks.
pub(crate) fn normalized_text(handle: &Handle) -> String {
    let preserve = element_name(handle).is_some_and(|name| PRESERVE_WHITESPACE_TAGS.contains(&name));

    let mut accum = String::new();
    for child in handle.children.borrow().iter() {
        collect_normalized(child, &mut accum, preserve);
    }

    accum.trim_matches(is_html_whitespace).to_string()
}

/// Raw text of `handle` and all its descendants, with `<br>` as a line feed.
pub(crate) fn raw_text(handle: &Handle) -> String {
    let mut accum = String::new();
    collect_raw(handle, &mut accum);
    accum
}

fn element_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

fn collect_normalized(handle: &Handle, accum: &mut String, preserve: bool) {
    match &handle.data {
        NodeData::Text { contents } => {
            let contents = contents.borrow();
            if preserve {
                accum.push_str(&contents);
            } else {
                append_collapsed(accum, &contents);
            }
        }
        NodeData::Element { name, .. } => {
            let tag_name = name.local.as_ref();
            if NON_TEXT_TAGS.contains(&tag_name) {
                return;
            }

            if (tag_name == "br" || is_block_level_name(tag_name)) && !accum.is_empty() && !accum.ends_with(' ') {
                accum.push(' ');
            }

            let preserve = preserve || PRESERVE_WHITESPACE_TAGS.contains(&tag_name);
            for child in handle.children.borrow().iter() {
                collect_normalized(child, accum, preserve);
            }

            // Text following a closed block must not run into it.
            if is_block_level_name(tag_name) && !accum.is_empty() && !accum.ends_with(' ') {
                accum.push(' ');
            }
        }
        _ => {}
    }
}

fn append_collapsed(accum: &mut String, text: &str) {
    let mut last_was_space = accum.ends_with(' ');
    for ch in text.chars() {
        // A non-breaking space collapses like any other space.
        if is_html_whitespace(ch) || ch == '\u{a0}' {
            if !last_was_space {
                accum.push(' ');
                last_was_space = true;
            }
        } else {
            accum.push(ch);
            last_was_space = false;
        }
    }
}

fn collect_raw(handle: &Handle, accum: &mut String) {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => accum.push_str(&contents.borrow()),
            NodeData::Element { name, .. } if name.local.as_ref() == "br" => accum.push('\n'),
            NodeData::Element { .. } => collect_raw(child, accum),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::test_support::first_block;

    #[test]
    fn test_collapses_whitespace_runs() {
        let element = first_block("<p>  Hello \n\t  world  </p>");
        assert_eq!(normalized_text(element.handle()), "Hello world");
    }

    #[test]
    fn test_strips_inline_tags() {
        let element = first_block("<p>Some <strong>bold</strong> and <a href=\"#\">linked</a> text</p>");
        assert_eq!(normalized_text(element.handle()), "Some bold and linked text");
    }

    #[test]
    fn test_block_boundaries_become_spaces() {
        let element = first_block("<div><p>one</p><p>two</p>three<br>four</div>");
        assert_eq!(normalized_text(element.handle()), "one two three four");
    }

    #[test]
    fn test_preformatted_descendant_keeps_line_breaks() {
        let element = first_block("<blockquote>quote<pre>a\n  b</pre></blockquote>");
        assert_eq!(normalized_text(element.handle()), "quote a\n  b");
    }

    #[test]
    fn test_script_contents_are_not_text() {
        let element = first_block("<div>visible<script>var x = 1;</script></div>");
        assert_eq!(normalized_text(element.handle()), "visible");
    }

    #[test]
    fn test_raw_text_keeps_everything() {
        let element = first_block("<pre><code>fn main() {\n    run();\n}</code></pre>");
        assert_eq!(raw_text(element.handle()), "fn main() {\n    run();\n}");
    }

    #[test]
    fn test_raw_text_br_is_line_feed() {
        let element = first_block("<pre>a<br>b</pre>");
        assert_eq!(raw_text(element.handle()), "a\nb");
    }

    #[test]
    fn test_non_breaking_space_collapses() {
        let element = first_block("<p>a&nbsp;b&nbsp; &nbsp;c&nbsp;</p>");
        assert_eq!(normalized_text(element.handle()), "a b c");
    }

    #[test]
    fn test_non_breaking_space_kept_in_raw_text() {
        let element = first_block("<pre>a&nbsp;b</pre>");
        assert_eq!(raw_text(element.handle()), "a\u{a0}b");
    }
}
