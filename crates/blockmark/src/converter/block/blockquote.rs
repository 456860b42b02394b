//! Blockquote element handling.

use crate::dom::ElementNode;

const QUOTE_PREFIX: &str = "> ";

/// Quote the flattened text, continuing the `> ` prefix across any line
/// breaks that survive flattening (text from a nested `<pre>`, for example).
pub(crate) fn render_blockquote<N: ElementNode>(element: &N) -> String {
    let text = element.text();
    let mut output = String::with_capacity(QUOTE_PREFIX.len() + text.len());
    output.push_str(QUOTE_PREFIX);
    output.push_str(&text.replace('\n', "\n> "));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::test_support::first_block;

    #[test]
    fn test_single_line_quote() {
        let quote = first_block("<blockquote>Quoted <b>words</b></blockquote>");
        assert_eq!(render_blockquote(&quote), "> Quoted words");
    }

    #[test]
    fn test_nested_paragraphs_are_flattened() {
        let quote = first_block("<blockquote>\n  <p>First</p>\n  <p>Second</p>\n</blockquote>");
        assert_eq!(render_blockquote(&quote), "> First Second");
    }

    #[test]
    fn test_line_breaks_from_preformatted_text_stay_quoted() {
        let quote = first_block("<blockquote><pre>one\ntwo\nthree</pre></blockquote>");
        assert_eq!(render_blockquote(&quote), "> one\n> two\n> three");
    }

    #[test]
    fn test_empty_quote() {
        assert_eq!(render_blockquote(&first_block("<blockquote></blockquote>")), "> ");
    }
}
