//! Helpers for navigating and serializing the parsed HTML tree.
//!
//! The rest of the crate only touches the parser through these functions:
//! tag names, presentation attributes, sibling and child traversal, and
//! markup serialization.

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

use crate::config::PRESENTATION_ATTRIBUTES;

/// A node of the parsed document: element, text, comment, ...
pub type HtmlNode<'a> = NodeRef<'a, Node>;

/// Parse normalized markup into a full document tree.
///
/// Parsing is lenient: unclosed or misplaced tags are repaired the way a
/// browser would, never rejected.
pub fn parse_document(markup: &str) -> Html {
    Html::parse_document(markup)
}

/// Get the tag name of an element node.
///
/// # Returns
/// Lowercase tag name, or `None` for text, comment and other non-element nodes
///
/// # Examples
/// ```
/// use classfeatures::html::{parse_document, find_elements, tag_name};
///
/// let doc = parse_document("<h4>Rage</h4>");
/// let heading = find_elements(&doc, "h4").next().unwrap();
/// assert_eq!(tag_name(*heading), Some("h4"));
/// ```
pub fn tag_name<'a>(node: HtmlNode<'a>) -> Option<&'a str> {
    node.value().as_element().map(|element| element.name())
}

/// Check if a node is an element with the given tag name.
pub fn has_tag(node: HtmlNode<'_>, tag: &str) -> bool {
    tag_name(node) == Some(tag)
}

/// Check if a node carries none of the presentation attributes (`class`, `style`).
///
/// Non-element nodes have no attributes and are therefore plain.
pub fn is_plain(node: HtmlNode<'_>) -> bool {
    match node.value().as_element() {
        Some(element) => PRESENTATION_ATTRIBUTES
            .iter()
            .all(|attr| element.attr(attr).is_none()),
        None => true,
    }
}

/// Find all elements with the given tag name, in document order.
pub fn find_elements<'a>(doc: &'a Html, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> {
    doc.tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |element| element.value().name() == tag)
}

/// Serialize a node back to markup.
///
/// Elements serialize with their tags (outer HTML), text nodes as their
/// text, comments as `<!--...-->`.
pub fn outer_html(node: HtmlNode<'_>) -> String {
    if let Some(element) = ElementRef::wrap(node) {
        return element.html();
    }
    match node.value() {
        Node::Text(text) => String::from(&**text),
        Node::Comment(comment) => format!("<!--{}-->", &**comment),
        _ => String::new(),
    }
}

/// Get the single string carried by a node.
///
/// A text node carries its own text. An element carries a string only if
/// it has exactly one child and that child carries one. Anything else
/// (several children, no children, comments) carries none.
///
/// # Examples
/// ```
/// use classfeatures::html::{parse_document, find_elements, node_string};
///
/// let doc = parse_document("<h4><b>Rage</b></h4><h4><b>A</b>B</h4>");
/// let mut headings = find_elements(&doc, "h4");
/// assert_eq!(node_string(*headings.next().unwrap()), Some("Rage".to_string()));
/// assert_eq!(node_string(*headings.next().unwrap()), None);
/// ```
pub fn node_string(node: HtmlNode<'_>) -> Option<String> {
    match node.value() {
        Node::Text(text) => Some(String::from(&**text)),
        Node::Element(_) => {
            let mut children = node.children();
            match (children.next(), children.next()) {
                (Some(only), None) => node_string(only),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Get the content child at `index` (elements and text runs both count).
pub fn content_child(node: HtmlNode<'_>, index: usize) -> Option<HtmlNode<'_>> {
    node.children().nth(index)
}
