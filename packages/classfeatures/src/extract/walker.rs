//! Feature boundary walker.
//!
//! Starting at the first feature heading, the walker scans the heading's
//! following siblings and accumulates their markup into a fragment until it
//! meets a node that ends the feature. The fragment is then finalized and
//! scanning resumes after that boundary node. A section heading stops the
//! walk.
//!
//! ```text
//! <h4>Rage</h4>          start
//! <p>...</p>             content    -> appended
//! <table>...</table>     excluded   -> skipped
//! <div>...</div>         container  -> appended if the start node is plain
//! <h4>Uncanny Dodge</h4> boundary   -> flush, restart here
//! <p>...</p>             content    -> appended
//! <h2>Archetypes</h2>    section    -> flush, stop
//! ```

use regex::Regex;
use std::sync::LazyLock;

use crate::annotate::flush_fragment;
use crate::config::{CONTAINER_TAG, CONTENT_TAGS, EXCLUDED_TAGS};
use crate::html::{has_tag, is_plain, outer_html, tag_name, HtmlNode};

/// Anchor open and close tags. The anchor's text is kept.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ANCHOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a(?:\s[^>]*)?>|</a>").expect("valid regex"));

/// Styled container blocks that slipped into a fragment.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static STYLED_DIV_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<div class=.*?>.*</div>").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static REPEATED_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("valid regex"));

/// How a sibling affects the fragment being accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingKind {
    /// Paragraph, list, list item or anchor: appended.
    Content,
    /// Container under a plain start node: appended.
    Container,
    /// Table: skipped, the fragment continues.
    Excluded,
    /// Anything else, including text nodes: ends the fragment.
    Boundary,
}

/// Classify a sibling relative to the node the current fragment started at.
pub fn classify_sibling(sibling: HtmlNode<'_>, start_is_plain: bool) -> SiblingKind {
    match tag_name(sibling) {
        Some(tag) if CONTENT_TAGS.contains(&tag) => SiblingKind::Content,
        Some(CONTAINER_TAG) if start_is_plain => SiblingKind::Container,
        Some(tag) if EXCLUDED_TAGS.contains(&tag) => SiblingKind::Excluded,
        _ => SiblingKind::Boundary,
    }
}

/// Replace anchor tags with a space.
pub fn strip_anchors(markup: &str) -> String {
    ANCHOR_TAG.replace_all(markup, " ").into_owned()
}

/// Serialize a content sibling.
///
/// A space is inserted after each quoted attribute value that closes a tag,
/// then anchors are stripped.
fn serialize_content(node: HtmlNode<'_>) -> String {
    strip_anchors(&outer_html(node).replace("\">", "\"> "))
}

fn serialize_container(node: HtmlNode<'_>) -> String {
    strip_anchors(&outer_html(node))
}

/// Clean an accumulated fragment before it is finalized.
///
/// Drops styled container blocks, collapses runs of spaces, removes spaces
/// before periods and commas, and writes the multiplication sign as `x`.
///
/// # Examples
/// ```
/// use classfeatures::extract::clean_fragment;
///
/// assert_eq!(clean_fragment("<p>a  ,  b .</p>"), "<p>a, b.</p>");
/// assert_eq!(clean_fragment("<p>3×3</p>"), "<p>3x3</p>");
/// ```
pub fn clean_fragment(raw: &str) -> String {
    let text = STYLED_DIV_BLOCK.replace_all(raw, "");
    let text = REPEATED_SPACES.replace_all(&text, " ");
    text.replace(" .", ".")
        .replace(" ,", ",")
        .replace('\u{00D7}', "x")
}

/// Walks sibling sequences and cuts them into feature fragments.
#[derive(Debug, Clone)]
pub struct FeatureWalker {
    section_tag: String,
}

impl FeatureWalker {
    /// Create a walker that stops at the given section heading tag.
    #[must_use]
    pub fn new(section_tag: impl Into<String>) -> Self {
        Self {
            section_tag: section_tag.into(),
        }
    }

    /// Walk from the first feature heading and return finalized fragments.
    ///
    /// One fragment is produced per boundary met, in document order. The
    /// walk ends at the first section heading, or when the siblings run out;
    /// in the latter case a non-empty pending fragment is still emitted.
    ///
    /// A container met while the current start node is not plain ends the
    /// fragment and is itself dropped: the next fragment starts after it.
    pub fn walk(&self, first_heading: HtmlNode<'_>) -> Vec<String> {
        let mut fragments = Vec::new();
        let mut cursor = first_heading;

        loop {
            let start_is_plain = is_plain(cursor);
            let mut buffer = String::new();
            let mut boundary = None;

            for sibling in cursor.next_siblings() {
                match classify_sibling(sibling, start_is_plain) {
                    SiblingKind::Content => buffer.push_str(&serialize_content(sibling)),
                    SiblingKind::Container => buffer.push_str(&serialize_container(sibling)),
                    SiblingKind::Excluded => {}
                    SiblingKind::Boundary => {
                        boundary = Some(sibling);
                        break;
                    }
                }
            }

            let Some(node) = boundary else {
                if !buffer.is_empty() {
                    flush_fragment(&clean_fragment(&buffer), &mut fragments);
                }
                tracing::debug!(
                    fragments = fragments.len(),
                    "Reached end of siblings without a section heading"
                );
                break;
            };

            flush_fragment(&clean_fragment(&buffer), &mut fragments);
            tracing::debug!(
                boundary = tag_name(node).unwrap_or("#text"),
                length = buffer.len(),
                "Closed feature fragment"
            );

            if has_tag(node, &self.section_tag) {
                break;
            }
            cursor = node;
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::find_feature_headings;
    use crate::html::parse_document;
    use pretty_assertions::assert_eq;

    fn walk(markup: &str) -> Vec<String> {
        let doc = parse_document(markup);
        let headings = find_feature_headings(&doc, "h4");
        FeatureWalker::new("h2").walk(*headings[0])
    }

    #[test]
    fn test_one_fragment_per_heading() {
        let fragments = walk(concat!(
            "<h4><a></a>Rage (Ex)</h4><p>One.</p>",
            "<h4><a></a>Uncanny Dodge (Ex)</h4><p>Two.</p><ul><li>x</li></ul>",
            "<h4><a></a>Trap Sense (Ex)</h4><p>Three.</p>",
            "<h2>Archetypes</h2><p>ignored</p>",
        ));
        assert_eq!(
            fragments,
            vec![
                "<p>One.</p>",
                "<p>Two.</p><ul><li>x</li></ul>",
                "<p>Three.</p>",
            ]
        );
    }

    #[test]
    fn test_table_contributes_nothing() {
        let fragments = walk(concat!(
            "<h4><a></a>Rage (Ex)</h4><p>Before.</p>",
            "<table><tr><td>Level</td></tr></table>",
            "<p>After.</p><h2>End</h2>",
        ));
        assert_eq!(fragments, vec!["<p>Before.</p><p>After.</p>"]);
    }

    #[test]
    fn test_anchors_stripped_text_kept() {
        let fragments =
            walk(r#"<h4><a></a>Rage (Ex)</h4><p>See <a href="/feats">feats</a>.</p><h2>End</h2>"#);
        assert_eq!(fragments, vec!["<p>See feats.</p>"]);
    }

    #[test]
    fn test_space_after_quoted_attribute() {
        let fragments = walk(r#"<h4><a></a>Rage (Ex)</h4><p class="body">Text</p><h2>End</h2>"#);
        assert_eq!(fragments, vec![r#"<p class=\"body\"> Text</p>"#]);
    }

    #[test]
    fn test_container_under_plain_heading_is_content() {
        let fragments =
            walk(r#"<h4><a></a>Rage (Ex)</h4><p>a</p><div><p>b</p></div><h2>End</h2>"#);
        assert_eq!(fragments, vec!["<p>a</p><div><p>b</p></div>"]);
    }

    #[test]
    fn test_styled_div_block_removed_on_close() {
        let fragments = walk(
            r#"<h4><a></a>Rage (Ex)</h4><p>a</p><div class="sidebar">note</div><h2>End</h2>"#,
        );
        assert_eq!(fragments, vec!["<p>a</p>"]);
    }

    #[test]
    fn test_container_after_styled_boundary_is_dropped() {
        let fragments = walk(concat!(
            r#"<h4><a></a>Rage (Ex)</h4><p>a</p>"#,
            r#"<h3 class="sub">Aside</h3><p>b</p><div>dropped</div><p>c</p>"#,
            "<h2>End</h2>",
        ));
        assert_eq!(fragments, vec!["<p>a</p>", "<p>b</p>", "<p>c</p>"]);
    }

    #[test]
    fn test_text_node_is_boundary() {
        let fragments = walk("<h4><a></a>Rage (Ex)</h4><p>a</p>stray<p>b</p><h2>End</h2>");
        assert_eq!(fragments, vec!["<p>a</p>", "<p>b</p>"]);
    }

    #[test]
    fn test_end_of_siblings_flushes_pending() {
        let fragments = walk("<h4><a></a>Rage (Ex)</h4><p>a</p><h4><a></a>Evasion (Ex)</h4><p>b</p>");
        assert_eq!(fragments, vec!["<p>a</p>", "<p>b</p>"]);
    }

    #[test]
    fn test_end_of_siblings_without_pending() {
        let fragments = walk("<h4><a></a>Rage (Ex)</h4><p>a</p><h4><a></a>Evasion (Ex)</h4>");
        assert_eq!(fragments, vec!["<p>a</p>"]);
    }

    #[test]
    fn test_fragments_are_finalized() {
        let fragments =
            walk("<h4><a></a>Rage (Ex)</h4><p>gain +4 to str and a will save \u{2013} 1×</p><h2>End</h2>");
        assert_eq!(
            fragments,
            vec![concat!(
                r#"<p>gain +4 to <mark class=\"strength\">Strength</mark> and a"#,
                r#" <mark class=\"wisdom\">Will</mark> save - 1x</p>"#,
            )]
        );
    }

    #[test]
    fn test_classify_sibling() {
        let doc = parse_document(r#"<p>a</p><div>b</div><table></table><h3>c</h3>"#);
        let body = doc.root_element().last_child().unwrap();
        let kinds: Vec<SiblingKind> = body
            .children()
            .map(|node| classify_sibling(node, true))
            .collect();
        assert_eq!(
            kinds,
            vec![
                SiblingKind::Content,
                SiblingKind::Container,
                SiblingKind::Excluded,
                SiblingKind::Boundary,
            ]
        );

        let div = body.children().nth(1).unwrap();
        assert_eq!(classify_sibling(div, false), SiblingKind::Boundary);
    }

    #[test]
    fn test_strip_anchors_leaves_other_a_tags() {
        assert_eq!(
            strip_anchors(r#"<abbr>DC</abbr> <a href="x">y</a>"#),
            "<abbr>DC</abbr>  y "
        );
    }

    #[test]
    fn test_clean_fragment() {
        assert_eq!(clean_fragment("a   b , c ."), "a b, c.");
        assert_eq!(
            clean_fragment(r#"<p>a</p><div class="x">b</div><p>c</p>"#),
            "<p>a</p><p>c</p>"
        );
    }
}
