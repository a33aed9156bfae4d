//! Feature heading detection.

use scraper::{ElementRef, Html};

use crate::html::{find_elements, has_tag, is_plain, HtmlNode};

/// Check if a node is a feature heading: the designated tag, and plain.
///
/// Headings with a `class` or `style` attribute are decorative (table
/// captions, sidebars) and never start a feature.
pub fn is_feature_heading(node: HtmlNode<'_>, tag: &str) -> bool {
    has_tag(node, tag) && is_plain(node)
}

/// Find all feature headings in document order.
pub fn find_feature_headings<'a>(doc: &'a Html, tag: &'a str) -> Vec<ElementRef<'a>> {
    find_elements(doc, tag)
        .filter(|heading| is_feature_heading(**heading, tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse_document;

    #[test]
    fn test_find_feature_headings_skips_styled() {
        let doc = parse_document(concat!(
            r#"<h4><a></a>Rage (Ex)</h4>"#,
            r#"<h4 class="stat-block">Statistics</h4>"#,
            r#"<h4 style="margin: 0">Table</h4>"#,
            r#"<h4><a></a>Uncanny Dodge (Ex)</h4>"#,
        ));
        let labels: Vec<String> = find_feature_headings(&doc, "h4")
            .iter()
            .map(|h| h.text().collect())
            .collect();
        assert_eq!(labels, vec!["Rage (Ex)", "Uncanny Dodge (Ex)"]);
    }

    #[test]
    fn test_find_feature_headings_other_tag() {
        let doc = parse_document("<h3>A</h3><h4>B</h4><h3>C</h3>");
        assert_eq!(find_feature_headings(&doc, "h3").len(), 2);
    }

    #[test]
    fn test_is_feature_heading() {
        let doc = parse_document(r#"<h4>A</h4><h4 class="x">B</h4><h3>C</h3>"#);
        let nodes: Vec<bool> = find_elements(&doc, "h4")
            .chain(find_elements(&doc, "h3"))
            .map(|el| is_feature_heading(*el, "h4"))
            .collect();
        assert_eq!(nodes, vec![true, false, false]);
    }
}
