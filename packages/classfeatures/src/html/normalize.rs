//! Whitespace normalization applied to raw markup before parsing.
//!
//! Indentation and line breaks in exported HTML would otherwise become text
//! nodes between elements, and the boundary walker treats every text node
//! as the end of a feature.

use regex::Regex;
use std::sync::LazyLock;

/// Leading or trailing whitespace on any line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LINE_EDGE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s+|\s+$").expect("valid regex"));

/// Whitespace directly before a tag opens.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_BEFORE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+<").expect("valid regex"));

/// Two or more whitespace characters after a tag closes, or trailing whitespace.
///
/// A single space between a tag and following text is meaningful and kept.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_AFTER_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+(\s|$)").expect("valid regex"));

/// Normalize raw markup whitespace.
///
/// In order:
/// - strip whitespace at the start and end of every line
/// - join lines with a single space
/// - drop whitespace before `<`
/// - drop whitespace runs after `>` unless it is a single space before text
///
/// Applying it twice gives the same result as applying it once.
///
/// # Examples
/// ```
/// use classfeatures::html::normalize_markup;
///
/// let raw = "<h4>\n    <a id=\"rage\"></a>Rage (Ex)\n</h4>\n<p>Text</p>\n";
/// assert_eq!(
///     normalize_markup(raw),
///     "<h4><a id=\"rage\"></a>Rage (Ex)</h4><p>Text</p>"
/// );
/// ```
pub fn normalize_markup(raw: &str) -> String {
    let text = LINE_EDGE_WHITESPACE.replace_all(raw, "");
    let text = text.replace('\n', " ");
    let text = WHITESPACE_BEFORE_TAG.replace_all(&text, "<");
    WHITESPACE_AFTER_TAG.replace_all(&text, ">").into_owned()
}
