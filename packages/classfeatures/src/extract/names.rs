//! Feature name extraction from heading labels.

use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

use crate::error::{ConverterError, Result};
use crate::html::{content_child, node_string};

/// Position of the label among a heading's content children.
///
/// Exported headings lead with an empty anchor element.
pub const LABEL_CHILD_INDEX: usize = 1;

/// Ability type suffix: "(Ex)", "(Sp)" or "(Su)" with surrounding spaces.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TYPE_ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *?\((Ex|Sp|Su)[^A-Za-z] *\)? *").expect("valid regex"));

/// Remove the ability type abbreviation from a heading label.
///
/// # Examples
/// ```
/// use classfeatures::extract::strip_type_abbreviation;
///
/// assert_eq!(strip_type_abbreviation("Rage (Ex)"), "Rage");
/// assert_eq!(strip_type_abbreviation("Smite Evil (Su) "), "Smite Evil");
/// assert_eq!(strip_type_abbreviation("Bonus Feats"), "Bonus Feats");
/// ```
pub fn strip_type_abbreviation(label: &str) -> String {
    TYPE_ABBREVIATION.replace_all(label, "").into_owned()
}

/// Extract the name of one feature heading.
///
/// # Arguments
/// * `heading` - The feature heading element
/// * `index` - Position of the heading among all feature headings (for errors)
///
/// # Returns
/// * `Ok(name)` with the type abbreviation stripped
/// * `Err(ConverterError::MalformedHeading)` if the heading has no second
///   content child or that child does not carry a single string
pub fn feature_name(heading: ElementRef<'_>, index: usize) -> Result<String> {
    let label = content_child(*heading, LABEL_CHILD_INDEX)
        .and_then(node_string)
        .ok_or_else(|| ConverterError::MalformedHeading {
            index,
            heading: heading.html(),
        })?;
    Ok(strip_type_abbreviation(&label))
}

/// Extract names for all feature headings, in order.
pub fn extract_feature_names(headings: &[ElementRef<'_>]) -> Result<Vec<String>> {
    headings
        .iter()
        .enumerate()
        .map(|(index, heading)| feature_name(*heading, index))
        .collect()
}
