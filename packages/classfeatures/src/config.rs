//! Configuration constants and conversion options.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ConverterError, Result};

/// Database selected at the top of every generated SQL file.
pub const DATABASE_NAME: &str = "pathfinder";

/// Table receiving one row per class feature.
pub const TABLE_NAME: &str = "class_features";

/// Number of reserved columns between the class id and the feature name.
///
/// These are always written as `NULL`.
pub const RESERVED_COLUMNS: usize = 3;

/// Tag marking the start of one class feature.
pub const DEFAULT_FEATURE_TAG: &str = "h4";

/// Tag marking the end of the feature-bearing section.
pub const DEFAULT_SECTION_TAG: &str = "h2";

/// Sibling tags whose markup is always appended to the current feature text.
pub const CONTENT_TAGS: [&str; 4] = ["p", "ul", "li", "a"];

/// Sibling container tag, appended only under a plain heading.
pub const CONTAINER_TAG: &str = "div";

/// Sibling tags that are skipped without ending the feature.
///
/// Embedded tables break the downstream text formatting.
pub const EXCLUDED_TAGS: [&str; 1] = ["table"];

/// Attributes that make a heading or container "non-plain".
pub const PRESENTATION_ATTRIBUTES: [&str; 2] = ["class", "style"];

/// Tag name pattern accepted for heading options.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAG_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*$").expect("valid regex"));

/// Validate a heading tag name.
///
/// # Examples
/// ```
/// use classfeatures::config::validate_tag_name;
///
/// assert!(validate_tag_name("h4").is_ok());
/// assert!(validate_tag_name("<h4>").is_err());
/// ```
pub fn validate_tag_name(tag: &str) -> Result<()> {
    if TAG_NAME_PATTERN.is_match(tag) {
        Ok(())
    } else {
        Err(ConverterError::InvalidTagName(tag.to_string()))
    }
}

/// Options for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Tag of the headings that start a feature.
    pub feature_tag: String,
    /// Tag of the heading that ends the feature section.
    pub section_tag: String,
}

impl ConvertOptions {
    /// Create options with explicit heading tags, validating both.
    pub fn new(feature_tag: impl Into<String>, section_tag: impl Into<String>) -> Result<Self> {
        let feature_tag = feature_tag.into();
        let section_tag = section_tag.into();
        validate_tag_name(&feature_tag)?;
        validate_tag_name(&section_tag)?;
        Ok(Self {
            feature_tag,
            section_tag,
        })
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            feature_tag: DEFAULT_FEATURE_TAG.to_string(),
            section_tag: DEFAULT_SECTION_TAG.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tag_name_valid() {
        assert!(validate_tag_name("h4").is_ok());
        assert!(validate_tag_name("h2").is_ok());
        assert!(validate_tag_name("section").is_ok());
    }

    #[test]
    fn test_validate_tag_name_invalid() {
        assert!(validate_tag_name("").is_err());
        assert!(validate_tag_name("H4").is_err());
        assert!(validate_tag_name("4h").is_err());
        assert!(validate_tag_name("h4 class").is_err());
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.feature_tag, "h4");
        assert_eq!(options.section_tag, "h2");
    }

    #[test]
    fn test_new_options_rejects_bad_tag() {
        assert!(ConvertOptions::new("h3", "h1").is_ok());
        assert!(matches!(
            ConvertOptions::new("h3", "<h1>"),
            Err(ConverterError::InvalidTagName(tag)) if tag == "<h1>"
        ));
    }
}
