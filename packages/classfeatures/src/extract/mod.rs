//! Feature extraction from the parsed document.
//!
//! - [`headings`]: which headings start a feature
//! - [`names`]: feature names from heading labels
//! - [`walker`]: feature texts from the siblings between headings

pub mod headings;
pub mod names;
pub mod walker;

pub use headings::{find_feature_headings, is_feature_heading};
pub use names::{extract_feature_names, feature_name, strip_type_abbreviation};
pub use walker::{clean_fragment, classify_sibling, strip_anchors, FeatureWalker, SiblingKind};
