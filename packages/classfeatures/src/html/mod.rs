//! HTML preprocessing and tree utilities.

pub mod normalize;
pub mod utils;

pub use normalize::normalize_markup;
pub use utils::{
    content_child, find_elements, has_tag, is_plain, node_string, outer_html, parse_document,
    tag_name, HtmlNode,
};
