//! Conversion pipeline that ties all components together.

use std::fs;
use std::path::Path;

use crate::config::ConvertOptions;
use crate::error::{ConverterError, Result};
use crate::extract::{extract_feature_names, find_feature_headings, FeatureWalker};
use crate::html::{normalize_markup, parse_document};
use crate::types::{Conversion, FeatureRecord};

/// Read and convert a class feature HTML file.
///
/// # Arguments
/// * `path` - Path to the exported HTML document
/// * `options` - Heading tags to use
///
/// # Returns
/// A `Conversion` with one record per feature and any warnings
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<Conversion> {
    let raw = fs::read_to_string(path).map_err(|source| ConverterError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = raw.len(), "Read input document");
    convert_html(&raw, options)
}

/// Convert raw class feature markup into records.
///
/// Normalizes whitespace, parses the document, extracts feature names and
/// feature texts, and pairs them in document order.
///
/// # Errors
/// * `NoFeatureHeadings` if the document has no plain feature heading
/// * `MalformedHeading` if a feature heading has no label child
pub fn convert_html(raw: &str, options: &ConvertOptions) -> Result<Conversion> {
    let markup = normalize_markup(raw);
    let doc = parse_document(&markup);

    let headings = find_feature_headings(&doc, &options.feature_tag);
    let Some(first_heading) = headings.first() else {
        return Err(ConverterError::NoFeatureHeadings {
            tag: options.feature_tag.clone(),
        });
    };

    let names = extract_feature_names(&headings)?;
    let texts = FeatureWalker::new(options.section_tag.as_str()).walk(**first_heading);
    tracing::debug!(
        headings = headings.len(),
        fragments = texts.len(),
        "Extracted feature names and texts"
    );

    let (records, warnings) = assemble_records(names, texts);
    Ok(Conversion { records, warnings })
}

/// Pair names with texts by position.
///
/// Extra names or texts are dropped. A count mismatch usually means a stray
/// boundary node split a feature, so it is reported as a warning.
pub fn assemble_records(names: Vec<String>, texts: Vec<String>) -> (Vec<FeatureRecord>, Vec<String>) {
    let mut warnings = Vec::new();
    if names.len() != texts.len() {
        tracing::warn!(
            names = names.len(),
            texts = texts.len(),
            "Feature name and text counts differ, truncating"
        );
        warnings.push(format!(
            "Found {} feature names but {} feature texts; kept the first {}",
            names.len(),
            texts.len(),
            names.len().min(texts.len())
        ));
    }

    let records = names
        .into_iter()
        .zip(texts)
        .map(|(name, text)| FeatureRecord { name, text })
        .collect();

    (records, warnings)
}
