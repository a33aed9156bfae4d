//! Class Features - Convert rulebook class feature HTML into SQL.
//!
//! This crate reads an exported HTML page describing a class's features,
//! cuts it into one record per feature (name and description markup), and
//! renders the records as insert statements for the `class_features` table.
//!
//! # Example
//!
//! ```
//! use classfeatures::{convert_html, ConvertOptions};
//!
//! let html = r#"<h4><a id="rage"></a>Rage (Ex)</h4><p>Angry.</p><h2>Archetypes</h2>"#;
//! let conversion = convert_html(html, &ConvertOptions::default()).unwrap();
//! assert_eq!(conversion.records[0].name, "Rage");
//! assert_eq!(conversion.records[0].text, "<p>Angry.</p>");
//! ```
//!
//! # Architecture
//!
//! The converter is organized into several modules:
//!
//! - [`config`]: Constants and conversion options
//! - [`types`]: Core data types (FeatureRecord, Conversion)
//! - [`error`]: Error types and Result alias
//! - [`html`]: Whitespace normalization and HTML tree helpers
//! - [`extract`]: Feature headings, names and the boundary walker
//! - [`annotate`]: Ability and save markup, quote escaping
//! - [`converter`]: Pipeline from raw markup to records
//! - [`sql`]: SQL output generation
//! - [`cli`]: Command-line interface

pub mod annotate;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod extract;
pub mod html;
pub mod sql;
pub mod types;

// Re-export main functions
pub use converter::{assemble_records, convert_file, convert_html};

// Re-export commonly used items
pub use config::ConvertOptions;
pub use error::{ConverterError, Result};
pub use types::{Conversion, FeatureRecord};
