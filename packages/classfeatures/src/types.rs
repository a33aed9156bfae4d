//! Core data types for the converter.

/// One extracted class feature: its name and its processed description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRecord {
    /// Heading label with the type abbreviation removed (e.g., "Rage").
    pub name: String,
    /// Finalized description markup, quotes already backslash-escaped.
    pub text: String,
}

impl FeatureRecord {
    /// Create a new record.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Result of converting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Records in document order.
    pub records: Vec<FeatureRecord>,
    /// Non-fatal anomalies noticed during extraction.
    pub warnings: Vec<String>,
}

impl Conversion {
    /// Number of extracted records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_record_new() {
        let record = FeatureRecord::new("Rage", "<p>Angry.</p>");
        assert_eq!(record.name, "Rage");
        assert_eq!(record.text, "<p>Angry.</p>");
    }

    #[test]
    fn test_conversion_len() {
        let mut conversion = Conversion::default();
        assert!(conversion.is_empty());

        conversion.records.push(FeatureRecord::new("Rage", ""));
        assert_eq!(conversion.len(), 1);
        assert!(!conversion.is_empty());
    }
}
