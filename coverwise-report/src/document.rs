//! Versioned structured form of an analysis summary.
//!
//! Producers should eventually emit this schema directly instead of free text;
//! until then [`SummaryDocument::from_text`] is the adapter that lifts a legacy
//! text report into it.

use serde::{Deserialize, Serialize};

use crate::fields::extract_fields;
use crate::parse_summary;
use crate::types::{ExtractedFields, Section};

/// Bump when the document shape changes incompatibly.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryDocument {
    pub schema_version: u32,
    pub sections: Vec<Section>,
    pub fields: ExtractedFields,
}

impl SummaryDocument {
    /// Legacy adapter: parse a free-text report into the structured schema.
    ///
    /// Sections and fields are derived from the same text via separate
    /// heuristics and are not cross-validated.
    pub fn from_text(report: &str) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            sections: parse_summary(report),
            fields: extract_fields(report),
        }
    }

    /// True when the report produced no recognizable structure. Callers render
    /// a placeholder instead of failing.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_carries_version() {
        let doc = SummaryDocument::from_text("HEADER\nbody\n");
        assert_eq!(doc.schema_version, SCHEMA_VERSION);
        assert_eq!(doc.sections.len(), 1);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_empty_text_yields_empty_document() {
        let doc = SummaryDocument::from_text("");
        assert!(doc.is_empty());
        assert_eq!(doc.fields, ExtractedFields::default());
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let doc = SummaryDocument::from_text(
            "SPENDING\n--------\n- groceries\nTotal: 12.50\n",
        );
        let json = serde_json::to_string(&doc).unwrap();
        let back: SummaryDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
