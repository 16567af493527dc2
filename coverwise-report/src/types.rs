//! Normalized output of the summary parser (producer-agnostic).

use serde::{Deserialize, Serialize};

/// One classified line of a section body.
///
/// The wire tag matches the legacy frontend model (`type` discriminator,
/// `key-value` spelled with a hyphen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentLine {
    Bullet { text: String },
    Numbered { text: String },
    Header { text: String },
    KeyValue { key: String, value: String },
    Paragraph { text: String },
}

/// A titled grouping of consecutive content lines within a report.
///
/// `title` is always non-empty; content order preserves source line order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub content: Vec<ContentLine>,
}

/// Headline numbers pulled directly out of the report text, independently of the
/// section structure.
///
/// `None` means the pattern did not match (distinct from a genuine zero). The
/// `*_or_zero` accessors preserve the legacy contract where absent fields render
/// as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub total_spending: Option<f64>,
    pub transaction_count: Option<u64>,
    pub monthly_avg_spending: Option<f64>,
    pub budget_recommendation: Option<f64>,
}

impl ExtractedFields {
    pub fn total_spending_or_zero(&self) -> f64 {
        self.total_spending.unwrap_or(0.0)
    }

    pub fn transaction_count_or_zero(&self) -> u64 {
        self.transaction_count.unwrap_or(0)
    }

    pub fn monthly_avg_spending_or_zero(&self) -> f64 {
        self.monthly_avg_spending.unwrap_or(0.0)
    }

    pub fn budget_recommendation_or_zero(&self) -> f64 {
        self.budget_recommendation.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_line_wire_tags() {
        let kv = ContentLine::KeyValue {
            key: "Total Spent".to_string(),
            value: "114505.23".to_string(),
        };
        let json = serde_json::to_string(&kv).unwrap();
        assert!(json.contains(r#""type":"key-value""#), "got {json}");

        let bullet = ContentLine::Bullet {
            text: "review coverage".to_string(),
        };
        let json = serde_json::to_string(&bullet).unwrap();
        assert!(json.contains(r#""type":"bullet""#), "got {json}");

        let back: ContentLine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bullet);
    }

    #[test]
    fn test_default_fields_read_as_zero() {
        let fields = ExtractedFields::default();
        assert_eq!(fields.total_spending, None);
        assert_eq!(fields.total_spending_or_zero(), 0.0);
        assert_eq!(fields.transaction_count_or_zero(), 0);
        assert_eq!(fields.monthly_avg_spending_or_zero(), 0.0);
        assert_eq!(fields.budget_recommendation_or_zero(), 0.0);
    }
}
