//! Headline field extraction.
//!
//! Four independent case-insensitive searches over the whole report text. Each
//! pattern tracks the exact phrasing the analyze service uses when it writes the
//! summary; a miss (or an unparseable number) leaves that field absent without
//! affecting the others.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::ExtractedFields;

static TOTAL_SPENDING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)total spending of\s*(\d+(?:\.\d+)?)").expect("total-spending pattern")
});

static TRANSACTION_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)analyzed\s+(\d+)\s+transactions").expect("transaction-count pattern")
});

static MONTHLY_AVG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)average monthly spending:\s*(\d+(?:\.\d+)?)").expect("monthly-average pattern")
});

static BUDGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)monthly budget of\s*(\d+(?:\.\d+)?)").expect("budget pattern")
});

fn capture_f64(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn capture_u64(re: &Regex, text: &str) -> Option<u64> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Pull the four headline numbers out of a report. Total: never fails, fields
/// whose pattern does not match come back as `None`.
pub fn extract_fields(report: &str) -> ExtractedFields {
    ExtractedFields {
        total_spending: capture_f64(&TOTAL_SPENDING_RE, report),
        transaction_count: capture_u64(&TRANSACTION_COUNT_RE, report),
        monthly_avg_spending: capture_f64(&MONTHLY_AVG_RE, report),
        budget_recommendation: capture_f64(&BUDGET_RE, report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_defaults_to_zero() {
        let fields = extract_fields("");
        assert_eq!(fields, ExtractedFields::default());
        assert_eq!(fields.total_spending_or_zero(), 0.0);
        assert_eq!(fields.transaction_count_or_zero(), 0);
        assert_eq!(fields.monthly_avg_spending_or_zero(), 0.0);
        assert_eq!(fields.budget_recommendation_or_zero(), 0.0);
    }

    #[test]
    fn test_extracts_each_field() {
        let report = "\
Analyzed 500 transactions with total spending of 268543.74
  - Average Monthly Spending: 16783.98
  - Budget Recommendation: Consider setting a monthly budget of 15105.59 to reduce expenses by 10%.";
        let fields = extract_fields(report);
        assert_eq!(fields.transaction_count, Some(500));
        assert_eq!(fields.total_spending, Some(268543.74));
        assert_eq!(fields.monthly_avg_spending, Some(16783.98));
        assert_eq!(fields.budget_recommendation, Some(15105.59));
    }

    #[test]
    fn test_fields_are_independent() {
        // Only the count phrase is present; the others stay absent
        let fields = extract_fields("Analyzed 42 transactions during March");
        assert_eq!(fields.transaction_count, Some(42));
        assert_eq!(fields.total_spending, None);
        assert_eq!(fields.monthly_avg_spending, None);
        assert_eq!(fields.budget_recommendation, None);
    }

    #[test]
    fn test_case_insensitive() {
        let fields = extract_fields("TOTAL SPENDING OF 12.5 across the period");
        assert_eq!(fields.total_spending, Some(12.5));
    }

    #[test]
    fn test_integer_amount_without_fraction() {
        let fields = extract_fields("a monthly budget of 1500 should cover it");
        assert_eq!(fields.budget_recommendation, Some(1500.0));
    }
}
