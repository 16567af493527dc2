//! Response model of `POST /api/insurance/analyze`.
//!
//! Field names follow the service's JSON exactly. Maps are BTreeMaps so renders
//! are deterministic; anything order-sensitive (top categories) is re-sorted by
//! value at the call site.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionAnalysis {
    pub transaction_count: u64,
    pub total_spending: f64,
    pub spending_patterns: SpendingPatterns,
    pub category_insights: BTreeMap<String, CategoryInsight>,
    pub insurance_recommendations: BTreeMap<String, InsuranceRecommendation>,
    pub financial_advice: FinancialAdvice,
    /// Free-text report; parse with coverwise-report.
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpendingPatterns {
    #[serde(default)]
    pub top_categories: BTreeMap<String, f64>,
    #[serde(default)]
    pub top_insurance_labels: BTreeMap<String, f64>,
    #[serde(default)]
    pub weekly_trend: BTreeMap<String, f64>,
    #[serde(default)]
    pub monthly_trend: BTreeMap<String, f64>,
    #[serde(default)]
    pub daily_averages: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInsight {
    pub total_spent: f64,
    pub average_transaction: f64,
    pub transaction_count: u64,
    pub recommended_insurance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceRecommendation {
    pub priority: Priority,
    pub percentage: f64,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialAdvice {
    pub total_spending: f64,
    #[serde(default)]
    pub avg_monthly_spending: Option<f64>,
    #[serde(default)]
    pub budget_recommendation: Option<f64>,
    #[serde(default)]
    pub savings_opportunities: Option<BTreeMap<String, SavingsOpportunity>>,
    #[serde(default)]
    pub insurance_recommendations: Option<BTreeMap<String, InsuranceRecommendation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsOpportunity {
    pub transaction_count: u64,
    pub total_amount: f64,
}

/// Recommendation priority as the service spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: high priority first (the service orders its summary the same way).
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl TransactionAnalysis {
    /// Top spending categories, largest first.
    pub fn top_categories_sorted(&self) -> Vec<(&str, f64)> {
        let mut cats: Vec<(&str, f64)> = self
            .spending_patterns
            .top_categories
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        cats.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        cats
    }

    /// Insurance recommendations ordered by priority, then percentage descending.
    pub fn recommendations_by_priority(&self) -> Vec<(&str, &InsuranceRecommendation)> {
        let mut recs: Vec<(&str, &InsuranceRecommendation)> = self
            .insurance_recommendations
            .iter()
            .map(|(name, rec)| (name.as_str(), rec))
            .collect();
        recs.sort_by(|a, b| {
            a.1.priority
                .rank()
                .cmp(&b.1.priority.rank())
                .then_with(|| {
                    b.1.percentage
                        .partial_cmp(&a.1.percentage)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });
        recs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TransactionAnalysis {
        // Trimmed-down version of a real service response
        serde_json::from_str(
            r#"{
              "transaction_count": 500,
              "total_spending": 268543.74,
              "spending_patterns": {
                "top_categories": {
                  "Salary": 114505.23,
                  "Investment": 68483.47,
                  "Education": 12844.49
                },
                "top_insurance_labels": { "Other": 163, "Credit": 65 },
                "weekly_trend": { "2025-W08": 2111.15 },
                "monthly_trend": { "Apr 2025": 28748.35 },
                "daily_averages": { "Monday": 848.10 }
              },
              "category_insights": {
                "Salary": {
                  "total_spent": 114505.23,
                  "average_transaction": 4978.49,
                  "transaction_count": 133,
                  "recommended_insurance": "Other"
                }
              },
              "insurance_recommendations": {
                "Credit": {
                  "priority": "Medium",
                  "percentage": 21.50,
                  "amount": 57741.86,
                  "reason": "Credit protection insurance could be valuable."
                },
                "Life": { "priority": "High", "percentage": 4.60 }
              },
              "financial_advice": {
                "total_spending": 268543.74,
                "avg_monthly_spending": 16783.98,
                "budget_recommendation": 15105.59,
                "savings_opportunities": {
                  "Transportation": { "transaction_count": 29, "total_amount": 1895.70 }
                }
              },
              "summary": "FINANCIAL TRANSACTION ANALYSIS SUMMARY"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserializes_service_response() {
        let analysis = sample();
        assert_eq!(analysis.transaction_count, 500);
        assert_eq!(analysis.total_spending, 268543.74);
        assert_eq!(
            analysis.category_insights["Salary"].recommended_insurance,
            "Other"
        );
        assert_eq!(
            analysis.financial_advice.avg_monthly_spending,
            Some(16783.98)
        );
        // Missing optional blocks default instead of failing
        assert!(analysis.financial_advice.insurance_recommendations.is_none());
    }

    #[test]
    fn test_top_categories_sorted_descending() {
        let analysis = sample();
        let cats = analysis.top_categories_sorted();
        assert_eq!(cats[0].0, "Salary");
        assert_eq!(cats[1].0, "Investment");
        assert_eq!(cats[2].0, "Education");
    }

    #[test]
    fn test_recommendations_ordered_high_priority_first() {
        let analysis = sample();
        let recs = analysis.recommendations_by_priority();
        assert_eq!(recs[0].0, "Life");
        assert_eq!(recs[0].1.priority, Priority::High);
        assert_eq!(recs[1].0, "Credit");
    }
}
