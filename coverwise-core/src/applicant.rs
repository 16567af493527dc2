//! Questionnaire and plan types for `POST /api/recommend` and
//! `POST /api/gemini/compare`.
//!
//! The recommendation service expects Title_Case wire names; that contract is
//! pinned here once via serde renames, with plain snake_case on the Rust side.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Smoking_Status")]
    pub smoking_status: String,
    #[serde(rename = "Annual_Income")]
    pub annual_income: f64,
    #[serde(rename = "Existing_Loans_Debts")]
    pub existing_loans_debts: u32,
    #[serde(rename = "Existing_Insurance_Policies")]
    pub existing_insurance_policies: u32,
    #[serde(rename = "Desired_Sum_Assured")]
    pub desired_sum_assured: f64,
    #[serde(rename = "Policy_Term_Years")]
    pub policy_term_years: u32,
    #[serde(rename = "Premium_Payment_Option")]
    pub premium_payment_option: String,
    #[serde(rename = "Death_Benefit_Option")]
    pub death_benefit_option: String,
    #[serde(rename = "Payout_Type")]
    pub payout_type: String,
    #[serde(rename = "Medical_History")]
    pub medical_history: String,
    #[serde(rename = "Lifestyle_Habits")]
    pub lifestyle_habits: String,
    #[serde(rename = "Interest_in_Optional_Riders")]
    pub interest_in_optional_riders: bool,
    #[serde(rename = "Interest_in_Tax_Saving")]
    pub interest_in_tax_saving: bool,
}

/// One recommended plan as returned by the service. Most descriptive fields are
/// optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecommendation {
    pub plan: String,
    pub confidence: f64,
    #[serde(rename = "type")]
    pub plan_type: String,
    #[serde(default)]
    pub features: Option<String>,
    #[serde(rename = "CSR", default)]
    pub csr: Option<String>,
    #[serde(default)]
    pub sum_assured_range: Option<String>,
    #[serde(default)]
    pub premium_range: Option<String>,
    #[serde(default)]
    pub medical_required: Option<String>,
    #[serde(default)]
    pub return_of_premium: Option<String>,
    #[serde(default)]
    pub policy_term_range: Option<String>,
    #[serde(default)]
    pub life_cover_till_age: Option<String>,
    #[serde(default)]
    pub payout_type: Option<String>,
    #[serde(default)]
    pub riders_available: Option<String>,
    #[serde(default)]
    pub income_criteria: Option<String>,
    #[serde(default)]
    pub payment_option: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<PlanRecommendation>,
}

impl PlanRecommendation {
    /// Confidence as a 0-100 percentage for display.
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}
