//! coverwise-core: wire types for the external analysis and recommendation
//! services, plus the formatting helpers the renderer shares.

pub mod analysis;
pub mod applicant;
pub mod money;

pub use analysis::{
    CategoryInsight, FinancialAdvice, InsuranceRecommendation, Priority, SavingsOpportunity,
    SpendingPatterns, TransactionAnalysis,
};
pub use applicant::{ApplicantProfile, PlanRecommendation, RecommendationResponse};
pub use money::{format_count, format_currency};
