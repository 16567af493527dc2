//! Terminal rendering of analysis results, summary sections, and plan lists.
//!
//! Renderers return strings so tests can assert on them; main prints.

use coverwise_core::{
    format_count, format_currency, PlanRecommendation, TransactionAnalysis,
};
use coverwise_report::{ContentLine, ExpansionState, ExtractedFields, Section};

fn money_or_na(value: Option<f64>) -> String {
    value.map(format_currency).unwrap_or_else(|| "n/a".to_string())
}

/// Headline stats from an authoritative analysis response.
pub fn render_headline(analysis: &TransactionAnalysis) -> String {
    let advice = &analysis.financial_advice;
    let mut out = String::new();
    out.push_str("FINANCIAL SUMMARY\n");
    out.push_str(&format!(
        "  Transactions        {}\n",
        format_count(analysis.transaction_count)
    ));
    out.push_str(&format!(
        "  Total Spending      {}\n",
        format_currency(analysis.total_spending)
    ));
    out.push_str(&format!(
        "  Monthly Average     {}\n",
        money_or_na(advice.avg_monthly_spending)
    ));
    out.push_str(&format!(
        "  Recommended Budget  {}\n",
        money_or_na(advice.budget_recommendation)
    ));
    out
}

/// The same four stats, but recovered from the report text. Absent patterns
/// render as "n/a" rather than a fake zero.
pub fn render_summary_card(fields: &ExtractedFields) -> String {
    let mut out = String::new();
    out.push_str("FINANCIAL SUMMARY (from report text)\n");
    out.push_str(&format!(
        "  Transactions        {}\n",
        fields
            .transaction_count
            .map(format_count)
            .unwrap_or_else(|| "n/a".to_string())
    ));
    out.push_str(&format!(
        "  Total Spending      {}\n",
        money_or_na(fields.total_spending)
    ));
    out.push_str(&format!(
        "  Monthly Average     {}\n",
        money_or_na(fields.monthly_avg_spending)
    ));
    out.push_str(&format!(
        "  Recommended Budget  {}\n",
        money_or_na(fields.budget_recommendation)
    ));
    out
}

/// Top spending categories, largest first, with share of total.
pub fn render_top_categories(analysis: &TransactionAnalysis) -> String {
    let mut out = String::from("TOP SPENDING CATEGORIES\n");
    let total = analysis.total_spending;
    for (i, (name, amount)) in analysis.top_categories_sorted().into_iter().enumerate() {
        let share = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
        out.push_str(&format!(
            "  {}. {name}: {} ({share:.1}%)\n",
            i + 1,
            format_currency(amount)
        ));
    }
    out
}

/// Classified sections, honoring per-section expansion flags.
pub fn render_sections(sections: &[Section], expansion: &ExpansionState) -> String {
    if sections.is_empty() {
        return "No structured sections found in this report.\n".to_string();
    }

    let mut out = String::new();
    for section in sections {
        out.push_str(&format!("== {} [{}]\n", section.title, section.id));
        if !expansion.is_expanded(&section.id) {
            out.push_str("   (collapsed)\n");
            continue;
        }
        for line in &section.content {
            match line {
                ContentLine::Bullet { text } => out.push_str(&format!("   * {text}\n")),
                ContentLine::Numbered { text } => out.push_str(&format!("   {text}\n")),
                ContentLine::Header { text } => out.push_str(&format!("   {text}\n")),
                ContentLine::KeyValue { key, value } => {
                    out.push_str(&format!("   {key}: {value}\n"))
                }
                ContentLine::Paragraph { text } => out.push_str(&format!("   {text}\n")),
            }
        }
    }
    out
}

/// Ranked plan list from the recommendation service.
pub fn render_plans(plans: &[PlanRecommendation]) -> String {
    if plans.is_empty() {
        return "No plans recommended for this profile.\n".to_string();
    }

    let mut out = String::from("RECOMMENDED PLANS\n");
    for (i, plan) in plans.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} ({}) confidence={:.1}%\n",
            i + 1,
            plan.plan,
            plan.plan_type,
            plan.confidence_percent()
        ));
        if let Some(premium) = &plan.premium_range {
            out.push_str(&format!("     premium range: {premium}\n"));
        }
        if let Some(features) = &plan.features {
            out.push_str(&format!("     {features}\n"));
        }
    }
    out
}
