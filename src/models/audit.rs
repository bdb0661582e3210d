use serde::{Deserialize, Serialize};

/// The structured result of one audit call.
///
/// Wire names are camelCase because they double as the JSON schema the
/// service is asked to honor. Every field is mandatory: a reply missing any
/// of them fails typed deserialization and is reported as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Percentage of income spent in the analyzed period (0-100).
    pub burn_rate_percentage: f64,
    /// Overall financial-health score (0-100, higher = healthier).
    /// Not re-validated locally; the range is the service's contract.
    pub vola_verdict_score: f64,
    pub asset_accumulation_summary: String,
    /// Markdown-formatted narrative.
    pub detailed_reasoning: String,
    pub leakage_items: Vec<LeakageItem>,
    pub category_spending: Vec<CategorySpending>,
}

/// Discretionary spend flagged as reducible, with a suggested replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeakageItem {
    pub item: String,
    pub reason: String,
    pub alternative: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub total: f64,
}

impl AuditReport {
    /// Burn rates above this read as critical in the verdict displays.
    pub const BURN_CRITICAL: f64 = 40.0;

    pub fn burn_is_critical(&self) -> bool {
        self.burn_rate_percentage > Self::BURN_CRITICAL
    }
}
