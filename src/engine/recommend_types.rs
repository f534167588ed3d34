//! Recommendation types

use serde::{Deserialize, Serialize};

/// Urgency tier for a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Act soon
    High,
    /// Worth doing
    Medium,
    /// Nice to have
    Low,
}

impl Priority {
    /// Sort weight; higher sorts first
    pub fn weight(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// Action the caller should take for a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    /// Request a fresh quote for new coverage
    GetQuote,
    /// Extend an existing policy
    EnhancePolicy,
    /// Raise the sum insured on an existing policy
    UpdateCoverage,
    /// Move policies to a single insurer
    Consolidate,
    /// Attach an add-on to an existing policy
    AddAddon,
}

/// Reason family a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Missing coverage for an essential asset type
    CoverageGap,
    /// Add-on worth attaching to an existing policy
    AddonSuggestion,
    /// Suggested by the user's profile rather than the portfolio
    LifestyleBased,
    /// Existing coverage looks too low
    CoverageOptimization,
    /// Valuable assets imply further protection
    AssetProtection,
    /// Restructuring that reduces spend
    CostOptimization,
}

/// A single personalized recommendation
///
/// Ephemeral: recomputed from live policy data on every evaluation. The `id`
/// is stable per rule, so the same gap yields the same id across calls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Stable rule identifier
    pub id: String,
    /// Reason family
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    /// Display title
    pub title: String,
    /// What the recommendation covers
    pub description: String,
    /// Urgency tier
    pub priority: Priority,
    /// Why the rule fired for this portfolio
    pub reasoning: String,
    /// What the user gains
    pub potential_benefit: String,
    /// Suggested sum insured; null when the action has no coverage figure
    pub suggested_coverage: Option<u64>,
    /// Illustrative annual premium; negative values signal savings
    pub estimated_premium: i64,
    /// Follow-up action
    pub action: RecommendedAction,
    /// Display category tag
    pub category: String,
    /// Display icon name
    pub icon: String,
}
