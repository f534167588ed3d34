//! Savings report types

use serde::{Serialize, Serializer};
use std::fmt;

/// Discount category of a breakdown line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscountKind {
    /// Portfolio-wide multi-policy discount
    MultiPolicy,
    /// Discount on policies held for a year or more
    Loyalty,
    /// Same-insurer bundle discount
    Bundle,
    /// No-claims bonus preservation
    Ncb,
}

/// Rate shown for a breakdown line
///
/// The NCB line pools several underlying rates, so it carries no single
/// percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateLabel {
    /// Single percentage applied to a premium base
    Rate(f64),
    /// Mixed underlying rates
    Varies,
}

impl RateLabel {
    /// Build a label from a fractional rate (0.08 -> 8.0%)
    pub fn from_fraction(rate: f64) -> Self {
        Self::Rate(rate * 100.0)
    }

    /// The percentage value, if the line has a single rate
    pub fn as_percent(&self) -> Option<f64> {
        match self {
            Self::Rate(p) => Some(*p),
            Self::Varies => None,
        }
    }
}

impl fmt::Display for RateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rate(p) => write!(f, "{:.1}", p),
            Self::Varies => write!(f, "Varies"),
        }
    }
}

// Serialized as a string ("8.0" or "Varies") to match the report wire shape.
impl Serialize for RateLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// One discount line item in the savings breakdown
#[derive(Debug, Clone, Serialize)]
pub struct SavingsLine {
    /// Discount category
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    /// Display name
    pub name: String,
    /// Short explanation of what qualified
    pub description: String,
    /// Amount saved in whole rupees
    pub amount: u64,
    /// Rate label for display
    pub percentage: RateLabel,
}

/// Stacked discount report over the active portfolio
///
/// Recomputed on every call; never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsReport {
    /// Sum of all breakdown line amounts
    pub total_savings: u64,
    /// Total savings as a percentage of the total active premium
    pub savings_percentage: f64,
    /// Number of active policies considered
    pub policy_count: usize,
    /// Line items sorted descending by amount
    pub breakdown: Vec<SavingsLine>,
    /// One optimization suggestion
    pub tip: String,
}

/// Category of an optimization suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    /// Add policies to reach the multi-policy tier
    MultiPolicy,
    /// Move policies to a single insurer
    Consolidation,
}

/// Coarse "what next" entry from the savings component
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSuggestion {
    /// Suggestion category
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Display title
    pub title: String,
    /// What to do
    pub description: String,
    /// Illustrative annual savings in whole rupees
    pub potential_savings: u64,
}
