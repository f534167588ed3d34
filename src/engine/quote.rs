//! Placeholder quote synthesis
//!
//! Quotes are illustrative stand-ins for a real pricing backend: fixed
//! feature list, fixed insurer label, premium and coverage copied from the
//! recommendation that prompted them.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use super::recommend::RecommendationSet;
use crate::error::CoverwiseError;

/// Days a synthesized quote stays valid
pub const QUOTE_VALIDITY_DAYS: u64 = 30;

/// Insurer label used on synthesized quotes
pub const PLACEHOLDER_INSURER: &str = "Recommended Insurer";

/// Feature bullets attached to every synthesized quote
pub const QUOTE_FEATURES: [&str; 4] = [
    "Cashless network of 5000+ hospitals",
    "24/7 customer support",
    "Quick claim settlement",
    "No medical checkup required",
];

/// Lifecycle state of a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    /// Open for acceptance until `valid_until`
    Active,
}

/// A synthesized quote for a recommendation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Unique quote identifier
    pub id: Uuid,
    /// Recommendation this quote was requested for
    pub recommendation_id: String,
    /// Category carried over from the recommendation
    #[serde(rename = "type")]
    pub category: String,
    /// Issuing insurer label
    pub insurer: String,
    /// Annual premium; negative values signal savings
    pub premium: i64,
    /// Sum insured; null when the recommendation carried no coverage figure
    pub coverage: Option<u64>,
    /// Included feature bullets
    pub features: Vec<String>,
    /// Last day the quote can be accepted
    pub valid_until: NaiveDate,
    /// Lifecycle state
    pub status: QuoteStatus,
}

/// Synthesize a quote for a recommendation held in a snapshot
///
/// The id is looked up in the caller's snapshot, not a fresh evaluation, so
/// an id the caller has seen cannot vanish underneath them. An absent id
/// maps to [`CoverwiseError::RecommendationNotFound`].
pub fn request_quote(
    snapshot: &RecommendationSet,
    id: &str,
    as_of: NaiveDate,
) -> Result<Quote, CoverwiseError> {
    let recommendation = snapshot
        .get(id)
        .ok_or_else(|| CoverwiseError::RecommendationNotFound { id: id.to_string() })?;

    Ok(Quote {
        id: Uuid::new_v4(),
        recommendation_id: recommendation.id.clone(),
        category: recommendation.category.clone(),
        insurer: PLACEHOLDER_INSURER.to_string(),
        premium: recommendation.estimated_premium,
        coverage: recommendation.suggested_coverage,
        features: QUOTE_FEATURES.iter().map(|f| f.to_string()).collect(),
        valid_until: as_of + Days::new(QUOTE_VALIDITY_DAYS),
        status: QuoteStatus::Active,
    })
}
