//! Portfolio domain types
//!
//! Policies are read-only inputs owned by the policy store; the rule engines
//! never mutate them. Field names serialize as camelCase to match the JSON
//! fixture format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Add-on identifier for critical illness cover on health policies
pub const ADD_ON_CRITICAL_ILLNESS: &str = "critical_illness";

/// Add-on identifier for NCB protection on motor policies
pub const ADD_ON_NCB_PROTECTION: &str = "ncb_protection";

/// Lifecycle state of a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyStatus {
    /// Currently in force
    Active,
    /// Term ended without renewal
    Expired,
    /// Terminated before the end of the term
    Cancelled,
}

/// Category of the insured asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Four-wheeler motor cover
    Car,
    /// Two-wheeler motor cover
    Bike,
    /// Home and contents cover
    Home,
    /// Health cover
    Health,
    /// Travel cover
    Travel,
    /// Term life cover
    Life,
    /// Gadget / device cover
    Gadget,
}

impl AssetType {
    /// Whether this asset type earns a no-claims bonus
    pub fn is_motor(self) -> bool {
        matches!(self, Self::Car | Self::Bike)
    }
}

/// Insured asset attached to a policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Asset category tag
    #[serde(rename = "type")]
    pub kind: AssetType,
}

/// A single insurance policy as returned by the policy store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// Unique policy identifier
    pub id: String,
    /// Lifecycle state
    pub status: PolicyStatus,
    /// Annual premium in whole rupees
    pub premium: u64,
    /// Issuing insurer name (free text)
    pub insurer: String,
    /// Date the policy went into force
    pub start_date: NaiveDate,
    /// No-claims bonus percentage (0-100), if earned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ncb: Option<u8>,
    /// Insured asset
    pub asset: Asset,
    /// Sum insured in whole rupees
    pub coverage_amount: u64,
    /// Add-on identifiers such as `critical_illness` or `ncb_protection`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_ons: Vec<String>,
}

impl Policy {
    /// Whether the policy counts toward discounts and recommendations
    pub fn is_active(&self) -> bool {
        self.status == PolicyStatus::Active
    }

    /// Whether the named add-on is attached
    pub fn has_add_on(&self, name: &str) -> bool {
        self.add_ons.iter().any(|a| a == name)
    }

    /// Policy age in fractional years as of the given date (365-day years)
    pub fn age_years(&self, as_of: NaiveDate) -> f64 {
        let days = (as_of - self.start_date).num_days();
        days as f64 / 365.0
    }

    /// NCB percentage, treating absent as zero
    pub fn ncb_percent(&self) -> u8 {
        self.ncb.unwrap_or(0)
    }
}

/// User profile consumed by the recommendation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Annual insurance budget in whole rupees
    pub preferred_budget: u64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            preferred_budget: 25_000,
        }
    }
}
