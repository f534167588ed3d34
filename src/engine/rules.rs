//! Declarative recommendation rule battery
//!
//! Each rule pairs a trigger predicate with a fixed textual template. The
//! battery runs in table order on every evaluation; ties in the final
//! priority sort keep this order. Premiums and coverages here are
//! illustrative placeholder constants, not actuarial output.

use std::collections::BTreeSet;

use super::recommend_types::{Priority, Recommendation, RecommendationKind, RecommendedAction};
use crate::model::{
    AssetType, Policy, UserProfile, ADD_ON_CRITICAL_ILLNESS, ADD_ON_NCB_PROTECTION,
};

/// Budget above which travel cover is suggested
pub const TRAVEL_BUDGET_FLOOR: u64 = 30_000;

/// Car coverage below this amount is flagged as low
pub const CAR_COVERAGE_FLOOR: u64 = 500_000;

/// NCB percentage above which protection is worth buying
pub const NCB_PROTECTION_FLOOR: u8 = 20;

/// Distinct insurer count above which consolidation is suggested
pub const CONSOLIDATION_FLOOR: usize = 2;

/// Inputs shared by every rule evaluation
pub struct RuleContext<'a> {
    active: &'a [Policy],
    profile: &'a UserProfile,
}

impl<'a> RuleContext<'a> {
    /// Build a context over active policies and the owner's profile
    pub fn new(active: &'a [Policy], profile: &'a UserProfile) -> Self {
        Self { active, profile }
    }

    /// Active policies under evaluation
    pub fn active(&self) -> &[Policy] {
        self.active
    }

    /// Whether any active policy covers the given asset type
    pub fn has_cover(&self, kind: AssetType) -> bool {
        self.active.iter().any(|p| p.asset.kind == kind)
    }

    /// Number of distinct insurers across active policies
    pub fn distinct_insurers(&self) -> usize {
        self.active
            .iter()
            .map(|p| p.insurer.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    fn health_missing_critical_illness(&self) -> bool {
        self.has_cover(AssetType::Health)
            && !self
                .active
                .iter()
                .any(|p| p.asset.kind == AssetType::Health && p.has_add_on(ADD_ON_CRITICAL_ILLNESS))
    }

    fn has_underinsured_car(&self) -> bool {
        self.active
            .iter()
            .any(|p| p.asset.kind == AssetType::Car && p.coverage_amount < CAR_COVERAGE_FLOOR)
    }

    fn unprotected_ncb_count(&self) -> usize {
        self.active
            .iter()
            .filter(|p| {
                p.asset.kind.is_motor()
                    && p.ncb_percent() > NCB_PROTECTION_FLOOR
                    && !p.has_add_on(ADD_ON_NCB_PROTECTION)
            })
            .count()
    }
}

/// Static template plus trigger for one battery entry
pub struct Rule {
    /// Stable identifier carried onto emitted recommendations
    pub id: &'static str,
    /// Reason family
    pub kind: RecommendationKind,
    /// Urgency tier
    pub priority: Priority,
    /// Follow-up action
    pub action: RecommendedAction,
    /// Display category tag
    pub category: &'static str,
    /// Display icon name
    pub icon: &'static str,
    /// Display title
    pub title: &'static str,
    /// What the recommendation covers
    pub description: &'static str,
    /// What the user gains
    pub potential_benefit: &'static str,
    /// Suggested sum insured, when applicable
    pub suggested_coverage: Option<u64>,
    /// Illustrative annual premium; negative values signal savings
    pub estimated_premium: i64,
    /// Returns the reasoning string when the rule fires
    pub trigger: fn(&RuleContext) -> Option<String>,
}

impl Rule {
    /// Materialize a recommendation from this rule and its reasoning
    pub fn instantiate(&self, reasoning: String) -> Recommendation {
        Recommendation {
            id: self.id.to_string(),
            kind: self.kind,
            title: self.title.to_string(),
            description: self.description.to_string(),
            priority: self.priority,
            reasoning,
            potential_benefit: self.potential_benefit.to_string(),
            suggested_coverage: self.suggested_coverage,
            estimated_premium: self.estimated_premium,
            action: self.action,
            category: self.category.to_string(),
            icon: self.icon.to_string(),
        }
    }
}

fn health_gap(ctx: &RuleContext) -> Option<String> {
    (!ctx.has_cover(AssetType::Health))
        .then(|| "No active health insurance found in your portfolio".to_string())
}

fn critical_illness_addon(ctx: &RuleContext) -> Option<String> {
    ctx.health_missing_critical_illness()
        .then(|| "Enhance your health coverage with critical illness protection".to_string())
}

fn life_gap(ctx: &RuleContext) -> Option<String> {
    (!ctx.has_cover(AssetType::Life))
        .then(|| "Essential financial protection for family members".to_string())
}

fn travel_cover(ctx: &RuleContext) -> Option<String> {
    (!ctx.has_cover(AssetType::Travel) && ctx.profile.preferred_budget > TRAVEL_BUDGET_FLOOR)
        .then(|| "Based on your profile, travel coverage would be beneficial".to_string())
}

fn car_coverage_low(ctx: &RuleContext) -> Option<String> {
    ctx.has_underinsured_car()
        .then(|| "Market value appreciation suggests higher coverage needed".to_string())
}

fn home_gap(ctx: &RuleContext) -> Option<String> {
    (!ctx.has_cover(AssetType::Home) && ctx.active().len() >= 2)
        .then(|| "Multiple policies suggest valuable assets requiring home protection".to_string())
}

fn insurer_consolidation(ctx: &RuleContext) -> Option<String> {
    let insurers = ctx.distinct_insurers();
    (insurers > CONSOLIDATION_FLOOR)
        .then(|| format!("You have policies with {} different insurers", insurers))
}

fn ncb_protection(ctx: &RuleContext) -> Option<String> {
    let unprotected = ctx.unprotected_ncb_count();
    (unprotected > 0).then(|| format!("You have {} policies with valuable NCB", unprotected))
}

/// The battery in evaluation order
pub const BATTERY: &[Rule] = &[
    Rule {
        id: "health-gap",
        kind: RecommendationKind::CoverageGap,
        priority: Priority::High,
        action: RecommendedAction::GetQuote,
        category: "health",
        icon: "Heart",
        title: "Health Insurance Essential",
        description: "Protect yourself and your family with comprehensive health coverage",
        potential_benefit: "Cover medical expenses up to ₹10L",
        suggested_coverage: Some(1_000_000),
        estimated_premium: 25_000,
        trigger: health_gap,
    },
    Rule {
        id: "critical-illness-addon",
        kind: RecommendationKind::AddonSuggestion,
        priority: Priority::Medium,
        action: RecommendedAction::EnhancePolicy,
        category: "health_addon",
        icon: "ShieldPlus",
        title: "Critical Illness Cover",
        description: "Add critical illness protection to your existing health insurance",
        potential_benefit: "Additional ₹15L coverage for 30+ critical illnesses",
        suggested_coverage: Some(1_500_000),
        estimated_premium: 8_000,
        trigger: critical_illness_addon,
    },
    Rule {
        id: "life-gap",
        kind: RecommendationKind::CoverageGap,
        priority: Priority::High,
        action: RecommendedAction::GetQuote,
        category: "life",
        icon: "Users",
        title: "Term Life Insurance",
        description: "Secure your family's financial future with term life insurance",
        potential_benefit: "₹1Cr life coverage for your family's security",
        suggested_coverage: Some(10_000_000),
        estimated_premium: 18_000,
        trigger: life_gap,
    },
    Rule {
        id: "travel-cover",
        kind: RecommendationKind::LifestyleBased,
        priority: Priority::Low,
        action: RecommendedAction::GetQuote,
        category: "travel",
        icon: "Plane",
        title: "Annual Travel Insurance",
        description: "Stay protected during domestic and international travels",
        potential_benefit: "Worldwide coverage up to ₹50L for medical emergencies",
        suggested_coverage: Some(5_000_000),
        estimated_premium: 12_000,
        trigger: travel_cover,
    },
    Rule {
        id: "car-coverage-low",
        kind: RecommendationKind::CoverageOptimization,
        priority: Priority::Medium,
        action: RecommendedAction::UpdateCoverage,
        category: "motor",
        icon: "Car",
        title: "Increase Car Coverage",
        description: "Your car insurance coverage seems low for current market values",
        potential_benefit: "Better protection against total loss scenarios",
        suggested_coverage: Some(800_000),
        estimated_premium: 3_000,
        trigger: car_coverage_low,
    },
    Rule {
        id: "home-gap",
        kind: RecommendationKind::AssetProtection,
        priority: Priority::Medium,
        action: RecommendedAction::GetQuote,
        category: "home",
        icon: "Home",
        title: "Home Insurance Protection",
        description: "Protect your home and belongings from unforeseen damages",
        potential_benefit: "Comprehensive home and contents coverage up to ₹25L",
        suggested_coverage: Some(2_500_000),
        estimated_premium: 15_000,
        trigger: home_gap,
    },
    Rule {
        id: "insurer-consolidation",
        kind: RecommendationKind::CostOptimization,
        priority: Priority::Low,
        action: RecommendedAction::Consolidate,
        category: "optimization",
        icon: "Layers",
        title: "Consolidate Policies",
        description: "Bundle policies with single insurer for better discounts",
        potential_benefit: "Save up to 15% with multi-policy discounts",
        suggested_coverage: None,
        estimated_premium: -12_000, // Negative indicates savings
        trigger: insurer_consolidation,
    },
    Rule {
        id: "ncb-protection",
        kind: RecommendationKind::AddonSuggestion,
        priority: Priority::Medium,
        action: RecommendedAction::AddAddon,
        category: "motor_addon",
        icon: "Shield",
        title: "NCB Protection Cover",
        description: "Protect your hard-earned No Claims Bonus from future claims",
        potential_benefit: "Preserve NCB benefits even after making claims",
        suggested_coverage: None,
        estimated_premium: 2_500,
        trigger: ncb_protection,
    },
];
