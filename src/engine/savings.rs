//! Stacked discount calculation over the active portfolio
//!
//! All discounts stack additively; each qualifying rule contributes one
//! breakdown line. The calculator is a pure function of the policy snapshot
//! and the as-of date.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use chrono::{NaiveDate, Utc};
use log::debug;

use super::savings_types::{
    DiscountKind, OptimizationSuggestion, RateLabel, SavingsLine, SavingsReport, SuggestionKind,
};
use crate::error::CoverwiseError;
use crate::latency::{Latency, Operation};
use crate::model::Policy;
use crate::store::PolicyStore;

/// Base multi-policy rate at three active policies
const MULTI_POLICY_BASE: f64 = 0.08;
/// Extra rate per active policy beyond three
const MULTI_POLICY_STEP: f64 = 0.01;
/// Multi-policy rate ceiling
const MULTI_POLICY_CAP: f64 = 0.12;

/// Deterministic stand-in for the 5-8% two-policy band
pub const TWO_POLICY_RATE_DEFAULT: f64 = 0.065;

/// Base loyalty rate
const LOYALTY_BASE: f64 = 0.02;
/// Extra loyalty rate per qualifying policy
const LOYALTY_STEP: f64 = 0.01;

/// Base same-insurer bundle rate at two policies
const BUNDLE_BASE: f64 = 0.05;
/// Extra bundle rate per policy beyond two
const BUNDLE_STEP: f64 = 0.015;

/// Tip shown when the portfolio is empty
const EMPTY_PORTFOLIO_TIP: &str = "Add policies to start saving with multi-policy discounts!";

/// Tip shown below the three-policy tier
const UNLOCK_TIP: &str = "Add one more policy to unlock higher multi-policy discounts!";

/// Canned tips rotated deterministically by active policy count
const TIPS: [&str; 4] = [
    "Consider consolidating with a single insurer for additional bundle discounts.",
    "Maintain claim-free records to increase your NCB savings year over year.",
    "Add a health or term policy to unlock higher multi-policy discount tiers.",
    "Review renewal dates to align policies for maximum discount benefits.",
];

/// Stacked discount calculator over a policy store
///
/// # Examples
///
/// ```
/// use coverwise::engine::SavingsCalculator;
/// use coverwise::model::UserProfile;
/// use coverwise::store::InMemoryPolicyStore;
///
/// let store = InMemoryPolicyStore::new(Vec::new(), UserProfile::default());
/// let report = SavingsCalculator::new(store).calculate()?;
///
/// assert_eq!(report.total_savings, 0);
/// assert_eq!(report.policy_count, 0);
/// # Ok::<(), coverwise::error::CoverwiseError>(())
/// ```
pub struct SavingsCalculator<S: PolicyStore> {
    store: S,
    as_of: NaiveDate,
    two_policy_rate: f64,
    latency: Latency,
}

impl<S: PolicyStore> SavingsCalculator<S> {
    /// Create a calculator evaluating as of today
    pub fn new(store: S) -> Self {
        Self {
            store,
            as_of: Utc::now().date_naive(),
            two_policy_rate: TWO_POLICY_RATE_DEFAULT,
            latency: Latency::disabled(),
        }
    }

    /// Evaluate as of a fixed date (reproducible reports)
    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = as_of;
        self
    }

    /// Override the two-policy discount rate
    pub fn with_two_policy_rate(mut self, rate: f64) -> Self {
        self.two_policy_rate = rate;
        self
    }

    /// Enable or disable simulated latency
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Compute the stacked savings report for the active portfolio
    ///
    /// An empty portfolio yields a zero-value report, not an error.
    pub fn calculate(&self) -> Result<SavingsReport, CoverwiseError> {
        self.latency.pause(Operation::ListPolicies);
        let active = self.store.list_active()?;
        debug!("calculating savings over {} active policies", active.len());
        Ok(compute_report(&active, self.as_of, self.two_policy_rate))
    }

    /// Potential savings scenarios for growing the portfolio
    pub fn optimization_suggestions(
        &self,
    ) -> Result<Vec<OptimizationSuggestion>, CoverwiseError> {
        self.latency.pause(Operation::ListPolicies);
        let active = self.store.list_active()?;
        Ok(compute_suggestions(&active))
    }
}

fn compute_report(active: &[Policy], as_of: NaiveDate, two_policy_rate: f64) -> SavingsReport {
    if active.is_empty() {
        return SavingsReport {
            total_savings: 0,
            savings_percentage: 0.0,
            policy_count: 0,
            breakdown: Vec::new(),
            tip: EMPTY_PORTFOLIO_TIP.to_string(),
        };
    }

    let total_premium: u64 = active.iter().map(|p| p.premium).sum();
    let mut breakdown = Vec::new();

    // Multi-policy discount on the full premium base
    if active.len() >= 3 {
        let rate =
            (MULTI_POLICY_BASE + MULTI_POLICY_STEP * (active.len() - 3) as f64).min(MULTI_POLICY_CAP);
        breakdown.push(SavingsLine {
            kind: DiscountKind::MultiPolicy,
            name: "Multi-Policy Discount".to_string(),
            description: format!("{} policies with same group", active.len()),
            amount: apply_rate(total_premium, rate),
            percentage: RateLabel::from_fraction(rate),
        });
    } else if active.len() == 2 {
        breakdown.push(SavingsLine {
            kind: DiscountKind::MultiPolicy,
            name: "Multi-Policy Discount".to_string(),
            description: "2 policies bundle discount".to_string(),
            amount: apply_rate(total_premium, two_policy_rate),
            percentage: RateLabel::from_fraction(two_policy_rate),
        });
    }

    // Loyalty discount on the pooled premium of year-old policies
    let loyal: Vec<&Policy> = active.iter().filter(|p| p.age_years(as_of) >= 1.0).collect();
    if !loyal.is_empty() {
        let pooled: u64 = loyal.iter().map(|p| p.premium).sum();
        let rate = LOYALTY_BASE + LOYALTY_STEP * loyal.len() as f64;
        breakdown.push(SavingsLine {
            kind: DiscountKind::Loyalty,
            name: "Loyalty Rewards".to_string(),
            description: format!("{} long-term policies", loyal.len()),
            amount: apply_rate(pooled, rate),
            percentage: RateLabel::from_fraction(rate),
        });
    }

    // Same-insurer bundles: every group of two or more contributes a line
    let mut groups: BTreeMap<&str, Vec<&Policy>> = BTreeMap::new();
    for policy in active {
        groups.entry(policy.insurer.as_str()).or_default().push(policy);
    }
    for (insurer, members) in &groups {
        if members.len() < 2 {
            continue;
        }
        let subtotal: u64 = members.iter().map(|p| p.premium).sum();
        let rate = BUNDLE_BASE + BUNDLE_STEP * (members.len() - 2) as f64;
        breakdown.push(SavingsLine {
            kind: DiscountKind::Bundle,
            name: format!("{} Bundle", insurer),
            description: format!("{} policies with same insurer", members.len()),
            amount: apply_rate(subtotal, rate),
            percentage: RateLabel::from_fraction(rate),
        });
    }

    // NCB preservation pools every policy with an earned bonus
    let ncb_amount: u64 = active
        .iter()
        .filter(|p| p.ncb_percent() > 0)
        .map(|p| apply_rate(p.premium, p.ncb_percent() as f64 / 100.0))
        .sum();
    if active.iter().any(|p| p.ncb_percent() > 0) {
        breakdown.push(SavingsLine {
            kind: DiscountKind::Ncb,
            name: "No Claims Bonus".to_string(),
            description: "NCB preserved across policies".to_string(),
            amount: ncb_amount,
            percentage: RateLabel::Varies,
        });
    }

    let total_savings: u64 = breakdown.iter().map(|line| line.amount).sum();
    breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));

    // Guard the all-zero-premium portfolio
    let savings_percentage = if total_premium == 0 {
        0.0
    } else {
        total_savings as f64 / total_premium as f64 * 100.0
    };

    let tip = if active.len() < 3 {
        UNLOCK_TIP.to_string()
    } else {
        TIPS[active.len() % TIPS.len()].to_string()
    };

    SavingsReport {
        total_savings,
        savings_percentage,
        policy_count: active.len(),
        breakdown,
        tip,
    }
}

fn compute_suggestions(active: &[Policy]) -> Vec<OptimizationSuggestion> {
    let mut suggestions = Vec::new();

    if active.len() < 3 {
        suggestions.push(OptimizationSuggestion {
            kind: SuggestionKind::MultiPolicy,
            title: "Unlock Multi-Policy Discounts".to_string(),
            description: format!(
                "Add {} more policies to save up to 12%",
                3 - active.len()
            ),
            potential_savings: 15_000,
        });
    }

    let insurers: BTreeSet<&str> = active.iter().map(|p| p.insurer.as_str()).collect();
    if insurers.len() > 2 {
        suggestions.push(OptimizationSuggestion {
            kind: SuggestionKind::Consolidation,
            title: "Consolidate Insurers".to_string(),
            description: "Move policies to one insurer for bundle discounts".to_string(),
            potential_savings: 8_000,
        });
    }

    suggestions
}

fn apply_rate(base: u64, rate: f64) -> u64 {
    (base as f64 * rate).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Asset, AssetType, PolicyStatus, UserProfile};
    use crate::store::InMemoryPolicyStore;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn policy(id: &str, insurer: &str, premium: u64, start: NaiveDate) -> Policy {
        Policy {
            id: id.to_string(),
            status: PolicyStatus::Active,
            premium,
            insurer: insurer.to_string(),
            start_date: start,
            ncb: None,
            asset: Asset {
                kind: AssetType::Car,
            },
            coverage_amount: 600_000,
            add_ons: Vec::new(),
        }
    }

    fn recent(id: &str, insurer: &str, premium: u64) -> Policy {
        // Started last month: no loyalty qualification
        policy(id, insurer, premium, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
    }

    fn aged(id: &str, insurer: &str, premium: u64) -> Policy {
        policy(id, insurer, premium, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap())
    }

    fn calculator(policies: Vec<Policy>) -> SavingsCalculator<InMemoryPolicyStore> {
        let store = InMemoryPolicyStore::new(policies, UserProfile::default());
        SavingsCalculator::new(store).with_as_of(as_of())
    }

    #[test]
    fn test_empty_portfolio_yields_zero_report() {
        let report = calculator(Vec::new()).calculate().unwrap();

        assert_eq!(report.total_savings, 0);
        assert_eq!(report.savings_percentage, 0.0);
        assert_eq!(report.policy_count, 0);
        assert!(report.breakdown.is_empty());
        assert_eq!(report.tip, EMPTY_PORTFOLIO_TIP);
    }

    #[test]
    fn test_single_policy_has_no_multi_policy_line() {
        let report = calculator(vec![recent("POL-1", "Acko", 10_000)])
            .calculate()
            .unwrap();

        assert!(report
            .breakdown
            .iter()
            .all(|l| l.kind != DiscountKind::MultiPolicy));
    }

    #[test]
    fn test_two_policies_use_the_configured_fixed_rate() {
        let report = calculator(vec![
            recent("POL-1", "Acko", 10_000),
            recent("POL-2", "Digit", 20_000),
        ])
        .with_two_policy_rate(0.05)
        .calculate()
        .unwrap();

        let line = report
            .breakdown
            .iter()
            .find(|l| l.kind == DiscountKind::MultiPolicy)
            .expect("two active policies should earn a multi-policy line");
        assert_eq!(line.amount, 1_500); // 5% of 30,000
        assert_eq!(line.percentage.as_percent(), Some(5.0));
        assert_eq!(line.description, "2 policies bundle discount");
    }

    #[test]
    fn test_three_policies_start_at_eight_percent() {
        let report = calculator(vec![
            recent("POL-1", "A", 10_000),
            recent("POL-2", "B", 10_000),
            recent("POL-3", "C", 10_000),
        ])
        .calculate()
        .unwrap();

        let line = report
            .breakdown
            .iter()
            .find(|l| l.kind == DiscountKind::MultiPolicy)
            .unwrap();
        assert_eq!(line.amount, 2_400); // 8% of 30,000
        assert_eq!(line.percentage.as_percent(), Some(8.0));
    }

    #[test]
    fn test_multi_policy_rate_caps_at_twelve_percent() {
        // 10 policies: 8% + 7% uncapped would be 15%
        let policies: Vec<Policy> = (0..10)
            .map(|i| recent(&format!("POL-{}", i), &format!("INS-{}", i), 10_000))
            .collect();
        let report = calculator(policies).calculate().unwrap();

        let line = report
            .breakdown
            .iter()
            .find(|l| l.kind == DiscountKind::MultiPolicy)
            .unwrap();
        assert_eq!(line.percentage.as_percent(), Some(12.0));
        assert_eq!(line.amount, 12_000); // 12% of 100,000
    }

    #[test]
    fn test_loyalty_pools_only_year_old_policies() {
        let report = calculator(vec![
            aged("POL-1", "A", 10_000),
            aged("POL-2", "B", 14_000),
            recent("POL-3", "C", 99_000),
        ])
        .calculate()
        .unwrap();

        let line = report
            .breakdown
            .iter()
            .find(|l| l.kind == DiscountKind::Loyalty)
            .expect("aged policies should earn a loyalty line");
        // 2% + 1% x 2 policies = 4% of the 24,000 pool, not of 123,000
        assert_eq!(line.amount, 960);
        assert_eq!(line.percentage.as_percent(), Some(4.0));
        assert_eq!(line.description, "2 long-term policies");
    }

    #[test]
    fn test_each_qualifying_insurer_group_gets_its_own_bundle_line() {
        let report = calculator(vec![
            recent("POL-1", "HDFC ERGO", 10_000),
            recent("POL-2", "HDFC ERGO", 10_000),
            recent("POL-3", "Bajaj Allianz", 20_000),
            recent("POL-4", "Bajaj Allianz", 20_000),
            recent("POL-5", "Bajaj Allianz", 20_000),
            recent("POL-6", "Acko", 5_000),
        ])
        .calculate()
        .unwrap();

        let bundles: Vec<&SavingsLine> = report
            .breakdown
            .iter()
            .filter(|l| l.kind == DiscountKind::Bundle)
            .collect();
        assert_eq!(bundles.len(), 2);

        let hdfc = bundles.iter().find(|l| l.name.contains("HDFC")).unwrap();
        assert_eq!(hdfc.amount, 1_000); // 5% of 20,000
        let bajaj = bundles.iter().find(|l| l.name.contains("Bajaj")).unwrap();
        assert_eq!(bajaj.amount, 3_900); // 6.5% of 60,000
    }

    #[test]
    fn test_ncb_line_pools_policies_and_shows_varies() {
        let mut with_ncb = recent("POL-1", "A", 10_000);
        with_ncb.ncb = Some(20);
        let mut with_more_ncb = aged("POL-2", "B", 5_000);
        with_more_ncb.ncb = Some(50);

        let report = calculator(vec![with_ncb, with_more_ncb]).calculate().unwrap();

        let line = report
            .breakdown
            .iter()
            .find(|l| l.kind == DiscountKind::Ncb)
            .expect("policies with NCB should earn a pooled line");
        assert_eq!(line.amount, 4_500); // 2,000 + 2,500
        assert_eq!(line.percentage, RateLabel::Varies);
    }

    #[test]
    fn test_total_is_exact_sum_of_breakdown() {
        let mut with_ncb = aged("POL-1", "HDFC ERGO", 12_000);
        with_ncb.ncb = Some(20);
        let report = calculator(vec![
            with_ncb,
            aged("POL-2", "HDFC ERGO", 9_000),
            recent("POL-3", "Acko", 7_000),
        ])
        .calculate()
        .unwrap();

        let sum: u64 = report.breakdown.iter().map(|l| l.amount).sum();
        assert_eq!(sum, report.total_savings);
    }

    #[test]
    fn test_breakdown_sorted_descending_by_amount() {
        let mut with_ncb = aged("POL-1", "HDFC ERGO", 12_000);
        with_ncb.ncb = Some(45);
        let report = calculator(vec![
            with_ncb,
            aged("POL-2", "HDFC ERGO", 9_000),
            recent("POL-3", "Acko", 7_000),
            recent("POL-4", "Acko", 3_000),
        ])
        .calculate()
        .unwrap();

        assert!(report.breakdown.len() >= 3);
        for pair in report.breakdown.windows(2) {
            assert!(pair[0].amount >= pair[1].amount);
        }
    }

    #[test]
    fn test_zero_premium_portfolio_has_zero_percentage() {
        let report = calculator(vec![
            recent("POL-1", "A", 0),
            recent("POL-2", "B", 0),
        ])
        .calculate()
        .unwrap();

        assert_eq!(report.total_savings, 0);
        assert_eq!(report.savings_percentage, 0.0);
        assert!(report.savings_percentage.is_finite());
    }

    #[test]
    fn test_savings_percentage_uses_full_premium_base() {
        // Loyalty only: 3% of 12,000 = 360 against a 12,000 base
        let report = calculator(vec![aged("POL-1", "A", 12_000)])
            .calculate()
            .unwrap();

        assert_eq!(report.total_savings, 360);
        assert!((report.savings_percentage - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_tip_below_three_policies_suggests_adding_one() {
        let report = calculator(vec![recent("POL-1", "A", 10_000)])
            .calculate()
            .unwrap();
        assert_eq!(report.tip, UNLOCK_TIP);
    }

    #[test]
    fn test_tip_is_deterministic_for_identical_portfolios() {
        let build = || {
            calculator(vec![
                recent("POL-1", "A", 10_000),
                recent("POL-2", "B", 10_000),
                recent("POL-3", "C", 10_000),
                recent("POL-4", "D", 10_000),
            ])
            .calculate()
            .unwrap()
        };

        let first = build();
        let second = build();
        assert_eq!(first.tip, second.tip);
        assert_eq!(first.tip, TIPS[0]); // 4 policies mod 4
    }

    #[test]
    fn test_spec_example_single_aged_car_policy() {
        let mut car = policy(
            "POL-1",
            "HDFC ERGO",
            12_000,
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        );
        car.ncb = Some(20);
        car.coverage_amount = 300_000;

        let report = calculator(vec![car]).calculate().unwrap();

        assert!(report
            .breakdown
            .iter()
            .any(|l| l.kind == DiscountKind::Loyalty));
        assert!(report
            .breakdown
            .iter()
            .all(|l| l.kind != DiscountKind::MultiPolicy));
    }

    #[test]
    fn test_suggestions_below_three_policies() {
        let calc = calculator(vec![recent("POL-1", "A", 10_000)]);
        let suggestions = calc.optimization_suggestions().unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::MultiPolicy);
        assert!(suggestions[0].description.contains("2 more"));
        assert_eq!(suggestions[0].potential_savings, 15_000);
    }

    #[test]
    fn test_suggestions_for_scattered_insurers() {
        let calc = calculator(vec![
            recent("POL-1", "A", 10_000),
            recent("POL-2", "B", 10_000),
            recent("POL-3", "C", 10_000),
        ]);
        let suggestions = calc.optimization_suggestions().unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::Consolidation);
        assert_eq!(suggestions[0].potential_savings, 8_000);
    }

    #[test]
    fn test_suggestions_empty_when_consolidated_and_stacked() {
        let calc = calculator(vec![
            recent("POL-1", "A", 10_000),
            recent("POL-2", "A", 10_000),
            recent("POL-3", "B", 10_000),
        ]);
        assert!(calc.optimization_suggestions().unwrap().is_empty());
    }
}
