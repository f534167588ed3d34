//! Portfolio rule engines
//!
//! Two standalone rule-evaluation components over the active portfolio:
//! - Stacked discount calculation with a per-line breakdown
//! - Personalized recommendation battery with priority ranking
//!
//! Both are pure functions of their inputs at call time; neither maintains
//! state across calls.

pub mod quote;
pub mod recommend;
pub mod recommend_report;
pub mod recommend_types;
pub mod rules;
pub mod savings;
pub mod savings_report;
pub mod savings_types;

// Public exports for common engine types
pub use quote::{request_quote, Quote, QuoteStatus};
pub use recommend::{RecommendationEngine, RecommendationSet, MAX_RECOMMENDATIONS};
pub use recommend_report::print_recommendations;
pub use recommend_types::{Priority, Recommendation, RecommendationKind, RecommendedAction};
pub use rules::{Rule, RuleContext, BATTERY};
pub use savings::SavingsCalculator;
pub use savings_report::{print_savings_report, print_suggestions};
pub use savings_types::{
    DiscountKind, OptimizationSuggestion, RateLabel, SavingsLine, SavingsReport, SuggestionKind,
};
