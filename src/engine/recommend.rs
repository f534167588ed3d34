//! Recommendation evaluation and snapshot operations
//!
//! The engine runs the full battery on every call and ranks the emitted
//! recommendations by priority. Callers hold the result as a snapshot:
//! dismissing and quoting operate on that snapshot, so an id shown to the
//! user cannot silently vanish between the list and the follow-up call.

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use super::quote::{self, Quote};
use super::recommend_types::Recommendation;
use super::rules::{RuleContext, BATTERY};
use crate::error::CoverwiseError;
use crate::latency::{Latency, Operation};
use crate::model::{Policy, UserProfile};
use crate::store::PolicyStore;

/// Maximum entries returned by an evaluation
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Snapshot of ranked recommendations held by the caller
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RecommendationSet {
    items: Vec<Recommendation>,
}

impl RecommendationSet {
    /// Run the battery over active policies and rank the results
    ///
    /// Rules run in table order; the sort is stable, so equal priorities
    /// keep that order. The result is capped at [`MAX_RECOMMENDATIONS`].
    pub fn evaluate(active: &[Policy], profile: &UserProfile) -> Self {
        let ctx = RuleContext::new(active, profile);
        let mut items: Vec<Recommendation> = BATTERY
            .iter()
            .filter_map(|rule| (rule.trigger)(&ctx).map(|reasoning| rule.instantiate(reasoning)))
            .collect();

        debug!("{} of {} rules fired", items.len(), BATTERY.len());

        items.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight()));
        items.truncate(MAX_RECOMMENDATIONS);
        Self { items }
    }

    /// Ranked recommendations
    pub fn items(&self) -> &[Recommendation] {
        &self.items
    }

    /// Number of recommendations in the snapshot
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a recommendation by its stable id
    pub fn get(&self, id: &str) -> Option<&Recommendation> {
        self.items.iter().find(|r| r.id == id)
    }

    /// Remove a recommendation from this snapshot only
    ///
    /// Returns whether the id was present. Underlying policy data is never
    /// touched and nothing persists across snapshots.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        self.items.len() < before
    }
}

/// Recommendation engine over a policy store
///
/// # Examples
///
/// ```
/// use coverwise::engine::RecommendationEngine;
/// use coverwise::model::UserProfile;
/// use coverwise::store::InMemoryPolicyStore;
///
/// let store = InMemoryPolicyStore::new(Vec::new(), UserProfile::default());
/// let snapshot = RecommendationEngine::new(store).personalized()?;
///
/// // An empty portfolio is all gaps: the high-priority rules fire
/// assert!(snapshot.get("health-gap").is_some());
/// assert!(snapshot.get("life-gap").is_some());
/// # Ok::<(), coverwise::error::CoverwiseError>(())
/// ```
pub struct RecommendationEngine<S: PolicyStore> {
    store: S,
    latency: Latency,
}

impl<S: PolicyStore> RecommendationEngine<S> {
    /// Create an engine over the given store
    pub fn new(store: S) -> Self {
        Self {
            store,
            latency: Latency::disabled(),
        }
    }

    /// Enable or disable simulated latency
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Evaluate the battery against the live portfolio
    pub fn personalized(&self) -> Result<RecommendationSet, CoverwiseError> {
        self.latency.pause(Operation::Recommend);
        let active = self.store.list_active()?;
        let profile = self.store.profile()?;
        Ok(RecommendationSet::evaluate(&active, &profile))
    }

    /// Dismiss an id from a caller-held snapshot
    pub fn dismiss(&self, snapshot: &mut RecommendationSet, id: &str) -> bool {
        self.latency.pause(Operation::Dismiss);
        snapshot.dismiss(id)
    }

    /// Recompute a fresh snapshot and synthesize a quote for the id
    ///
    /// Because the battery re-runs against current policy state, an id from
    /// an older snapshot may no longer fire; that surfaces as
    /// [`CoverwiseError::RecommendationNotFound`]. Callers holding a
    /// snapshot can use [`quote::request_quote`] directly instead.
    pub fn request_quote(&self, id: &str, as_of: NaiveDate) -> Result<Quote, CoverwiseError> {
        self.latency.pause(Operation::RequestQuote);
        let snapshot = self.personalized()?;
        quote::request_quote(&snapshot, id, as_of)
    }
}
