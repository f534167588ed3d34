//! Policy store abstraction and implementations
//!
//! The rule engines consume a single external read operation: list all
//! policies currently known, plus the owning user's profile. The trait keeps
//! them testable against in-memory fixtures; the JSON store stands in for a
//! real backend.

pub mod json;
pub mod memory;

use crate::error::CoverwiseError;
use crate::model::{Policy, UserProfile};

pub use json::JsonPolicyStore;
pub use memory::InMemoryPolicyStore;

/// Read-only access to the policy portfolio
pub trait PolicyStore {
    /// Return all policies currently known, regardless of status
    fn list(&self) -> Result<Vec<Policy>, CoverwiseError>;

    /// Return the portfolio owner's profile
    fn profile(&self) -> Result<UserProfile, CoverwiseError>;

    /// Return only policies currently in force
    fn list_active(&self) -> Result<Vec<Policy>, CoverwiseError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(Policy::is_active)
            .collect())
    }
}
