//! In-memory policy store for tests and embedding

use super::PolicyStore;
use crate::error::CoverwiseError;
use crate::model::{Policy, UserProfile};

/// Policy store backed by a plain vector
///
/// # Examples
///
/// ```
/// use coverwise::model::UserProfile;
/// use coverwise::store::{InMemoryPolicyStore, PolicyStore};
///
/// let store = InMemoryPolicyStore::new(Vec::new(), UserProfile::default());
/// assert!(store.list().unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryPolicyStore {
    policies: Vec<Policy>,
    profile: UserProfile,
}

impl InMemoryPolicyStore {
    /// Create a store over the given portfolio
    pub fn new(policies: Vec<Policy>, profile: UserProfile) -> Self {
        Self { policies, profile }
    }
}

impl PolicyStore for InMemoryPolicyStore {
    fn list(&self) -> Result<Vec<Policy>, CoverwiseError> {
        Ok(self.policies.clone())
    }

    fn profile(&self) -> Result<UserProfile, CoverwiseError> {
        Ok(self.profile.clone())
    }
}
