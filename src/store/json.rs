//! JSON-fixture policy store
//!
//! Loads the portfolio from `policies.json` and `profile.json` in a fixtures
//! directory, standing in for a real policy backend. Parsed fixtures are
//! cached after the first read; the store never writes.

use std::path::{Path, PathBuf};

use log::debug;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;

use super::PolicyStore;
use crate::error::CoverwiseError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::model::{Policy, UserProfile};

/// Fixture file holding the policy list
pub const POLICIES_FILE: &str = "policies.json";

/// Fixture file holding the user profile
pub const PROFILE_FILE: &str = "profile.json";

/// Policy store reading JSON fixtures from a directory
pub struct JsonPolicyStore<FS: FileSystem = RealFileSystem> {
    dir: PathBuf,
    fs: FS,
    cache: RwLock<Option<Portfolio>>,
}

#[derive(Clone)]
struct Portfolio {
    policies: Vec<Policy>,
    profile: UserProfile,
}

impl JsonPolicyStore<RealFileSystem> {
    /// Create a store over the given fixtures directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(dir, RealFileSystem)
    }
}

impl<FS: FileSystem> JsonPolicyStore<FS> {
    /// Create a store with a custom filesystem implementation
    pub fn with_fs(dir: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            dir: dir.into(),
            fs,
            cache: RwLock::new(None),
        }
    }

    /// Directory the fixtures are read from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_fixture<T: DeserializeOwned>(&self, file: &str) -> Result<T, CoverwiseError> {
        let path = self.dir.join(file);
        let contents = self.fs.read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CoverwiseError::FixtureNotFound {
                    path: path.clone(),
                    source,
                }
            } else {
                CoverwiseError::Io {
                    context: format!("reading {}", path.display()),
                    source,
                }
            }
        })?;

        serde_json::from_str(&contents)
            .map_err(|source| CoverwiseError::InvalidFixture { path, source })
    }

    fn load(&self) -> Result<Portfolio, CoverwiseError> {
        if let Some(portfolio) = self.cache.read().as_ref() {
            return Ok(portfolio.clone());
        }

        let policies: Vec<Policy> = self.read_fixture(POLICIES_FILE)?;
        let profile: UserProfile = self.read_fixture(PROFILE_FILE)?;
        debug!(
            "loaded {} policies from {}",
            policies.len(),
            self.dir.display()
        );

        let portfolio = Portfolio { policies, profile };
        *self.cache.write() = Some(portfolio.clone());
        Ok(portfolio)
    }
}

impl<FS: FileSystem> PolicyStore for JsonPolicyStore<FS> {
    fn list(&self) -> Result<Vec<Policy>, CoverwiseError> {
        Ok(self.load()?.policies)
    }

    fn profile(&self) -> Result<UserProfile, CoverwiseError> {
        Ok(self.load()?.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const POLICIES_JSON: &str = r#"[
        {
            "id": "POL-1001",
            "status": "active",
            "premium": 12000,
            "insurer": "HDFC ERGO",
            "startDate": "2023-06-15",
            "ncb": 20,
            "asset": { "type": "car" },
            "coverageAmount": 300000
        },
        {
            "id": "POL-1002",
            "status": "expired",
            "premium": 6000,
            "insurer": "Acko",
            "startDate": "2021-02-01",
            "asset": { "type": "bike" },
            "coverageAmount": 80000
        }
    ]"#;

    const PROFILE_JSON: &str = r#"{ "preferredBudget": 45000 }"#;

    fn write_fixtures(dir: &TempDir) {
        std::fs::write(dir.path().join(POLICIES_FILE), POLICIES_JSON).unwrap();
        std::fs::write(dir.path().join(PROFILE_FILE), PROFILE_JSON).unwrap();
    }

    #[test]
    fn test_store_loads_policies_and_profile() {
        let dir = TempDir::new().unwrap();
        write_fixtures(&dir);

        let store = JsonPolicyStore::new(dir.path());
        let policies = store.list().unwrap();
        assert_eq!(policies.len(), 2);
        assert_eq!(policies[0].insurer, "HDFC ERGO");

        let profile = store.profile().unwrap();
        assert_eq!(profile.preferred_budget, 45_000);
    }

    #[test]
    fn test_store_caches_after_first_read() {
        let dir = TempDir::new().unwrap();
        write_fixtures(&dir);

        let store = JsonPolicyStore::new(dir.path());
        assert_eq!(store.list().unwrap().len(), 2);

        // A rewrite after the first read is not picked up
        std::fs::write(dir.path().join(POLICIES_FILE), "[]").unwrap();
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_fixture_maps_to_fixture_not_found() {
        let dir = TempDir::new().unwrap();

        let store = JsonPolicyStore::new(dir.path());
        let err = store.list().unwrap_err();
        assert!(matches!(err, CoverwiseError::FixtureNotFound { .. }));
        assert_eq!(err.exit_code(), 66);
    }

    #[test]
    fn test_malformed_fixture_maps_to_invalid_fixture() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(POLICIES_FILE), "{ not json").unwrap();
        std::fs::write(dir.path().join(PROFILE_FILE), PROFILE_JSON).unwrap();

        let store = JsonPolicyStore::new(dir.path());
        let err = store.list().unwrap_err();
        assert!(matches!(err, CoverwiseError::InvalidFixture { .. }));
    }

    #[test]
    fn test_profile_missing_is_distinguishable() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(POLICIES_FILE), POLICIES_JSON).unwrap();

        let store = JsonPolicyStore::new(dir.path());
        let err = store.profile().unwrap_err();
        match err {
            CoverwiseError::FixtureNotFound { path, .. } => {
                assert!(path.ends_with(PROFILE_FILE));
            }
            other => panic!("expected FixtureNotFound, got {:?}", other),
        }
    }
}
