//! Test fixture helpers for building portfolios and fixture projects
//!
//! Provides policy builders for library-level tests and a project scaffold
//! (config plus fixture files) for binary-level tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use coverwise::model::{Asset, AssetType, Policy, PolicyStatus, UserProfile};

/// A policy with sensible defaults, active and recent
pub fn policy(id: &str, kind: AssetType, insurer: &str, premium: u64) -> Policy {
    Policy {
        id: id.to_string(),
        status: PolicyStatus::Active,
        premium,
        insurer: insurer.to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        ncb: None,
        asset: Asset { kind },
        coverage_amount: 600_000,
        add_ons: Vec::new(),
    }
}

/// A policy backdated far enough to qualify for loyalty discounts
pub fn aged_policy(id: &str, kind: AssetType, insurer: &str, premium: u64) -> Policy {
    Policy {
        start_date: NaiveDate::from_ymd_opt(2022, 5, 1).unwrap(),
        ..policy(id, kind, insurer, premium)
    }
}

/// Fixed as-of date used by reproducible reports
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// Profile above the travel-suggestion budget floor
pub fn generous_profile() -> UserProfile {
    UserProfile {
        preferred_budget: 50_000,
    }
}

/// Creates a project directory with config and fixture files
///
/// # Returns
/// The temp directory (cleaned up on drop) and the fixtures path.
pub fn create_fixture_project(policies_json: &str, profile_json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let fixtures = dir.path().join("fixtures");
    fs::create_dir_all(&fixtures).expect("Failed to create fixtures dir");

    fs::write(dir.path().join(".coverwise.toml"), "simulate-latency = false\n")
        .expect("Failed to write config");
    fs::write(fixtures.join("policies.json"), policies_json).expect("Failed to write policies");
    fs::write(fixtures.join("profile.json"), profile_json).expect("Failed to write profile");

    (dir, fixtures)
}

/// A three-policy sample portfolio in fixture JSON form
pub const SAMPLE_POLICIES_JSON: &str = r#"[
  {
    "id": "POL-2001",
    "status": "active",
    "premium": 12000,
    "insurer": "HDFC ERGO",
    "startDate": "2023-06-15",
    "ncb": 25,
    "asset": { "type": "car" },
    "coverageAmount": 450000
  },
  {
    "id": "POL-2002",
    "status": "active",
    "premium": 18000,
    "insurer": "HDFC ERGO",
    "startDate": "2024-11-01",
    "asset": { "type": "health" },
    "coverageAmount": 1000000
  },
  {
    "id": "POL-2003",
    "status": "active",
    "premium": 4000,
    "insurer": "Acko",
    "startDate": "2022-03-20",
    "ncb": 35,
    "asset": { "type": "bike" },
    "coverageAmount": 90000
  },
  {
    "id": "POL-2004",
    "status": "cancelled",
    "premium": 50000,
    "insurer": "Tata AIG",
    "startDate": "2020-01-01",
    "asset": { "type": "home" },
    "coverageAmount": 5000000
  }
]
"#;

/// Matching profile fixture
pub const SAMPLE_PROFILE_JSON: &str = r#"{ "preferredBudget": 45000 }"#;
