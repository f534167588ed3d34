#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! coverwise library
//!
//! This library provides the core functionality for analyzing an insurance
//! portfolio: stacked discount calculation and personalized coverage
//! recommendations. It can be used programmatically in addition to the CLI
//! interface.
//!
//! # Basic Example
//!
//! Computing savings over an in-memory portfolio:
//!
//! ```
//! use coverwise::engine::SavingsCalculator;
//! use coverwise::model::UserProfile;
//! use coverwise::store::InMemoryPolicyStore;
//!
//! let store = InMemoryPolicyStore::new(Vec::new(), UserProfile::default());
//! let report = SavingsCalculator::new(store).calculate()?;
//!
//! // An empty portfolio degrades gracefully instead of erroring
//! assert_eq!(report.total_savings, 0);
//! assert_eq!(report.savings_percentage, 0.0);
//! assert!(report.breakdown.is_empty());
//! # Ok::<(), coverwise::error::CoverwiseError>(())
//! ```
//!
//! # Advanced Example: Snapshot-based Quoting
//!
//! Recommendations are evaluated into a snapshot the caller holds; quoting
//! and dismissing operate on that snapshot:
//!
//! ```
//! use chrono::NaiveDate;
//! use coverwise::engine::{request_quote, RecommendationEngine};
//! use coverwise::model::UserProfile;
//! use coverwise::store::InMemoryPolicyStore;
//!
//! let store = InMemoryPolicyStore::new(Vec::new(), UserProfile::default());
//! let mut snapshot = RecommendationEngine::new(store).personalized()?;
//!
//! // The empty portfolio fires the health gap rule
//! let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//! let quote = request_quote(&snapshot, "health-gap", as_of)?;
//! assert_eq!(quote.premium, 25_000);
//!
//! // Dismissal touches only this snapshot
//! assert!(snapshot.dismiss("health-gap"));
//! assert!(request_quote(&snapshot, "health-gap", as_of).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file and defaults
pub mod config;
/// Portfolio rule engines: savings and recommendations
pub mod engine;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Simulated network latency
pub mod latency;
/// Portfolio domain types
pub mod model;
/// Policy store abstraction and implementations
pub mod store;
