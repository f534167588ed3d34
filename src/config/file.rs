//! Configuration file data structures

use serde::{Deserialize, Serialize};

use crate::error::CoverwiseError;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".coverwise.toml";

/// Default fixtures directory relative to the project root
pub const DEFAULT_FIXTURES_DIR: &str = "fixtures";

/// Allowed band for the two-policy discount rate
pub const TWO_POLICY_RATE_RANGE: (f64, f64) = (0.05, 0.08);

/// coverwise configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Directory holding the JSON fixtures
    #[serde(rename = "fixtures-dir", default = "default_fixtures_dir")]
    pub fixtures_dir: String,

    /// Apply per-operation artificial delays, mimicking a remote backend
    #[serde(rename = "simulate-latency", default)]
    pub simulate_latency: bool,

    /// Discount rate overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates: Option<RateSettings>,
}

fn default_fixtures_dir() -> String {
    DEFAULT_FIXTURES_DIR.to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            fixtures_dir: default_fixtures_dir(),
            simulate_latency: false,
            rates: None,
        }
    }
}

/// Discount rate overrides
///
/// The two-policy discount originally floated in a 5-8% band; a fixed
/// configured rate keeps reports reproducible between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateSettings {
    /// Rate applied when exactly two policies are active
    #[serde(rename = "two-policy-rate", skip_serializing_if = "Option::is_none")]
    pub two_policy_rate: Option<f64>,
}

impl RateSettings {
    /// Validate that configured rates stay within their bands
    pub fn validate(&self) -> Result<(), CoverwiseError> {
        let (min, max) = TWO_POLICY_RATE_RANGE;
        if let Some(rate) = self.two_policy_rate {
            if !(min..=max).contains(&rate) {
                return Err(CoverwiseError::RateOutOfRange { rate, min, max });
            }
        }
        Ok(())
    }
}
