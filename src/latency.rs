//! Simulated network latency
//!
//! The services front an in-memory store but mimic remote calls, so each
//! operation carries a fixed artificial delay. Simulation is off by default;
//! library consumers and tests run at full speed, and the CLI opts in via
//! `.coverwise.toml`.

use std::thread;
use std::time::Duration;

/// Service operation with a fixed simulated delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Fetch the full policy list from the store
    ListPolicies,
    /// Evaluate the recommendation battery
    Recommend,
    /// Remove a recommendation from a snapshot
    Dismiss,
    /// Synthesize a quote for a recommendation
    RequestQuote,
}

impl Operation {
    /// Delay applied when simulation is enabled
    pub fn delay(self) -> Duration {
        match self {
            Self::ListPolicies => Duration::from_millis(350),
            Self::Recommend => Duration::from_millis(400),
            Self::Dismiss => Duration::from_millis(200),
            Self::RequestQuote => Duration::from_millis(500),
        }
    }
}

/// Switch for the artificial per-operation delay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    /// Latency simulation turned on
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Latency simulation turned off (the default)
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Whether simulation is active
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Block for the operation's delay when simulation is enabled
    pub fn pause(&self, op: Operation) {
        if self.enabled {
            thread::sleep(op.delay());
        }
    }
}
