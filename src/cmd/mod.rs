//! Command handlers for coverwise CLI
//!
//! This module contains all command implementations, organized by
//! functionality. Each submodule handles a specific CLI command.

pub mod completions;
pub mod init;
pub mod policies;
pub mod quote;
pub mod recommend;
pub mod savings;

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use policies::cmd_policies;
pub use quote::cmd_quote;
pub use recommend::cmd_recommend;
pub use savings::cmd_savings;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{ConfigFile, ConfigLoader};
use crate::latency::Latency;
use crate::store::JsonPolicyStore;

/// Resolved runtime pieces shared by the portfolio commands
pub struct Runtime {
    /// Loaded configuration (defaults when the file is absent)
    pub config: ConfigFile,
    /// Fixture-backed policy store at the configured directory
    pub store: JsonPolicyStore,
    /// Latency switch derived from the configuration
    pub latency: Latency,
}

/// Load the config from the working directory and open the fixture store
pub fn open_runtime() -> Result<Runtime> {
    let project_root = env::current_dir()?;
    let config = ConfigLoader::load(&project_root)?;

    let fixtures_dir = PathBuf::from(&config.fixtures_dir);
    let store = JsonPolicyStore::new(fixtures_dir);
    let latency = if config.simulate_latency {
        Latency::enabled()
    } else {
        Latency::disabled()
    };

    Ok(Runtime {
        config,
        store,
        latency,
    })
}

/// Run a closure behind a spinner when the work is artificially slow
///
/// The spinner only appears for console output with latency simulation on;
/// JSON output stays clean.
pub fn with_spinner<T>(show: bool, message: &str, work: impl FnOnce() -> T) -> T {
    if !show {
        return work();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = work();
    spinner.finish_and_clear();
    result
}
