//! Recommend command implementation
//!
//! Handles `coverwise recommend`: evaluates the rule battery over the
//! active portfolio and the user profile, then prints the ranked snapshot.

use anyhow::Result;
use console::style;

use super::{open_runtime, with_spinner};
use crate::engine::{print_recommendations, RecommendationEngine};
use crate::fmt::SHIELD;

/// Evaluate and display personalized recommendations
///
/// With `--json`, emits the ranked snapshot as a JSON array to stdout.
pub fn cmd_recommend(json: bool) -> Result<()> {
    let runtime = open_runtime()?;
    let engine = RecommendationEngine::new(runtime.store).with_latency(runtime.latency);

    let show_spinner = !json && runtime.latency.is_enabled();
    let snapshot = with_spinner(show_spinner, "Evaluating recommendations...", || {
        engine.personalized()
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{} {}", SHIELD, style("coverwise recommend").bold());
    print_recommendations(&snapshot);

    if !snapshot.is_empty() {
        println!(
            "\n{} Request a quote with {}",
            style("·").dim(),
            style("coverwise quote <id>").cyan()
        );
    }

    Ok(())
}
