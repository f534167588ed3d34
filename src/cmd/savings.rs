//! Savings command implementation
//!
//! Handles `coverwise savings`: computes the stacked discount report over
//! the active portfolio, optionally with optimization suggestions.

use anyhow::Result;
use console::style;

use super::{open_runtime, with_spinner};
use crate::engine::{print_savings_report, print_suggestions, SavingsCalculator};
use crate::fmt::MONEYBAG;

/// Compute and display the savings report
///
/// With `--json`, emits the report (and suggestions, when requested) as a
/// single JSON document to stdout.
pub fn cmd_savings(json: bool, suggestions: bool) -> Result<()> {
    let runtime = open_runtime()?;
    let calculator = SavingsCalculator::new(runtime.store)
        .with_two_policy_rate(
            runtime
                .config
                .rates
                .as_ref()
                .and_then(|r| r.two_policy_rate)
                .unwrap_or(crate::engine::savings::TWO_POLICY_RATE_DEFAULT),
        )
        .with_latency(runtime.latency);

    let show_spinner = !json && runtime.latency.is_enabled();

    let report = with_spinner(show_spinner, "Calculating savings...", || {
        calculator.calculate()
    })?;

    let suggestion_list = if suggestions {
        Some(with_spinner(show_spinner, "Scanning for opportunities...", || {
            calculator.optimization_suggestions()
        })?)
    } else {
        None
    };

    if json {
        let payload = match &suggestion_list {
            Some(list) => serde_json::json!({ "report": report, "suggestions": list }),
            None => serde_json::to_value(&report)?,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{} {}", MONEYBAG, style("coverwise savings").bold());
    print_savings_report(&report);
    if let Some(list) = &suggestion_list {
        print_suggestions(list);
    }

    Ok(())
}
