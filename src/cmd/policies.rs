//! Policies command implementation
//!
//! Handles `coverwise policies`: lists the portfolio as the engines see it.
//! Read-only; the fixture store owns the data.

use anyhow::Result;
use console::style;

use super::{open_runtime, with_spinner};
use crate::fmt::{format_inr, CLIPBOARD};
use crate::model::PolicyStatus;
use crate::store::PolicyStore;

/// List the policy portfolio
///
/// With `--json`, emits the raw policy list to stdout.
pub fn cmd_policies(json: bool) -> Result<()> {
    let runtime = open_runtime()?;

    let show_spinner = !json && runtime.latency.is_enabled();
    let policies = with_spinner(show_spinner, "Loading portfolio...", || {
        runtime.latency.pause(crate::latency::Operation::ListPolicies);
        runtime.store.list()
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&policies)?);
        return Ok(());
    }

    println!("{} {}", CLIPBOARD, style("coverwise policies").bold());

    if policies.is_empty() {
        println!(
            "\n{} No policies yet. Run {} to scaffold sample fixtures.",
            style("·").dim(),
            style("coverwise init").cyan()
        );
        return Ok(());
    }

    let active = policies.iter().filter(|p| p.is_active()).count();
    println!(
        "\n   {} {} policies ({} active)",
        style("→").dim(),
        style(policies.len()).yellow(),
        style(active).green()
    );

    for policy in &policies {
        let status = match policy.status {
            PolicyStatus::Active => style("active").green(),
            PolicyStatus::Expired => style("expired").yellow(),
            PolicyStatus::Cancelled => style("cancelled").red(),
        };
        println!(
            "\n   {} {} {}",
            style("▸").cyan(),
            style(&policy.id).bold(),
            status
        );
        println!(
            "     {:?} with {} since {}",
            policy.asset.kind, policy.insurer, policy.start_date
        );
        println!(
            "     Premium {}/yr, cover {}{}",
            format_inr(policy.premium as i64),
            format_inr(policy.coverage_amount as i64),
            match policy.ncb {
                Some(ncb) => format!(", NCB {}%", ncb),
                None => String::new(),
            }
        );
    }

    Ok(())
}
