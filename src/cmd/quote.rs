//! Quote command implementation
//!
//! Handles `coverwise quote <id>`: recomputes the recommendation snapshot
//! and synthesizes a placeholder quote with a 30-day validity window.

use anyhow::Result;
use chrono::Utc;
use console::style;

use super::{open_runtime, with_spinner};
use crate::engine::RecommendationEngine;
use crate::fmt::{format_inr, CHECKMARK, CLIPBOARD};

/// Request a quote for a recommendation id
///
/// The id must appear in a freshly evaluated snapshot; ids from earlier
/// sessions may have stopped firing as the portfolio changed, which surfaces
/// as a not-found error.
pub fn cmd_quote(id: &str, json: bool) -> Result<()> {
    let runtime = open_runtime()?;
    let engine = RecommendationEngine::new(runtime.store).with_latency(runtime.latency);

    let show_spinner = !json && runtime.latency.is_enabled();
    let as_of = Utc::now().date_naive();
    let quote = with_spinner(show_spinner, "Preparing your quote...", || {
        engine.request_quote(id, as_of)
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    println!("{} {}", CLIPBOARD, style("coverwise quote").bold());
    println!(
        "\n{} Quote ready for {}",
        CHECKMARK,
        style(&quote.recommendation_id).cyan().bold()
    );
    println!(
        "   {} Insurer: {}",
        style("→").dim(),
        style(&quote.insurer).bold()
    );
    if quote.premium < 0 {
        println!(
            "   {} Estimated savings: {}/yr",
            style("→").dim(),
            style(format_inr(-quote.premium)).green()
        );
    } else {
        println!(
            "   {} Premium: {}/yr",
            style("→").dim(),
            style(format_inr(quote.premium)).yellow()
        );
    }
    if let Some(coverage) = quote.coverage {
        println!(
            "   {} Cover: {}",
            style("→").dim(),
            style(format_inr(coverage as i64)).cyan()
        );
    }
    println!(
        "   {} Valid until: {}",
        style("→").dim(),
        style(quote.valid_until).bold()
    );

    println!("\n   Included:");
    for feature in &quote.features {
        println!("   {} {}", style("•").dim(), feature);
    }

    Ok(())
}
