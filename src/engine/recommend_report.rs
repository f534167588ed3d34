//! Recommendation list formatting
//!
//! Console output for the ranked recommendation snapshot, grouped by
//! priority tier.

use console::style;

use super::recommend::RecommendationSet;
use super::recommend_types::{Priority, Recommendation};
use crate::fmt::{format_inr, CHECKMARK, MICROSCOPE, SHIELD};

/// Print the ranked recommendation snapshot to the console
///
/// Entries are grouped by priority tier; each shows the reasoning, the
/// benefit, and the illustrative premium (negative premiums are rendered as
/// savings).
pub fn print_recommendations(snapshot: &RecommendationSet) {
    println!(
        "\n{} {} Personalized Recommendations",
        SHIELD,
        style("Portfolio").cyan().bold()
    );

    if snapshot.is_empty() {
        println!(
            "\n{} {} Your portfolio has no open recommendations.",
            CHECKMARK,
            style("All covered!").green().bold()
        );
        return;
    }

    println!(
        "   {} {} suggestions, strongest first",
        style("→").dim(),
        style(snapshot.len()).yellow()
    );

    for priority in [Priority::High, Priority::Medium, Priority::Low] {
        let tier: Vec<&Recommendation> = snapshot
            .items()
            .iter()
            .filter(|r| r.priority == priority)
            .collect();
        if tier.is_empty() {
            continue;
        }

        let label = match priority {
            Priority::High => style("High").red().bold(),
            Priority::Medium => style("Medium").yellow(),
            Priority::Low => style("Low").cyan(),
        };
        println!("\n{} {} priority ({}):", MICROSCOPE, label, tier.len());

        for rec in tier {
            print_recommendation(rec);
        }
    }
}

fn print_recommendation(rec: &Recommendation) {
    println!(
        "\n   {} {} {}",
        style("▸").cyan(),
        style(&rec.title).bold(),
        style(format!("[{}]", rec.id)).dim()
    );
    println!("     {}", style(&rec.description).dim());
    println!("     Why: {}", rec.reasoning);
    println!("     Benefit: {}", rec.potential_benefit);

    if rec.estimated_premium < 0 {
        println!(
            "     Estimated savings: {}/yr",
            style(format_inr(-rec.estimated_premium)).green()
        );
    } else {
        println!(
            "     Estimated premium: {}/yr",
            style(format_inr(rec.estimated_premium)).yellow()
        );
    }

    if let Some(coverage) = rec.suggested_coverage {
        println!(
            "     Suggested cover: {}",
            style(format_inr(coverage as i64)).cyan()
        );
    }
}
