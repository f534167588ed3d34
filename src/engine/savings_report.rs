//! Savings report formatting
//!
//! Console output formatting for the stacked savings report and the
//! optimization suggestions.

use console::style;

use super::savings_types::{OptimizationSuggestion, SavingsReport};
use crate::fmt::{format_inr, BULB, MONEYBAG, SPARKLES};

/// Print the formatted savings report to the console
///
/// Displays:
/// - Total savings and the effective percentage of premium
/// - Breakdown lines ordered by amount
/// - One optimization tip
pub fn print_savings_report(report: &SavingsReport) {
    println!(
        "\n{} {} Savings Report",
        MONEYBAG,
        style("Portfolio").cyan().bold()
    );
    println!(
        "   {} Active policies: {}",
        style("→").dim(),
        style(report.policy_count).yellow()
    );
    println!(
        "   {} Total savings: {} ({:.1}% of premium)",
        style("→").dim(),
        style(format_inr(report.total_savings as i64)).green().bold(),
        report.savings_percentage
    );

    if report.breakdown.is_empty() {
        println!(
            "\n{} No discounts apply yet.",
            style("·").dim()
        );
    } else {
        println!(
            "\n{} {} Discount Lines",
            SPARKLES,
            style(report.breakdown.len()).yellow().bold()
        );
        for line in &report.breakdown {
            println!(
                "\n   {} {}",
                style("▸").cyan(),
                style(&line.name).bold()
            );
            println!("     {}", style(&line.description).dim());
            println!(
                "     Saves {} ({}%)",
                style(format_inr(line.amount as i64)).green(),
                line.percentage
            );
        }
    }

    println!("\n{} {}", BULB, style(&report.tip).italic());
}

/// Print optimization suggestions to the console
pub fn print_suggestions(suggestions: &[OptimizationSuggestion]) {
    if suggestions.is_empty() {
        println!(
            "\n{} {} Portfolio already earns its best discount tiers.",
            SPARKLES,
            style("Nice!").green().bold()
        );
        return;
    }

    println!(
        "\n{} {} Optimization Opportunities",
        BULB,
        style(suggestions.len()).yellow().bold()
    );
    for suggestion in suggestions {
        println!(
            "\n   {} {}",
            style("▸").cyan(),
            style(&suggestion.title).bold()
        );
        println!("     {}", style(&suggestion.description).dim());
        println!(
            "     Potential savings: {}",
            style(format_inr(suggestion.potential_savings as i64)).green()
        );
    }
}
