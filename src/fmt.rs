//! Shared formatting utilities for money display and console output

use console::Emoji;

/// Rupee emoji for savings totals
pub const MONEYBAG: Emoji = Emoji("💰", "Rs");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Lightbulb emoji for tips and suggestions
pub const BULB: Emoji = Emoji("💡", "i");

/// Clipboard emoji for report headers
pub const CLIPBOARD: Emoji = Emoji("📋", "~");

/// Shield emoji for coverage items
pub const SHIELD: Emoji = Emoji("🛡️", "#");

/// Magnifier emoji for analysis output
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Format a rupee amount with Indian digit grouping
///
/// Negative amounts render with a leading minus (used for premiums that
/// signal savings).
///
/// # Examples
///
/// ```
/// use coverwise::fmt::format_inr;
///
/// assert_eq!(format_inr(512), "₹512");
/// assert_eq!(format_inr(12_000), "₹12,000");
/// assert_eq!(format_inr(2_500_000), "₹25,00,000");
/// assert_eq!(format_inr(-12_000), "-₹12,000");
/// ```
pub fn format_inr(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();

    if digits.len() <= 3 {
        return format!("{}₹{}", sign, digits);
    }

    // Indian grouping: last three digits, then pairs
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut i = head_bytes.len();
    while i > 0 {
        let start = i.saturating_sub(2);
        groups.push(&head[start..i]);
        i = start;
    }
    groups.reverse();

    format!("{}₹{},{}", sign, groups.join(","), tail)
}

/// Format a percentage with one decimal place
///
/// # Examples
///
/// ```
/// use coverwise::fmt::format_percent;
///
/// assert_eq!(format_percent(8.0), "8.0%");
/// assert_eq!(format_percent(6.55), "6.5%");
/// ```
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate)
}
