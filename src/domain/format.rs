//! Display formatting for prices, weights and dates.

use chrono::{DateTime, Utc};

/// Formats a rupee amount the way the en-IN locale does, without decimals.
///
/// The last three digits form one group and the rest are grouped in pairs:
/// `123456.6` becomes `"₹1,23,457"`.
///
/// # Examples
///
/// ```
/// use dimoss_catalog::domain::format_inr;
///
/// assert_eq!(format_inr(999.0), "₹999");
/// assert_eq!(format_inr(58250.0), "₹58,250");
/// assert_eq!(format_inr(12345678.0), "₹1,23,45,678");
/// ```
#[must_use]
pub fn format_inr(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = amount.max(0.0).round() as u64;
    let digits = rounded.to_string();

    if digits.len() <= 3 {
        return format!("₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("₹{},{tail}", groups.join(","))
}

/// Formats a weight in grams, e.g. `"3.12g"`.
#[must_use]
pub fn format_weight(grams: f64) -> String {
    format!("{grams}g")
}

/// Formats a creation date as `"12 Mar 2024"`, or `"N/A"` when absent.
#[must_use]
pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    date.map_or_else(|| "N/A".to_string(), |d| d.format("%-d %b %Y").to_string())
}
