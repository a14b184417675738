//! Display formatting helpers
//!
//! Formatting is display-only: stored prices and descriptions are never
//! mutated by it.

use rust_decimal::Decimal;

/// Format an amount as US dollars with two decimal places.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// Shorten text for card blurbs, appending an ellipsis when it was cut.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut shortened: String = text.chars().take(max_chars).collect();
        shortened.push_str("...");
        shortened
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_usd_pads_to_two_decimals() {
        assert_eq!(format_usd(Decimal::from(10)), "$10.00");
        assert_eq!(format_usd(Decimal::new(95, 1)), "$9.50");
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn format_usd_rounds_long_fractions() {
        assert_eq!(format_usd(Decimal::new(10999, 3)), "$11.00");
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_text("short", 80), "short");
    }

    #[test]
    fn long_text_is_cut_with_an_ellipsis() {
        let text = "a".repeat(100);

        let shortened = truncate_text(&text, 80);

        assert_eq!(shortened.chars().count(), 83);
        assert!(shortened.ends_with("..."));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(10);

        assert_eq!(truncate_text(&text, 10), text);
    }
}
