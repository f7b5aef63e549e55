//! Display helpers shared by the reply formatters.

use rust_decimal::{Decimal, RoundingStrategy};

/// Direction marker for a 24h percent change
pub fn change_indicator(change: Decimal) -> &'static str {
    if change > Decimal::ZERO {
        "📈"
    } else if change < Decimal::ZERO {
        "📉"
    } else {
        "➡️"
    }
}

/// Format a USD amount with thousands separators and two decimal places
pub fn format_usd(amount: Decimal) -> String {
    // Display with a precision truncates, so round explicitly first
    let raw = format!("{:.2}", round_half_up(amount, 2));
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));
    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

/// Format a percent change with an explicit sign and two decimal places
pub fn format_signed_pct(change: Decimal) -> String {
    let raw = format!("{:.2}", round_half_up(change, 2));
    if raw.starts_with('-') {
        raw
    } else {
        format!("+{}", raw)
    }
}

/// Round to `dp` decimal places, midpoints away from zero.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_usd_groups_thousands() {
        assert_eq!(format_usd(dec("43250.1")), "43,250.10");
        assert_eq!(format_usd(dec("1234567.891")), "1,234,567.89");
        assert_eq!(format_usd(dec("0.01")), "0.01");
        assert_eq!(format_usd(dec("999")), "999.00");
        assert_eq!(format_usd(dec("1000")), "1,000.00");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(dec("-1234.5")), "-1,234.50");
    }

    #[test]
    fn test_format_usd_rounds_not_truncates() {
        assert_eq!(format_usd(dec("2.345")), "2.35");
        assert_eq!(format_usd(dec("2.344")), "2.34");
        assert_eq!(format_usd(dec("-2.345")), "-2.35");
        // Rounding can carry across the grouping boundary
        assert_eq!(format_usd(dec("999.995")), "1,000.00");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(dec("1.23456789"), 4).to_string(), "1.2346");
        assert_eq!(round_half_up(dec("1.23455"), 4).to_string(), "1.2346");
        assert_eq!(round_half_up(dec("-1.23455"), 4).to_string(), "-1.2346");
    }

    #[test]
    fn test_format_signed_pct() {
        assert_eq!(format_signed_pct(dec("2.345")), "+2.35");
        assert_eq!(format_signed_pct(dec("-1.2")), "-1.20");
        assert_eq!(format_signed_pct(Decimal::ZERO), "+0.00");
    }

    #[test]
    fn test_change_indicator() {
        assert_eq!(change_indicator(dec("0.01")), "📈");
        assert_eq!(change_indicator(dec("-0.01")), "📉");
        // Zero is neutral, not up or down
        assert_eq!(change_indicator(Decimal::ZERO), "➡️");
    }
}
