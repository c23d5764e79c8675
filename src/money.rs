//! Rupee display helpers.
//!
//! Indian digit grouping puts a separator after the last three digits and
//! then after every pair: 1,23,45,678.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Format a rupee amount with Indian digit grouping, e.g. `₹9,50,000.00`
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let s = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    format!("{}₹{}.{}", sign, group_indian(int_part), frac_part)
}

/// Compact rupee amount in crores or lakhs, e.g. `₹1.5 Cr`, `₹9.5 L`
pub fn format_inr_compact(amount: Decimal) -> String {
    let abs = amount.abs();
    if abs >= dec!(10000000) {
        format!("₹{:.1} Cr", amount / dec!(10000000))
    } else if abs >= dec!(100000) {
        format!("₹{:.1} L", amount / dec!(100000))
    } else {
        format!("₹{:.0}", amount)
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_small_amounts() {
        assert_eq!(format_inr(dec!(0)), "₹0.00");
        assert_eq!(format_inr(dec!(999)), "₹999.00");
        assert_eq!(format_inr(dec!(1000)), "₹1,000.00");
    }

    #[test]
    fn grouping_lakh_and_crore() {
        assert_eq!(format_inr(dec!(100000)), "₹1,00,000.00");
        assert_eq!(format_inr(dec!(950000)), "₹9,50,000.00");
        assert_eq!(format_inr(dec!(12345678)), "₹1,23,45,678.00");
        assert_eq!(format_inr(dec!(59950000)), "₹5,99,50,000.00");
    }

    #[test]
    fn fractional_and_negative() {
        assert_eq!(format_inr(dec!(75400.5)), "₹75,400.50");
        assert_eq!(format_inr(dec!(-23400)), "-₹23,400.00");
    }

    #[test]
    fn compact_units() {
        assert_eq!(format_inr_compact(dec!(500)), "₹500");
        assert_eq!(format_inr_compact(dec!(950000)), "₹9.5 L");
        assert_eq!(format_inr_compact(dec!(15000000)), "₹1.5 Cr");
    }
}
