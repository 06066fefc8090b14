//! Monetary rounding for statutory deductions.
//!
//! Statutory deductions are reported in whole shillings. This module
//! provides the single rounding helper used at every boundary where an
//! amount leaves the engine: half-up to the whole shilling.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to the whole shilling, half-up.
///
/// Exactly half a shilling rounds away from zero, matching how the
/// statutory tables are applied in practice.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_to_shilling;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("750.0075").unwrap();
/// assert_eq!(round_to_shilling(amount), Decimal::from(750));
///
/// let half = Decimal::from_str("421.5").unwrap();
/// assert_eq!(round_to_shilling(half), Decimal::from(422));
/// ```
pub fn round_to_shilling(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_below_half_rounds_down() {
        assert_eq!(round_to_shilling(dec("1005.49")), dec("1005"));
        assert_eq!(round_to_shilling(dec("420.4998")), dec("420"));
    }

    #[test]
    fn test_just_below_whole_rounds_up() {
        assert_eq!(round_to_shilling(dec("499.995")), dec("500"));
    }

    #[test]
    fn test_exact_half_rounds_up() {
        assert_eq!(round_to_shilling(dec("0.5")), dec("1"));
        assert_eq!(round_to_shilling(dec("1.5")), dec("2"));
        assert_eq!(round_to_shilling(dec("39380.5")), dec("39381"));
    }

    #[test]
    fn test_whole_amounts_unchanged() {
        assert_eq!(round_to_shilling(dec("0")), dec("0"));
        assert_eq!(round_to_shilling(dec("2160")), dec("2160"));
    }

    #[test]
    fn test_result_has_no_fractional_digits() {
        let rounded = round_to_shilling(dec("1005.000"));
        assert_eq!(rounded.scale(), 0);
    }
}
