//! NSSF contribution calculation functionality.
//!
//! This module calculates the monthly National Social Security Fund
//! employee contribution under the NSSF Act 2013 two-tier structure.
//!
//! ## Tier Structure
//!
//! **Pensionable earnings are split at the tier limits:**
//! - Tier I: earnings up to the lower limit (7,000)
//! - Tier II: earnings between the lower and upper limits (7,000 to 36,000)
//!
//! Both tiers contribute at the same rate (6%), so the contribution caps at
//! 2,160 once gross salary reaches the upper limit.

use rust_decimal::Decimal;

use crate::config::NssfSchedule;

use super::rounding::round_to_shilling;

/// Calculates the monthly NSSF employee contribution for a gross salary.
///
/// Earnings up to the tier I limit contribute at the schedule rate;
/// earnings between the tier I and tier II limits contribute at the same
/// rate; earnings above the tier II limit contribute nothing. The two tier
/// amounts are summed and rounded to the whole shilling.
///
/// Negative input is treated as zero.
///
/// # Arguments
///
/// * `gross_salary` - The monthly gross salary
/// * `schedule` - The NSSF parameters to apply
///
/// # Returns
///
/// The monthly contribution in whole shillings, capped at
/// `rate × tier_2_limit`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_nssf;
/// use payroll_engine::config::NssfSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = NssfSchedule::statutory_2024();
///
/// // 6% of 7,000: tier I fully used, no tier II earnings
/// assert_eq!(calculate_nssf(Decimal::from(7_000), &schedule), Decimal::from(420));
///
/// // At and beyond the upper limit the contribution is capped
/// assert_eq!(calculate_nssf(Decimal::from(36_000), &schedule), Decimal::from(2_160));
/// assert_eq!(calculate_nssf(Decimal::from(50_000), &schedule), Decimal::from(2_160));
/// ```
pub fn calculate_nssf(gross_salary: Decimal, schedule: &NssfSchedule) -> Decimal {
    let gross = gross_salary.max(Decimal::ZERO);

    // Tier I covers earnings up to the lower limit
    let tier_1_earnings = gross.min(schedule.tier_1_limit);

    // Tier II covers earnings between the lower and upper limits
    let tier_2_earnings = (gross - schedule.tier_1_limit)
        .max(Decimal::ZERO)
        .min(schedule.tier_2_limit - schedule.tier_1_limit);

    let tier_1 = tier_1_earnings * schedule.rate;
    let tier_2 = tier_2_earnings * schedule.rate;

    round_to_shilling(tier_1 + tier_2)
}
