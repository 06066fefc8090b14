//! Affordable Housing Levy calculation functionality.
//!
//! This module calculates the monthly Affordable Housing Levy employee
//! deduction introduced by the Affordable Housing Act 2024. The levy is a
//! flat percentage (1.5%) of gross salary with no bands, caps, or relief.

use rust_decimal::Decimal;

use crate::config::HousingLevySchedule;

use super::rounding::round_to_shilling;

/// Calculates the monthly Affordable Housing Levy for a gross salary.
///
/// The levy is `rate × gross_salary`, rounded to the whole shilling.
/// Negative input is treated as zero.
///
/// # Arguments
///
/// * `gross_salary` - The monthly gross salary
/// * `schedule` - The levy parameters to apply
///
/// # Returns
///
/// The monthly levy in whole shillings.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_housing_levy;
/// use payroll_engine::config::HousingLevySchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = HousingLevySchedule::statutory_2024();
///
/// // 1.5% of 100,000
/// assert_eq!(
///     calculate_housing_levy(Decimal::from(100_000), &schedule),
///     Decimal::from(1_500)
/// );
/// ```
pub fn calculate_housing_levy(gross_salary: Decimal, schedule: &HousingLevySchedule) -> Decimal {
    let gross = gross_salary.max(Decimal::ZERO);

    round_to_shilling(gross * schedule.rate)
}
