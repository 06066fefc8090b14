//! NHIF contribution calculation functionality.
//!
//! This module calculates the monthly National Hospital Insurance Fund
//! contribution from the 2015 banded table.
//!
//! ## Band Structure
//!
//! **The contribution is a fixed amount per gross-salary band:** the first
//! band whose upper bound the gross salary does not exceed determines the
//! contribution, from 150 at the bottom band to 1,700 for gross salaries of
//! 100,000 and above. No interpolation and no rounding is involved.

use rust_decimal::Decimal;

use crate::config::NhifSchedule;

/// Calculates the monthly NHIF contribution for a gross salary.
///
/// Scans the band table in order and returns the amount of the first band
/// whose upper bound the gross salary is less than or equal to; the
/// open-ended final band catches everything above the table.
///
/// Negative input is treated as zero, which lands in the bottom band.
///
/// # Arguments
///
/// * `gross_salary` - The monthly gross salary
/// * `schedule` - The NHIF band table to apply
///
/// # Returns
///
/// The fixed monthly contribution for the matching band, or zero for an
/// empty table.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_nhif;
/// use payroll_engine::config::NhifSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = NhifSchedule::statutory_2024();
///
/// assert_eq!(calculate_nhif(Decimal::from(4_500), &schedule), Decimal::from(150));
/// assert_eq!(calculate_nhif(Decimal::from(67_000), &schedule), Decimal::from(1_300));
/// assert_eq!(calculate_nhif(Decimal::from(250_000), &schedule), Decimal::from(1_700));
/// ```
pub fn calculate_nhif(gross_salary: Decimal, schedule: &NhifSchedule) -> Decimal {
    let gross = gross_salary.max(Decimal::ZERO);

    schedule
        .bands
        .iter()
        .find(|band| band.upper_bound.is_none_or(|upper| gross <= upper))
        .map(|band| band.amount)
        .unwrap_or(Decimal::ZERO)
}
