//! PAYE income tax calculation functionality.
//!
//! This module calculates the monthly Pay As You Earn income tax withheld
//! from Kenyan salaries under the Finance Act 2023 bands.
//!
//! ## Band Structure
//!
//! **Annual taxable income is taxed progressively:**
//! - First 288,000: 10%
//! - 288,001 to 388,000: 25%
//! - 388,001 to 6,000,000: 30%
//! - 6,000,001 to 9,600,000: 32.5%
//! - Above 9,600,000: 35%
//!
//! Annual personal relief of 28,800 is subtracted from the gross tax, the
//! result floored at zero, and the monthly figure rounded to the shilling.

use rust_decimal::Decimal;

use crate::config::PayeSchedule;

use super::rounding::round_to_shilling;

/// The number of months a monthly figure is annualized across.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Calculates the annual income tax before personal relief.
///
/// Folds the progressive bracket table: each band contributes its marginal
/// rate applied to the slice of annual income falling inside it. Boundary
/// amounts belong to the lower band.
///
/// # Arguments
///
/// * `annual_income` - The annual taxable income (clamped at zero)
/// * `schedule` - The PAYE table to apply
///
/// # Returns
///
/// The cumulative annual tax across all bands, before relief.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::annual_tax_before_relief;
/// use payroll_engine::config::PayeSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = PayeSchedule::statutory_2024();
///
/// // The 10% band alone: 10% of 288,000
/// assert_eq!(
///     annual_tax_before_relief(Decimal::from(288_000), &schedule),
///     Decimal::from(28_800),
/// );
/// ```
pub fn annual_tax_before_relief(annual_income: Decimal, schedule: &PayeSchedule) -> Decimal {
    let annual_income = annual_income.max(Decimal::ZERO);

    let mut annual_tax = Decimal::ZERO;
    let mut band_floor = Decimal::ZERO;

    for bracket in &schedule.brackets {
        match bracket.annual_upper_bound {
            // Income extends past this band: tax the full band width
            Some(upper) if annual_income > upper => {
                annual_tax += (upper - band_floor) * bracket.rate;
                band_floor = upper;
            }
            // Income ends inside this band (or the band is open-ended)
            _ => {
                annual_tax += (annual_income - band_floor) * bracket.rate;
                break;
            }
        }
    }

    annual_tax
}

/// Calculates the monthly PAYE income tax for a monthly taxable income.
///
/// The monthly income is annualized (× 12), the bracket table folded over
/// it, annual personal relief subtracted (floored at zero), and the result
/// brought back to a monthly figure rounded to the whole shilling.
///
/// Negative input is treated as zero.
///
/// # Arguments
///
/// * `monthly_income` - The monthly taxable income (gross less NSSF and
///   housing levy)
/// * `schedule` - The PAYE table to apply
///
/// # Returns
///
/// The monthly PAYE amount in whole shillings; never negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_paye;
/// use payroll_engine::config::PayeSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = PayeSchedule::statutory_2024();
///
/// // Relief exactly cancels the 10% band at 24,000/month
/// assert_eq!(calculate_paye(Decimal::from(24_000), &schedule), Decimal::ZERO);
///
/// // 63,835/month falls in the 30% band
/// assert_eq!(
///     calculate_paye(Decimal::from(63_835), &schedule),
///     Decimal::from(11_534),
/// );
/// ```
pub fn calculate_paye(monthly_income: Decimal, schedule: &PayeSchedule) -> Decimal {
    let monthly_income = monthly_income.max(Decimal::ZERO);
    let annual_income = monthly_income * MONTHS_PER_YEAR;

    let annual_tax = annual_tax_before_relief(annual_income, schedule);
    let annual_payable = (annual_tax - schedule.annual_personal_relief).max(Decimal::ZERO);

    round_to_shilling(annual_payable / MONTHS_PER_YEAR)
}
