//! Complete salary calculation functionality.
//!
//! This module composes the individual statutory deduction calculations
//! into a full gross-to-net salary breakdown. The calculation order matters:
//!
//! 1. Gross salary = basic salary + all allowances
//! 2. NHIF, NSSF, and the Affordable Housing Levy are assessed on gross
//! 3. Taxable income = gross − NSSF − housing levy (NHIF is not deductible)
//! 4. PAYE is assessed on taxable income
//! 5. Net salary = gross − all four deductions, rounded to the shilling
//!
//! Negative salary components are treated as zero rather than rejected;
//! callers that need to surface validation errors should check inputs
//! before calculating.

use rust_decimal::Decimal;

use crate::config::DeductionSchedule;
use crate::models::{Deductions, SalaryBreakdown, SalaryInput, SalarySummary};

use super::housing_levy::calculate_housing_levy;
use super::nhif::calculate_nhif;
use super::nssf::calculate_nssf;
use super::paye::calculate_paye;
use super::rounding::round_to_shilling;

/// Calculates a complete salary breakdown for one employee and month.
///
/// Applies all four statutory deductions under the given schedule and
/// returns the full breakdown: gross salary, each deduction, the deduction
/// total, and net pay.
///
/// # Arguments
///
/// * `input` - The basic salary and allowances for the month
/// * `schedule` - The deduction schedule to apply
///
/// # Returns
///
/// A [`SalaryBreakdown`] with every component in whole shillings except
/// the salary figures themselves, which keep their input precision.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_complete_salary;
/// use payroll_engine::config::DeductionSchedule;
/// use payroll_engine::models::{AllowanceSet, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput {
///     basic_salary: Decimal::from(50_000),
///     allowances: AllowanceSet {
///         housing: Decimal::from(10_000),
///         transport: Decimal::from(5_000),
///         medical: Decimal::from(2_000),
///         other: Decimal::ZERO,
///     },
/// };
///
/// let breakdown = calculate_complete_salary(&input, &DeductionSchedule::statutory_2024());
///
/// assert_eq!(breakdown.gross_salary, Decimal::from(67_000));
/// assert_eq!(breakdown.total_deductions, Decimal::from(15_999));
/// assert_eq!(breakdown.net_salary, Decimal::from(51_001));
/// ```
pub fn calculate_complete_salary(
    input: &SalaryInput,
    schedule: &DeductionSchedule,
) -> SalaryBreakdown {
    let basic_salary = input.basic_salary.max(Decimal::ZERO);
    let allowances = input.allowances.clamped();

    let total_allowances = allowances.total();
    let gross_salary = basic_salary + total_allowances;

    let nhif = calculate_nhif(gross_salary, &schedule.nhif);
    let nssf = calculate_nssf(gross_salary, &schedule.nssf);
    let housing_levy = calculate_housing_levy(gross_salary, &schedule.housing_levy);

    // PAYE base excludes NHIF: only NSSF and the housing levy reduce
    // taxable income
    let taxable_income = gross_salary - nssf - housing_levy;
    let paye = calculate_paye(taxable_income, &schedule.paye);

    let deductions = Deductions {
        nhif,
        nssf,
        housing_levy,
        paye,
    };
    let total_deductions = deductions.total();
    let net_salary = round_to_shilling(gross_salary - total_deductions);

    SalaryBreakdown {
        basic_salary,
        allowances,
        total_allowances,
        gross_salary,
        deductions,
        total_deductions,
        net_salary,
    }
}

/// Calculates a payslip-style summary for one employee and month.
///
/// Runs the complete salary calculation and reshapes the result into
/// labelled earnings and deduction lines suitable for rendering.
///
/// # Arguments
///
/// * `input` - The basic salary and allowances for the month
/// * `schedule` - The deduction schedule to apply
///
/// # Returns
///
/// A [`SalarySummary`] whose totals agree with the underlying breakdown.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::get_salary_summary;
/// use payroll_engine::config::DeductionSchedule;
/// use payroll_engine::models::SalaryInput;
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput {
///     basic_salary: Decimal::from(50_000),
///     allowances: Default::default(),
/// };
///
/// let summary = get_salary_summary(&input, &DeductionSchedule::statutory_2024());
///
/// assert_eq!(summary.earnings.len(), 5);
/// assert_eq!(summary.deductions.len(), 4);
/// assert_eq!(summary.net_salary, Decimal::from(39_380));
/// ```
pub fn get_salary_summary(input: &SalaryInput, schedule: &DeductionSchedule) -> SalarySummary {
    let breakdown = calculate_complete_salary(input, schedule);

    SalarySummary::from_breakdown(&breakdown)
}
