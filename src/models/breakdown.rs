//! Salary breakdown models for the payroll deduction engine.
//!
//! This module contains the [`SalaryBreakdown`] type and its associated
//! structures that capture the complete gross-to-net derivation of one
//! monthly salary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AllowanceSet;

/// The four statutory deductions withheld from one monthly salary.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Deductions;
/// use rust_decimal::Decimal;
///
/// let deductions = Deductions {
///     nhif: Decimal::from(1_300),
///     nssf: Decimal::from(2_160),
///     housing_levy: Decimal::from(1_005),
///     paye: Decimal::from(11_534),
/// };
/// assert_eq!(deductions.total(), Decimal::from(15_999));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// NHIF health insurance contribution.
    pub nhif: Decimal,
    /// NSSF pension contribution.
    pub nssf: Decimal,
    /// Affordable Housing Levy.
    pub housing_levy: Decimal,
    /// PAYE income tax.
    pub paye: Decimal,
}

impl Deductions {
    /// Returns the sum of all four deductions.
    pub fn total(&self) -> Decimal {
        self.nhif + self.nssf + self.housing_levy + self.paye
    }
}

/// The complete result of a salary deduction calculation.
///
/// Captures every intermediate figure of the gross-to-net derivation so a
/// payslip can be produced without recomputing anything. The breakdown is
/// an immutable value; producing one has no side effects.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_complete_salary;
/// use payroll_engine::config::DeductionSchedule;
/// use payroll_engine::models::{AllowanceSet, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput {
///     basic_salary: Decimal::from(50_000),
///     allowances: AllowanceSet::default(),
/// };
/// let breakdown = calculate_complete_salary(&input, &DeductionSchedule::default());
///
/// assert_eq!(breakdown.gross_salary, Decimal::from(50_000));
/// assert_eq!(breakdown.net_salary, Decimal::from(39_380));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The basic salary the calculation started from (clamped at zero).
    pub basic_salary: Decimal,
    /// The allowances the calculation started from (clamped at zero).
    pub allowances: AllowanceSet,
    /// Sum of all allowance fields.
    pub total_allowances: Decimal,
    /// Basic salary plus total allowances.
    pub gross_salary: Decimal,
    /// The four statutory deductions.
    pub deductions: Deductions,
    /// Sum of the four deductions.
    pub total_deductions: Decimal,
    /// Gross salary minus total deductions, rounded to the whole shilling.
    pub net_salary: Decimal,
}

impl SalaryBreakdown {
    /// Returns the PAYE base: gross salary minus the NSSF contribution and
    /// the housing levy.
    ///
    /// NHIF is deliberately not deductible from the PAYE base.
    pub fn taxable_income(&self) -> Decimal {
        self.gross_salary - self.deductions.nssf - self.deductions.housing_levy
    }
}
