//! Payslip summary models for the payroll deduction engine.
//!
//! This module contains the [`SalarySummary`] type: a salary breakdown
//! reshaped into the labeled line items a payslip is printed from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalaryBreakdown;

/// A single earnings line on a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsLine {
    /// The label shown on the payslip (e.g., "Housing Allowance").
    pub name: String,
    /// The amount for this line.
    pub amount: Decimal,
}

/// A single deduction line on a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// The short name shown on the payslip (e.g., "NHIF").
    pub name: String,
    /// The full human-readable description of the deduction.
    pub description: String,
    /// The amount withheld for this line.
    pub amount: Decimal,
}

/// A salary breakdown reshaped into payslip line items.
///
/// The earnings list always carries five lines (basic salary plus the four
/// allowance fields, zero or not) and the deductions list always carries
/// four, so payslips line up across employees. Totals pass through from the
/// breakdown unchanged.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_complete_salary;
/// use payroll_engine::config::DeductionSchedule;
/// use payroll_engine::models::{AllowanceSet, SalaryInput, SalarySummary};
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput {
///     basic_salary: Decimal::from(50_000),
///     allowances: AllowanceSet::default(),
/// };
/// let breakdown = calculate_complete_salary(&input, &DeductionSchedule::default());
/// let summary = SalarySummary::from_breakdown(&breakdown);
///
/// assert_eq!(summary.earnings.len(), 5);
/// assert_eq!(summary.deductions.len(), 4);
/// assert_eq!(summary.net_salary, breakdown.net_salary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySummary {
    /// Earnings lines in payslip order.
    pub earnings: Vec<EarningsLine>,
    /// Deduction lines in payslip order.
    pub deductions: Vec<DeductionLine>,
    /// Gross salary, unchanged from the breakdown.
    pub gross_salary: Decimal,
    /// Total deductions, unchanged from the breakdown.
    pub total_deductions: Decimal,
    /// Net salary, unchanged from the breakdown.
    pub net_salary: Decimal,
}

impl SalarySummary {
    /// Builds a payslip summary from a salary breakdown.
    ///
    /// Pure relabeling: no amount is recomputed, so the summary can never
    /// disagree with the breakdown it came from.
    pub fn from_breakdown(breakdown: &SalaryBreakdown) -> Self {
        let earnings = vec![
            EarningsLine {
                name: "Basic Salary".to_string(),
                amount: breakdown.basic_salary,
            },
            EarningsLine {
                name: "Housing Allowance".to_string(),
                amount: breakdown.allowances.housing,
            },
            EarningsLine {
                name: "Transport Allowance".to_string(),
                amount: breakdown.allowances.transport,
            },
            EarningsLine {
                name: "Medical Allowance".to_string(),
                amount: breakdown.allowances.medical,
            },
            EarningsLine {
                name: "Other Allowances".to_string(),
                amount: breakdown.allowances.other,
            },
        ];

        let deductions = vec![
            DeductionLine {
                name: "NHIF".to_string(),
                description: "National Hospital Insurance Fund".to_string(),
                amount: breakdown.deductions.nhif,
            },
            DeductionLine {
                name: "NSSF".to_string(),
                description: "National Social Security Fund".to_string(),
                amount: breakdown.deductions.nssf,
            },
            DeductionLine {
                name: "Housing Levy".to_string(),
                description: "Affordable Housing Levy".to_string(),
                amount: breakdown.deductions.housing_levy,
            },
            DeductionLine {
                name: "PAYE".to_string(),
                description: "Pay As You Earn income tax".to_string(),
                amount: breakdown.deductions.paye,
            },
        ];

        Self {
            earnings,
            deductions,
            gross_salary: breakdown.gross_salary,
            total_deductions: breakdown.total_deductions,
            net_salary: breakdown.net_salary,
        }
    }
}

impl From<&SalaryBreakdown> for SalarySummary {
    fn from(breakdown: &SalaryBreakdown) -> Self {
        Self::from_breakdown(breakdown)
    }
}
