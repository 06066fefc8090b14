//! Salary input models for the payroll deduction engine.
//!
//! This module contains the types a deduction calculation starts from:
//! the basic salary and the allowance fields paid on top of it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The monthly allowances paid on top of basic salary.
///
/// Every field defaults to zero when absent, so callers only supply the
/// allowances an employee actually receives. Negative fields are clamped
/// to zero before any deduction is computed.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AllowanceSet;
/// use rust_decimal::Decimal;
///
/// let allowances = AllowanceSet {
///     housing: Decimal::from(10_000),
///     transport: Decimal::from(5_000),
///     ..AllowanceSet::default()
/// };
/// assert_eq!(allowances.total(), Decimal::from(15_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AllowanceSet {
    /// Housing allowance.
    #[serde(default)]
    pub housing: Decimal,
    /// Transport allowance.
    #[serde(default)]
    pub transport: Decimal,
    /// Medical allowance.
    #[serde(default)]
    pub medical: Decimal,
    /// Any other allowances, combined.
    #[serde(default)]
    pub other: Decimal,
}

impl AllowanceSet {
    /// Returns the sum of all allowance fields.
    pub fn total(&self) -> Decimal {
        self.housing + self.transport + self.medical + self.other
    }

    /// Returns a copy with every negative field clamped to zero.
    pub fn clamped(&self) -> Self {
        Self {
            housing: self.housing.max(Decimal::ZERO),
            transport: self.transport.max(Decimal::ZERO),
            medical: self.medical.max(Decimal::ZERO),
            other: self.other.max(Decimal::ZERO),
        }
    }
}

/// The salary figures a deduction calculation starts from.
///
/// Owned entirely by the caller and borrowed per calculation; the engine
/// keeps no state between calls.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AllowanceSet, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput {
///     basic_salary: Decimal::from(50_000),
///     allowances: AllowanceSet::default(),
/// };
/// assert_eq!(input.allowances.total(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// The monthly basic salary.
    pub basic_salary: Decimal,
    /// Allowances paid on top of the basic salary.
    #[serde(default)]
    pub allowances: AllowanceSet,
}
