//! Request types for the statutory deduction engine API.
//!
//! This module defines the JSON request structure shared by the
//! `/payroll/calculate` and `/payroll/summary` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AllowanceSet, SalaryInput};

/// Request body for the payroll calculation endpoints.
///
/// Contains the salary figures for one employee and month, plus optional
/// metadata that is echoed back in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// Optional employee identifier, echoed back in the response.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The monthly basic salary.
    pub basic_salary: Decimal,
    /// Allowances paid on top of the basic salary.
    #[serde(default)]
    pub allowances: AllowanceSet,
    /// Optional pay period date selecting which deduction schedule applies.
    /// When absent, the latest schedule is used.
    #[serde(default)]
    pub period: Option<NaiveDate>,
}

impl SalaryRequest {
    /// Checks that every salary component is non-negative.
    ///
    /// The calculation itself clamps negative figures to zero, but at the
    /// API boundary a negative salary is a client error and is rejected.
    pub fn validate(&self) -> Result<(), String> {
        let components = [
            ("basic_salary", self.basic_salary),
            ("allowances.housing", self.allowances.housing),
            ("allowances.transport", self.allowances.transport),
            ("allowances.medical", self.allowances.medical),
            ("allowances.other", self.allowances.other),
        ];

        for (field, amount) in components {
            if amount < Decimal::ZERO {
                return Err(format!("{} must not be negative, got {}", field, amount));
            }
        }

        Ok(())
    }
}

impl From<&SalaryRequest> for SalaryInput {
    fn from(req: &SalaryRequest) -> Self {
        SalaryInput {
            basic_salary: req.basic_salary,
            allowances: req.allowances.clone(),
        }
    }
}
