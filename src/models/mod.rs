//! Core data models for the payroll deduction engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod salary;
mod summary;

pub use breakdown::{Deductions, SalaryBreakdown};
pub use salary::{AllowanceSet, SalaryInput};
pub use summary::{DeductionLine, EarningsLine, SalarySummary};
