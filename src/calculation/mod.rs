//! Calculation logic for the statutory deduction engine.
//!
//! This module contains all the calculation functions for Kenyan payroll
//! deductions, including PAYE income tax with graduated brackets and
//! personal relief, banded NHIF contributions, two-tier NSSF contributions,
//! the Affordable Housing Levy, and the complete gross-to-net salary
//! calculation that composes them.

mod housing_levy;
mod net_salary;
mod nhif;
mod nssf;
mod paye;
mod rounding;

pub use housing_levy::calculate_housing_levy;
pub use net_salary::{calculate_complete_salary, get_salary_summary};
pub use nhif::calculate_nhif;
pub use nssf::calculate_nssf;
pub use paye::{MONTHS_PER_YEAR, annual_tax_before_relief, calculate_paye};
pub use rounding::round_to_shilling;
