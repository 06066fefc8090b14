//! Statutory Deduction Engine for Kenyan Payroll
//!
//! This crate calculates the statutory deductions applied to Kenyan monthly
//! salaries (PAYE income tax, NHIF, NSSF, Affordable Housing Levy) and derives
//! complete gross-to-net salary breakdowns from rate tables pinned to an
//! effective date.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
