//! HTTP API module for the statutory deduction engine.
//!
//! This module provides the REST API endpoints for calculating Kenyan
//! statutory payroll deductions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SalaryRequest;
pub use response::{ApiError, PayslipResponse, SummaryResponse};
pub use state::AppState;
