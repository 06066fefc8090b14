//! HTTP request handlers for the statutory deduction engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_complete_salary, get_salary_summary};
use crate::models::SalaryInput;

use super::request::SalaryRequest;
use super::response::{ApiError, ApiErrorResponse, PayslipResponse, SummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(calculate_handler))
        .route("/payroll/summary", post(summary_handler))
        .with_state(state)
}

/// Builds a JSON error response with the given status.
fn error_response(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps a JSON extraction failure to an API error body.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Extracts and validates the request body shared by both endpoints.
fn extract_request(
    payload: Result<Json<SalaryRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<SalaryRequest, Response> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return Err(error_response(StatusCode::BAD_REQUEST, error));
        }
    };

    // Negative salary components are a client error at this boundary
    if let Err(message) = request.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %message,
            "Request validation failed"
        );
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error(message),
        ));
    }

    Ok(request)
}

/// Handler for POST /payroll/calculate endpoint.
///
/// Accepts salary figures and returns the complete deduction breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary calculation request");

    let request = match extract_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let schedule = match state.config().effective_schedule(request.period) {
        Ok(schedule) => schedule,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Schedule lookup failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return error_response(api_error.status, api_error.error);
        }
    };

    // Perform the calculation
    let start_time = Instant::now();
    let input = SalaryInput::from(&request);
    let breakdown = calculate_complete_salary(&input, schedule);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        gross_salary = %breakdown.gross_salary,
        net_salary = %breakdown.net_salary,
        duration_us = duration.as_micros(),
        "Salary calculation completed"
    );

    let response = PayslipResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        schedule_effective_date: schedule.effective_date,
        employee_id: request.employee_id,
        breakdown,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /payroll/summary endpoint.
///
/// Accepts salary figures and returns a payslip-style summary with
/// labelled earnings and deduction lines.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary summary request");

    let request = match extract_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let schedule = match state.config().effective_schedule(request.period) {
        Ok(schedule) => schedule,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Schedule lookup failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return error_response(api_error.status, api_error.error);
        }
    };

    // Perform the calculation
    let start_time = Instant::now();
    let input = SalaryInput::from(&request);
    let summary = get_salary_summary(&input, schedule);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        gross_salary = %summary.gross_salary,
        net_salary = %summary.net_salary,
        duration_us = duration.as_micros(),
        "Salary summary completed"
    );

    let response = SummaryResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        schedule_effective_date: schedule.effective_date,
        employee_id: request.employee_id,
        summary,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
