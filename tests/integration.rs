//! Comprehensive integration tests for the statutory deduction engine.
//!
//! This test suite covers all calculation scenarios including:
//! - Complete salary calculation via the HTTP API
//! - Deduction boundary behavior (PAYE, NHIF, NSSF, housing levy)
//! - Payslip summary formatting
//! - Deduction schedule selection by pay period
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{create_router, AppState};
use payroll_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/ke_statutory").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    let d = Decimal::from_str(s).unwrap();
    // Use normalize to remove trailing zeros
    d.normalize().to_string()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    post_json(router, "/payroll/calculate", body).await
}

async fn post_summary(router: Router, body: Value) -> (StatusCode, Value) {
    post_json(router, "/payroll/summary", body).await
}

fn create_request(
    basic_salary: &str,
    housing: &str,
    transport: &str,
    medical: &str,
    other: &str,
) -> Value {
    json!({
        "employee_id": "emp_001",
        "basic_salary": basic_salary,
        "allowances": {
            "housing": housing,
            "transport": transport,
            "medical": medical,
            "other": other
        }
    })
}

fn basic_only_request(basic_salary: &str) -> Value {
    json!({
        "basic_salary": basic_salary
    })
}

fn assert_gross_salary(result: &Value, expected: &str) {
    let actual = result["breakdown"]["gross_salary"].as_str().unwrap();
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected gross_salary {}, got {}",
        expected,
        actual
    );
}

fn assert_net_salary(result: &Value, expected: &str) {
    let actual = result["breakdown"]["net_salary"].as_str().unwrap();
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected net_salary {}, got {}",
        expected,
        actual
    );
}

fn assert_deduction(result: &Value, name: &str, expected: &str) {
    let actual = result["breakdown"]["deductions"][name].as_str().unwrap();
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        name,
        expected,
        actual
    );
}

// =============================================================================
// SECTION 1: Complete Salary Calculation Tests - 7 tests
// =============================================================================

#[tokio::test]
async fn test_complete_salary_with_allowances() {
    // Basic 50,000 + allowances 17,000 = gross 67,000
    // NHIF 1,300 + NSSF 2,160 + levy 1,005 + PAYE 11,534 = 15,999
    let router = create_router_for_test();
    let request = create_request("50000", "10000", "5000", "2000", "0");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_gross_salary(&result, "67000");
    assert_deduction(&result, "nhif", "1300");
    assert_deduction(&result, "nssf", "2160");
    assert_deduction(&result, "housing_levy", "1005");
    assert_deduction(&result, "paye", "11534");
    assert_eq!(
        normalize_decimal(result["breakdown"]["total_deductions"].as_str().unwrap()),
        "15999"
    );
    assert_net_salary(&result, "51001");
}

#[tokio::test]
async fn test_complete_salary_basic_only() {
    // Basic 50,000, no allowances
    // NHIF 1,200 + NSSF 2,160 + levy 750 + PAYE 6,510 = 10,620
    let router = create_router_for_test();
    let request = basic_only_request("50000");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_gross_salary(&result, "50000");
    assert_deduction(&result, "nhif", "1200");
    assert_deduction(&result, "nssf", "2160");
    assert_deduction(&result, "housing_levy", "750");
    assert_deduction(&result, "paye", "6510");
    assert_net_salary(&result, "39380");
}

#[tokio::test]
async fn test_zero_salary_still_attracts_nhif() {
    // Zero gross salary sits in the bottom NHIF band
    let router = create_router_for_test();
    let request = basic_only_request("0");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_gross_salary(&result, "0");
    assert_deduction(&result, "nhif", "150");
    assert_deduction(&result, "nssf", "0");
    assert_deduction(&result, "housing_levy", "0");
    assert_deduction(&result, "paye", "0");
    assert_net_salary(&result, "-150");
}

#[tokio::test]
async fn test_high_earner_top_bracket() {
    // Basic 1,000,000
    // NHIF 1,700 + NSSF 2,160 + levy 15,000 + PAYE 303,877 = 322,737
    let router = create_router_for_test();
    let request = basic_only_request("1000000");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_deduction(&result, "nhif", "1700");
    assert_deduction(&result, "nssf", "2160");
    assert_deduction(&result, "housing_levy", "15000");
    assert_deduction(&result, "paye", "303877");
    assert_net_salary(&result, "677263");
}

#[tokio::test]
async fn test_fractional_basic_salary() {
    // Basic 50,000.50: net before rounding is 39,380.50, rounds up
    let router = create_router_for_test();
    let request = basic_only_request("50000.50");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_gross_salary(&result, "50000.50");
    assert_deduction(&result, "paye", "6510");
    assert_net_salary(&result, "39381");
}

#[tokio::test]
async fn test_missing_allowance_fields_default_to_zero() {
    // Only the housing allowance is supplied
    let router = create_router_for_test();
    let request = json!({
        "basic_salary": "50000",
        "allowances": {
            "housing": "17000"
        }
    });

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_gross_salary(&result, "67000");
    assert_eq!(
        normalize_decimal(result["breakdown"]["total_allowances"].as_str().unwrap()),
        "17000"
    );
    assert_net_salary(&result, "51001");
}

#[tokio::test]
async fn test_low_income_pays_no_paye() {
    // Basic 20,000: taxable 18,500 is fully absorbed by personal relief
    // NHIF 750 + NSSF 1,200 + levy 300 + PAYE 0 = 2,250
    let router = create_router_for_test();
    let request = basic_only_request("20000");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_deduction(&result, "nhif", "750");
    assert_deduction(&result, "nssf", "1200");
    assert_deduction(&result, "housing_levy", "300");
    assert_deduction(&result, "paye", "0");
    assert_net_salary(&result, "17750");
}

// =============================================================================
// SECTION 2: Deduction Boundary Tests - 5 tests
// =============================================================================

#[tokio::test]
async fn test_nhif_bottom_band_boundary() {
    // 5,999 is the last salary in the bottom band; 6,000 moves up a band
    let (_, result_low) = post_calculate(create_router_for_test(), basic_only_request("5999")).await;
    let (_, result_high) =
        post_calculate(create_router_for_test(), basic_only_request("6000")).await;

    assert_deduction(&result_low, "nhif", "150");
    assert_deduction(&result_high, "nhif", "300");
}

#[tokio::test]
async fn test_nhif_top_band_boundary() {
    // 99,999 is still in the penultimate band; 100,000 enters the open band
    let (_, result_low) =
        post_calculate(create_router_for_test(), basic_only_request("99999")).await;
    let (_, result_high) =
        post_calculate(create_router_for_test(), basic_only_request("100000")).await;

    assert_deduction(&result_low, "nhif", "1600");
    assert_deduction(&result_high, "nhif", "1700");
}

#[tokio::test]
async fn test_nssf_contribution_caps() {
    // NSSF reaches its cap at the upper earnings limit and stays there
    let (_, result_at_limit) =
        post_calculate(create_router_for_test(), basic_only_request("36000")).await;
    let (_, result_above) =
        post_calculate(create_router_for_test(), basic_only_request("500000")).await;

    assert_deduction(&result_at_limit, "nssf", "2160");
    assert_deduction(&result_above, "nssf", "2160");
}

#[tokio::test]
async fn test_housing_levy_rounds_to_shilling() {
    // 1.5% of 33,333 = 499.995 rounds up; 1.5% of 33,367 = 500.505 rounds up
    let (_, result_low) =
        post_calculate(create_router_for_test(), basic_only_request("33333")).await;
    let (_, result_high) =
        post_calculate(create_router_for_test(), basic_only_request("33367")).await;

    assert_deduction(&result_low, "housing_levy", "500");
    assert_deduction(&result_high, "housing_levy", "501");
}

#[tokio::test]
async fn test_paye_zero_at_relief_threshold() {
    // Basic 24,000: taxable 22,200 stays under the relief threshold
    let router = create_router_for_test();
    let request = basic_only_request("24000");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_deduction(&result, "paye", "0");
    assert_deduction(&result, "nssf", "1440");
    assert_deduction(&result, "housing_levy", "360");
}

// =============================================================================
// SECTION 3: Salary Summary Tests - 4 tests
// =============================================================================

#[tokio::test]
async fn test_summary_earnings_lines() {
    let router = create_router_for_test();
    let request = create_request("50000", "10000", "5000", "2000", "0");

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);

    let earnings = result["summary"]["earnings"].as_array().unwrap();
    assert_eq!(earnings.len(), 5);
    assert_eq!(earnings[0]["name"], "Basic Salary");
    assert_eq!(normalize_decimal(earnings[0]["amount"].as_str().unwrap()), "50000");
    assert_eq!(earnings[1]["name"], "Housing Allowance");
    assert_eq!(normalize_decimal(earnings[1]["amount"].as_str().unwrap()), "10000");
    assert_eq!(earnings[2]["name"], "Transport Allowance");
    assert_eq!(earnings[3]["name"], "Medical Allowance");
    assert_eq!(earnings[4]["name"], "Other Allowances");
}

#[tokio::test]
async fn test_summary_deduction_lines() {
    let router = create_router_for_test();
    let request = create_request("50000", "10000", "5000", "2000", "0");

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);

    let deductions = result["summary"]["deductions"].as_array().unwrap();
    assert_eq!(deductions.len(), 4);
    assert_eq!(deductions[0]["name"], "NHIF");
    assert!(deductions[0]["description"]
        .as_str()
        .unwrap()
        .contains("National Hospital Insurance Fund"));
    assert_eq!(normalize_decimal(deductions[0]["amount"].as_str().unwrap()), "1300");
    assert_eq!(deductions[1]["name"], "NSSF");
    assert_eq!(deductions[2]["name"], "Housing Levy");
    assert_eq!(deductions[3]["name"], "PAYE");
    assert_eq!(normalize_decimal(deductions[3]["amount"].as_str().unwrap()), "11534");
}

#[tokio::test]
async fn test_summary_totals_match_calculation() {
    // The summary endpoint must not diverge from the calculation endpoint
    let request = create_request("85000", "12000", "6000", "3000", "1500");

    let (_, breakdown_result) =
        post_calculate(create_router_for_test(), request.clone()).await;
    let (_, summary_result) = post_summary(create_router_for_test(), request).await;

    let breakdown_net = decimal(breakdown_result["breakdown"]["net_salary"].as_str().unwrap());
    let summary_net = decimal(summary_result["summary"]["net_salary"].as_str().unwrap());
    assert_eq!(breakdown_net, summary_net);

    let breakdown_gross = decimal(breakdown_result["breakdown"]["gross_salary"].as_str().unwrap());
    let summary_gross = decimal(summary_result["summary"]["gross_salary"].as_str().unwrap());
    assert_eq!(breakdown_gross, summary_gross);

    // Earnings lines must sum to the gross salary
    let earnings = summary_result["summary"]["earnings"].as_array().unwrap();
    let earnings_total: Decimal = earnings
        .iter()
        .map(|line| decimal(line["amount"].as_str().unwrap()))
        .sum();
    assert_eq!(earnings_total, summary_gross);
}

#[tokio::test]
async fn test_summary_keeps_zero_allowance_lines() {
    // Zero-amount allowance lines stay in the summary
    let router = create_router_for_test();
    let request = basic_only_request("50000");

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);

    let earnings = result["summary"]["earnings"].as_array().unwrap();
    assert_eq!(earnings.len(), 5);
    assert_eq!(normalize_decimal(earnings[1]["amount"].as_str().unwrap()), "0");
    assert_eq!(normalize_decimal(earnings[4]["amount"].as_str().unwrap()), "0");
}

// =============================================================================
// SECTION 4: Schedule Selection Tests - 3 tests
// =============================================================================

#[tokio::test]
async fn test_period_selects_effective_schedule() {
    let router = create_router_for_test();
    let mut request = basic_only_request("50000");
    request["period"] = json!("2024-06-01");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["schedule_effective_date"], "2024-02-01");
}

#[tokio::test]
async fn test_missing_period_uses_latest_schedule() {
    let router = create_router_for_test();
    let request = basic_only_request("50000");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["schedule_effective_date"], "2024-02-01");
}

#[tokio::test]
async fn test_period_before_first_schedule_rejected() {
    let router = create_router_for_test();
    let mut request = basic_only_request("50000");
    request["period"] = json!("2020-01-01");

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "SCHEDULE_NOT_FOUND");
    assert!(error["message"].as_str().unwrap().contains("2020-01-01"));
}

// =============================================================================
// SECTION 5: Error Cases Tests - 6 tests
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_basic_salary() {
    let router = create_router_for_test();

    let body = json!({
        "employee_id": "emp_001",
        "allowances": {
            "housing": "10000"
        }
    });

    let (status, error) = post_calculate(router, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_negative_basic_salary() {
    let router = create_router_for_test();

    let (status, error) = post_calculate(router, basic_only_request("-5000")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("basic_salary"));
}

#[tokio::test]
async fn test_error_negative_allowance() {
    let router = create_router_for_test();
    let request = create_request("50000", "10000", "5000", "-2000", "0");

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("allowances.medical"));
}

#[tokio::test]
async fn test_error_invalid_decimal_string() {
    let router = create_router_for_test();

    let (status, error) = post_calculate(router, basic_only_request("not-a-number")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_content_type() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/calculate")
                .body(Body::from(basic_only_request("50000").to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}

// =============================================================================
// SECTION 6: Response Envelope Tests - 3 tests
// =============================================================================

#[tokio::test]
async fn test_result_contains_all_required_fields() {
    let router = create_router_for_test();
    let request = create_request("50000", "10000", "5000", "2000", "0");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);

    // Verify top-level fields
    assert!(result["calculation_id"].is_string());
    assert!(result["timestamp"].is_string());
    assert!(result["engine_version"].is_string());
    assert!(result["schedule_effective_date"].is_string());
    assert!(result["employee_id"].is_string());

    // Verify the breakdown
    let breakdown = &result["breakdown"];
    assert!(breakdown["basic_salary"].is_string());
    assert!(breakdown["total_allowances"].is_string());
    assert!(breakdown["gross_salary"].is_string());
    assert!(breakdown["total_deductions"].is_string());
    assert!(breakdown["net_salary"].is_string());

    // Verify allowances and deductions objects
    assert!(breakdown["allowances"]["housing"].is_string());
    assert!(breakdown["deductions"]["nhif"].is_string());
    assert!(breakdown["deductions"]["nssf"].is_string());
    assert!(breakdown["deductions"]["housing_levy"].is_string());
    assert!(breakdown["deductions"]["paye"].is_string());
}

#[tokio::test]
async fn test_employee_id_omitted_when_not_given() {
    let router = create_router_for_test();
    let request = basic_only_request("50000");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result.get("employee_id").is_none());
}

#[tokio::test]
async fn test_identical_requests_produce_identical_breakdowns() {
    let request = create_request("62500", "8000", "4000", "1500", "500");

    let (_, first) = post_calculate(create_router_for_test(), request.clone()).await;
    let (_, second) = post_calculate(create_router_for_test(), request).await;

    // Breakdowns are deterministic; only the envelope identifiers differ
    assert_eq!(first["breakdown"], second["breakdown"]);
    assert_ne!(first["calculation_id"], second["calculation_id"]);
}
