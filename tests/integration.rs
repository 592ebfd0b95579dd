//! Integration tests for the attendance engine HTTP API.
//!
//! This test suite drives the router end to end:
//! - Daily hours reports (rounding, carry-over, last-day exception)
//! - Pair reports (matching order, missing exits, cross-day cutoff)
//! - Report filters (period, employee)
//! - CSV exports
//! - Next-action lookup
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config =
        ConfigLoader::load_with_env("./config", |_| None).expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
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

    (status, body_bytes.to_vec())
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, bytes) = post(create_router_for_test(), uri, body).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

async fn post_csv(uri: &str, body: Value) -> (StatusCode, String) {
    let (status, bytes) = post(create_router_for_test(), uri, body).await;
    (status, String::from_utf8(bytes).unwrap())
}

fn punch(employee: &str, date: &str, time: &str, status: &str) -> Value {
    json!({
        "employee_name": employee,
        "date": date,
        "time": time,
        "status": status
    })
}

fn march_request(records: Vec<Value>) -> Value {
    json!({
        "start_date": "2025-03-01",
        "end_date": "2025-03-31",
        "records": records
    })
}

fn quarter_hours(result: &Value) -> Vec<String> {
    result["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["quarter_hours"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// SECTION 1: Daily Hours Report
// =============================================================================

#[tokio::test]
async fn test_daily_last_day_is_not_rounded() {
    // 2:05 then 1:40: day 1 rounds to 2:00 carrying 5, day 2 reports 1:45
    let request = march_request(vec![
        punch("Jan Novák", "2025-03-03", "08:00:00", "Enter"),
        punch("Jan Novák", "2025-03-03", "10:05:00", "Leave"),
        punch("Jan Novák", "2025-03-04", "08:00:00", "Enter"),
        punch("Jan Novák", "2025-03-04", "09:40:00", "Leave"),
    ]);

    let (status, result) = post_json("/reports/daily", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(quarter_hours(&result), vec!["2:00", "1:45"]);
    assert_eq!(result["entries"][0]["actual_hours"], "2:05");
    assert_eq!(result["entries"][1]["actual_hours"], "1:40");
}

#[tokio::test]
async fn test_daily_carry_over_telescopes() {
    // 8:07, 8:07, 8:07: rounded 8:00 (+7), 8:15 (-1), last day 8:06
    let mut records = Vec::new();
    for date in ["2025-03-03", "2025-03-04", "2025-03-05"] {
        records.push(punch("Jan Novák", date, "07:00:00", "Enter"));
        records.push(punch("Jan Novák", date, "15:07:00", "Leave"));
    }

    let (status, result) = post_json("/reports/daily", march_request(records)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(quarter_hours(&result), vec!["8:00", "8:15", "8:06"]);
    assert_eq!(result["totals"][0]["actual_minutes"], 3 * 487);
    assert_eq!(result["totals"][0]["quarter_minutes"], 3 * 487);
    assert_eq!(result["totals"][0]["days_worked"], 3);
}

#[tokio::test]
async fn test_daily_multiple_spans_in_one_day() {
    let request = march_request(vec![
        punch("Jan Novák", "2025-03-03", "13:00:00", "Enter"),
        punch("Jan Novák", "2025-03-03", "08:00:00", "Enter"),
        punch("Jan Novák", "2025-03-03", "17:00:00", "Leave"),
        punch("Jan Novák", "2025-03-03", "12:00:00", "Leave"),
    ]);

    let (status, result) = post_json("/reports/daily", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["entries"][0]["actual_hours"], "8:00");
}

#[tokio::test]
async fn test_daily_unbalanced_punches_contribute_nothing() {
    let request = march_request(vec![
        punch("Jan Novák", "2025-03-03", "07:00:00", "Leave"),
        punch("Jan Novák", "2025-03-03", "08:10:00", "Enter"),
    ]);

    let (status, result) = post_json("/reports/daily", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["entries"][0]["actual_hours"], "0:00");
    assert_eq!(result["entries"][0]["quarter_hours"], "0:00");
}

#[tokio::test]
async fn test_daily_sorted_by_employee_then_date() {
    let request = march_request(vec![
        punch("Zora Malá", "2025-03-04", "08:00:00", "Enter"),
        punch("Zora Malá", "2025-03-04", "09:05:00", "Leave"),
        punch("Adam Dvořák", "2025-03-05", "08:00:00", "Enter"),
        punch("Adam Dvořák", "2025-03-05", "09:00:00", "Leave"),
        punch("Adam Dvořák", "2025-03-03", "08:00:00", "Enter"),
        punch("Adam Dvořák", "2025-03-03", "09:00:00", "Leave"),
    ]);

    let (status, result) = post_json("/reports/daily", request).await;

    assert_eq!(status, StatusCode::OK);
    let keys: Vec<(String, String)> = result["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e["employee_name"].as_str().unwrap().to_string(),
                e["date"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        keys,
        vec![
            ("Adam Dvořák".to_string(), "2025-03-03".to_string()),
            ("Adam Dvořák".to_string(), "2025-03-05".to_string()),
            ("Zora Malá".to_string(), "2025-03-04".to_string()),
        ]
    );
    assert_eq!(result["totals"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_daily_totals_decimal_hours() {
    let request = march_request(vec![
        punch("Jan Novák", "2025-03-03", "08:00:00", "Enter"),
        punch("Jan Novák", "2025-03-03", "15:45:00", "Leave"),
    ]);

    let (status, result) = post_json("/reports/daily", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["totals"][0]["quarter_hours_decimal"], "7.75");
}

#[tokio::test]
async fn test_daily_empty_records() {
    let (status, result) = post_json("/reports/daily", march_request(vec![])).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["entries"].as_array().unwrap().is_empty());
    assert!(result["totals"].as_array().unwrap().is_empty());
    assert_eq!(result["period"]["start_date"], "2025-03-01");
}

// =============================================================================
// SECTION 2: Pair Report
// =============================================================================

#[tokio::test]
async fn test_pairs_matched_in_order() {
    let request = march_request(vec![
        punch("Jan Novák", "2025-03-03", "08:00:00", "Enter"),
        punch("Jan Novák", "2025-03-03", "12:00:00", "Leave"),
        punch("Jan Novák", "2025-03-03", "13:00:00", "Enter"),
        punch("Jan Novák", "2025-03-03", "17:00:00", "Leave"),
    ]);

    let (status, result) = post_json("/reports/pairs", request).await;

    assert_eq!(status, StatusCode::OK);
    let entries = result["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["entry_time"], "08:00:00");
    assert_eq!(entries[0]["exit_time"], "12:00:00");
    assert_eq!(entries[0]["actual_hours"], "4:00");
    assert_eq!(entries[1]["entry_time"], "13:00:00");
    assert_eq!(entries[1]["exit_time"], "17:00:00");
    assert_eq!(entries[1]["quarter_hours"], "4:00");
    assert_eq!(entries[1]["carry_over_minutes"], 0);
}

#[tokio::test]
async fn test_pairs_round_the_last_pair() {
    // 2:05 then 1:38: the second pair is 1:43, rounded to 1:45 with carry -2
    let request = march_request(vec![
        punch("Jan Novák", "2025-03-03", "08:00:00", "Enter"),
        punch("Jan Novák", "2025-03-03", "10:05:00", "Leave"),
        punch("Jan Novák", "2025-03-04", "08:00:00", "Enter"),
        punch("Jan Novák", "2025-03-04", "09:38:00", "Leave"),
    ]);

    let (status, result) = post_json("/reports/pairs", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(quarter_hours(&result), vec!["2:00", "1:45"]);
    assert_eq!(result["entries"][0]["carry_over_minutes"], 5);
    assert_eq!(result["entries"][1]["carry_over_minutes"], -2);
}

#[tokio::test]
async fn test_pairs_missing_exit_keeps_carry() {
    let request = march_request(vec![
        punch("Jan Novák", "2025-03-03", "08:00:00", "Enter"),
        punch("Jan Novák", "2025-03-03", "10:05:00", "Leave"),
        punch("Jan Novák", "2025-03-04", "08:10:00", "Enter"),
    ]);

    let (status, result) = post_json("/reports/pairs", request).await;

    assert_eq!(status, StatusCode::OK);
    let open = &result["entries"][1];
    assert_eq!(open["entry_time"], "08:10:00");
    assert_eq!(open["exit_date"], "-");
    assert_eq!(open["exit_time"], "-");
    assert_eq!(open["actual_hours"], "-");
    assert_eq!(open["quarter_hours"], "-");
    assert_eq!(open["carry_over_minutes"], 5);
}

#[tokio::test]
async fn test_pairs_do_not_cross_midnight() {
    let request = march_request(vec![
        punch("Jan Novák", "2025-03-03", "22:00:00", "Enter"),
        punch("Jan Novák", "2025-03-04", "06:00:00", "Leave"),
    ]);

    let (status, result) = post_json("/reports/pairs", request).await;

    assert_eq!(status, StatusCode::OK);
    let entries = result["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["entry_date"], "2025-03-03");
    assert_eq!(entries[0]["exit_date"], "-");
}

#[tokio::test]
async fn test_pairs_grouped_in_order_of_appearance() {
    let request = march_request(vec![
        punch("Zora Malá", "2025-03-03", "08:00:00", "Enter"),
        punch("Adam Dvořák", "2025-03-03", "07:00:00", "Enter"),
        punch("Adam Dvořák", "2025-03-03", "15:00:00", "Leave"),
        punch("Zora Malá", "2025-03-03", "16:00:00", "Leave"),
    ]);

    let (status, result) = post_json("/reports/pairs", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["entries"][0]["employee_name"], "Zora Malá");
    assert_eq!(result["entries"][1]["employee_name"], "Adam Dvořák");
}

// =============================================================================
// SECTION 3: Report Filters
// =============================================================================

#[tokio::test]
async fn test_period_excludes_outside_punches() {
    let request = json!({
        "start_date": "2025-03-04",
        "end_date": "2025-03-04",
        "records": [
            punch("Jan Novák", "2025-03-03", "08:00:00", "Enter"),
            punch("Jan Novák", "2025-03-03", "10:05:00", "Leave"),
            punch("Jan Novák", "2025-03-04", "08:00:00", "Enter"),
            punch("Jan Novák", "2025-03-04", "09:40:00", "Leave"),
        ]
    });

    let (status, result) = post_json("/reports/daily", request).await;

    assert_eq!(status, StatusCode::OK);
    // Without the previous day there is nothing to carry in
    assert_eq!(quarter_hours(&result), vec!["1:40"]);
}

#[tokio::test]
async fn test_employee_filter() {
    let request = json!({
        "start_date": "2025-03-01",
        "end_date": "2025-03-31",
        "employee_filter": "Adam Dvořák",
        "records": [
            punch("Zora Malá", "2025-03-03", "08:00:00", "Enter"),
            punch("Zora Malá", "2025-03-03", "16:00:00", "Leave"),
            punch("Adam Dvořák", "2025-03-03", "07:00:00", "Enter"),
            punch("Adam Dvořák", "2025-03-03", "15:00:00", "Leave"),
        ]
    });

    let (status, result) = post_json("/reports/pairs", request).await;

    assert_eq!(status, StatusCode::OK);
    let entries = result["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["employee_name"], "Adam Dvořák");
}

#[tokio::test]
async fn test_invalid_punch_outside_period_is_ignored() {
    let request = march_request(vec![
        punch("Jan Novák", "2025-03-03", "08:00:00", "Enter"),
        punch("Jan Novák", "2025-03-03", "10:00:00", "Leave"),
        punch("", "2025-01-15", "08:00:00", "Enter"),
    ]);

    let (status, result) = post_json("/reports/daily", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(quarter_hours(&result), vec!["2:00"]);
}

#[tokio::test]
async fn test_invalid_punch_for_other_employee_is_ignored() {
    let request = json!({
        "start_date": "2025-03-01",
        "end_date": "2025-03-31",
        "employee_filter": "Jan Novák",
        "records": [
            punch("Jan Novák", "2025-03-03", "08:00:00", "Enter"),
            punch("Jan Novák", "2025-03-03", "10:00:00", "Leave"),
            punch(" ", "2025-03-03", "08:00:00", "Enter"),
        ]
    });

    let (status, result) = post_json("/reports/pairs", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["entries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_punch_in_period_rejected() {
    let request = march_request(vec![punch("", "2025-03-03", "08:00:00", "Enter")]);

    let (status, result) = post_json("/reports/daily", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_PUNCH");
}

#[tokio::test]
async fn test_empty_employee_filter_means_everyone() {
    let request = json!({
        "start_date": "2025-03-01",
        "end_date": "2025-03-31",
        "employee_filter": "",
        "records": [
            punch("Zora Malá", "2025-03-03", "08:00:00", "Enter"),
            punch("Adam Dvořák", "2025-03-03", "07:00:00", "Enter"),
        ]
    });

    let (status, result) = post_json("/reports/pairs", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["entries"].as_array().unwrap().len(), 2);
}

// =============================================================================
// SECTION 4: CSV Exports
// =============================================================================

#[tokio::test]
async fn test_export_punches_csv() {
    let request = march_request(vec![
        punch("Jan Novák", "2025-03-03", "10:05:00", "Leave"),
        punch("Jan Novák", "2025-03-03", "08:00:00", "Enter"),
    ]);

    let (status, text) = post_csv("/export/punches", request).await;

    assert_eq!(status, StatusCode::OK);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Jméno zaměstnance,Stav (Příchod/Odchod),Datum,Čas");
    assert_eq!(lines[1], "Jan Novák,Příchod,2025-03-03,08:00:00");
    assert_eq!(lines[2], "Jan Novák,Odchod,2025-03-03,10:05:00");
}

#[tokio::test]
async fn test_export_pairs_csv_uses_placeholder() {
    let request = march_request(vec![punch("Jan Novák", "2025-03-03", "08:10:00", "Enter")]);

    let (status, text) = post_csv("/export/pairs", request).await;

    assert_eq!(status, StatusCode::OK);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "Jan Novák,2025-03-03,08:10:00,-,-,-,-,0");
}

#[tokio::test]
async fn test_export_filename_follows_period() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/export/punches")
                .header("Content-Type", "application/json")
                .body(Body::from(march_request(vec![]).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-disposition").unwrap(),
        "attachment; filename=dochazka_report_2025-03-01_do_2025-03-31.csv"
    );
}

// =============================================================================
// SECTION 5: Next Action
// =============================================================================

#[tokio::test]
async fn test_next_action_without_punches_is_enter() {
    let request = json!({
        "employee_name": "Jan Novák",
        "date": "2025-03-03",
        "records": []
    });

    let (status, result) = post_json("/next-action", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["next_action"], "Enter");
}

#[tokio::test]
async fn test_next_action_follows_latest_punch() {
    let request = json!({
        "employee_name": "Jan Novák",
        "date": "2025-03-03",
        "records": [
            punch("Jan Novák", "2025-03-03", "08:00:00", "Enter"),
            punch("Jan Novák", "2025-03-03", "12:00:00", "Leave"),
            punch("Jan Novák", "2025-03-02", "20:00:00", "Enter"),
            punch("Zora Malá", "2025-03-03", "13:00:00", "Enter"),
        ]
    });

    let (status, result) = post_json("/next-action", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["next_action"], "Enter");
}

// =============================================================================
// SECTION 6: Error Cases
// =============================================================================

#[tokio::test]
async fn test_reversed_period_rejected() {
    let request = json!({
        "start_date": "2025-03-31",
        "end_date": "2025-03-01",
        "records": []
    });

    let (status, result) = post_json("/export/daily", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_PERIOD");
}

#[tokio::test]
async fn test_unknown_status_rejected() {
    let request = march_request(vec![punch("Jan Novák", "2025-03-03", "08:00:00", "Break")]);

    let (status, result) = post_json("/reports/pairs", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_malformed_date_rejected() {
    let request = march_request(vec![punch("Jan Novák", "03/03/2025", "08:00:00", "Enter")]);

    let (status, result) = post_json("/reports/daily", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reports/daily")
                .body(Body::from(march_request(vec![]).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let result: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(result["code"], "MISSING_CONTENT_TYPE");
}
