//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_daily, aggregate_pairs, next_action, summarize_daily};
use crate::error::EngineError;
use crate::export::{daily_hours_csv, export_filename, pairs_csv, punches_csv};
use crate::models::{DailyReport, PairReport, PunchRecord, ReportPeriod};

use super::request::{NextActionRequest, ReportRequest};
use super::response::{ApiError, ApiErrorResponse, HealthResponse, NextActionResponse};
use super::state::AppState;

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/next-action", post(next_action_handler))
        .route("/reports/daily", post(daily_report_handler))
        .route("/reports/pairs", post(pair_report_handler))
        .route("/export/punches", post(export_punches_handler))
        .route("/export/daily", post(export_daily_handler))
        .route("/export/pairs", post(export_pairs_handler))
        .with_state(state)
}

/// Maps a JSON body rejection to a `400` response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    };

    ApiErrorResponse::bad_request(error).into_response()
}

/// Logs an engine error and turns it into its HTTP response.
fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Resolves a report request's filter and selects the punches it covers.
///
/// `today` anchors the default period when the request names no dates.
fn prepare_report(
    correlation_id: Uuid,
    today: NaiveDate,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<(ReportPeriod, Vec<PunchRecord>), Response> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return Err(rejection_response(correlation_id, rejection)),
    };

    let filter = request
        .filter(today)
        .map_err(|err| engine_error_response(correlation_id, err))?;
    let records = request
        .select_records(&filter)
        .map_err(|err| engine_error_response(correlation_id, err))?;
    info!(
        correlation_id = %correlation_id,
        start_date = %filter.period.start_date,
        end_date = %filter.period.end_date,
        employee_filter = filter.employee.as_deref().unwrap_or(""),
        received = request.records.len(),
        selected = records.len(),
        "Report input selected"
    );

    Ok((filter.period, records))
}

/// Builds a CSV download response.
fn csv_response(filename: String, body: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for POST /next-action endpoint.
///
/// Tells the time-clock whether the employee's button should record an Enter
/// or a Leave.
async fn next_action_handler(
    State(state): State<AppState>,
    payload: Result<Json<NextActionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    if let Err(err) = request.validate() {
        return engine_error_response(correlation_id, err);
    }

    let date = request.date.unwrap_or_else(|| state.today());
    let action = next_action(&request.records, &request.employee_name, date);
    info!(
        correlation_id = %correlation_id,
        employee = %request.employee_name,
        date = %date,
        next_action = ?action,
        "Next action resolved"
    );

    (
        StatusCode::OK,
        Json(NextActionResponse {
            employee_name: request.employee_name,
            date,
            next_action: action,
        }),
    )
        .into_response()
}

/// Handler for POST /reports/daily endpoint.
///
/// Returns per-day worked hours with quarter-hour rounding and per-employee
/// totals.
async fn daily_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily report request");

    let (period, records) = match prepare_report(correlation_id, state.today(), payload) {
        Ok(prepared) => prepared,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let entries = aggregate_daily(&records);
    let totals = summarize_daily(&entries);
    info!(
        correlation_id = %correlation_id,
        entries_count = entries.len(),
        employees_count = totals.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Daily report completed"
    );

    let report = DailyReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period,
        entries,
        totals,
    };
    (StatusCode::OK, Json(report)).into_response()
}

/// Handler for POST /reports/pairs endpoint.
///
/// Returns matched Enter/Leave pairs with quarter-hour rounding.
async fn pair_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pair report request");

    let (period, records) = match prepare_report(correlation_id, state.today(), payload) {
        Ok(prepared) => prepared,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let entries = aggregate_pairs(&records);
    let unmatched = entries.iter().filter(|e| !e.is_complete()).count();
    info!(
        correlation_id = %correlation_id,
        entries_count = entries.len(),
        unmatched_count = unmatched,
        duration_us = start_time.elapsed().as_micros(),
        "Pair report completed"
    );

    let report = PairReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period,
        entries,
    };
    (StatusCode::OK, Json(report)).into_response()
}

/// Handler for POST /export/punches endpoint.
async fn export_punches_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing punch export request");

    let (period, records) = match prepare_report(correlation_id, state.today(), payload) {
        Ok(prepared) => prepared,
        Err(response) => return response,
    };

    let locale = state.locale();
    match punches_csv(&records, locale) {
        Ok(body) => csv_response(
            export_filename(&locale.filename_prefixes.punches, &period),
            body,
        ),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /export/daily endpoint.
async fn export_daily_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily hours export request");

    let (period, records) = match prepare_report(correlation_id, state.today(), payload) {
        Ok(prepared) => prepared,
        Err(response) => return response,
    };

    let locale = state.locale();
    let entries = aggregate_daily(&records);
    match daily_hours_csv(&entries, locale) {
        Ok(body) => csv_response(export_filename(&locale.filename_prefixes.daily, &period), body),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /export/pairs endpoint.
async fn export_pairs_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pair export request");

    let (period, records) = match prepare_report(correlation_id, state.today(), payload) {
        Ok(prepared) => prepared,
        Err(response) => return response,
    };

    let locale = state.locale();
    let entries = aggregate_pairs(&records);
    match pairs_csv(&entries, locale) {
        Ok(body) => csv_response(export_filename(&locale.filename_prefixes.pairs, &period), body),
        Err(err) => engine_error_response(correlation_id, err),
    }
}
