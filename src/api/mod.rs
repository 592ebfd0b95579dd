//! HTTP API module for the attendance engine.
//!
//! This module provides the REST endpoints for attendance reports, CSV
//! exports and the time-clock's next-action lookup.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{NextActionRequest, ReportRequest};
pub use response::{ApiError, ApiErrorResponse, HealthResponse, NextActionResponse};
pub use state::AppState;
