//! Request types for the attendance engine API.
//!
//! This module defines the JSON request structures for the report, export and
//! next-action endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PunchRecord, ReportFilter, ReportPeriod, filter_records};

/// Request body for the `/reports/*` and `/export/*` endpoints.
///
/// Carries the punches to report on together with the admin page's filter
/// fields. When either date is missing the report covers the previous
/// calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// First day to include.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day to include.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Restricts the report to one employee when set and non-empty.
    #[serde(default)]
    pub employee_filter: Option<String>,
    /// The punches to report on, in any order.
    pub records: Vec<PunchRecord>,
}

impl ReportRequest {
    /// Resolves the filter, defaulting to the month before `today`.
    pub fn filter(&self, today: NaiveDate) -> EngineResult<ReportFilter> {
        let period = match (self.start_date, self.end_date) {
            (Some(start_date), Some(end_date)) => ReportPeriod::new(start_date, end_date)?,
            _ => ReportPeriod::previous_month(today),
        };

        Ok(ReportFilter {
            period,
            employee: self.employee_filter.clone(),
        })
    }

    /// Selects the punches `filter` covers and checks them.
    ///
    /// Punches the filter drops are never validated, so a bad row outside the
    /// report does not reject it.
    pub fn select_records(&self, filter: &ReportFilter) -> EngineResult<Vec<PunchRecord>> {
        let records = filter_records(&self.records, filter);
        records.iter().try_for_each(PunchRecord::validate)?;
        Ok(records)
    }
}

/// Request body for the `/next-action` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextActionRequest {
    /// The employee at the time-clock.
    pub employee_name: String,
    /// The day to decide for; today when omitted.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The employee's punches (others are ignored).
    #[serde(default)]
    pub records: Vec<PunchRecord>,
}

impl NextActionRequest {
    /// Checks that an employee was named.
    pub fn validate(&self) -> EngineResult<()> {
        if self.employee_name.trim().is_empty() {
            return Err(EngineError::InvalidPunch {
                field: "employee_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
