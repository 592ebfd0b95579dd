//! Report models for the attendance engine.
//!
//! This module contains the per-day and per-pair report rows produced by the
//! aggregators, the per-employee totals, and the envelopes returned to API
//! callers.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::hours::placeholder;
use super::{HoursMinutes, ReportPeriod};

/// Worked time for one employee on one calendar day.
///
/// `actual_hours` is the raw sum of that day's Enter/Leave spans;
/// `quarter_hours` is the figure reported for payroll after quarter-hour
/// rounding with carry-over from earlier days.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{DailyHoursEntry, HoursMinutes};
/// use chrono::NaiveDate;
///
/// let entry = DailyHoursEntry {
///     employee_name: "Jan Novák".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     actual_hours: HoursMinutes::new(500),
///     quarter_hours: HoursMinutes::new(495),
/// };
/// assert_eq!(entry.actual_hours.to_string(), "8:20");
/// assert_eq!(entry.quarter_hours.to_string(), "8:15");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHoursEntry {
    /// The employee this row belongs to.
    pub employee_name: String,
    /// The calendar day.
    pub date: NaiveDate,
    /// Unrounded worked time.
    pub actual_hours: HoursMinutes,
    /// Worked time after quarter-hour rounding and carry-over.
    pub quarter_hours: HoursMinutes,
}

/// One matched (or unmatched) Enter/Leave pair.
///
/// When no same-day Leave was found for the Enter, the exit fields and both
/// hour figures are `None`, serialized as `"-"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairEntry {
    /// The employee this row belongs to.
    pub employee_name: String,
    /// Date of the Enter punch.
    pub entry_date: NaiveDate,
    /// Time of the Enter punch.
    pub entry_time: NaiveTime,
    /// Date of the matched Leave punch.
    #[serde(with = "placeholder")]
    pub exit_date: Option<NaiveDate>,
    /// Time of the matched Leave punch.
    #[serde(with = "placeholder")]
    pub exit_time: Option<NaiveTime>,
    /// Exact worked time of the pair.
    #[serde(with = "placeholder")]
    pub actual_hours: Option<HoursMinutes>,
    /// Worked time after quarter-hour rounding and carry-over.
    #[serde(with = "placeholder")]
    pub quarter_hours: Option<HoursMinutes>,
    /// Signed minutes carried into the next pair.
    pub carry_over_minutes: i64,
}

impl PairEntry {
    /// Returns true if a Leave was matched to this Enter.
    pub fn is_complete(&self) -> bool {
        self.exit_date.is_some()
    }
}

/// Per-employee sums over a daily report.
///
/// # Example
///
/// ```
/// use attendance_engine::models::EmployeeTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = EmployeeTotals {
///     employee_name: "Jan Novák".to_string(),
///     days_worked: 2,
///     actual_minutes: 994,
///     quarter_minutes: 994,
///     quarter_hours_decimal: Decimal::from_str("16.57").unwrap(),
/// };
/// assert_eq!(totals.days_worked, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTotals {
    /// The employee these totals belong to.
    pub employee_name: String,
    /// Number of days with at least one punch in the report.
    pub days_worked: u32,
    /// Sum of unrounded worked minutes.
    pub actual_minutes: i64,
    /// Sum of reported (rounded) minutes.
    pub quarter_minutes: i64,
    /// Reported time in decimal hours, two places, for payroll entry.
    pub quarter_hours_decimal: Decimal,
}

/// The complete result of a daily hours report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The dates the report covers.
    pub period: ReportPeriod,
    /// One row per employee and day, ordered by employee then date.
    pub entries: Vec<DailyHoursEntry>,
    /// One row per employee, ordered by name.
    pub totals: Vec<EmployeeTotals>,
}

/// The complete result of an Enter/Leave pair report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The dates the report covers.
    pub period: ReportPeriod,
    /// One row per Enter punch, grouped by employee.
    pub entries: Vec<PairEntry>,
}
