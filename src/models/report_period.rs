//! Report period and filter models.
//!
//! This module contains the [`ReportPeriod`] and [`ReportFilter`] types used to
//! select which punches a report is computed from.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::PunchRecord;

/// An inclusive range of calendar dates a report covers.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())); // start date
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap())); // end date
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())); // after
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// The first day of the report (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the report (inclusive).
    pub end_date: NaiveDate,
}

impl ReportPeriod {
    /// Builds a period, rejecting one that ends before it starts.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidPeriod {
                start_date,
                end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// The whole calendar month before the one containing `today`.
    ///
    /// This is the window the admin report shows when no dates are given.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::ReportPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = ReportPeriod::previous_month(NaiveDate::from_ymd_opt(2025, 3, 17).unwrap());
    /// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    /// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    /// ```
    pub fn previous_month(today: NaiveDate) -> Self {
        // Day 1 always exists, and the day before it is the previous month's last day.
        let first_of_current = today - Duration::days(i64::from(today.day0()));
        let end_date = first_of_current - Duration::days(1);
        let start_date = end_date - Duration::days(i64::from(end_date.day0()));
        Self {
            start_date,
            end_date,
        }
    }

    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Selects the punches a report is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    /// The dates to include.
    pub period: ReportPeriod,
    /// Restricts the report to one employee when set and non-empty.
    #[serde(default)]
    pub employee: Option<String>,
}

impl ReportFilter {
    /// Returns true if the punch belongs in the report.
    pub fn matches(&self, record: &PunchRecord) -> bool {
        if !self.period.contains_date(record.date) {
            return false;
        }
        match self.employee.as_deref() {
            Some(name) if !name.is_empty() => record.employee_name == name,
            _ => true,
        }
    }
}

/// Keeps the punches that fall inside the filter, preserving input order.
pub fn filter_records(records: &[PunchRecord], filter: &ReportFilter) -> Vec<PunchRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}
