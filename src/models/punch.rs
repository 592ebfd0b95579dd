//! Punch model and related types.
//!
//! This module defines the [`PunchRecord`] and [`PunchStatus`] types for
//! representing raw time-clock events as they come out of storage.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The direction of a punch.
///
/// Serialized as the literal strings `"Enter"` and `"Leave"`, which are the
/// values the time-clock stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PunchStatus {
    /// The employee arrived.
    Enter,
    /// The employee left.
    Leave,
}

/// A single Enter or Leave event for an employee.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{PunchRecord, PunchStatus};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let punch = PunchRecord {
///     employee_name: "Jan Novák".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     time: NaiveTime::from_hms_opt(8, 5, 0).unwrap(),
///     status: PunchStatus::Enter,
/// };
/// assert_eq!(punch.minute_of_day(), 485);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchRecord {
    /// The name of the employee who punched.
    pub employee_name: String,
    /// The calendar date of the punch.
    pub date: NaiveDate,
    /// The wall-clock time of the punch (`HH:MM:SS`).
    pub time: NaiveTime,
    /// Whether the employee entered or left.
    pub status: PunchStatus,
}

impl PunchRecord {
    /// Minutes since midnight, ignoring seconds.
    pub fn minute_of_day(&self) -> i64 {
        i64::from(self.time.hour()) * 60 + i64::from(self.time.minute())
    }

    /// The full timestamp of the punch.
    pub fn datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Returns true if this is an Enter punch.
    pub fn is_enter(&self) -> bool {
        self.status == PunchStatus::Enter
    }

    /// Returns true if this is a Leave punch.
    pub fn is_leave(&self) -> bool {
        self.status == PunchStatus::Leave
    }

    /// Checks the fields that typed deserialization cannot.
    ///
    /// Dates and times are already well-formed by construction, so only the
    /// employee name needs checking.
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
