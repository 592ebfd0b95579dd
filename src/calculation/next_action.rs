//! Time-clock toggle logic.
//!
//! The time-clock shows a single button per employee. This module decides
//! whether that button records an Enter or a Leave.

use chrono::NaiveDate;

use crate::models::{PunchRecord, PunchStatus};

/// Returns the punch an employee should record next on `date`.
///
/// Only that employee's punches on that date are considered. With none, or
/// when the latest one is a Leave, the next punch is an Enter; otherwise it is
/// a Leave. Punches with equal times keep their input order, so the later one
/// in `records` counts as latest.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::next_action;
/// use attendance_engine::models::{PunchRecord, PunchStatus};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// assert_eq!(next_action(&[], "Jan Novák", today), PunchStatus::Enter);
///
/// let records = vec![PunchRecord {
///     employee_name: "Jan Novák".to_string(),
///     date: today,
///     time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     status: PunchStatus::Enter,
/// }];
/// assert_eq!(next_action(&records, "Jan Novák", today), PunchStatus::Leave);
/// ```
pub fn next_action(records: &[PunchRecord], employee_name: &str, date: NaiveDate) -> PunchStatus {
    let latest = records
        .iter()
        .filter(|record| record.employee_name == employee_name && record.date == date)
        .max_by_key(|record| record.time);

    match latest.map(|record| record.status) {
        Some(PunchStatus::Enter) => PunchStatus::Leave,
        Some(PunchStatus::Leave) | None => PunchStatus::Enter,
    }
}
