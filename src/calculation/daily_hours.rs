//! Daily hours aggregation.
//!
//! This module sums each employee's worked minutes per calendar day and
//! reports them both unrounded and rounded to quarter hours, carrying the
//! rounding error forward from one day to the next.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{DailyHoursEntry, HoursMinutes, PunchRecord, PunchStatus};

use super::quarter_rounding::round_quarter;

/// Sums worked minutes for one day's punches.
///
/// Punches are walked in time order. An Enter opens a span (replacing any span
/// still open), a Leave closes the open span and adds its length, and a Leave
/// with nothing open is ignored. A span never closed contributes nothing.
///
/// Minutes are taken from the hour and minute of each punch; seconds are
/// ignored.
pub fn sum_day_minutes(day_records: &[&PunchRecord]) -> i64 {
    let mut sorted: Vec<&PunchRecord> = day_records.to_vec();
    sorted.sort_by_key(|record| record.time);

    let mut total_minutes = 0;
    let mut open_enter: Option<i64> = None;

    for record in sorted {
        match record.status {
            PunchStatus::Enter => open_enter = Some(record.minute_of_day()),
            PunchStatus::Leave => {
                if let Some(enter_minutes) = open_enter.take() {
                    total_minutes += record.minute_of_day() - enter_minutes;
                }
            }
        }
    }

    total_minutes
}

/// Aggregates punches into per-employee, per-day worked hours.
///
/// For every employee, days are processed in ascending order with a running
/// carry-over that starts at zero:
///
/// 1. The day's raw total is summed with [`sum_day_minutes`].
/// 2. On every day but the last, `total + carry` is rounded with
///    [`round_quarter`]; the rounded value is reported and the remainder
///    becomes the new carry.
/// 3. On the employee's last day the figure is not rounded: `total + carry`
///    is reported as is, clamped at zero.
///
/// `actual_hours` is always the raw day total. The output is sorted by
/// employee name, then date. Empty input yields an empty report.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::aggregate_daily;
/// use attendance_engine::models::{PunchRecord, PunchStatus};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let punch = |date: (i32, u32, u32), time: (u32, u32), status| PunchRecord {
///     employee_name: "Jan Novák".to_string(),
///     date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
///     time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
///     status,
/// };
///
/// let records = vec![
///     punch((2025, 3, 3), (8, 0), PunchStatus::Enter),
///     punch((2025, 3, 3), (10, 5), PunchStatus::Leave),
///     punch((2025, 3, 4), (8, 0), PunchStatus::Enter),
///     punch((2025, 3, 4), (9, 40), PunchStatus::Leave),
/// ];
///
/// let days = aggregate_daily(&records);
/// assert_eq!(days[0].actual_hours.to_string(), "2:05");
/// assert_eq!(days[0].quarter_hours.to_string(), "2:00");
/// // Last day: 1:40 plus 5 carried minutes, not rounded.
/// assert_eq!(days[1].quarter_hours.to_string(), "1:45");
/// ```
pub fn aggregate_daily(records: &[PunchRecord]) -> Vec<DailyHoursEntry> {
    let mut by_employee: BTreeMap<&str, BTreeMap<NaiveDate, Vec<&PunchRecord>>> = BTreeMap::new();
    for record in records {
        by_employee
            .entry(record.employee_name.as_str())
            .or_default()
            .entry(record.date)
            .or_default()
            .push(record);
    }

    let mut result = Vec::new();

    for (employee_name, days) in by_employee {
        let last_index = days.len().saturating_sub(1);
        let mut accumulated_minutes = 0;

        for (index, (date, day_records)) in days.into_iter().enumerate() {
            let total_minutes = sum_day_minutes(&day_records);
            let adjusted_minutes = total_minutes + accumulated_minutes;

            let quarter_minutes = if index == last_index {
                adjusted_minutes.max(0)
            } else {
                let rounding = round_quarter(adjusted_minutes);
                accumulated_minutes = rounding.remainder;
                rounding.rounded_minutes
            };

            result.push(DailyHoursEntry {
                employee_name: employee_name.to_string(),
                date,
                actual_hours: HoursMinutes::new(total_minutes),
                quarter_hours: HoursMinutes::new(quarter_minutes),
            });
        }
    }

    result
}
