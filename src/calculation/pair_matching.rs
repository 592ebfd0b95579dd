//! Enter/Leave pair matching.
//!
//! This module matches every Enter punch to the first unused Leave on the same
//! day and reports each pair's worked time, rounding to quarter hours with the
//! error carried from one pair to the next.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{HoursMinutes, PairEntry, PunchRecord};

use super::quarter_rounding::round_quarter;

/// Groups punches by employee in order of first appearance.
fn group_by_employee(records: &[PunchRecord]) -> Vec<(&str, Vec<&PunchRecord>)> {
    let mut groups: Vec<(&str, Vec<&PunchRecord>)> = Vec::new();
    let mut index_of: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let name = record.employee_name.as_str();
        let index = *index_of.entry(name).or_insert_with(|| {
            groups.push((name, Vec::new()));
            groups.len() - 1
        });
        groups[index].1.push(record);
    }

    groups
}

/// Finds the first unconsumed Leave after `enter_index` on the Enter's date.
///
/// The search stops at the first punch dated differently from the Enter; pairs
/// never span midnight.
fn find_same_day_leave(
    sorted: &[&PunchRecord],
    enter_index: usize,
    consumed: &[bool],
) -> Option<usize> {
    let enter_date = sorted[enter_index].date;

    for (index, candidate) in sorted.iter().enumerate().skip(enter_index + 1) {
        if candidate.date != enter_date {
            break;
        }
        if candidate.is_leave() && !consumed[index] {
            return Some(index);
        }
    }

    None
}

/// Matches Enter punches to Leave punches and reports each pair.
///
/// Each employee's punches are sorted by date and time, then scanned once.
/// For every Enter:
///
/// - the first not-yet-used Leave later on the same date is taken as its exit;
///   the exact worked minutes of the pair (seconds included, truncated to whole
///   minutes) plus the running carry-over are rounded with [`round_quarter`],
///   and the remainder becomes the new carry-over;
/// - if there is no such Leave, an entry with no exit is emitted and the
///   carry-over is left untouched.
///
/// Every matched pair is rounded, including the employee's last one. Leave
/// punches never produce entries of their own. Employees appear in the order
/// they first occur in `records`.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::aggregate_pairs;
/// use attendance_engine::models::{PunchRecord, PunchStatus};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let punch = |h: u32, m: u32, status| PunchRecord {
///     employee_name: "Jan Novák".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     time: NaiveTime::from_hms_opt(h, m, 0).unwrap(),
///     status,
/// };
///
/// let pairs = aggregate_pairs(&[
///     punch(8, 0, PunchStatus::Enter),
///     punch(12, 5, PunchStatus::Leave),
///     punch(13, 0, PunchStatus::Enter),
/// ]);
///
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[0].quarter_hours.unwrap().to_string(), "4:00");
/// assert_eq!(pairs[0].carry_over_minutes, 5);
/// assert!(pairs[1].exit_time.is_none());
/// assert_eq!(pairs[1].carry_over_minutes, 5);
/// ```
pub fn aggregate_pairs(records: &[PunchRecord]) -> Vec<PairEntry> {
    let mut result = Vec::new();

    for (employee_name, mut emp_records) in group_by_employee(records) {
        emp_records.sort_by_key(|record| (record.date, record.time));

        let mut accumulated_minutes = 0;
        let mut consumed = vec![false; emp_records.len()];

        for (index, enter) in emp_records.iter().enumerate() {
            if !enter.is_enter() {
                continue;
            }

            let Some(leave_index) = find_same_day_leave(&emp_records, index, &consumed) else {
                debug!(
                    employee = employee_name,
                    date = %enter.date,
                    time = %enter.time,
                    "No same-day Leave for Enter"
                );
                result.push(PairEntry {
                    employee_name: employee_name.to_string(),
                    entry_date: enter.date,
                    entry_time: enter.time,
                    exit_date: None,
                    exit_time: None,
                    actual_hours: None,
                    quarter_hours: None,
                    carry_over_minutes: accumulated_minutes,
                });
                continue;
            };

            consumed[leave_index] = true;
            let leave = emp_records[leave_index];

            let worked_minutes = (leave.datetime() - enter.datetime()).num_minutes();
            let rounding = round_quarter(worked_minutes + accumulated_minutes);
            accumulated_minutes = rounding.remainder;

            result.push(PairEntry {
                employee_name: employee_name.to_string(),
                entry_date: enter.date,
                entry_time: enter.time,
                exit_date: Some(leave.date),
                exit_time: Some(leave.time),
                actual_hours: Some(HoursMinutes::new(worked_minutes)),
                quarter_hours: Some(HoursMinutes::new(rounding.rounded_minutes)),
                carry_over_minutes: accumulated_minutes,
            });
        }
    }

    result
}
