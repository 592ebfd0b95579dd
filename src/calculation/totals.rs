//! Per-employee totals over a daily report.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{DailyHoursEntry, EmployeeTotals};

/// Minutes in an hour, as a Decimal.
const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Converts minutes to hours, rounded half-up to two decimal places.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::minutes_to_decimal_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(minutes_to_decimal_hours(495), Decimal::from_str("8.25").unwrap());
/// assert_eq!(minutes_to_decimal_hours(20), Decimal::from_str("0.33").unwrap());
/// ```
pub fn minutes_to_decimal_hours(minutes: i64) -> Decimal {
    (Decimal::from(minutes) / MINUTES_PER_HOUR)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sums a daily report per employee, ordered by employee name.
pub fn summarize_daily(entries: &[DailyHoursEntry]) -> Vec<EmployeeTotals> {
    let mut by_employee: BTreeMap<&str, (u32, i64, i64)> = BTreeMap::new();

    for entry in entries {
        let (days, actual, quarter) = by_employee
            .entry(entry.employee_name.as_str())
            .or_insert((0, 0, 0));
        *days += 1;
        *actual += entry.actual_hours.minutes();
        *quarter += entry.quarter_hours.minutes();
    }

    by_employee
        .into_iter()
        .map(
            |(employee_name, (days_worked, actual_minutes, quarter_minutes))| EmployeeTotals {
                employee_name: employee_name.to_string(),
                days_worked,
                actual_minutes,
                quarter_minutes,
                quarter_hours_decimal: minutes_to_decimal_hours(quarter_minutes),
            },
        )
        .collect()
}
