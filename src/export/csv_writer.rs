//! CSV writers built on the `csv` crate.

use csv::Writer;

use crate::config::LocaleConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DailyHoursEntry, PairEntry, PunchRecord, PunchStatus, ReportPeriod, placeholder,
};

/// Builds the download file name for an export over `period`.
///
/// # Example
///
/// ```
/// use attendance_engine::export::export_filename;
/// use attendance_engine::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
/// };
/// assert_eq!(
///     export_filename("dochazka_ctvrthod", &period),
///     "dochazka_ctvrthod_2025-02-01_do_2025-02-28.csv"
/// );
/// ```
pub fn export_filename(prefix: &str, period: &ReportPeriod) -> String {
    format!("{}_{}_do_{}.csv", prefix, period.start_date, period.end_date)
}

fn finish(writer: Writer<Vec<u8>>) -> EngineResult<String> {
    let bytes = writer.into_inner().map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}

/// Writes raw punches in chronological order.
///
/// Punches with the same timestamp keep their input order.
pub fn punches_csv(records: &[PunchRecord], locale: &LocaleConfig) -> EngineResult<String> {
    let headers = &locale.punch_headers;
    let labels = &locale.status_labels;

    let mut sorted: Vec<&PunchRecord> = records.iter().collect();
    sorted.sort_by_key(|record| (record.date, record.time));

    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record([&headers.employee, &headers.status, &headers.date, &headers.time])?;

    for record in sorted {
        let status = match record.status {
            PunchStatus::Enter => &labels.enter,
            PunchStatus::Leave => &labels.leave,
        };
        writer.write_record([
            record.employee_name.clone(),
            status.clone(),
            record.date.to_string(),
            record.time.to_string(),
        ])?;
    }

    finish(writer)
}

/// Writes a daily hours report.
pub fn daily_hours_csv(entries: &[DailyHoursEntry], locale: &LocaleConfig) -> EngineResult<String> {
    let headers = &locale.daily_headers;

    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record([
        &headers.employee,
        &headers.date,
        &headers.actual_hours,
        &headers.quarter_hours,
    ])?;

    for entry in entries {
        writer.write_record([
            entry.employee_name.clone(),
            entry.date.to_string(),
            entry.actual_hours.to_string(),
            entry.quarter_hours.to_string(),
        ])?;
    }

    finish(writer)
}

/// Writes a pair report, with `-` in the exit and hour columns of open pairs.
pub fn pairs_csv(entries: &[PairEntry], locale: &LocaleConfig) -> EngineResult<String> {
    let headers = &locale.pair_headers;

    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record([
        &headers.employee,
        &headers.entry_date,
        &headers.entry_time,
        &headers.exit_date,
        &headers.exit_time,
        &headers.actual_hours,
        &headers.quarter_hours,
        &headers.carry_over_minutes,
    ])?;

    for entry in entries {
        writer.write_record([
            entry.employee_name.clone(),
            entry.entry_date.to_string(),
            entry.entry_time.to_string(),
            placeholder::render(&entry.exit_date),
            placeholder::render(&entry.exit_time),
            placeholder::render(&entry.actual_hours),
            placeholder::render(&entry.quarter_hours),
            entry.carry_over_minutes.to_string(),
        ])?;
    }

    finish(writer)
}
