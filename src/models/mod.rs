//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod hours;
mod punch;
mod report;
mod report_period;

pub use hours::{HoursMinutes, placeholder};
pub use punch::{PunchRecord, PunchStatus};
pub use report::{DailyHoursEntry, DailyReport, EmployeeTotals, PairEntry, PairReport};
pub use report_period::{ReportFilter, ReportPeriod, filter_records};
