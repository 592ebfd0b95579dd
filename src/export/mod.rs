//! CSV export of punches and reports.
//!
//! Each writer returns the complete CSV body as a `String`. Column headers and
//! status labels come from the configured [`LocaleConfig`](crate::config::LocaleConfig).

mod csv_writer;

pub use csv_writer::{daily_hours_csv, export_filename, pairs_csv, punches_csv};
