//! Calculation logic for the attendance engine.
//!
//! This module contains the pure functions that turn raw punches into report
//! rows: the shared quarter-hour rounding rule, the daily aggregator with its
//! day-to-day carry-over, the Enter/Leave pair matcher with its pair-to-pair
//! carry-over, per-employee totals, and the time-clock's next-action toggle.
//!
//! None of these functions perform I/O or fail; callers pass a complete,
//! already-filtered snapshot of punches. Carry-over is recomputed from scratch
//! on every call, so reports over overlapping but different date ranges can
//! disagree at their edges.

mod daily_hours;
mod next_action;
mod pair_matching;
mod quarter_rounding;
mod totals;

pub use daily_hours::{aggregate_daily, sum_day_minutes};
pub use next_action::next_action;
pub use pair_matching::aggregate_pairs;
pub use quarter_rounding::{
    QUARTER_HOUR_MINUTES, QuarterRounding, ROUND_DOWN_MAX_REMAINDER, round_quarter,
};
pub use totals::{minutes_to_decimal_hours, summarize_daily};
