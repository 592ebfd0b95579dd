//! Quarter-hour rounding functionality.
//!
//! This module provides the rounding rule shared by the daily and pair
//! aggregators: round a minute count to the nearest quarter hour and hand the
//! rounding error back so it can be carried into the next unit.

/// Length of a quarter hour in minutes.
pub const QUARTER_HOUR_MINUTES: i64 = 15;

/// Largest remainder that still rounds down.
///
/// A remainder of 7 minutes rounds down, 8 minutes rounds up.
pub const ROUND_DOWN_MAX_REMAINDER: i64 = 7;

/// The result of rounding a minute count to a quarter hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterRounding {
    /// The rounded minute count, never negative.
    pub rounded_minutes: i64,
    /// `total - rounded`, the signed carry-over for the next unit.
    pub remainder: i64,
}

/// Rounds a minute count to the nearest quarter hour.
///
/// The remainder modulo 15 is taken as the mathematical modulus, so negative
/// totals (possible once a negative carry-over is added) round the same way as
/// positive ones. The rounded value is clamped at zero and the remainder is
/// computed against the clamped value.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::round_quarter;
///
/// let r = round_quarter(125);
/// assert_eq!(r.rounded_minutes, 120);
/// assert_eq!(r.remainder, 5);
///
/// let r = round_quarter(8);
/// assert_eq!(r.rounded_minutes, 15);
/// assert_eq!(r.remainder, -7);
///
/// let r = round_quarter(-20);
/// assert_eq!(r.rounded_minutes, 0);
/// assert_eq!(r.remainder, -20);
/// ```
pub fn round_quarter(total_minutes: i64) -> QuarterRounding {
    let r = total_minutes.rem_euclid(QUARTER_HOUR_MINUTES);
    let rounded = if r <= ROUND_DOWN_MAX_REMAINDER {
        total_minutes - r
    } else {
        total_minutes + (QUARTER_HOUR_MINUTES - r)
    };
    let rounded_minutes = rounded.max(0);

    QuarterRounding {
        rounded_minutes,
        remainder: total_minutes - rounded_minutes,
    }
}
