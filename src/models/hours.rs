//! Hour-and-minute durations as shown on attendance reports.
//!
//! Reports display worked time as `H:MM`, with unbounded hours and
//! zero-padded minutes. [`HoursMinutes`] carries the underlying minute count
//! and renders or parses that format. Pair reports print `-` where a value is
//! missing; the [`placeholder`] serde helpers handle that convention.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// A duration in whole minutes, formatted as `H:MM`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::HoursMinutes;
///
/// assert_eq!(HoursMinutes::new(0).to_string(), "0:00");
/// assert_eq!(HoursMinutes::new(65).to_string(), "1:05");
/// assert_eq!("8:15".parse::<HoursMinutes>().unwrap().minutes(), 495);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HoursMinutes(i64);

impl HoursMinutes {
    /// Wraps a minute count.
    pub const fn new(minutes: i64) -> Self {
        Self(minutes)
    }

    /// The minute count.
    pub const fn minutes(self) -> i64 {
        self.0
    }
}

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0.div_euclid(60), self.0.rem_euclid(60))
    }
}

impl FromStr for HoursMinutes {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidHours {
            value: s.to_string(),
        };

        let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
        if hours.is_empty() || minutes.len() != 2 {
            return Err(invalid());
        }
        if !hours.bytes().all(|b| b.is_ascii_digit()) || !minutes.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let hours: i64 = hours.parse().map_err(|_| invalid())?;
        let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
        if minutes >= 60 {
            return Err(invalid());
        }

        Ok(Self(hours * 60 + minutes))
    }
}

impl Serialize for HoursMinutes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HoursMinutes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Serde helpers for optional report cells rendered as `-` when absent.
pub mod placeholder {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer};

    /// The text printed in place of a missing value.
    pub const MISSING: &str = "-";

    /// Renders an optional value, or [`MISSING`].
    pub fn render<T: Display>(value: &Option<T>) -> String {
        match value {
            Some(v) => v.to_string(),
            None => MISSING.to_string(),
        }
    }

    /// Serializes `None` as `-` and `Some(v)` through its `Display`.
    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.serialize_str(&render(value))
    }

    /// Deserializes `-` as `None` and anything else through `FromStr`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if text == MISSING {
            return Ok(None);
        }
        text.parse().map(Some).map_err(serde::de::Error::custom)
    }
}
