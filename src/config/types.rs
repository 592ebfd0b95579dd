//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

/// Zone the time-clock runs in when none is configured.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Prague;

fn default_timezone() -> Tz {
    DEFAULT_TIMEZONE
}

/// Where the HTTP server listens and which zone its calendar follows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// IANA zone that decides what "today" is.
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
}

impl ServerConfig {
    /// The `host:port` string to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The calendar date at `now` in the configured zone.
    pub fn date_at(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.timezone).date_naive()
    }

    /// Today's date in the configured zone.
    pub fn today(&self) -> NaiveDate {
        self.date_at(Utc::now())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

/// Labels printed for each punch status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusLabels {
    /// Label for an Enter punch.
    pub enter: String,
    /// Label for a Leave punch.
    pub leave: String,
}

/// Column headers of the raw punch export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PunchHeaders {
    /// Employee name column.
    pub employee: String,
    /// Enter/Leave column.
    pub status: String,
    /// Date column.
    pub date: String,
    /// Time column.
    pub time: String,
}

/// Column headers of the daily hours export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DailyHeaders {
    /// Employee name column.
    pub employee: String,
    /// Date column.
    pub date: String,
    /// Unrounded hours column.
    pub actual_hours: String,
    /// Quarter-hour rounded column.
    pub quarter_hours: String,
}

/// Column headers of the pair export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PairHeaders {
    /// Employee name column.
    pub employee: String,
    /// Enter date column.
    pub entry_date: String,
    /// Enter time column.
    pub entry_time: String,
    /// Leave date column.
    pub exit_date: String,
    /// Leave time column.
    pub exit_time: String,
    /// Unrounded hours column.
    pub actual_hours: String,
    /// Quarter-hour rounded column.
    pub quarter_hours: String,
    /// Carry-over minutes column.
    pub carry_over_minutes: String,
}

/// File name prefixes of the CSV downloads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilenamePrefixes {
    /// Raw punch export.
    pub punches: String,
    /// Daily hours export.
    pub daily: String,
    /// Pair export.
    pub pairs: String,
}

/// Locale-specific texts used by the CSV exports.
///
/// The default is the Czech wording the time-clock was deployed with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleConfig {
    /// Labels for Enter and Leave.
    pub status_labels: StatusLabels,
    /// Raw punch export headers.
    pub punch_headers: PunchHeaders,
    /// Daily hours export headers.
    pub daily_headers: DailyHeaders,
    /// Pair export headers.
    pub pair_headers: PairHeaders,
    /// Download file name prefixes.
    pub filename_prefixes: FilenamePrefixes,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            status_labels: StatusLabels {
                enter: "Příchod".to_string(),
                leave: "Odchod".to_string(),
            },
            punch_headers: PunchHeaders {
                employee: "Jméno zaměstnance".to_string(),
                status: "Stav (Příchod/Odchod)".to_string(),
                date: "Datum".to_string(),
                time: "Čas".to_string(),
            },
            daily_headers: DailyHeaders {
                employee: "Jméno".to_string(),
                date: "Datum".to_string(),
                actual_hours: "Počet odpracovaných hodin".to_string(),
                quarter_hours: "Počet na čtvrthodiny".to_string(),
            },
            pair_headers: PairHeaders {
                employee: "Jméno".to_string(),
                entry_date: "Datum příchodu".to_string(),
                entry_time: "Čas příchodu".to_string(),
                exit_date: "Datum odchodu".to_string(),
                exit_time: "Čas odchodu".to_string(),
                actual_hours: "Počet odpracovaných hodin".to_string(),
                quarter_hours: "Počet na čtvrthodiny".to_string(),
                carry_over_minutes: "Přenos (min)".to_string(),
            },
            filename_prefixes: FilenamePrefixes {
                punches: "dochazka_report".to_string(),
                daily: "dochazka_ctvrthod".to_string(),
                pairs: "dochazka_pary".to_string(),
            },
        }
    }
}

/// The complete configuration loaded from the YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Server section.
    pub server: ServerConfig,
    /// Export texts.
    pub locale: LocaleConfig,
}
