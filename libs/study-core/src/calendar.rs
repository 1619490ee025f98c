//! Calendar mapping between dates, weekday labels and day offsets.
//!
//! Every date the scheduler creates or compares is a local calendar day. When a
//! day has to be anchored to a wall-clock instant (formatting, conversion to a
//! timestamp) it is anchored at local noon, never at midnight, so that a
//! round-trip through UTC cannot push it onto the neighbouring day. Schedule
//! producers and consumers must both go through this module to agree on that
//! convention.

use chrono::{
    DateTime, Datelike, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime,
    TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Weekday label, Monday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "Segunda")]
    Monday,
    #[serde(rename = "Terça")]
    Tuesday,
    #[serde(rename = "Quarta")]
    Wednesday,
    #[serde(rename = "Quinta")]
    Thursday,
    #[serde(rename = "Sexta")]
    Friday,
    #[serde(rename = "Sábado")]
    Saturday,
    #[serde(rename = "Domingo")]
    Sunday,
}

impl Weekday {
    /// All labels in display order.
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Position in the Monday-first week (0-6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Segunda",
            Self::Tuesday => "Terça",
            Self::Wednesday => "Quarta",
            Self::Thursday => "Quinta",
            Self::Friday => "Sexta",
            Self::Saturday => "Sábado",
            Self::Sunday => "Domingo",
        }
    }

    /// Parse from a label.
    pub fn from_label(label: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.label() == label)
            .ok_or_else(|| ScheduleError::UnknownWeekday(label.to_string()))
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Weekday label for a calendar date.
///
/// Sunday maps to the last slot; every other day is its distance from Monday.
pub fn weekday_label(date: NaiveDate) -> Weekday {
    let weekday = date.weekday();
    let index = if weekday == chrono::Weekday::Sun {
        6
    } else {
        weekday.num_days_from_monday() as usize
    };
    Weekday::ALL[index]
}

/// Calendar-safe day arithmetic.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// The wall-clock instant a calendar day is anchored at.
pub fn local_noon(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default())
}

/// Canonical `YYYY-MM-DD` key used for "due today" and "overdue" comparisons.
pub fn iso_date(date: NaiveDate) -> String {
    local_noon(date).format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` key.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate(value.to_string()))
}

/// Local calendar day of a stored timestamp.
pub fn local_date_of(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

/// UTC instant of local noon on `date`.
pub fn noon_timestamp(date: NaiveDate) -> DateTime<Utc> {
    let noon = local_noon(date);
    match Local.from_local_datetime(&noon) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&noon),
    }
}

/// Study day for a local wall-clock time.
///
/// Before `daily_reset_hour` the study day is still the previous calendar day,
/// so late-night sessions count towards the day they started on.
pub fn adjusted_today(now: NaiveDateTime, daily_reset_hour: u32) -> NaiveDate {
    if now.hour() < daily_reset_hour {
        add_days(now.date(), -1)
    } else {
        now.date()
    }
}

/// Current study day on this machine's clock.
pub fn today(daily_reset_hour: u32) -> NaiveDate {
    adjusted_today(Local::now().naive_local(), daily_reset_hour)
}

/// The Monday-first week containing `today`, one date per label.
pub fn week_dates(today: NaiveDate) -> [(Weekday, NaiveDate); 7] {
    let today_index = weekday_label(today).index() as i64;
    Weekday::ALL.map(|day| (day, add_days(today, day.index() as i64 - today_index)))
}
