//! Error types for study-core.

use thiserror::Error;

/// Result type alias using ScheduleError.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Contract violations rejected at the boundary of the scheduling core.
///
/// The scheduling algorithms themselves are total; these errors only arise
/// when converting caller input (raw ratings, date strings, labels, plan
/// offsets) into the core's types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid quality rating {0}: expected 0-3")]
    InvalidQuality(u8),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unknown weekday label '{0}'")]
    UnknownWeekday(String),

    #[error("invalid daily reset hour {0}: expected 0-23")]
    InvalidResetHour(u32),

    #[error("day offset {0} is beyond the planning horizon")]
    InvalidOffset(u32),
}
