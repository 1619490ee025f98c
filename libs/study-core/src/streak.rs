//! Consecutive study-day streak.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::add_days;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyStreak {
    pub days: u32,
    pub last_study_date: Option<NaiveDate>,
}

impl StudyStreak {
    /// Register a study session on `today`.
    ///
    /// A second session on the same day changes nothing; a session the day
    /// after the last one extends the streak; any gap restarts it at one.
    pub fn record_session(self, today: NaiveDate) -> Self {
        match self.last_study_date {
            Some(last) if last == today => self,
            Some(last) if add_days(last, 1) == today => Self {
                days: self.days + 1,
                last_study_date: Some(today),
            },
            _ => Self {
                days: 1,
                last_study_date: Some(today),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_session_starts_streak() {
        let streak = StudyStreak::default().record_session(date(2024, 1, 1));
        assert_eq!(streak.days, 1);
        assert_eq!(streak.last_study_date, Some(date(2024, 1, 1)));
    }

    #[test]
    fn consecutive_days_extend_across_month_end() {
        let streak = StudyStreak::default()
            .record_session(date(2024, 1, 30))
            .record_session(date(2024, 1, 31))
            .record_session(date(2024, 2, 1));
        assert_eq!(streak.days, 3);
    }

    #[test]
    fn same_day_is_counted_once() {
        let once = StudyStreak::default().record_session(date(2024, 1, 1));
        assert_eq!(once.record_session(date(2024, 1, 1)), once);
    }

    #[test]
    fn gap_restarts_streak() {
        let streak = StudyStreak {
            days: 9,
            last_study_date: Some(date(2024, 1, 1)),
        }
        .record_session(date(2024, 1, 3));
        assert_eq!(streak.days, 1);
    }
}
