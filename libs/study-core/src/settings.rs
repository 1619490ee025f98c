//! Per-learner scheduling settings.

use serde::{Deserialize, Serialize};

use crate::algorithm::sm2::Sm2;
use crate::error::{Result, ScheduleError};

/// Scheduling settings stored per learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Hour of day (0-23) when a new study day begins.
    pub daily_reset_hour: u32,
    /// Present due cards in random order.
    pub shuffle_due_cards: bool,
    /// Record `continues_from` on continuation tasks.
    pub link_continuations: bool,
    pub sm2: Sm2,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_reset_hour: 0,
            shuffle_due_cards: true,
            link_continuations: false,
            sm2: Sm2::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.daily_reset_hour > 23 {
            return Err(ScheduleError::InvalidResetHour(self.daily_reset_hour));
        }
        Ok(())
    }
}
