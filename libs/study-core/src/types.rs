//! Core types shared by every scheduler.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::{weekday_label, Weekday};
use crate::error::ScheduleError;

/// Identifier of a scheduled item.
pub type ItemId = Uuid;

/// Identifier of a content card, assigned by the content store.
pub type CardId = String;

/// Kind of work a scheduled item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    Lesson,
    Drill,
    SimulatedExam,
    Review,
    Custom,
    ExtraGoal,
}

impl Default for TaskKind {
    fn default() -> Self {
        Self::Custom
    }
}

/// What a scheduled item is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRef {
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl ContentRef {
    pub fn subject(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            topic: None,
        }
    }

    pub fn topic(subject: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            topic: Some(topic.into()),
        }
    }
}

/// When an item is due.
///
/// A dated item is a one-time occurrence. A recurring item comes back every
/// week on its label and is never overdue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "on", rename_all = "snake_case")]
pub enum Due {
    Dated(NaiveDate),
    Recurring(Weekday),
}

impl Due {
    /// Weekday label the item is shown under.
    pub fn weekday(&self) -> Weekday {
        match self {
            Self::Dated(date) => weekday_label(*date),
            Self::Recurring(day) => *day,
        }
    }

    /// Explicit date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Dated(date) => Some(*date),
            Self::Recurring(_) => None,
        }
    }

    /// Whether the item falls on `today`: dated items match on date, recurring
    /// items on weekday label.
    pub fn falls_on(&self, today: NaiveDate) -> bool {
        match self {
            Self::Dated(date) => *date == today,
            Self::Recurring(day) => *day == weekday_label(today),
        }
    }

    /// Whether the due date lies strictly before `today`.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        match self {
            Self::Dated(date) => *date < today,
            Self::Recurring(_) => false,
        }
    }
}

/// A unit of schedulable work owned by one learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledItem {
    pub id: ItemId,
    pub owner_id: String,
    pub content: ContentRef,
    pub kind: TaskKind,
    pub description: String,
    pub due: Due,
    pub completed: bool,
    /// Item this one continues, when continuation linking is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continues_from: Option<ItemId>,
}

impl ScheduledItem {
    /// Create a pending item with a fresh id.
    pub fn new(
        owner_id: impl Into<String>,
        content: ContentRef,
        kind: TaskKind,
        description: impl Into<String>,
        due: Due,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id: owner_id.into(),
            content,
            kind,
            description: description.into(),
            due,
            completed: false,
            continues_from: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}

/// Recall quality reported for a card review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Forgot,
    Hard,
    Good,
    Easy,
}

impl Quality {
    /// Convert to numeric value (0-3).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Forgot => 0,
            Self::Hard => 1,
            Self::Good => 2,
            Self::Easy => 3,
        }
    }

    /// Create from numeric value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Forgot),
            1 => Some(Self::Hard),
            2 => Some(Self::Good),
            3 => Some(Self::Easy),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Quality {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(ScheduleError::InvalidQuality(value))
    }
}

/// Review state of one card for one learner. Absent until the first review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardReviewState {
    pub interval_days: u32,
    pub ease_factor: f64,
    pub repetitions: u32,
    pub next_review: DateTime<Utc>,
}
