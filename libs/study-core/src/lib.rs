//! Scheduling core shared by the study planner applications.
//!
//! Provides:
//! - Calendar mapping between dates, weekday labels and day offsets
//! - Fixed-interval revision cycles (1/7/14/28 days)
//! - Adaptive card scheduling (simplified SM-2)
//! - Task lifecycle: completion, continuation, reschedule
//! - Plan materialization from generated proposals and extra goals
//!
//! Every operation is a pure function over an explicit collection; storage is
//! the caller's concern.

pub mod algorithm;
pub mod calendar;
pub mod error;
pub mod plan;
pub mod revision;
pub mod settings;
pub mod streak;
pub mod tasks;
pub mod types;

pub use algorithm::sm2::Sm2;
pub use algorithm::{due_cards, shuffle_for_study, SpacedRepetitionAlgorithm};
pub use calendar::Weekday;
pub use error::{Result, ScheduleError};
pub use plan::{DailyMessage, ExtraGoalTemplate, Frequency, Plan, PlanProposal};
pub use revision::{RevisionItem, RevisionStage};
pub use settings::Settings;
pub use streak::StudyStreak;
pub use tasks::{
    Click, CompletionIntent, CompletionRequest, DailyProgress, Outcome, TaskLifecycle, Transition,
    Unchanged,
};
pub use types::{CardId, CardReviewState, ContentRef, Due, ItemId, Quality, ScheduledItem, TaskKind};
