//! Commands exposed to front ends.
//!
//! Each command is one read-compute-write cycle: load the learner's whole
//! document from the store, run a pure core operation on it, write the whole
//! document back.

pub mod revision;
pub mod settings;
pub mod stats;
pub mod study;
pub mod tasks;

use thiserror::Error;

use crate::db::DbError;

pub use revision::{
    complete_revision, create_revision_cycle, delete_revision, delete_revision_group,
    revision_agenda, RevisionAgenda,
};
pub use settings::{load_settings, save_settings};
pub use stats::{get_streak, record_study_session};
pub use study::{get_card_state, study_queue, submit_review, ReviewRequest, ReviewResponse};
pub use tasks::{
    apply_generated_plan, clear_plan, click_task, confirm_task, delete_task, init_plan,
    overdue_tasks, reopen_task, reset_plan, today_tasks, ClickResponse, TodayView,
};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Schedule(#[from] study_core::ScheduleError),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CommandError>;
