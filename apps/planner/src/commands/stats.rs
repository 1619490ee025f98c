//! Study streak commands.

use chrono::NaiveDate;
use study_core::StudyStreak;

use super::Result;
use crate::db::{keys, RecordStore};

/// Current streak.
pub fn get_streak<S: RecordStore>(store: &S, owner_id: &str) -> Result<StudyStreak> {
    Ok(store.get_or_default(owner_id, keys::STREAK)?)
}

/// Count a finished study session towards the streak.
pub fn record_study_session<S: RecordStore>(
    store: &S,
    owner_id: &str,
    today: NaiveDate,
) -> Result<StudyStreak> {
    let streak = get_streak(store, owner_id)?.record_session(today);
    store.set(owner_id, keys::STREAK, &streak)?;
    tracing::info!(owner_id, days = streak.days, "study session recorded");
    Ok(streak)
}
