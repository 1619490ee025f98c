//! Revision cycle commands.

use chrono::NaiveDate;
use study_core::revision::{self, RevisionItem};
use study_core::ItemId;
use uuid::Uuid;

use super::{CommandError, Result};
use crate::db::{keys, RecordStore};

#[derive(Debug, serde::Serialize)]
pub struct RevisionAgenda {
    pub today: Vec<RevisionItem>,
    pub upcoming: Vec<RevisionItem>,
}

fn load<S: RecordStore>(store: &S, owner_id: &str) -> Result<Vec<RevisionItem>> {
    Ok(store.get_or_default(owner_id, keys::REVISIONS)?)
}

fn save<S: RecordStore>(store: &S, owner_id: &str, items: &[RevisionItem]) -> Result<()> {
    Ok(store.set(owner_id, keys::REVISIONS, &items)?)
}

/// Schedule the four reminders for a study event.
pub fn create_revision_cycle<S: RecordStore>(
    store: &S,
    owner_id: &str,
    studied_on: NaiveDate,
    subject: &str,
    topic: &str,
) -> Result<Vec<RevisionItem>> {
    let (subject, topic) = (subject.trim(), topic.trim());
    if subject.is_empty() || topic.is_empty() {
        return Err(CommandError::InvalidInput(
            "subject and topic are required".to_string(),
        ));
    }

    let cycle = revision::create_cycle(owner_id, studied_on, subject, topic);
    let mut items = load(store, owner_id)?;
    items.extend(cycle.iter().cloned());
    save(store, owner_id, &items)?;

    tracing::info!(owner_id, subject, topic, group = %cycle[0].group_id, "revision cycle created");
    Ok(cycle)
}

pub fn complete_revision<S: RecordStore>(store: &S, owner_id: &str, id: ItemId) -> Result<()> {
    let items = revision::complete(load(store, owner_id)?, id);
    save(store, owner_id, &items)
}

pub fn delete_revision_group<S: RecordStore>(
    store: &S,
    owner_id: &str,
    group_id: Uuid,
) -> Result<()> {
    let items = revision::delete_group(load(store, owner_id)?, group_id);
    save(store, owner_id, &items)
}

pub fn delete_revision<S: RecordStore>(store: &S, owner_id: &str, id: ItemId) -> Result<()> {
    let items = revision::delete_item(load(store, owner_id)?, id);
    save(store, owner_id, &items)
}

/// Reminders due today and those still ahead.
pub fn revision_agenda<S: RecordStore>(
    store: &S,
    owner_id: &str,
    today: NaiveDate,
) -> Result<RevisionAgenda> {
    let items = load(store, owner_id)?;
    Ok(RevisionAgenda {
        today: revision::due_today(&items, today).into_iter().cloned().collect(),
        upcoming: revision::upcoming(&items, today).into_iter().cloned().collect(),
    })
}
