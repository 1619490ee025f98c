//! Fixed-interval revision cycles.
//!
//! One study event produces four review reminders, one day, one week, two
//! weeks and four weeks after the study date. The four share a group id so the
//! whole cycle can be removed at once.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::add_days;
use crate::types::{ContentRef, ItemId, TaskKind};

/// Offset of a reminder from its study date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RevisionStage {
    OneDay,
    OneWeek,
    TwoWeeks,
    FourWeeks,
}

impl RevisionStage {
    /// Stages in generation order.
    pub const ALL: [RevisionStage; 4] = [
        Self::OneDay,
        Self::OneWeek,
        Self::TwoWeeks,
        Self::FourWeeks,
    ];

    pub fn days(self) -> u32 {
        match self {
            Self::OneDay => 1,
            Self::OneWeek => 7,
            Self::TwoWeeks => 14,
            Self::FourWeeks => 28,
        }
    }
}

impl From<RevisionStage> for u32 {
    fn from(stage: RevisionStage) -> Self {
        stage.days()
    }
}

impl TryFrom<u32> for RevisionStage {
    type Error = String;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.days() == days)
            .ok_or_else(|| format!("invalid revision stage {days}: expected 1, 7, 14 or 28"))
    }
}

/// One reminder of a revision cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionItem {
    pub id: ItemId,
    pub group_id: Uuid,
    pub owner_id: String,
    pub content: ContentRef,
    pub studied_on: NaiveDate,
    pub scheduled_date: NaiveDate,
    pub stage: RevisionStage,
    pub completed: bool,
}

impl RevisionItem {
    pub fn kind(&self) -> TaskKind {
        TaskKind::Review
    }
}

/// Generate the four reminders for one study event.
///
/// Subject and topic are not validated; callers reject empty input first.
pub fn create_cycle(
    owner_id: &str,
    studied_on: NaiveDate,
    subject: &str,
    topic: &str,
) -> Vec<RevisionItem> {
    let group_id = Uuid::new_v4();
    RevisionStage::ALL
        .into_iter()
        .map(|stage| RevisionItem {
            id: Uuid::new_v4(),
            group_id,
            owner_id: owner_id.to_string(),
            content: ContentRef::topic(subject, topic),
            studied_on,
            scheduled_date: add_days(studied_on, stage.days() as i64),
            stage,
            completed: false,
        })
        .collect()
}

/// Mark exactly one reminder as done. Siblings are untouched; an unknown id
/// leaves the collection as it was.
pub fn complete(mut items: Vec<RevisionItem>, id: ItemId) -> Vec<RevisionItem> {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => item.completed = true,
        None => tracing::debug!(%id, "complete: revision not found"),
    }
    items
}

/// Remove every reminder of a cycle, completed or not.
pub fn delete_group(mut items: Vec<RevisionItem>, group_id: Uuid) -> Vec<RevisionItem> {
    items.retain(|item| item.group_id != group_id);
    items
}

/// Remove a single reminder.
pub fn delete_item(mut items: Vec<RevisionItem>, id: ItemId) -> Vec<RevisionItem> {
    items.retain(|item| item.id != id);
    items
}

/// Pending reminders scheduled for `today`.
pub fn due_today(items: &[RevisionItem], today: NaiveDate) -> Vec<&RevisionItem> {
    items
        .iter()
        .filter(|item| !item.completed && item.scheduled_date == today)
        .collect()
}

/// Pending reminders after `today`, soonest first.
pub fn upcoming(items: &[RevisionItem], today: NaiveDate) -> Vec<&RevisionItem> {
    let mut future: Vec<&RevisionItem> = items
        .iter()
        .filter(|item| !item.completed && item.scheduled_date > today)
        .collect();
    future.sort_by_key(|item| item.scheduled_date);
    future
}

/// All reminders of one cycle in stage order.
pub fn group_of(items: &[RevisionItem], group_id: Uuid) -> Vec<&RevisionItem> {
    let mut group: Vec<&RevisionItem> = items
        .iter()
        .filter(|item| item.group_id == group_id)
        .collect();
    group.sort_by_key(|item| item.stage);
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn cycle_has_four_stages_from_study_date() {
        let studied = date(2024, 1, 20);
        let cycle = create_cycle("ana", studied, "Português", "Crase");

        assert_eq!(cycle.len(), 4);
        let stages: Vec<u32> = cycle.iter().map(|r| r.stage.days()).collect();
        assert_eq!(stages, vec![1, 7, 14, 28]);
        let dates: Vec<NaiveDate> = cycle.iter().map(|r| r.scheduled_date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 21), date(2024, 1, 27), date(2024, 2, 3), date(2024, 2, 17)]
        );
        assert!(cycle.iter().all(|r| r.group_id == cycle[0].group_id));
        assert!(cycle.iter().all(|r| !r.completed && r.kind() == TaskKind::Review));
        assert!(cycle.iter().all(|r| r.studied_on == studied));
    }

    #[test]
    fn separate_cycles_get_separate_groups() {
        let a = create_cycle("ana", date(2024, 1, 1), "A", "a");
        let b = create_cycle("ana", date(2024, 1, 1), "B", "b");
        assert_ne!(a[0].group_id, b[0].group_id);
    }

    #[test]
    fn complete_touches_one_item() {
        let cycle = create_cycle("ana", date(2024, 1, 1), "Direito", "Art. 5");
        let target = cycle[1].id;
        let updated = complete(cycle, target);
        let done: Vec<bool> = updated.iter().map(|r| r.completed).collect();
        assert_eq!(done, vec![false, true, false, false]);
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let cycle = create_cycle("ana", date(2024, 1, 1), "Direito", "Art. 5");
        let before = cycle.clone();
        let after = complete(cycle, Uuid::new_v4());
        assert_eq!(after, before);
        let after = delete_item(after, Uuid::new_v4());
        assert_eq!(after, before);
    }

    #[test]
    fn delete_group_removes_completed_stages_too() {
        let mut items = create_cycle("ana", date(2024, 1, 1), "A", "a");
        let other = create_cycle("ana", date(2024, 1, 1), "B", "b");
        let group = items[0].group_id;
        let first = items[0].id;
        items.extend(other.clone());
        let items = complete(items, first);

        let remaining = delete_group(items, group);
        assert_eq!(remaining, other);
    }

    #[test]
    fn delete_item_removes_one_stage() {
        let cycle = create_cycle("ana", date(2024, 1, 1), "A", "a");
        let target = cycle[2].id;
        let remaining = delete_item(cycle, target);
        assert_eq!(remaining.len(), 3);
        assert!(remaining.iter().all(|r| r.id != target));
    }

    #[test]
    fn due_today_excludes_completed() {
        let cycle = create_cycle("ana", date(2024, 1, 1), "A", "a");
        let today = date(2024, 1, 8);
        assert_eq!(due_today(&cycle, today).len(), 1);
        assert_eq!(due_today(&cycle, today)[0].stage, RevisionStage::OneWeek);

        let target = cycle[1].id;
        let cycle = complete(cycle, target);
        assert!(due_today(&cycle, today).is_empty());
    }

    #[test]
    fn past_reminders_are_neither_today_nor_upcoming() {
        let cycle = create_cycle("ana", date(2024, 1, 1), "A", "a");
        let today = date(2024, 1, 10);
        assert!(due_today(&cycle, today).is_empty());
        let next: Vec<RevisionStage> = upcoming(&cycle, today).iter().map(|r| r.stage).collect();
        assert_eq!(next, vec![RevisionStage::TwoWeeks, RevisionStage::FourWeeks]);
    }

    #[test]
    fn upcoming_sorts_across_cycles() {
        let mut items = create_cycle("ana", date(2024, 1, 10), "Late", "x");
        items.extend(create_cycle("ana", date(2024, 1, 1), "Early", "y"));
        let dates: Vec<NaiveDate> = upcoming(&items, date(2024, 1, 1))
            .iter()
            .map(|r| r.scheduled_date)
            .collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(dates.len(), 8);
    }

    #[test]
    fn group_of_returns_stage_order() {
        let mut items = create_cycle("ana", date(2024, 1, 1), "A", "a");
        items.reverse();
        let group = items[0].group_id;
        let stages: Vec<RevisionStage> = group_of(&items, group).iter().map(|r| r.stage).collect();
        assert_eq!(stages, RevisionStage::ALL.to_vec());
    }

    #[test]
    fn stage_serializes_as_day_count() {
        assert_eq!(serde_json::to_string(&RevisionStage::TwoWeeks).unwrap(), "14");
        let stage: RevisionStage = serde_json::from_str("28").unwrap();
        assert_eq!(stage, RevisionStage::FourWeeks);
        assert!(serde_json::from_str::<RevisionStage>("3").is_err());
    }
}
