//! Lifecycle of daily assignable tasks.
//!
//! A task is `pending` until the learner confirms it, then `completed`.
//! Completion always goes through a confirmation with two answers: finish, or
//! defer. Deferring still credits today's effort and spawns one continuation
//! task for tomorrow. A completed task can be reopened directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::{add_days, week_dates, Weekday};
use crate::settings::Settings;
use crate::types::{Due, ItemId, ScheduledItem};

/// Appended to the description of a continuation task.
pub const CONTINUATION_SUFFIX: &str = " (Reforço/Continuação)";

/// The learner's answer to the completion confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionIntent {
    /// Done with this content.
    Finish,
    /// Needs more time: credit today, continue tomorrow.
    Defer,
}

/// Why a requested transition did not change anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unchanged {
    NotFound,
    AlreadyCompleted,
    AlreadyPending,
}

/// Result of a lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum Outcome {
    Completed,
    Deferred { continuation: ItemId },
    Reopened,
    Unchanged { reason: Unchanged },
}

/// Updated collection plus what happened to it.
#[derive(Debug, Clone)]
pub struct Transition {
    pub items: Vec<ScheduledItem>,
    pub outcome: Outcome,
}

impl Transition {
    fn unchanged(items: Vec<ScheduledItem>, reason: Unchanged) -> Self {
        Self {
            items,
            outcome: Outcome::Unchanged { reason },
        }
    }
}

/// A pending completion waiting for the learner's answer. Resolving it
/// consumes it, so one confirmation can only complete a task once.
#[derive(Debug, PartialEq, Eq)]
pub struct CompletionRequest {
    item_id: ItemId,
}

impl CompletionRequest {
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn resolve(
        self,
        lifecycle: &TaskLifecycle,
        items: Vec<ScheduledItem>,
        intent: CompletionIntent,
        today: NaiveDate,
    ) -> Transition {
        lifecycle.complete(items, self.item_id, intent, today)
    }
}

/// What a click on a task leads to.
#[derive(Debug)]
pub enum Click {
    /// The task was completed and is now pending again.
    Reopened(Vec<ScheduledItem>),
    /// The task is pending; ask the learner how it went.
    Confirm(CompletionRequest),
    Missing,
}

/// Handle a click on a task: completed tasks reopen without confirmation,
/// pending tasks open the confirmation.
pub fn click(items: &[ScheduledItem], id: ItemId) -> Click {
    match items.iter().find(|item| item.id == id) {
        None => Click::Missing,
        Some(item) if item.completed => Click::Reopened(reopen(items.to_vec(), id).items),
        Some(item) => Click::Confirm(CompletionRequest { item_id: item.id }),
    }
}

/// Completion transitions, configured from the learner's settings.
#[derive(Debug, Clone, Default)]
pub struct TaskLifecycle {
    link_continuations: bool,
}

impl TaskLifecycle {
    pub fn new(link_continuations: bool) -> Self {
        Self { link_continuations }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.link_continuations)
    }

    /// Complete a pending task.
    ///
    /// `Defer` additionally appends one continuation dated the day after
    /// `today`. Completing a task that is already completed is rejected, which
    /// keeps a repeated confirmation from spawning duplicate continuations.
    pub fn complete(
        &self,
        mut items: Vec<ScheduledItem>,
        id: ItemId,
        intent: CompletionIntent,
        today: NaiveDate,
    ) -> Transition {
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(%id, "complete: task not found");
            return Transition::unchanged(items, Unchanged::NotFound);
        };
        if item.completed {
            tracing::warn!(%id, ?intent, "complete: task already completed");
            return Transition::unchanged(items, Unchanged::AlreadyCompleted);
        }
        item.completed = true;

        match intent {
            CompletionIntent::Finish => Transition {
                items,
                outcome: Outcome::Completed,
            },
            CompletionIntent::Defer => {
                let continuation = self.continuation_of(item, today);
                let continuation_id = continuation.id;
                tracing::info!(%id, continuation = %continuation_id, "task deferred to tomorrow");
                items.push(continuation);
                Transition {
                    items,
                    outcome: Outcome::Deferred {
                        continuation: continuation_id,
                    },
                }
            }
        }
    }

    fn continuation_of(&self, original: &ScheduledItem, today: NaiveDate) -> ScheduledItem {
        ScheduledItem {
            id: Uuid::new_v4(),
            owner_id: original.owner_id.clone(),
            content: original.content.clone(),
            kind: original.kind,
            description: format!("{}{}", original.description, CONTINUATION_SUFFIX),
            due: Due::Dated(add_days(today, 1)),
            completed: false,
            continues_from: self.link_continuations.then_some(original.id),
        }
    }
}

/// Put a completed task back to pending. Any continuation it spawned stays.
pub fn reopen(mut items: Vec<ScheduledItem>, id: ItemId) -> Transition {
    let reason = match items.iter_mut().find(|item| item.id == id) {
        Some(item) if item.completed => {
            item.completed = false;
            return Transition {
                items,
                outcome: Outcome::Reopened,
            };
        }
        Some(_) => Unchanged::AlreadyPending,
        None => Unchanged::NotFound,
    };
    tracing::debug!(%id, ?reason, "reopen: nothing to do");
    Transition::unchanged(items, reason)
}

/// Remove one task. Continuations it spawned are separate tasks and stay.
pub fn delete_item(mut items: Vec<ScheduledItem>, id: ItemId) -> Vec<ScheduledItem> {
    let before = items.len();
    items.retain(|item| item.id != id);
    if items.len() == before {
        tracing::debug!(%id, "delete: task not found");
    }
    items
}

/// Everything on today's agenda, completed or not: dated tasks on their date,
/// recurring tasks on their weekday.
pub fn todays_items(items: &[ScheduledItem], today: NaiveDate) -> Vec<&ScheduledItem> {
    items.iter().filter(|item| item.due.falls_on(today)).collect()
}

/// Pending tasks on today's agenda.
pub fn due_today(items: &[ScheduledItem], today: NaiveDate) -> Vec<&ScheduledItem> {
    items
        .iter()
        .filter(|item| item.is_pending() && item.due.falls_on(today))
        .collect()
}

/// Pending dated tasks from before today, oldest first. Recurring tasks are
/// never overdue.
pub fn overdue(items: &[ScheduledItem], today: NaiveDate) -> Vec<&ScheduledItem> {
    let mut late: Vec<&ScheduledItem> = items
        .iter()
        .filter(|item| item.is_pending() && item.due.is_past(today))
        .collect();
    late.sort_by_key(|item| item.due.date());
    late
}

/// Pending dated tasks after today, soonest first.
pub fn upcoming(items: &[ScheduledItem], today: NaiveDate) -> Vec<&ScheduledItem> {
    let mut next: Vec<&ScheduledItem> = items
        .iter()
        .filter(|item| item.is_pending() && item.due.date().is_some_and(|date| date > today))
        .collect();
    next.sort_by_key(|item| item.due.date());
    next
}

/// Completion of today's agenda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

pub fn daily_progress(items: &[ScheduledItem], today: NaiveDate) -> DailyProgress {
    let agenda = todays_items(items, today);
    let total = agenda.len();
    let completed = agenda.iter().filter(|item| item.completed).count();
    let percent = if total == 0 {
        0
    } else {
        (completed as f64 * 100.0 / total as f64).round() as u32
    };
    DailyProgress {
        completed,
        total,
        percent,
    }
}

/// One column of the week view.
#[derive(Debug, Clone, PartialEq)]
pub struct DayAgenda<'a> {
    pub weekday: Weekday,
    pub date: NaiveDate,
    pub items: Vec<&'a ScheduledItem>,
}

/// Agenda for each day of the Monday-first week containing `today`.
pub fn week_agenda(items: &[ScheduledItem], today: NaiveDate) -> Vec<DayAgenda<'_>> {
    week_dates(today)
        .into_iter()
        .map(|(weekday, date)| DayAgenda {
            weekday,
            date,
            items: todays_items(items, date),
        })
        .collect()
}

/// Restart the schedule from `today`: completed tasks are dropped and the
/// pending ones, in their current order, land on consecutive days.
pub fn reset_preserving_incomplete(
    items: Vec<ScheduledItem>,
    today: NaiveDate,
) -> Vec<ScheduledItem> {
    let rescheduled: Vec<ScheduledItem> = items
        .into_iter()
        .filter(ScheduledItem::is_pending)
        .enumerate()
        .map(|(offset, mut item)| {
            item.due = Due::Dated(add_days(today, offset as i64));
            item
        })
        .collect();
    tracing::info!(kept = rescheduled.len(), "schedule reset from {today}");
    rescheduled
}

/// Drop every task.
pub fn clear_all(items: Vec<ScheduledItem>) -> Vec<ScheduledItem> {
    tracing::info!(removed = items.len(), "schedule cleared");
    Vec::new()
}
