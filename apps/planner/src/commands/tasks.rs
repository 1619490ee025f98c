//! Daily task commands over the learner's plan.

use chrono::NaiveDate;
use study_core::plan::{plan_end_date, ExtraGoalTemplate, Plan, PlanProposal};
use study_core::tasks::{self, Click, CompletionIntent, CompletionRequest, DailyProgress, Outcome};
use study_core::{DailyMessage, ItemId, ScheduledItem, TaskLifecycle};

use super::settings::load_settings;
use super::Result;
use crate::db::{keys, RecordStore};

/// Result of clicking a task.
///
/// Not serialized: a [`CompletionRequest`] is an in-process handle that the
/// caller holds while it asks finish or defer, then hands to [`confirm_task`].
#[derive(Debug)]
pub enum ClickResponse {
    /// The task was completed and has been reopened.
    Reopened,
    /// The task is pending and waits for the learner's answer.
    Confirm(CompletionRequest),
    Missing,
}

#[derive(Debug, serde::Serialize)]
pub struct TodayView {
    pub items: Vec<ScheduledItem>,
    pub progress: DailyProgress,
    pub message: Option<DailyMessage>,
}

fn load_plan<S: RecordStore>(store: &S, owner_id: &str, today: NaiveDate) -> Result<Plan> {
    Ok(store
        .get(owner_id, keys::PLAN)?
        .unwrap_or_else(|| Plan::new(owner_id, owner_id, today)))
}

fn save_plan<S: RecordStore>(store: &S, owner_id: &str, plan: &Plan) -> Result<()> {
    Ok(store.set(owner_id, keys::PLAN, plan)?)
}

/// Create an empty plan for a learner who has none yet.
pub fn init_plan<S: RecordStore>(
    store: &S,
    owner_id: &str,
    owner_name: &str,
    today: NaiveDate,
) -> Result<Plan> {
    if let Some(plan) = store.get::<Plan>(owner_id, keys::PLAN)? {
        return Ok(plan);
    }
    let plan = Plan::new(owner_id, owner_name, today);
    save_plan(store, owner_id, &plan)?;
    tracing::info!(owner_id, "plan created");
    Ok(plan)
}

/// Click on a task: reopen it if completed, otherwise ask for confirmation.
pub fn click_task<S: RecordStore>(
    store: &S,
    owner_id: &str,
    id: ItemId,
    today: NaiveDate,
) -> Result<ClickResponse> {
    let mut plan = load_plan(store, owner_id, today)?;
    match tasks::click(&plan.tasks, id) {
        Click::Reopened(items) => {
            plan.tasks = items;
            save_plan(store, owner_id, &plan)?;
            Ok(ClickResponse::Reopened)
        }
        Click::Confirm(request) => Ok(ClickResponse::Confirm(request)),
        Click::Missing => Ok(ClickResponse::Missing),
    }
}

/// Apply the learner's answer to a completion confirmation.
pub fn confirm_task<S: RecordStore>(
    store: &S,
    owner_id: &str,
    request: CompletionRequest,
    intent: CompletionIntent,
    today: NaiveDate,
) -> Result<Outcome> {
    let settings = load_settings(store, owner_id)?;
    let lifecycle = TaskLifecycle::from_settings(&settings);
    let mut plan = load_plan(store, owner_id, today)?;

    let transition = request.resolve(&lifecycle, plan.tasks, intent, today);
    plan.tasks = transition.items;
    if !matches!(transition.outcome, Outcome::Unchanged { .. }) {
        save_plan(store, owner_id, &plan)?;
    }
    tracing::info!(owner_id, ?intent, outcome = ?transition.outcome, "task confirmed");
    Ok(transition.outcome)
}

pub fn reopen_task<S: RecordStore>(
    store: &S,
    owner_id: &str,
    id: ItemId,
    today: NaiveDate,
) -> Result<Outcome> {
    let mut plan = load_plan(store, owner_id, today)?;
    let transition = tasks::reopen(plan.tasks, id);
    plan.tasks = transition.items;
    if transition.outcome == Outcome::Reopened {
        save_plan(store, owner_id, &plan)?;
    }
    Ok(transition.outcome)
}

/// Remove one task. Continuations it spawned stay; an unknown id is a no-op.
pub fn delete_task<S: RecordStore>(
    store: &S,
    owner_id: &str,
    id: ItemId,
    today: NaiveDate,
) -> Result<()> {
    let mut plan = load_plan(store, owner_id, today)?;
    plan.tasks = tasks::delete_item(plan.tasks, id);
    save_plan(store, owner_id, &plan)
}

/// Today's agenda with its progress and the mentor's note for the day.
pub fn today_tasks<S: RecordStore>(
    store: &S,
    owner_id: &str,
    today: NaiveDate,
) -> Result<TodayView> {
    let plan = load_plan(store, owner_id, today)?;
    Ok(TodayView {
        items: tasks::todays_items(&plan.tasks, today).into_iter().cloned().collect(),
        progress: tasks::daily_progress(&plan.tasks, today),
        message: plan.message_for(today).cloned(),
    })
}

/// Pending dated tasks from before today, oldest first.
pub fn overdue_tasks<S: RecordStore>(
    store: &S,
    owner_id: &str,
    today: NaiveDate,
) -> Result<Vec<ScheduledItem>> {
    let plan = load_plan(store, owner_id, today)?;
    Ok(tasks::overdue(&plan.tasks, today).into_iter().cloned().collect())
}

/// Reschedule unfinished tasks onto consecutive days from today.
pub fn reset_plan<S: RecordStore>(
    store: &S,
    owner_id: &str,
    today: NaiveDate,
) -> Result<Vec<ScheduledItem>> {
    let plan = load_plan(store, owner_id, today)?.reset_preserving_incomplete(today);
    save_plan(store, owner_id, &plan)?;
    Ok(plan.tasks)
}

pub fn clear_plan<S: RecordStore>(store: &S, owner_id: &str, today: NaiveDate) -> Result<()> {
    let plan = load_plan(store, owner_id, today)?.clear();
    save_plan(store, owner_id, &plan)
}

/// Materialize a generated plan starting at `start` and return its last day.
///
/// A proposal beyond the planning horizon rejects the whole plan and leaves
/// the stored one untouched.
pub fn apply_generated_plan<S: RecordStore>(
    store: &S,
    owner_id: &str,
    start: NaiveDate,
    proposals: &[PlanProposal],
    extra_goals: &[ExtraGoalTemplate],
) -> Result<NaiveDate> {
    let end = plan_end_date(start, proposals)?;
    let plan = load_plan(store, owner_id, start)?.apply_generated(start, proposals, extra_goals)?;
    save_plan(store, owner_id, &plan)?;
    Ok(end)
}
