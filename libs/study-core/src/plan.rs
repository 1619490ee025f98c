//! A learner's assigned study plan and materialization of generated plans.
//!
//! Plans arrive from an external generator as proposals with relative day
//! offsets, optionally accompanied by recurring extra-goal templates. Both are
//! turned into dated tasks anchored at the plan's start date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::{add_days, weekday_label, Weekday};
use crate::error::{Result, ScheduleError};
use crate::tasks::{clear_all, reset_preserving_incomplete};
use crate::types::{ContentRef, Due, ScheduledItem, TaskKind};

/// Description used when an extra goal has none.
pub const DEFAULT_EXTRA_GOAL_DESCRIPTION: &str = "Meta Extra Recorrente";

/// Furthest day a generated plan may reach from its start date.
pub const MAX_DAY_OFFSET: u32 = 365;

/// A note from the mentor for a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMessage {
    pub id: Uuid,
    pub date: NaiveDate,
    pub content: String,
    pub is_read: bool,
}

/// All assigned work of one learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub owner_id: String,
    pub owner_name: String,
    pub is_active: bool,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub tasks: Vec<ScheduledItem>,
    #[serde(default)]
    pub messages: Vec<DailyMessage>,
}

impl Plan {
    /// Empty active plan starting `today`.
    pub fn new(
        owner_id: impl Into<String>,
        owner_name: impl Into<String>,
        today: NaiveDate,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            owner_name: owner_name.into(),
            is_active: true,
            start_date: today,
            tasks: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn message_for(&self, day: NaiveDate) -> Option<&DailyMessage> {
        self.messages.iter().find(|message| message.date == day)
    }

    /// Restart from `today` keeping only unfinished tasks. The plan now starts
    /// `today`; messages are dropped.
    pub fn reset_preserving_incomplete(self, today: NaiveDate) -> Self {
        Self {
            start_date: today,
            tasks: reset_preserving_incomplete(self.tasks, today),
            messages: Vec::new(),
            ..self
        }
    }

    /// Remove all tasks and messages.
    pub fn clear(self) -> Self {
        Self {
            tasks: clear_all(self.tasks),
            messages: Vec::new(),
            ..self
        }
    }

    /// Append a generated plan after the existing tasks: proposals first, then
    /// extra goals over the same date range.
    ///
    /// Nothing is appended when any offset exceeds [`MAX_DAY_OFFSET`].
    pub fn apply_generated(
        mut self,
        start: NaiveDate,
        proposals: &[PlanProposal],
        extra_goals: &[ExtraGoalTemplate],
    ) -> Result<Self> {
        let generated = materialize_proposals(&self.owner_id, start, proposals)?;
        let span = plan_span(proposals);
        let extras = materialize_extra_goals(&self.owner_id, start, span, extra_goals)?;
        tracing::info!(
            owner = %self.owner_id,
            proposals = generated.len(),
            extras = extras.len(),
            "generated plan applied"
        );
        self.tasks.extend(generated);
        self.tasks.extend(extras);
        Ok(self)
    }
}

/// One unit of work proposed by the plan generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanProposal {
    /// Days after the plan start; 0 is the start date itself.
    pub day_offset: u32,
    pub subject: String,
    pub topic: String,
    #[serde(default)]
    pub kind: TaskKind,
    #[serde(default)]
    pub instructions: String,
}

/// How often an extra goal repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Custom,
}

/// A recurring goal added on top of a generated plan (physical training,
/// meditation, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraGoalTemplate {
    pub title: String,
    #[serde(default = "extra_goal_kind")]
    pub kind: TaskKind,
    #[serde(default)]
    pub description: String,
    pub frequency: Frequency,
    #[serde(default)]
    pub selected_weekdays: Vec<Weekday>,
}

fn extra_goal_kind() -> TaskKind {
    TaskKind::ExtraGoal
}

impl ExtraGoalTemplate {
    pub fn applies_on(&self, day: NaiveDate) -> bool {
        match self.frequency {
            Frequency::Daily => true,
            Frequency::Custom => self.selected_weekdays.contains(&weekday_label(day)),
        }
    }
}

/// Highest day offset of a plan; 0 for an empty one.
pub fn plan_span(proposals: &[PlanProposal]) -> u32 {
    proposals.iter().map(|p| p.day_offset).max().unwrap_or(0)
}

fn check_offset(offset: u32) -> Result<()> {
    if offset > MAX_DAY_OFFSET {
        return Err(ScheduleError::InvalidOffset(offset));
    }
    Ok(())
}

/// Last day a generated plan covers.
pub fn plan_end_date(start: NaiveDate, proposals: &[PlanProposal]) -> Result<NaiveDate> {
    let span = plan_span(proposals);
    check_offset(span)?;
    Ok(add_days(start, span as i64))
}

/// One dated task per proposal. Offsets past [`MAX_DAY_OFFSET`] are rejected.
pub fn materialize_proposals(
    owner_id: &str,
    start: NaiveDate,
    proposals: &[PlanProposal],
) -> Result<Vec<ScheduledItem>> {
    check_offset(plan_span(proposals))?;
    let items = proposals
        .iter()
        .map(|proposal| {
            let due = add_days(start, proposal.day_offset as i64);
            ScheduledItem::new(
                owner_id,
                ContentRef::topic(&proposal.subject, &proposal.topic),
                proposal.kind,
                format!("{} - {}", proposal.topic, proposal.instructions),
                Due::Dated(due),
            )
        })
        .collect();
    Ok(items)
}

/// Dated tasks for every template on every matching day of `0..=span`.
pub fn materialize_extra_goals(
    owner_id: &str,
    start: NaiveDate,
    span: u32,
    templates: &[ExtraGoalTemplate],
) -> Result<Vec<ScheduledItem>> {
    check_offset(span)?;
    let mut items = Vec::new();
    for offset in 0..=span {
        let day = add_days(start, offset as i64);
        for template in templates.iter().filter(|t| t.applies_on(day)) {
            let description = if template.description.is_empty() {
                DEFAULT_EXTRA_GOAL_DESCRIPTION
            } else {
                template.description.as_str()
            };
            items.push(ScheduledItem::new(
                owner_id,
                ContentRef::subject(&template.title),
                template.kind,
                description,
                Due::Dated(day),
            ));
        }
    }
    Ok(items)
}
