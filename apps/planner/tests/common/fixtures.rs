//! Factory functions for test data.

use chrono::NaiveDate;
use study_core::calendar::Weekday;
use study_core::{
    ContentRef, Due, ExtraGoalTemplate, Frequency, PlanProposal, ScheduledItem, TaskKind,
};

use super::OWNER;

/// A pending lesson due on `day`.
pub fn dated_task(description: &str, day: NaiveDate) -> ScheduledItem {
    ScheduledItem::new(
        OWNER,
        ContentRef::topic("Matemática", description),
        TaskKind::Lesson,
        description,
        Due::Dated(day),
    )
}

/// A pending drill repeating every `weekday`.
pub fn recurring_task(description: &str, weekday: Weekday) -> ScheduledItem {
    ScheduledItem::new(
        OWNER,
        ContentRef::subject("Português"),
        TaskKind::Drill,
        description,
        Due::Recurring(weekday),
    )
}

pub fn completed(mut item: ScheduledItem) -> ScheduledItem {
    item.completed = true;
    item
}

pub fn proposal(day_offset: u32, topic: &str) -> PlanProposal {
    PlanProposal {
        day_offset,
        subject: "Física".to_string(),
        topic: topic.to_string(),
        kind: TaskKind::Lesson,
        instructions: "Ler capítulo".to_string(),
    }
}

pub fn extra_goal(title: &str, weekdays: &[Weekday]) -> ExtraGoalTemplate {
    ExtraGoalTemplate {
        title: title.to_string(),
        kind: TaskKind::ExtraGoal,
        description: String::new(),
        frequency: if weekdays.is_empty() {
            Frequency::Daily
        } else {
            Frequency::Custom
        },
        selected_weekdays: weekdays.to_vec(),
    }
}
