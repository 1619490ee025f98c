//! Shared setup for planner integration tests.
//!
//! Every test gets its own in-memory SQLite store, so tests never see each
//! other's documents.

#![allow(dead_code)]

pub mod fixtures;

use chrono::NaiveDate;
use study_core::{Plan, ScheduledItem};
use study_planner::db::{keys, RecordStore, SqliteStore};

pub const OWNER: &str = "ana";

pub struct TestContext {
    pub store: SqliteStore,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            store: SqliteStore::open_in_memory().expect("in-memory store"),
        }
    }

    /// Store a plan holding exactly `tasks`.
    pub fn seed_tasks(&self, today: NaiveDate, tasks: Vec<ScheduledItem>) {
        let mut plan = Plan::new(OWNER, "Ana", today);
        plan.tasks = tasks;
        self.store.set(OWNER, keys::PLAN, &plan).expect("seed plan");
    }

    pub fn plan(&self) -> Plan {
        self.store
            .get(OWNER, keys::PLAN)
            .expect("read plan")
            .expect("plan exists")
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
