pub mod commands;
pub mod config;
pub mod db;

use anyhow::Context;
use study_core::calendar::{self, iso_date};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::SqliteStore;

/// Print today's agenda for the configured learner.
pub fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating data directory {}", parent.display()))?;
    }
    tracing::info!(path = %config.db_path.display(), "opening database");
    let store = SqliteStore::open(&config.db_path)?;
    let owner = config.owner_id.as_str();

    let settings = commands::load_settings(&store, owner)?;
    let reset_hour = config.daily_reset_hour.unwrap_or(settings.daily_reset_hour);
    let today = calendar::today(reset_hour);
    commands::init_plan(&store, owner, owner, today)?;

    println!("{} ({})", calendar::weekday_label(today), iso_date(today));

    let revisions = commands::revision_agenda(&store, owner, today)?;
    println!("\nRevisões de hoje: {}", revisions.today.len());
    for item in &revisions.today {
        let topic = item.content.topic.as_deref().unwrap_or("");
        println!("  [ ] {} - {} ({} dias)", item.content.subject, topic, item.stage.days());
    }

    let view = commands::today_tasks(&store, owner, today)?;
    println!(
        "\nTarefas de hoje: {}/{} ({}%)",
        view.progress.completed, view.progress.total, view.progress.percent
    );
    if let Some(message) = &view.message {
        println!("  > {}", message.content);
    }
    for item in &view.items {
        let mark = if item.completed { "x" } else { " " };
        println!("  [{mark}] {}", item.description);
    }

    let overdue = commands::overdue_tasks(&store, owner, today)?;
    if !overdue.is_empty() {
        println!("\nAtrasadas: {}", overdue.len());
        for item in &overdue {
            let date = item.due.date().map(iso_date).unwrap_or_default();
            println!("  [ ] {date} {}", item.description);
        }
    }

    let streak = commands::get_streak(&store, owner)?;
    println!("\nSequência: {} dia(s)", streak.days);
    Ok(())
}
