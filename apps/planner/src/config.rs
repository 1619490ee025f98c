//! Process configuration read from the environment.

use std::path::PathBuf;

use anyhow::Context;

/// Runtime configuration of the planner binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub owner_id: String,
    /// Overrides the stored `daily_reset_hour` setting when present.
    pub daily_reset_hour: Option<u32>,
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("study-planner")
        .join("planner.db")
}

impl Config {
    /// Load from `STUDY_*` variables, after reading a `.env` file if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let db_path = lookup("STUDY_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);
        let owner_id = lookup("STUDY_OWNER_ID").unwrap_or_else(|| "local".to_string());
        let daily_reset_hour = lookup("STUDY_DAILY_RESET_HOUR")
            .map(|raw| {
                raw.trim()
                    .parse::<u32>()
                    .with_context(|| format!("STUDY_DAILY_RESET_HOUR is not an hour: {raw}"))
            })
            .transpose()?;
        if let Some(hour) = daily_reset_hour {
            anyhow::ensure!(hour <= 23, "STUDY_DAILY_RESET_HOUR out of range: {hour}");
        }

        Ok(Self {
            db_path,
            owner_id,
            daily_reset_hour,
        })
    }
}
