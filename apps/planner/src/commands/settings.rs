//! Settings commands.

use study_core::Settings;

use super::Result;
use crate::db::{keys, RecordStore};

/// Learner's settings, or the defaults if none were saved.
pub fn load_settings<S: RecordStore>(store: &S, owner_id: &str) -> Result<Settings> {
    Ok(store.get_or_default(owner_id, keys::SETTINGS)?)
}

/// Validate and save settings.
pub fn save_settings<S: RecordStore>(store: &S, owner_id: &str, settings: &Settings) -> Result<()> {
    settings.validate()?;
    store.set(owner_id, keys::SETTINGS, settings)?;
    Ok(())
}
