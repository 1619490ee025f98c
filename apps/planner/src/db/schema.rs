//! SQLite schema definitions.

/// Current schema version for migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema for the local record store.
///
/// Each learner's scheduling state lives in a handful of JSON documents, one
/// row per (owner, key). Writes replace the whole document.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS user_progress (
    owner_id TEXT NOT NULL,
    key TEXT NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    PRIMARY KEY (owner_id, key)
);

CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL
);
"#;

/// Record the schema version on first open.
pub const INIT_SCHEMA_VERSION: &str = r#"
INSERT OR IGNORE INTO schema_version (id, version) VALUES (1, 1);
"#;
