//! Local SQLite record store.

pub mod error;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use repository::{keys, RecordStore, SqliteStore};
