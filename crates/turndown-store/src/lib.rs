// SQLite session store
// Two append-mostly session collections plus the room/task catalog

mod db;
mod error;
mod queries;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
